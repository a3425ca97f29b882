//! Free-text tokens (operation ids, schema titles, parameter names)
//! turned into valid Swift identifiers.

/// Words that must be backtick-escaped rather than renamed, so the
/// emitted identifier stays traceable to its source spelling.
pub const RESERVED_WORDS: &[&str] = &["Type", "Self", "self", "Codable", "default", "continue"];

/// Convert an arbitrary token into a valid identifier.
///
/// Splits on spaces, drops a fully-integer first token (titles like
/// `"2 Factor Auth"` become `"FactorAuth"`), rejoins the rest with no
/// separator, then keeps only letters, digits, and underscores. Exact
/// reserved-word matches are wrapped in backticks. Symbol-only input
/// maps to an empty string; rejecting that is the caller's job.
pub fn sanitize(raw: &str) -> String {
    let mut tokens: Vec<&str> = raw.split(' ').collect();
    if let Some(first) = tokens.first() {
        if first.parse::<i64>().is_ok() {
            tokens.remove(0);
        }
    }
    let filtered: String = tokens
        .concat()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    escape_reserved(filtered)
}

/// Backtick-wrap exact reserved-word matches.
pub fn escape_reserved(name: String) -> String {
    if RESERVED_WORDS.contains(&name.as_str()) {
        format!("`{name}`")
    } else {
        name
    }
}

/// Sanitize with the first letter lowered, for case names and
/// parameter labels. Lowering could launder a reserved word into an
/// unescaped identifier (`Type` → `type`), so the capitalized form of
/// the result is checked against the reserved set as well.
pub fn sanitized_label(raw: &str) -> String {
    let name = sanitize(&lowered_first_letter(raw));
    if !name.starts_with('`') && RESERVED_WORDS.contains(&capitalized_first_letter(&name).as_str())
    {
        format!("`{name}`")
    } else {
        name
    }
}

/// Uppercase the first letter, leaving the rest untouched. Identity on
/// empty input.
pub fn capitalized_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lowercase the first letter, leaving the rest untouched. Identity on
/// empty input.
pub fn lowered_first_letter(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_identifier_passes_through() {
        assert_eq!(sanitize("getPet"), "getPet");
        assert_eq!(sanitize("snake_case_name"), "snake_case_name");
    }

    #[test]
    fn drops_leading_integer_token() {
        assert_eq!(sanitize("2 Factor Auth"), "FactorAuth");
        assert_eq!(sanitize("42"), "");
    }

    #[test]
    fn non_integer_first_token_is_kept() {
        assert_eq!(sanitize("2fa code"), "2facode");
    }

    #[test]
    fn strips_punctuation_in_place() {
        assert_eq!(sanitize("pet-store"), "petstore");
        assert_eq!(sanitize("user.name[0]"), "username0");
    }

    #[test]
    fn reserved_words_are_escaped_not_renamed() {
        assert_eq!(sanitize("Type"), "`Type`");
        assert_eq!(sanitize("self"), "`self`");
        assert_eq!(sanitize("Codable"), "`Codable`");
        assert_eq!(sanitize("default"), "`default`");
    }

    #[test]
    fn symbol_only_input_maps_to_empty() {
        assert_eq!(sanitize("///"), "");
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        for raw in ["getPet", "2 Factor Auth", "Type", "default", "pet-store", "///"] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn labels_lower_the_first_letter() {
        assert_eq!(sanitized_label("GetPet"), "getPet");
        assert_eq!(sanitized_label("petId"), "petId");
    }

    #[test]
    fn labels_escape_laundered_reserved_words() {
        assert_eq!(sanitized_label("Type"), "`type`");
        assert_eq!(sanitized_label("Self"), "`self`");
        assert_eq!(sanitized_label("default"), "`default`");
    }

    #[test]
    fn first_letter_helpers_are_total() {
        assert_eq!(capitalized_first_letter("pets"), "Pets");
        assert_eq!(lowered_first_letter("GetPet"), "getPet");
        assert_eq!(capitalized_first_letter(""), "");
        assert_eq!(lowered_first_letter(""), "");
    }
}
