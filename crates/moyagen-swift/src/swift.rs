//! A minimal Swift declaration IR and its printer.
//!
//! Emitters build these values; structural tests run against the
//! values themselves rather than against rendered text.

use moyagen_core::config::AccessLevel;

pub const INDENT: &str = "    ";

/// A closed enum declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftEnum {
    pub access: AccessLevel,
    pub name: String,
    pub cases: Vec<SwiftCase>,
}

/// One enum case with its doc comment lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftCase {
    pub doc: Vec<String>,
    pub declaration: String,
}

/// A struct with stored fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftStruct {
    pub access: AccessLevel,
    pub name: String,
    pub conformance: Option<String>,
    pub fields: Vec<SwiftField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftField {
    pub doc: Option<String>,
    pub name: String,
    pub type_name: String,
}

/// An extension block, optionally with a conformance or a generic
/// `where` constraint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftExtension {
    pub target: String,
    pub conformance: Option<String>,
    pub where_clause: Option<String>,
    pub items: Vec<ExtensionItem>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtensionItem {
    /// A verbatim comment line, e.g. `// MARK: - Sync requests`.
    Comment(String),
    Property(SwitchProperty),
    Function(SwiftFunction),
}

/// A computed property whose body is one `switch self` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchProperty {
    pub access: AccessLevel,
    pub name: String,
    pub type_name: String,
    pub arms: Vec<SwitchArm>,
}

/// One `case .pattern: return value` arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwitchArm {
    pub pattern: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwiftFunction {
    pub doc: Vec<String>,
    pub access: AccessLevel,
    pub discardable_result: bool,
    pub name: String,
    pub parameters: Vec<String>,
    pub throws: bool,
    pub return_type: Option<String>,
    pub body: Vec<String>,
}

pub fn render_enum(decl: &SwiftEnum) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{} enum {} {{", decl.access, decl.name));
    for (i, case) in decl.cases.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        for doc in &case.doc {
            lines.push(format!("{INDENT}/// {doc}"));
        }
        lines.push(format!("{INDENT}case {}", case.declaration));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

pub fn render_struct(decl: &SwiftStruct) -> String {
    let mut lines = Vec::new();
    let conformance = decl
        .conformance
        .as_ref()
        .map(|c| format!(": {c}"))
        .unwrap_or_default();
    lines.push(format!("{} struct {}{} {{", decl.access, decl.name, conformance));
    for field in &decl.fields {
        if let Some(doc) = &field.doc {
            lines.push(format!("{INDENT}/// {doc}"));
        }
        lines.push(format!(
            "{INDENT}{} let {}: {}",
            decl.access, field.name, field.type_name
        ));
    }
    lines.push("}".to_string());
    lines.join("\n")
}

pub fn render_extension(ext: &SwiftExtension) -> String {
    let mut lines = Vec::new();
    let header = match (&ext.conformance, &ext.where_clause) {
        (Some(c), _) => format!("extension {}: {} {{", ext.target, c),
        (None, Some(w)) => format!("extension {} where {} {{", ext.target, w),
        (None, None) => format!("extension {} {{", ext.target),
    };
    lines.push(header);
    for (i, item) in ext.items.iter().enumerate() {
        if i > 0 {
            lines.push(String::new());
        }
        match item {
            ExtensionItem::Comment(text) => lines.push(format!("{INDENT}{text}")),
            ExtensionItem::Property(prop) => lines.push(render_property(prop)),
            ExtensionItem::Function(func) => lines.push(render_function(func)),
        }
    }
    lines.push("}".to_string());
    lines.join("\n")
}

fn render_property(prop: &SwitchProperty) -> String {
    let mut lines = Vec::new();
    lines.push(format!(
        "{INDENT}{} var {}: {} {{",
        prop.access, prop.name, prop.type_name
    ));
    lines.push(format!("{INDENT}{INDENT}switch self {{"));
    for arm in &prop.arms {
        lines.push(format!(
            "{INDENT}{INDENT}case .{}: return {}",
            arm.pattern, arm.value
        ));
    }
    lines.push(format!("{INDENT}{INDENT}}}"));
    lines.push(format!("{INDENT}}}"));
    lines.join("\n")
}

fn render_function(func: &SwiftFunction) -> String {
    let mut lines = Vec::new();
    for doc in &func.doc {
        lines.push(format!("{INDENT}/// {doc}"));
    }
    if func.discardable_result {
        lines.push(format!("{INDENT}@discardableResult"));
    }
    let mut signature = format!(
        "{INDENT}{} func {}({})",
        func.access,
        func.name,
        func.parameters.join(", ")
    );
    if func.throws {
        signature.push_str(" throws");
    }
    if let Some(ret) = &func.return_type {
        signature.push_str(&format!(" -> {ret}"));
    }
    signature.push_str(" {");
    lines.push(signature);
    for line in &func.body {
        lines.push(format!("{INDENT}{INDENT}{line}"));
    }
    lines.push(format!("{INDENT}}}"));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_enum_with_docs() {
        let decl = SwiftEnum {
            access: AccessLevel::Public,
            name: "PetsAPI".to_string(),
            cases: vec![
                SwiftCase {
                    doc: vec!["List pets.".to_string()],
                    declaration: "listPets".to_string(),
                },
                SwiftCase {
                    doc: vec![],
                    declaration: "getPet(petId: String)".to_string(),
                },
            ],
        };
        let text = render_enum(&decl);
        assert_eq!(
            text,
            "public enum PetsAPI {\n    /// List pets.\n    case listPets\n\n    case getPet(petId: String)\n}"
        );
    }

    #[test]
    fn renders_switch_property_inside_extension() {
        let ext = SwiftExtension {
            target: "PetsAPI".to_string(),
            conformance: Some("ApiController".to_string()),
            where_clause: None,
            items: vec![ExtensionItem::Property(SwitchProperty {
                access: AccessLevel::Internal,
                name: "path".to_string(),
                type_name: "String".to_string(),
                arms: vec![SwitchArm {
                    pattern: "getPet(let petId)".to_string(),
                    value: "\"/pets/\\(petId)\"".to_string(),
                }],
            })],
        };
        let text = render_extension(&ext);
        assert!(text.starts_with("extension PetsAPI: ApiController {"));
        assert!(text.contains("    internal var path: String {"));
        assert!(text.contains("        case .getPet(let petId): return \"/pets/\\(petId)\""));
        assert!(text.ends_with("}"));
    }

    #[test]
    fn renders_function_signature() {
        let func = SwiftFunction {
            doc: vec![],
            access: AccessLevel::Public,
            discardable_result: true,
            name: "getPet".to_string(),
            parameters: vec![
                "petId: String".to_string(),
                "completion: @escaping (Result<Pet, Error>) -> Void".to_string(),
            ],
            throws: false,
            return_type: Some("Request".to_string()),
            body: vec!["return request(.getPet(petId: petId), completion: completion)".to_string()],
        };
        let text = render_function(&func);
        assert!(text.contains("@discardableResult"));
        assert!(text.contains(
            "public func getPet(petId: String, completion: @escaping (Result<Pet, Error>) -> Void) -> Request {"
        ));
    }

    #[test]
    fn renders_where_clause_extension() {
        let ext = SwiftExtension {
            target: "Server".to_string(),
            conformance: None,
            where_clause: Some("Target == PetsAPI".to_string()),
            items: vec![ExtensionItem::Comment("// MARK: - Sync requests".to_string())],
        };
        let text = render_extension(&ext);
        assert!(text.starts_with("extension Server where Target == PetsAPI {"));
        assert!(text.contains("    // MARK: - Sync requests"));
    }

    #[test]
    fn renders_struct_fields() {
        let decl = SwiftStruct {
            access: AccessLevel::Public,
            name: "Pet".to_string(),
            conformance: Some("Codable".to_string()),
            fields: vec![SwiftField {
                doc: None,
                name: "name".to_string(),
                type_name: "String?".to_string(),
            }],
        };
        let text = render_struct(&decl);
        assert_eq!(
            text,
            "public struct Pet: Codable {\n    public let name: String?\n}"
        );
    }
}
