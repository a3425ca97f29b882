use moyagen_core::api::TypeRef;
use moyagen_core::model::{self, ModelParameter};

/// Map a type reference to Swift type text.
pub fn swift_type(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::String => "String".to_string(),
        TypeRef::Integer => "Int".to_string(),
        TypeRef::Number => "Double".to_string(),
        TypeRef::Boolean => "Bool".to_string(),
        TypeRef::File => "FileValue".to_string(),
        TypeRef::Void => "Void".to_string(),
        TypeRef::Array(inner) => format!("[{}]", swift_type(inner)),
        TypeRef::Named(name) => model::schema_name(name),
    }
}

/// Wrapper return type: the first-success type, or `Void` without one.
pub fn success_type(type_ref: Option<&TypeRef>) -> String {
    type_ref.map(swift_type).unwrap_or_else(|| "Void".to_string())
}

/// Parameter type text; optional parameters become Swift optionals.
pub fn parameter_type(param: &ModelParameter) -> String {
    let base = swift_type(&param.param_type);
    if param.required { base } else { format!("{base}?") }
}
