use indexmap::IndexMap;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A reference into the type system: a primitive, the file/upload
/// marker, an array, or a named schema.
///
/// Serialized form is a plain string (`string`, `integer`, `file`,
/// `Pet`, ...) or `{ array: <type> }` for arrays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    String,
    Integer,
    Number,
    Boolean,
    /// File/binary payload marker; selects the upload code path.
    File,
    /// The "no value" type used for untyped responses.
    Void,
    Array(Box<TypeRef>),
    /// Reference to a named schema declared in `ApiDescription::schemas`.
    Named(String),
}

impl TypeRef {
    fn from_name(name: &str) -> Self {
        match name {
            "string" => TypeRef::String,
            "integer" | "int" => TypeRef::Integer,
            "number" | "float" | "double" => TypeRef::Number,
            "boolean" | "bool" => TypeRef::Boolean,
            "file" | "binary" => TypeRef::File,
            "void" => TypeRef::Void,
            other => TypeRef::Named(other.to_string()),
        }
    }

    fn name(&self) -> &str {
        match self {
            TypeRef::String => "string",
            TypeRef::Integer => "integer",
            TypeRef::Number => "number",
            TypeRef::Boolean => "boolean",
            TypeRef::File => "file",
            TypeRef::Void => "void",
            TypeRef::Named(name) => name,
            TypeRef::Array(_) => unreachable!("arrays serialize as maps"),
        }
    }

    pub fn is_file(&self) -> bool {
        matches!(self, TypeRef::File)
    }

    /// The schema title this type refers to, looking through arrays.
    pub fn named_schema(&self) -> Option<&str> {
        match self {
            TypeRef::Named(name) => Some(name),
            TypeRef::Array(inner) => inner.named_schema(),
            _ => None,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawTypeRef {
    Name(String),
    Array { array: Box<TypeRef> },
}

impl<'de> Deserialize<'de> for TypeRef {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawTypeRef::deserialize(deserializer)? {
            RawTypeRef::Name(name) => Ok(TypeRef::from_name(&name)),
            RawTypeRef::Array { array } => Ok(TypeRef::Array(array)),
        }
    }
}

impl Serialize for TypeRef {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TypeRef::Array(inner) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("array", inner)?;
                map.end()
            }
            other => serializer.serialize_str(other.name()),
        }
    }
}

/// A declared schema: title plus typed fields.
///
/// Rendering these into model files is a sibling concern; the core
/// only validates titles and resolves references against them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SchemaDecl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, FieldDecl>,
}

/// A field on a schema declaration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDecl {
    #[serde(rename = "type")]
    pub field_type: TypeRef,
    #[serde(default)]
    pub required: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
