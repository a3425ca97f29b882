pub mod operations;
pub mod types;

pub use operations::*;
pub use types::*;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DescriptionError;

/// The normalized API description consumed from the external schema
/// processor. Parsing a raw OpenAPI/Swagger document into this shape
/// is owned by that processor; this is the generator's input boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiDescription {
    #[serde(default)]
    pub info: Option<ApiInfo>,
    /// Schema title → type descriptor. Insertion order is preserved on
    /// input; every emission boundary applies its own sort key.
    #[serde(default)]
    pub schemas: IndexMap<String, SchemaDecl>,
    #[serde(default)]
    pub operations: Vec<Operation>,
}

/// API metadata, used only for documentation output.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiInfo {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl ApiDescription {
    pub fn from_yaml(content: &str) -> Result<Self, DescriptionError> {
        Ok(serde_yaml_ng::from_str(content)?)
    }

    pub fn from_json(content: &str) -> Result<Self, DescriptionError> {
        Ok(serde_json::from_str(content)?)
    }
}
