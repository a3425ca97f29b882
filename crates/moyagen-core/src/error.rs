use std::fmt;

use thiserror::Error;

/// Failed to read the normalized API description.
#[derive(Debug, Error)]
pub enum DescriptionError {
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A model-derivation error attributed to one operation or schema.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("operation `{id}`: identifier sanitizes to an empty string")]
    EmptyCaseName { id: String },

    #[error(
        "tag `{tag}`: operations `{first}` and `{second}` both sanitize to case `{case_name}`"
    )]
    DuplicateCaseName {
        tag: String,
        first: String,
        second: String,
        case_name: String,
    },

    #[error("operation `{id}`: parameter `{name}` sanitizes to an empty string")]
    EmptyParameterName { id: String, name: String },

    #[error("operation `{id}`: unresolved type reference `{reference}`")]
    UnresolvedType { id: String, reference: String },

    #[error("schema `{title}`: title sanitizes to an empty string")]
    EmptySchemaName { title: String },

    #[error("schema titles `{first}` and `{second}` both sanitize to `{name}`")]
    DuplicateSchemaName {
        first: String,
        second: String,
        name: String,
    },

    #[error("tags `{first}` and `{second}` both map to unit `{name}`")]
    DuplicateUnitName {
        first: String,
        second: String,
        name: String,
    },
}

/// Every model error found in one generation batch. Derivation keeps
/// going past the first bad entity so the report covers the whole
/// input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateError {
    pub errors: Vec<ModelError>,
}

impl GenerateError {
    pub fn new(errors: Vec<ModelError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "generation failed with {} error(s):", self.errors.len())?;
        for err in &self.errors {
            writeln!(f, "  - {err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for GenerateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_error_lists_every_entity() {
        let err = GenerateError::new(vec![
            ModelError::EmptyCaseName {
                id: "///".to_string(),
            },
            ModelError::UnresolvedType {
                id: "getPet".to_string(),
                reference: "Ghost".to_string(),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("2 error(s)"));
        assert!(text.contains("`///`"));
        assert!(text.contains("`Ghost`"));
    }
}
