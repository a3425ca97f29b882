pub mod api;
pub mod config;
pub mod error;
pub mod ident;
pub mod model;

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for code generators that produce files from an API description.
pub trait CodeGenerator {
    type Error: std::error::Error;

    fn generate(
        &self,
        api: &api::ApiDescription,
        options: &config::GenOptions,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
