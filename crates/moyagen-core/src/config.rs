use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.moyagen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MoyagenConfig {
    pub input: String,
    pub output: String,
    pub options: GenOptions,
}

impl Default for MoyagenConfig {
    fn default() -> Self {
        Self {
            input: "api.yaml".to_string(),
            output: "Generated".to_string(),
            options: GenOptions::default(),
        }
    }
}

/// Generation option flags. Independent booleans; all false is the
/// most permissive/public default.
///
/// The access level is threaded through derivation and emission as a
/// value, never held in process-wide state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GenOptions {
    /// Emit `internal` instead of `public` declarations.
    pub internal_level: bool,
    /// Append the typed-response-decoding contract to the utility file.
    pub response_types: bool,
    /// The server shim takes a caller-supplied request adapter instead
    /// of a bearer access token.
    pub custom_authorization: bool,
    /// Emit the Alamofire-backed server shim file.
    pub moya_provider: bool,
}

impl GenOptions {
    pub fn access_level(&self) -> AccessLevel {
        if self.internal_level {
            AccessLevel::Internal
        } else {
            AccessLevel::Public
        }
    }
}

/// Visibility modifier on generated declarations. Affects only the
/// emitted keyword, never behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AccessLevel {
    #[default]
    Public,
    Internal,
}

impl AccessLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Public => "public",
            AccessLevel::Internal => "internal",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".moyagen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<MoyagenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: MoyagenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# moyagen configuration
input: api.yaml       # normalized API description (YAML or JSON)
output: Generated     # output directory

options:
  internal_level: false        # emit `internal` instead of `public`
  response_types: false        # append typed-response-decoding contract to Utils.swift
  custom_authorization: false  # server shim takes a RequestAdapter instead of a token
  moya_provider: false         # emit the Server.swift runtime shim
"#
}
