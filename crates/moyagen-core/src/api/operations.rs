use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::types::TypeRef;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    Head,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Head => "HEAD",
        }
    }

    /// Member name in the target client's `HTTPMethod` vocabulary.
    pub fn client_member(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Patch => "patch",
            HttpMethod::Delete => "delete",
            HttpMethod::Options => "options",
            HttpMethod::Head => "head",
        }
    }
}

/// Where in an HTTP request a parameter is transmitted.
///
/// The variant order is the primary parameter sort key; it must not be
/// rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ParameterLocation {
    Path,
    Query,
    Header,
    Body,
    FormData,
}

/// One operation argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParameterLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub param_type: TypeRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A response descriptor. An absent type means the response carries no
/// decodable value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Response {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub response_type: Option<TypeRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn default_tag() -> String {
    "default".to_string()
}

/// One API endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operation {
    /// Declared identifier; unique within a tag group and the
    /// deterministic sort key for emission.
    pub id: String,
    /// URL template, possibly containing `{name}` placeholders.
    pub path: String,
    pub method: HttpMethod,
    #[serde(default = "default_tag")]
    pub tag: String,
    /// Declared request content type, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consumes: Option<String>,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Status-code key → response. A `BTreeMap` so the lexically
    /// smallest key is always first; that response supplies the
    /// wrapper return type.
    #[serde(default)]
    pub responses: BTreeMap<String, Response>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
