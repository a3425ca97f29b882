//! Per-operation model derivation and tag grouping.
//!
//! Each operation's model is a pure function of its own record; the
//! only cross-operation work is duplicate detection and the final
//! deterministic sort.

use heck::ToUpperCamelCase;
use indexmap::IndexMap;
use serde::Serialize;
use std::collections::HashMap;

use crate::api::{
    ApiDescription, HttpMethod, Operation, Parameter, ParameterLocation, SchemaDecl, TypeRef,
};
use crate::error::{GenerateError, ModelError};
use crate::ident;

/// The chosen serialization strategy for an operation's non-path
/// parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Encoding {
    /// Body-style (JSON) encoding.
    Json,
    /// Form/URL encoding.
    Url,
    /// Multipart/file upload.
    Multipart,
}

impl Encoding {
    /// Decision table over the parameter set. File parameters force
    /// multipart; form parameters take the body-style branch; otherwise
    /// the four body/query partitions decide.
    pub fn choose(parameters: &[Parameter]) -> Encoding {
        if parameters.iter().any(|p| p.param_type.is_file()) {
            return Encoding::Multipart;
        }
        if parameters
            .iter()
            .any(|p| p.location == ParameterLocation::FormData)
        {
            return Encoding::Json;
        }
        let has_body = parameters
            .iter()
            .any(|p| p.location == ParameterLocation::Body);
        let has_query = parameters
            .iter()
            .any(|p| p.location == ParameterLocation::Query);
        match (has_body, has_query) {
            (true, false) => Encoding::Json,
            (false, false) => Encoding::Json,
            (false, true) => Encoding::Url,
            (true, true) => Encoding::Url,
        }
    }

    /// Expression in the target client's `ParameterEncoding`
    /// vocabulary. That vocabulary has no multipart member; multipart
    /// transport is selected by the upload wrappers instead.
    pub fn client_expr(&self) -> &'static str {
        match self {
            Encoding::Json | Encoding::Multipart => "JSONEncoding.default",
            Encoding::Url => "URLEncoding.default",
        }
    }
}

/// One parameter after sanitizing and sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelParameter {
    /// Sanitized identifier used in declarations, patterns, and call
    /// sites.
    pub label: String,
    /// Raw declared name, kept for path placeholder lookup.
    pub original_name: String,
    pub location: ParameterLocation,
    pub required: bool,
    #[serde(rename = "type")]
    pub param_type: TypeRef,
}

/// Everything the emission engine needs for one operation, derived
/// independently of every other operation.
#[derive(Debug, Clone, Serialize)]
pub struct OperationModel {
    pub id: String,
    pub case_name: String,
    pub method: HttpMethod,
    /// Path with every `{name}` placeholder replaced by an
    /// interpolation of the parameter's sanitized label.
    pub rendered_path: String,
    /// Sorted by `(location, label)`; declaration order and every call
    /// site use exactly this order.
    pub parameters: Vec<ModelParameter>,
    pub encoding: Encoding,
    /// Type of the response with the smallest status key; `None` means
    /// the no-value type.
    pub success_type: Option<TypeRef>,
    pub description: Option<String>,
    /// Declared status codes and their types, sorted by key, for doc
    /// comments.
    pub responses: Vec<(String, Option<TypeRef>)>,
    pub consumes: Option<String>,
}

impl OperationModel {
    pub fn has_file_parameter(&self) -> bool {
        self.parameters.iter().any(|p| p.param_type.is_file())
    }

    /// First file-typed parameter in sorted order; the upload wrappers
    /// pass it separately as the payload.
    pub fn first_file_parameter(&self) -> Option<&ModelParameter> {
        self.parameters.iter().find(|p| p.param_type.is_file())
    }

    /// Case declaration: the name alone, or the name with the sorted
    /// `label: Type` tuple. The type text is the target's concern.
    pub fn case_declaration<F>(&self, type_for: F) -> String
    where
        F: Fn(&ModelParameter) -> String,
    {
        if self.parameters.is_empty() {
            return self.case_name.clone();
        }
        let fields: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.label, type_for(p)))
            .collect();
        format!("{}({})", self.case_name, fields.join(", "))
    }

    /// Call-site construction of the case, enumerating arguments in
    /// declaration order.
    pub fn case_usage(&self) -> String {
        if self.parameters.is_empty() {
            return self.case_name.clone();
        }
        let args: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("{}: {}", p.label, p.label))
            .collect();
        format!("{}({})", self.case_name, args.join(", "))
    }

    /// Partial match pattern: parameters at the given locations are
    /// bound by name, everything else is wildcarded. With no parameter
    /// at any given location the bare case name matches all payloads.
    pub fn case_pattern(&self, locations: &[ParameterLocation]) -> String {
        let relevant = self
            .parameters
            .iter()
            .any(|p| locations.contains(&p.location));
        if !relevant {
            return self.case_name.clone();
        }
        let slots: Vec<String> = self
            .parameters
            .iter()
            .map(|p| {
                if locations.contains(&p.location) {
                    format!("let {}", p.label)
                } else {
                    "_".to_string()
                }
            })
            .collect();
        format!("{}({})", self.case_name, slots.join(", "))
    }
}

/// File/type name for a schema title: sanitized, first letter raised.
pub fn schema_name(title: &str) -> String {
    ident::capitalized_first_letter(&ident::sanitize(title))
}

/// Generated unit name for a tag: `pet-store` → `PetStoreAPI`.
pub fn unit_name(tag: &str) -> String {
    format!("{}API", tag.to_upper_camel_case())
}

/// Derive the model for one operation. Errors are collected, not
/// first-fail, so a report covers every problem in the record.
pub fn derive_operation(
    op: &Operation,
    schemas: &IndexMap<String, SchemaDecl>,
) -> Result<OperationModel, Vec<ModelError>> {
    let mut errors = Vec::new();

    let case_name = ident::sanitized_label(&op.id);
    if case_name.is_empty() {
        errors.push(ModelError::EmptyCaseName { id: op.id.clone() });
    }

    let mut parameters: Vec<ModelParameter> = op
        .parameters
        .iter()
        .map(|p| ModelParameter {
            label: ident::sanitized_label(&p.name),
            original_name: p.name.clone(),
            location: p.location,
            required: p.required,
            param_type: p.param_type.clone(),
        })
        .collect();
    parameters.sort_by(|a, b| {
        a.location
            .cmp(&b.location)
            .then_with(|| a.label.cmp(&b.label))
    });

    let file_count = parameters.iter().filter(|p| p.param_type.is_file()).count();
    if file_count > 1 {
        log::warn!(
            "operation `{}`: {file_count} file parameters, only the first is the upload payload",
            op.id
        );
    }

    for param in &parameters {
        if param.label.is_empty() {
            errors.push(ModelError::EmptyParameterName {
                id: op.id.clone(),
                name: param.original_name.clone(),
            });
        }
        check_resolvable(&op.id, &param.param_type, schemas, &mut errors);
    }

    let responses: Vec<(String, Option<TypeRef>)> = op
        .responses
        .iter()
        .map(|(code, resp)| (code.clone(), resp.response_type.clone()))
        .collect();
    for (_, response_type) in &responses {
        if let Some(t) = response_type {
            check_resolvable(&op.id, t, schemas, &mut errors);
        }
    }
    let success_type = responses.first().and_then(|(_, t)| t.clone());

    let mut rendered_path = op.path.clone();
    for param in parameters
        .iter()
        .filter(|p| p.location == ParameterLocation::Path)
    {
        let placeholder = format!("{{{}}}", param.original_name);
        let interpolation = format!("\\({})", param.label);
        rendered_path = rendered_path.replace(&placeholder, &interpolation);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(OperationModel {
        id: op.id.clone(),
        case_name,
        method: op.method,
        rendered_path,
        encoding: Encoding::choose(&op.parameters),
        parameters,
        success_type,
        description: op.description.clone(),
        responses,
        consumes: op.consumes.clone(),
    })
}

fn check_resolvable(
    id: &str,
    type_ref: &TypeRef,
    schemas: &IndexMap<String, SchemaDecl>,
    errors: &mut Vec<ModelError>,
) {
    if let Some(name) = type_ref.named_schema() {
        if !schemas.contains_key(name) {
            errors.push(ModelError::UnresolvedType {
                id: id.to_string(),
                reference: name.to_string(),
            });
        }
    }
}

/// One generated unit: a tag with its operations sorted by `id`
/// ascending, the single ordering invariant behind byte-identical
/// output.
#[derive(Debug, Clone, Serialize)]
pub struct TagUnit {
    pub tag: String,
    pub name: String,
    pub operations: Vec<OperationModel>,
}

/// Derive every operation model, group by tag, and sort. All model
/// errors across the batch are reported together.
pub fn build_units(api: &ApiDescription) -> Result<Vec<TagUnit>, GenerateError> {
    let mut errors = validate_schemas(&api.schemas);

    let mut by_tag: IndexMap<String, Vec<OperationModel>> = IndexMap::new();
    for op in &api.operations {
        match derive_operation(op, &api.schemas) {
            Ok(model) => by_tag.entry(op.tag.clone()).or_default().push(model),
            Err(op_errors) => errors.extend(op_errors),
        }
    }

    let mut units: Vec<TagUnit> = by_tag
        .into_iter()
        .map(|(tag, mut operations)| {
            operations.sort_by(|a, b| a.id.cmp(&b.id));
            TagUnit {
                name: unit_name(&tag),
                tag,
                operations,
            }
        })
        .collect();
    units.sort_by(|a, b| a.tag.cmp(&b.tag));

    for unit in &units {
        let mut seen: HashMap<&str, &str> = HashMap::new();
        for op in &unit.operations {
            if let Some(first) = seen.insert(op.case_name.as_str(), op.id.as_str()) {
                errors.push(ModelError::DuplicateCaseName {
                    tag: unit.tag.clone(),
                    first: first.to_string(),
                    second: op.id.clone(),
                    case_name: op.case_name.clone(),
                });
            }
        }
    }

    let mut seen_units: HashMap<String, &str> = HashMap::new();
    for unit in &units {
        if let Some(first) = seen_units.insert(unit.name.clone(), unit.tag.as_str()) {
            errors.push(ModelError::DuplicateUnitName {
                first: first.to_string(),
                second: unit.tag.clone(),
                name: unit.name.clone(),
            });
        }
    }

    if errors.is_empty() {
        Ok(units)
    } else {
        Err(GenerateError::new(errors))
    }
}

/// Validate schema titles: empty or colliding sanitized names are
/// fatal for the batch.
fn validate_schemas(schemas: &IndexMap<String, SchemaDecl>) -> Vec<ModelError> {
    let mut errors = Vec::new();
    let mut seen: HashMap<String, &str> = HashMap::new();
    for title in schemas.keys() {
        let name = schema_name(title);
        if name.is_empty() {
            errors.push(ModelError::EmptySchemaName {
                title: title.clone(),
            });
            continue;
        }
        if let Some(first) = seen.insert(name.clone(), title.as_str()) {
            errors.push(ModelError::DuplicateSchemaName {
                first: first.to_string(),
                second: title.clone(),
                name,
            });
        }
    }
    errors
}
