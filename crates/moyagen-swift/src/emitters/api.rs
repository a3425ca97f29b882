//! Per-tag unit emission: the request enum, its routing conformance,
//! and the four wrapper-function groups.

use moyagen_core::GeneratedFile;
use moyagen_core::api::ParameterLocation;
use moyagen_core::config::{AccessLevel, GenOptions};
use moyagen_core::model::{OperationModel, TagUnit};

use crate::swift::{
    ExtensionItem, SwiftCase, SwiftEnum, SwiftExtension, SwiftFunction, SwitchArm, SwitchProperty,
    render_enum, render_extension,
};
use crate::type_mapper::{parameter_type, success_type};

use super::FILE_PREFIX;

/// Emit one `APIs/<Unit>.swift` file for a tag unit whose operations
/// are already sorted by id.
pub fn emit_api(unit: &TagUnit, options: &GenOptions) -> GeneratedFile {
    let access = options.access_level();
    let sections = [
        render_enum(&request_enum(unit, access)),
        render_extension(&routing_extension(unit, access)),
        render_extension(&wrapper_extension(unit, access)),
    ];
    let content = format!(
        "{FILE_PREFIX}import Alamofire\n\n{}\n",
        sections.join("\n\n")
    );
    GeneratedFile {
        path: format!("APIs/{}.swift", unit.name),
        content,
    }
}

/// The closed request enum: one case per operation.
pub fn request_enum(unit: &TagUnit, access: AccessLevel) -> SwiftEnum {
    SwiftEnum {
        access,
        name: unit.name.clone(),
        cases: unit
            .operations
            .iter()
            .map(|op| SwiftCase {
                doc: case_doc(op),
                declaration: op.case_declaration(parameter_type),
            })
            .collect(),
    }
}

fn case_doc(op: &OperationModel) -> Vec<String> {
    let mut doc = Vec::new();
    if let Some(description) = &op.description {
        doc.push(description.clone());
    }
    doc.push("- responses:".to_string());
    for (code, response_type) in &op.responses {
        doc.push(format!(
            "    - {code}: {}",
            success_type(response_type.as_ref())
        ));
    }
    doc
}

/// Routing conformance: path, headers, method, and encoding accessors.
pub fn routing_extension(unit: &TagUnit, access: AccessLevel) -> SwiftExtension {
    use ParameterLocation::*;

    let path = SwitchProperty {
        access,
        name: "path".to_string(),
        type_name: "String".to_string(),
        arms: arms(unit, |op| SwitchArm {
            pattern: op.case_pattern(&[Path]),
            value: format!("\"{}\"", op.rendered_path),
        }),
    };
    // Header parameters are bound but never materialized; the accessor
    // always yields no headers. That pass-through is a contract.
    let headers = SwitchProperty {
        access,
        name: "headers".to_string(),
        type_name: "HTTPHeaders?".to_string(),
        arms: arms(unit, |op| SwitchArm {
            pattern: op.case_pattern(&[Header]),
            value: "nil".to_string(),
        }),
    };
    let method = SwitchProperty {
        access,
        name: "method".to_string(),
        type_name: "HTTPMethod".to_string(),
        arms: arms(unit, |op| SwitchArm {
            pattern: op.case_name.clone(),
            value: format!(".{}", op.method.client_member()),
        }),
    };
    let encoding = SwitchProperty {
        access,
        name: "encoding".to_string(),
        type_name: "ParameterEncoding".to_string(),
        arms: arms(unit, |op| SwitchArm {
            pattern: op.case_pattern(&[Body, Query, FormData]),
            value: op.encoding.client_expr().to_string(),
        }),
    };

    SwiftExtension {
        target: unit.name.clone(),
        conformance: Some("ApiController".to_string()),
        where_clause: None,
        items: vec![
            ExtensionItem::Property(path),
            ExtensionItem::Property(headers),
            ExtensionItem::Property(method),
            ExtensionItem::Property(encoding),
        ],
    }
}

fn arms<F>(unit: &TagUnit, arm: F) -> Vec<SwitchArm>
where
    F: Fn(&OperationModel) -> SwitchArm,
{
    unit.operations.iter().map(arm).collect()
}

/// The four wrapper groups on the server surface: sync and async plain
/// calls for operations without file parameters, sync and async upload
/// calls for operations with at least one.
pub fn wrapper_extension(unit: &TagUnit, access: AccessLevel) -> SwiftExtension {
    let plain: Vec<&OperationModel> = unit
        .operations
        .iter()
        .filter(|op| !op.has_file_parameter())
        .collect();
    let uploads: Vec<&OperationModel> = unit
        .operations
        .iter()
        .filter(|op| op.has_file_parameter())
        .collect();

    let mut items = Vec::new();
    if !plain.is_empty() {
        items.push(ExtensionItem::Comment("// MARK: - Sync requests".to_string()));
        for op in &plain {
            items.push(ExtensionItem::Function(sync_function(op, access)));
        }
        items.push(ExtensionItem::Comment("// MARK: - Async requests".to_string()));
        for op in &plain {
            items.push(ExtensionItem::Function(async_function(op, access)));
        }
    }
    if !uploads.is_empty() {
        items.push(ExtensionItem::Comment("// MARK: - Sync upload".to_string()));
        for op in &uploads {
            items.push(ExtensionItem::Function(sync_upload_function(op, access)));
        }
        items.push(ExtensionItem::Comment("// MARK: - Async upload".to_string()));
        for op in &uploads {
            items.push(ExtensionItem::Function(async_upload_function(op, access)));
        }
    }

    SwiftExtension {
        target: "Server".to_string(),
        conformance: None,
        where_clause: Some(format!("Target == {}", unit.name)),
        items,
    }
}

/// Wrapper parameters reuse the case tuple order exactly.
fn signature_parameters(op: &OperationModel) -> Vec<String> {
    op.parameters
        .iter()
        .map(|p| format!("{}: {}", p.label, parameter_type(p)))
        .collect()
}

fn completion_parameter(op: &OperationModel) -> String {
    format!(
        "completion: @escaping (Result<{}, Error>) -> Void",
        success_type(op.success_type.as_ref())
    )
}

fn sync_function(op: &OperationModel, access: AccessLevel) -> SwiftFunction {
    SwiftFunction {
        doc: vec![],
        access,
        discardable_result: false,
        name: op.case_name.clone(),
        parameters: signature_parameters(op),
        throws: true,
        return_type: Some(success_type(op.success_type.as_ref())),
        body: vec![format!("return try response(.{})", op.case_usage())],
    }
}

fn async_function(op: &OperationModel, access: AccessLevel) -> SwiftFunction {
    let mut parameters = signature_parameters(op);
    parameters.push(completion_parameter(op));
    SwiftFunction {
        doc: vec![],
        access,
        discardable_result: true,
        name: op.case_name.clone(),
        parameters,
        throws: false,
        return_type: Some("Request".to_string()),
        body: vec![format!(
            "return request(.{}, completion: completion)",
            op.case_usage()
        )],
    }
}

fn file_payload_label(op: &OperationModel) -> String {
    op.first_file_parameter()
        .expect("upload wrappers are only built for operations with a file parameter")
        .label
        .clone()
}

fn sync_upload_function(op: &OperationModel, access: AccessLevel) -> SwiftFunction {
    SwiftFunction {
        doc: vec![],
        access,
        discardable_result: false,
        name: op.case_name.clone(),
        parameters: signature_parameters(op),
        throws: true,
        return_type: Some(success_type(op.success_type.as_ref())),
        body: vec![format!(
            "return try upload(.{}, file: {})",
            op.case_usage(),
            file_payload_label(op)
        )],
    }
}

fn async_upload_function(op: &OperationModel, access: AccessLevel) -> SwiftFunction {
    let mut parameters = signature_parameters(op);
    parameters.push(completion_parameter(op));
    SwiftFunction {
        doc: vec![],
        access,
        discardable_result: false,
        name: op.case_name.clone(),
        parameters,
        throws: false,
        return_type: None,
        body: vec![format!(
            "uploadRequest(.{}, file: {}, completion: completion)",
            op.case_usage(),
            file_payload_label(op)
        )],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use moyagen_core::api::ApiDescription;
    use moyagen_core::model::build_units;

    fn units(yaml: &str) -> Vec<TagUnit> {
        let api = ApiDescription::from_yaml(yaml).unwrap();
        build_units(&api).unwrap()
    }

    const PETS: &str = r#"
schemas:
  Pet:
    fields:
      name: { type: string, required: true }
operations:
  - id: listPets
    path: /pets
    method: GET
    tag: pets
    responses:
      "200": { type: { array: Pet } }
  - id: getPet
    path: /pets/{petId}
    method: GET
    tag: pets
    parameters:
      - { name: petId, location: path, required: true, type: string }
    responses:
      "200": { type: Pet }
"#;

    #[test]
    fn enum_cases_follow_id_order() {
        let units = units(PETS);
        let decl = request_enum(&units[0], AccessLevel::Public);
        assert_eq!(decl.name, "PetsAPI");
        assert_eq!(decl.cases.len(), 2);
        assert_eq!(decl.cases[0].declaration, "getPet(petId: String)");
        assert_eq!(decl.cases[1].declaration, "listPets");
    }

    #[test]
    fn routing_arms_bind_only_relevant_locations() {
        let units = units(PETS);
        let ext = routing_extension(&units[0], AccessLevel::Public);
        let ExtensionItem::Property(path) = &ext.items[0] else {
            panic!("expected path property");
        };
        assert_eq!(path.arms[0].pattern, "getPet(let petId)");
        assert_eq!(path.arms[0].value, "\"/pets/\\(petId)\"");
        assert_eq!(path.arms[1].pattern, "listPets");
        assert_eq!(path.arms[1].value, "\"/pets\"");

        let ExtensionItem::Property(headers) = &ext.items[1] else {
            panic!("expected headers property");
        };
        // No header parameters anywhere: bare case names, nil values.
        assert!(headers.arms.iter().all(|a| a.value == "nil"));
        assert_eq!(headers.arms[0].pattern, "getPet");
    }

    #[test]
    fn plain_operations_get_no_upload_wrappers() {
        let units = units(PETS);
        let ext = wrapper_extension(&units[0], AccessLevel::Public);
        let functions: Vec<&SwiftFunction> = ext
            .items
            .iter()
            .filter_map(|item| match item {
                ExtensionItem::Function(f) => Some(f),
                _ => None,
            })
            .collect();
        // Two operations, sync + async each.
        assert_eq!(functions.len(), 4);
        assert!(
            !ext.items
                .iter()
                .any(|i| matches!(i, ExtensionItem::Comment(c) if c.contains("upload")))
        );
    }

    #[test]
    fn wrapper_call_sites_reuse_declaration_order() {
        let units = units(
            r#"
operations:
  - id: searchPets
    path: /pets
    method: GET
    tag: pets
    parameters:
      - { name: limit, location: query, required: false, type: integer }
      - { name: filter, location: query, required: true, type: string }
"#,
        );
        let ext = wrapper_extension(&units[0], AccessLevel::Public);
        let ExtensionItem::Function(sync) = &ext.items[1] else {
            panic!("expected sync wrapper");
        };
        assert_eq!(sync.parameters, vec!["filter: String", "limit: Int?"]);
        assert_eq!(
            sync.body,
            vec!["return try response(.searchPets(filter: filter, limit: limit))"]
        );
    }

    #[test]
    fn upload_wrappers_pass_first_file_parameter_separately() {
        let units = units(
            r#"
operations:
  - id: uploadPhoto
    path: /pets/{petId}/photo
    method: POST
    tag: pets
    parameters:
      - { name: petId, location: path, required: true, type: string }
      - { name: photo, location: formData, required: true, type: file }
"#,
        );
        let ext = wrapper_extension(&units[0], AccessLevel::Public);
        let functions: Vec<&SwiftFunction> = ext
            .items
            .iter()
            .filter_map(|item| match item {
                ExtensionItem::Function(f) => Some(f),
                _ => None,
            })
            .collect();
        assert_eq!(functions.len(), 2);
        let sync = functions[0];
        assert_eq!(sync.parameters, vec!["petId: String", "photo: FileValue"]);
        assert_eq!(
            sync.body,
            vec!["return try upload(.uploadPhoto(petId: petId, photo: photo), file: photo)"]
        );
        let async_fn = functions[1];
        assert_eq!(
            async_fn.body,
            vec!["uploadRequest(.uploadPhoto(petId: petId, photo: photo), file: photo, completion: completion)"]
        );
    }

    #[test]
    fn internal_access_level_is_threaded_through() {
        let units = units(PETS);
        let decl = request_enum(&units[0], AccessLevel::Internal);
        let text = render_enum(&decl);
        assert!(text.starts_with("internal enum PetsAPI {"));
    }
}
