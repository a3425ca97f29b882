//! One `Models/<Name>.swift` file per declared schema title.
//!
//! The naming convention is the contract here; the struct rendering
//! stays deliberately small.

use moyagen_core::GeneratedFile;
use moyagen_core::api::ApiDescription;
use moyagen_core::config::GenOptions;
use moyagen_core::ident;
use moyagen_core::model::schema_name;

use crate::swift::{SwiftField, SwiftStruct, render_struct};
use crate::type_mapper::swift_type;

use super::FILE_PREFIX;

pub fn emit_models(api: &ApiDescription, options: &GenOptions) -> Vec<GeneratedFile> {
    let access = options.access_level();

    // Sorted by sanitized name; the schema map's insertion order is
    // not an emission order.
    let mut titles: Vec<&String> = api.schemas.keys().collect();
    titles.sort_by_key(|title| schema_name(title));

    titles
        .into_iter()
        .map(|title| {
            let decl = &api.schemas[title];
            let name = schema_name(title);
            let fields = decl
                .fields
                .iter()
                .map(|(field_name, field)| {
                    let base = swift_type(&field.field_type);
                    SwiftField {
                        doc: field.description.clone(),
                        name: ident::sanitized_label(field_name),
                        type_name: if field.required { base } else { format!("{base}?") },
                    }
                })
                .collect();
            let body = render_struct(&SwiftStruct {
                access,
                name: name.clone(),
                conformance: Some("Codable".to_string()),
                fields,
            });
            GeneratedFile {
                path: format!("Models/{name}.swift"),
                content: format!("{FILE_PREFIX}\n{body}\n"),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_are_sorted_by_sanitized_title() {
        let api = ApiDescription::from_yaml(
            r#"
schemas:
  zebra: { fields: {} }
  Apple:
    fields:
      weight: { type: number, required: true }
"#,
        )
        .unwrap();
        let files = emit_models(&api, &GenOptions::default());
        assert_eq!(files[0].path, "Models/Apple.swift");
        assert_eq!(files[1].path, "Models/Zebra.swift");
        assert!(files[0].content.contains("public struct Apple: Codable {"));
        assert!(files[0].content.contains("    public let weight: Double"));
    }

    #[test]
    fn optional_fields_render_as_optionals() {
        let api = ApiDescription::from_yaml(
            r#"
schemas:
  Pet:
    fields:
      name: { type: string, required: true }
      tag: { type: string }
"#,
        )
        .unwrap();
        let files = emit_models(&api, &GenOptions::default());
        assert!(files[0].content.contains("public let name: String"));
        assert!(files[0].content.contains("public let tag: String?"));
    }
}
