use moyagen_core::api::ApiDescription;
use moyagen_core::config::GenOptions;
use moyagen_core::error::GenerateError;
use moyagen_core::model;
use moyagen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;

/// Swift client generator: model files, one API unit per tag, the
/// shared utility file, and the optional server shim.
pub struct SwiftClientGenerator;

impl CodeGenerator for SwiftClientGenerator {
    type Error = GenerateError;

    fn generate(
        &self,
        api: &ApiDescription,
        options: &GenOptions,
    ) -> Result<Vec<GeneratedFile>, GenerateError> {
        let units = model::build_units(api)?;
        log::debug!(
            "derived {} tag unit(s) from {} operation(s)",
            units.len(),
            api.operations.len()
        );

        let mut files = emitters::models::emit_models(api, options);
        for unit in &units {
            files.push(emitters::api::emit_api(unit, options));
        }
        files.push(emitters::utils::emit_utils(options));
        if options.moya_provider {
            files.push(emitters::server::emit_server(options));
        }
        Ok(files)
    }
}
