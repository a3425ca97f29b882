//! The shared utility file: fixed boilerplate parameterized only by
//! the access level and the typed-response-decoding flag.

use minijinja::{Environment, context};
use moyagen_core::GeneratedFile;
use moyagen_core::config::GenOptions;

use super::FILE_PREFIX;

pub fn emit_utils(options: &GenOptions) -> GeneratedFile {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template("utils.swift.j2", include_str!("../../templates/utils.swift.j2"))
        .expect("template should be valid");
    let tmpl = env.get_template("utils.swift.j2").unwrap();

    let rendered = tmpl
        .render(context! {
            access => options.access_level().as_str(),
            response_types => options.response_types,
        })
        .expect("render should succeed");

    GeneratedFile {
        path: "Utils.swift".to_string(),
        content: format!("{FILE_PREFIX}import Alamofire\n\n{rendered}"),
    }
}
