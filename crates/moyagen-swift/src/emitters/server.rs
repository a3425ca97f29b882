//! The optional runtime shim: a minimal typed HTTP client over the
//! external networking convention, emitted only on request.

use minijinja::{Environment, context};
use moyagen_core::GeneratedFile;
use moyagen_core::config::GenOptions;

use super::FILE_PREFIX;

pub fn emit_server(options: &GenOptions) -> GeneratedFile {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.add_template(
        "server.swift.j2",
        include_str!("../../templates/server.swift.j2"),
    )
    .expect("template should be valid");
    let tmpl = env.get_template("server.swift.j2").unwrap();

    let rendered = tmpl
        .render(context! {
            access => options.access_level().as_str(),
            custom_authorization => options.custom_authorization,
        })
        .expect("render should succeed");

    GeneratedFile {
        path: "Server.swift".to_string(),
        content: format!("{FILE_PREFIX}import Alamofire\n\n{rendered}"),
    }
}
