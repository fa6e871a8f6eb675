use genco::tokens::static_literal;
use genco::Tokens;

use crate::config::GeneratorConfig;
use crate::registry::Registry;

use super::message_tmpl::render_message;
use super::service_tmpl::render_service;

pub fn render_proto(registry: &Registry, config: &GeneratorConfig) -> Tokens {
    let services = registry
        .sorted_services()
        .into_iter()
        .map(render_service)
        .collect::<Vec<_>>();

    // Root types are represented by their rpc methods.
    let messages = registry
        .sorted_structs()
        .into_iter()
        .filter(|def| !def.is_root)
        .map(render_message)
        .collect::<Vec<_>>();

    let mut tokens = Tokens::new();
    tokens.append(static_literal(r#"syntax = "proto3";"#));
    tokens.line();
    tokens.append(format!("package {};", config.proto_package));
    tokens.line();
    tokens.append(static_literal(r#"import "google/protobuf/empty.proto";"#));
    tokens.push();
    tokens.append(static_literal(r#"import "google/protobuf/wrappers.proto";"#));

    for block in services.into_iter().chain(messages) {
        tokens.line();
        tokens.append(block);
    }

    tokens
}
