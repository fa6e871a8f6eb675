pub mod format;
pub mod templates;

use eyre::Context;
use genco::prelude::rust;
use genco::tokens::static_literal;

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::registry::Registry;

use self::templates::struct_tmpl::render_struct;

/// Emits one Rust struct per registry type.
pub struct RustGenerator {
    config: GeneratorConfig,
}

impl RustGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for RustGenerator {
    fn generate(&self, registry: &Registry) -> eyre::Result<String> {
        let mut render = rust::Tokens::new();
        render.append(static_literal("// Code generated by gqlstruct. DO NOT EDIT."));
        render.line();

        for def in registry.sorted_structs() {
            tracing::debug!(name = def.name.as_str(), "rendering struct");
            render.append(render_struct(def, &self.config)?);
            render.line();
        }

        render
            .to_file_string()
            .context("could not render structs to file string")
    }
}
