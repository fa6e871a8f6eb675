pub mod format;
pub mod templates;

use eyre::Context;

use crate::config::GeneratorConfig;
use crate::generator::Generator;
use crate::registry::Registry;

use self::templates::proto_tmpl::render_proto;

/// Emits proto3 services and messages.
pub struct ProtoGenerator {
    config: GeneratorConfig,
}

impl ProtoGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }
}

impl Generator for ProtoGenerator {
    fn generate(&self, registry: &Registry) -> eyre::Result<String> {
        render_proto(registry, &self.config)
            .to_file_string()
            .context("could not render proto to file string")
    }
}
