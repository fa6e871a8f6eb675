use derive_builder::Builder;

#[derive(Builder, Clone, Debug, PartialEq)]
#[builder(default)]
pub struct GeneratorConfig {
    /// `package` line of the generated proto file.
    #[builder(setter(into))]
    pub proto_package: String,
    /// Derives added after the default ones on every generated struct.
    #[builder(setter(into))]
    pub extra_derives: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            proto_package: "types".into(),
            extra_derives: Vec::new(),
        }
    }
}
