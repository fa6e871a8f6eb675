use std::sync::Arc;

use crate::registry::Registry;

/// Renders a finalized registry into source text.
pub trait Generator {
    fn generate(&self, registry: &Registry) -> eyre::Result<String>;
}

pub type DynGenerator = Arc<dyn Generator + Send + Sync>;
