//! Registry holding descriptors supplied directly by the caller.

use crate::model::ModelDescriptor;
use crate::ports::registry::ModelRegistry;

/// Registry over a fixed list of models.
#[derive(Debug, Clone, Default)]
pub struct StaticRegistry {
    models: Vec<ModelDescriptor>,
}

impl StaticRegistry {
    /// Wraps the given models, keeping their order.
    #[must_use]
    pub fn new(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }
}

impl ModelRegistry for StaticRegistry {
    fn models(&self) -> Result<Vec<ModelDescriptor>, String> {
        Ok(self.models.clone())
    }
}
