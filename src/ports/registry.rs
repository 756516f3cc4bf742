//! Model registry port: the host framework's view of its models.

use crate::model::ModelDescriptor;

/// Supplies the model descriptors of the host application.
///
/// Obtained once through [`crate::context::ServiceContext::bootstrap_registry`]
/// and handed to the extractor explicitly.
pub trait ModelRegistry {
    /// Returns every registered model in the host's enumeration order.
    ///
    /// # Errors
    ///
    /// Returns an error if the registry can no longer produce its models.
    fn models(&self) -> Result<Vec<ModelDescriptor>, String>;
}
