//! Entity descriptors and cross-entity references.

use std::fmt;

use super::field::FieldDescriptor;

/// Identifies an entity by its owning namespace and declared name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntityRef {
    /// Application namespace (the host framework's app label).
    pub namespace: String,
    /// Entity name exactly as declared, case preserved.
    pub name: String,
}

impl EntityRef {
    /// Creates a reference from its parts.
    #[must_use]
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self { namespace: namespace.into(), name: name.into() }
    }

    /// Parses a `namespace.Entity` label.
    ///
    /// A bare `Entity` resolves inside `default_namespace`, matching how the
    /// host framework treats same-app references. Returns `None` for an empty
    /// label or an empty component.
    #[must_use]
    pub fn parse_label(label: &str, default_namespace: &str) -> Option<Self> {
        let label = label.trim();
        let (namespace, name) = match label.rsplit_once('.') {
            Some((namespace, name)) => (namespace, name),
            None => (default_namespace, label),
        };
        if namespace.is_empty() || name.is_empty() {
            return None;
        }
        Some(Self::new(namespace, name))
    }

    /// Diagram table name: `{namespace}_{name}`, lower-cased.
    #[must_use]
    pub fn table_name(&self) -> String {
        format!("{}_{}", self.namespace, self.name).to_lowercase()
    }
}

impl fmt::Display for EntityRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.namespace, self.name)
    }
}

/// One application entity (a database table) and its declared fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelDescriptor {
    /// Owning application namespace.
    pub namespace: String,
    /// Entity name, case preserved.
    pub name: String,
    /// Fields in declaration order.
    pub fields: Vec<FieldDescriptor>,
}

impl ModelDescriptor {
    /// Reference to this entity.
    #[must_use]
    pub fn entity_ref(&self) -> EntityRef {
        EntityRef::new(self.namespace.clone(), self.name.clone())
    }

    /// Name of this entity's block in the diagram.
    ///
    /// Only the entity part is lower-cased; the namespace is kept as-is.
    #[must_use]
    pub fn block_name(&self) -> String {
        format!("{}_{}", self.namespace, self.name.to_lowercase())
    }
}
