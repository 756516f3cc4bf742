//! Model manifest: the host framework's dump of its model metadata.
//!
//! ```yaml
//! models:
//!   - namespace: blog
//!     name: Post
//!     fields:
//!       - { name: title, kind: CharField, max_length: 200 }
//!       - { name: author, kind: ForeignKey, to: auth.User }
//!       - { name: tags, kind: ManyToManyField, to: Tag }
//! ```
//!
//! `kind` is the host's field class name. Names without a mapping decode to
//! [`ScalarKind::Unmapped`] instead of failing.

use std::path::Path;

use serde::Deserialize;

use crate::model::{EntityRef, FieldDescriptor, FieldKind, ModelDescriptor, ScalarKind};

/// Top-level manifest document.
#[derive(Debug, Deserialize)]
pub struct Manifest {
    /// Models in the host's enumeration order.
    #[serde(default)]
    pub models: Vec<ManifestModel>,
}

/// One model entry.
#[derive(Debug, Deserialize)]
pub struct ManifestModel {
    /// Application namespace.
    pub namespace: String,
    /// Entity name.
    pub name: String,
    /// Declared fields.
    #[serde(default)]
    pub fields: Vec<ManifestField>,
}

/// One field entry with every kind-specific parameter optional.
#[derive(Debug, Deserialize)]
pub struct ManifestField {
    /// Field name.
    pub name: String,
    /// Host field class name.
    pub kind: String,
    /// Bound for text kinds.
    pub max_length: Option<u32>,
    /// Precision for decimal kinds.
    pub max_digits: Option<u32>,
    /// Scale for decimal kinds.
    pub decimal_places: Option<u32>,
    /// Referenced entity label for relation kinds.
    pub to: Option<String>,
}

/// Serialization format of a manifest file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFormat {
    /// YAML document (also accepts JSON, which is a YAML subset).
    Yaml,
    /// JSON document.
    Json,
}

impl ManifestFormat {
    /// Picks the format from a file extension; anything but `.json` is YAML.
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parses manifest text into model descriptors.
///
/// # Errors
///
/// Returns an error if the document is malformed or a relation field lacks
/// a usable `to` label.
pub fn parse(content: &str, format: ManifestFormat) -> Result<Vec<ModelDescriptor>, String> {
    let manifest: Manifest = match format {
        ManifestFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| format!("invalid YAML manifest: {e}"))?
        }
        ManifestFormat::Json => {
            serde_json::from_str(content).map_err(|e| format!("invalid JSON manifest: {e}"))?
        }
    };
    manifest.models.into_iter().map(ManifestModel::into_descriptor).collect()
}

impl ManifestModel {
    fn into_descriptor(self) -> Result<ModelDescriptor, String> {
        let fields = self
            .fields
            .into_iter()
            .map(|field| field.into_descriptor(&self.namespace))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("model {}.{}: {e}", self.namespace, self.name))?;
        Ok(ModelDescriptor { namespace: self.namespace, name: self.name, fields })
    }
}

impl ManifestField {
    fn into_descriptor(self, namespace: &str) -> Result<FieldDescriptor, String> {
        let kind = self.decode_kind(namespace)?;
        Ok(FieldDescriptor::new(self.name, kind))
    }

    fn target(&self, namespace: &str) -> Result<EntityRef, String> {
        let label = self
            .to
            .as_deref()
            .ok_or_else(|| format!("field {} ({}) has no `to` target", self.name, self.kind))?;
        EntityRef::parse_label(label, namespace)
            .ok_or_else(|| format!("field {} has an invalid target label {label:?}", self.name))
    }

    fn decode_kind(&self, namespace: &str) -> Result<FieldKind, String> {
        let scalar = match self.kind.as_str() {
            "ForeignKey" => {
                return Ok(FieldKind::ForeignKey { target: self.target(namespace)?, one_to_one: false });
            }
            "OneToOneField" => {
                return Ok(FieldKind::ForeignKey { target: self.target(namespace)?, one_to_one: true });
            }
            "ManyToManyField" => {
                return Ok(FieldKind::ManyToMany { target: self.target(namespace)? });
            }
            "ManyToOneRel" | "OneToOneRel" | "ManyToManyRel" | "GenericForeignKey"
            | "GenericRelation" => {
                let target = self.to.as_deref().and_then(|l| EntityRef::parse_label(l, namespace));
                return Ok(FieldKind::Reverse { target });
            }
            "AutoField" => ScalarKind::Auto,
            "BigIntegerField" => ScalarKind::BigInteger,
            "BinaryField" => ScalarKind::Binary,
            "BooleanField" => ScalarKind::Boolean,
            "CharField" => ScalarKind::Char { max_length: self.max_length },
            "DateField" => ScalarKind::Date,
            "DateTimeField" => ScalarKind::DateTime,
            "DecimalField" => ScalarKind::Decimal {
                max_digits: self.max_digits,
                decimal_places: self.decimal_places,
            },
            "DurationField" => ScalarKind::Duration,
            "EmailField" => ScalarKind::Email,
            "FileField" => ScalarKind::File,
            "FloatField" => ScalarKind::Float,
            "ImageField" => ScalarKind::Image,
            "IntegerField" => ScalarKind::Integer,
            "IPAddressField" => ScalarKind::IpAddress,
            "GenericIPAddressField" => ScalarKind::GenericIpAddress,
            "NullBooleanField" => ScalarKind::NullBoolean,
            "PositiveIntegerField" => ScalarKind::PositiveInteger,
            "PositiveSmallIntegerField" => ScalarKind::PositiveSmallInteger,
            "SlugField" => ScalarKind::Slug,
            "SmallIntegerField" => ScalarKind::SmallInteger,
            "TextField" => ScalarKind::Text,
            "TimeField" => ScalarKind::Time,
            "URLField" => ScalarKind::Url,
            "UUIDField" => ScalarKind::Uuid,
            "JSONField" => ScalarKind::Json,
            other => ScalarKind::Unmapped(other.to_string()),
        };
        Ok(FieldKind::Scalar(scalar))
    }
}
