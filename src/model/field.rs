//! Field descriptors and the storage type mapping.

use super::entity::EntityRef;

/// Label emitted for any field kind without a storage mapping.
pub const UNDEFINED_TYPE: &str = "undefined";

/// One declared column of an entity.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Field name as declared on the model.
    pub name: String,
    /// What kind of column this is, with its parameters.
    pub kind: FieldKind,
}

impl FieldDescriptor {
    /// Creates a descriptor from its parts.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self { name: name.into(), kind }
    }
}

/// Tagged category of a field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// A plain value column.
    Scalar(ScalarKind),
    /// Single-valued reference to another entity.
    ForeignKey {
        /// Referenced entity.
        target: EntityRef,
        /// Declared as a one-to-one link rather than many-to-one.
        one_to_one: bool,
    },
    /// Many-valued reference, stored through a junction table.
    ManyToMany {
        /// Referenced entity.
        target: EntityRef,
    },
    /// Reverse accessor created by another entity's reference; not a column.
    Reverse {
        /// Entity on the other side of the relation, when known.
        target: Option<EntityRef>,
    },
}

/// Scalar column kinds, each carrying its own parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScalarKind {
    /// Auto-incrementing integer key.
    Auto,
    /// 64-bit integer.
    BigInteger,
    /// Raw bytes.
    Binary,
    /// True/false flag.
    Boolean,
    /// Bounded text.
    Char {
        /// Declared bound, if any.
        max_length: Option<u32>,
    },
    /// Calendar date.
    Date,
    /// Date and time.
    DateTime,
    /// Fixed-point number.
    Decimal {
        /// Total number of digits.
        max_digits: Option<u32>,
        /// Digits after the decimal point.
        decimal_places: Option<u32>,
    },
    /// Time span.
    Duration,
    /// E-mail address.
    Email,
    /// Stored file path.
    File,
    /// Floating point number.
    Float,
    /// Stored image path.
    Image,
    /// 32-bit integer.
    Integer,
    /// IPv4 address.
    IpAddress,
    /// IPv4 or IPv6 address.
    GenericIpAddress,
    /// Nullable flag.
    NullBoolean,
    /// Non-negative integer.
    PositiveInteger,
    /// Non-negative small integer.
    PositiveSmallInteger,
    /// URL slug.
    Slug,
    /// 16-bit integer.
    SmallInteger,
    /// Unbounded text.
    Text,
    /// Time of day.
    Time,
    /// URL.
    Url,
    /// UUID value.
    Uuid,
    /// JSON document.
    Json,
    /// A kind the mapping table does not know, by its host class name.
    Unmapped(String),
}

impl ScalarKind {
    /// Storage type label for this kind.
    #[must_use]
    pub fn storage_type(&self) -> String {
        let label = match self {
            Self::Auto => "serial",
            Self::BigInteger => "bigint",
            Self::Binary => "bytea",
            Self::Boolean | Self::NullBoolean => "boolean",
            Self::Char { max_length: Some(n) } => return format!("varchar({n})"),
            Self::Char { max_length: None } => "varchar",
            Self::Date => "date",
            Self::DateTime => "timestamp with time zone",
            Self::Decimal { max_digits: Some(p), decimal_places: Some(s) } => {
                return format!("numeric({p},{s})");
            }
            Self::Decimal { .. } => "numeric",
            Self::Duration => "interval",
            Self::Email => "varchar(254)",
            Self::File | Self::Image => "varchar(100)",
            Self::Float => "double precision",
            Self::Integer | Self::PositiveInteger => "integer",
            Self::IpAddress | Self::GenericIpAddress => "inet",
            Self::PositiveSmallInteger | Self::SmallInteger => "smallint",
            Self::Slug => "varchar(50)",
            Self::Text => "text",
            Self::Time => "time",
            Self::Url => "varchar(200)",
            Self::Uuid => "uuid",
            Self::Json => "jsonb",
            Self::Unmapped(class_name) => {
                log::debug!("no storage mapping for field kind {class_name}");
                UNDEFINED_TYPE
            }
        };
        label.to_string()
    }
}

/// Maps a field kind to its storage type label.
///
/// Single-valued references map to `uuid` since every primary key is assumed
/// to be a surrogate identifier of that type. Kinds that never occupy a column
/// of their own fall back to [`UNDEFINED_TYPE`].
#[must_use]
pub fn map_type(kind: &FieldKind) -> String {
    match kind {
        FieldKind::Scalar(scalar) => scalar.storage_type(),
        FieldKind::ForeignKey { .. } => "uuid".to_string(),
        FieldKind::ManyToMany { .. } | FieldKind::Reverse { .. } => UNDEFINED_TYPE.to_string(),
    }
}
