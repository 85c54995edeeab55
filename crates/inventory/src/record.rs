use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use stockbook_core::{Entity, ItemKey, ValueObject};

/// Free-form metadata attached to a record: string or numeric fields only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl ValueObject for MetadataValue {}

impl core::fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            MetadataValue::Integer(n) => write!(f, "{n}"),
            MetadataValue::Float(x) => write!(f, "{x}"),
            MetadataValue::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for MetadataValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Metadata fields, keyed by name. Ordered so serialization is deterministic.
pub type Metadata = BTreeMap<String, MetadataValue>;

/// One stock item: key, on-hand quantity, optional metadata.
///
/// A record never exists with zero quantity; the owning [`Inventory`]
/// removes it when stock reaches zero.
///
/// [`Inventory`]: crate::manager::Inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryRecord {
    pub key: ItemKey,
    pub quantity: u64,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl InventoryRecord {
    pub fn new(key: ItemKey, quantity: u64) -> Self {
        Self {
            key,
            quantity,
            metadata: Metadata::new(),
        }
    }

    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }
}

impl Entity for InventoryRecord {
    type Id = ItemKey;

    fn id(&self) -> &Self::Id {
        &self.key
    }
}
