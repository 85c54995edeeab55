//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory domain.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Closed set of inventory failure kinds.
///
/// Callers are expected to match on the variant; there is deliberately no
/// catch-all. Validation failures never mutate manager state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// A quantity or delta failed validation (zero, out of range, overflow).
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// An item key was empty or malformed.
    #[error("invalid identifier: {0}")]
    InvalidIdentifier(String),

    /// The requested item does not exist in the inventory.
    #[error("item not found: {0}")]
    ItemNotFound(String),

    /// A removal or negative adjustment exceeded the available stock.
    #[error("insufficient stock for '{item}': requested {requested}, available {available}")]
    InsufficientStock {
        item: String,
        requested: u64,
        available: u64,
    },

    /// The snapshot file could not be read, written, or parsed.
    #[error("inventory file error: {0}")]
    File(String),
}

impl InventoryError {
    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }

    pub fn invalid_identifier(msg: impl Into<String>) -> Self {
        Self::InvalidIdentifier(msg.into())
    }

    pub fn not_found(item: impl Into<String>) -> Self {
        Self::ItemNotFound(item.into())
    }

    pub fn insufficient(item: impl Into<String>, requested: u64, available: u64) -> Self {
        Self::InsufficientStock {
            item: item.into(),
            requested,
            available,
        }
    }

    pub fn file(msg: impl Into<String>) -> Self {
        Self::File(msg.into())
    }
}
