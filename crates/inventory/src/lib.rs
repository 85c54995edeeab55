//! Inventory domain module.
//!
//! This crate contains the business rules for stock keeping, implemented
//! purely as deterministic domain logic (no IO, no storage).

pub mod manager;
pub mod movement;
pub mod record;

pub use manager::Inventory;
pub use movement::{MovementKind, StockMovement};
pub use record::{InventoryRecord, Metadata, MetadataValue};
