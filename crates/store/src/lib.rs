//! Snapshot persistence for the inventory manager.
//!
//! The on-disk format is a versioned JSON document holding the full stock
//! mapping. Saves are atomic from the caller's perspective (write a sibling
//! temp file, then rename over the target); loads are all-or-nothing (the
//! whole document is parsed and validated before an `Inventory` is built).

pub mod snapshot;

pub use snapshot::{load, load_or_default, save, InventorySnapshot, SnapshotItem, SNAPSHOT_VERSION};
