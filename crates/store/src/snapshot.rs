use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use stockbook_core::{InventoryError, InventoryResult, ItemKey};
use stockbook_inventory::{Inventory, InventoryRecord, Metadata};

/// Current snapshot document version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// One persisted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotItem {
    pub key: ItemKey,
    pub quantity: u64,
    #[serde(default, skip_serializing_if = "Metadata::is_empty")]
    pub metadata: Metadata,
}

impl From<&InventoryRecord> for SnapshotItem {
    fn from(record: &InventoryRecord) -> Self {
        Self {
            key: record.key.clone(),
            quantity: record.quantity,
            metadata: record.metadata.clone(),
        }
    }
}

impl From<SnapshotItem> for InventoryRecord {
    fn from(item: SnapshotItem) -> Self {
        InventoryRecord::new(item.key, item.quantity).with_metadata(item.metadata)
    }
}

/// The on-disk document: a version tag plus the full stock mapping.
///
/// Items are written in key order (the manager iterates its map in key
/// order), so saving the same state twice produces identical bytes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventorySnapshot {
    pub version: u32,
    pub items: Vec<SnapshotItem>,
}

impl InventorySnapshot {
    pub fn of(inventory: &Inventory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            items: inventory.records().map(SnapshotItem::from).collect(),
        }
    }
}

/// Write the full current state to `path`, atomically from the caller's
/// perspective: serialize in memory, write to a sibling `.tmp` file, then
/// rename over the target. On any failure the prior file content remains.
pub fn save(inventory: &Inventory, path: &Path) -> InventoryResult<()> {
    let snapshot = InventorySnapshot::of(inventory);
    let bytes = serde_json::to_vec_pretty(&snapshot)
        .map_err(|e| InventoryError::file(format!("serialize snapshot: {e}")))?;

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, bytes)
        .map_err(|e| InventoryError::file(format!("write {}: {e}", tmp.display())))?;
    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        InventoryError::file(format!("rename {} -> {}: {e}", tmp.display(), path.display()))
    })?;

    tracing::info!(path = %path.display(), items = snapshot.items.len(), "snapshot saved");
    Ok(())
}

/// Read and validate the whole document at `path`, then build a fresh
/// `Inventory` from it.
///
/// All-or-nothing: IO failure, malformed JSON, an unsupported version tag,
/// duplicate keys, or invalid records signal `InventoryError::File` and no
/// partially-loaded state is observable. The loaded instance starts with an
/// empty journal.
pub fn load(path: &Path) -> InventoryResult<Inventory> {
    let bytes = fs::read(path)
        .map_err(|e| InventoryError::file(format!("read {}: {e}", path.display())))?;
    let snapshot: InventorySnapshot = serde_json::from_slice(&bytes)
        .map_err(|e| InventoryError::file(format!("parse {}: {e}", path.display())))?;

    if snapshot.version != SNAPSHOT_VERSION {
        return Err(InventoryError::file(format!(
            "unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_VERSION
        )));
    }

    let inventory =
        Inventory::from_records(snapshot.items.into_iter().map(InventoryRecord::from))
            .map_err(|e| InventoryError::file(format!("invalid snapshot {}: {e}", path.display())))?;

    tracing::info!(path = %path.display(), items = inventory.len(), "snapshot loaded");
    Ok(inventory)
}

/// Like [`load`], but a missing file yields an empty inventory (first run).
pub fn load_or_default(path: &Path) -> InventoryResult<Inventory> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "snapshot not found, starting empty");
        return Ok(Inventory::new());
    }
    load(path)
}
