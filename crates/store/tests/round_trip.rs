//! Black-box persistence tests: save/load through the public API only.

use std::fs;

use tempfile::TempDir;

use stockbook_core::{InventoryError, ItemKey};
use stockbook_inventory::{Inventory, Metadata, MetadataValue};
use stockbook_store::{load, load_or_default, save};

fn key(s: &str) -> ItemKey {
    ItemKey::new(s).unwrap()
}

fn sample_inventory() -> Inventory {
    let mut inv = Inventory::new();
    let mut meta = Metadata::new();
    meta.insert("bin".to_string(), MetadataValue::Text("A-12".to_string()));
    meta.insert("reorder_level".to_string(), MetadataValue::Integer(5));
    meta.insert("unit_weight".to_string(), MetadataValue::Float(0.25));

    inv.add(key("widget"), 8, Some(meta)).unwrap();
    inv.add(key("bolt"), 140, None).unwrap();
    inv.add(key("washer"), 3, None).unwrap();
    inv.remove(&key("washer"), 1).unwrap();
    inv
}

#[test]
fn save_then_load_reproduces_the_mapping() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stockbook.json");

    let original = sample_inventory();
    save(&original, &path).unwrap();
    let restored = load(&path).unwrap();

    assert_eq!(restored.len(), original.len());
    for record in original.records() {
        assert_eq!(restored.get(&record.key).unwrap(), record);
    }
}

#[test]
fn loaded_inventory_has_a_fresh_journal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stockbook.json");

    let original = sample_inventory();
    assert!(!original.journal().is_empty());

    save(&original, &path).unwrap();
    let restored = load(&path).unwrap();
    assert!(restored.journal().is_empty());
}

#[test]
fn load_or_default_on_missing_path_starts_empty() {
    let dir = TempDir::new().unwrap();
    let inv = load_or_default(&dir.path().join("absent.json")).unwrap();
    assert!(inv.is_empty());
}

#[test]
fn load_on_missing_path_is_a_file_error() {
    let dir = TempDir::new().unwrap();
    let err = load(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, InventoryError::File(_)));
}

#[test]
fn failed_load_leaves_the_file_untouched() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stockbook.json");
    fs::write(&path, "definitely not json").unwrap();

    assert!(load(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "definitely not json");
}

#[test]
fn save_into_a_missing_directory_is_a_file_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-dir").join("stockbook.json");
    let err = save(&sample_inventory(), &path).unwrap_err();
    assert!(matches!(err, InventoryError::File(_)));
}

#[test]
fn saving_twice_produces_identical_bytes() {
    let dir = TempDir::new().unwrap();
    let first = dir.path().join("a.json");
    let second = dir.path().join("b.json");

    let inv = sample_inventory();
    save(&inv, &first).unwrap();
    save(&inv, &second).unwrap();

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn save_replaces_prior_content_atomically() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("stockbook.json");

    let mut inv = sample_inventory();
    save(&inv, &path).unwrap();

    inv.remove(&key("bolt"), 40).unwrap();
    save(&inv, &path).unwrap();

    let restored = load(&path).unwrap();
    assert_eq!(restored.quantity_of(&key("bolt")).unwrap(), 100);
    // No stray temp file left behind.
    assert!(!path.with_extension("tmp").exists());
}
