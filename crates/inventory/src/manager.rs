use std::collections::BTreeMap;

use stockbook_core::{InventoryError, InventoryResult, ItemKey};

use crate::movement::{MovementKind, StockMovement};
use crate::record::{InventoryRecord, Metadata};

/// Authoritative in-memory stock state with validated mutation.
///
/// All mutation goes through [`add`], [`remove`], and [`adjust`]; each
/// validates fully before touching state, so a failed call leaves both the
/// record map and the journal exactly as they were. Every successful
/// mutation appends one [`StockMovement`] to this instance's journal. The
/// journal is constructed fresh in every constructor and is never shared
/// with another instance.
///
/// [`add`]: Inventory::add
/// [`remove`]: Inventory::remove
/// [`adjust`]: Inventory::adjust
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    records: BTreeMap<ItemKey, InventoryRecord>,
    journal: Vec<StockMovement>,
}

impl Inventory {
    /// Create an empty inventory with its own empty journal.
    pub fn new() -> Self {
        Self {
            records: BTreeMap::new(),
            journal: Vec::new(),
        }
    }

    /// Build an inventory from already-validated records (snapshot load).
    ///
    /// Rejects duplicate keys and zero-quantity records; on error nothing of
    /// the partial build escapes. The resulting journal is empty: movements
    /// belong to the instance that performed them, not to the data.
    pub fn from_records(
        records: impl IntoIterator<Item = InventoryRecord>,
    ) -> InventoryResult<Self> {
        let mut map = BTreeMap::new();
        for record in records {
            if record.quantity == 0 {
                return Err(InventoryError::invalid_quantity(format!(
                    "record '{}' has zero quantity",
                    record.key
                )));
            }
            let key = record.key.clone();
            if map.insert(key.clone(), record).is_some() {
                return Err(InventoryError::invalid_identifier(format!(
                    "duplicate item key: {key}"
                )));
            }
        }
        Ok(Self {
            records: map,
            journal: Vec::new(),
        })
    }

    /// Receive stock: create the record or increment an existing one.
    ///
    /// Metadata entries, when given, are merged into the record (existing
    /// fields overwritten). Returns the new total. Signals `InvalidQuantity`
    /// for a zero or out-of-range quantity.
    pub fn add(
        &mut self,
        key: ItemKey,
        quantity: u64,
        metadata: Option<Metadata>,
    ) -> InventoryResult<u64> {
        let delta = signed_delta(quantity)?;
        let new_total = match self.records.get(&key) {
            Some(record) => record.quantity.checked_add(quantity).ok_or_else(|| {
                InventoryError::invalid_quantity(format!("stock for '{key}' would overflow"))
            })?,
            None => quantity,
        };

        let record = self
            .records
            .entry(key.clone())
            .or_insert_with(|| InventoryRecord::new(key.clone(), 0));
        record.quantity = new_total;
        if let Some(metadata) = metadata {
            record.metadata.extend(metadata);
        }

        self.journal
            .push(StockMovement::new(MovementKind::Receipt, key.clone(), delta));
        tracing::info!(item = %key, quantity, total = new_total, "stock received");
        Ok(new_total)
    }

    /// Remove stock; deletes the record when it reaches zero.
    ///
    /// Returns the remaining quantity (0 when the record was deleted).
    pub fn remove(&mut self, key: &ItemKey, quantity: u64) -> InventoryResult<u64> {
        let delta = signed_delta(quantity)?;
        let available = self
            .records
            .get(key)
            .map(|record| record.quantity)
            .ok_or_else(|| InventoryError::not_found(key.as_str()))?;
        if available < quantity {
            return Err(InventoryError::insufficient(key.as_str(), quantity, available));
        }

        let remaining = available - quantity;
        if remaining == 0 {
            self.records.remove(key);
        } else if let Some(record) = self.records.get_mut(key) {
            record.quantity = remaining;
        }

        self.journal
            .push(StockMovement::new(MovementKind::Issue, key.clone(), -delta));
        tracing::info!(item = %key, quantity, remaining, "stock removed");
        Ok(remaining)
    }

    /// Apply a signed correction to an existing record.
    ///
    /// Never creates a record (signals `ItemNotFound`); deletes at zero like
    /// [`remove`]. Returns the new total.
    ///
    /// [`remove`]: Inventory::remove
    pub fn adjust(&mut self, key: &ItemKey, delta: i64) -> InventoryResult<u64> {
        if delta == 0 {
            return Err(InventoryError::invalid_quantity(
                "adjustment delta cannot be zero",
            ));
        }
        let available = self
            .records
            .get(key)
            .map(|record| record.quantity)
            .ok_or_else(|| InventoryError::not_found(key.as_str()))?;

        let new_total = if delta > 0 {
            available.checked_add(delta as u64).ok_or_else(|| {
                InventoryError::invalid_quantity(format!("stock for '{key}' would overflow"))
            })?
        } else {
            let magnitude = delta.unsigned_abs();
            if available < magnitude {
                return Err(InventoryError::insufficient(key.as_str(), magnitude, available));
            }
            available - magnitude
        };

        if new_total == 0 {
            self.records.remove(key);
        } else if let Some(record) = self.records.get_mut(key) {
            record.quantity = new_total;
        }

        self.journal.push(StockMovement::new(
            MovementKind::Adjustment,
            key.clone(),
            delta,
        ));
        tracing::info!(item = %key, delta, total = new_total, "stock adjusted");
        Ok(new_total)
    }

    /// Look up a record; absent keys signal `ItemNotFound`.
    pub fn get(&self, key: &ItemKey) -> InventoryResult<&InventoryRecord> {
        self.records
            .get(key)
            .ok_or_else(|| InventoryError::not_found(key.as_str()))
    }

    /// Current on-hand quantity; absent keys signal `ItemNotFound`.
    pub fn quantity_of(&self, key: &ItemKey) -> InventoryResult<u64> {
        self.get(key).map(|record| record.quantity)
    }

    pub fn contains(&self, key: &ItemKey) -> bool {
        self.records.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in key order.
    pub fn records(&self) -> impl Iterator<Item = &InventoryRecord> {
        self.records.values()
    }

    /// This instance's movements, oldest first.
    pub fn journal(&self) -> &[StockMovement] {
        &self.journal
    }
}

/// Per-operation quantities must be positive and representable as a signed
/// journal delta.
fn signed_delta(quantity: u64) -> InventoryResult<i64> {
    if quantity == 0 {
        return Err(InventoryError::invalid_quantity("quantity must be positive"));
    }
    i64::try_from(quantity)
        .map_err(|_| InventoryError::invalid_quantity(format!("quantity out of range: {quantity}")))
}
