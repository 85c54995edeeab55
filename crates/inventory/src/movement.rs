use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockbook_core::{EntryId, ItemKey, ValueObject};

/// What kind of mutation produced a journal entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    /// Stock received via `add`.
    Receipt,
    /// Stock removed via `remove`.
    Issue,
    /// Signed correction via `adjust`.
    Adjustment,
}

impl MovementKind {
    /// Stable dotted type identifier.
    pub fn movement_type(&self) -> &'static str {
        match self {
            MovementKind::Receipt => "stock.receipt",
            MovementKind::Issue => "stock.issue",
            MovementKind::Adjustment => "stock.adjustment",
        }
    }
}

/// One immutable journal entry.
///
/// Movements are facts: appended on every successful mutation, never edited.
/// Each [`Inventory`] owns its own journal; movements are never shared
/// between instances.
///
/// [`Inventory`]: crate::manager::Inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub entry_id: EntryId,
    pub kind: MovementKind,
    pub item: ItemKey,
    /// Signed stock change: positive for receipts, negative for issues,
    /// either for adjustments.
    pub delta: i64,
    pub occurred_at: DateTime<Utc>,
}

impl StockMovement {
    pub fn new(kind: MovementKind, item: ItemKey, delta: i64) -> Self {
        Self {
            entry_id: EntryId::new(),
            kind,
            item,
            delta,
            occurred_at: Utc::now(),
        }
    }
}

impl ValueObject for StockMovement {}
