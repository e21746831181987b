//! Order — the record type served by the `m2` service.

use serde::{Deserialize, Serialize};

use crate::id::RecordId;
use crate::record::Record;

/// A customer order for some quantity of a single item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Order {
    pub id: RecordId,
    pub item_name: String,
    pub quantity: i32,
}

/// Caller-supplied fields of an [`Order`]. Missing fields take their
/// defaults (empty item name, zero quantity).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct NewOrder {
    pub item_name: String,
    pub quantity: i32,
}

impl NewOrder {
    #[must_use]
    pub fn new(item_name: impl Into<String>, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            quantity,
        }
    }
}

impl Record for Order {
    type Draft = NewOrder;

    const COLLECTION: &'static str = "orders";

    fn from_draft(id: RecordId, draft: NewOrder) -> Self {
        Self {
            id,
            item_name: draft.item_name,
            quantity: draft.quantity,
        }
    }

    fn id(&self) -> RecordId {
        self.id
    }
}

/// Records an empty `m2` store is seeded with: two laptops and five phones.
#[must_use]
pub fn seed_orders() -> Vec<NewOrder> {
    vec![NewOrder::new("Laptop", 2), NewOrder::new("Phone", 5)]
}
