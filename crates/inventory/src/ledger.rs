//! Append-only stock movement ledger.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use minierp_core::{Entity, ProductId};

use crate::product::Product;

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    In,
    Out,
}

impl MovementKind {
    pub fn label(self) -> &'static str {
        match self {
            MovementKind::In => "IN",
            MovementKind::Out => "OUT",
        }
    }
}

impl core::fmt::Display for MovementKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

/// One recorded movement (immutable once appended).
///
/// Holds the product id and a snapshot of its name, so entries stay readable
/// after the product is removed from the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub product_id: ProductId,
    pub product_name: String,
    pub kind: MovementKind,
    pub quantity: u32,
    pub occurred_at: DateTime<Utc>,
}

/// Movement history.
///
/// Grows without bound; nothing is ever evicted or rewritten.
#[derive(Debug, Clone, Default)]
pub struct MovementLedger {
    entries: Vec<Movement>,
}

impl MovementLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a movement for `product`.
    pub fn record(
        &mut self,
        product: &Product,
        kind: MovementKind,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> &Movement {
        self.entries.push(Movement {
            product_id: product.id(),
            product_name: product.name().to_string(),
            kind,
            quantity,
            occurred_at,
        });
        let idx = self.entries.len() - 1;
        &self.entries[idx]
    }

    /// All entries in append order.
    pub fn entries(&self) -> &[Movement] {
        &self.entries
    }

    pub fn for_product(&self, product_id: ProductId) -> impl Iterator<Item = &Movement> + '_ {
        self.entries.iter().filter(move |m| m.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
