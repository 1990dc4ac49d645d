//! Inventory service: store + ledger behind one handle.
//!
//! Every accepted stock movement mutates the store and appends to the ledger
//! in the same call; rejected movements touch neither.

use chrono::{DateTime, Utc};

use minierp_core::{DomainResult, Entity, ProductId};

use crate::ledger::{Movement, MovementKind, MovementLedger};
use crate::product::{NewProduct, Product};
use crate::store::InventoryStore;

#[derive(Debug, Clone, Default)]
pub struct InventoryService {
    store: InventoryStore,
    ledger: MovementLedger,
}

impl InventoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, new: NewProduct) -> DomainResult<&Product> {
        match self.store.add(new) {
            Ok(product) => {
                tracing::info!(
                    product_id = %product.id(),
                    name = product.name(),
                    quantity = product.quantity(),
                    "product registered"
                );
                Ok(product)
            }
            Err(e) => {
                tracing::warn!(error = %e, "registration rejected");
                Err(e)
            }
        }
    }

    pub fn find(&self, identifier: &str) -> Option<&Product> {
        self.store.find(identifier)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.store.find_by_name(name)
    }

    /// Remove a product. Ledger entries that reference it are kept.
    pub fn remove(&mut self, identifier: &str) -> DomainResult<Product> {
        let result = self.store.remove(identifier);
        match &result {
            Ok(product) => {
                tracing::info!(product_id = %product.id(), name = product.name(), "product removed")
            }
            Err(e) => tracing::warn!(identifier, error = %e, "removal rejected"),
        }
        result
    }

    /// Apply and record a movement.
    pub fn move_stock(
        &mut self,
        product_id: ProductId,
        kind: MovementKind,
        quantity: u32,
        occurred_at: DateTime<Utc>,
    ) -> DomainResult<Movement> {
        let product = match self.store.adjust(product_id, kind, quantity) {
            Ok(product) => product,
            Err(e) => {
                tracing::warn!(%product_id, %kind, quantity, error = %e, "movement rejected");
                return Err(e);
            }
        };

        tracing::info!(
            %product_id,
            %kind,
            quantity,
            on_hand = product.quantity(),
            "stock movement recorded"
        );
        Ok(self.ledger.record(product, kind, quantity, occurred_at).clone())
    }

    pub fn products(&self) -> &[Product] {
        self.store.products()
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn ledger(&self) -> &MovementLedger {
        &self.ledger
    }
}
