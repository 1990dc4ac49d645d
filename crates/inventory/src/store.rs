//! In-memory inventory store.

use minierp_core::{DomainError, DomainResult, Entity, IdSequence, ProductId};

use crate::ledger::MovementKind;
use crate::product::{NewProduct, Product};

/// How a user-supplied identifier is resolved.
///
/// Anything that parses as an integer is an id lookup, and only an id lookup:
/// a product literally named `"12"` cannot be found by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProductLookup {
    Id(i64),
    Name(String),
}

impl ProductLookup {
    pub fn parse(identifier: &str) -> Self {
        let identifier = identifier.trim();
        match identifier.parse::<i64>() {
            Ok(n) => ProductLookup::Id(n),
            Err(_) => ProductLookup::Name(identifier.to_string()),
        }
    }

    fn matches(&self, product: &Product) -> bool {
        match self {
            ProductLookup::Id(n) => i64::try_from(product.id().get()).is_ok_and(|id| id == *n),
            ProductLookup::Name(name) => product.name_matches(name),
        }
    }
}

/// Owned product list plus the id counter.
///
/// Insertion order is preserved; reports that tie on value fall back to it.
#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    products: Vec<Product>,
    ids: IdSequence,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product, assigning the next id.
    ///
    /// Fails with `DuplicateName` (no mutation, no id consumed) when a product
    /// with the same name in any casing is held.
    pub fn add(&mut self, new: NewProduct) -> DomainResult<&Product> {
        new.validate()?;
        if let Some(existing) = self.find_by_name(&new.name) {
            return Err(DomainError::duplicate_name(new.name, existing.id()));
        }

        let id = self.ids.next_id();
        self.products.push(Product::from_registration(id, new));
        let idx = self.products.len() - 1;
        Ok(&self.products[idx])
    }

    /// Resolve an id-or-name identifier. Exact matches only.
    pub fn find(&self, identifier: &str) -> Option<&Product> {
        let lookup = ProductLookup::parse(identifier);
        self.products.iter().find(|p| lookup.matches(p))
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    /// Case-insensitive exact name match.
    pub fn find_by_name(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.name_matches(name))
    }

    /// Remove by id-or-name, handing the product back.
    pub fn remove(&mut self, identifier: &str) -> DomainResult<Product> {
        let lookup = ProductLookup::parse(identifier);
        let idx = self
            .products
            .iter()
            .position(|p| lookup.matches(p))
            .ok_or_else(|| DomainError::not_found(identifier.trim()))?;
        Ok(self.products.remove(idx))
    }

    /// Apply a stock movement of `quantity` units.
    ///
    /// Outbound movements larger than the stock on hand fail with
    /// `InsufficientStock` and leave the product untouched.
    pub fn adjust(
        &mut self,
        id: ProductId,
        kind: MovementKind,
        quantity: u32,
    ) -> DomainResult<&Product> {
        if quantity == 0 {
            return Err(DomainError::validation("movement quantity must be positive"));
        }

        let product = self
            .products
            .iter_mut()
            .find(|p| p.id() == id)
            .ok_or_else(|| DomainError::not_found(id.to_string()))?;

        match kind {
            MovementKind::In => product.receive(quantity)?,
            MovementKind::Out => product.issue(quantity)?,
        };

        Ok(product)
    }

    /// Products in registration order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
