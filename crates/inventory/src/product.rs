use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minierp_core::{DomainError, DomainResult, Entity, ProductId};

/// Upper bound for a unit price (keeps `price × quantity` sums well inside `Decimal` range).
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// A product held in the inventory store.
///
/// Only the store creates products, so `id` uniqueness and name uniqueness are
/// enforced there. Quantity changes go through [`Product::receive`] and
/// [`Product::issue`], which never let it go negative.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    category: String,
    unit_price: Decimal,
    quantity: u32,
}

impl Product {
    pub(crate) fn from_registration(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            name: new.name,
            category: new.category,
            unit_price: new.unit_price,
            quantity: new.quantity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    /// Monetary value held: `unit_price × quantity`, exact.
    pub fn total_value(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }

    /// Case-insensitive name comparison used for lookup and duplicate checks.
    pub fn name_matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.trim().to_lowercase()
    }

    /// Add `quantity` units.
    pub(crate) fn receive(&mut self, quantity: u32) -> DomainResult<u32> {
        let next = self.quantity.checked_add(quantity).ok_or_else(|| {
            DomainError::validation(format!(
                "receiving {quantity} unit(s) would overflow the stock of '{}'",
                self.name
            ))
        })?;
        self.quantity = next;
        Ok(next)
    }

    /// Remove `quantity` units; rejected without mutation when stock is short.
    pub(crate) fn issue(&mut self, quantity: u32) -> DomainResult<u32> {
        if self.quantity < quantity {
            return Err(DomainError::InsufficientStock {
                product: self.name.clone(),
                requested: quantity,
                available: self.quantity,
            });
        }
        self.quantity -= quantity;
        Ok(self.quantity)
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Registration input, validated before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub unit_price: Decimal,
    pub quantity: u32,
}

impl NewProduct {
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        unit_price: Decimal,
        quantity: u32,
    ) -> Self {
        Self {
            name: name.into().trim().to_string(),
            category: category.into().trim().to_string(),
            unit_price,
            quantity,
        }
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        validate_unit_price(self.unit_price)
    }
}

/// Unit prices must be strictly positive and at most [`MAX_UNIT_PRICE`].
pub fn validate_unit_price(price: Decimal) -> DomainResult<()> {
    if price <= Decimal::ZERO {
        return Err(DomainError::validation("unit price must be greater than zero"));
    }
    if price > MAX_UNIT_PRICE {
        return Err(DomainError::validation(format!(
            "unit price must not exceed {MAX_UNIT_PRICE}"
        )));
    }
    Ok(())
}
