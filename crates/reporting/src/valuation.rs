//! Valuation extraction: product → value row.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minierp_core::{Entity, ProductId};
use minierp_inventory::Product;

/// Inventory value of a single product at report time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValuationRow {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// `unit_price × quantity`
    pub total_value: Decimal,
}

impl ValuationRow {
    pub fn new(product_id: ProductId, name: impl Into<String>, quantity: u32, unit_price: Decimal) -> Self {
        Self {
            product_id,
            name: name.into(),
            quantity,
            unit_price,
            total_value: unit_price * Decimal::from(quantity),
        }
    }
}

impl From<&Product> for ValuationRow {
    fn from(product: &Product) -> Self {
        Self::new(product.id(), product.name(), product.quantity(), product.unit_price())
    }
}

/// One row per product, in the order given.
pub fn valuate(products: &[Product]) -> Vec<ValuationRow> {
    products.iter().map(ValuationRow::from).collect()
}

/// Exact sum of `total_value`.
pub fn grand_total(rows: &[ValuationRow]) -> Decimal {
    rows.iter().map(|r| r.total_value).sum()
}
