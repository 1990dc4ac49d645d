use minierp_inventory::Product;

/// Products with strictly fewer units than this are flagged.
pub const LOW_STOCK_THRESHOLD: u32 = 5;

/// One product line of the stock report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLine<'a> {
    pub product: &'a Product,
    pub low_stock: bool,
}

/// Every product, in store order, with the low-stock flag applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LowStockReport<'a> {
    pub lines: Vec<StockLine<'a>>,
    pub threshold: u32,
}

impl<'a> LowStockReport<'a> {
    pub fn total_count(&self) -> usize {
        self.lines.len()
    }

    pub fn flagged_count(&self) -> usize {
        self.lines.iter().filter(|l| l.low_stock).count()
    }

    pub fn flagged(&self) -> impl Iterator<Item = &'a Product> + '_ {
        self.lines.iter().filter(|l| l.low_stock).map(|l| l.product)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

pub fn low_stock_report(products: &[Product]) -> LowStockReport<'_> {
    LowStockReport {
        lines: products
            .iter()
            .map(|product| StockLine {
                product,
                low_stock: product.quantity() < LOW_STOCK_THRESHOLD,
            })
            .collect(),
        threshold: LOW_STOCK_THRESHOLD,
    }
}
