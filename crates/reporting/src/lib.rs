//! Read-only inventory reports.
//!
//! Nothing here mutates the inventory: reports take a product slice (or the
//! ledger), derive rows, and render text.

pub mod abc;
pub mod format;
pub mod low_stock;
pub mod valuation;

pub use abc::{A_BOUNDARY, AbcOutcome, AbcReport, B_BOUNDARY, ClassifiedRow, Tier, TierSummary, classify};
pub use format::ReportFormatter;
pub use low_stock::{LOW_STOCK_THRESHOLD, LowStockReport, StockLine, low_stock_report};
pub use valuation::{ValuationRow, grand_total, valuate};
