//! Plain-text rendering of reports.
//!
//! Output is fixed-width columns separated by ` | `. Money is shown with the
//! configured currency symbol, thousands separators and two decimals.

use rust_decimal::{Decimal, RoundingStrategy};

use minierp_core::Entity;
use minierp_inventory::Movement;

use crate::abc::{AbcOutcome, AbcReport, Tier};
use crate::low_stock::LowStockReport;
use crate::valuation::ValuationRow;

const RED: &str = "\x1b[91m";
const RESET: &str = "\x1b[0m";

const STOCK_RULE: usize = 90;
const ABC_RULE: usize = 78;
const HISTORY_RULE: usize = 78;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportFormatter {
    currency: String,
    color: bool,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self {
            currency: "R$".to_string(),
            color: true,
        }
    }
}

impl ReportFormatter {
    pub fn new(currency: impl Into<String>, color: bool) -> Self {
        Self {
            currency: currency.into(),
            color,
        }
    }

    /// `R$ 1,234.56`
    pub fn money(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let digits = format!("{:.2}", rounded.abs());
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
        format!("{}{sign}{}.{frac_part}", self.prefix(), group_thousands(int_part))
    }

    /// `12.34%`
    pub fn percent(&self, pct: Decimal) -> String {
        let rounded = pct.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("{rounded:.2}%")
    }

    fn prefix(&self) -> String {
        if self.currency.is_empty() {
            String::new()
        } else {
            format!("{} ", self.currency)
        }
    }

    fn highlight(&self, line: String) -> String {
        if self.color {
            format!("{RED}{line}{RESET}")
        } else {
            line
        }
    }

    /// Product table with low-stock rows marked.
    pub fn stock_report(&self, report: &LowStockReport<'_>) -> String {
        if report.is_empty() {
            return "Inventory is empty. No products registered.".to_string();
        }

        let mut lines = Vec::with_capacity(report.total_count() + 5);
        lines.push(format!(
            "{:<4} | {:<30} | {:<15} | {:>12} | {:>6} | Status",
            "ID", "Name", "Category", "Price", "Qty"
        ));
        lines.push("-".repeat(STOCK_RULE));

        for line in &report.lines {
            let p = line.product;
            let status = if line.low_stock { "LOW STOCK" } else { "" };
            let text = format!(
                "{:<4} | {:<30} | {:<15} | {:>12} | {:>6} | {status}",
                p.id(),
                p.name(),
                p.category(),
                self.money(p.unit_price()),
                p.quantity(),
            );
            lines.push(if line.low_stock { self.highlight(text) } else { text });
        }

        lines.push("-".repeat(STOCK_RULE));
        lines.push(format!("Total products registered: {}", report.total_count()));
        lines.push(format!(
            "Products with low stock (<{}): {}",
            report.threshold,
            report.flagged_count()
        ));
        lines.join("\n")
    }

    /// Grand total, ABC table, per-tier summary and legend.
    pub fn valuation_report(&self, outcome: &AbcOutcome) -> String {
        match outcome {
            AbcOutcome::Empty => "No products in inventory.".to_string(),
            AbcOutcome::ZeroValue(rows) => self.zero_value_report(rows),
            AbcOutcome::Classified(report) => self.abc_report(report),
        }
    }

    fn zero_value_report(&self, rows: &[ValuationRow]) -> String {
        let mut lines = vec![
            format!("Total inventory value: {}", self.money(Decimal::ZERO)),
            "-".repeat(ABC_RULE),
            "Inventory holds no monetary value; the ABC curve cannot be computed.".to_string(),
            String::new(),
            format!("{:<4} | {:<30} | {:>18}", "ID", "Name", "Total value"),
            "-".repeat(ABC_RULE),
        ];
        for row in rows {
            lines.push(format!(
                "{:<4} | {:<30} | {:>18}",
                row.product_id,
                row.name,
                self.money(row.total_value)
            ));
        }
        lines.join("\n")
    }

    fn abc_report(&self, report: &AbcReport) -> String {
        let mut lines = vec![
            format!("Total inventory value: {}", self.money(report.grand_total)),
            "-".repeat(ABC_RULE),
            "ABC curve (by total value in stock)".to_string(),
            format!(
                "{:<4} | {:<30} | {:>18} | {:>8} | {:>10}",
                "Tier", "Name", "Total value", "Share", "Cumulative"
            ),
            "-".repeat(ABC_RULE),
        ];

        for row in &report.rows {
            lines.push(format!(
                "{:<4} | {:<30} | {:>18} | {:>8} | {:>10}",
                row.tier,
                row.row.name,
                self.money(row.row.total_value),
                self.percent(row.share_pct),
                self.percent(row.cumulative_pct),
            ));
        }

        lines.push("-".repeat(ABC_RULE));
        for summary in report.tier_summary() {
            lines.push(format!(
                "Tier {}: {} item(s), {} ({})",
                summary.tier,
                summary.items,
                self.money(summary.value),
                self.percent(summary.share_pct),
            ));
        }

        lines.push(String::new());
        for tier in Tier::ALL {
            lines.push(format!("* {tier} = {}.", tier.description()));
        }
        lines.join("\n")
    }

    /// Ledger entries in the order they were recorded.
    pub fn movement_history(&self, movements: &[Movement]) -> String {
        if movements.is_empty() {
            return "No movements recorded.".to_string();
        }

        let mut lines = vec![
            format!(
                "{:<23} | {:<4} | {:<30} | {:<4} | {:>6}",
                "When", "ID", "Product", "Kind", "Qty"
            ),
            "-".repeat(HISTORY_RULE),
        ];
        for m in movements {
            lines.push(format!(
                "{:<23} | {:<4} | {:<30} | {:<4} | {:>6}",
                m.occurred_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
                m.product_id,
                m.product_name,
                m.kind,
                m.quantity,
            ));
        }
        lines.push("-".repeat(HISTORY_RULE));
        lines.push(format!("Movements recorded: {}", movements.len()));
        lines.join("\n")
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
