//! Black-box tests: scripted stdin through the full menu loop.

use std::io::Cursor;

use chrono::{DateTime, TimeZone, Utc};
use minierp_cli::App;
use minierp_reporting::ReportFormatter;

fn clock() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 30, 18, 0, 0).unwrap()
}

/// Join script lines with newlines and run a whole session.
fn session(lines: &[&str]) -> String {
    let mut script = lines.join("\n");
    script.push('\n');

    let mut app = App::new(
        ReportFormatter::new("R$", false),
        Cursor::new(script),
        Vec::new(),
    )
    .with_clock(clock);
    app.run().expect("session should not fail on in-memory IO");
    String::from_utf8(app.into_output()).expect("output is utf-8")
}

fn register<'a>(name: &'a str, category: &'a str, price: &'a str, qty: &'a str) -> [&'a str; 5] {
    ["1", name, category, price, qty]
}

fn line_with<'a>(out: &'a str, needle: &str) -> &'a str {
    out.lines()
        .find(|l| l.contains(needle))
        .unwrap_or_else(|| panic!("no line containing {needle:?} in:\n{out}"))
}

#[test]
fn full_session_reports_abc_curve() {
    let mut script = Vec::new();
    script.extend(register("Laptop", "Electronics", "800", "1"));
    script.extend(register("Mouse", "Electronics", "15", "10"));
    script.extend(register("Notepad", "Office", "2.50", "20"));
    script.extend(["5", "7"]);

    let out = session(&script);

    assert!(out.contains("Total inventory value: R$ 1,000.00"));
    assert!(line_with(&out, "| Laptop").starts_with("A "));
    assert!(line_with(&out, "| Mouse").starts_with("B "));
    assert!(line_with(&out, "| Notepad").starts_with("C "));
    assert!(line_with(&out, "| Notepad").ends_with("100.00%"));
    assert!(out.contains("* A = items making up the first 80% of total value"));
}

#[test]
fn low_stock_threshold_is_exclusive() {
    let mut script = Vec::new();
    script.extend(register("Exactly", "Misc", "1", "5"));
    script.extend(register("Below", "Misc", "1", "4"));
    script.extend(["4", "7"]);

    let out = session(&script);

    assert!(!line_with(&out, "| Exactly").contains("LOW STOCK"));
    assert!(line_with(&out, "| Below").contains("LOW STOCK"));
    assert!(out.contains("Total products registered: 2"));
    assert!(out.contains("Products with low stock (<5): 1"));
}

#[test]
fn invalid_numbers_are_reprompted() {
    let out = session(&["1", "Cable", "Electronics", "abc", "0", "-1", "12.90", "x", "-3", "7", "7"]);

    assert_eq!(out.matches("Invalid input. Enter a valid positive price.").count(), 3);
    assert_eq!(
        out.matches("Invalid input. Enter a non-negative whole number.").count(),
        2
    );
    assert!(out.contains("Product 'Cable' registered successfully! ID: 1"));
}

#[test]
fn oversized_outbound_is_rejected_and_not_logged() {
    let mut script = Vec::new();
    script.extend(register("Cable", "Electronics", "12.90", "3"));
    script.extend(["3", "1", "o", "5"]);
    script.extend(["6", "7"]);

    let out = session(&script);

    assert!(out.contains("Error: cannot remove 5 unit(s) of 'Cable': only 3 in stock."));
    assert!(out.contains("No movements recorded."));
}

#[test]
fn history_outlives_removed_products() {
    let mut script = Vec::new();
    script.extend(register("Cable", "Electronics", "12.90", "3"));
    script.extend(["3", "cable", "i", "2"]);
    script.extend(["2", "1"]);
    script.extend(register("Plug", "Electronics", "4", "1"));
    script.extend(["2", "1"]);
    script.extend(["6", "7"]);

    let out = session(&script);

    assert!(out.contains("INBOUND of 2 unit(s) of 'Cable' recorded."));
    assert!(out.contains("New stock for 'Cable': 5"));
    assert!(out.contains("Product 'Cable' (ID: 1) was removed."));
    assert!(out.contains("Error: product '1' not found."));
    // Ids are never reused.
    assert!(out.contains("Product 'Plug' registered successfully! ID: 2"));

    let entry = line_with(&out, "2025-06-30 18:00:00 UTC");
    assert!(entry.contains("Cable"));
    assert!(entry.contains("IN"));
}

#[test]
fn zero_value_inventory_falls_back_to_plain_list() {
    let mut script = Vec::new();
    script.extend(register("Ghost", "Misc", "9.99", "0"));
    script.extend(["5", "7"]);

    let out = session(&script);

    assert!(out.contains("Total inventory value: R$ 0.00"));
    assert!(out.contains("the ABC curve cannot be computed"));
    assert!(line_with(&out, "| Ghost").contains("R$ 0.00"));
}

#[test]
fn empty_inventory_messages() {
    let out = session(&["2", "4", "5", "7"]);

    assert!(out.contains("Inventory is empty. There are no products to remove."));
    assert!(out.contains("Inventory is empty. No products registered."));
    assert!(out.contains("No products in inventory."));
}
