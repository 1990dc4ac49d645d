//! ABC classification by inventory value.
//!
//! Rows are ranked by `total_value` (descending, stable), each row's share of
//! the grand total is computed, and the running share decides the tier:
//!
//! - **A**: cumulative share ≤ 80%
//! - **B**: 80% < cumulative share ≤ 95%
//! - **C**: everything after
//!
//! The row that crosses a boundary lands in the lower tier, so with values
//! `[900, 100]` the first row (90%) is B, not A.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::valuation::{ValuationRow, grand_total};

/// Upper cumulative-share bound (inclusive, percent) of tier A.
pub const A_BOUNDARY: Decimal = Decimal::from_parts(80, 0, 0, false, 0);

/// Upper cumulative-share bound (inclusive, percent) of tier B.
pub const B_BOUNDARY: Decimal = Decimal::from_parts(95, 0, 0, false, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::A, Tier::B, Tier::C];

    /// Tier for a cumulative share given in percent.
    pub fn from_cumulative_pct(cumulative_pct: Decimal) -> Self {
        if cumulative_pct <= A_BOUNDARY {
            Tier::A
        } else if cumulative_pct <= B_BOUNDARY {
            Tier::B
        } else {
            Tier::C
        }
    }

    /// Same boundaries, decided on exact value sums instead of rounded shares.
    ///
    /// `cumulative_value / grand_total ≤ boundary / 100` is checked as
    /// `cumulative_value × 100 ≤ boundary × grand_total`, which involves no
    /// division and therefore no rounding.
    fn from_cumulative_value(cumulative_value: Decimal, grand_total: Decimal) -> Self {
        let scaled = cumulative_value * Decimal::ONE_HUNDRED;
        if scaled <= A_BOUNDARY * grand_total {
            Tier::A
        } else if scaled <= B_BOUNDARY * grand_total {
            Tier::B
        } else {
            Tier::C
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Tier::A => "items making up the first 80% of total value (highest priority)",
            Tier::B => "items making up the next 15% of total value",
            Tier::C => "items making up the remaining 5% of total value",
        }
    }
}

impl core::fmt::Display for Tier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        };
        f.pad(s)
    }
}

/// A valuation row placed on the ABC curve.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedRow {
    #[serde(flatten)]
    pub row: ValuationRow,
    /// `total_value / grand_total × 100`
    pub share_pct: Decimal,
    /// Running sum of `share_pct` up to and including this row.
    pub cumulative_pct: Decimal,
    pub tier: Tier,
}

/// Item count and value held by one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierSummary {
    pub tier: Tier,
    pub items: usize,
    pub value: Decimal,
    pub share_pct: Decimal,
}

/// Classified rows (ranked) plus the grand total they were measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbcReport {
    pub rows: Vec<ClassifiedRow>,
    pub grand_total: Decimal,
}

impl AbcReport {
    pub fn tier_summary(&self) -> Vec<TierSummary> {
        Tier::ALL
            .iter()
            .map(|&tier| {
                let (items, value, share_pct) = self
                    .rows
                    .iter()
                    .filter(|r| r.tier == tier)
                    .fold((0, Decimal::ZERO, Decimal::ZERO), |(n, v, s), r| {
                        (n + 1, v + r.row.total_value, s + r.share_pct)
                    });
                TierSummary {
                    tier,
                    items,
                    value,
                    share_pct,
                }
            })
            .collect()
    }
}

/// Result of running the classifier.
///
/// "Nothing to classify" is an outcome, not an error; empty input and an
/// all-zero inventory are kept apart because they are reported differently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbcOutcome {
    /// No rows supplied.
    Empty,
    /// Rows exist but the grand total is zero. Rows are ranked by value
    /// (stable), without shares or tiers.
    ZeroValue(Vec<ValuationRow>),
    Classified(AbcReport),
}

/// Rank rows by value and assign ABC tiers.
///
/// Ties keep their input order, so the output is fully determined by the
/// order rows are supplied in.
pub fn classify(mut rows: Vec<ValuationRow>) -> AbcOutcome {
    if rows.is_empty() {
        return AbcOutcome::Empty;
    }

    // `sort_by` is stable: equal values stay in supply order.
    rows.sort_by(|a, b| b.total_value.cmp(&a.total_value));

    let total = grand_total(&rows);
    tracing::debug!(rows = rows.len(), grand_total = %total, "classifying inventory value");

    if total.is_zero() {
        return AbcOutcome::ZeroValue(rows);
    }

    let mut cumulative_pct = Decimal::ZERO;
    let mut cumulative_value = Decimal::ZERO;
    let classified = rows
        .into_iter()
        .map(|row| {
            let share_pct = row.total_value * Decimal::ONE_HUNDRED / total;
            cumulative_pct += share_pct;
            cumulative_value += row.total_value;
            ClassifiedRow {
                tier: Tier::from_cumulative_value(cumulative_value, total),
                row,
                share_pct,
                cumulative_pct,
            }
        })
        .collect();

    AbcOutcome::Classified(AbcReport {
        rows: classified,
        grand_total: total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use minierp_core::ProductId;

    fn rows(values: &[i64]) -> Vec<ValuationRow> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                ValuationRow::new(
                    ProductId::new(i as u64 + 1),
                    format!("item-{}", i + 1),
                    1,
                    Decimal::from(v),
                )
            })
            .collect()
    }

    fn classified(values: &[i64]) -> AbcReport {
        match classify(rows(values)) {
            AbcOutcome::Classified(report) => report,
            other => panic!("expected classification, got {other:?}"),
        }
    }

    fn tiers(report: &AbcReport) -> Vec<Tier> {
        report.rows.iter().map(|r| r.tier).collect()
    }

    #[test]
    fn boundaries_belong_to_the_lower_tier() {
        let report = classified(&[50, 800, 150]);

        assert_eq!(report.grand_total, Decimal::from(1000));
        let names: Vec<_> = report.rows.iter().map(|r| r.row.name.as_str()).collect();
        assert_eq!(names, vec!["item-2", "item-3", "item-1"]);

        let shares: Vec<_> = report.rows.iter().map(|r| r.share_pct).collect();
        assert_eq!(shares, vec![Decimal::from(80), Decimal::from(15), Decimal::from(5)]);
        let cumulative: Vec<_> = report.rows.iter().map(|r| r.cumulative_pct).collect();
        assert_eq!(
            cumulative,
            vec![Decimal::from(80), Decimal::from(95), Decimal::from(100)]
        );
        assert_eq!(tiers(&report), vec![Tier::A, Tier::B, Tier::C]);
    }

    #[test]
    fn row_crossing_eighty_percent_is_b() {
        let report = classified(&[900, 100]);
        let cumulative: Vec<_> = report.rows.iter().map(|r| r.cumulative_pct).collect();
        assert_eq!(cumulative, vec![Decimal::from(90), Decimal::from(100)]);
        assert_eq!(tiers(&report), vec![Tier::B, Tier::C]);
    }

    #[test]
    fn single_item_is_a() {
        let report = classified(&[42]);
        assert_eq!(report.rows[0].share_pct, Decimal::ONE_HUNDRED);
        assert_eq!(tiers(&report), vec![Tier::A]);
    }

    #[test]
    fn zero_value_item_ranks_last_as_c() {
        let report = classified(&[0, 10, 90]);
        let last = report.rows.last().unwrap();
        assert_eq!(last.row.name, "item-1");
        assert_eq!(last.share_pct, Decimal::ZERO);
        assert_eq!(last.tier, Tier::C);
    }

    #[test]
    fn exact_boundary_survives_non_terminating_shares() {
        // 4/15 + 4/15 + 4/15 is exactly 80%, even though each share is 26.666...%.
        let report = classified(&[4, 4, 4, 3]);
        assert_eq!(tiers(&report), vec![Tier::A, Tier::A, Tier::A, Tier::C]);
        assert_eq!(report.rows[2].cumulative_pct.round_dp(2), Decimal::from(80));
    }

    #[test]
    fn ties_keep_supply_order() {
        let report = classified(&[10, 30, 10, 30]);
        let ids: Vec<_> = report.rows.iter().map(|r| r.row.product_id.get()).collect();
        assert_eq!(ids, vec![2, 4, 1, 3]);
    }

    #[test]
    fn empty_and_zero_inputs_are_not_classified() {
        assert_eq!(classify(Vec::new()), AbcOutcome::Empty);

        match classify(rows(&[0, 0])) {
            AbcOutcome::ZeroValue(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected zero-value outcome, got {other:?}"),
        }
    }

    #[test]
    fn tier_summary_adds_up() {
        let report = classified(&[800, 150, 30, 20]);
        let summary = report.tier_summary();
        assert_eq!(summary.len(), 3);
        assert_eq!((summary[0].tier, summary[0].items), (Tier::A, 1));
        assert_eq!((summary[1].tier, summary[1].items), (Tier::B, 1));
        assert_eq!((summary[2].tier, summary[2].items), (Tier::C, 2));
        assert_eq!(summary[2].value, Decimal::from(50));

        let total: Decimal = summary.iter().map(|s| s.value).sum();
        assert_eq!(total, report.grand_total);
    }

    #[test]
    fn tier_from_cumulative_pct_matches_boundaries() {
        assert_eq!(Tier::from_cumulative_pct(Decimal::from(80)), Tier::A);
        assert_eq!(Tier::from_cumulative_pct(Decimal::new(8001, 2)), Tier::B);
        assert_eq!(Tier::from_cumulative_pct(Decimal::from(95)), Tier::B);
        assert_eq!(Tier::from_cumulative_pct(Decimal::new(9501, 2)), Tier::C);
    }

    #[test]
    fn classified_row_serializes_flat() {
        let report = classified(&[5]);
        let json = serde_json::to_value(&report.rows[0]).unwrap();
        assert_eq!(json["name"], "item-1");
        assert_eq!(json["tier"], "A");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;
        use rust_decimal::prelude::ToPrimitive;

        fn arb_rows() -> impl Strategy<Value = Vec<ValuationRow>> {
            prop::collection::vec((1i64..1_000_000, 0u32..500), 1..60).prop_map(|items| {
                items
                    .into_iter()
                    .enumerate()
                    .map(|(i, (cents, qty))| {
                        ValuationRow::new(
                            ProductId::new(i as u64 + 1),
                            format!("p{i}"),
                            qty,
                            Decimal::new(cents, 2),
                        )
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 512,
                ..ProptestConfig::default()
            })]

            /// Property: shares sum to 100% (relative tolerance 1e-6).
            #[test]
            fn shares_sum_to_one_hundred(input in arb_rows()) {
                if let AbcOutcome::Classified(report) = classify(input) {
                    let sum: Decimal = report.rows.iter().map(|r| r.share_pct).sum();
                    let sum = sum.to_f64().unwrap_or(f64::NAN);
                    prop_assert!(((sum - 100.0) / 100.0).abs() <= 1e-6, "sum = {}", sum);

                    let last = report.rows.last().map(|r| r.cumulative_pct).unwrap_or_default();
                    let last = last.to_f64().unwrap_or(f64::NAN);
                    prop_assert!(((last - 100.0) / 100.0).abs() <= 1e-6, "last = {}", last);
                }
            }

            /// Property: cumulative share never decreases and tiers never step back.
            #[test]
            fn cumulative_is_monotonic(input in arb_rows()) {
                if let AbcOutcome::Classified(report) = classify(input) {
                    for pair in report.rows.windows(2) {
                        prop_assert!(pair[0].cumulative_pct <= pair[1].cumulative_pct);
                        prop_assert!(pair[0].row.total_value >= pair[1].row.total_value);
                        prop_assert!(pair[0].tier <= pair[1].tier);
                    }
                }
            }

            /// Property: exact per-row values add up to the grand total.
            #[test]
            fn grand_total_is_exact(input in arb_rows()) {
                let expected: Decimal = input.iter().map(|r| r.total_value).sum();
                match classify(input) {
                    AbcOutcome::Classified(report) => {
                        let sum: Decimal = report.rows.iter().map(|r| r.row.total_value).sum();
                        prop_assert_eq!(sum, expected);
                        prop_assert_eq!(report.grand_total, expected);
                    }
                    AbcOutcome::ZeroValue(_) => prop_assert!(expected.is_zero()),
                    AbcOutcome::Empty => prop_assert!(false, "input was non-empty"),
                }
            }

            /// Property: same input order, same output.
            #[test]
            fn classification_is_deterministic(input in arb_rows()) {
                prop_assert_eq!(classify(input.clone()), classify(input));
            }
        }
    }
}
