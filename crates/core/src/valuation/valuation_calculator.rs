//! Aggregation engine.
//!
//! Pure, order-independent folds from a holding collection into `Totals`.
//! All percentage fields are derived here (and in the holdings
//! calculator); consumers never recompute them inline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::holdings::{net_change_percent, Holding};
use crate::valuation::{TagTotals, Totals};

/// Folds a holding collection into aggregated totals.
///
/// Holdings with a non-positive current value (delisted or fully zeroed
/// positions) are excluded from every total regardless of hidden or tag
/// state. An empty collection yields the zero-valued `Totals` without
/// division errors.
pub fn calculate_totals(holdings: &[Holding]) -> Totals {
    let mut totals = Totals::zero();
    let mut weighted_day_chg = Decimal::ZERO;

    for holding in holdings.iter().filter(|h| h.cur_val > Decimal::ZERO) {
        totals.invested += holding.invested;
        totals.cur_val += holding.cur_val;
        totals.pl += holding.pl;
        weighted_day_chg += holding.day_chg * holding.invested / dec!(100);
    }

    if totals.invested > Decimal::ZERO {
        totals.day_chg = weighted_day_chg / totals.invested * dec!(100);
    }
    totals.pl_percent = net_change_percent(totals.pl, totals.invested);

    totals
}

/// Totals over the holdings not flagged hidden.
///
/// The hidden filter applies before the current-value filter; the two
/// are independent exclusion reasons.
pub fn calculate_visible_totals(holdings: &[Holding]) -> Totals {
    let visible: Vec<Holding> = holdings.iter().filter(|h| !h.hidden).cloned().collect();
    calculate_totals(&visible)
}

/// Totals over the holdings flagged hidden.
pub fn calculate_hidden_totals(holdings: &[Holding]) -> Totals {
    let hidden: Vec<Holding> = holdings.iter().filter(|h| h.hidden).cloned().collect();
    calculate_totals(&hidden)
}

/// Every distinct tag across the collection, in first-seen order.
pub fn distinct_tags(holdings: &[Holding]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for holding in holdings {
        for tag in &holding.tags {
            if !tags.iter().any(|t| t == tag) {
                tags.push(tag.clone());
            }
        }
    }
    tags
}

/// Per-tag rollup: totals over the holdings carrying each distinct tag.
///
/// Tags whose rollup has zero invested amount stay in the computed set;
/// display layers decide whether to omit them.
pub fn calculate_tag_totals(holdings: &[Holding]) -> Vec<TagTotals> {
    distinct_tags(holdings)
        .into_iter()
        .map(|tag| {
            let tagged: Vec<Holding> = holdings
                .iter()
                .filter(|h| h.has_tag(&tag))
                .cloned()
                .collect();
            TagTotals {
                totals: calculate_totals(&tagged),
                tag,
            }
        })
        .collect()
}
