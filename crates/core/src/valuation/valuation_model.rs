//! Rollup models for portfolio totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Aggregated totals over a subset of holdings.
///
/// Always derived on read from the current collection plus a filter
/// predicate, never stored.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of invested amounts over included holdings.
    pub invested: Decimal,
    /// Sum of current values over included holdings.
    pub cur_val: Decimal,
    /// Sum of profit/loss over included holdings.
    pub pl: Decimal,
    /// `pl / invested * 100`, zero when nothing is invested.
    pub pl_percent: Decimal,
    /// Invested-weighted average of per-holding day change percentages.
    /// Day changes are not additive without size-weighting.
    pub day_chg: Decimal,
}

impl Totals {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Totals for the holdings carrying one tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TagTotals {
    pub tag: String,
    pub totals: Totals,
}
