//! Derived-field calculator for individual holdings.
//!
//! The single source of truth for per-holding derived values. Ingestion
//! and presentation layers call these functions rather than recomputing
//! the formulas inline.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::Holding;

/// P&L expressed as a percentage of the invested amount.
///
/// Guarded against division by zero: any non-positive invested amount
/// yields zero, never NaN.
pub fn net_change_percent(pl: Decimal, invested: Decimal) -> Decimal {
    if invested > Decimal::ZERO {
        (pl / invested) * dec!(100)
    } else {
        Decimal::ZERO
    }
}

/// Suggested additional purchase quantity that shifts the position's
/// average cost to `target_avg_cost`, assuming the extra units are bought
/// at `custom_value`.
///
/// Solves `(avg_cost * qty + custom_value * n) / (qty + n) = target` for
/// the whole-unit `n`, rounding up toward positive infinity. A negative
/// result means the target is unreachable by buying (it would require
/// selling); callers display the sign rather than rejecting it.
pub fn shares_to_buy(holding: &Holding) -> Decimal {
    if holding.custom_value == holding.target_avg_cost {
        // No gap between scenario price and target: no trade size solves
        // the blend equation.
        return Decimal::ZERO;
    }
    let numerator =
        (holding.target_avg_cost * holding.quantity) - (holding.avg_cost * holding.quantity);
    let denominator = holding.custom_value - holding.target_avg_cost;
    (numerator / denominator).ceil()
}

/// Indicative outlay for the suggested purchase, `ltp * shares_to_buy`.
/// Informational only; not validated against real margin rules.
pub fn margin_required(holding: &Holding) -> Decimal {
    holding.ltp * shares_to_buy(holding)
}

/// Scenario starting point for the average-cost target: the current
/// average cost nudged by half the net change percentage.
///
/// Ingestion initializes `target_avg_cost` to the plain `avg_cost`; this
/// helper exists for callers that want the nudged suggestion instead.
pub fn suggested_target_avg_cost(avg_cost: Decimal, net_chg: Decimal) -> Decimal {
    avg_cost * (Decimal::ONE + net_chg / dec!(200))
}
