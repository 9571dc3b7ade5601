//! Tests for the derived-field calculator.

#[cfg(test)]
mod tests {
    use crate::holdings::{
        margin_required, net_change_percent, shares_to_buy, suggested_target_avg_cost, Holding,
    };
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn scenario_holding(
        quantity: Decimal,
        avg_cost: Decimal,
        custom_value: Decimal,
        target_avg_cost: Decimal,
    ) -> Holding {
        Holding {
            instrument: "AAPL".to_string(),
            quantity,
            avg_cost,
            ltp: custom_value,
            invested: quantity * avg_cost,
            cur_val: quantity * custom_value,
            pl: quantity * (custom_value - avg_cost),
            net_chg: Decimal::ZERO,
            day_chg: Decimal::ZERO,
            tags: Vec::new(),
            hidden: false,
            custom_value,
            target_avg_cost,
        }
    }

    // =========================================================================
    // net_change_percent
    // =========================================================================

    #[test]
    fn test_net_change_percent_basic() {
        assert_eq!(net_change_percent(dec!(50), dec!(200)), dec!(25));
    }

    #[test]
    fn test_net_change_percent_non_terminating_division_stays_close() {
        let pct = net_change_percent(dec!(100), dec!(1500));
        assert!((pct - dec!(6.6667)).abs() < dec!(0.001));
    }

    #[test]
    fn test_net_change_percent_negative_pl() {
        assert_eq!(net_change_percent(dec!(-200), dec!(1000)), dec!(-20));
    }

    #[test]
    fn test_net_change_percent_zero_invested_is_zero_not_nan() {
        assert_eq!(net_change_percent(dec!(100), Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn test_net_change_percent_negative_invested_is_zero() {
        assert_eq!(net_change_percent(dec!(100), dec!(-500)), Decimal::ZERO);
    }

    // =========================================================================
    // shares_to_buy
    // =========================================================================

    #[test]
    fn test_shares_to_buy_exact_result() {
        // numerator = (155 - 150) * 10 = 50, denominator = 160 - 155 = 5
        let h = scenario_holding(dec!(10), dec!(150), dec!(160), dec!(155));
        assert_eq!(shares_to_buy(&h), dec!(10));
    }

    #[test]
    fn test_shares_to_buy_rounds_up_fractional_result() {
        // numerator = (154 - 150) * 9 = 36, denominator = 159 - 154 = 5
        // 36 / 5 = 7.2, rounded up to 8 whole units
        let h = scenario_holding(dec!(9), dec!(150), dec!(159), dec!(154));
        assert_eq!(shares_to_buy(&h), dec!(8));
    }

    #[test]
    fn test_shares_to_buy_degenerate_prices_give_zero() {
        let h = scenario_holding(dec!(10), dec!(150), dec!(155), dec!(155));
        assert_eq!(shares_to_buy(&h), Decimal::ZERO);
    }

    #[test]
    fn test_shares_to_buy_negative_when_target_needs_selling() {
        // Target below the current average while buying above it:
        // numerator = (140 - 150) * 10 = -100, denominator = 160 - 140 = 20
        let h = scenario_holding(dec!(10), dec!(150), dec!(160), dec!(140));
        assert_eq!(shares_to_buy(&h), dec!(-5));
    }

    #[test]
    fn test_shares_to_buy_negative_fraction_rounds_toward_positive() {
        // numerator = (146 - 150) * 9 = -36, denominator = 151 - 146 = 5
        // -7.2 rounds up (toward positive infinity) to -7
        let h = scenario_holding(dec!(9), dec!(150), dec!(151), dec!(146));
        assert_eq!(shares_to_buy(&h), dec!(-7));
    }

    // =========================================================================
    // margin_required / suggested_target_avg_cost
    // =========================================================================

    #[test]
    fn test_margin_required_scales_shares_by_ltp() {
        let h = scenario_holding(dec!(10), dec!(150), dec!(160), dec!(155));
        assert_eq!(margin_required(&h), dec!(1600));
    }

    #[test]
    fn test_suggested_target_sits_halfway_into_net_change() {
        // 100 * (1 + 10 / 200) = 105
        assert_eq!(suggested_target_avg_cost(dec!(100), dec!(10)), dec!(105));
    }

    #[test]
    fn test_suggested_target_with_loss_moves_below_avg_cost() {
        assert_eq!(suggested_target_avg_cost(dec!(100), dec!(-20)), dec!(90));
    }

    // =========================================================================
    // Holding tag helpers
    // =========================================================================

    #[test]
    fn test_add_tag_preserves_insertion_order_and_rejects_duplicates() {
        let mut h = scenario_holding(dec!(1), dec!(1), dec!(1), dec!(2));
        assert!(h.add_tag("tech"));
        assert!(h.add_tag("growth"));
        assert!(!h.add_tag("tech"));
        assert!(!h.add_tag("  "));
        assert_eq!(h.tags, vec!["tech", "growth"]);
    }

    #[test]
    fn test_remove_tag_reports_presence() {
        let mut h = scenario_holding(dec!(1), dec!(1), dec!(1), dec!(2));
        h.add_tag("tech");
        assert!(h.remove_tag("tech"));
        assert!(!h.remove_tag("tech"));
        assert!(h.tags.is_empty());
    }
}
