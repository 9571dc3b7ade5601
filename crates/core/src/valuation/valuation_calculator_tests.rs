//! Tests for the aggregation engine.
//!
//! Unit tests cover the worked portfolio fixture (including the weighted
//! day-change example) and the exclusion policies; property tests cover
//! order-independence, filter idempotence, and the division guards.

#[cfg(test)]
mod tests {
    use crate::holdings::Holding;
    use crate::valuation::{
        calculate_hidden_totals, calculate_tag_totals, calculate_totals, calculate_visible_totals,
        distinct_tags, Totals,
    };
    use proptest::prelude::*;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn holding(
        instrument: &str,
        invested: Decimal,
        cur_val: Decimal,
        pl: Decimal,
        day_chg: Decimal,
        tags: &[&str],
        hidden: bool,
    ) -> Holding {
        Holding {
            instrument: instrument.to_string(),
            quantity: dec!(10),
            avg_cost: dec!(100),
            ltp: dec!(100),
            invested,
            cur_val,
            pl,
            net_chg: Decimal::ZERO,
            day_chg,
            tags: tags.iter().map(|t| t.to_string()).collect(),
            hidden,
            custom_value: dec!(100),
            target_avg_cost: dec!(100),
        }
    }

    fn sample_portfolio() -> Vec<Holding> {
        vec![
            holding(
                "AAPL",
                dec!(1500),
                dec!(1600),
                dec!(100),
                dec!(2.5),
                &["tech", "growth"],
                false,
            ),
            holding(
                "GOOGL",
                dec!(10000),
                dec!(10500),
                dec!(500),
                dec!(-1.5),
                &["tech"],
                false,
            ),
            holding(
                "TSLA",
                dec!(4000),
                dec!(3600),
                dec!(-400),
                dec!(3.0),
                &["tech", "volatile"],
                true,
            ),
            // Zero current value: excluded from every total
            holding(
                "DELISTED",
                dec!(5000),
                Decimal::ZERO,
                dec!(-5000),
                Decimal::ZERO,
                &[],
                false,
            ),
        ]
    }

    // =========================================================================
    // calculate_totals
    // =========================================================================

    #[test]
    fn test_totals_sums_exclude_zero_value_holdings() {
        let totals = calculate_totals(&sample_portfolio());
        assert_eq!(totals.invested, dec!(15500));
        assert_eq!(totals.cur_val, dec!(15700));
        assert_eq!(totals.pl, dec!(200));
    }

    #[test]
    fn test_totals_pl_percent() {
        let totals = calculate_totals(&sample_portfolio());
        // (200 / 15500) * 100 = 1.29%
        assert!((totals.pl_percent - dec!(1.29)).abs() < dec!(0.01));
    }

    #[test]
    fn test_totals_weighted_day_change() {
        let totals = calculate_totals(&sample_portfolio());
        // (2.5 * 1500 - 1.5 * 10000 + 3.0 * 4000) / 100 = 7.5
        // (7.5 / 15500) * 100 = 0.048%
        assert!((totals.day_chg - dec!(0.048)).abs() < dec!(0.01));
    }

    #[test]
    fn test_totals_empty_collection_is_zero() {
        assert_eq!(calculate_totals(&[]), Totals::zero());
    }

    #[test]
    fn test_totals_only_zero_value_holdings_is_zero() {
        let delisted = vec![holding(
            "DELISTED",
            dec!(5000),
            Decimal::ZERO,
            dec!(-5000),
            Decimal::ZERO,
            &[],
            false,
        )];
        assert_eq!(calculate_totals(&delisted), Totals::zero());
    }

    #[test]
    fn test_totals_single_holding_day_change_is_its_own() {
        let one = vec![holding(
            "AAPL",
            dec!(2000),
            dec!(2100),
            dec!(100),
            dec!(5.0),
            &[],
            false,
        )];
        assert_eq!(calculate_totals(&one).day_chg, dec!(5.0));
    }

    #[test]
    fn test_totals_opposing_day_changes_cancel() {
        let pair = vec![
            holding("A", dec!(1000), dec!(1100), dec!(100), dec!(2.0), &[], false),
            holding("B", dec!(2000), dec!(2100), dec!(100), dec!(-1.0), &[], false),
        ];
        // (2.0 * 1000 - 1.0 * 2000) / 100 = 0
        assert_eq!(calculate_totals(&pair).day_chg, Decimal::ZERO);
    }

    // =========================================================================
    // visible / hidden subsets
    // =========================================================================

    #[test]
    fn test_visible_totals_exclude_hidden_holdings() {
        let totals = calculate_visible_totals(&sample_portfolio());
        // TSLA is hidden, DELISTED has zero current value
        assert_eq!(totals.invested, dec!(11500));
        assert_eq!(totals.cur_val, dec!(12100));
        assert_eq!(totals.pl, dec!(600));
        assert!((totals.pl_percent - dec!(5.22)).abs() < dec!(0.01));
    }

    #[test]
    fn test_visible_totals_all_hidden_is_zero() {
        let mut all_hidden = sample_portfolio();
        for h in &mut all_hidden {
            h.hidden = true;
        }
        assert_eq!(calculate_visible_totals(&all_hidden), Totals::zero());
    }

    #[test]
    fn test_hidden_totals_cover_only_hidden_holdings() {
        let totals = calculate_hidden_totals(&sample_portfolio());
        assert_eq!(totals.invested, dec!(4000));
        assert_eq!(totals.cur_val, dec!(3600));
        assert_eq!(totals.pl, dec!(-400));
        assert_eq!(totals.pl_percent, dec!(-10));
    }

    // =========================================================================
    // per-tag rollups
    // =========================================================================

    #[test]
    fn test_distinct_tags_keep_first_seen_order() {
        assert_eq!(
            distinct_tags(&sample_portfolio()),
            vec!["tech", "growth", "volatile"]
        );
    }

    #[test]
    fn test_tag_totals_roll_up_per_tag() {
        let rollups = calculate_tag_totals(&sample_portfolio());
        let tech = rollups.iter().find(|r| r.tag == "tech").unwrap();
        // Tag rollups ignore the hidden flag: AAPL + GOOGL + TSLA
        assert_eq!(tech.totals.invested, dec!(15500));
        let growth = rollups.iter().find(|r| r.tag == "growth").unwrap();
        assert_eq!(growth.totals.invested, dec!(1500));
        let volatile = rollups.iter().find(|r| r.tag == "volatile").unwrap();
        assert_eq!(volatile.totals.invested, dec!(4000));
    }

    #[test]
    fn test_tag_totals_keep_zero_invested_tags_in_computed_set() {
        let mut holdings = sample_portfolio();
        // Tag only the zero-value holding; its rollup aggregates to zero
        holdings[3].add_tag("dead");
        let rollups = calculate_tag_totals(&holdings);
        let dead = rollups.iter().find(|r| r.tag == "dead").unwrap();
        assert_eq!(dead.totals, Totals::zero());
    }

    // =========================================================================
    // properties
    // =========================================================================

    prop_compose! {
        fn arb_holding()(
            invested_cents in 0i64..=1_000_000_00,
            cur_val_cents in -100_000_00i64..=1_000_000_00,
            pl_cents in -500_000_00i64..=500_000_00,
            day_chg_bps in -10_000i64..=10_000,
            hidden in any::<bool>(),
            idx in 0usize..1000,
        ) -> Holding {
            holding(
                &format!("SYM{}", idx),
                Decimal::new(invested_cents, 2),
                Decimal::new(cur_val_cents, 2),
                Decimal::new(pl_cents, 2),
                Decimal::new(day_chg_bps, 2),
                &[],
                hidden,
            )
        }
    }

    proptest! {
        #[test]
        fn prop_aggregation_is_order_independent(
            mut holdings in prop::collection::vec(arb_holding(), 0..40)
        ) {
            let forward = calculate_totals(&holdings);
            holdings.reverse();
            prop_assert_eq!(forward, calculate_totals(&holdings));
        }

        #[test]
        fn prop_reaggregating_the_filtered_set_is_identity(
            holdings in prop::collection::vec(arb_holding(), 0..40)
        ) {
            let filtered: Vec<Holding> = holdings
                .iter()
                .filter(|h| h.cur_val > Decimal::ZERO)
                .cloned()
                .collect();
            prop_assert_eq!(calculate_totals(&holdings), calculate_totals(&filtered));
        }

        #[test]
        fn prop_visible_totals_never_exceed_full_totals(
            holdings in prop::collection::vec(arb_holding(), 0..40)
        ) {
            let full = calculate_totals(&holdings);
            let visible = calculate_visible_totals(&holdings);
            prop_assert!(visible.invested <= full.invested);
            prop_assert!(visible.cur_val <= full.cur_val);
        }

        #[test]
        fn prop_zero_invested_collection_yields_zero_percentages(
            holdings in prop::collection::vec(arb_holding(), 0..40)
        ) {
            let zeroed: Vec<Holding> = holdings
                .into_iter()
                .map(|mut h| {
                    h.invested = Decimal::ZERO;
                    h
                })
                .collect();
            let totals = calculate_totals(&zeroed);
            prop_assert_eq!(totals.pl_percent, Decimal::ZERO);
            prop_assert_eq!(totals.day_chg, Decimal::ZERO);
        }
    }
}
