//! View projection pipeline.
//!
//! Applies tag filter, text search, and a stable sort over the canonical
//! collection, independently of aggregation. Empty results are valid and
//! render as an empty set, never an error.

use crate::holdings::Holding;
use crate::view::{QuickViewOptions, SortDirection, SortField, SortState, ViewOptions};

/// Projects the collection for the main table: tag filter, then text
/// search, then a stable sort.
pub fn project(holdings: &[Holding], options: &ViewOptions) -> Vec<Holding> {
    let mut rows: Vec<Holding> = holdings
        .iter()
        .filter(|h| matches_filters(h, options))
        .cloned()
        .collect();
    sort_rows(&mut rows, &options.sort);
    rows
}

/// Projects the quick view: the main filters apply, holdings carrying
/// any hidden tag are excluded, and the quick view's own sort state
/// orders the result.
pub fn project_quick_view(
    holdings: &[Holding],
    options: &ViewOptions,
    quick: &QuickViewOptions,
) -> Vec<Holding> {
    let mut rows: Vec<Holding> = holdings
        .iter()
        .filter(|h| matches_filters(h, options))
        .filter(|h| !quick.hidden_tags.iter().any(|tag| h.has_tag(tag)))
        .cloned()
        .collect();
    sort_rows(&mut rows, &quick.sort);
    rows
}

fn matches_filters(holding: &Holding, options: &ViewOptions) -> bool {
    if let Some(tag) = &options.selected_tag {
        if !holding.has_tag(tag) {
            return false;
        }
    }
    if let Some(term) = &options.search_term {
        let term = term.to_lowercase();
        if term.is_empty() {
            return true;
        }
        let instrument_match = holding.instrument.to_lowercase().contains(&term);
        let tag_match = holding
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(&term));
        return instrument_match || tag_match;
    }
    true
}

fn sort_rows(rows: &mut [Holding], sort: &SortState) {
    rows.sort_by(|a, b| {
        // String ordering is case-folded; Vec::sort_by keeps the sort
        // stable for equal keys.
        let ordering = match sort.field {
            SortField::Instrument => a
                .instrument
                .to_lowercase()
                .cmp(&b.instrument.to_lowercase()),
            SortField::Quantity => a.quantity.cmp(&b.quantity),
            SortField::AvgCost => a.avg_cost.cmp(&b.avg_cost),
            SortField::Ltp => a.ltp.cmp(&b.ltp),
            SortField::Invested => a.invested.cmp(&b.invested),
            SortField::CurVal => a.cur_val.cmp(&b.cur_val),
            SortField::Pl => a.pl.cmp(&b.pl),
            SortField::NetChg => a.net_chg.cmp(&b.net_chg),
            SortField::DayChg => a.day_chg.cmp(&b.day_chg),
        };
        if sort.direction == SortDirection::Desc {
            ordering.reverse()
        } else {
            ordering
        }
    });
}
