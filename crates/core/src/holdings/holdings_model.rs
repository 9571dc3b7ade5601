//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One tracked position with cost, price, and P&L fields plus the
/// user-assigned presentation state (tags, hidden flag, scenario inputs).
///
/// `invested`, `cur_val`, and `pl` are stored as independent fields even
/// though they are conventionally `quantity * avg_cost`,
/// `quantity * ltp`, and `cur_val - invested`: input sources may supply
/// them directly rather than derived.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Unique identifier within a collection. Acts as the primary key;
    /// uniqueness is assumed from the input source, not enforced.
    pub instrument: String,
    /// Signed count of units held. Zero or negative values are valid
    /// input for closed or edge positions.
    pub quantity: Decimal,
    pub avg_cost: Decimal,
    /// Last traded price per unit.
    pub ltp: Decimal,
    pub invested: Decimal,
    pub cur_val: Decimal,
    pub pl: Decimal,
    /// P&L as a percentage of the invested amount. Zero whenever nothing
    /// is invested.
    pub net_chg: Decimal,
    /// Session price movement percentage, sourced from input, never
    /// derived.
    pub day_chg: Decimal,
    /// User labels in insertion order.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Excludes the holding from visible aggregates while keeping it in
    /// the full collection.
    #[serde(default)]
    pub hidden: bool,
    /// Scenario price fed into the shares-to-buy calculator. Defaults to
    /// `ltp` on ingestion, independently mutable afterwards.
    pub custom_value: Decimal,
    /// Scenario average-cost target. Defaults to `avg_cost` on
    /// ingestion, independently mutable afterwards.
    pub target_avg_cost: Decimal,
}

impl Holding {
    /// Appends a tag, preserving insertion order. Duplicates and blank
    /// values are rejected. Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: &str) -> bool {
        let tag = tag.trim();
        if tag.is_empty() || self.has_tag(tag) {
            return false;
        }
        self.tags.push(tag.to_string());
        true
    }

    /// Removes a tag. Returns whether it was present.
    pub fn remove_tag(&mut self, tag: &str) -> bool {
        let before = self.tags.len();
        self.tags.retain(|t| t != tag);
        self.tags.len() != before
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}
