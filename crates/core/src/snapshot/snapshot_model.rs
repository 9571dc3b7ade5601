//! Persisted snapshot domain model.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::holdings::Holding;
use crate::snapshot::SnapshotError;

/// Display theme persisted alongside the holdings state.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// One holding record as written to the snapshot document.
///
/// `hidden` and `tags` are always written cleared; both are derived at
/// load time from the snapshot's separate indices so presentation state
/// is never double-booked. Scenario fields absent from older documents
/// default from `ltp`/`avg_cost` on restore.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StoredHolding {
    pub instrument: String,
    pub quantity: Decimal,
    pub avg_cost: Decimal,
    pub ltp: Decimal,
    pub invested: Decimal,
    pub cur_val: Decimal,
    pub pl: Decimal,
    pub net_chg: Decimal,
    pub day_chg: Decimal,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub custom_value: Option<Decimal>,
    #[serde(default)]
    pub target_avg_cost: Option<Decimal>,
}

impl StoredHolding {
    fn from_holding(holding: &Holding) -> Self {
        Self {
            instrument: holding.instrument.clone(),
            quantity: holding.quantity,
            avg_cost: holding.avg_cost,
            ltp: holding.ltp,
            invested: holding.invested,
            cur_val: holding.cur_val,
            pl: holding.pl,
            net_chg: holding.net_chg,
            day_chg: holding.day_chg,
            tags: Vec::new(),
            hidden: false,
            custom_value: Some(holding.custom_value),
            target_avg_cost: Some(holding.target_avg_cost),
        }
    }

    fn into_holding(self, hidden: bool, tags: Vec<String>) -> Holding {
        let custom_value = self.custom_value.unwrap_or(self.ltp);
        let target_avg_cost = self.target_avg_cost.unwrap_or(self.avg_cost);
        Holding {
            instrument: self.instrument,
            quantity: self.quantity,
            avg_cost: self.avg_cost,
            ltp: self.ltp,
            invested: self.invested,
            cur_val: self.cur_val,
            pl: self.pl,
            net_chg: self.net_chg,
            day_chg: self.day_chg,
            tags,
            hidden,
            custom_value,
            target_avg_cost,
        }
    }
}

/// The full persisted state document, written on every state change and
/// read once at startup. Also the backup export/import format.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    #[serde(default)]
    pub holdings: Vec<StoredHolding>,
    /// Instrument keys currently hidden.
    #[serde(default)]
    pub hidden_instruments: Vec<String>,
    /// Instrument key to tag list, only for instruments with at least
    /// one tag.
    #[serde(default)]
    pub instrument_tags: HashMap<String, Vec<String>>,
    #[serde(default)]
    pub theme: Theme,
    /// Tags excluded from the quick-view projection.
    #[serde(default)]
    pub hidden_quick_view_tags: Vec<String>,
}

impl PortfolioSnapshot {
    /// Captures the session state into a persistable document, moving
    /// the per-record hidden/tag state into the indices.
    pub fn capture(holdings: &[Holding], theme: Theme, hidden_quick_view_tags: &[String]) -> Self {
        let hidden_instruments = holdings
            .iter()
            .filter(|h| h.hidden)
            .map(|h| h.instrument.clone())
            .collect();
        let instrument_tags = holdings
            .iter()
            .filter(|h| !h.tags.is_empty())
            .map(|h| (h.instrument.clone(), h.tags.clone()))
            .collect();
        Self {
            holdings: holdings.iter().map(StoredHolding::from_holding).collect(),
            hidden_instruments,
            instrument_tags,
            theme,
            hidden_quick_view_tags: hidden_quick_view_tags.to_vec(),
        }
    }

    /// Rebuilds the in-memory holdings, applying the hidden and tag
    /// indices back onto each record.
    pub fn restore_holdings(&self) -> Vec<Holding> {
        self.holdings
            .iter()
            .map(|stored| {
                let hidden = self.hidden_instruments.contains(&stored.instrument);
                let tags = self
                    .instrument_tags
                    .get(&stored.instrument)
                    .cloned()
                    .unwrap_or_default();
                stored.clone().into_holding(hidden, tags)
            })
            .collect()
    }

    /// Encodes the snapshot as a pretty-printed backup document.
    pub fn to_backup_json(&self) -> Result<String, SnapshotError> {
        serde_json::to_string_pretty(self).map_err(|e| SnapshotError::Serialization(e.to_string()))
    }

    /// Decodes a backup document.
    ///
    /// The document must carry a `holdings` array; everything else falls
    /// back to defaults. A backup is authoritative - importing it fully
    /// replaces the session state.
    pub fn from_backup_json(content: &str) -> Result<Self, SnapshotError> {
        let value: serde_json::Value = serde_json::from_str(content)
            .map_err(|e| SnapshotError::InvalidBackup(format!("not valid JSON: {}", e)))?;
        match value.get("holdings") {
            Some(holdings) if holdings.is_array() => {}
            _ => {
                return Err(SnapshotError::InvalidBackup(
                    "missing 'holdings' array".to_string(),
                ))
            }
        }
        serde_json::from_value(value).map_err(|e| SnapshotError::InvalidBackup(e.to_string()))
    }
}
