//! Sort and filter state for the table projections.

use serde::{Deserialize, Serialize};

/// Sortable columns of the holdings table.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    Instrument,
    Quantity,
    AvgCost,
    Ltp,
    Invested,
    CurVal,
    Pl,
    NetChg,
    DayChg,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Header-click driven sort state: clicking the active field toggles the
/// direction, clicking a new field resets to ascending.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    pub fn click(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Filter and ordering options for the main table projection.
#[derive(Debug, Clone, Default)]
pub struct ViewOptions {
    /// Retain only holdings carrying this tag. `None` passes everything
    /// through.
    pub selected_tag: Option<String>,
    /// Case-insensitive substring match over instrument and tags.
    pub search_term: Option<String>,
    pub sort: SortState,
}

/// Options for the quick-view projection, which excludes holdings
/// carrying any tag from a user-chosen hidden set and owns a sort state
/// separate from the main table.
#[derive(Debug, Clone)]
pub struct QuickViewOptions {
    pub hidden_tags: Vec<String>,
    pub sort: SortState,
}

impl Default for QuickViewOptions {
    fn default() -> Self {
        Self {
            hidden_tags: Vec::new(),
            sort: SortState::new(SortField::NetChg, SortDirection::Desc),
        }
    }
}
