//! Portfolio session service.
//!
//! Owns the canonical holdings collection plus the presentation settings
//! that persist with it, applies user actions, and writes the full
//! snapshot through the injected store on every state change. Totals and
//! projections are always derived on read - never cached, never stored.

use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};
use rust_decimal::Decimal;

use crate::errors::Result;
use crate::holdings::Holding;
use crate::ingest;
use crate::snapshot::{PortfolioSnapshot, SnapshotStoreTrait, Theme};
use crate::valuation::{self, TagTotals, Totals};
use crate::view::{self, QuickViewOptions, ViewOptions};

/// Carry-over policy when the holdings collection is replaced wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarryOver {
    /// Upload path: tags and hidden flags survive for instruments
    /// present in both the old and the new collection; every other
    /// field comes from the new source.
    TagsAndHidden,
    /// Import path: the incoming data is authoritative, nothing
    /// survives.
    Nothing,
}

/// Service owning one view session's portfolio state.
pub struct PortfolioService {
    store: Arc<dyn SnapshotStoreTrait>,
    holdings: Vec<Holding>,
    theme: Theme,
    hidden_quick_view_tags: Vec<String>,
}

impl PortfolioService {
    /// Creates an empty session around the injected snapshot store.
    pub fn new(store: Arc<dyn SnapshotStoreTrait>) -> Self {
        Self {
            store,
            holdings: Vec::new(),
            theme: Theme::default(),
            hidden_quick_view_tags: Vec::new(),
        }
    }

    /// Loads the persisted snapshot, once, at startup. An absent
    /// snapshot leaves the session empty; a load failure surfaces to the
    /// caller and leaves the in-memory state untouched.
    pub fn initialize(&mut self) -> Result<()> {
        match self.store.load()? {
            Some(snapshot) => {
                self.holdings = snapshot.restore_holdings();
                self.theme = snapshot.theme;
                self.hidden_quick_view_tags = snapshot.hidden_quick_view_tags;
                debug!("Restored {} holdings from persisted snapshot", self.holdings.len());
            }
            None => {
                debug!("No persisted snapshot found; starting with an empty session");
            }
        }
        Ok(())
    }

    fn persist(&self) -> Result<()> {
        let snapshot =
            PortfolioSnapshot::capture(&self.holdings, self.theme, &self.hidden_quick_view_tags);
        self.store.save(&snapshot)
    }

    fn find_mut(&mut self, instrument: &str) -> Option<&mut Holding> {
        self.holdings.iter_mut().find(|h| h.instrument == instrument)
    }

    // =========================================================================
    // Reads - always derived from the current collection
    // =========================================================================

    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn hidden_quick_view_tags(&self) -> &[String] {
        &self.hidden_quick_view_tags
    }

    /// Totals over the whole collection.
    pub fn totals(&self) -> Totals {
        valuation::calculate_totals(&self.holdings)
    }

    /// Totals over the holdings not flagged hidden.
    pub fn visible_totals(&self) -> Totals {
        valuation::calculate_visible_totals(&self.holdings)
    }

    /// Totals over the hidden holdings only.
    pub fn hidden_totals(&self) -> Totals {
        valuation::calculate_hidden_totals(&self.holdings)
    }

    /// Per-tag rollups over the whole collection.
    pub fn tag_totals(&self) -> Vec<TagTotals> {
        valuation::calculate_tag_totals(&self.holdings)
    }

    /// Every distinct tag, in first-seen order.
    pub fn distinct_tags(&self) -> Vec<String> {
        valuation::distinct_tags(&self.holdings)
    }

    pub fn visible_count(&self) -> usize {
        self.holdings.iter().filter(|h| !h.hidden).count()
    }

    pub fn hidden_count(&self) -> usize {
        self.holdings.iter().filter(|h| h.hidden).count()
    }

    /// Main table projection.
    pub fn project(&self, options: &ViewOptions) -> Vec<Holding> {
        view::project(&self.holdings, options)
    }

    /// Quick-view projection with its own sort and hidden-tag exclusion.
    pub fn project_quick_view(
        &self,
        options: &ViewOptions,
        quick: &QuickViewOptions,
    ) -> Vec<Holding> {
        view::project_quick_view(&self.holdings, options, quick)
    }

    // =========================================================================
    // Mutations - each one persists the full snapshot
    // =========================================================================

    /// Replaces the collection wholesale. Returns the new collection
    /// size.
    pub fn replace_holdings(
        &mut self,
        mut incoming: Vec<Holding>,
        carry_over: CarryOver,
    ) -> Result<usize> {
        if carry_over == CarryOver::TagsAndHidden {
            for holding in &mut incoming {
                if let Some(existing) = self
                    .holdings
                    .iter()
                    .find(|e| e.instrument == holding.instrument)
                {
                    holding.tags = existing.tags.clone();
                    holding.hidden = existing.hidden;
                }
            }
        }
        self.holdings = incoming;
        self.persist()?;
        Ok(self.holdings.len())
    }

    /// Ingests already-cell-split spreadsheet rows (header row first)
    /// and replaces the collection, carrying tags and hidden flags over
    /// by instrument key.
    pub fn upload_rows(&mut self, rows: &[Vec<String>]) -> Result<usize> {
        let incoming = ingest::holdings_from_upload_rows(rows)?;
        self.replace_holdings(incoming, CarryOver::TagsAndHidden)
    }

    /// Ingests from the first available source file in `dir` and
    /// replaces the collection, carrying tags and hidden flags over.
    pub fn load_from_source_dir(&mut self, dir: &Path) -> Result<usize> {
        let incoming = ingest::load_from_source_dir(dir)?;
        self.replace_holdings(incoming, CarryOver::TagsAndHidden)
    }

    /// Flips one holding's hidden flag. Unknown instruments are ignored.
    pub fn toggle_hidden(&mut self, instrument: &str) -> Result<()> {
        match self.find_mut(instrument) {
            Some(holding) => {
                holding.hidden = !holding.hidden;
                self.persist()
            }
            None => {
                warn!("toggle_hidden: unknown instrument '{}'", instrument);
                Ok(())
            }
        }
    }

    /// Adds a tag to one holding, preserving insertion order and
    /// preventing duplicates.
    pub fn add_tag(&mut self, instrument: &str, tag: &str) -> Result<()> {
        let changed = self
            .find_mut(instrument)
            .map(|h| h.add_tag(tag))
            .unwrap_or(false);
        if changed {
            self.persist()?;
        }
        Ok(())
    }

    pub fn remove_tag(&mut self, instrument: &str, tag: &str) -> Result<()> {
        let changed = self
            .find_mut(instrument)
            .map(|h| h.remove_tag(tag))
            .unwrap_or(false);
        if changed {
            self.persist()?;
        }
        Ok(())
    }

    /// Adds a tag to every selected instrument. Returns how many
    /// holdings actually changed.
    pub fn add_tag_bulk(&mut self, instruments: &[String], tag: &str) -> Result<usize> {
        let mut changed = 0;
        for holding in &mut self.holdings {
            if instruments.contains(&holding.instrument) && holding.add_tag(tag) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Removes a tag from every selected instrument. Returns how many
    /// holdings actually changed.
    pub fn remove_tag_bulk(&mut self, instruments: &[String], tag: &str) -> Result<usize> {
        let mut changed = 0;
        for holding in &mut self.holdings {
            if instruments.contains(&holding.instrument) && holding.remove_tag(tag) {
                changed += 1;
            }
        }
        if changed > 0 {
            self.persist()?;
        }
        Ok(changed)
    }

    /// Sets the scenario price for one holding.
    pub fn set_custom_value(&mut self, instrument: &str, value: Decimal) -> Result<()> {
        match self.find_mut(instrument) {
            Some(holding) => {
                holding.custom_value = value;
                self.persist()
            }
            None => Ok(()),
        }
    }

    /// Sets the scenario average-cost target for one holding.
    pub fn set_target_avg_cost(&mut self, instrument: &str, value: Decimal) -> Result<()> {
        match self.find_mut(instrument) {
            Some(holding) => {
                holding.target_avg_cost = value;
                self.persist()
            }
            None => Ok(()),
        }
    }

    pub fn set_theme(&mut self, theme: Theme) -> Result<()> {
        self.theme = theme;
        self.persist()
    }

    pub fn set_hidden_quick_view_tags(&mut self, tags: Vec<String>) -> Result<()> {
        self.hidden_quick_view_tags = tags;
        self.persist()
    }

    // =========================================================================
    // Backup and teardown
    // =========================================================================

    /// Encodes the current state as a pretty-printed backup document.
    pub fn export_backup(&self) -> Result<String> {
        let snapshot =
            PortfolioSnapshot::capture(&self.holdings, self.theme, &self.hidden_quick_view_tags);
        Ok(snapshot.to_backup_json()?)
    }

    /// Replaces the whole session state from a backup document. The
    /// backup is authoritative: no tag or hidden carry-over from the
    /// previous collection. Returns the imported collection size.
    pub fn import_backup(&mut self, content: &str) -> Result<usize> {
        let snapshot = PortfolioSnapshot::from_backup_json(content)?;
        self.holdings = snapshot.restore_holdings();
        self.theme = snapshot.theme;
        self.hidden_quick_view_tags = snapshot.hidden_quick_view_tags;
        self.persist()?;
        Ok(self.holdings.len())
    }

    /// Destroys the collection and the persisted snapshot. The theme is
    /// left as the user set it.
    pub fn clear_all(&mut self) -> Result<()> {
        self.holdings.clear();
        self.hidden_quick_view_tags.clear();
        self.store.clear()
    }
}
