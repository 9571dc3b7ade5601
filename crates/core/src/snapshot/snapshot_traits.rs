//! Store trait for persisted snapshots.

use crate::errors::Result;
use crate::snapshot::PortfolioSnapshot;

/// Store for the persisted snapshot document.
///
/// Implementations own the physical medium (a file, a browser key-value
/// store); the core never touches storage directly, it only receives and
/// returns whole snapshots. Saves are full-document overwrites - last
/// write wins, no coordination between concurrent writers.
pub trait SnapshotStoreTrait: Send + Sync {
    /// Loads the persisted snapshot, or `None` when nothing was saved yet.
    fn load(&self) -> Result<Option<PortfolioSnapshot>>;

    /// Overwrites the persisted snapshot.
    fn save(&self, snapshot: &PortfolioSnapshot) -> Result<()>;

    /// Removes the persisted snapshot entirely.
    fn clear(&self) -> Result<()>;
}
