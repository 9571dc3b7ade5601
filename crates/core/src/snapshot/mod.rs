//! Snapshot module - persisted state document, store trait, and backup
//! encoding.

mod snapshot_errors;
mod snapshot_model;
mod snapshot_traits;


pub use snapshot_errors::SnapshotError;
pub use snapshot_model::*;
pub use snapshot_traits::SnapshotStoreTrait;
