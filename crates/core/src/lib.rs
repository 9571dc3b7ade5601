//! Holdfolio Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Holdfolio.
//! It is storage-agnostic and defines the snapshot store trait that is
//! implemented by the `storage-file` crate.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod ingest;
pub mod portfolio;
pub mod snapshot;
pub mod valuation;
pub mod view;

// Re-export the domain types most callers need
pub use holdings::Holding;
pub use portfolio::PortfolioService;
pub use snapshot::{PortfolioSnapshot, SnapshotStoreTrait};
pub use valuation::Totals;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
