//! Core error types for the Holdfolio application.
//!
//! This module defines storage-agnostic error types. Store-specific
//! failures (file I/O, serialization) are converted into these types by
//! the storage layer.

use thiserror::Error;

use crate::ingest::IngestError;
use crate::snapshot::SnapshotError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the portfolio application.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Ingestion failed: {0}")]
    Ingest(#[from] IngestError),

    #[error("Snapshot operation failed: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}
