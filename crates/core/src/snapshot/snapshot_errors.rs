use thiserror::Error;

/// Store-agnostic snapshot errors.
///
/// Storage implementations convert their specific failures (file I/O,
/// key-value store quirks) into these variants as strings.
#[derive(Error, Debug)]
pub enum SnapshotError {
    /// The physical store could not be read or written.
    #[error("Store I/O failed: {0}")]
    Io(String),

    /// The snapshot document could not be encoded or decoded.
    #[error("Snapshot serialization failed: {0}")]
    Serialization(String),

    /// An imported backup document is not a usable snapshot.
    #[error("Invalid backup document: {0}")]
    InvalidBackup(String),
}
