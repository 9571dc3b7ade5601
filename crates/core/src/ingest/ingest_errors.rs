use thiserror::Error;

/// Errors surfaced by the record normalizer.
///
/// Individual malformed fields and rows degrade silently (zeroed or
/// skipped); these variants cover whole-input failures only.
#[derive(Error, Debug)]
pub enum IngestError {
    /// Input does not match any recognized shape, or yields zero usable
    /// rows. The message names what was expected.
    #[error("Unrecognized input format: {0}")]
    Format(String),

    /// No input source is available at all (source-read path only).
    #[error("No input source found: {0}")]
    NotFound(String),
}
