//! Ordered source-detection chain for the source-read ingestion path.

use std::fs;
use std::path::Path;

use log::debug;

use crate::constants::{BROKER_SOURCE_FILE, CSV_SOURCE_FILE};
use crate::holdings::Holding;
use crate::ingest::{parse_broker_envelope, parse_holdings_csv, IngestError, ParseAttempt};

/// Normalizes one raw input blob by trying each typed parser in
/// detection order: brokerage JSON envelope first, delimited text as the
/// fallback. The chain stops at the first parser that claims the input;
/// a claimed-but-violated shape surfaces as a format error rather than
/// falling through.
pub fn detect_and_parse(content: &str) -> Result<Vec<Holding>, IngestError> {
    match parse_broker_envelope(content) {
        ParseAttempt::Parsed(holdings) => return Ok(holdings),
        ParseAttempt::Invalid(reason) => return Err(IngestError::Format(reason)),
        ParseAttempt::NoMatch => {}
    }
    Ok(parse_holdings_csv(content))
}

/// Reads holdings from the first available source file in `dir`,
/// probing `holdings.json` then `holdings.csv`.
///
/// A file that cannot be read moves the chain to the next candidate; a
/// readable file that fails to normalize is a terminal format error.
/// When neither file can be read the attempt fails with `NotFound`
/// naming both expected sources.
pub fn load_from_source_dir(dir: &Path) -> Result<Vec<Holding>, IngestError> {
    for name in [BROKER_SOURCE_FILE, CSV_SOURCE_FILE] {
        let path = dir.join(name);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("Reading holdings source {}", path.display());
                return detect_and_parse(&content);
            }
            Err(e) => {
                debug!("Holdings source {} unavailable: {}", path.display(), e);
            }
        }
    }
    Err(IngestError::NotFound(format!(
        "neither {} nor {} exists in {}",
        BROKER_SOURCE_FILE, CSV_SOURCE_FILE,
        dir.display()
    )))
}
