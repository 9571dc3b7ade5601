//! Delimited-text holdings parser.
//!
//! Accepts comma-separated exports with optional double-quoted fields
//! (a quoted field may itself contain commas). The first line is a
//! header and is skipped; malformed rows are skipped rather than
//! aborting the batch.

use csv::{ReaderBuilder, Trim};
use log::debug;

use crate::holdings::Holding;
use crate::ingest::holding_from_fields;

/// Parses delimited holdings text into canonical holdings.
///
/// Never fails as a whole: unusable rows degrade to skips and an input
/// with no data rows yields an empty collection.
pub fn parse_holdings_csv(content: &str) -> Vec<Holding> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut holdings = Vec::new();
    for (index, result) in reader.records().enumerate() {
        // First line is the header
        if index == 0 {
            continue;
        }
        let record = match result {
            Ok(record) => record,
            Err(e) => {
                debug!("Skipping malformed row {}: {}", index + 1, e);
                continue;
            }
        };
        let fields: Vec<String> = record.iter().map(|s| s.to_string()).collect();
        if let Some(holding) = holding_from_fields(&fields) {
            holdings.push(holding);
        }
    }
    holdings
}
