//! Ingestion domain models and field-level parsing helpers.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::str::FromStr;

use crate::holdings::Holding;

/// Helper to parse a string into a Decimal, with support for scientific
/// notation. Malformed values degrade to zero rather than aborting the
/// row; the batch keeps going.
pub fn parse_decimal_tolerant(value_str: &str, field_name: &str) -> Decimal {
    let trimmed = value_str.trim();
    if trimmed.is_empty() {
        return Decimal::ZERO;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .unwrap_or_else(|_| {
            log::debug!(
                "Unparseable {} value '{}'. Falling back to zero.",
                field_name,
                value_str
            );
            Decimal::ZERO
        })
}

/// Brokerage API response envelope: `{"status": "...", "data": [...]}`.
///
/// `data` is kept as a raw value so the shape check (must be an array)
/// can produce a precise format error instead of a serde one.
#[derive(Deserialize, Debug)]
pub struct BrokerEnvelope {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub data: serde_json::Value,
}

/// One per-position object inside the brokerage envelope.
///
/// All numeric fields default to zero when absent; a position without a
/// trading symbol is dropped by the parser.
#[derive(Deserialize, Debug, Default)]
pub struct BrokerPosition {
    #[serde(default)]
    pub tradingsymbol: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub average_price: Decimal,
    #[serde(default)]
    pub last_price: Decimal,
    #[serde(default)]
    pub pnl: Decimal,
    #[serde(default)]
    pub day_change_percentage: Decimal,
}

/// Outcome of one typed parser in the detection chain.
#[derive(Debug)]
pub enum ParseAttempt {
    /// The content is not this parser's shape at all; the chain moves on.
    NoMatch,
    /// The content matched and normalized into canonical holdings.
    Parsed(Vec<Holding>),
    /// The content claimed this shape but violated it; the chain stops
    /// and the reason surfaces as a format error.
    Invalid(String),
}
