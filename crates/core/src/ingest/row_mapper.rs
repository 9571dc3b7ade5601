//! Positional row mapping shared by the delimited-text and spreadsheet
//! upload paths.

use log::debug;
use rust_decimal::Decimal;

use crate::constants::{MIN_ROW_FIELDS, UPLOAD_COLUMN_ORDER};
use crate::holdings::Holding;
use crate::ingest::{parse_decimal_tolerant, IngestError};

/// Maps one cell-split row onto a canonical holding.
///
/// Column order is positional: instrument, quantity, avg cost, LTP,
/// invested, current value, P&L, net change %, day change %. Rows that
/// are too short or carry a blank instrument yield `None` and are
/// skipped by callers. Unparseable numerics degrade to zero.
pub fn holding_from_fields(fields: &[String]) -> Option<Holding> {
    if fields.len() < MIN_ROW_FIELDS {
        return None;
    }
    // Quote characters are stripped from the instrument value only;
    // numeric cells go through the tolerant parser as-is.
    let instrument = fields[0].replace('"', "");
    let instrument = instrument.trim();
    if instrument.is_empty() {
        return None;
    }

    let avg_cost = parse_decimal_tolerant(&fields[2], "avgCost");
    let ltp = parse_decimal_tolerant(&fields[3], "ltp");
    let invested = parse_decimal_tolerant(&fields[4], "invested");
    let net_chg = if invested > Decimal::ZERO {
        parse_decimal_tolerant(&fields[7], "netChg")
    } else {
        Decimal::ZERO
    };

    Some(Holding {
        instrument: instrument.to_string(),
        quantity: parse_decimal_tolerant(&fields[1], "quantity"),
        avg_cost,
        ltp,
        invested,
        cur_val: parse_decimal_tolerant(&fields[5], "curVal"),
        pl: parse_decimal_tolerant(&fields[6], "pl"),
        net_chg,
        day_chg: parse_decimal_tolerant(&fields[8], "dayChg"),
        tags: Vec::new(),
        hidden: false,
        custom_value: ltp,
        target_avg_cost: avg_cost,
    })
}

/// Normalizes already-cell-split spreadsheet rows (header row first)
/// into canonical holdings.
///
/// Malformed rows are skipped silently; a sheet that yields zero usable
/// rows is rejected with a message naming the expected column order.
/// Tag and hidden-flag carry-over for re-uploads happens at the
/// collection-replace level, not here.
pub fn holdings_from_upload_rows(rows: &[Vec<String>]) -> Result<Vec<Holding>, IngestError> {
    let holdings: Vec<Holding> = rows
        .iter()
        .skip(1)
        .filter_map(|row| holding_from_fields(row))
        .collect();

    if holdings.is_empty() {
        return Err(IngestError::Format(format!(
            "no valid data rows found in upload; expected column order: {}",
            UPLOAD_COLUMN_ORDER
        )));
    }
    debug!("Mapped {} holdings from {} uploaded rows", holdings.len(), rows.len());
    Ok(holdings)
}
