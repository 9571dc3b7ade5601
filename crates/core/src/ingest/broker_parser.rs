//! Brokerage JSON envelope parser.

use log::{debug, warn};

use crate::holdings::{net_change_percent, Holding};
use crate::ingest::{BrokerEnvelope, BrokerPosition, ParseAttempt};

/// Attempts to read `content` as a brokerage API envelope.
///
/// Content that does not deserialize as an envelope-shaped JSON object
/// is `NoMatch` and the detection chain moves on. A JSON object whose
/// `status` is not `"success"` or whose `data` is not an array is
/// `Invalid`. Individual positions that fail to deserialize, or that
/// carry a blank trading symbol, are skipped.
pub fn parse_broker_envelope(content: &str) -> ParseAttempt {
    let envelope: BrokerEnvelope = match serde_json::from_str(content) {
        Ok(envelope) => envelope,
        Err(_) => return ParseAttempt::NoMatch,
    };

    if envelope.status != "success" {
        return ParseAttempt::Invalid(format!(
            "brokerage envelope status is '{}', expected 'success'",
            envelope.status
        ));
    }
    let positions = match envelope.data.as_array() {
        Some(positions) => positions,
        None => {
            return ParseAttempt::Invalid(
                "brokerage envelope 'data' is not an array".to_string(),
            )
        }
    };

    let mut holdings = Vec::with_capacity(positions.len());
    for (index, raw) in positions.iter().enumerate() {
        let position: BrokerPosition = match serde_json::from_value(raw.clone()) {
            Ok(position) => position,
            Err(e) => {
                warn!("Skipping brokerage position {}: {}", index, e);
                continue;
            }
        };
        if position.tradingsymbol.trim().is_empty() {
            debug!("Skipping brokerage position {} without a trading symbol", index);
            continue;
        }
        holdings.push(holding_from_position(position));
    }

    debug!("Parsed {} holdings from brokerage envelope", holdings.len());
    ParseAttempt::Parsed(holdings)
}

fn holding_from_position(position: BrokerPosition) -> Holding {
    let invested = position.quantity * position.average_price;
    let cur_val = position.quantity * position.last_price;
    Holding {
        instrument: position.tradingsymbol,
        quantity: position.quantity,
        avg_cost: position.average_price,
        ltp: position.last_price,
        invested,
        cur_val,
        pl: position.pnl,
        net_chg: net_change_percent(position.pnl, invested),
        day_chg: position.day_change_percentage,
        tags: Vec::new(),
        hidden: false,
        custom_value: position.last_price,
        target_avg_cost: position.average_price,
    }
}
