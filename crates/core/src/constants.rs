/// Column order expected from uploads and delimited exports.
pub const UPLOAD_COLUMN_ORDER: &str =
    "Instrument, Qty, Avg Cost, LTP, Invested, Cur Val, P&L, Net Chg %, Day Chg %";

/// Minimum number of fields a data row must carry to be usable.
pub const MIN_ROW_FIELDS: usize = 9;

/// File name probed for the brokerage JSON export.
pub const BROKER_SOURCE_FILE: &str = "holdings.json";

/// File name probed for the delimited holdings export.
pub const CSV_SOURCE_FILE: &str = "holdings.csv";
