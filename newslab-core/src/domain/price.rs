//! PriceRecord — the fundamental market data unit.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily OHLCV row for one symbol.
///
/// Indicator math assumes `close > 0`; this is not enforced. A NaN or
/// nonsensical close simply propagates NaN through downstream windows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
    /// Company/symbol tag, present when loading multi-symbol directories
    /// or fetching from a live provider.
    pub symbol: Option<String>,
}

impl PriceRecord {
    /// Returns true if any OHLC field is NaN.
    pub fn has_gap(&self) -> bool {
        self.open.is_nan() || self.high.is_nan() || self.low.is_nan() || self.close.is_nan()
    }

    /// Basic OHLC sanity check: high >= low, both straddle open and close.
    pub fn is_sane(&self) -> bool {
        if self.has_gap() {
            return false;
        }
        self.high >= self.low
            && self.high >= self.open
            && self.high >= self.close
            && self.low <= self.open
            && self.low <= self.close
            && self.close > 0.0
    }
}
