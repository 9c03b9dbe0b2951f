//! Technical indicators computed from a daily close series.
//!
//! All functions take a plain `&[f64]` close series (extracted from sorted
//! price records) and return a `Vec<f64>` aligned one-to-one with the input
//! index. Entries are NaN until enough history accumulates; a NaN inside a
//! rolling window propagates.

pub mod ema;
pub mod macd;
pub mod returns;
pub mod rsi;
pub mod set;
pub mod sma;

pub use ema::ema;
pub use macd::{macd, MacdOutput};
pub use returns::{daily_returns, pct_change};
pub use rsi::rsi;
pub use set::{IndicatorParams, IndicatorSet};
pub use sma::sma;

/// Assert two f64 values are approximately equal (within epsilon).
#[cfg(test)]
pub fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "assert_approx failed: actual={actual}, expected={expected}, diff={}, epsilon={epsilon}",
        (actual - expected).abs()
    );
}

/// Default epsilon for indicator tests.
#[cfg(test)]
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// Create price records from close prices for testing.
///
/// Generates plausible OHLV: open = prev close (or close for the first row),
/// high/low bracket open and close, volume = 1000. Dates run consecutively
/// from 2024-01-01.
#[cfg(test)]
pub fn make_records(closes: &[f64]) -> Vec<crate::domain::PriceRecord> {
    use crate::domain::PriceRecord;
    let base_date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            PriceRecord {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high: open.max(close) + 1.0,
                low: open.min(close) - 1.0,
                close,
                volume: 1000,
                symbol: None,
            }
        })
        .collect()
}
