//! Moving Average Convergence Divergence (MACD).
//!
//! MACD = EMA(close, fast) - EMA(close, slow); Signal = EMA(MACD, signal),
//! seeded by MACD[0]. With first-value-seeded EMAs both lines are defined
//! from index 0 (MACD[0] is always 0: both EMAs start at close[0]).

use super::ema::ema;

/// MACD line and its signal line, aligned to the input index.
#[derive(Debug, Clone)]
pub struct MacdOutput {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
}

/// Compute MACD(fast, slow) and its signal line over `values`.
pub fn macd(values: &[f64], fast: usize, slow: usize, signal: usize) -> MacdOutput {
    assert!(fast >= 1 && slow >= 1 && signal >= 1, "MACD spans must be >= 1");

    let ema_fast = ema(values, fast);
    let ema_slow = ema(values, slow);

    let macd_line: Vec<f64> = ema_fast
        .iter()
        .zip(ema_slow.iter())
        .map(|(f, s)| f - s)
        .collect();

    let signal_line = ema(&macd_line, signal);

    MacdOutput {
        macd: macd_line,
        signal: signal_line,
    }
}
