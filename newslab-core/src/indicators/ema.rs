//! Exponential Moving Average (EMA).
//!
//! Recursive: EMA[i] = alpha * x[i] + (1 - alpha) * EMA[i-1], with
//! alpha = 2 / (span + 1) and EMA[0] = x[0] (first-value seed). Every index
//! is defined; there is no warmup gap. A NaN input poisons the recursion
//! from that index on.

/// Compute the exponential moving average of `values` with the given span.
pub fn ema(values: &[f64], span: usize) -> Vec<f64> {
    assert!(span >= 1, "EMA span must be >= 1");
    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n == 0 {
        return result;
    }

    let alpha = 2.0 / (span as f64 + 1.0);

    let mut prev = values[0];
    result[0] = prev;
    for i in 1..n {
        let value = alpha * values[i] + (1.0 - alpha) * prev;
        result[i] = value;
        prev = value;
    }

    result
}
