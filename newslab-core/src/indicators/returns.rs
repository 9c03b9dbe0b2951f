//! Daily percentage returns.

use crate::domain::{PriceRecord, TimeSeries};

/// Percentage change: `out[i] = values[i] / values[i-1] - 1`.
/// `out[0]` is undefined (NaN).
pub fn pct_change(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut result = vec![f64::NAN; n];
    for i in 1..n {
        result[i] = values[i] / values[i - 1] - 1.0;
    }
    result
}

/// Daily close-to-close returns keyed by date.
///
/// Records are re-sorted by date defensively before differencing. The first
/// row has no prior close and is omitted from the output series; a NaN close
/// yields a NaN return for the rows it touches (dropped later at the
/// correlation join).
pub fn daily_returns(records: &[PriceRecord]) -> TimeSeries {
    let mut sorted: Vec<&PriceRecord> = records.iter().collect();
    sorted.sort_by_key(|rec| rec.date);

    let points = sorted
        .windows(2)
        .map(|pair| (pair[1].date, pair[1].close / pair[0].close - 1.0))
        .collect();

    TimeSeries::new(points)
}
