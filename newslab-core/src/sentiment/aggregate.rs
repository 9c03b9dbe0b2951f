//! Per-date sentiment aggregation.

use std::collections::BTreeMap;

use crate::domain::TimeSeries;
use crate::sentiment::ScoredHeadline;

/// Arithmetic mean polarity per date.
///
/// Dates with zero scored headlines are absent from the output (no
/// zero-fill); date-less rows are skipped entirely.
pub fn aggregate_daily(scored: &[ScoredHeadline]) -> TimeSeries {
    let mut buckets: BTreeMap<chrono::NaiveDate, (f64, usize)> = BTreeMap::new();

    for headline in scored {
        let Some(date) = headline.date else {
            continue;
        };
        let entry = buckets.entry(date).or_insert((0.0, 0));
        entry.0 += headline.polarity;
        entry.1 += 1;
    }

    TimeSeries::from_sorted(
        buckets
            .into_iter()
            .map(|(date, (sum, count))| (date, sum / count as f64))
            .collect(),
    )
}
