//! TimeSeries — ordered (date, value) pairs, one value per date.
//!
//! The common currency between pipeline stages: daily returns, aggregated
//! sentiment, and indicator outputs all travel as a TimeSeries. Gaps in the
//! date axis are permitted; values may be NaN (undefined warmup entries).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    points: Vec<(NaiveDate, f64)>,
}

impl TimeSeries {
    /// Build from unordered points. Sorts ascending by date; if a date
    /// appears more than once the last value wins.
    pub fn new(mut points: Vec<(NaiveDate, f64)>) -> Self {
        points.sort_by_key(|(date, _)| *date);
        points.dedup_by_key(|(date, _)| *date);
        Self { points }
    }

    /// Build from points already sorted ascending with unique dates.
    pub fn from_sorted(points: Vec<(NaiveDate, f64)>) -> Self {
        debug_assert!(points.windows(2).all(|w| w[0].0 < w[1].0));
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(NaiveDate, f64)> {
        self.points.iter()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.points.iter().map(|(date, _)| *date)
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|(_, value)| *value)
    }

    /// Value at an exact date, if present.
    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.points
            .binary_search_by_key(&date, |(d, _)| *d)
            .ok()
            .map(|idx| self.points[idx].1)
    }

    /// Inner join on date. Rows whose date is missing on either side are
    /// dropped; NaN values are kept (callers decide how to treat them).
    pub fn inner_join(&self, other: &TimeSeries) -> Vec<(NaiveDate, f64, f64)> {
        let mut joined = Vec::new();
        let mut left = self.points.iter().peekable();
        let mut right = other.points.iter().peekable();

        while let (Some(&&(ld, lv)), Some(&&(rd, rv))) = (left.peek(), right.peek()) {
            match ld.cmp(&rd) {
                std::cmp::Ordering::Less => {
                    left.next();
                }
                std::cmp::Ordering::Greater => {
                    right.next();
                }
                std::cmp::Ordering::Equal => {
                    joined.push((ld, lv, rv));
                    left.next();
                    right.next();
                }
            }
        }
        joined
    }
}
