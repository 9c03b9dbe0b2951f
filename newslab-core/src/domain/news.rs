//! NewsRecord — one headline from the news feed.

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single news headline with its publication metadata.
///
/// `published_at` is None when the source timestamp failed to parse; such
/// records are excluded from every date join and aggregate, but still count
/// for text summaries that don't need a date (publisher counts, keywords).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsRecord {
    pub published_at: Option<NaiveDateTime>,
    pub headline: String,
    pub publisher: String,
}

impl NewsRecord {
    /// Calendar date key: time-of-day and timezone already dropped at parse.
    pub fn date(&self) -> Option<NaiveDate> {
        self.published_at.map(|ts| ts.date())
    }

    /// Publication hour of day (0..=23), when the timestamp parsed.
    pub fn hour(&self) -> Option<u32> {
        self.published_at.map(|ts| ts.hour())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn date_and_hour_from_timestamp() {
        let rec = NewsRecord {
            published_at: NaiveDate::from_ymd_opt(2024, 6, 5)
                .unwrap()
                .and_hms_opt(10, 30, 54),
            headline: "Stocks That Hit 52-Week Highs On Friday".into(),
            publisher: "Benzinga Insights".into(),
        };
        assert_eq!(rec.date(), NaiveDate::from_ymd_opt(2024, 6, 5));
        assert_eq!(rec.hour(), Some(10));
    }

    #[test]
    fn dateless_record_has_no_keys() {
        let rec = NewsRecord {
            published_at: None,
            headline: "headline".into(),
            publisher: "pub".into(),
        };
        assert_eq!(rec.date(), None);
        assert_eq!(rec.hour(), None);
    }
}
