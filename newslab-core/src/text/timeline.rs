//! Publication-time summaries: daily counts, hour-of-day histogram, and
//! e-mail domain frequency.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use crate::domain::NewsRecord;

/// Article counts per calendar date, sorted by date. Records without a
/// parsed timestamp are skipped.
pub fn articles_per_day(records: &[NewsRecord]) -> Vec<(NaiveDate, usize)> {
    let mut counts: BTreeMap<NaiveDate, usize> = BTreeMap::new();
    for rec in records {
        if let Some(date) = rec.date() {
            *counts.entry(date).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// 24-bucket histogram of publication hour. Records without a parsed
/// timestamp are skipped.
pub fn articles_per_hour(records: &[NewsRecord]) -> [usize; 24] {
    let mut histogram = [0usize; 24];
    for rec in records {
        if let Some(hour) = rec.hour() {
            histogram[hour as usize] += 1;
        }
    }
    histogram
}

/// Top e-mail domains among publisher strings.
///
/// Publishers containing `@` are treated as e-mail addresses and the part
/// after the last `@` is counted; everything else is ignored.
pub fn top_email_domains(records: &[NewsRecord], n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for rec in records {
        if let Some(domain) = rec.publisher.rsplit_once('@').map(|(_, dom)| dom) {
            if !domain.is_empty() {
                *counts.entry(domain.to_lowercase()).or_insert(0) += 1;
            }
        }
    }
    let mut out: Vec<(String, usize)> = counts.into_iter().collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out.truncate(n);
    out
}
