//! Headline length distribution and publisher frequency.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::NewsRecord;

/// Distribution statistics over headline character length
/// (count/mean/std/min/quartiles/max).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeadlineLengthStats {
    pub count: usize,
    pub mean: f64,
    pub std: f64,
    pub min: f64,
    pub q25: f64,
    pub median: f64,
    pub q75: f64,
    pub max: f64,
}

/// Compute headline length statistics. Lengths count Unicode scalar values,
/// not bytes. Returns None for an empty table.
pub fn headline_length_stats(records: &[NewsRecord]) -> Option<HeadlineLengthStats> {
    if records.is_empty() {
        return None;
    }

    let mut lengths: Vec<f64> = records
        .iter()
        .map(|rec| rec.headline.chars().count() as f64)
        .collect();
    lengths.sort_by(|a, b| a.total_cmp(b));

    let count = lengths.len();
    let mean = lengths.iter().sum::<f64>() / count as f64;
    let std = if count < 2 {
        0.0
    } else {
        (lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0)).sqrt()
    };

    Some(HeadlineLengthStats {
        count,
        mean,
        std,
        min: lengths[0],
        q25: percentile(&lengths, 0.25),
        median: percentile(&lengths, 0.50),
        q75: percentile(&lengths, 0.75),
        max: lengths[count - 1],
    })
}

/// Linear-interpolated percentile over a sorted slice.
fn percentile(sorted: &[f64], q: f64) -> f64 {
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }
    let rank = q * (n as f64 - 1.0);
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}

/// Article counts per publisher, sorted by count descending then name
/// ascending for deterministic output.
pub fn articles_per_publisher(records: &[NewsRecord]) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for rec in records {
        *counts.entry(rec.publisher.as_str()).or_insert(0) += 1;
    }
    let mut out: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(publisher, count)| (publisher.to_string(), count))
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    out
}

/// The `n` most prolific publishers.
pub fn top_publishers(records: &[NewsRecord], n: usize) -> Vec<(String, usize)> {
    let mut all = articles_per_publisher(records);
    all.truncate(n);
    all
}
