//! Synthetic price and news data for demos, benches, and tests.
//!
//! Deterministic for a given seed. Synthetic rows are tagged with the
//! "SYNTH" symbol so they cannot be mistaken for real market data.

use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{NewsRecord, PriceRecord};

const SYNTHETIC_SYMBOL: &str = "SYNTH";

const HEADLINE_TEMPLATES: [&str; 8] = [
    "Shares surge after record quarterly earnings beat expectations",
    "Stock plunges as regulators open probe into accounting practices",
    "Analysts upgrade outlook citing strong product demand",
    "Company cuts guidance amid weak consumer spending",
    "Board approves expanded buyback program",
    "Quarterly revenue in line with consensus estimates",
    "CEO steps down unexpectedly, shares slide",
    "New partnership announced with major cloud provider",
];

const PUBLISHERS: [&str; 4] = [
    "Benzinga Insights",
    "Reuters",
    "newsdesk@marketwire.com",
    "Zacks Investment Research",
];

/// Generate `n` days of random-walk OHLCV starting 2020-01-02.
pub fn synthetic_prices(n: usize, seed: u64) -> Vec<PriceRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let mut close = 100.0_f64;

    (0..n)
        .map(|i| {
            let open = close;
            let drift: f64 = rng.gen_range(-0.02..0.02);
            close = (close * (1.0 + drift)).max(1.0);
            let high = open.max(close) * (1.0 + rng.gen_range(0.0..0.01));
            let low = open.min(close) * (1.0 - rng.gen_range(0.0..0.01));
            PriceRecord {
                date: base_date + chrono::Duration::days(i as i64),
                open,
                high,
                low,
                close,
                volume: rng.gen_range(500_000..5_000_000),
                symbol: Some(SYNTHETIC_SYMBOL.to_string()),
            }
        })
        .collect()
}

/// Generate headlines over the same date axis as `synthetic_prices`,
/// `per_day` per date.
pub fn synthetic_news(n_days: usize, per_day: usize, seed: u64) -> Vec<NewsRecord> {
    let mut rng = StdRng::seed_from_u64(seed);
    let base_date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();

    let mut records = Vec::with_capacity(n_days * per_day);
    for day in 0..n_days {
        let date = base_date + chrono::Duration::days(day as i64);
        for _ in 0..per_day {
            let hour = rng.gen_range(6..21);
            records.push(NewsRecord {
                published_at: date.and_hms_opt(hour, rng.gen_range(0..60), 0),
                headline: HEADLINE_TEMPLATES[rng.gen_range(0..HEADLINE_TEMPLATES.len())]
                    .to_string(),
                publisher: PUBLISHERS[rng.gen_range(0..PUBLISHERS.len())].to_string(),
            });
        }
    }
    records
}
