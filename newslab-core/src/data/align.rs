//! Date alignment across the news and price tables.
//!
//! Both tables are restricted to the set of calendar dates present in both.
//! Inputs are borrowed and returned as new vectors; caller-owned data is
//! never mutated.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::domain::{NewsRecord, PriceRecord};

/// Restrict both tables to their common dates.
///
/// News records without a parsed date never participate in the
/// intersection. Zero overlap yields two empty vectors, not an error.
/// Input order is preserved on both sides.
pub fn align_by_date(
    news: &[NewsRecord],
    prices: &[PriceRecord],
) -> (Vec<NewsRecord>, Vec<PriceRecord>) {
    let news_dates: BTreeSet<NaiveDate> = news.iter().filter_map(|rec| rec.date()).collect();
    let price_dates: BTreeSet<NaiveDate> = prices.iter().map(|rec| rec.date).collect();
    let common: BTreeSet<NaiveDate> = news_dates.intersection(&price_dates).copied().collect();

    let aligned_news = news
        .iter()
        .filter(|rec| rec.date().is_some_and(|date| common.contains(&date)))
        .cloned()
        .collect();
    let aligned_prices = prices
        .iter()
        .filter(|rec| common.contains(&rec.date))
        .cloned()
        .collect();

    (aligned_news, aligned_prices)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn news(day_of_month: Option<u32>) -> NewsRecord {
        NewsRecord {
            published_at: day_of_month.map(|d| day(d).and_hms_opt(9, 0, 0).unwrap()),
            headline: "headline".into(),
            publisher: "pub".into(),
        }
    }

    fn price(day_of_month: u32) -> PriceRecord {
        PriceRecord {
            date: day(day_of_month),
            open: 10.0,
            high: 11.0,
            low: 9.0,
            close: 10.0,
            volume: 100,
            symbol: None,
        }
    }

    #[test]
    fn intersection_of_overlapping_sets() {
        // {1,2,3,5} ∩ {2,3,4} = {2,3}
        let news: Vec<_> = [1, 2, 3, 5].into_iter().map(|d| news(Some(d))).collect();
        let prices: Vec<_> = [2, 3, 4].into_iter().map(price).collect();

        let (aligned_news, aligned_prices) = align_by_date(&news, &prices);
        let news_dates: Vec<_> = aligned_news.iter().filter_map(|r| r.date()).collect();
        let price_dates: Vec<_> = aligned_prices.iter().map(|r| r.date).collect();
        assert_eq!(news_dates, vec![day(2), day(3)]);
        assert_eq!(price_dates, vec![day(2), day(3)]);
    }

    #[test]
    fn disjoint_sets_yield_empty_tables() {
        let news: Vec<_> = [1, 2].into_iter().map(|d| news(Some(d))).collect();
        let prices: Vec<_> = [10, 11].into_iter().map(price).collect();

        let (aligned_news, aligned_prices) = align_by_date(&news, &prices);
        assert!(aligned_news.is_empty());
        assert!(aligned_prices.is_empty());
    }

    #[test]
    fn output_bounded_by_smaller_side() {
        let news: Vec<_> = (1..=9).map(|d| news(Some(d))).collect();
        let prices: Vec<_> = [2, 3].into_iter().map(price).collect();
        let (aligned_news, aligned_prices) = align_by_date(&news, &prices);
        assert!(aligned_news.len() <= news.len());
        assert!(aligned_prices.len() <= prices.len().min(news.len()));
    }

    #[test]
    fn dateless_news_never_matches() {
        let news = vec![news(None), news(Some(2))];
        let prices = vec![price(2)];
        let (aligned_news, _) = align_by_date(&news, &prices);
        assert_eq!(aligned_news.len(), 1);
        assert!(aligned_news[0].date().is_some());
    }

    #[test]
    fn duplicate_dates_all_survive() {
        // Many headlines per day are the normal case
        let news = vec![news(Some(2)), news(Some(2)), news(Some(2))];
        let prices = vec![price(2)];
        let (aligned_news, aligned_prices) = align_by_date(&news, &prices);
        assert_eq!(aligned_news.len(), 3);
        assert_eq!(aligned_prices.len(), 1);
    }
}
