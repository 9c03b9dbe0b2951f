//! Yahoo Finance price provider.
//!
//! Fetches daily OHLCV rows from Yahoo's v8 chart API with a single
//! blocking request per call. Yahoo has no official API and is subject to
//! unannounced format changes; the CSV import path is the fallback when it
//! is unavailable.

use chrono::NaiveDate;
use serde::Deserialize;
use std::time::Duration;

use super::provider::{PriceProvider, ProviderError};
use crate::domain::PriceRecord;

/// Yahoo Finance v8 chart API response.
#[derive(Debug, Deserialize)]
struct ChartResponse {
    chart: ChartResult,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    result: Option<Vec<ChartData>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartData {
    timestamp: Option<Vec<i64>>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    quote: Vec<QuoteData>,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    open: Vec<Option<f64>>,
    high: Vec<Option<f64>>,
    low: Vec<Option<f64>>,
    close: Vec<Option<f64>>,
    volume: Vec<Option<u64>>,
}

/// Yahoo Finance provider over a blocking HTTP client.
pub struct YahooProvider {
    client: reqwest::blocking::Client,
}

impl YahooProvider {
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()
            .expect("failed to build HTTP client");
        Self { client }
    }

    /// Build the chart API URL for a symbol and date range.
    fn chart_url(symbol: &str, start: NaiveDate, end: NaiveDate) -> String {
        let start_ts = start.and_hms_opt(0, 0, 0).unwrap().and_utc().timestamp();
        let end_ts = end.and_hms_opt(23, 59, 59).unwrap().and_utc().timestamp();
        format!(
            "https://query2.finance.yahoo.com/v8/finance/chart/{symbol}\
             ?period1={start_ts}&period2={end_ts}&interval=1d"
        )
    }

    /// Parse the chart API response into price records.
    fn parse_response(symbol: &str, resp: ChartResponse) -> Result<Vec<PriceRecord>, ProviderError> {
        let result = resp.chart.result.ok_or_else(|| {
            if let Some(err) = resp.chart.error {
                if err.code == "Not Found" {
                    ProviderError::SymbolNotFound {
                        symbol: symbol.to_string(),
                    }
                } else {
                    ProviderError::ResponseFormatChanged(format!("{}: {}", err.code, err.description))
                }
            } else {
                ProviderError::ResponseFormatChanged("empty result with no error".into())
            }
        })?;

        let data = result
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormatChanged("result array is empty".into()))?;

        let timestamps = data
            .timestamp
            .ok_or_else(|| ProviderError::ResponseFormatChanged("no timestamps".into()))?;

        let quote = data
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ResponseFormatChanged("no quote block".into()))?;

        let mut records = Vec::with_capacity(timestamps.len());
        for (i, &ts) in timestamps.iter().enumerate() {
            let Some(date) = chrono::DateTime::from_timestamp(ts, 0).map(|dt| dt.date_naive())
            else {
                continue;
            };
            let close = quote.close.get(i).copied().flatten();
            let Some(close) = close else {
                // Yahoo emits null rows for holidays; skip them
                continue;
            };
            records.push(PriceRecord {
                date,
                open: quote.open.get(i).copied().flatten().unwrap_or(f64::NAN),
                high: quote.high.get(i).copied().flatten().unwrap_or(f64::NAN),
                low: quote.low.get(i).copied().flatten().unwrap_or(f64::NAN),
                close,
                volume: quote.volume.get(i).copied().flatten().unwrap_or(0),
                symbol: Some(symbol.to_uppercase()),
            });
        }
        records.sort_by_key(|rec| rec.date);
        Ok(records)
    }
}

impl PriceProvider for YahooProvider {
    fn name(&self) -> &str {
        "yahoo-finance"
    }

    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRecord>, ProviderError> {
        let url = Self::chart_url(symbol, start, end);
        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ProviderError::NetworkUnreachable(e.to_string()))?;
        let parsed: ChartResponse = response
            .json()
            .map_err(|e| ProviderError::ResponseFormatChanged(e.to_string()))?;
        Self::parse_response(symbol, parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chart_url_contains_symbol_and_range() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
        let url = YahooProvider::chart_url("AAPL", start, end);
        assert!(url.contains("/chart/AAPL"));
        assert!(url.contains("interval=1d"));
        assert!(url.contains("period1="));
        assert!(url.contains("period2="));
    }

    #[test]
    fn parse_response_skips_null_rows() {
        let resp = ChartResponse {
            chart: ChartResult {
                result: Some(vec![ChartData {
                    // 2024-01-02 and 2024-01-03 midnights UTC
                    timestamp: Some(vec![1_704_153_600, 1_704_240_000]),
                    indicators: Indicators {
                        quote: vec![QuoteData {
                            open: vec![Some(100.0), None],
                            high: vec![Some(105.0), None],
                            low: vec![Some(99.0), None],
                            close: vec![Some(103.0), None],
                            volume: vec![Some(1_000_000), None],
                        }],
                    },
                }]),
                error: None,
            },
        };
        let records = YahooProvider::parse_response("aapl", resp).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].close, 103.0);
        assert_eq!(records[0].symbol.as_deref(), Some("AAPL"));
    }

    #[test]
    fn parse_response_maps_not_found() {
        let resp = ChartResponse {
            chart: ChartResult {
                result: None,
                error: Some(ChartError {
                    code: "Not Found".into(),
                    description: "No data found".into(),
                }),
            },
        };
        let err = YahooProvider::parse_response("NOPE", resp).unwrap_err();
        assert!(matches!(err, ProviderError::SymbolNotFound { .. }));
    }
}
