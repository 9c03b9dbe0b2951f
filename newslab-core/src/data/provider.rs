//! Live price provider trait and structured error types.
//!
//! The PriceProvider trait abstracts over market data sources so the CLI
//! can swap implementations and tests can mock fetches. Recovery policy:
//! `fetch` surfaces structured errors; `fetch_or_empty` converts any
//! failure into an empty table plus an error log, so a dead provider never
//! crashes the calling context. Retries are the caller's business; there
//! are none here.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::error;

use crate::domain::PriceRecord;

/// Structured provider failures.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("network unreachable: {0}")]
    NetworkUnreachable(String),

    #[error("symbol not found: {symbol}")]
    SymbolNotFound { symbol: String },

    #[error("response format changed: {0}")]
    ResponseFormatChanged(String),

    #[error("provider error: {0}")]
    Other(String),
}

/// A source of daily OHLCV price data.
pub trait PriceProvider {
    /// Human-readable name of this provider.
    fn name(&self) -> &str;

    /// Fetch daily price records for a symbol over a date range.
    fn fetch(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<PriceRecord>, ProviderError>;
}

/// Fetch with the empty-on-failure recovery policy.
pub fn fetch_or_empty(
    provider: &dyn PriceProvider,
    symbol: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PriceRecord> {
    match provider.fetch(symbol, start, end) {
        Ok(records) => records,
        Err(err) => {
            error!(provider = provider.name(), symbol, %err, "live fetch failed, returning empty table");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FailingProvider;

    impl PriceProvider for FailingProvider {
        fn name(&self) -> &str {
            "failing"
        }

        fn fetch(
            &self,
            _symbol: &str,
            _start: NaiveDate,
            _end: NaiveDate,
        ) -> Result<Vec<PriceRecord>, ProviderError> {
            Err(ProviderError::NetworkUnreachable("connection refused".into()))
        }
    }

    #[test]
    fn fetch_or_empty_recovers_to_empty_table() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let records = fetch_or_empty(&FailingProvider, "AAPL", start, end);
        assert!(records.is_empty());
    }
}
