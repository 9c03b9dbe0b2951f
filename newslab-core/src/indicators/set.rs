//! IndicatorSet — the standard indicator bundle for one price series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{ema::ema, macd::macd, rsi::rsi, sma::sma};
use crate::domain::PriceRecord;

/// Windows and spans for the indicator bundle.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorParams {
    pub sma_short: usize,
    pub sma_long: usize,
    pub rsi_window: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
}

impl Default for IndicatorParams {
    fn default() -> Self {
        Self {
            sma_short: 20,
            sma_long: 50,
            rsi_window: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
        }
    }
}

/// The computed indicator columns, each aligned one-to-one with `dates`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndicatorSet {
    pub dates: Vec<NaiveDate>,
    pub close: Vec<f64>,
    pub sma_short: Vec<f64>,
    pub sma_long: Vec<f64>,
    pub rsi: Vec<f64>,
    pub macd: Vec<f64>,
    pub macd_signal: Vec<f64>,
    /// 20-day EMA of the close, kept alongside the SMAs for chart overlays.
    pub ema_short: Vec<f64>,
}

impl IndicatorSet {
    /// Compute the indicator bundle from price records.
    ///
    /// Records are re-sorted ascending by date before extraction; the
    /// caller's slice is not touched.
    pub fn compute(records: &[PriceRecord], params: &IndicatorParams) -> Self {
        let mut sorted: Vec<&PriceRecord> = records.iter().collect();
        sorted.sort_by_key(|rec| rec.date);

        let dates: Vec<NaiveDate> = sorted.iter().map(|rec| rec.date).collect();
        let close: Vec<f64> = sorted.iter().map(|rec| rec.close).collect();

        let macd_out = macd(&close, params.macd_fast, params.macd_slow, params.macd_signal);

        Self {
            sma_short: sma(&close, params.sma_short),
            sma_long: sma(&close, params.sma_long),
            rsi: rsi(&close, params.rsi_window),
            macd: macd_out.macd,
            macd_signal: macd_out.signal,
            ema_short: ema(&close, params.sma_short),
            dates,
            close,
        }
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::make_records;

    #[test]
    fn set_columns_share_input_length() {
        let records = make_records(&[10.0, 11.0, 9.0, 12.0, 12.0, 13.0]);
        let set = IndicatorSet::compute(&records, &IndicatorParams::default());
        assert_eq!(set.len(), 6);
        assert_eq!(set.close.len(), 6);
        assert_eq!(set.sma_short.len(), 6);
        assert_eq!(set.sma_long.len(), 6);
        assert_eq!(set.rsi.len(), 6);
        assert_eq!(set.macd.len(), 6);
        assert_eq!(set.macd_signal.len(), 6);
    }

    #[test]
    fn set_warmup_shorter_than_long_window_is_nan() {
        let records = make_records(&(0..30).map(|i| 100.0 + i as f64).collect::<Vec<_>>());
        let params = IndicatorParams::default();
        let set = IndicatorSet::compute(&records, &params);
        // 30 rows < 50-day window: the long SMA never becomes defined
        assert!(set.sma_long.iter().all(|v| v.is_nan()));
        // but the short SMA is defined from index 19
        assert!(set.sma_short[18].is_nan());
        assert!(!set.sma_short[19].is_nan());
    }

    #[test]
    fn set_resorts_by_date() {
        let mut records = make_records(&[10.0, 11.0, 12.0]);
        records.reverse();
        let set = IndicatorSet::compute(&records, &IndicatorParams::default());
        assert!(set.dates.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(set.close, vec![10.0, 11.0, 12.0]);
    }

    #[test]
    fn params_default_matches_convention() {
        let p = IndicatorParams::default();
        assert_eq!((p.sma_short, p.sma_long), (20, 50));
        assert_eq!(p.rsi_window, 14);
        assert_eq!((p.macd_fast, p.macd_slow, p.macd_signal), (12, 26, 9));
    }
}
