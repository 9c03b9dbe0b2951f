//! Summary metrics for a loaded price table.

use serde::{Deserialize, Serialize};

use crate::domain::PriceRecord;

/// Close/volume summary for a price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceSummary {
    pub rows: usize,
    pub average_close: f64,
    pub max_close: f64,
    pub min_close: f64,
    pub volume_std_dev: f64,
}

impl PriceSummary {
    /// Compute summary metrics over all records. NaN closes are skipped.
    /// Returns None for an empty table.
    pub fn compute(records: &[PriceRecord]) -> Option<Self> {
        if records.is_empty() {
            return None;
        }

        let closes: Vec<f64> = records
            .iter()
            .map(|rec| rec.close)
            .filter(|c| !c.is_nan())
            .collect();
        if closes.is_empty() {
            return None;
        }

        let average_close = closes.iter().sum::<f64>() / closes.len() as f64;
        let max_close = closes.iter().cloned().fold(f64::MIN, f64::max);
        let min_close = closes.iter().cloned().fold(f64::MAX, f64::min);

        let volumes: Vec<f64> = records.iter().map(|rec| rec.volume as f64).collect();
        let vol_mean = volumes.iter().sum::<f64>() / volumes.len() as f64;
        let volume_std_dev = if volumes.len() < 2 {
            0.0
        } else {
            // Sample standard deviation (n - 1 denominator)
            (volumes.iter().map(|v| (v - vol_mean).powi(2)).sum::<f64>()
                / (volumes.len() as f64 - 1.0))
                .sqrt()
        };

        Some(Self {
            rows: records.len(),
            average_close,
            max_close,
            min_close,
            volume_std_dev,
        })
    }
}
