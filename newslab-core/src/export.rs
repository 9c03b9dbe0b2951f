//! CSV export of result tables for the presentation layer.
//!
//! CSV is the only interchange format at the boundary: plots and notebooks
//! consume these files, nothing reads them back in.

use std::path::Path;

use thiserror::Error;

use crate::domain::{PriceRecord, TimeSeries};
use crate::indicators::IndicatorSet;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

fn fmt_value(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format!("{value}")
    }
}

/// Write the indicator bundle as one row per date.
pub fn write_indicator_csv(path: &Path, set: &IndicatorSet) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record([
        "date",
        "close",
        "sma_short",
        "sma_long",
        "ema_short",
        "rsi",
        "macd",
        "macd_signal",
    ])?;
    for i in 0..set.len() {
        writer.write_record([
            set.dates[i].to_string(),
            fmt_value(set.close[i]),
            fmt_value(set.sma_short[i]),
            fmt_value(set.sma_long[i]),
            fmt_value(set.ema_short[i]),
            fmt_value(set.rsi[i]),
            fmt_value(set.macd[i]),
            fmt_value(set.macd_signal[i]),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write fetched price records in the same column shape the CSV loader
/// expects, so a fetch can be replayed offline.
pub fn write_price_csv(path: &Path, records: &[PriceRecord]) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", "Open", "High", "Low", "Close", "Volume", "Company"])?;
    for rec in records {
        writer.write_record([
            rec.date.to_string(),
            fmt_value(rec.open),
            fmt_value(rec.high),
            fmt_value(rec.low),
            fmt_value(rec.close),
            rec.volume.to_string(),
            rec.symbol.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a single series as `date,<header>` rows.
pub fn write_series_csv(path: &Path, series: &TimeSeries, header: &str) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", header])?;
    for (date, value) in series.iter() {
        writer.write_record([date.to_string(), fmt_value(*value)])?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the inner join of two series (the merged return/sentiment table).
pub fn write_joined_csv(
    path: &Path,
    left: &TimeSeries,
    right: &TimeSeries,
    headers: (&str, &str),
) -> Result<(), ExportError> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(["date", headers.0, headers.1])?;
    for (date, lv, rv) in left.inner_join(right) {
        writer.write_record([date.to_string(), fmt_value(lv), fmt_value(rv)])?;
    }
    writer.flush()?;
    Ok(())
}
