//! CSV ingestion into typed records.
//!
//! CSVs are read through the polars lazy reader with all-string inference,
//! validated against the explicit column schemas, then converted row-wise
//! into typed records. Per-row problems (unparseable date, missing close)
//! drop the row with a warning; structural problems (missing file, missing
//! column) fail the whole load.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::schema::{NewsSchema, PriceSchema, SchemaError};
use crate::domain::{NewsRecord, PriceRecord};

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("input file not found: {0}")]
    MissingFile(PathBuf),

    #[error("ingest failed: {0}")]
    Ingest(String),

    #[error(transparent)]
    Schema(#[from] SchemaError),
}

/// Read a CSV into a DataFrame with every column as String.
///
/// Casting happens later, per column, so one malformed numeric cell nulls a
/// row instead of failing the read.
fn read_table(path: &Path) -> Result<DataFrame, DataError> {
    if !path.exists() {
        return Err(DataError::MissingFile(path.to_path_buf()));
    }
    LazyCsvReader::new(path)
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .finish()
        .map_err(|e| DataError::Ingest(e.to_string()))?
        .collect()
        .map_err(|e| DataError::Ingest(e.to_string()))
}

fn f64_column(df: &DataFrame, name: &str) -> Result<Float64Chunked, DataError> {
    let column = df
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name.to_string()))?;
    let cast = column.cast(&DataType::Float64).map_err(|_| SchemaError::NotCastable {
        column: name.to_string(),
        expected: "Float64",
    })?;
    let ca = cast.f64().map_err(|_| SchemaError::NotCastable {
        column: name.to_string(),
        expected: "Float64",
    })?;
    Ok(ca.clone())
}

fn str_column(df: &DataFrame, name: &str) -> Result<StringChunked, DataError> {
    let column = df
        .column(name)
        .map_err(|_| SchemaError::MissingColumn(name.to_string()))?;
    let cast = column.cast(&DataType::String).map_err(|_| SchemaError::NotCastable {
        column: name.to_string(),
        expected: "String",
    })?;
    let ca = cast.str().map_err(|_| SchemaError::NotCastable {
        column: name.to_string(),
        expected: "String",
    })?;
    Ok(ca.clone())
}

/// Parse a publication timestamp from the forms seen in the wild.
///
/// Timezone offsets are dropped (local wall time is kept), matching the
/// calendar-date normalization downstream.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%z") {
        return Some(dt.naive_local());
    }
    for fmt in ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt);
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    None
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    parse_timestamp(raw).map(|ts| ts.date())
}

/// Load a single-symbol price CSV, sorted ascending by date.
pub fn load_price_csv(path: &Path) -> Result<Vec<PriceRecord>, DataError> {
    let df = read_table(path)?;
    PriceSchema::validate(&df)?;
    price_records_from_frame(&df, None)
}

/// Load every `*.csv` in a directory, tagging each record's symbol from the
/// uppercased file stem, concatenated and sorted by date.
pub fn load_price_dir(dir: &Path) -> Result<Vec<PriceRecord>, DataError> {
    if !dir.is_dir() {
        return Err(DataError::MissingFile(dir.to_path_buf()));
    }

    let mut paths: Vec<PathBuf> = std::fs::read_dir(dir)
        .map_err(|e| DataError::Ingest(e.to_string()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.extension().and_then(|ext| ext.to_str()) == Some("csv"))
        .collect();
    paths.sort();

    let mut records = Vec::new();
    for path in &paths {
        let symbol = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("UNKNOWN")
            .to_uppercase();
        let df = read_table(path)?;
        PriceSchema::validate(&df)?;
        records.extend(price_records_from_frame(&df, Some(&symbol))?);
    }
    records.sort_by_key(|rec| rec.date);
    Ok(records)
}

fn price_records_from_frame(
    df: &DataFrame,
    symbol_hint: Option<&str>,
) -> Result<Vec<PriceRecord>, DataError> {
    let dates = str_column(df, PriceSchema::DATE)?;
    let opens = f64_column(df, PriceSchema::OPEN)?;
    let highs = f64_column(df, PriceSchema::HIGH)?;
    let lows = f64_column(df, PriceSchema::LOW)?;
    let closes = f64_column(df, PriceSchema::CLOSE)?;
    let volumes = f64_column(df, PriceSchema::VOLUME)?;
    let companies = if df.schema().contains(PriceSchema::COMPANY) {
        Some(str_column(df, PriceSchema::COMPANY)?)
    } else {
        None
    };

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;
    for i in 0..df.height() {
        let date = dates.get(i).and_then(parse_date);
        let close = closes.get(i);
        let (Some(date), Some(close)) = (date, close) else {
            dropped += 1;
            continue;
        };
        let symbol = symbol_hint
            .map(str::to_string)
            .or_else(|| companies.as_ref().and_then(|col| col.get(i)).map(str::to_string));
        records.push(PriceRecord {
            date,
            open: opens.get(i).unwrap_or(f64::NAN),
            high: highs.get(i).unwrap_or(f64::NAN),
            low: lows.get(i).unwrap_or(f64::NAN),
            close,
            volume: volumes.get(i).map(|v| v as u64).unwrap_or(0),
            symbol,
        });
    }
    if dropped > 0 {
        warn!(dropped, "dropped price rows with unparseable date or missing close");
    }
    records.sort_by_key(|rec| rec.date);
    Ok(records)
}

/// Load a news CSV. Rows with an unparseable timestamp keep `published_at:
/// None` (excluded from date joins, still counted by text summaries); rows
/// with a missing headline are dropped.
pub fn load_news_csv(path: &Path) -> Result<Vec<NewsRecord>, DataError> {
    let df = read_table(path)?;
    NewsSchema::validate(&df)?;

    let dates = str_column(&df, NewsSchema::DATE)?;
    let headlines = str_column(&df, NewsSchema::HEADLINE)?;
    let publishers = str_column(&df, NewsSchema::PUBLISHER)?;

    let mut records = Vec::with_capacity(df.height());
    let mut dropped = 0usize;
    for i in 0..df.height() {
        let Some(headline) = headlines.get(i) else {
            dropped += 1;
            continue;
        };
        records.push(NewsRecord {
            published_at: dates.get(i).and_then(parse_timestamp),
            headline: headline.to_string(),
            publisher: publishers.get(i).unwrap_or("").to_string(),
        });
    }
    if dropped > 0 {
        warn!(dropped, "dropped news rows with missing headline");
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_fixture(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    const PRICE_CSV: &str = "\
date,Open,High,Low,Close,Volume
2024-01-01,10.0,10.5,9.5,10.0,1000
2024-01-02,10.0,11.5,9.9,11.0,1500
2024-01-03,11.0,11.2,8.8,9.0,900
not-a-date,9.0,9.5,8.5,9.2,800
2024-01-05,9.0,12.5,8.9,12.0,2000
";

    const NEWS_CSV: &str = "\
date,headline,publisher,url
2024-01-01 10:30:54-04:00,Stocks rally on strong earnings,Reuters,http://x
2024-01-02 09:00:00,Analysts cut targets after miss,Benzinga,http://y
garbage,Undated headline survives without a date,wire@example.com,http://z
";

    #[test]
    fn load_price_csv_parses_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "prices.csv", PRICE_CSV);

        let records = load_price_csv(&path).unwrap();
        // Bad-date row dropped
        assert_eq!(records.len(), 4);
        assert!(records.windows(2).all(|w| w[0].date <= w[1].date));
        assert_eq!(records[1].close, 11.0);
        assert_eq!(records[1].volume, 1500);
    }

    #[test]
    fn load_price_csv_missing_file() {
        let err = load_price_csv(Path::new("/nonexistent/prices.csv")).unwrap_err();
        assert!(matches!(err, DataError::MissingFile(_)));
    }

    #[test]
    fn load_price_csv_missing_column_fails_fast() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "bad.csv", "date,Open\n2024-01-01,10.0\n");
        let err = load_price_csv(&path).unwrap_err();
        assert!(matches!(err, DataError::Schema(SchemaError::MissingColumn(_))));
    }

    #[test]
    fn load_news_csv_keeps_dateless_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_fixture(dir.path(), "news.csv", NEWS_CSV);

        let records = load_news_csv(&path).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(
            records[0].date(),
            chrono::NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(records[0].hour(), Some(10));
        assert_eq!(records[2].date(), None);
        assert_eq!(records[2].publisher, "wire@example.com");
    }

    #[test]
    fn load_price_dir_tags_symbol_from_stem() {
        let dir = tempfile::tempdir().unwrap();
        write_fixture(
            dir.path(),
            "aapl.csv",
            "date,Open,High,Low,Close,Volume\n2024-01-01,10,11,9,10,100\n",
        );
        write_fixture(
            dir.path(),
            "msft.csv",
            "date,Open,High,Low,Close,Volume\n2024-01-02,20,21,19,20,200\n",
        );

        let records = load_price_dir(dir.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].symbol.as_deref(), Some("AAPL"));
        assert_eq!(records[1].symbol.as_deref(), Some("MSFT"));
    }

    #[test]
    fn parse_timestamp_forms() {
        assert!(parse_timestamp("2020-06-05 10:30:54-04:00").is_some());
        assert!(parse_timestamp("2020-06-05 10:30:54").is_some());
        assert!(parse_timestamp("2020-06-05").is_some());
        assert!(parse_timestamp("2020-06-05T10:30:54").is_some());
        assert!(parse_timestamp("junk").is_none());
        assert!(parse_timestamp("").is_none());
    }

    #[test]
    fn parse_timestamp_drops_offset_keeps_wall_time() {
        let ts = parse_timestamp("2020-06-05 10:30:54-04:00").unwrap();
        assert_eq!(ts.time(), chrono::NaiveTime::from_hms_opt(10, 30, 54).unwrap());
    }
}
