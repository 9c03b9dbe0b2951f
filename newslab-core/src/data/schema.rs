//! Required-column schemas for the two input tables.
//!
//! Columns are declared explicitly per operation and checked up front:
//! a missing column fails the whole load with a schema-mismatch error
//! instead of silently skipping normalization.

use polars::prelude::*;

#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("missing required column: {0}")]
    MissingColumn(String),

    #[error("column {column} is not castable to {expected}")]
    NotCastable { column: String, expected: &'static str },
}

/// Expected columns for daily OHLCV price tables.
pub struct PriceSchema;

impl PriceSchema {
    pub const DATE: &'static str = "date";
    pub const OPEN: &'static str = "Open";
    pub const HIGH: &'static str = "High";
    pub const LOW: &'static str = "Low";
    pub const CLOSE: &'static str = "Close";
    pub const VOLUME: &'static str = "Volume";
    /// Optional company/symbol tag.
    pub const COMPANY: &'static str = "Company";

    pub fn required() -> [&'static str; 6] {
        [
            Self::DATE,
            Self::OPEN,
            Self::HIGH,
            Self::LOW,
            Self::CLOSE,
            Self::VOLUME,
        ]
    }

    /// Validate that every required column exists.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let actual = df.schema();
        for name in Self::required() {
            if !actual.contains(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

/// Expected columns for news headline tables.
pub struct NewsSchema;

impl NewsSchema {
    pub const DATE: &'static str = "date";
    pub const HEADLINE: &'static str = "headline";
    pub const PUBLISHER: &'static str = "publisher";

    pub fn required() -> [&'static str; 3] {
        [Self::DATE, Self::HEADLINE, Self::PUBLISHER]
    }

    /// Validate that every required column exists.
    pub fn validate(df: &DataFrame) -> Result<(), SchemaError> {
        let actual = df.schema();
        for name in Self::required() {
            if !actual.contains(name) {
                return Err(SchemaError::MissingColumn(name.to_string()));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_schema_accepts_complete_frame() {
        let df = df!(
            "date" => &["2024-01-02"],
            "Open" => &["100.0"],
            "High" => &["105.0"],
            "Low" => &["99.0"],
            "Close" => &["103.0"],
            "Volume" => &["1000000"],
        )
        .unwrap();
        assert!(PriceSchema::validate(&df).is_ok());
    }

    #[test]
    fn price_schema_rejects_missing_column() {
        let df = df!(
            "date" => &["2024-01-02"],
            "Open" => &["100.0"],
        )
        .unwrap();
        let err = PriceSchema::validate(&df).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(_)));
    }

    #[test]
    fn news_schema_rejects_missing_headline() {
        let df = df!(
            "date" => &["2024-01-02"],
            "publisher" => &["Reuters"],
        )
        .unwrap();
        let err = NewsSchema::validate(&df).unwrap_err();
        assert!(matches!(err, SchemaError::MissingColumn(col) if col == "headline"));
    }
}
