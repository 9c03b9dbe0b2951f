//! Headline sentiment scoring and per-date aggregation.

pub mod aggregate;
pub mod scorer;

pub use aggregate::aggregate_daily;
pub use scorer::{ScoreError, ScoredHeadline, SentimentScorer};
