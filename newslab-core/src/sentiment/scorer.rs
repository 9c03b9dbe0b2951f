//! Lexicon-based polarity scoring (VADER).
//!
//! Scoring policy: a headline that cannot be scored gets the neutral value
//! 0.0 and the reason is logged at `warn`; one bad record must never abort
//! a batch. The fallback is explicit (`score` wraps `try_score`), not a
//! blanket catch.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::warn;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::domain::NewsRecord;

/// Why a single text unit could not be scored.
#[derive(Debug, Error)]
pub enum ScoreError {
    #[error("empty text")]
    EmptyText,

    #[error("lexicon returned no compound score")]
    MissingCompound,
}

/// Per-headline polarity paired with its date key.
#[derive(Debug, Clone)]
pub struct ScoredHeadline {
    /// None when the source timestamp did not parse; such rows are skipped
    /// by the daily aggregate.
    pub date: Option<NaiveDate>,
    /// Polarity in [-1.0, 1.0].
    pub polarity: f64,
}

/// Wraps the VADER analyzer with the neutral-on-failure policy.
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Polarity of one text unit in [-1.0, 1.0].
    pub fn try_score(&self, text: &str) -> Result<f64, ScoreError> {
        if text.trim().is_empty() {
            return Err(ScoreError::EmptyText);
        }
        let scores = self.analyzer.polarity_scores(text);
        let compound = scores.get("compound").copied().ok_or(ScoreError::MissingCompound)?;
        Ok(compound.clamp(-1.0, 1.0))
    }

    /// Polarity with the neutral fallback: failures score 0.0 and log why.
    pub fn score(&self, text: &str) -> f64 {
        match self.try_score(text) {
            Ok(polarity) => polarity,
            Err(reason) => {
                warn!(%reason, "sentiment scoring failed, substituting neutral 0.0");
                0.0
            }
        }
    }

    /// Score a batch of news records. Never fails; per-record failures are
    /// substituted with neutral 0.0.
    pub fn score_records(&self, records: &[NewsRecord]) -> Vec<ScoredHeadline> {
        records
            .iter()
            .map(|rec| ScoredHeadline {
                date: rec.date(),
                polarity: self.score(&rec.headline),
            })
            .collect()
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn positive_headline_scores_positive() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("Company reports record profits, stock soars on great earnings");
        assert!(score > 0.0, "expected positive polarity, got {score}");
    }

    #[test]
    fn negative_headline_scores_negative() {
        let scorer = SentimentScorer::new();
        let score = scorer.score("Shares collapse after disastrous fraud scandal and huge losses");
        assert!(score < 0.0, "expected negative polarity, got {score}");
    }

    #[test]
    fn score_is_bounded() {
        let scorer = SentimentScorer::new();
        for text in [
            "amazing wonderful fantastic excellent best great",
            "terrible horrible awful worst disaster catastrophe",
            "The quarterly report was released on Tuesday",
        ] {
            let score = scorer.score(text);
            assert!((-1.0..=1.0).contains(&score), "{text} scored {score}");
        }
    }

    #[test]
    fn empty_text_falls_back_to_neutral() {
        let scorer = SentimentScorer::new();
        assert!(matches!(scorer.try_score("   "), Err(ScoreError::EmptyText)));
        assert_eq!(scorer.score(""), 0.0);
    }

    #[test]
    fn score_records_keeps_date_keys() {
        let scorer = SentimentScorer::new();
        let records = vec![
            NewsRecord {
                published_at: NaiveDate::from_ymd_opt(2024, 1, 2)
                    .unwrap()
                    .and_hms_opt(9, 0, 0),
                headline: "Stocks rally on upbeat outlook".into(),
                publisher: "Reuters".into(),
            },
            NewsRecord {
                published_at: None,
                headline: "Undated wire item".into(),
                publisher: "Wire".into(),
            },
        ];
        let scored = scorer.score_records(&records);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].date, NaiveDate::from_ymd_opt(2024, 1, 2));
        assert_eq!(scored[1].date, None);
    }
}
