//! Top-N keyword frequency: lowercase bag-of-words with English stop-words
//! removed.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::domain::NewsRecord;

/// English stop-words excluded from keyword counts.
const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "he", "her", "here",
    "hers", "herself", "him", "himself", "his", "how", "if", "in", "into", "is", "it", "its",
    "itself", "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of",
    "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves", "out", "over",
    "own", "same", "she", "should", "so", "some", "such", "than", "that", "the", "their",
    "theirs", "them", "themselves", "then", "there", "these", "they", "this", "those",
    "through", "to", "too", "under", "until", "up", "upon", "very", "was", "we", "were",
    "what", "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would",
    "you", "your", "yours", "yourself", "yourselves",
];

/// Bag-of-words keyword counter over headline text.
pub struct KeywordExtractor {
    token_re: Regex,
    stop_words: HashSet<&'static str>,
}

impl KeywordExtractor {
    pub fn new() -> Self {
        Self {
            // Two or more word characters, matching the usual
            // bag-of-words token definition
            token_re: Regex::new(r"\b\w\w+\b").expect("valid token pattern"),
            stop_words: STOP_WORDS.iter().copied().collect(),
        }
    }

    /// Lowercased non-stop-word tokens of one text unit.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let lowered = text.to_lowercase();
        self.token_re
            .find_iter(&lowered)
            .map(|tok| tok.as_str().to_string())
            .filter(|tok| !self.stop_words.contains(tok.as_str()))
            .collect()
    }

    /// The `n` most frequent keywords across all headlines, sorted by
    /// frequency descending then token ascending.
    pub fn top_keywords(&self, records: &[NewsRecord], n: usize) -> Vec<(String, usize)> {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for rec in records {
            for token in self.tokenize(&rec.headline) {
                *counts.entry(token).or_insert(0) += 1;
            }
        }
        let mut out: Vec<(String, usize)> = counts.into_iter().collect();
        out.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        out.truncate(n);
        out
    }
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new()
    }
}
