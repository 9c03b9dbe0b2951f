//! Analysis configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file at all) yields
//! the standard 20/50/14/12-26-9 setup.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::indicators::IndicatorParams;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    MissingFile(PathBuf),

    #[error("failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    pub indicators: IndicatorParams,
    /// How many keywords `summarize` reports.
    pub top_keywords: usize,
    /// How many publishers/domains `summarize` reports.
    pub top_publishers: usize,
    /// HTTP timeout for the live price provider.
    pub provider_timeout_secs: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            indicators: IndicatorParams::default(),
            top_keywords: 20,
            top_publishers: 10,
            provider_timeout_secs: 30,
        }
    }
}

impl AnalysisConfig {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }
}
