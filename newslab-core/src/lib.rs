//! NewsLab Core — exploratory analysis of financial news and stock prices.
//!
//! This crate contains the analysis pipeline:
//! - Domain types (price records, news records, date-keyed series)
//! - CSV ingestion with explicit column schemas
//! - Date alignment across news and price tables
//! - Headline sentiment scoring and per-date aggregation
//! - Technical indicators (SMA, EMA, RSI, MACD) and daily returns
//! - Pearson correlation with significance testing
//! - Descriptive and text summaries (lengths, publishers, hours, keywords)
//!
//! Every stage is a pure transformation: borrowed input in, new value out,
//! no caller-owned data mutated, no shared state between operations.

pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod export;
pub mod indicators;
pub mod sentiment;
pub mod text;
