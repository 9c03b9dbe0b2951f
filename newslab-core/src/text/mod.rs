//! Descriptive and text summaries over raw news tables.
//!
//! Independent utilities: each takes a slice of records and returns a final
//! summary table/series. Nothing here feeds the correlation path.

pub mod descriptive;
pub mod keywords;
pub mod timeline;

pub use descriptive::{articles_per_publisher, headline_length_stats, top_publishers, HeadlineLengthStats};
pub use keywords::KeywordExtractor;
pub use timeline::{articles_per_day, articles_per_hour, top_email_domains};
