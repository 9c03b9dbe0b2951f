//! Data loading, validation, alignment, and the live price provider.

pub mod align;
pub mod ingest;
pub mod provider;
pub mod schema;
pub mod synthetic;
pub mod yahoo;

pub use align::align_by_date;
pub use ingest::{load_news_csv, load_price_csv, load_price_dir, DataError};
pub use provider::{fetch_or_empty, PriceProvider, ProviderError};
pub use schema::{NewsSchema, PriceSchema, SchemaError};
pub use yahoo::YahooProvider;
