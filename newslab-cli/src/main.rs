//! NewsLab CLI — drive the analysis routines from the shell.
//!
//! Commands:
//! - `fetch` — pull daily prices from Yahoo Finance (empty table on failure)
//! - `indicators` — SMA/EMA/RSI/MACD table plus close/volume summary
//! - `sentiment` — per-date mean headline polarity
//! - `correlate` — Pearson r and p-value between returns and sentiment
//! - `summarize` — descriptive and keyword reports over a news table
//! - `demo` — run the whole pipeline on synthetic data

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use newslab_core::analysis::{correlate, PriceSummary};
use newslab_core::config::AnalysisConfig;
use newslab_core::data::synthetic::{synthetic_news, synthetic_prices};
use newslab_core::data::{
    align_by_date, fetch_or_empty, load_news_csv, load_price_csv, load_price_dir, YahooProvider,
};
use newslab_core::domain::PriceRecord;
use newslab_core::export::{
    write_indicator_csv, write_price_csv, write_series_csv,
};
use newslab_core::indicators::{daily_returns, IndicatorSet};
use newslab_core::sentiment::{aggregate_daily, SentimentScorer};
use newslab_core::text::{
    articles_per_day, articles_per_hour, headline_length_stats, top_email_domains, top_publishers,
    KeywordExtractor,
};

#[derive(Parser)]
#[command(name = "newslab", about = "NewsLab CLI — financial news & price analysis")]
struct Cli {
    /// Path to a TOML analysis config. Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch daily prices from Yahoo Finance.
    Fetch {
        /// Ticker symbol (e.g. AAPL).
        #[arg(long)]
        symbol: String,

        /// Start date (YYYY-MM-DD). Defaults to ~6 months ago.
        #[arg(long)]
        start: Option<String>,

        /// End date (YYYY-MM-DD). Defaults to today.
        #[arg(long)]
        end: Option<String>,

        /// Write the fetched table as CSV.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Compute the indicator bundle over a price CSV (or directory of CSVs).
    Indicators {
        /// Price CSV file, or a directory of per-symbol CSVs.
        #[arg(long)]
        prices: PathBuf,

        /// Write the indicator table as CSV.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Score headlines and aggregate mean polarity per date.
    Sentiment {
        /// News CSV file.
        #[arg(long)]
        news: PathBuf,

        /// Write the per-date series as CSV.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Correlate daily returns with aggregated headline sentiment.
    Correlate {
        /// News CSV file.
        #[arg(long)]
        news: PathBuf,

        /// Price CSV file.
        #[arg(long)]
        prices: PathBuf,
    },
    /// Descriptive and keyword reports over a news table.
    Summarize {
        /// News CSV file.
        #[arg(long)]
        news: PathBuf,

        /// Override the configured keyword count.
        #[arg(long)]
        top_n: Option<usize>,
    },
    /// Run the full pipeline on synthetic data.
    Demo {
        /// Number of synthetic trading days.
        #[arg(long, default_value_t = 120)]
        days: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => AnalysisConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => AnalysisConfig::default(),
    };

    match cli.command {
        Commands::Fetch {
            symbol,
            start,
            end,
            out,
        } => run_fetch(&config, &symbol, start.as_deref(), end.as_deref(), out.as_deref()),
        Commands::Indicators { prices, out } => run_indicators(&config, &prices, out.as_deref()),
        Commands::Sentiment { news, out } => run_sentiment(&news, out.as_deref()),
        Commands::Correlate { news, prices } => run_correlate(&news, &prices),
        Commands::Summarize { news, top_n } => run_summarize(&config, &news, top_n),
        Commands::Demo { days } => run_demo(&config, days),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").with_context(|| format!("invalid date: {raw}"))
}

fn run_fetch(
    config: &AnalysisConfig,
    symbol: &str,
    start: Option<&str>,
    end: Option<&str>,
    out: Option<&Path>,
) -> Result<()> {
    let end = match end {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };
    let start = match start {
        Some(raw) => parse_date(raw)?,
        None => end - chrono::Duration::days(182),
    };

    let provider = YahooProvider::new(Duration::from_secs(config.provider_timeout_secs));
    let records = fetch_or_empty(&provider, symbol, start, end);

    if records.is_empty() {
        println!("No data for {symbol} ({start}..{end}): provider failed or range is empty.");
    } else {
        println!("Fetched {} rows for {symbol} ({start}..{end})", records.len());
        print_price_head(&records, 5);
    }

    if let Some(path) = out {
        write_price_csv(path, &records)?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn load_prices(path: &Path) -> Result<Vec<PriceRecord>> {
    let records = if path.is_dir() {
        load_price_dir(path)?
    } else {
        load_price_csv(path)?
    };
    Ok(records)
}

fn run_indicators(config: &AnalysisConfig, prices: &Path, out: Option<&Path>) -> Result<()> {
    let records = load_prices(prices)?;
    let set = IndicatorSet::compute(&records, &config.indicators);

    if let Some(summary) = PriceSummary::compute(&records) {
        println!("Financial summary ({} rows):", summary.rows);
        println!("  average close : {:.2}", summary.average_close);
        println!("  max close     : {:.2}", summary.max_close);
        println!("  min close     : {:.2}", summary.min_close);
        println!("  volume stddev : {:.0}", summary.volume_std_dev);
    }

    println!("\n{:<12} {:>10} {:>10} {:>10} {:>8} {:>9} {:>9}",
        "date", "close", "sma20", "sma50", "rsi", "macd", "signal");
    let tail = set.len().saturating_sub(10);
    for i in tail..set.len() {
        println!(
            "{:<12} {:>10.2} {:>10} {:>10} {:>8} {:>9} {:>9}",
            set.dates[i].to_string(),
            set.close[i],
            fmt_cell(set.sma_short[i]),
            fmt_cell(set.sma_long[i]),
            fmt_cell(set.rsi[i]),
            fmt_cell(set.macd[i]),
            fmt_cell(set.macd_signal[i]),
        );
    }

    if let Some(path) = out {
        write_indicator_csv(path, &set)?;
        println!("\nWrote {}", path.display());
    }
    Ok(())
}

fn run_sentiment(news: &Path, out: Option<&Path>) -> Result<()> {
    let records = load_news_csv(news)?;
    let scorer = SentimentScorer::new();
    let scored = scorer.score_records(&records);
    let series = aggregate_daily(&scored);

    println!(
        "Scored {} headlines across {} dates",
        scored.len(),
        series.len()
    );
    for (date, value) in series.iter().take(15) {
        println!("  {date}  {value:+.4}");
    }
    if series.len() > 15 {
        println!("  ... ({} more dates)", series.len() - 15);
    }

    if let Some(path) = out {
        write_series_csv(path, &series, "avg_sentiment")?;
        println!("Wrote {}", path.display());
    }
    Ok(())
}

fn run_correlate(news: &Path, prices: &Path) -> Result<()> {
    let news_records = load_news_csv(news)?;
    let price_records = load_prices(prices)?;

    let (aligned_news, aligned_prices) = align_by_date(&news_records, &price_records);
    println!(
        "Aligned {} headlines with {} price rows on common dates",
        aligned_news.len(),
        aligned_prices.len()
    );

    let returns = daily_returns(&aligned_prices);
    let scorer = SentimentScorer::new();
    let sentiment = aggregate_daily(&scorer.score_records(&aligned_news));

    let test = correlate(&returns, &sentiment)?;
    println!(
        "Pearson correlation: {:.4} (p-value: {:.4}, n={})",
        test.coefficient, test.p_value, test.n
    );
    Ok(())
}

fn run_summarize(config: &AnalysisConfig, news: &Path, top_n: Option<usize>) -> Result<()> {
    let records = load_news_csv(news)?;
    let top_n = top_n.unwrap_or(config.top_keywords);

    println!("Loaded {} headlines", records.len());

    if let Some(stats) = headline_length_stats(&records) {
        println!("\nHeadline length:");
        println!("  count  {}", stats.count);
        println!("  mean   {:.1}", stats.mean);
        println!("  std    {:.1}", stats.std);
        println!("  min    {:.0}", stats.min);
        println!("  25%    {:.0}", stats.q25);
        println!("  50%    {:.0}", stats.median);
        println!("  75%    {:.0}", stats.q75);
        println!("  max    {:.0}", stats.max);
    }

    println!("\nTop publishers:");
    for (publisher, count) in top_publishers(&records, config.top_publishers) {
        println!("  {count:>6}  {publisher}");
    }

    let domains = top_email_domains(&records, config.top_publishers);
    if !domains.is_empty() {
        println!("\nTop e-mail domains:");
        for (domain, count) in domains {
            println!("  {count:>6}  {domain}");
        }
    }

    let daily = articles_per_day(&records);
    if !daily.is_empty() {
        let busiest = daily.iter().max_by_key(|(_, count)| *count);
        println!("\nPublication dates: {} (busiest: {})", daily.len(),
            busiest.map(|(date, count)| format!("{date} with {count}")).unwrap_or_default());
    }

    println!("\nArticles by hour of day:");
    let histogram = articles_per_hour(&records);
    for (hour, count) in histogram.iter().enumerate() {
        if *count > 0 {
            println!("  {hour:>2}:00  {count}");
        }
    }

    println!("\nTop {top_n} keywords:");
    let extractor = KeywordExtractor::new();
    for (keyword, count) in extractor.top_keywords(&records, top_n) {
        println!("  {count:>6}  {keyword}");
    }
    Ok(())
}

fn run_demo(config: &AnalysisConfig, days: usize) -> Result<()> {
    let prices = synthetic_prices(days, 42);
    let news = synthetic_news(days, 3, 43);
    println!(
        "Synthetic dataset: {} price rows, {} headlines",
        prices.len(),
        news.len()
    );

    let (aligned_news, aligned_prices) = align_by_date(&news, &prices);
    let returns = daily_returns(&aligned_prices);
    let scorer = SentimentScorer::new();
    let sentiment = aggregate_daily(&scorer.score_records(&aligned_news));

    let set = IndicatorSet::compute(&aligned_prices, &config.indicators);
    let defined_rsi = set.rsi.iter().filter(|v| !v.is_nan()).count();
    println!("Indicators computed: {} rows, {} with defined RSI", set.len(), defined_rsi);

    match correlate(&returns, &sentiment) {
        Ok(test) => println!(
            "Pearson correlation: {:.4} (p-value: {:.4}, n={})",
            test.coefficient, test.p_value, test.n
        ),
        Err(err) => println!("Correlation unavailable: {err}"),
    }
    Ok(())
}

fn fmt_cell(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.2}")
    }
}

fn print_price_head(records: &[PriceRecord], n: usize) {
    println!("{:<12} {:>10} {:>10} {:>10} {:>10} {:>12}", "date", "open", "high", "low", "close", "volume");
    for rec in records.iter().take(n) {
        println!(
            "{:<12} {:>10.2} {:>10.2} {:>10.2} {:>10.2} {:>12}",
            rec.date.to_string(),
            rec.open,
            rec.high,
            rec.low,
            rec.close,
            rec.volume
        );
    }
}
