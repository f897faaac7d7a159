//! QuoteLab CLI — fetch, clean, and analyze stock quotes.
//!
//! Commands:
//! - `quote` — fetch one ticker, run the cleaner, print the record and report
//! - `analyze` — full pipeline: fetch, clean, run a tier analysis
//! - `tiers` — list the available analysis tiers

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use quotelab_core::analysis::{AnalysisTier, FinnhubMetrics, TierReport};
use quotelab_core::clean::CleanOutcome;
use quotelab_core::config::AppConfig;
use quotelab_core::data::{FinnhubQuotes, QuoteError};
use quotelab_core::domain::QuoteField;
use quotelab_core::pipeline;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quotelab", about = "QuoteLab CLI — clean stock quotes, no noise")]
struct Cli {
    /// Path to a TOML config file with the API credential. Falls back to the
    /// FINNHUB_API_KEY environment variable.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and clean a single quote.
    Quote {
        /// Ticker symbol (e.g., AAPL).
        ticker: String,

        /// Print the cleaned record as JSON.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Fetch, clean, and run a tier analysis.
    Analyze {
        /// Ticker symbol (e.g., AAPL).
        ticker: String,

        /// Analysis tier: value or growth.
        #[arg(long, default_value = "value")]
        tier: String,
    },
    /// List the available analysis tiers.
    Tiers,
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Quote { ticker, json } => run_quote(cli.config.as_deref(), &ticker, json),
        Commands::Analyze { ticker, tier } => run_analyze(cli.config.as_deref(), &ticker, &tier),
        Commands::Tiers => run_tiers(),
    }
}

/// Uppercase and trim the ticker; empty input never reaches the pipeline.
fn normalize_ticker(ticker: &str) -> Result<String> {
    let ticker = ticker.trim().to_ascii_uppercase();
    if ticker.is_empty() {
        bail!("please enter a valid stock symbol");
    }
    Ok(ticker)
}

/// Map a pipeline failure to caller-facing behavior: staleness and transport
/// failures both mean "no fresh data", so the command declines to proceed.
fn bail_no_data(ticker: &str, err: QuoteError) -> anyhow::Error {
    if err.is_stale() {
        log::warn!("data for {ticker} is older than 24 hours, skipping");
    }
    anyhow::Error::new(err).context(format!("no fresh quote for {ticker}"))
}

fn run_quote(config_path: Option<&Path>, ticker: &str, json: bool) -> Result<()> {
    let ticker = normalize_ticker(ticker)?;
    let config = AppConfig::resolve(config_path).context("loading configuration")?;
    let provider = FinnhubQuotes::new(config.api_key);

    let outcome = pipeline::fetch_and_clean(&provider, &ticker)
        .map_err(|e| bail_no_data(&ticker, e))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print_outcome(&ticker, &outcome);
    }
    Ok(())
}

fn run_analyze(config_path: Option<&Path>, ticker: &str, tier: &str) -> Result<()> {
    let ticker = normalize_ticker(ticker)?;
    let tier: AnalysisTier = tier.parse()?;
    let config = AppConfig::resolve(config_path).context("loading configuration")?;
    let provider = FinnhubQuotes::new(config.api_key.clone());
    let metrics = FinnhubMetrics::new(config.api_key);

    let (outcome, report) = pipeline::analyze_ticker(&provider, &metrics, tier, &ticker)
        .map_err(|e| bail_no_data(&ticker, e))?;

    if !outcome.report.is_clean_pass() {
        println!(
            "Cleaning: {} missing value(s) handled, {} outlier(s) capped\n",
            outcome.report.imputed.len(),
            outcome.report.clipped.len()
        );
    }
    print_report(&report);
    Ok(())
}

fn run_tiers() -> Result<()> {
    for tier in AnalysisTier::ALL {
        println!("{:<8} {}", tier.key(), tier.description());
    }
    Ok(())
}

fn print_outcome(ticker: &str, outcome: &CleanOutcome) {
    println!("Quote for {ticker}:");
    for field in QuoteField::ALL {
        match outcome.quote.field(field) {
            Some(v) => println!("  {field:<15} {v:.2}"),
            None => println!("  {field:<15} (missing)"),
        }
    }

    if outcome.report.is_clean_pass() {
        println!("\nClean pass: no repairs needed.");
    } else {
        println!(
            "\nRepairs: imputed [{}], clipped [{}]",
            join_fields(&outcome.report.imputed),
            join_fields(&outcome.report.clipped),
        );
    }
}

fn join_fields(fields: &[QuoteField]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn print_report(report: &TierReport) {
    println!("{} Analysis: {}", report.tier.name(), report.symbol);
    for metric in &report.metrics {
        println!("  {:<24} {}", metric.label, metric.display_value());
    }
    if !report.notes.is_empty() {
        println!("\nInterpretation:");
        for note in &report.notes {
            println!("  - {note}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_uppercases_and_trims() {
        assert_eq!(normalize_ticker(" aapl ").unwrap(), "AAPL");
    }

    #[test]
    fn empty_ticker_is_rejected() {
        assert!(normalize_ticker("   ").is_err());
    }

    #[test]
    fn join_fields_renders_names() {
        assert_eq!(
            join_fields(&[QuoteField::Current, QuoteField::PrevClose]),
            "current, prev_close"
        );
    }
}
