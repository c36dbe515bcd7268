use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use newsimpact_core::{load_stocks, AppConfig, NewsItem, PriceQuote};
use newsimpact_engine::{price_drop_alert, Calibration, NewsImpactEngine, StaticMetadataProvider};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

mod batch;

#[derive(Debug, Parser)]
#[command(name = "newsimpact")]
#[command(about = "Score the market impact of news about listed companies")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Sentiment of arbitrary text, without any symbol context
    Analyze {
        #[arg(long)]
        text: String,
    },
    /// Score one article against one symbol
    Score {
        #[arg(long)]
        symbol: String,

        #[arg(long)]
        headline: String,

        #[arg(long, default_value = "")]
        summary: String,

        /// Publication time as unix seconds
        #[arg(long)]
        datetime: Option<i64>,

        /// Reference time for article age (RFC 3339); defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },
    /// Score a JSON feed of `{SYMBOL: [news item, ...]}`
    Batch {
        #[arg(long)]
        file: PathBuf,

        /// Reference time for article age (RFC 3339); defaults to now
        #[arg(long)]
        as_of: Option<DateTime<Utc>>,
    },
    /// Check a price move against the configured drop threshold
    PriceAlert {
        #[arg(long)]
        symbol: String,

        #[arg(long)]
        previous: f64,

        #[arg(long)]
        current: f64,
    },
}

fn init_tracing(config: &AppConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn build_engine(config: &AppConfig) -> anyhow::Result<NewsImpactEngine> {
    let provider = match &config.stocks_path {
        Some(path) => {
            let file = load_stocks(path)
                .with_context(|| format!("loading stock table {}", path.display()))?;
            tracing::info!(
                path = %path.display(),
                stocks = file.stocks.len(),
                "loaded stock overlay"
            );
            StaticMetadataProvider::from_stocks_file(file)
        }
        None => StaticMetadataProvider::builtin(),
    };

    Ok(NewsImpactEngine::with_provider(
        provider,
        Calibration::for_profile(config.calibration),
    ))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = newsimpact_core::load_app_config()?;
    init_tracing(&config)?;
    tracing::debug!(
        env = %config.env,
        calibration = %config.calibration,
        "configuration loaded"
    );

    match cli.command {
        Commands::Analyze { text } => {
            let engine = build_engine(&config)?;
            print_json(&engine.analyze(&text))?;
        }
        Commands::Score {
            symbol,
            headline,
            summary,
            datetime,
            as_of,
        } => {
            let engine = build_engine(&config)?;
            let mut item = NewsItem::new(headline, summary);
            item.datetime = datetime;
            let article = engine.assess_at(&symbol, &item, as_of.unwrap_or_else(Utc::now));
            print_json(&article)?;
        }
        Commands::Batch { file, as_of } => {
            let engine = Arc::new(build_engine(&config)?);
            let feed = batch::load_feed(&file)?;
            let reports = batch::run_batch(
                engine,
                feed,
                config.max_articles_per_symbol,
                as_of.unwrap_or_else(Utc::now),
            )
            .await?;
            print_json(&reports)?;
        }
        Commands::PriceAlert {
            symbol,
            previous,
            current,
        } => {
            let quote = PriceQuote { current, previous };
            if let Some(alert) = price_drop_alert(&symbol, &quote, config.price_drop_threshold) {
                print_json(&alert)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests;
