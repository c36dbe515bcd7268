//! Batch scoring of a JSON feed dump.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use chrono::{DateTime, Utc};
use newsimpact_core::{normalize_symbol, NewsItem};
use newsimpact_engine::{
    negative_news_alert, select_fresh, summarize, MetadataProvider, NewsAlert, NewsImpactEngine,
    ScoredArticle, SentimentSummary,
};
use serde::Serialize;
use tokio::task::JoinSet;

pub(crate) type Feed = BTreeMap<String, Vec<NewsItem>>;

#[derive(Debug, Serialize)]
pub(crate) struct SymbolReport {
    pub symbol: String,
    /// Articles in the feed for this symbol, before de-duplication and capping.
    pub news_count: usize,
    pub analyzed_count: usize,
    pub articles: Vec<ScoredArticle>,
    pub summary: SentimentSummary,
    pub alerts: Vec<NewsAlert>,
}

/// Parse a feed from its JSON text.
///
/// # Errors
///
/// Returns an error if the text is not a `{SYMBOL: [news item, ...]}` object.
pub(crate) fn parse_feed(json: &str) -> anyhow::Result<Feed> {
    let raw: Feed = serde_json::from_str(json).context("feed must map symbols to news arrays")?;
    let mut feed = Feed::new();
    for (symbol, items) in raw {
        feed.entry(normalize_symbol(&symbol))
            .or_default()
            .extend(items);
    }
    Ok(feed)
}

/// Read and parse a feed file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub(crate) fn load_feed(path: &Path) -> anyhow::Result<Feed> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading feed {}", path.display()))?;
    parse_feed(&json)
}

fn build_report<P: MetadataProvider>(
    engine: &NewsImpactEngine<P>,
    symbol: &str,
    news_count: usize,
    items: &[NewsItem],
    as_of: DateTime<Utc>,
) -> SymbolReport {
    let articles: Vec<ScoredArticle> = items
        .iter()
        .map(|item| engine.assess_at(symbol, item, as_of))
        .collect();
    let summary = summarize(articles.iter().map(|a| &a.sentiment));
    let alerts = articles
        .iter()
        .filter_map(|a| negative_news_alert(&a.symbol, &a.news, &a.sentiment))
        .collect();

    SymbolReport {
        symbol: symbol.to_string(),
        news_count,
        analyzed_count: articles.len(),
        articles,
        summary,
        alerts,
    }
}

/// Score every symbol of `feed` on the blocking pool, sharing one engine.
///
/// Article ids are de-duplicated across the whole feed, and at most
/// `max_articles` fresh articles are scored per symbol.
///
/// # Errors
///
/// Returns an error if a scoring task panics.
pub(crate) async fn run_batch<P>(
    engine: Arc<NewsImpactEngine<P>>,
    feed: Feed,
    max_articles: usize,
    as_of: DateTime<Utc>,
) -> anyhow::Result<Vec<SymbolReport>>
where
    P: MetadataProvider + 'static,
{
    let mut seen = HashSet::new();
    let mut tasks = JoinSet::new();

    for (symbol, items) in feed {
        let news_count = items.len();
        let fresh = select_fresh(items, &mut seen, max_articles);
        tracing::info!(
            symbol = %symbol,
            news_count,
            selected = fresh.len(),
            "scoring symbol"
        );
        let engine = Arc::clone(&engine);
        tasks.spawn_blocking(move || build_report(&engine, &symbol, news_count, &fresh, as_of));
    }

    let mut reports = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        reports.push(joined.context("scoring task failed")?);
    }
    reports.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    tracing::info!(symbols = reports.len(), "batch complete");
    Ok(reports)
}
