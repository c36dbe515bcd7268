//! Threshold alerts over price quotes and scored news.

use newsimpact_core::{NewsItem, PriceQuote};
use serde::Serialize;

use crate::sentiment::{SentimentLabel, SentimentResult};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceAlert {
    pub symbol: String,
    pub previous: f64,
    pub current: f64,
    /// Signed fractional change, e.g. `-0.035` for a 3.5% drop.
    pub change_pct: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsAlert {
    pub symbol: String,
    pub news_id: String,
    pub headline: String,
    pub score: f64,
}

/// Alert when the price fell by at least `threshold` (a fraction) since the
/// previous close. Quotes without a usable previous price never alert.
#[must_use]
pub fn price_drop_alert(symbol: &str, quote: &PriceQuote, threshold: f64) -> Option<PriceAlert> {
    if !(quote.previous.is_finite() && quote.previous > 0.0 && quote.current.is_finite()) {
        return None;
    }
    let change_pct = (quote.current - quote.previous) / quote.previous;
    if change_pct <= -threshold {
        tracing::info!(symbol, change_pct, "price drop alert");
        Some(PriceAlert {
            symbol: symbol.to_string(),
            previous: quote.previous,
            current: quote.current,
            change_pct,
        })
    } else {
        None
    }
}

/// Alert for any article whose sentiment came out negative.
#[must_use]
pub fn negative_news_alert(
    symbol: &str,
    news_item: &NewsItem,
    sentiment: &SentimentResult,
) -> Option<NewsAlert> {
    (sentiment.label == SentimentLabel::Negative).then(|| NewsAlert {
        symbol: symbol.to_string(),
        news_id: news_item.id.clone(),
        headline: news_item.headline.clone(),
        score: sentiment.score,
    })
}
