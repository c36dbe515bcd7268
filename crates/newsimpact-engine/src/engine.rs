//! The public facade tying sentiment, classification, metadata and impact
//! scoring together.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use newsimpact_core::{NewsItem, StockMetadata};
use serde::Serialize;

use crate::calibration::Calibration;
use crate::classify::{self, Classification};
use crate::impact::{ImpactCalculator, ImpactResult};
use crate::metadata::{MetadataCache, MetadataProvider, StaticMetadataProvider};
use crate::sentiment::{SentimentAnalyzer, SentimentResult, TextSentiment};

/// One article scored end to end for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredArticle {
    pub symbol: String,
    pub news: NewsItem,
    pub sentiment: SentimentResult,
    pub impact: ImpactResult,
}

/// Scores news items against stock metadata.
///
/// All operations take `&self` and are safe to call from many threads at
/// once; the only shared mutable state is the metadata cache.
pub struct NewsImpactEngine<P = StaticMetadataProvider> {
    analyzer: SentimentAnalyzer,
    calculator: ImpactCalculator,
    metadata: MetadataCache<P>,
}

impl NewsImpactEngine {
    /// Engine over the built-in stock table with the standard calibration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_provider(StaticMetadataProvider::builtin(), &Calibration::STANDARD)
    }
}

impl Default for NewsImpactEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: MetadataProvider> NewsImpactEngine<P> {
    #[must_use]
    pub fn with_provider(provider: P, calibration: &'static Calibration) -> Self {
        tracing::debug!(calibration = calibration.name, "building news impact engine");
        Self {
            analyzer: SentimentAnalyzer::new(),
            calculator: ImpactCalculator::new(calibration),
            metadata: MetadataCache::new(provider),
        }
    }

    #[must_use]
    pub fn calibration(&self) -> &'static Calibration {
        self.calculator.calibration()
    }

    /// Symbol-free sentiment of arbitrary text.
    #[must_use]
    pub fn analyze(&self, text: &str) -> TextSentiment {
        self.analyzer.analyze(text)
    }

    #[must_use]
    pub fn classify_and_extract(
        &self,
        headline: &str,
        summary: &str,
        metadata: &StockMetadata,
    ) -> Classification {
        classify::classify_and_extract(headline, summary, metadata)
    }

    /// Cached metadata for `symbol`; unknown symbols get defaults.
    #[must_use]
    pub fn metadata(&self, symbol: &str) -> Arc<StockMetadata> {
        self.metadata.get_or_load(symbol)
    }

    /// Sentiment of an article in the context of one symbol.
    #[must_use]
    pub fn analyze_news(&self, symbol: &str, news_item: &NewsItem) -> SentimentResult {
        let metadata = self.metadata(symbol);
        self.sentiment_for(news_item, &metadata)
    }

    /// Impact of an article on `symbol`, with article age measured from now.
    #[must_use]
    pub fn score(&self, symbol: &str, news_item: &NewsItem) -> ImpactResult {
        self.score_at(symbol, news_item, Utc::now())
    }

    /// Impact of an article on `symbol`, with article age measured from `as_of`.
    #[must_use]
    pub fn score_at(
        &self,
        symbol: &str,
        news_item: &NewsItem,
        as_of: DateTime<Utc>,
    ) -> ImpactResult {
        self.assess_at(symbol, news_item, as_of).impact
    }

    /// Full sentiment and impact record for one article.
    #[must_use]
    pub fn assess_at(
        &self,
        symbol: &str,
        news_item: &NewsItem,
        as_of: DateTime<Utc>,
    ) -> ScoredArticle {
        let metadata = self.metadata(symbol);
        let sentiment = self.sentiment_for(news_item, &metadata);
        let impact = self
            .calculator
            .calculate(&metadata.symbol, news_item, &sentiment, &metadata, as_of);

        tracing::debug!(
            symbol = %metadata.symbol,
            news_id = %news_item.id,
            label = %sentiment.label,
            impact_score = impact.impact_score,
            level = %impact.impact_level,
            "scored article"
        );

        ScoredArticle {
            symbol: metadata.symbol.clone(),
            news: news_item.clone(),
            sentiment,
            impact,
        }
    }

    fn sentiment_for(&self, news_item: &NewsItem, metadata: &StockMetadata) -> SentimentResult {
        let text = self.analyzer.analyze(&news_item.full_text());
        let Classification {
            news_type,
            entities,
        } = classify::classify_and_extract(&news_item.headline, &news_item.summary, metadata);
        SentimentResult::new(text, entities, news_type)
    }
}
