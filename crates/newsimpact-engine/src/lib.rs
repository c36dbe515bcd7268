//! News impact scoring engine.
//!
//! Turns a news item about a listed company into a sentiment verdict, a
//! 0–100 impact score with its tier, and a directional price-move estimate.
//! The pipeline is normalize → sentiment + classification → impact, with
//! stock metadata served from a per-engine cache.

pub mod alerts;
pub mod calibration;
pub mod classify;
pub mod engine;
pub mod feed;
pub mod impact;
pub mod metadata;
pub mod normalize;
pub mod sentiment;
pub mod summary;

pub use alerts::{negative_news_alert, price_drop_alert, NewsAlert, PriceAlert};
pub use calibration::Calibration;
pub use classify::{classify_and_extract, Classification, EntitySet, NewsType};
pub use engine::{NewsImpactEngine, ScoredArticle};
pub use feed::select_fresh;
pub use impact::{
    Direction, ImpactCalculator, ImpactFactors, ImpactLevel, ImpactResult, PricePrediction,
};
pub use metadata::{MetadataCache, MetadataProvider, StaticMetadataProvider};
pub use normalize::normalize;
pub use sentiment::{
    ComponentScores, LexicalScores, SentimentAnalyzer, SentimentLabel, SentimentResult,
    TextSentiment, VaderScores,
};
pub use summary::{summarize, SentimentSummary};
