//! Impact scoring: a multiplicative factor model over sentiment, news type,
//! stock metadata and article age.

pub mod factors;

use chrono::{DateTime, Utc};
use newsimpact_core::{NewsItem, StockMetadata};
use serde::{Deserialize, Serialize};

use crate::calibration::Calibration;
use crate::classify::{EntitySet, NewsType};
use crate::sentiment::SentimentResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ImpactLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for ImpactLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImpactLevel::Minimal => write!(f, "MINIMAL"),
            ImpactLevel::Low => write!(f, "LOW"),
            ImpactLevel::Medium => write!(f, "MEDIUM"),
            ImpactLevel::High => write!(f, "HIGH"),
            ImpactLevel::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    StrongUp,
    Up,
    Neutral,
    Down,
    StrongDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
    pub direction: Direction,
    /// Predicted absolute move in percent.
    pub percentage: f64,
    /// `min(impact_score / 100, ceiling)`; a proxy, not a probability.
    pub confidence: f64,
}

/// Audit trail of every factor that went into an impact score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImpactFactors {
    pub base_weight: f64,
    pub volatility_factor: f64,
    pub sentiment_amplifier: f64,
    pub time_factor: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub liquidity_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entity_impact: Option<f64>,
}

impl ImpactFactors {
    /// Product of all factors, before scaling to 0–100.
    #[must_use]
    pub fn product(&self) -> f64 {
        self.base_weight
            * self.volatility_factor
            * self.liquidity_factor.unwrap_or(1.0)
            * self.sector_factor.unwrap_or(1.0)
            * self.sentiment_amplifier
            * self.time_factor
            * (1.0 + self.entity_impact.unwrap_or(0.0))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImpactResult {
    pub symbol: String,
    /// In `[0.0, 100.0]`.
    pub impact_score: f64,
    pub impact_level: ImpactLevel,
    pub price_prediction: PricePrediction,
    pub news_type: NewsType,
    pub factors: ImpactFactors,
    pub entities_found: EntitySet,
    pub metadata: StockMetadata,
    /// Name of the calibration that produced this result.
    pub calibration: &'static str,
}

/// Applies one [`Calibration`] to sentiment results.
#[derive(Debug, Clone, Copy)]
pub struct ImpactCalculator {
    calibration: &'static Calibration,
}

impl ImpactCalculator {
    #[must_use]
    pub fn new(calibration: &'static Calibration) -> Self {
        Self { calibration }
    }

    #[must_use]
    pub fn calibration(&self) -> &'static Calibration {
        self.calibration
    }

    /// Score one article for one symbol as of `as_of`.
    #[must_use]
    pub fn calculate(
        &self,
        symbol: &str,
        news_item: &NewsItem,
        sentiment: &SentimentResult,
        metadata: &StockMetadata,
        as_of: DateTime<Utc>,
    ) -> ImpactResult {
        let cal = self.calibration;
        let entities = &sentiment.entities_found;

        let factors = ImpactFactors {
            base_weight: sentiment.news_type.base_weight(),
            volatility_factor: factors::volatility_factor(cal, metadata),
            sentiment_amplifier: factors::sentiment_amplifier(
                sentiment.score,
                sentiment.confidence,
                sentiment.impact_multiplier,
            ),
            time_factor: factors::time_factor(&cal.time_decay, news_item.published_at(), as_of),
            liquidity_factor: cal
                .liquidity
                .as_ref()
                .map(|model| factors::liquidity_factor(model, metadata)),
            sector_factor: cal
                .sector
                .as_ref()
                .map(|model| factors::sector_factor(model, &metadata.sector, entities)),
            entity_impact: cal
                .entity
                .as_ref()
                .map(|weights| factors::entity_impact(weights, entities)),
        };

        let raw = factors.product() * 100.0;
        let impact_score = if raw.is_nan() {
            0.0
        } else {
            raw.clamp(0.0, 100.0)
        };
        let impact_level = factors::impact_level(&cal.tiers, impact_score);
        let price_prediction = factors::predict_price_movement(
            &cal.price,
            sentiment.score,
            impact_score,
            metadata.beta,
        );

        tracing::debug!(
            symbol,
            news_type = %sentiment.news_type,
            base_weight = factors.base_weight,
            volatility = factors.volatility_factor,
            amplifier = factors.sentiment_amplifier,
            time = factors.time_factor,
            impact_score,
            level = %impact_level,
            "computed impact score"
        );

        ImpactResult {
            symbol: symbol.to_string(),
            impact_score,
            impact_level,
            price_prediction,
            news_type: sentiment.news_type,
            factors,
            entities_found: entities.clone(),
            metadata: metadata.clone(),
            calibration: cal.name,
        }
    }
}

impl Default for ImpactCalculator {
    fn default() -> Self {
        Self::new(&Calibration::STANDARD)
    }
}
