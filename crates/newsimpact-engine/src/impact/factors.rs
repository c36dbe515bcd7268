//! The individual multiplicative factors of the impact model.
//!
//! Every function here is total: out-of-range inputs are clamped and the log
//! term is floored, so no combination of metadata yields NaN or infinity.

use chrono::{DateTime, Utc};
use newsimpact_core::{StockMetadata, TimestampError};

use crate::calibration::{
    Calibration, EntityWeights, LiquidityModel, PriceModel, SectorModel, TierThresholds,
    TimeDecay,
};
use crate::classify::EntitySet;

use super::{Direction, ImpactLevel, PricePrediction};

/// Market caps at or below this are treated as the smallest possible company.
pub const MARKET_CAP_FLOOR: f64 = 1_000_000.0;

/// `log10(market_cap / 1M)`, never negative.
fn market_cap_magnitude(market_cap: f64) -> f64 {
    (market_cap.max(MARKET_CAP_FLOOR) / MARKET_CAP_FLOOR).log10()
}

fn non_negative(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0)
    }
}

/// Inverse-log market-cap term: smaller companies get a larger factor.
///
/// The log is floored at `1 / cap`, which makes the division finite and
/// returns exactly `cap` for market caps at or below the floor.
#[must_use]
pub fn market_cap_term(market_cap: f64, cap: f64) -> f64 {
    let magnitude = market_cap_magnitude(market_cap).max(1.0 / cap);
    (1.0 / magnitude).min(cap)
}

/// Mean of the beta, market-cap and P/E sub-factors, each capped first.
#[must_use]
pub fn volatility_factor(calibration: &Calibration, metadata: &StockMetadata) -> f64 {
    let beta_term = non_negative(metadata.beta * calibration.beta_scale).min(calibration.beta_cap);
    let market_cap_term = market_cap_term(metadata.market_cap, calibration.market_cap_cap);
    let pe_term = non_negative(metadata.pe_ratio / calibration.pe_divisor).min(calibration.pe_cap);

    ((beta_term + market_cap_term + pe_term) / 3.0).min(calibration.volatility_cap)
}

/// Larger companies are more liquid and absorb news with less movement.
#[must_use]
pub fn liquidity_factor(model: &LiquidityModel, metadata: &StockMetadata) -> f64 {
    let size = market_cap_magnitude(metadata.market_cap);
    (1.0 / (1.0 + size * model.size_scale)).min(model.cap)
}

/// Sector multiplier, boosted when the article hit any topic keyword.
#[must_use]
pub fn sector_factor(model: &SectorModel, sector: &str, entities: &EntitySet) -> f64 {
    let sector = sector.trim().to_lowercase();
    let base = model
        .multipliers
        .iter()
        .find(|(name, _)| *name == sector)
        .map_or(1.0, |&(_, multiplier)| multiplier);

    if entities.keywords.is_empty() {
        base
    } else {
        base * model.keyword_boost
    }
}

/// `1 + |score| × confidence × impact_multiplier`.
///
/// Inputs are clamped to their documented ranges; a zero score or zero
/// confidence yields exactly `1.0`.
#[must_use]
pub fn sentiment_amplifier(score: f64, confidence: f64, impact_multiplier: f64) -> f64 {
    let strength = non_negative(score.abs()).min(1.0)
        * non_negative(confidence).min(1.0)
        * non_negative(impact_multiplier);
    if strength.is_finite() {
        1.0 + strength
    } else {
        1.0
    }
}

/// Step decay by article age relative to `as_of`.
///
/// Missing, unrepresentable and future timestamps all get full weight.
#[must_use]
pub fn time_factor(
    decay: &TimeDecay,
    published_at: Result<DateTime<Utc>, TimestampError>,
    as_of: DateTime<Utc>,
) -> f64 {
    let published_at = match published_at {
        Ok(at) => at,
        Err(e) => {
            tracing::debug!(reason = %e, "no usable timestamp, using full time weight");
            return 1.0;
        }
    };

    let age = as_of.signed_duration_since(published_at);
    let days = age.num_days();
    if days > 7 {
        decay.over_week
    } else if days > 3 {
        decay.over_three_days
    } else if days > 1 {
        decay.over_day
    } else if age.num_hours() > 6 {
        decay.over_six_hours
    } else {
        1.0
    }
}

/// Summed per-class entity weights, capped.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn entity_impact(weights: &EntityWeights, entities: &EntitySet) -> f64 {
    let score = weights.competitor * entities.competitors.len() as f64
        + weights.supplier * entities.suppliers.len() as f64
        + weights.raw_material * entities.raw_materials.len() as f64
        + weights.keyword * entities.keywords.len() as f64;
    score.min(weights.cap)
}

#[must_use]
pub fn impact_level(tiers: &TierThresholds, impact_score: f64) -> ImpactLevel {
    if impact_score >= tiers.critical {
        ImpactLevel::Critical
    } else if impact_score >= tiers.high {
        ImpactLevel::High
    } else if impact_score >= tiers.medium {
        ImpactLevel::Medium
    } else if impact_score >= tiers.low {
        ImpactLevel::Low
    } else {
        ImpactLevel::Minimal
    }
}

/// Direction from sentiment, magnitude from impact scaled by beta.
#[must_use]
pub fn predict_price_movement(
    model: &PriceModel,
    sentiment_score: f64,
    impact_score: f64,
    beta: f64,
) -> PricePrediction {
    let impact_score = non_negative(impact_score).min(100.0);
    let base = impact_score * model.percent_per_point;

    let (direction, movement) = if sentiment_score > model.strong_threshold {
        (Direction::StrongUp, base * model.strong_multiplier)
    } else if sentiment_score > model.mild_threshold {
        (Direction::Up, base)
    } else if sentiment_score < -model.strong_threshold {
        (Direction::StrongDown, base * model.strong_multiplier)
    } else if sentiment_score < -model.mild_threshold {
        (Direction::Down, base)
    } else {
        (Direction::Neutral, base * model.neutral_multiplier)
    };

    let percentage = (movement * non_negative(beta)).min(model.max_percent);
    let confidence = (impact_score / 100.0)
        .min(model.max_confidence)
        .clamp(0.0, 1.0);

    PricePrediction {
        direction,
        percentage,
        confidence,
    }
}

#[cfg(test)]
#[path = "factors_test.rs"]
mod tests;
