//! Calibration constants for the impact model.
//!
//! These are hand-tuned values, not fitted parameters. [`Calibration::STANDARD`]
//! is the four-factor model used by default; [`Calibration::EXTENDED`] widens
//! the clamps and folds in liquidity, sector and entity terms.

use newsimpact_core::CalibrationProfile;

/// Age steps for the time-decay factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeDecay {
    /// Weight once more than 7 whole days have elapsed.
    pub over_week: f64,
    /// More than 3 whole days.
    pub over_three_days: f64,
    /// More than 1 whole day.
    pub over_day: f64,
    /// More than 6 whole hours.
    pub over_six_hours: f64,
}

/// Lower bounds of each impact tier; anything below `low` is minimal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub critical: f64,
    pub high: f64,
    pub medium: f64,
    pub low: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceModel {
    /// Percent of price movement per impact point.
    pub percent_per_point: f64,
    /// Sentiment beyond ±this is a strong move.
    pub strong_threshold: f64,
    /// Sentiment beyond ±this (and within strong) is a plain move.
    pub mild_threshold: f64,
    pub strong_multiplier: f64,
    pub neutral_multiplier: f64,
    pub max_percent: f64,
    pub max_confidence: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiquidityModel {
    pub size_scale: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectorModel {
    /// Lower-case sector name to multiplier. Unknown sectors get `1.0`.
    pub multipliers: &'static [(&'static str, f64)],
    /// Applied on top when any topic keyword was found.
    pub keyword_boost: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EntityWeights {
    pub competitor: f64,
    pub supplier: f64,
    pub raw_material: f64,
    pub keyword: f64,
    pub cap: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Calibration {
    pub name: &'static str,
    pub beta_scale: f64,
    pub beta_cap: f64,
    pub market_cap_cap: f64,
    pub pe_divisor: f64,
    pub pe_cap: f64,
    pub volatility_cap: f64,
    pub time_decay: TimeDecay,
    pub tiers: TierThresholds,
    pub price: PriceModel,
    pub liquidity: Option<LiquidityModel>,
    pub sector: Option<SectorModel>,
    pub entity: Option<EntityWeights>,
}

const SECTOR_MULTIPLIERS: &[(&str, f64)] = &[
    ("technology", 1.2),
    ("healthcare", 1.3),
    ("finance", 1.1),
    ("energy", 1.0),
    ("consumer discretionary", 0.9),
    ("utilities", 0.8),
];

impl Calibration {
    pub const STANDARD: Calibration = Calibration {
        name: "standard",
        beta_scale: 1.2,
        beta_cap: 2.5,
        market_cap_cap: 1.8,
        pe_divisor: 20.0,
        pe_cap: 1.5,
        volatility_cap: 2.0,
        time_decay: TimeDecay {
            over_week: 0.4,
            over_three_days: 0.6,
            over_day: 0.8,
            over_six_hours: 0.9,
        },
        tiers: TierThresholds {
            critical: 80.0,
            high: 60.0,
            medium: 40.0,
            low: 20.0,
        },
        price: PriceModel {
            percent_per_point: 0.12,
            strong_threshold: 0.3,
            mild_threshold: 0.1,
            strong_multiplier: 1.4,
            neutral_multiplier: 0.4,
            max_percent: 12.0,
            max_confidence: 0.85,
        },
        liquidity: None,
        sector: None,
        entity: None,
    };

    pub const EXTENDED: Calibration = Calibration {
        name: "extended",
        beta_scale: 1.5,
        beta_cap: 3.0,
        market_cap_cap: 2.0,
        pe_divisor: 20.0,
        pe_cap: 2.0,
        volatility_cap: 2.5,
        time_decay: TimeDecay {
            over_week: 0.3,
            over_three_days: 0.5,
            over_day: 0.7,
            over_six_hours: 0.9,
        },
        tiers: TierThresholds {
            critical: 85.0,
            high: 70.0,
            medium: 50.0,
            low: 30.0,
        },
        price: PriceModel {
            percent_per_point: 0.15,
            strong_threshold: 0.3,
            mild_threshold: 0.1,
            strong_multiplier: 1.5,
            neutral_multiplier: 0.3,
            max_percent: 15.0,
            max_confidence: 0.9,
        },
        liquidity: Some(LiquidityModel {
            size_scale: 0.1,
            cap: 1.5,
        }),
        sector: Some(SectorModel {
            multipliers: SECTOR_MULTIPLIERS,
            keyword_boost: 1.1,
        }),
        entity: Some(EntityWeights {
            competitor: 0.3,
            supplier: 0.4,
            raw_material: 0.5,
            keyword: 0.1,
            cap: 2.0,
        }),
    };

    #[must_use]
    pub const fn for_profile(profile: CalibrationProfile) -> &'static Calibration {
        match profile {
            CalibrationProfile::Standard => &Self::STANDARD,
            CalibrationProfile::Extended => &Self::EXTENDED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_tiers_descending(t: &TierThresholds) {
        assert!(t.critical > t.high && t.high > t.medium && t.medium > t.low && t.low > 0.0);
        assert!(t.critical <= 100.0);
    }

    fn assert_decay_descending(d: &TimeDecay) {
        assert!(d.over_six_hours <= 1.0);
        assert!(d.over_day <= d.over_six_hours);
        assert!(d.over_three_days <= d.over_day);
        assert!(d.over_week <= d.over_three_days);
        assert!(d.over_week > 0.0);
    }

    #[test]
    fn standard_is_well_formed() {
        let c = Calibration::STANDARD;
        assert_tiers_descending(&c.tiers);
        assert_decay_descending(&c.time_decay);
        assert!(c.liquidity.is_none() && c.sector.is_none() && c.entity.is_none());
    }

    #[test]
    fn extended_is_well_formed() {
        let c = Calibration::EXTENDED;
        assert_tiers_descending(&c.tiers);
        assert_decay_descending(&c.time_decay);
        assert!(c.liquidity.is_some() && c.sector.is_some() && c.entity.is_some());
    }

    #[test]
    fn profile_lookup() {
        assert_eq!(
            Calibration::for_profile(CalibrationProfile::Standard).name,
            "standard"
        );
        assert_eq!(
            Calibration::for_profile(CalibrationProfile::Extended).name,
            "extended"
        );
    }
}
