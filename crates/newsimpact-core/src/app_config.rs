use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Which set of calibration constants the impact calculator uses.
///
/// `Standard` is the four-factor model; `Extended` adds liquidity, sector and
/// entity terms with wider clamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CalibrationProfile {
    #[default]
    Standard,
    Extended,
}

impl std::fmt::Display for CalibrationProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalibrationProfile::Standard => write!(f, "standard"),
            CalibrationProfile::Extended => write!(f, "extended"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Optional YAML overlay for the built-in stock table.
    pub stocks_path: Option<PathBuf>,
    pub calibration: CalibrationProfile,
    /// Fractional drop (e.g. `0.02` for 2%) that raises a price alert.
    pub price_drop_threshold: f64,
    /// Upper bound on articles scored per symbol in one batch.
    pub max_articles_per_symbol: usize,
}
