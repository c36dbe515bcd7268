//! Stock metadata records and the YAML stock table loader.
//!
//! A [`StockRecord`] is whatever a metadata source managed to supply, every
//! field optional. [`StockMetadata`] is the complete record the engine works
//! with; all default substitution happens in [`StockMetadata::from_record`].

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

pub const DEFAULT_MARKET_CAP: f64 = 1_000_000_000_000.0;
pub const DEFAULT_BETA: f64 = 1.0;
pub const DEFAULT_PE_RATIO: f64 = 20.0;
pub const DEFAULT_REVENUE: f64 = 50_000_000_000.0;
pub const DEFAULT_SECTOR: &str = "Technology";
pub const DEFAULT_INDUSTRY: &str = "General";

/// Partial metadata for one symbol as supplied by a source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockRecord {
    pub symbol: String,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub beta: Option<f64>,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub revenue: Option<f64>,
    #[serde(default)]
    pub competitors: Vec<String>,
    #[serde(default)]
    pub suppliers: Vec<String>,
    #[serde(default)]
    pub raw_materials: Vec<String>,
}

/// Complete metadata for one symbol, with every field populated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMetadata {
    pub symbol: String,
    pub market_cap: f64,
    pub beta: f64,
    pub pe_ratio: f64,
    pub sector: String,
    pub industry: String,
    pub revenue: f64,
    pub competitors: Vec<String>,
    pub suppliers: Vec<String>,
    pub raw_materials: Vec<String>,
}

impl StockMetadata {
    /// Metadata for a symbol no source knows anything about.
    #[must_use]
    pub fn defaults(symbol: &str) -> Self {
        Self::from_record(&StockRecord {
            symbol: symbol.to_string(),
            ..StockRecord::default()
        })
    }

    /// Fill every missing or non-finite field of `record` with its default.
    #[must_use]
    pub fn from_record(record: &StockRecord) -> Self {
        let text_or = |value: &Option<String>, default: &str| {
            value
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .unwrap_or(default)
                .to_string()
        };

        Self {
            symbol: normalize_symbol(&record.symbol),
            market_cap: finite_or(record.market_cap, DEFAULT_MARKET_CAP),
            beta: finite_or(record.beta, DEFAULT_BETA),
            pe_ratio: finite_or(record.pe_ratio, DEFAULT_PE_RATIO),
            sector: text_or(&record.sector, DEFAULT_SECTOR),
            industry: text_or(&record.industry, DEFAULT_INDUSTRY),
            revenue: finite_or(record.revenue, DEFAULT_REVENUE),
            competitors: record.competitors.clone(),
            suppliers: record.suppliers.clone(),
            raw_materials: record.raw_materials.clone(),
        }
    }
}

fn finite_or(value: Option<f64>, default: f64) -> f64 {
    value.filter(|v| v.is_finite()).unwrap_or(default)
}

/// Canonical symbol form: trimmed and upper-cased.
#[must_use]
pub fn normalize_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

#[derive(Debug, Deserialize)]
pub struct StocksFile {
    pub stocks: Vec<StockRecord>,
}

/// Load and validate a stock table from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_stocks(path: &Path) -> Result<StocksFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::StocksFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let stocks_file: StocksFile =
        serde_yaml::from_str(&content).map_err(ConfigError::StocksFileParse)?;

    validate_stocks(&stocks_file)?;

    Ok(stocks_file)
}

fn validate_stocks(stocks_file: &StocksFile) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();

    for stock in &stocks_file.stocks {
        let symbol = normalize_symbol(&stock.symbol);
        if symbol.is_empty() {
            return Err(ConfigError::Validation(
                "stock symbol must be non-empty".to_string(),
            ));
        }

        if let Some(cap) = stock.market_cap {
            if !(cap.is_finite() && cap > 0.0) {
                return Err(ConfigError::Validation(format!(
                    "stock '{symbol}' has invalid market_cap {cap}; must be positive"
                )));
            }
        }

        if !seen.insert(symbol.clone()) {
            return Err(ConfigError::Validation(format!(
                "duplicate stock symbol: '{symbol}'"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "stocks_test.rs"]
mod tests;
