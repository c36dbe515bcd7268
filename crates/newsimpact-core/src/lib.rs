//! Shared records and configuration for the news impact workspace.
//!
//! Holds the plain data handed to the scoring engine by its collaborators
//! (news items, price quotes, stock metadata) plus environment-driven
//! application configuration and the YAML stock table loader.

pub mod app_config;
pub mod config;
pub mod news;
pub mod stocks;

use thiserror::Error;

pub use app_config::{AppConfig, CalibrationProfile, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use news::{NewsItem, PriceQuote, TimestampError};
pub use stocks::{
    load_stocks, normalize_symbol, StockMetadata, StockRecord, StocksFile, DEFAULT_BETA,
    DEFAULT_INDUSTRY, DEFAULT_MARKET_CAP, DEFAULT_PE_RATIO, DEFAULT_REVENUE, DEFAULT_SECTOR,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },

    #[error("failed to read stocks file {path}: {source}")]
    StocksFileIo {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse stocks file: {0}")]
    StocksFileParse(serde_yaml::Error),

    #[error("stocks file validation failed: {0}")]
    Validation(String),
}
