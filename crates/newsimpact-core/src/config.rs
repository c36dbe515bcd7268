use crate::app_config::{AppConfig, CalibrationProfile, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if any value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so it can be tested with a plain
/// `HashMap` lookup.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let env = parse_environment(&or_default("NEWSIMPACT_ENV", "development"))?;
    let log_level = or_default("NEWSIMPACT_LOG_LEVEL", "info");
    let stocks_path = lookup("NEWSIMPACT_STOCKS_PATH")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map(PathBuf::from);
    let calibration = parse_calibration(&or_default("NEWSIMPACT_CALIBRATION", "standard"))?;

    let var = "NEWSIMPACT_PRICE_DROP_THRESHOLD";
    let price_drop_threshold = or_default(var, "0.02")
        .parse::<f64>()
        .map_err(|e| invalid(var, e.to_string()))?;
    if !(price_drop_threshold > 0.0 && price_drop_threshold < 1.0) {
        return Err(invalid(
            var,
            format!("{price_drop_threshold} is outside (0, 1)"),
        ));
    }

    let var = "NEWSIMPACT_MAX_ARTICLES";
    let max_articles_per_symbol = or_default(var, "10")
        .parse::<usize>()
        .map_err(|e| invalid(var, e.to_string()))?;
    if max_articles_per_symbol == 0 {
        return Err(invalid(var, "must be at least 1".to_string()));
    }

    Ok(AppConfig {
        env,
        log_level,
        stocks_path,
        calibration,
        price_drop_threshold,
        max_articles_per_symbol,
    })
}

fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSIMPACT_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

fn parse_calibration(s: &str) -> Result<CalibrationProfile, ConfigError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "standard" => Ok(CalibrationProfile::Standard),
        "extended" => Ok(CalibrationProfile::Extended),
        other => Err(ConfigError::InvalidEnvVar {
            var: "NEWSIMPACT_CALIBRATION".to_string(),
            reason: format!("unknown calibration '{other}'; expected standard or extended"),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
