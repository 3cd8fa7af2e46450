use crate::app_config::{AppConfig, Environment};
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but cannot be parsed.
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
/// Returns `ConfigError` if a value is present but cannot be parsed.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Decoupled from the process environment so tests can drive it with a
/// plain `HashMap`.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    use std::path::PathBuf;

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let parse_pct = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .parse::<f64>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })?;
        if !(0.0..=100.0).contains(&value) {
            return Err(ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: format!("{value} is outside 0..=100"),
            });
        }
        Ok(value)
    };

    let env = parse_environment(&or_default("RETAILSCOPE_ENV", "development"));
    let log_level = or_default("RETAILSCOPE_LOG_LEVEL", "info");
    let input_path = PathBuf::from(or_default(
        "RETAILSCOPE_INPUT_PATH",
        "./data/raw_products.csv",
    ));
    let output_path = PathBuf::from(or_default(
        "RETAILSCOPE_OUTPUT_PATH",
        "./data/cleaned_products.csv",
    ));
    let focus_brand = or_default("RETAILSCOPE_FOCUS_BRAND", "Dorina");
    let report_top_n = parse_usize("RETAILSCOPE_REPORT_TOP_N", "15")?;
    let severe_discount_pct = parse_pct("RETAILSCOPE_SEVERE_DISCOUNT_PCT", "50")?;

    Ok(AppConfig {
        env,
        log_level,
        input_path,
        output_path,
        focus_brand,
        report_top_n,
        severe_discount_pct,
    })
}

/// Parse a string into an `Environment` variant.
///
/// Unrecognized values default to `Environment::Development`.
fn parse_environment(s: &str) -> Environment {
    match s {
        "production" => Environment::Production,
        "test" => Environment::Test,
        _ => Environment::Development,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
