use std::collections::HashMap;
use std::env::VarError;

use super::*;

fn lookup_from_map<'a>(
    map: &'a HashMap<&'a str, &'a str>,
) -> impl Fn(&str) -> Result<String, VarError> + 'a {
    move |key| {
        map.get(key)
            .map(|v| (*v).to_string())
            .ok_or(VarError::NotPresent)
    }
}

#[test]
fn parse_environment_development() {
    assert_eq!(parse_environment("development"), Environment::Development);
}

#[test]
fn parse_environment_test() {
    assert_eq!(parse_environment("test"), Environment::Test);
}

#[test]
fn parse_environment_production() {
    assert_eq!(parse_environment("production"), Environment::Production);
}

#[test]
fn parse_environment_unknown_defaults_to_development() {
    assert_eq!(parse_environment("staging"), Environment::Development);
}

#[test]
fn build_app_config_uses_defaults_when_env_is_empty() {
    let map: HashMap<&str, &str> = HashMap::new();
    let cfg = build_app_config(lookup_from_map(&map)).expect("defaults should parse");
    assert_eq!(cfg.env, Environment::Development);
    assert_eq!(cfg.log_level, "info");
    assert_eq!(cfg.input_path.to_str(), Some("./data/raw_products.csv"));
    assert_eq!(cfg.output_path.to_str(), Some("./data/cleaned_products.csv"));
    assert_eq!(cfg.focus_brand, "Dorina");
    assert_eq!(cfg.report_top_n, 15);
    assert!((cfg.severe_discount_pct - 50.0).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_reads_overrides() {
    let mut map = HashMap::new();
    map.insert("RETAILSCOPE_ENV", "production");
    map.insert("RETAILSCOPE_LOG_LEVEL", "debug");
    map.insert("RETAILSCOPE_INPUT_PATH", "/tmp/in.csv");
    map.insert("RETAILSCOPE_OUTPUT_PATH", "/tmp/out.csv");
    map.insert("RETAILSCOPE_FOCUS_BRAND", "Triumph");
    map.insert("RETAILSCOPE_REPORT_TOP_N", "5");
    map.insert("RETAILSCOPE_SEVERE_DISCOUNT_PCT", "40");
    let cfg = build_app_config(lookup_from_map(&map)).unwrap();
    assert_eq!(cfg.env, Environment::Production);
    assert_eq!(cfg.log_level, "debug");
    assert_eq!(cfg.input_path.to_str(), Some("/tmp/in.csv"));
    assert_eq!(cfg.output_path.to_str(), Some("/tmp/out.csv"));
    assert_eq!(cfg.focus_brand, "Triumph");
    assert_eq!(cfg.report_top_n, 5);
    assert!((cfg.severe_discount_pct - 40.0).abs() < f64::EPSILON);
}

#[test]
fn build_app_config_rejects_invalid_top_n() {
    let mut map = HashMap::new();
    map.insert("RETAILSCOPE_REPORT_TOP_N", "fifteen");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RETAILSCOPE_REPORT_TOP_N"),
        "expected InvalidEnvVar(RETAILSCOPE_REPORT_TOP_N), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_non_numeric_discount_threshold() {
    let mut map = HashMap::new();
    map.insert("RETAILSCOPE_SEVERE_DISCOUNT_PCT", "half");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "RETAILSCOPE_SEVERE_DISCOUNT_PCT"),
        "expected InvalidEnvVar(RETAILSCOPE_SEVERE_DISCOUNT_PCT), got: {result:?}"
    );
}

#[test]
fn build_app_config_rejects_out_of_range_discount_threshold() {
    let mut map = HashMap::new();
    map.insert("RETAILSCOPE_SEVERE_DISCOUNT_PCT", "120");
    let result = build_app_config(lookup_from_map(&map));
    assert!(
        matches!(result, Err(ConfigError::InvalidEnvVar { ref reason, .. }) if reason.contains("outside")),
        "expected out-of-range error, got: {result:?}"
    );
}
