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

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Raw scraped listings, as exported by the scraper.
    pub input_path: PathBuf,
    /// Destination of the enriched table written by `normalize`.
    pub output_path: PathBuf,
    /// Brand the report is centred on; always included in market-share output.
    pub focus_brand: String,
    pub report_top_n: usize,
    /// Listings discounted by more than this percentage count as severe.
    pub severe_discount_pct: f64,
}
