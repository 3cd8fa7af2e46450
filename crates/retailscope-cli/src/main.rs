mod normalize;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "retailscope")]
#[command(about = "Normalize scraped lingerie listings and report on a focus brand")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Normalize a raw scraped table and write the enriched CSV
    Normalize {
        /// Raw listings CSV (defaults to RETAILSCOPE_INPUT_PATH)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Destination CSV (defaults to RETAILSCOPE_OUTPUT_PATH)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print a market and focus-brand report for a listings table
    Report {
        /// Listings CSV, raw or already normalized (defaults to RETAILSCOPE_INPUT_PATH)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Brand to report on (defaults to RETAILSCOPE_FOCUS_BRAND)
        #[arg(long)]
        brand: Option<String>,

        /// Brand to compare against (defaults to the largest other brand)
        #[arg(long)]
        competitor: Option<String>,

        /// Number of brands in the market-share table (defaults to RETAILSCOPE_REPORT_TOP_N)
        #[arg(long)]
        top: Option<usize>,

        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = retailscope_core::load_app_config_from_env()?;

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, "configuration loaded");

    match cli.command {
        Some(Commands::Normalize { input, output }) => {
            let input = input.unwrap_or_else(|| config.input_path.clone());
            let output = output.unwrap_or_else(|| config.output_path.clone());
            normalize::run_normalize(&input, &output)?;
        }
        Some(Commands::Report {
            input,
            brand,
            competitor,
            top,
            format,
        }) => {
            let args = report::ReportArgs {
                input: input.unwrap_or_else(|| config.input_path.clone()),
                brand: brand.unwrap_or_else(|| config.focus_brand.clone()),
                competitor,
                top_n: top.unwrap_or(config.report_top_n),
                severe_discount_pct: config.severe_discount_pct,
                format,
            };
            report::run_report(&args)?;
        }
        None => println!(
            "retailscope: run `retailscope normalize` or `retailscope report` (see --help)"
        ),
    }

    Ok(())
}
