//! P&L Insights Binary
//!
//! Loads a daily Put/Call P&L history, runs the analytics pipeline and
//! prints the insights panel.
//!
//! # Usage
//!
//! ```bash
//! cargo run -p pnl-insights -- --config config.yaml
//! cargo run -p pnl-insights -- --input data/sample_pnl.yaml --capital 1300000 --json
//! ```
//!
//! # Environment Variables
//!
//! - `PNL_INSIGHTS_CONFIG`: Config file path (default: config.yaml when present)
//! - `RUST_LOG`: Log level (overrides `observability.logging.level`)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use rust_decimal::Decimal;

use pnl_insights::analytics::{MetricsCalculator, analyze_with};
use pnl_insights::config::{Config, DEFAULT_CONFIG_PATH, load_config, validate_config};
use pnl_insights::ingest::load_records;
use pnl_insights::report::{ChartSet, InsightsPanel, to_csv, to_json};
use pnl_insights::telemetry::init_telemetry;

#[derive(Debug, Parser)]
#[command(name = "pnl-insights")]
#[command(about = "Performance analytics for daily Put/Call strategy P&L", long_about = None)]
#[command(version)]
struct Cli {
    /// Config file (YAML)
    #[arg(short, long, env = "PNL_INSIGHTS_CONFIG")]
    config: Option<PathBuf>,

    /// Records file, overrides input.path
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Initial capital, overrides analysis.initial_capital
    #[arg(long)]
    capital: Option<Decimal>,

    /// Print the full analysis as JSON instead of the insights panel
    #[arg(long, default_value = "false")]
    json: bool,
}

fn main() -> Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = resolve_config(&cli)?;

    init_telemetry(&config.observability.logging).context("failed to initialize logging")?;

    tracing::info!(
        input = %config.input.path,
        initial_capital = %config.analysis.initial_capital,
        "Starting P&L analysis"
    );

    let records = load_records(&config.input.path)
        .with_context(|| format!("failed to load records from '{}'", config.input.path))?;

    let calculator = MetricsCalculator::new(config.analysis.trading_days_per_year);
    let analysis = analyze_with(&calculator, &records, config.analysis.initial_capital)
        .context("analysis failed")?;

    tracing::info!(
        observations = analysis.metrics.observations,
        total_profit_loss = %analysis.metrics.total_profit_loss,
        max_drawdown = %analysis.metrics.max_drawdown,
        "Analysis complete"
    );

    if cli.json {
        println!("{}", to_json(&analysis).context("failed to serialize analysis")?);
    } else {
        print!(
            "{}",
            InsightsPanel::from_metrics(&analysis.metrics, &config.output.currency_symbol)
        );
    }

    if let Some(path) = &config.output.charts_path {
        let charts = ChartSet::from_analysis(&analysis, &config.output.currency_symbol);
        let json = charts.to_json().context("failed to serialize charts")?;
        write_output(Path::new(path), &json)?;
        tracing::info!(path = %path, charts = charts.charts.len(), "Charts written");
    }

    if let Some(path) = &config.output.csv_path {
        let csv = to_csv(&analysis).context("failed to write series CSV")?;
        write_output(Path::new(path), &csv)?;
        tracing::info!(path = %path, "Series CSV written");
    }

    Ok(())
}

/// Load the config file (explicit, or `config.yaml` when present) and apply CLI overrides.
fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => load_config(path.to_str())
            .with_context(|| format!("failed to load config '{}'", path.display()))?,
        None if Path::new(DEFAULT_CONFIG_PATH).exists() => {
            load_config(None).context("failed to load config.yaml")?
        }
        None => Config::default(),
    };

    if let Some(input) = &cli.input {
        config.input.path = input.display().to_string();
    }
    if let Some(capital) = cli.capital {
        config.analysis.initial_capital = capital;
    }

    validate_config(&config).context("invalid configuration")?;
    Ok(config)
}

fn write_output(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create '{}'", parent.display()))?;
    }
    std::fs::write(path, contents).with_context(|| format!("failed to write '{}'", path.display()))
}
