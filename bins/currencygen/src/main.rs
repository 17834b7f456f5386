//! Currency table generator.
//!
//! Regenerates `crates/currency/src/table.rs` from the JSON currency dataset,
//! so new currencies are added by changing data rather than code.
//!
//! Usage: cargo run --bin currencygen

mod config;
mod render;

use anyhow::{Context, ensure};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use moneta_currency::parse_dataset;

use crate::config::GeneratorConfig;
use crate::render::render_table;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "currencygen=debug,moneta_currency=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = GeneratorConfig::load().context("Failed to load configuration")?;

    info!(path = %config.dataset_path.display(), "Reading currency dataset");
    let json = std::fs::read_to_string(&config.dataset_path)
        .with_context(|| format!("Failed to read {}", config.dataset_path.display()))?;

    let records = parse_dataset(&json).context("Failed to parse currency dataset")?;
    ensure!(
        !records.is_empty(),
        "Expected at least one currency in {}",
        config.dataset_path.display()
    );

    let table = render_table(&records).context("Invalid currency record")?;
    std::fs::write(&config.output_path, table)
        .with_context(|| format!("Failed to write {}", config.output_path.display()))?;

    info!(
        currencies = records.len(),
        path = %config.output_path.display(),
        "Currency table written"
    );

    Ok(())
}
