//! Fintrack command-line entry point.
//!
//! Usage:
//!   fintrack summary [--start-date D] [--end-date D] [--account A] [--category C]
//!   fintrack budgets [--account A] [--as-of D]
//!   fintrack add --date D --account A --category C --amount N --type income|expense
//!   fintrack list [filters]

mod cli;
mod commands;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fintrack_core::budget::BudgetService;
use fintrack_db::{TransactionRepository, connect};
use fintrack_shared::{AppConfig, AppError};

use crate::cli::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays valid JSON
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fintrack=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load().map_err(|e| AppError::Configuration(e.to_string()))?;
    BudgetService::validate_config(&config.budgets).map_err(AppError::from)?;
    info!(
        currency = %config.budgets.currency,
        categories = config.budgets.categories.len(),
        accounts = config.budgets.accounts.len(),
        "Budget limits loaded"
    );

    let db = connect(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Connected to database");

    let repo = TransactionRepository::new(db);
    let output = commands::execute(cli.command, &config.budgets, &repo).await?;
    println!("{output}");

    Ok(())
}
