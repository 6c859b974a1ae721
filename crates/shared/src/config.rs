//! Application configuration management.
//!
//! Sources are layered: `config/default`, then `config/{RUN_MODE}`, then
//! `FINTRACK__*` environment variables (`__` separates nested keys, e.g.
//! `FINTRACK__DATABASE__URL`).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Database configuration.
    pub database: DatabaseConfig,
    /// Static spend limits. Empty means budgets are disabled.
    #[serde(default)]
    pub budgets: BudgetConfig,
}

/// Database configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL.
    pub url: String,
    /// Maximum number of connections in the pool.
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Minimum number of connections in the pool.
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

/// Budget limits, read once at startup and never mutated.
///
/// Limits are lists rather than maps so that reports keep the configured order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetConfig {
    /// Currency the limits are expressed in.
    #[serde(default)]
    pub currency: Currency,
    /// Per-category spend limits.
    #[serde(default)]
    pub categories: Vec<BudgetLimit>,
    /// Per-account spend limits.
    #[serde(default)]
    pub accounts: Vec<BudgetLimit>,
}

/// A single named spend limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetLimit {
    /// Category or account name, matched exactly.
    pub name: String,
    /// Maximum spend for the period.
    pub limit: Decimal,
}

impl BudgetLimit {
    /// Creates a new limit.
    #[must_use]
    pub fn new(name: impl Into<String>, limit: Decimal) -> Self {
        Self {
            name: name.into(),
            limit,
        }
    }
}

impl BudgetConfig {
    /// Returns true if at least one category or account limit is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.categories.is_empty() || !self.accounts.is_empty()
    }

    /// Names of all configured category limits.
    #[must_use]
    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|l| l.name.clone()).collect()
    }

    /// Names of all configured account limits.
    #[must_use]
    pub fn account_names(&self) -> Vec<String> {
        self.accounts.iter().map(|l| l.name.clone()).collect()
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("FINTRACK").separator("__"))
            .build()?;

        config.try_deserialize()
    }

    /// Parses configuration from a TOML document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is invalid or misses required keys.
    pub fn from_toml(document: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }
}
