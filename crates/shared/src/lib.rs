//! Shared types, errors, and configuration for Fintrack.
//!
//! This crate provides common types used across all other crates:
//! - Currency codes for budget reporting
//! - Application-wide error types
//! - Configuration management, including the static budget limits

pub mod config;
pub mod error;
pub mod types;

pub use config::{AppConfig, BudgetConfig, BudgetLimit, DatabaseConfig};
pub use error::{AppError, AppResult};
pub use types::Currency;
