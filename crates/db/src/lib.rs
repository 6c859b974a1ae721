//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - The `transactions` entity definition
//! - [`TransactionRepository`], the Postgres implementation of the core's
//!   `AggregateSource`
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{RepositoryError, TransactionQuery, TransactionRepository};

use fintrack_shared::DatabaseConfig;
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Establishes a connection pool sized from `config`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    Database::connect(options).await
}
