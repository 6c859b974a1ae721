//! Database migration runner for Fintrack.
//!
//! Reads the connection string from `DATABASE_URL` (or `-u`), not from the
//! application config.
//!
//! Usage:
//!   migrator up      - Create the transactions schema
//!   migrator down    - Drop it again
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop everything and re-run migrations

use fintrack_db::migration::Migrator;
use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // run_cli installs its own tracing subscriber
    cli::run_cli(Migrator).await;
}
