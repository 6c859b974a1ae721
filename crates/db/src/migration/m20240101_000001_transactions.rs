//! Transactions migration.
//!
//! Creates the `transaction_type` enum and the `transactions` table with the
//! indexes the grouped summary queries filter on.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(TRANSACTIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            "DROP TABLE IF EXISTS transactions CASCADE; DROP TYPE IF EXISTS transaction_type;",
        )
        .await?;
        Ok(())
    }
}

const TRANSACTIONS_SQL: &str = r"
CREATE TYPE transaction_type AS ENUM ('income', 'expense');

CREATE TABLE transactions (
    id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
    date DATE NOT NULL,
    account TEXT NOT NULL,
    category TEXT NOT NULL,
    subcategory TEXT,
    note TEXT,
    amount NUMERIC(14, 2) NOT NULL,
    type transaction_type NOT NULL,
    created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
    CONSTRAINT chk_amount_non_negative CHECK (amount >= 0)
);

-- Date range filters and the list ordering
CREATE INDEX idx_transactions_date ON transactions(date DESC, created_at DESC);

-- Account filter and per-account budget totals
CREATE INDEX idx_transactions_account ON transactions(account, date);

-- Category filter and per-category budget totals
CREATE INDEX idx_transactions_category ON transactions(category, date);
";
