//! Transaction repository.
//!
//! Stores transactions and answers the grouped-total queries the summary and budget
//! logic needs. Postgres does the filtering, grouping and summing; rows come back one
//! per group key.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use fintrack_core::filter::{Constraint, FilterableQuery, SummaryFilter};
use fintrack_core::source::{AggregateSource, GroupedTotal};
use fintrack_core::summary::AggregateRow;
use fintrack_core::transaction::{NewTransaction, Transaction};
use fintrack_shared::AppError;
use rust_decimal::Decimal;
use sea_orm::sea_query::{Alias, Expr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select, Set,
};
use tracing::{debug, info};
use uuid::Uuid;

use crate::entities::{sea_orm_active_enums::TransactionKind, transactions};

/// Error types for transaction repository operations.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RepositoryError> for AppError {
    fn from(err: RepositoryError) -> Self {
        Self::Database(err.to_string())
    }
}

/// A `transactions` select that summary filters can be folded onto.
#[derive(Debug, Clone)]
pub struct TransactionQuery(Select<transactions::Entity>);

impl TransactionQuery {
    /// Selects every transaction.
    #[must_use]
    pub fn all() -> Self {
        Self(transactions::Entity::find())
    }

    /// Selects the transactions matching `filter`.
    #[must_use]
    pub fn filtered(filter: &SummaryFilter) -> Self {
        filter.apply(Self::all())
    }

    /// Unwraps the underlying select.
    #[must_use]
    pub fn into_select(self) -> Select<transactions::Entity> {
        self.0
    }

    /// Postgres SQL for this query, for logging and tests.
    #[must_use]
    pub fn to_sql(&self) -> String {
        self.0.clone().build(sea_orm::DbBackend::Postgres).to_string()
    }
}

impl FilterableQuery for TransactionQuery {
    fn constrain(self, constraint: &Constraint) -> Self {
        let condition = match constraint {
            Constraint::DateFrom(start) => transactions::Column::Date.gte(*start),
            Constraint::DateTo(end) => transactions::Column::Date.lte(*end),
            Constraint::Account(account) => transactions::Column::Account.eq(account.clone()),
            Constraint::Category(category) => transactions::Column::Category.eq(category.clone()),
        };
        Self(self.0.filter(condition))
    }
}

#[derive(Debug, FromQueryResult)]
struct TypeTotalRow {
    kind: TransactionKind,
    total: Option<Decimal>,
}

#[derive(Debug, FromQueryResult)]
struct DateTotalRow {
    date: NaiveDate,
    kind: TransactionKind,
    total: Option<Decimal>,
}

#[derive(Debug, FromQueryResult)]
struct CategoryTotalRow {
    category: String,
    kind: TransactionKind,
    total: Option<Decimal>,
}

#[derive(Debug, FromQueryResult)]
struct KeyTotalRow {
    key: Option<String>,
    total: Option<Decimal>,
}

/// The `type` column read back as text so it decodes into [`TransactionKind`].
fn kind_as_text() -> sea_orm::sea_query::SimpleExpr {
    Expr::col((transactions::Entity, transactions::Column::Kind)).cast_as(Alias::new("text"))
}

/// Transaction repository backed by Postgres.
#[derive(Debug)]
pub struct TransactionRepository {
    db: DatabaseConnection,
}

impl TransactionRepository {
    /// Creates a new transaction repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a validated transaction and returns the stored row.
    ///
    /// # Errors
    ///
    /// Returns an error if the database insert fails.
    pub async fn insert(&self, input: NewTransaction) -> Result<Transaction, RepositoryError> {
        let model = transactions::ActiveModel {
            id: Set(Uuid::new_v4()),
            date: Set(input.date),
            account: Set(input.account),
            category: Set(input.category),
            subcategory: Set(input.subcategory),
            note: Set(input.note),
            amount: Set(input.amount),
            kind: Set(input.kind.into()),
            created_at: Set(Utc::now().into()),
        };

        let saved = model.insert(&self.db).await?;
        info!(id = %saved.id, date = %saved.date, amount = %saved.amount, "transaction inserted");

        Ok(saved.into())
    }

    /// Lists transactions matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self, filter: &SummaryFilter) -> Result<Vec<Transaction>, RepositoryError> {
        let models = TransactionQuery::filtered(filter)
            .into_select()
            .order_by_desc(transactions::Column::Date)
            .order_by_desc(transactions::Column::CreatedAt)
            .all(&self.db)
            .await?;

        debug!(count = models.len(), "listed transactions");
        Ok(models.into_iter().map(Transaction::from).collect())
    }

    async fn expense_totals_by(
        &self,
        filter: &SummaryFilter,
        column: transactions::Column,
        names: &[String],
    ) -> Result<Vec<GroupedTotal>, RepositoryError> {
        let rows = TransactionQuery::filtered(filter)
            .into_select()
            .filter(transactions::Column::Kind.eq(TransactionKind::Expense))
            .filter(column.is_in(names.iter().cloned()))
            .select_only()
            .column_as(column, "key")
            .column_as(transactions::Column::Amount.sum(), "total")
            .group_by(column)
            .into_model::<KeyTotalRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| GroupedTotal {
                key: row.key,
                total: row.total,
            })
            .collect())
    }
}

#[async_trait]
impl AggregateSource for TransactionRepository {
    type Error = RepositoryError;

    async fn totals_by_type(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        debug!(?filter, "querying totals by type");

        let rows = TransactionQuery::filtered(filter)
            .into_select()
            .select_only()
            .column_as(kind_as_text(), "kind")
            .column_as(transactions::Column::Amount.sum(), "total")
            .group_by(transactions::Column::Kind)
            .into_model::<TypeTotalRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AggregateRow::by_type(row.kind.into(), row.total))
            .collect())
    }

    async fn totals_by_date(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        debug!(?filter, "querying totals by date");

        let rows = TransactionQuery::filtered(filter)
            .into_select()
            .select_only()
            .column_as(transactions::Column::Date, "date")
            .column_as(kind_as_text(), "kind")
            .column_as(transactions::Column::Amount.sum(), "total")
            .group_by(transactions::Column::Date)
            .group_by(transactions::Column::Kind)
            .into_model::<DateTotalRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AggregateRow::by_date(row.date, row.kind.into(), row.total))
            .collect())
    }

    async fn totals_by_category(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        debug!(?filter, "querying totals by category");

        let rows = TransactionQuery::filtered(filter)
            .into_select()
            .select_only()
            .column_as(transactions::Column::Category, "category")
            .column_as(kind_as_text(), "kind")
            .column_as(transactions::Column::Amount.sum(), "total")
            .group_by(transactions::Column::Category)
            .group_by(transactions::Column::Kind)
            .into_model::<CategoryTotalRow>()
            .all(&self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| AggregateRow::by_category(row.category, row.kind.into(), row.total))
            .collect())
    }

    async fn expense_totals_by_category(
        &self,
        filter: &SummaryFilter,
        categories: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        debug!(?filter, ?categories, "querying expense totals by category");
        self.expense_totals_by(filter, transactions::Column::Category, categories)
            .await
    }

    async fn expense_totals_by_account(
        &self,
        filter: &SummaryFilter,
        accounts: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        debug!(?filter, ?accounts, "querying expense totals by account");
        self.expense_totals_by(filter, transactions::Column::Account, accounts)
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use fintrack_core::transaction::TransactionType;
    use rust_decimal_macros::dec;
    use sea_orm::{DatabaseBackend, MockDatabase, Value};

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn row(values: Vec<(&'static str, Value)>) -> BTreeMap<&'static str, Value> {
        values.into_iter().collect()
    }

    #[test]
    fn test_empty_filter_adds_no_where_clause() {
        let sql = TransactionQuery::filtered(&SummaryFilter::new()).to_sql();
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let filter = SummaryFilter::new()
            .with_start_date(day("2024-01-01"))
            .with_end_date(day("2024-01-31"))
            .with_account("Wallet")
            .with_category("Food");

        let sql = TransactionQuery::filtered(&filter).to_sql();

        assert!(sql.contains(r#""transactions"."date" >= '2024-01-01'"#), "{sql}");
        assert!(sql.contains(r#""transactions"."date" <= '2024-01-31'"#), "{sql}");
        assert!(sql.contains(r#""transactions"."account" = 'Wallet'"#), "{sql}");
        assert!(sql.contains(r#""transactions"."category" = 'Food'"#), "{sql}");
        assert_eq!(sql.matches(" AND ").count(), 3, "{sql}");
    }

    #[test]
    fn test_blank_account_is_ignored() {
        let sql = TransactionQuery::filtered(&SummaryFilter::new().with_account("  ")).to_sql();
        assert!(!sql.contains("WHERE"), "{sql}");
    }

    #[tokio::test]
    async fn test_totals_by_type_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                row(vec![
                    ("kind", "income".into()),
                    ("total", Some(dec!(1500000)).into()),
                ]),
                row(vec![
                    ("kind", "expense".into()),
                    ("total", Option::<Decimal>::None.into()),
                ]),
            ]])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let rows = repo.totals_by_type(&SummaryFilter::new()).await.unwrap();

        assert_eq!(
            rows,
            vec![
                AggregateRow::by_type(TransactionType::Income, Some(dec!(1500000))),
                AggregateRow::by_type(TransactionType::Expense, None),
            ]
        );
    }

    #[tokio::test]
    async fn test_totals_by_date_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(vec![
                ("date", day("2024-01-01").into()),
                ("kind", "expense".into()),
                ("total", Some(dec!(200000)).into()),
            ])]])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let rows = repo.totals_by_date(&SummaryFilter::new()).await.unwrap();

        assert_eq!(
            rows,
            vec![AggregateRow::by_date(
                day("2024-01-01"),
                TransactionType::Expense,
                Some(dec!(200000))
            )]
        );
    }

    #[tokio::test]
    async fn test_expense_totals_by_account_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row(vec![
                ("key", Some("BCA Debit".to_string()).into()),
                ("total", Some(dec!(2000000)).into()),
            ])]])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let rows = repo
            .expense_totals_by_account(&SummaryFilter::new(), &["BCA Debit".to_string()])
            .await
            .unwrap();

        assert_eq!(rows, vec![GroupedTotal::new("BCA Debit", Some(dec!(2000000)))]);
    }

    #[tokio::test]
    async fn test_database_error_propagates() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".to_string())])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let err = repo
            .totals_by_category(&SummaryFilter::new())
            .await
            .unwrap_err();

        assert!(matches!(err, RepositoryError::Database(_)));
        assert_eq!(AppError::from(err).error_code(), "DATABASE_ERROR");
    }

    #[tokio::test]
    async fn test_insert_returns_stored_transaction() {
        let stored = transactions::Model {
            id: Uuid::new_v4(),
            date: day("2024-01-05"),
            account: "Wallet".to_string(),
            category: "Food".to_string(),
            subcategory: Some("Lunch".to_string()),
            note: None,
            amount: dec!(45000.00),
            kind: TransactionKind::Expense,
            created_at: Utc::now().into(),
        };
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();
        let repo = TransactionRepository::new(db);

        let input = NewTransaction {
            date: stored.date,
            account: stored.account.clone(),
            category: stored.category.clone(),
            subcategory: stored.subcategory.clone(),
            note: None,
            amount: stored.amount,
            kind: TransactionType::Expense,
        };

        let saved = repo.insert(input).await.unwrap();

        assert_eq!(saved.id, stored.id);
        assert_eq!(saved.kind, TransactionType::Expense);
        assert_eq!(saved.amount, dec!(45000.00));
    }
}
