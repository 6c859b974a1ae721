//! The grouped-total data source seam.
//!
//! The datastore does the filtering, grouping and summing; implementors return rows
//! in the exact shapes below and the core only reshapes them.

pub mod memory;

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::SummaryFilter;
use crate::summary::AggregateRow;

pub use memory::InMemorySource;

/// A total grouped by a single text key (category or account).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedTotal {
    /// Group key. `None` rows are ignored downstream.
    pub key: Option<String>,
    /// Sum of amounts. `None` counts as zero.
    pub total: Option<Decimal>,
}

impl GroupedTotal {
    /// Creates a row with a present key.
    #[must_use]
    pub fn new(key: impl Into<String>, total: Option<Decimal>) -> Self {
        Self {
            key: Some(key.into()),
            total,
        }
    }
}

/// Source of grouped transaction totals.
///
/// Every method applies `filter` conjunctively before grouping.
#[async_trait]
pub trait AggregateSource: Send + Sync {
    /// Error reported by the underlying store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Totals grouped by type.
    async fn totals_by_type(&self, filter: &SummaryFilter)
    -> Result<Vec<AggregateRow>, Self::Error>;

    /// Totals grouped by `(date, type)`.
    async fn totals_by_date(&self, filter: &SummaryFilter)
    -> Result<Vec<AggregateRow>, Self::Error>;

    /// Totals grouped by `(category, type)`.
    async fn totals_by_category(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error>;

    /// Expense totals grouped by category, restricted to `categories`.
    async fn expense_totals_by_category(
        &self,
        filter: &SummaryFilter,
        categories: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error>;

    /// Expense totals grouped by account, restricted to `accounts`.
    async fn expense_totals_by_account(
        &self,
        filter: &SummaryFilter,
        accounts: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error>;
}
