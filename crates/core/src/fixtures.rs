//! Shared test fixtures.

use std::convert::Infallible;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::filter::SummaryFilter;
use crate::source::{AggregateSource, GroupedTotal, InMemorySource};
use crate::summary::AggregateRow;
use crate::transaction::{Transaction, TransactionType};

pub fn tx(
    date: &str,
    account: &str,
    category: &str,
    amount: Decimal,
    kind: TransactionType,
) -> Transaction {
    Transaction {
        id: Uuid::new_v4(),
        date: date.parse().unwrap(),
        account: account.to_string(),
        category: category.to_string(),
        subcategory: None,
        note: None,
        amount,
        kind,
        created_at: Utc::now(),
    }
}

/// Error carrying the name of the query that failed.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("source unavailable during {0}")]
pub struct SourceUnavailable(pub &'static str);

/// Fails every query.
pub struct FailingSource;

#[async_trait]
impl AggregateSource for FailingSource {
    type Error = SourceUnavailable;

    async fn totals_by_type(&self, _: &SummaryFilter) -> Result<Vec<AggregateRow>, Self::Error> {
        Err(SourceUnavailable("totals_by_type"))
    }

    async fn totals_by_date(&self, _: &SummaryFilter) -> Result<Vec<AggregateRow>, Self::Error> {
        Err(SourceUnavailable("totals_by_date"))
    }

    async fn totals_by_category(
        &self,
        _: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        Err(SourceUnavailable("totals_by_category"))
    }

    async fn expense_totals_by_category(
        &self,
        _: &SummaryFilter,
        _: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        Err(SourceUnavailable("expense_totals_by_category"))
    }

    async fn expense_totals_by_account(
        &self,
        _: &SummaryFilter,
        _: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        Err(SourceUnavailable("expense_totals_by_account"))
    }
}

/// Delegates to an in-memory source and records each call with its filter.
pub struct RecordingSource {
    inner: InMemorySource,
    calls: Mutex<Vec<(&'static str, SummaryFilter)>>,
}

impl RecordingSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            inner: InMemorySource::new(transactions),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<(&'static str, SummaryFilter)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn called(&self, name: &str) -> bool {
        self.calls().iter().any(|(call, _)| *call == name)
    }

    fn record(&self, name: &'static str, filter: &SummaryFilter) {
        self.calls.lock().unwrap().push((name, filter.clone()));
    }
}

#[async_trait]
impl AggregateSource for RecordingSource {
    type Error = Infallible;

    async fn totals_by_type(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.record("totals_by_type", filter);
        self.inner.totals_by_type(filter).await
    }

    async fn totals_by_date(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.record("totals_by_date", filter);
        self.inner.totals_by_date(filter).await
    }

    async fn totals_by_category(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.record("totals_by_category", filter);
        self.inner.totals_by_category(filter).await
    }

    async fn expense_totals_by_category(
        &self,
        filter: &SummaryFilter,
        categories: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        self.record("expense_totals_by_category", filter);
        self.inner.expense_totals_by_category(filter, categories).await
    }

    async fn expense_totals_by_account(
        &self,
        filter: &SummaryFilter,
        accounts: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        self.record("expense_totals_by_account", filter);
        self.inner.expense_totals_by_account(filter, accounts).await
    }
}

/// Delegates to an in-memory source except for one query, which fails.
pub struct PartialFailureSource {
    inner: InMemorySource,
    failing: &'static str,
}

impl PartialFailureSource {
    pub fn new(transactions: Vec<Transaction>, failing: &'static str) -> Self {
        Self {
            inner: InMemorySource::new(transactions),
            failing,
        }
    }

    fn check(&self, name: &'static str) -> Result<(), SourceUnavailable> {
        if self.failing == name {
            Err(SourceUnavailable(name))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl AggregateSource for PartialFailureSource {
    type Error = SourceUnavailable;

    async fn totals_by_type(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.check("totals_by_type")?;
        Ok(self.inner.totals_by_type(filter).await.unwrap())
    }

    async fn totals_by_date(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.check("totals_by_date")?;
        Ok(self.inner.totals_by_date(filter).await.unwrap())
    }

    async fn totals_by_category(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        self.check("totals_by_category")?;
        Ok(self.inner.totals_by_category(filter).await.unwrap())
    }

    async fn expense_totals_by_category(
        &self,
        filter: &SummaryFilter,
        categories: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        self.check("expense_totals_by_category")?;
        Ok(self
            .inner
            .expense_totals_by_category(filter, categories)
            .await
            .unwrap())
    }

    async fn expense_totals_by_account(
        &self,
        filter: &SummaryFilter,
        accounts: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        self.check("expense_totals_by_account")?;
        Ok(self
            .inner
            .expense_totals_by_account(filter, accounts)
            .await
            .unwrap())
    }
}
