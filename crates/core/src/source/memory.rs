//! In-memory aggregate source for tests and offline use.
//!
//! Groups and sums in process what a database would group on its side, so it returns
//! exactly one row per group key.

use std::collections::BTreeMap;
use std::convert::Infallible;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::filter::{Constraint, FilterableQuery, SummaryFilter};
use crate::summary::AggregateRow;
use crate::transaction::{NewTransaction, Transaction, TransactionType};

use super::{AggregateSource, GroupedTotal};

/// Aggregate source over a fixed set of transactions.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    transactions: Vec<Transaction>,
}

/// Filtered view used to apply [`SummaryFilter`] constraints.
struct MemoryQuery<'a> {
    rows: Vec<&'a Transaction>,
}

impl FilterableQuery for MemoryQuery<'_> {
    fn constrain(mut self, constraint: &Constraint) -> Self {
        self.rows.retain(|tx| matches(constraint, tx));
        self
    }
}

fn matches(constraint: &Constraint, tx: &Transaction) -> bool {
    match constraint {
        Constraint::DateFrom(start) => tx.date >= *start,
        Constraint::DateTo(end) => tx.date <= *end,
        Constraint::Account(account) => tx.account == *account,
        Constraint::Category(category) => tx.category == *category,
    }
}

impl InMemorySource {
    /// Creates a source over `transactions`.
    #[must_use]
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    /// Stores a validated transaction, assigning its id and creation time.
    pub fn insert(&mut self, input: NewTransaction) -> &Transaction {
        let index = self.transactions.len();
        self.transactions
            .push(input.into_transaction(Uuid::new_v4(), Utc::now()));
        &self.transactions[index]
    }

    /// Returns the stored transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    fn select(&self, filter: &SummaryFilter) -> Vec<&Transaction> {
        let query = MemoryQuery {
            rows: self.transactions.iter().collect(),
        };
        filter.apply(query).rows
    }

    fn expense_totals_by<F>(
        &self,
        filter: &SummaryFilter,
        names: &[String],
        key: F,
    ) -> Vec<GroupedTotal>
    where
        F: Fn(&Transaction) -> &str,
    {
        let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
        for tx in self.select(filter) {
            if tx.kind != TransactionType::Expense {
                continue;
            }
            let name = key(tx);
            if !names.iter().any(|n| n == name) {
                continue;
            }
            *totals.entry(name).or_default() += tx.amount;
        }

        totals
            .into_iter()
            .map(|(name, total)| GroupedTotal::new(name, Some(total)))
            .collect()
    }
}

#[async_trait]
impl AggregateSource for InMemorySource {
    type Error = Infallible;

    async fn totals_by_type(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        let mut totals: BTreeMap<TransactionType, Decimal> = BTreeMap::new();
        for tx in self.select(filter) {
            *totals.entry(tx.kind).or_default() += tx.amount;
        }

        Ok(totals
            .into_iter()
            .map(|(kind, total)| AggregateRow::by_type(kind, Some(total)))
            .collect())
    }

    async fn totals_by_date(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        let mut totals: BTreeMap<(NaiveDate, TransactionType), Decimal> = BTreeMap::new();
        for tx in self.select(filter) {
            *totals.entry((tx.date, tx.kind)).or_default() += tx.amount;
        }

        Ok(totals
            .into_iter()
            .map(|((date, kind), total)| AggregateRow::by_date(date, kind, Some(total)))
            .collect())
    }

    async fn totals_by_category(
        &self,
        filter: &SummaryFilter,
    ) -> Result<Vec<AggregateRow>, Self::Error> {
        let mut totals: BTreeMap<(&str, TransactionType), Decimal> = BTreeMap::new();
        for tx in self.select(filter) {
            *totals.entry((tx.category.as_str(), tx.kind)).or_default() += tx.amount;
        }

        Ok(totals
            .into_iter()
            .map(|((category, kind), total)| AggregateRow::by_category(category, kind, Some(total)))
            .collect())
    }

    async fn expense_totals_by_category(
        &self,
        filter: &SummaryFilter,
        categories: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        Ok(self.expense_totals_by(filter, categories, |tx| tx.category.as_str()))
    }

    async fn expense_totals_by_account(
        &self,
        filter: &SummaryFilter,
        accounts: &[String],
    ) -> Result<Vec<GroupedTotal>, Self::Error> {
        Ok(self.expense_totals_by(filter, accounts, |tx| tx.account.as_str()))
    }
}
