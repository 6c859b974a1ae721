//! Budget data types.

use chrono::{Datelike, NaiveDate};
use fintrack_shared::Currency;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::filter::SummaryFilter;

/// Inclusive calendar-day range budgets are evaluated over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetPeriod {
    /// First day, inclusive.
    pub start: NaiveDate,
    /// Last day, inclusive.
    pub end: NaiveDate,
}

impl BudgetPeriod {
    /// First day of `today`'s month through `today`.
    #[must_use]
    pub fn month_to_date(today: NaiveDate) -> Self {
        Self {
            start: today.with_day(1).unwrap_or(today),
            end: today,
        }
    }
}

/// Filters honored by budget evaluation. Budgets are always evaluated against the
/// configured names, so only the account can narrow them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetFilter {
    /// Exact account name.
    pub account: Option<String>,
}

impl BudgetFilter {
    /// Builds the summary filter for `period`, keeping the account restriction.
    #[must_use]
    pub fn scoped_to(&self, period: BudgetPeriod) -> SummaryFilter {
        let filter = SummaryFilter::new()
            .with_start_date(period.start)
            .with_end_date(period.end);

        match &self.account {
            Some(account) => filter.with_account(account.clone()),
            None => filter,
        }
    }
}

impl From<&SummaryFilter> for BudgetFilter {
    fn from(filter: &SummaryFilter) -> Self {
        Self {
            account: filter.account.clone(),
        }
    }
}

/// Spend against one configured limit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetStatus {
    /// Category or account name.
    pub label: String,
    /// Configured limit.
    pub limit: Decimal,
    /// Expense total in the period.
    pub spent: Decimal,
    /// `limit - spent`, negative when over.
    pub remaining: Decimal,
    /// True when `remaining < 0`.
    pub is_over_limit: bool,
}

impl BudgetStatus {
    /// Computes status for `spent` against `limit`.
    #[must_use]
    pub fn new(label: impl Into<String>, limit: Decimal, spent: Decimal) -> Self {
        let remaining = limit - spent;
        Self {
            label: label.into(),
            limit,
            spent,
            remaining,
            is_over_limit: remaining < Decimal::ZERO,
        }
    }
}

/// Budget status for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    /// Evaluated period.
    pub period: BudgetPeriod,
    /// Currency of all amounts.
    pub currency: Currency,
    /// Category statuses in configured order.
    pub categories: Vec<BudgetStatus>,
    /// Account statuses in configured order.
    pub accounts: Vec<BudgetStatus>,
}

impl BudgetSummary {
    /// Category statuses over their limit.
    pub fn overspent_categories(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.categories.iter().filter(|s| s.is_over_limit)
    }

    /// Account statuses over their limit.
    pub fn overspent_accounts(&self) -> impl Iterator<Item = &BudgetStatus> {
        self.accounts.iter().filter(|s| s.is_over_limit)
    }
}
