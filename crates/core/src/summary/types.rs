//! Summary data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::BudgetSummary;
use crate::transaction::TransactionType;

/// A grouped total as returned by the datastore.
///
/// Exactly one of `date`/`category` is set, depending on the grouping; both are
/// absent for rows grouped by type only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Sum of amounts; `None` when the group had no rows.
    pub total: Option<Decimal>,
    /// Day key for `(date, type)` groupings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    /// Category key for `(category, type)` groupings.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl AggregateRow {
    /// Row grouped by type only.
    #[must_use]
    pub const fn by_type(kind: TransactionType, total: Option<Decimal>) -> Self {
        Self {
            kind,
            total,
            date: None,
            category: None,
        }
    }

    /// Row grouped by `(date, type)`.
    #[must_use]
    pub const fn by_date(date: NaiveDate, kind: TransactionType, total: Option<Decimal>) -> Self {
        Self {
            kind,
            total,
            date: Some(date),
            category: None,
        }
    }

    /// Row grouped by `(category, type)`.
    #[must_use]
    pub fn by_category(
        category: impl Into<String>,
        kind: TransactionType,
        total: Option<Decimal>,
    ) -> Self {
        Self {
            kind,
            total,
            date: None,
            category: Some(category.into()),
        }
    }

    /// The total, with `None` read as zero.
    #[must_use]
    pub fn amount(&self) -> Decimal {
        self.total.unwrap_or(Decimal::ZERO)
    }
}

/// Income, expense and their difference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TotalsSummary {
    /// Total income.
    pub income: Decimal,
    /// Total expense.
    pub expense: Decimal,
    /// `income - expense`.
    pub net: Decimal,
}

impl TotalsSummary {
    /// Builds a summary, deriving `net`.
    #[must_use]
    pub fn new(income: Decimal, expense: Decimal) -> Self {
        Self {
            income,
            expense,
            net: income - expense,
        }
    }
}

/// Income and expense for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySeriesPoint {
    /// Calendar day.
    pub date: NaiveDate,
    /// Income on that day.
    pub income: Decimal,
    /// Expense on that day.
    pub expense: Decimal,
}

/// Income and expense for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySeriesPoint {
    /// Category name.
    pub category: String,
    /// Income in that category.
    pub income: Decimal,
    /// Expense in that category.
    pub expense: Decimal,
}

/// Everything the dashboard renders for one filter set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Overall totals.
    pub totals: TotalsSummary,
    /// Daily series, ascending by date.
    pub by_day: Vec<DailySeriesPoint>,
    /// Category series, ascending by name.
    pub by_category: Vec<CategorySeriesPoint>,
    /// Budget status, `None` when no limits are configured.
    pub budgets: Option<BudgetSummary>,
}
