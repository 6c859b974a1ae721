//! Normalization of grouped rows into dashboard shapes.
//!
//! Repeated keys are summed, never overwritten, so callers that do not perfectly
//! pre-group still get correct totals.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::transaction::TransactionType;

use super::types::{AggregateRow, CategorySeriesPoint, DailySeriesPoint, TotalsSummary};

/// Running income/expense pair for one key.
#[derive(Debug, Clone, Copy, Default)]
struct Flow {
    income: Decimal,
    expense: Decimal,
}

impl Flow {
    fn add(&mut self, row: &AggregateRow) {
        match row.kind {
            TransactionType::Income => self.income += row.amount(),
            TransactionType::Expense => self.expense += row.amount(),
        }
    }
}

/// Folds rows grouped by type into income, expense and net.
///
/// Empty input yields zeros.
#[must_use]
pub fn normalize_totals(rows: &[AggregateRow]) -> TotalsSummary {
    let flow = rows.iter().fold(Flow::default(), |mut flow, row| {
        flow.add(row);
        flow
    });

    TotalsSummary::new(flow.income, flow.expense)
}

/// Folds rows grouped by `(date, type)` into a series sorted by date.
///
/// Rows without a date are skipped.
#[must_use]
pub fn normalize_daily_series(rows: &[AggregateRow]) -> Vec<DailySeriesPoint> {
    let mut by_day: BTreeMap<NaiveDate, Flow> = BTreeMap::new();

    for row in rows {
        let Some(date) = row.date else {
            continue;
        };
        by_day.entry(date).or_default().add(row);
    }

    by_day
        .into_iter()
        .map(|(date, flow)| DailySeriesPoint {
            date,
            income: flow.income,
            expense: flow.expense,
        })
        .collect()
}

/// Folds rows grouped by `(category, type)` into a series sorted by name.
///
/// Rows without a category are skipped.
#[must_use]
pub fn normalize_category_series(rows: &[AggregateRow]) -> Vec<CategorySeriesPoint> {
    let mut by_category: BTreeMap<&str, Flow> = BTreeMap::new();

    for row in rows {
        let Some(category) = row.category.as_deref() else {
            continue;
        };
        by_category.entry(category).or_default().add(row);
    }

    by_category
        .into_iter()
        .map(|(category, flow)| CategorySeriesPoint {
            category: category.to_string(),
            income: flow.income,
            expense: flow.expense,
        })
        .collect()
}
