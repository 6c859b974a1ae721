//! Dashboard summary assembly.

use chrono::{NaiveDate, Utc};
use fintrack_shared::BudgetConfig;

use crate::budget::{BudgetEvaluator, BudgetFilter};
use crate::filter::SummaryFilter;
use crate::source::AggregateSource;

use super::normalize::{normalize_category_series, normalize_daily_series, normalize_totals};
use super::types::DashboardSummary;

/// Summary service.
pub struct SummaryService;

impl SummaryService {
    /// Builds the dashboard summary for `filter`, with budgets evaluated for the
    /// current UTC month to date.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub async fn fetch_summary<S>(
        source: &S,
        budgets: &BudgetConfig,
        filter: &SummaryFilter,
    ) -> Result<DashboardSummary, S::Error>
    where
        S: AggregateSource + ?Sized,
    {
        Self::fetch_summary_as_of(source, budgets, filter, Utc::now().date_naive()).await
    }

    /// Builds the dashboard summary with budgets evaluated as of `today`.
    ///
    /// The three grouped queries and the budget evaluation run concurrently; any
    /// failure fails the whole summary.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub async fn fetch_summary_as_of<S>(
        source: &S,
        budgets: &BudgetConfig,
        filter: &SummaryFilter,
        today: NaiveDate,
    ) -> Result<DashboardSummary, S::Error>
    where
        S: AggregateSource + ?Sized,
    {
        let budget_filter = BudgetFilter::from(filter);

        let (type_rows, date_rows, category_rows, budgets) = futures::try_join!(
            source.totals_by_type(filter),
            source.totals_by_date(filter),
            source.totals_by_category(filter),
            BudgetEvaluator::fetch_budget_summary_as_of(source, budgets, &budget_filter, today),
        )?;

        Ok(DashboardSummary {
            totals: normalize_totals(&type_rows),
            by_day: normalize_daily_series(&date_rows),
            by_category: normalize_category_series(&category_rows),
            budgets,
        })
    }
}
