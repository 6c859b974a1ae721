//! Month-to-date spend evaluation against configured limits.

use std::collections::HashMap;

use chrono::{NaiveDate, Utc};
use fintrack_shared::{BudgetConfig, BudgetLimit};
use rust_decimal::Decimal;

use crate::source::{AggregateSource, GroupedTotal};

use super::types::{BudgetFilter, BudgetPeriod, BudgetStatus, BudgetSummary};

/// Evaluates budget limits against a data source.
pub struct BudgetEvaluator;

impl BudgetEvaluator {
    /// Evaluates limits for the current UTC month to date.
    ///
    /// Returns `Ok(None)` when no limits are configured.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub async fn fetch_budget_summary<S>(
        source: &S,
        config: &BudgetConfig,
        filter: &BudgetFilter,
    ) -> Result<Option<BudgetSummary>, S::Error>
    where
        S: AggregateSource + ?Sized,
    {
        Self::fetch_budget_summary_as_of(source, config, filter, Utc::now().date_naive()).await
    }

    /// Evaluates limits for the month to date ending on `today`.
    ///
    /// The category and account totals are fetched concurrently. A list with no
    /// configured limits is not queried.
    ///
    /// # Errors
    ///
    /// Propagates the first error reported by `source`.
    pub async fn fetch_budget_summary_as_of<S>(
        source: &S,
        config: &BudgetConfig,
        filter: &BudgetFilter,
        today: NaiveDate,
    ) -> Result<Option<BudgetSummary>, S::Error>
    where
        S: AggregateSource + ?Sized,
    {
        if !config.is_enabled() {
            return Ok(None);
        }

        let period = BudgetPeriod::month_to_date(today);
        let scoped = filter.scoped_to(period);
        let category_names = config.category_names();
        let account_names = config.account_names();

        let category_totals = async {
            if category_names.is_empty() {
                Ok(Vec::new())
            } else {
                source
                    .expense_totals_by_category(&scoped, &category_names)
                    .await
            }
        };
        let account_totals = async {
            if account_names.is_empty() {
                Ok(Vec::new())
            } else {
                source
                    .expense_totals_by_account(&scoped, &account_names)
                    .await
            }
        };

        let (category_totals, account_totals) =
            futures::try_join!(category_totals, account_totals)?;

        Ok(Some(BudgetSummary {
            period,
            currency: config.currency,
            categories: evaluate_limits(&config.categories, &category_totals),
            accounts: evaluate_limits(&config.accounts, &account_totals),
        }))
    }
}

/// Joins limits with spend totals, one status per limit in configured order.
///
/// Limits with no matching total are reported with zero spend. Totals without a key
/// are ignored; repeated keys are summed.
#[must_use]
pub fn evaluate_limits(limits: &[BudgetLimit], totals: &[GroupedTotal]) -> Vec<BudgetStatus> {
    let mut spent: HashMap<&str, Decimal> = HashMap::with_capacity(totals.len());
    for row in totals {
        let Some(key) = row.key.as_deref() else {
            continue;
        };
        *spent.entry(key).or_default() += row.total.unwrap_or(Decimal::ZERO);
    }

    limits
        .iter()
        .map(|limit| {
            let spent = spent.get(limit.name.as_str()).copied().unwrap_or_default();
            BudgetStatus::new(limit.name.clone(), limit.limit, spent)
        })
        .collect()
}
