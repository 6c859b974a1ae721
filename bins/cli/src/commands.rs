//! Command handlers. Each returns the JSON document to print.

use fintrack_core::budget::{BudgetAlert, BudgetEvaluator, BudgetFilter};
use fintrack_core::filter::SummaryFilter;
use fintrack_core::summary::SummaryService;
use fintrack_core::transaction::TransactionDraft;
use fintrack_db::TransactionRepository;
use fintrack_shared::{AppError, AppResult, BudgetConfig};
use serde::Serialize;
use tracing::{info, warn};

use crate::cli::Command;

/// Runs `command` against `repo` and renders its result as pretty JSON.
pub async fn execute(
    command: Command,
    budgets: &BudgetConfig,
    repo: &TransactionRepository,
) -> AppResult<String> {
    match command {
        Command::Summary { filter, as_of } => {
            let filter = SummaryFilter::from(filter);
            let summary = match as_of {
                Some(today) => {
                    SummaryService::fetch_summary_as_of(repo, budgets, &filter, today).await?
                }
                None => SummaryService::fetch_summary(repo, budgets, &filter).await?,
            };

            if let Some(budget) = &summary.budgets {
                log_overspend(&BudgetAlert::evaluate(Some(budget.clone())));
            }
            render(&summary)
        }
        Command::Budgets { account, as_of } => {
            let filter = BudgetFilter { account };
            let summary = match as_of {
                Some(today) => {
                    BudgetEvaluator::fetch_budget_summary_as_of(repo, budgets, &filter, today)
                        .await?
                }
                None => BudgetEvaluator::fetch_budget_summary(repo, budgets, &filter).await?,
            };

            let alert = BudgetAlert::evaluate(summary);
            log_overspend(&alert);
            render(&alert)
        }
        Command::Add(args) => {
            let input = TransactionDraft::from(args).validate()?;
            let saved = repo.insert(input).await?;
            info!(id = %saved.id, "Transaction recorded");
            render(&saved)
        }
        Command::List { filter } => {
            let transactions = repo.list(&SummaryFilter::from(filter)).await?;
            render(&transactions)
        }
    }
}

fn log_overspend(alert: &BudgetAlert) {
    for status in alert
        .overspent_categories
        .iter()
        .chain(&alert.overspent_accounts)
    {
        warn!(
            label = %status.label,
            limit = %status.limit,
            spent = %status.spent,
            "Budget exceeded"
        );
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(e.to_string()))
}
