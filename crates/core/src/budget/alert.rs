//! Overspend detection on a budget summary.

use serde::Serialize;

use super::types::{BudgetStatus, BudgetSummary};

/// Outcome of an overspend check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    /// No limits configured.
    Disabled,
    /// Every limit is respected.
    Ok,
    /// At least one limit is exceeded.
    Alert,
}

/// Overspend report derived from a [`BudgetSummary`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetAlert {
    /// Overall status.
    pub status: AlertStatus,
    /// The evaluated summary, absent when disabled.
    pub budgets: Option<BudgetSummary>,
    /// Categories over their limit.
    pub overspent_categories: Vec<BudgetStatus>,
    /// Accounts over their limit.
    pub overspent_accounts: Vec<BudgetStatus>,
    /// True when anything is over its limit.
    pub has_overspend: bool,
}

impl BudgetAlert {
    /// Classifies `summary`; `None` means budgets are disabled.
    #[must_use]
    pub fn evaluate(summary: Option<BudgetSummary>) -> Self {
        let Some(summary) = summary else {
            return Self {
                status: AlertStatus::Disabled,
                budgets: None,
                overspent_categories: Vec::new(),
                overspent_accounts: Vec::new(),
                has_overspend: false,
            };
        };

        let overspent_categories: Vec<BudgetStatus> =
            summary.overspent_categories().cloned().collect();
        let overspent_accounts: Vec<BudgetStatus> =
            summary.overspent_accounts().cloned().collect();
        let has_overspend = !overspent_categories.is_empty() || !overspent_accounts.is_empty();

        Self {
            status: if has_overspend {
                AlertStatus::Alert
            } else {
                AlertStatus::Ok
            },
            budgets: Some(summary),
            overspent_categories,
            overspent_accounts,
            has_overspend,
        }
    }
}
