//! Budget configuration validation.

use std::collections::HashSet;

use fintrack_shared::{BudgetConfig, BudgetLimit};
use rust_decimal::Decimal;

use super::error::{BudgetError, LimitScope};

/// Budget service for business rules on configured limits.
pub struct BudgetService;

impl BudgetService {
    /// Validates static budget configuration.
    ///
    /// # Errors
    ///
    /// Returns `BudgetError::EmptyName` for blank names,
    /// `BudgetError::NonPositiveLimit` for limits at or below zero, and
    /// `BudgetError::DuplicateName` when a name repeats within one list.
    pub fn validate_config(config: &BudgetConfig) -> Result<(), BudgetError> {
        validate_limits(&config.categories, LimitScope::Category)?;
        validate_limits(&config.accounts, LimitScope::Account)
    }
}

fn validate_limits(limits: &[BudgetLimit], scope: LimitScope) -> Result<(), BudgetError> {
    let mut seen = HashSet::with_capacity(limits.len());

    for limit in limits {
        if limit.name.trim().is_empty() {
            return Err(BudgetError::EmptyName { scope });
        }

        if limit.limit <= Decimal::ZERO {
            return Err(BudgetError::NonPositiveLimit {
                scope,
                name: limit.name.clone(),
                limit: limit.limit,
            });
        }

        if !seen.insert(limit.name.as_str()) {
            return Err(BudgetError::DuplicateName {
                scope,
                name: limit.name.clone(),
            });
        }
    }

    Ok(())
}
