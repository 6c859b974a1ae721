//! Budget error types.

use rust_decimal::Decimal;
use thiserror::Error;

/// Which list of limits an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitScope {
    /// Category limits.
    Category,
    /// Account limits.
    Account,
}

impl std::fmt::Display for LimitScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category => f.write_str("category"),
            Self::Account => f.write_str("account"),
        }
    }
}

/// Budget configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BudgetError {
    /// A limit has a blank name.
    #[error("Budget {scope} limit has an empty name")]
    EmptyName {
        /// Category or account list.
        scope: LimitScope,
    },

    /// Limits must be strictly positive.
    #[error("Budget {scope} limit for {name} must be positive, got {limit}")]
    NonPositiveLimit {
        /// Category or account list.
        scope: LimitScope,
        /// Offending name.
        name: String,
        /// Configured value.
        limit: Decimal,
    },

    /// The same name appears twice in one list.
    #[error("Budget {scope} limit for {name} is configured more than once")]
    DuplicateName {
        /// Category or account list.
        scope: LimitScope,
        /// Offending name.
        name: String,
    },
}

impl From<BudgetError> for fintrack_shared::AppError {
    fn from(err: BudgetError) -> Self {
        Self::Configuration(err.to_string())
    }
}
