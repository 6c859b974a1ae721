//! Transaction error types.

use thiserror::Error;

/// Errors raised while validating a transaction payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransactionError {
    /// A required text field is missing or blank.
    #[error("Transaction {0} must be a non-empty string")]
    MissingField(&'static str),

    /// The type is neither income nor expense.
    #[error("Transaction type must be \"expense\" or \"income\", got \"{0}\"")]
    InvalidType(String),

    /// The date is neither a calendar day nor an RFC 3339 timestamp.
    #[error("Invalid transaction date: {0}")]
    InvalidDate(String),

    /// The amount is not a decimal number.
    #[error("Invalid transaction amount: {0}")]
    InvalidAmount(String),

    /// Amounts are magnitudes; direction comes from the type.
    #[error("Transaction amount cannot be negative")]
    NegativeAmount,
}

impl From<TransactionError> for fintrack_shared::AppError {
    fn from(err: TransactionError) -> Self {
        Self::Validation(err.to_string())
    }
}
