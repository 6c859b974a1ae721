//! Transaction types and payload validation.

pub mod error;
pub mod types;
pub mod validation;

pub use error::TransactionError;
pub use types::{AmountInput, NewTransaction, Transaction, TransactionDraft, TransactionType};
pub use validation::{parse_transaction_amount, parse_transaction_date};
