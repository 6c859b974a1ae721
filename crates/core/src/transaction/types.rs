//! Transaction data types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::TransactionError;

/// Direction of a transaction. Amounts are always non-negative magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in.
    Income,
    /// Money going out.
    Expense,
}

impl TransactionType {
    /// Returns the wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses the exact lowercase wire name; surrounding whitespace or other casing is rejected.
impl std::str::FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TransactionError::InvalidType(other.to_string())),
        }
    }
}

/// A stored transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: Uuid,
    /// Calendar day the transaction belongs to.
    pub date: NaiveDate,
    /// Account name.
    pub account: String,
    /// Category name.
    pub category: String,
    /// Optional subcategory.
    pub subcategory: Option<String>,
    /// Optional free-form note.
    pub note: Option<String>,
    /// Non-negative amount with two fractional digits.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// A validated transaction ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewTransaction {
    /// Calendar day.
    pub date: NaiveDate,
    /// Account name, trimmed.
    pub account: String,
    /// Category name, trimmed.
    pub category: String,
    /// Optional subcategory.
    pub subcategory: Option<String>,
    /// Optional note.
    pub note: Option<String>,
    /// Amount rounded to two fractional digits.
    pub amount: Decimal,
    /// Income or expense.
    #[serde(rename = "type")]
    pub kind: TransactionType,
}

impl NewTransaction {
    /// Attaches storage-assigned fields.
    #[must_use]
    pub fn into_transaction(self, id: Uuid, created_at: DateTime<Utc>) -> Transaction {
        Transaction {
            id,
            date: self.date,
            account: self.account,
            category: self.category,
            subcategory: self.subcategory,
            note: self.note,
            amount: self.amount,
            kind: self.kind,
            created_at,
        }
    }
}

/// Amount as supplied by a client: either a JSON number or a formatted string
/// such as `"1,500,000"` or `"1_500.25"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum AmountInput {
    /// Free-form text, cleaned before parsing.
    Text(String),
    /// Plain number.
    Number(Decimal),
}

impl From<&str> for AmountInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<Decimal> for AmountInput {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

/// Unvalidated transaction payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionDraft {
    /// `YYYY-MM-DD` or an RFC 3339 timestamp.
    pub date: String,
    /// Account name.
    pub account: String,
    /// Category name.
    pub category: String,
    /// Optional subcategory; blank means none.
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Optional note; blank means none.
    #[serde(default)]
    pub note: Option<String>,
    /// Amount.
    pub amount: AmountInput,
    /// `income` or `expense`.
    #[serde(rename = "type")]
    pub kind: String,
}
