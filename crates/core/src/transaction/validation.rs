//! Transaction payload validation.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use super::error::TransactionError;
use super::types::{AmountInput, NewTransaction, TransactionDraft, TransactionType};

impl TransactionDraft {
    /// Validates the draft and normalizes its fields.
    ///
    /// # Errors
    ///
    /// Returns the first [`TransactionError`] found, checking account, category,
    /// type, date and amount in that order.
    pub fn validate(self) -> Result<NewTransaction, TransactionError> {
        let account = require_text(&self.account, "account")?;
        let category = require_text(&self.category, "category")?;
        let kind = TransactionType::from_str(&self.kind)?;
        let date = parse_transaction_date(&self.date)?;
        let amount = parse_transaction_amount(&self.amount)?;

        Ok(NewTransaction {
            date,
            account,
            category,
            subcategory: optional_text(self.subcategory),
            note: optional_text(self.note),
            amount,
            kind,
        })
    }
}

/// Parses a calendar day, accepting `YYYY-MM-DD` or an RFC 3339 timestamp.
///
/// Timestamps are reduced to their UTC calendar day.
///
/// # Errors
///
/// Returns `TransactionError::InvalidDate` if neither format matches.
pub fn parse_transaction_date(value: &str) -> Result<NaiveDate, TransactionError> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }

    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .map_err(|_| TransactionError::InvalidDate(value.to_string()))
}

/// Parses an amount and rounds it to two fractional digits, midpoint away from zero.
///
/// Underscores, commas and whitespace are treated as digit grouping and removed.
///
/// # Errors
///
/// Returns `TransactionError::InvalidAmount` for unparseable text and
/// `TransactionError::NegativeAmount` for amounts below zero.
pub fn parse_transaction_amount(input: &AmountInput) -> Result<Decimal, TransactionError> {
    let amount = match input {
        AmountInput::Number(amount) => *amount,
        AmountInput::Text(raw) => {
            let cleaned: String = raw
                .chars()
                .filter(|c| !matches!(c, '_' | ',') && !c.is_whitespace())
                .collect();
            Decimal::from_str(&cleaned)
                .map_err(|_| TransactionError::InvalidAmount(raw.clone()))?
        }
    };

    if amount < Decimal::ZERO {
        return Err(TransactionError::NegativeAmount);
    }

    Ok(amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}

fn require_text(value: &str, field: &'static str) -> Result<String, TransactionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(TransactionError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
