//! Optional filters composed onto transaction queries.
//!
//! Query builders implement [`FilterableQuery`]; [`SummaryFilter::apply`] folds every
//! supplied filter onto the builder. All constraints apply simultaneously (AND).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single constraint on the transaction set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Constraint {
    /// `date >= value`.
    DateFrom(NaiveDate),
    /// `date <= value`.
    DateTo(NaiveDate),
    /// `account = value`.
    Account(String),
    /// `category = value`.
    Category(String),
}

/// A query builder that can take additional constraints.
pub trait FilterableQuery: Sized {
    /// Returns the query with `constraint` added to the existing ones.
    #[must_use]
    fn constrain(self, constraint: &Constraint) -> Self;
}

/// Filters accepted by the summary endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryFilter {
    /// Inclusive lower bound on the transaction date.
    pub start_date: Option<NaiveDate>,
    /// Inclusive upper bound on the transaction date.
    pub end_date: Option<NaiveDate>,
    /// Exact account name.
    pub account: Option<String>,
    /// Exact category name.
    pub category: Option<String>,
}

impl SummaryFilter {
    /// Creates an empty filter (matches everything).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the inclusive start date.
    #[must_use]
    pub const fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the inclusive end date.
    #[must_use]
    pub const fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the account name.
    #[must_use]
    pub fn with_account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    /// Sets the category name.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Lists the constraints this filter imposes, in a stable order.
    ///
    /// Blank account or category names impose nothing.
    #[must_use]
    pub fn constraints(&self) -> Vec<Constraint> {
        let mut constraints = Vec::with_capacity(4);

        if let Some(start) = self.start_date {
            constraints.push(Constraint::DateFrom(start));
        }
        if let Some(end) = self.end_date {
            constraints.push(Constraint::DateTo(end));
        }
        if let Some(account) = non_blank(self.account.as_deref()) {
            constraints.push(Constraint::Account(account.to_string()));
        }
        if let Some(category) = non_blank(self.category.as_deref()) {
            constraints.push(Constraint::Category(category.to_string()));
        }

        constraints
    }

    /// Returns true if the filter imposes no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints().is_empty()
    }

    /// Composes every constraint onto `query`.
    #[must_use]
    pub fn apply<Q: FilterableQuery>(&self, query: Q) -> Q {
        self.constraints()
            .iter()
            .fold(query, |query, constraint| query.constrain(constraint))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Builder that records what it was asked to constrain.
    #[derive(Debug, Default)]
    struct RecordingQuery(Vec<Constraint>);

    impl FilterableQuery for RecordingQuery {
        fn constrain(mut self, constraint: &Constraint) -> Self {
            self.0.push(constraint.clone());
            self
        }
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_start_date_and_account_only() {
        let filter = SummaryFilter::new()
            .with_start_date(day(2024, 1, 1))
            .with_account("Wallet");

        let query = filter.apply(RecordingQuery::default());

        assert_eq!(
            query.0,
            vec![
                Constraint::DateFrom(day(2024, 1, 1)),
                Constraint::Account("Wallet".to_string()),
            ]
        );
    }

    #[test]
    fn test_all_filters_apply_together() {
        let filter = SummaryFilter::new()
            .with_start_date(day(2024, 1, 1))
            .with_end_date(day(2024, 1, 31))
            .with_account("BCA Debit")
            .with_category("Dining");

        assert_eq!(filter.apply(RecordingQuery::default()).0.len(), 4);
    }

    #[test]
    fn test_empty_filter_adds_nothing() {
        let filter = SummaryFilter::new();
        assert!(filter.is_empty());
        assert!(filter.apply(RecordingQuery::default()).0.is_empty());
    }

    #[test]
    fn test_blank_names_are_ignored() {
        let filter = SummaryFilter::new().with_account("").with_category("  ");
        assert!(filter.is_empty());
    }

    #[test]
    fn test_deserializes_camel_case_query() {
        let filter: SummaryFilter =
            serde_json::from_str(r#"{"startDate":"2024-01-01","category":"Food"}"#).unwrap();

        assert_eq!(filter.start_date, Some(day(2024, 1, 1)));
        assert_eq!(filter.end_date, None);
        assert_eq!(filter.category.as_deref(), Some("Food"));
    }
}
