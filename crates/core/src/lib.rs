//! Core business logic for Fintrack.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! The datastore is reached only through the [`source::AggregateSource`] trait.
//!
//! # Modules
//!
//! - `transaction` - Transaction types and payload validation
//! - `filter` - Optional date/account/category filters composed onto queries
//! - `source` - The grouped-total data source seam
//! - `summary` - Normalization of grouped rows into dashboard shapes
//! - `budget` - Month-to-date spend against configured limits

pub mod budget;
pub mod filter;
pub mod source;
pub mod summary;
pub mod transaction;

#[cfg(test)]
mod fixtures;
