//! Dashboard summaries.
//!
//! This module reshapes grouped-total rows into:
//! - Income/expense/net totals
//! - A daily series sorted by date
//! - A category series sorted by name

pub mod normalize;
pub mod service;
pub mod types;


pub use normalize::{normalize_category_series, normalize_daily_series, normalize_totals};
pub use service::SummaryService;
pub use types::*;
