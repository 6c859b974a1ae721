//! Budget tracking against static spend limits.

pub mod alert;
pub mod error;
pub mod evaluator;
pub mod service;
pub mod types;


pub use alert::{AlertStatus, BudgetAlert};
pub use error::{BudgetError, LimitScope};
pub use evaluator::{BudgetEvaluator, evaluate_limits};
pub use service::BudgetService;
pub use types::{BudgetFilter, BudgetPeriod, BudgetStatus, BudgetSummary};
