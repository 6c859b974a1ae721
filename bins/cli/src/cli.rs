//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use fintrack_core::filter::SummaryFilter;
use fintrack_core::transaction::TransactionDraft;

/// Fintrack command line.
#[derive(Debug, Parser)]
#[command(name = "fintrack")]
#[command(about = "Personal income and expense tracker")]
pub struct Cli {
    /// Command to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands. Every command prints JSON to stdout.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Totals, daily and category series, and budget status
    Summary {
        #[command(flatten)]
        filter: FilterArgs,
        /// Evaluate budgets as of this day instead of today (UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Month-to-date budget status and overspend alert
    Budgets {
        /// Only count spend from this account
        #[arg(long)]
        account: Option<String>,
        /// Evaluate as of this day instead of today (UTC)
        #[arg(long)]
        as_of: Option<NaiveDate>,
    },
    /// Record a transaction
    Add(AddArgs),
    /// List transactions, newest first
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
}

/// Optional filters shared by `summary` and `list`.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    /// Last day to include (YYYY-MM-DD)
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// Exact account name
    #[arg(long)]
    pub account: Option<String>,
    /// Exact category name
    #[arg(long)]
    pub category: Option<String>,
}

impl From<FilterArgs> for SummaryFilter {
    fn from(args: FilterArgs) -> Self {
        Self {
            start_date: args.start_date,
            end_date: args.end_date,
            account: args.account,
            category: args.category,
        }
    }
}

/// Raw transaction fields; validated before anything is stored.
#[derive(Debug, Clone, Args)]
pub struct AddArgs {
    /// Day (YYYY-MM-DD) or RFC 3339 timestamp
    #[arg(long)]
    pub date: String,
    /// Account name
    #[arg(long)]
    pub account: String,
    /// Category name
    #[arg(long)]
    pub category: String,
    /// Optional subcategory
    #[arg(long)]
    pub subcategory: Option<String>,
    /// Optional free-form note
    #[arg(long)]
    pub note: Option<String>,
    /// Amount, e.g. 125000 or "1,250.50"
    #[arg(long, allow_hyphen_values = true)]
    pub amount: String,
    /// income or expense
    #[arg(long = "type")]
    pub kind: String,
}

impl From<AddArgs> for TransactionDraft {
    fn from(args: AddArgs) -> Self {
        Self {
            date: args.date,
            account: args.account,
            category: args.category,
            subcategory: args.subcategory,
            note: args.note,
            amount: args.amount.as_str().into(),
            kind: args.kind,
        }
    }
}
