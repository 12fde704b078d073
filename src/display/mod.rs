//! Display formatting for terminal output
//!
//! Turns expenses, reports and audit entries into plain text tables and
//! bar charts.

pub mod audit;
pub mod dashboard;
pub mod expense;
pub mod report;

pub use audit::format_audit_entries;
pub use dashboard::{format_category_chart, format_daily_chart, format_dashboard};
pub use expense::{format_expense_details, format_expense_list};
pub use report::{format_money, format_percentage};
