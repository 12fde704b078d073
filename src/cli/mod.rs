//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod args;
pub mod expense;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use report::{handle_chart_command, handle_dashboard_command, ChartCommands};
