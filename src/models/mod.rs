//! Core data models for the money tracker
//!
//! Expenses, their billing cycles and categories, and the list filters.

pub mod billing_cycle;
pub mod category;
pub mod expense;
pub mod filter;
pub mod ids;

pub use billing_cycle::{BillingCycle, WEEKS_PER_MONTH};
pub use category::ExpenseCategory;
pub use expense::{Expense, ExpenseDraft, ExpenseValidationError, NewExpense};
pub use filter::{CategoryFilter, CycleFilter, ExpenseFilter};
pub use ids::ExpenseId;
