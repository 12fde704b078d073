//! Service layer for the money tracker
//!
//! Business logic on top of the storage layer: validation and auditing of
//! mutations, and the view state that follows the snapshot stream.

pub mod dashboard;
pub mod expense;

pub use dashboard::DashboardView;
pub use expense::ExpenseService;
