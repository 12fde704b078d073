//! Change history for expenses
//!
//! Every insert, replace and delete lands in an append-only JSON-lines file
//! together with the expense as it looked before and after.

mod changes;
mod entry;
mod logger;

pub use changes::describe_changes;
pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
