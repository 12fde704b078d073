//! Storage layer for the money tracker
//!
//! JSON file storage with atomic writes, snapshot subscriptions and the audit
//! trail of every mutation.

pub mod expenses;
pub mod file_io;

pub use expenses::{ExpenseRepository, ExpenseSnapshot};
pub use file_io::{read_json, write_json_atomic};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::paths::TrackerPaths;
use crate::error::TrackerError;
use crate::models::Expense;

/// Main storage coordinator
pub struct Storage {
    paths: TrackerPaths,
    pub expenses: ExpenseRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: TrackerPaths) -> Result<Self, TrackerError> {
        paths.ensure_directories()?;

        Ok(Self {
            expenses: ExpenseRepository::new(paths.expenses_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), TrackerError> {
        self.expenses.load()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record the creation of an expense
    pub fn log_create(&self, expense: &Expense) -> Result<(), TrackerError> {
        self.audit.log(&AuditEntry::create(expense))
    }

    /// Record a full replacement of an expense
    pub fn log_update(&self, before: &Expense, after: &Expense) -> Result<(), TrackerError> {
        self.audit.log(&AuditEntry::update(before, after))
    }

    /// Record the deletion of an expense
    pub fn log_delete(&self, expense: &Expense) -> Result<(), TrackerError> {
        self.audit.log(&AuditEntry::delete(expense))
    }
}
