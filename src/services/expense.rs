//! Expense service
//!
//! Validation, persistence and auditing for expense mutations. Every mutation
//! publishes a fresh snapshot; views pick it up through their subscription
//! rather than from the return value.

use tracing::info;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDraft, ExpenseId, NewExpense};
use crate::storage::Storage;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Validate a form draft and store it
    pub fn create_from_draft(&self, draft: &ExpenseDraft) -> TrackerResult<Expense> {
        let new = draft
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.create(new)
    }

    /// Store a new expense under a fresh id
    pub fn create(&self, expense: NewExpense) -> TrackerResult<Expense> {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let stored = self.storage.expenses.insert(expense)?;

        self.storage.expenses.save()?;
        self.storage.log_create(&stored)?;

        info!(id = %stored.id, name = %stored.name, cost = stored.cost, "expense created");
        Ok(stored)
    }

    /// Replace an expense by id.
    ///
    /// Returns `false` without touching storage when the id is unknown.
    pub fn update(&self, expense: Expense) -> TrackerResult<bool> {
        expense
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;

        let after = expense.clone();
        let Some(before) = self.storage.expenses.update(expense)? else {
            return Ok(false);
        };

        self.storage.expenses.save()?;
        self.storage.log_update(&before, &after)?;

        info!(id = %after.id, "expense updated");
        Ok(true)
    }

    /// Validate an edit form and replace the expense with it
    pub fn update_from_draft(&self, id: ExpenseId, draft: &ExpenseDraft) -> TrackerResult<bool> {
        let fields = draft
            .validate()
            .map_err(|e| TrackerError::Validation(e.to_string()))?;
        self.update(fields.with_id(id))
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        let Some(removed) = self.storage.expenses.delete(id)? else {
            return Ok(None);
        };

        self.storage.expenses.save()?;
        self.storage.log_delete(&removed)?;

        info!(%id, name = %removed.name, "expense deleted");
        Ok(Some(removed))
    }

    pub fn get(&self, id: ExpenseId) -> TrackerResult<Option<Expense>> {
        self.storage.expenses.get(id)
    }

    /// Get an expense or fail with a not-found error
    pub fn require(&self, id: ExpenseId) -> TrackerResult<Expense> {
        self.get(id)?
            .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))
    }

    /// All expenses, newest first payment first
    pub fn list(&self) -> TrackerResult<Vec<Expense>> {
        self.storage.expenses.get_all()
    }
}
