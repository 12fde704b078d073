//! A single recorded mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::{Expense, ExpenseId};

use super::changes::describe_changes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the audit log.
///
/// `before` is present for updates and deletes, `after` for creates and
/// updates. `changes` only appears on updates that altered something.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: DateTime<Utc>,
    pub operation: Operation,
    pub expense_id: ExpenseId,

    /// Name after the mutation, or the removed name for deletes
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub before: Option<Expense>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub after: Option<Expense>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<String>,
}

impl AuditEntry {
    fn about(operation: Operation, expense: &Expense) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            expense_id: expense.id,
            name: expense.name.clone(),
            before: None,
            after: None,
            changes: None,
        }
    }

    pub fn create(expense: &Expense) -> Self {
        Self {
            after: Some(expense.clone()),
            ..Self::about(Operation::Create, expense)
        }
    }

    pub fn update(before: &Expense, after: &Expense) -> Self {
        Self {
            before: Some(before.clone()),
            after: Some(after.clone()),
            changes: describe_changes(before, after),
            ..Self::about(Operation::Update, after)
        }
    }

    pub fn delete(expense: &Expense) -> Self {
        Self {
            before: Some(expense.clone()),
            ..Self::about(Operation::Delete, expense)
        }
    }

    /// `[2025-02-01 10:00:00 UTC] UPDATE Expense #1 (Phone) | cost: 20 -> 25`
    pub fn format_human_readable(&self) -> String {
        let mut line = format!(
            "{} {} Expense {} ({})",
            self.timestamp.format("[%Y-%m-%d %H:%M:%S UTC]"),
            self.operation,
            self.expense_id,
            self.name
        );
        if let Some(changes) = &self.changes {
            line.push_str(" | ");
            line.push_str(changes);
        }
        line
    }
}
