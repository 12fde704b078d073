//! Expense repository for JSON storage
//!
//! Keeps expenses in memory, persists them to expenses.json and publishes a
//! complete snapshot to every subscriber after each change.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, RwLock};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::TrackerError;
use crate::models::{Expense, ExpenseId, NewExpense};

use super::file_io::{read_json, write_json_atomic};

/// Complete, ordered list of expenses at one point in time
pub type ExpenseSnapshot = Arc<Vec<Expense>>;

/// Serializable expense data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ExpenseData {
    /// Next id to hand out; ids are never reused
    #[serde(default = "first_id")]
    next_id: ExpenseId,
    #[serde(default)]
    expenses: Vec<Expense>,
}

fn first_id() -> ExpenseId {
    ExpenseId::new(1)
}

impl Default for ExpenseData {
    fn default() -> Self {
        Self {
            next_id: first_id(),
            expenses: Vec::new(),
        }
    }
}

/// Repository for expense persistence
pub struct ExpenseRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<ExpenseId, Expense>>,
    next_id: Mutex<ExpenseId>,
    subscribers: Mutex<Vec<Sender<ExpenseSnapshot>>>,
}

impl ExpenseRepository {
    /// Create a new expense repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
            next_id: Mutex::new(first_id()),
            subscribers: Mutex::new(Vec::new()),
        }
    }

    /// Load expenses from disk and publish the loaded snapshot
    pub fn load(&self) -> Result<(), TrackerError> {
        let file_data: ExpenseData = read_json(&self.path)?;

        let highest = file_data
            .expenses
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(ExpenseId::new(0));
        let after_highest = highest.next().ok_or_else(ids_exhausted)?;

        {
            let mut data = self.data.write().map_err(lock_error)?;
            let mut next_id = self.next_id.lock().map_err(lock_error)?;

            data.clear();
            for expense in file_data.expenses {
                data.insert(expense.id, expense);
            }
            *next_id = file_data.next_id.max(after_highest);

            let upcoming = *next_id;
            debug!(count = data.len(), next_id = %upcoming, "loaded expenses");
        }

        self.publish()
    }

    /// Save expenses to disk
    pub fn save(&self) -> Result<(), TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        let next_id = *self.next_id.lock().map_err(lock_error)?;

        let file_data = ExpenseData {
            next_id,
            expenses: data.values().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get an expense by ID
    pub fn get(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.get(&id).cloned())
    }

    /// All expenses, newest first payment first (ties by id)
    pub fn get_all(&self) -> Result<Vec<Expense>, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;

        let mut expenses: Vec<_> = data.values().cloned().collect();
        expenses.sort_by(|a, b| {
            b.first_payment_date
                .cmp(&a.first_payment_date)
                .then(a.id.cmp(&b.id))
        });
        Ok(expenses)
    }

    /// Current snapshot, ordered as [`get_all`](Self::get_all)
    pub fn snapshot(&self) -> Result<ExpenseSnapshot, TrackerError> {
        Ok(Arc::new(self.get_all()?))
    }

    /// Store a new expense under a fresh id
    pub fn insert(&self, expense: NewExpense) -> Result<Expense, TrackerError> {
        let stored = {
            let mut data = self.data.write().map_err(lock_error)?;
            let mut next_id = self.next_id.lock().map_err(lock_error)?;

            let following = next_id.next().ok_or_else(ids_exhausted)?;
            let stored = expense.with_id(*next_id);
            *next_id = following;
            data.insert(stored.id, stored.clone());
            stored
        };

        debug!(id = %stored.id, name = %stored.name, "inserted expense");
        self.publish()?;
        Ok(stored)
    }

    /// Replace an existing expense, returning the previous version.
    ///
    /// Unknown ids are ignored and yield `None`.
    pub fn update(&self, expense: Expense) -> Result<Option<Expense>, TrackerError> {
        let previous = {
            let mut data = self.data.write().map_err(lock_error)?;
            match data.get_mut(&expense.id) {
                Some(slot) => Some(std::mem::replace(slot, expense)),
                None => None,
            }
        };

        match &previous {
            Some(old) => {
                debug!(id = %old.id, "updated expense");
                self.publish()?;
            }
            None => debug!("update ignored, expense not found"),
        }
        Ok(previous)
    }

    /// Delete an expense, returning it if it existed
    pub fn delete(&self, id: ExpenseId) -> Result<Option<Expense>, TrackerError> {
        let removed = {
            let mut data = self.data.write().map_err(lock_error)?;
            data.remove(&id)
        };

        if removed.is_some() {
            debug!(%id, "deleted expense");
            self.publish()?;
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize, TrackerError> {
        let data = self.data.read().map_err(lock_error)?;
        Ok(data.len())
    }

    /// Subscribe to snapshots.
    ///
    /// The current snapshot is delivered immediately; a new one follows every
    /// change. Dropping the receiver ends the subscription.
    pub fn subscribe(&self) -> Result<Receiver<ExpenseSnapshot>, TrackerError> {
        let (sender, receiver) = mpsc::channel();
        let snapshot = self.snapshot()?;
        // The receiver is still in hand, so this send cannot fail
        let _ = sender.send(snapshot);

        self.subscribers.lock().map_err(lock_error)?.push(sender);
        Ok(receiver)
    }

    fn publish(&self) -> Result<(), TrackerError> {
        let snapshot = self.snapshot()?;
        let mut subscribers = self.subscribers.lock().map_err(lock_error)?;
        subscribers.retain(|sender| sender.send(Arc::clone(&snapshot)).is_ok());
        trace!(
            subscribers = subscribers.len(),
            expenses = snapshot.len(),
            "published snapshot"
        );
        Ok(())
    }
}

fn ids_exhausted() -> TrackerError {
    TrackerError::Storage("expense ids exhausted".into())
}

fn lock_error<E: std::fmt::Display>(e: E) -> TrackerError {
    TrackerError::Storage(format!("Failed to acquire lock: {}", e))
}
