//! Expense model
//!
//! An expense is an immutable value: edits replace every mutable field while
//! the id stays the same.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::billing_cycle::BillingCycle;
use super::category::ExpenseCategory;
use super::ids::ExpenseId;

/// An expense that has not been stored yet and therefore has no id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    pub category: ExpenseCategory,
    pub first_payment_date: NaiveDate,
}

impl NewExpense {
    pub fn new(
        name: impl Into<String>,
        cost: f64,
        billing_cycle: BillingCycle,
        category: ExpenseCategory,
        first_payment_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            billing_cycle,
            category,
            first_payment_date,
        }
    }

    /// Attach a storage-assigned id
    pub fn with_id(self, id: ExpenseId) -> Expense {
        Expense {
            id,
            name: self.name,
            cost: self.cost,
            billing_cycle: self.billing_cycle,
            category: self.category,
            first_payment_date: self.first_payment_date,
        }
    }

    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.name, self.cost)
    }
}

/// A stored expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier, assigned by storage
    pub id: ExpenseId,

    /// Display label
    pub name: String,

    /// Amount charged per occurrence, in the single implicit currency
    pub cost: f64,

    /// How the expense recurs
    pub billing_cycle: BillingCycle,

    pub category: ExpenseCategory,

    /// Date of the first (or only) payment
    pub first_payment_date: NaiveDate,
}

impl Expense {
    /// Build a full replacement carrying this expense's id
    pub fn replaced_by(&self, fields: NewExpense) -> Expense {
        fields.with_id(self.id)
    }

    /// This expense's cost normalized to an average month
    pub fn monthly_equivalent(&self) -> f64 {
        self.billing_cycle.monthly_equivalent(self.cost)
    }

    /// Validate the stored fields
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        validate_fields(&self.name, self.cost)
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn validate_fields(name: &str, cost: f64) -> Result<(), ExpenseValidationError> {
    if name.trim().is_empty() {
        return Err(ExpenseValidationError::EmptyName);
    }
    if !cost.is_finite() || cost <= 0.0 {
        return Err(ExpenseValidationError::NonPositiveCost(cost));
    }
    Ok(())
}

/// Raw form input for adding or editing an expense.
///
/// Nothing reaches storage until the draft validates into a [`NewExpense`].
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub name: String,
    pub cost: String,
    pub billing_cycle: Option<BillingCycle>,
    pub category: Option<ExpenseCategory>,
    pub first_payment_date: Option<NaiveDate>,
}

impl ExpenseDraft {
    /// Pre-populate an edit form from a stored expense
    pub fn from_expense(expense: &Expense) -> Self {
        Self {
            name: expense.name.clone(),
            cost: format!("{:.2}", expense.cost),
            billing_cycle: Some(expense.billing_cycle),
            category: Some(expense.category),
            first_payment_date: Some(expense.first_payment_date),
        }
    }

    /// Whether the form may be submitted
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the draft and turn it into a record ready for storage
    pub fn validate(&self) -> Result<NewExpense, ExpenseValidationError> {
        let cost = self
            .cost
            .trim()
            .parse::<f64>()
            .map_err(|_| ExpenseValidationError::InvalidCost(self.cost.clone()))?;

        validate_fields(&self.name, cost)?;

        let billing_cycle = self
            .billing_cycle
            .ok_or(ExpenseValidationError::MissingBillingCycle)?;
        let category = self.category.ok_or(ExpenseValidationError::MissingCategory)?;
        let first_payment_date = self
            .first_payment_date
            .ok_or(ExpenseValidationError::MissingDate)?;

        Ok(NewExpense::new(
            self.name.trim(),
            cost,
            billing_cycle,
            category,
            first_payment_date,
        ))
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq)]
pub enum ExpenseValidationError {
    EmptyName,
    InvalidCost(String),
    NonPositiveCost(f64),
    MissingBillingCycle,
    MissingCategory,
    MissingDate,
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Expense name cannot be empty"),
            Self::InvalidCost(raw) => write!(f, "Cost '{}' is not a number", raw),
            Self::NonPositiveCost(cost) => {
                write!(f, "Cost must be greater than zero (got {})", cost)
            }
            Self::MissingBillingCycle => write!(f, "A billing cycle must be selected"),
            Self::MissingCategory => write!(f, "A category must be selected"),
            Self::MissingDate => write!(f, "A first payment date must be selected"),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}
