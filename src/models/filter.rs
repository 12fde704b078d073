//! List filters
//!
//! Filters only shape the displayed expense list. Totals and charts are always
//! computed from the full, unfiltered collection.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::billing_cycle::BillingCycle;
use super::category::ExpenseCategory;
use super::expense::Expense;

/// Sentinel label that disables category filtering
pub const ALL_LABEL: &str = "ALL";

/// Billing cycle filter.
///
/// There is no weekly value: weekly expenses only show up under `All`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CycleFilter {
    #[default]
    All,
    Monthly,
    Yearly,
    OneTime,
}

impl CycleFilter {
    /// Filter values in advance order
    pub fn all() -> &'static [CycleFilter] {
        &[Self::All, Self::Monthly, Self::Yearly, Self::OneTime]
    }

    /// The cyclic successor: All -> Monthly -> Yearly -> One Time -> All
    pub fn next(&self) -> Self {
        match self {
            Self::All => Self::Monthly,
            Self::Monthly => Self::Yearly,
            Self::Yearly => Self::OneTime,
            Self::OneTime => Self::All,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => ALL_LABEL,
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
            Self::OneTime => "One Time",
        }
    }

    /// Whether an expense billed on `cycle` passes this filter
    pub fn matches(&self, cycle: BillingCycle) -> bool {
        match self {
            Self::All => true,
            Self::Monthly => cycle == BillingCycle::Monthly,
            Self::Yearly => cycle == BillingCycle::Yearly,
            Self::OneTime => cycle == BillingCycle::OneTime,
        }
    }

    /// Parse a filter value from its label or variant name (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        if s.trim().eq_ignore_ascii_case(ALL_LABEL) {
            return Some(Self::All);
        }
        match BillingCycle::parse(s)? {
            BillingCycle::Monthly => Some(Self::Monthly),
            BillingCycle::Yearly => Some(Self::Yearly),
            BillingCycle::OneTime => Some(Self::OneTime),
            BillingCycle::Weekly => None,
        }
    }
}

impl fmt::Display for CycleFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Category filter: everything, or an exact match on a category label
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Label(String),
}

impl CategoryFilter {
    /// Build a filter from an optional label; `None` and "ALL" reset it
    pub fn from_label(label: Option<&str>) -> Self {
        match label {
            None => Self::All,
            Some(label) if label == ALL_LABEL => Self::All,
            Some(label) => Self::Label(label.to_string()),
        }
    }

    /// Filter on a known category
    pub fn category(category: ExpenseCategory) -> Self {
        Self::Label(category.label().to_string())
    }

    pub fn matches(&self, category: ExpenseCategory) -> bool {
        match self {
            Self::All => true,
            Self::Label(label) => category.label() == label,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_LABEL,
            Self::Label(label) => label,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Combined list filter.
///
/// Immutable: every change produces a new value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExpenseFilter {
    pub cycle: CycleFilter,
    pub category: CategoryFilter,
}

impl ExpenseFilter {
    pub fn new(cycle: CycleFilter, category: CategoryFilter) -> Self {
        Self { cycle, category }
    }

    pub fn with_cycle(&self, cycle: CycleFilter) -> Self {
        Self {
            cycle,
            category: self.category.clone(),
        }
    }

    /// Same filter with the cycle advanced to its successor
    pub fn advanced(&self) -> Self {
        self.with_cycle(self.cycle.next())
    }

    pub fn with_category(&self, category: CategoryFilter) -> Self {
        Self {
            cycle: self.cycle,
            category,
        }
    }

    /// Whether both parts are in their no-op state
    pub fn is_all(&self) -> bool {
        self.cycle == CycleFilter::All && self.category == CategoryFilter::All
    }

    /// Cycle check first, then category check
    pub fn matches(&self, expense: &Expense) -> bool {
        self.cycle.matches(expense.billing_cycle) && self.category.matches(expense.category)
    }

    /// Expenses passing the filter, in input order
    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}
