//! Expense categories
//!
//! A fixed, closed set. Category filters match against the display label.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseCategory {
    Food,
    House,
    Transportation,
    Insurance,
    Subscriptions,
    Savings,
    Personal,
}

impl ExpenseCategory {
    /// All categories in declaration order
    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::House,
            Self::Transportation,
            Self::Insurance,
            Self::Subscriptions,
            Self::Savings,
            Self::Personal,
        ]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::House => "House",
            Self::Transportation => "Transportation",
            Self::Insurance => "Insurance",
            Self::Subscriptions => "Subscriptions",
            Self::Savings => "Savings & Investments",
            Self::Personal => "Personal Spending",
        }
    }

    /// Parse a category from its variant name or its label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::all().iter().copied().find(|category| {
            category.label().eq_ignore_ascii_case(s) || category.variant_name().eq_ignore_ascii_case(s)
        })
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Food => "FOOD",
            Self::House => "HOUSE",
            Self::Transportation => "TRANSPORTATION",
            Self::Insurance => "INSURANCE",
            Self::Subscriptions => "SUBSCRIPTIONS",
            Self::Savings => "SAVINGS",
            Self::Personal => "PERSONAL",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
