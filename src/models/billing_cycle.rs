//! Billing cycle of an expense
//!
//! The cycle decides how an expense recurs and therefore how it is projected
//! onto calendar days and normalized to a monthly cost.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Average number of weeks in a month
pub const WEEKS_PER_MONTH: f64 = 52.0 / 12.0;

/// Recurrence pattern of an expense
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingCycle {
    /// Paid once on the first payment date
    OneTime,
    /// Paid every seven days starting at the first payment date
    Weekly,
    /// Paid every month on the first payment date's day of month
    Monthly,
    /// Paid every year in the first payment date's month
    Yearly,
}

impl BillingCycle {
    /// All cycles in declaration order
    pub fn all() -> &'static [BillingCycle] {
        &[Self::OneTime, Self::Weekly, Self::Monthly, Self::Yearly]
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::OneTime => "One Time",
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::Yearly => "Yearly",
        }
    }

    /// Suffix shown after an amount in list rows, e.g. "€9.99 /monthly"
    pub fn suffix(&self) -> &'static str {
        match self {
            Self::OneTime => "/one time",
            Self::Weekly => "/weekly",
            Self::Monthly => "/monthly",
            Self::Yearly => "/yearly",
        }
    }

    /// Average monthly contribution of `cost` billed on this cycle.
    ///
    /// One-time costs count at face value, they are not amortized.
    pub fn monthly_equivalent(&self, cost: f64) -> f64 {
        match self {
            Self::Weekly => cost * WEEKS_PER_MONTH,
            Self::Monthly => cost,
            Self::Yearly => cost / 12.0,
            Self::OneTime => cost,
        }
    }

    /// Parse a cycle from a variant name or label (case-insensitive)
    pub fn parse(s: &str) -> Option<Self> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "onetime" | "once" => Some(Self::OneTime),
            "weekly" => Some(Self::Weekly),
            "monthly" => Some(Self::Monthly),
            "yearly" | "annual" | "annually" => Some(Self::Yearly),
            _ => None,
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
