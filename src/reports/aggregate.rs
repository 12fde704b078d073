//! Aggregation over an expense collection
//!
//! All functions are pure folds over a snapshot. Sums follow the input order
//! and nothing is rounded; rounding is a display concern.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};

use super::projection::{days_in_month, project_onto_month};
use crate::models::{BillingCycle, Expense, ExpenseCategory};

/// Raw cost per category, without recurrence normalization.
///
/// Only categories that occur in the input are present.
pub fn category_totals(expenses: &[Expense]) -> BTreeMap<ExpenseCategory, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.category).or_insert(0.0) += expense.cost;
    }
    totals
}

/// Total monthly burden: every expense normalized to its monthly equivalent
pub fn monthly_equivalent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(Expense::monthly_equivalent).sum()
}

/// Monthly burden with yearly expenses left out entirely
pub fn monthly_excluding_yearly(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .map(|e| match e.billing_cycle {
            BillingCycle::Yearly => 0.0,
            _ => e.monthly_equivalent(),
        })
        .sum()
}

/// Sum of one-time expenses only
pub fn one_time_total(expenses: &[Expense]) -> f64 {
    expenses
        .iter()
        .filter(|e| e.billing_cycle == BillingCycle::OneTime)
        .map(|e| e.cost)
        .sum()
}

/// A category total with its share of the sum of all totals
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    pub total: f64,
    /// Percentage of the overall total (0-100)
    pub percentage: f64,
}

/// Percentage breakdown of category totals, largest first
pub fn category_share(totals: &BTreeMap<ExpenseCategory, f64>) -> Vec<CategoryShare> {
    let overall: f64 = totals.values().sum();

    let mut shares: Vec<CategoryShare> = totals
        .iter()
        .map(|(&category, &total)| CategoryShare {
            category,
            total,
            percentage: if overall == 0.0 {
                0.0
            } else {
                total / overall * 100.0
            },
        })
        .collect();

    shares.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    shares
}

/// Spending per day over one full month.
///
/// Dense: every day from 1 to the month's length has an entry, zero when
/// nothing is due.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyDistribution {
    year: i32,
    month: u32,
    totals: Vec<f64>,
}

impl DailyDistribution {
    /// An all-zero distribution for the month containing `reference`
    pub fn empty(reference: NaiveDate) -> Self {
        let days = days_in_month(reference.year(), reference.month());
        Self {
            year: reference.year(),
            month: reference.month(),
            totals: vec![0.0; days as usize],
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn days_in_month(&self) -> u32 {
        self.totals.len() as u32
    }

    /// Amount due on a day of the month, `None` outside `1..=days_in_month`
    pub fn get(&self, day: u32) -> Option<f64> {
        if day == 0 {
            return None;
        }
        self.totals.get(day as usize - 1).copied()
    }

    /// `(day, amount)` pairs for every day of the month
    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.totals
            .iter()
            .enumerate()
            .map(|(i, amount)| (i as u32 + 1, *amount))
    }

    pub fn total(&self) -> f64 {
        self.totals.iter().sum()
    }

    /// Largest single-day amount
    pub fn max(&self) -> f64 {
        self.totals.iter().copied().fold(0.0, f64::max)
    }

    pub fn to_map(&self) -> BTreeMap<u32, f64> {
        self.iter().collect()
    }

    fn add(&mut self, day: u32, amount: f64) {
        if let Some(slot) = day
            .checked_sub(1)
            .and_then(|index| self.totals.get_mut(index as usize))
        {
            *slot += amount;
        }
    }
}

/// Project every expense onto the reference month and sum per day
pub fn daily_distribution(expenses: &[Expense], reference: NaiveDate) -> DailyDistribution {
    let mut distribution = DailyDistribution::empty(reference);
    for expense in expenses {
        for (day, amount) in project_onto_month(expense, reference) {
            distribution.add(day, amount);
        }
    }
    distribution
}
