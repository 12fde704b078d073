//! Dashboard report
//!
//! Bundles every derived view of one expense snapshot.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use tracing::debug;

use super::aggregate::{
    category_share, category_totals, daily_distribution, monthly_equivalent,
    monthly_excluding_yearly, one_time_total, CategoryShare, DailyDistribution,
};
use crate::models::{Expense, ExpenseCategory, ExpenseFilter};

/// All derived views of an expense snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardReport {
    /// Month the daily distribution was projected onto
    pub reference_date: NaiveDate,
    /// The filter that produced `filtered_expenses`
    pub filter: ExpenseFilter,
    /// Expenses passing the filter, in snapshot order
    pub filtered_expenses: Vec<Expense>,
    pub category_totals: BTreeMap<ExpenseCategory, f64>,
    pub monthly_equivalent: f64,
    pub monthly_excluding_yearly: f64,
    pub one_time_total: f64,
    pub daily_distribution: DailyDistribution,
    /// Number of expenses in the unfiltered snapshot
    pub expense_count: usize,
}

impl DashboardReport {
    /// Generate the report.
    ///
    /// The filter only narrows `filtered_expenses`; every aggregate is computed
    /// from the full `expenses` slice.
    pub fn generate(expenses: &[Expense], filter: &ExpenseFilter, reference_date: NaiveDate) -> Self {
        let report = Self {
            reference_date,
            filter: filter.clone(),
            filtered_expenses: filter.apply(expenses),
            category_totals: category_totals(expenses),
            monthly_equivalent: monthly_equivalent(expenses),
            monthly_excluding_yearly: monthly_excluding_yearly(expenses),
            one_time_total: one_time_total(expenses),
            daily_distribution: daily_distribution(expenses, reference_date),
            expense_count: expenses.len(),
        };

        debug!(
            expenses = report.expense_count,
            shown = report.filtered_expenses.len(),
            monthly = report.monthly_equivalent,
            %reference_date,
            "dashboard recomputed"
        );

        report
    }

    /// Category totals with percentages, largest first
    pub fn category_shares(&self) -> Vec<CategoryShare> {
        category_share(&self.category_totals)
    }
}
