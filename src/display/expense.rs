//! Expense display formatting
//!
//! Formats expenses for terminal output in table and detail views.

use crate::config::Settings;
use crate::models::Expense;

use super::report::{format_cost_with_cycle, format_money, truncate};

const MAX_NAME_WIDTH: usize = 30;

/// Format a list of expenses as a table
pub fn format_expense_list(expenses: &[Expense], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.".to_string();
    }

    let symbol = &settings.currency_symbol;
    let rows: Vec<[String; 5]> = expenses
        .iter()
        .map(|e| {
            [
                e.id.to_string(),
                truncate(&e.name, MAX_NAME_WIDTH),
                e.category.label().to_string(),
                format_cost_with_cycle(e.cost, e.billing_cycle.suffix(), symbol),
                e.first_payment_date.format(&settings.date_format).to_string(),
            ]
        })
        .collect();

    let headers = ["ID", "Name", "Category", "Cost", "First Payment"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    output.push_str(&format_row(&headers.map(String::from), &widths));
    output.push_str(&format_row(&widths.map(|w| "-".repeat(w)), &widths));
    for row in &rows {
        output.push_str(&format_row(row, &widths));
    }

    output.push_str(&format!("\n{} expense(s)\n", expenses.len()));
    output
}

fn format_row(cells: &[String; 5], widths: &[usize; 5]) -> String {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths.iter()).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        // Width by chars: the currency symbol is multi-byte
        let pad = width.saturating_sub(cell.chars().count());
        line.push_str(cell);
        if i + 1 < cells.len() {
            line.push_str(&" ".repeat(pad));
        }
    }
    line.push('\n');
    line
}

/// Format a single expense's details
pub fn format_expense_details(expense: &Expense, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!("Expense: {}\n", expense.name));
    output.push_str(&format!("  ID:             {}\n", expense.id));
    output.push_str(&format!("  Category:       {}\n", expense.category));
    output.push_str(&format!("  Billing Cycle:  {}\n", expense.billing_cycle));
    output.push_str(&format!(
        "  Cost:           {}\n",
        format_cost_with_cycle(expense.cost, expense.billing_cycle.suffix(), symbol)
    ));
    output.push_str(&format!(
        "  Per Month:      {}\n",
        format_money(expense.monthly_equivalent(), symbol)
    ));
    output.push_str(&format!(
        "  First Payment:  {}\n",
        expense.first_payment_date.format(&settings.date_format)
    ));

    output
}
