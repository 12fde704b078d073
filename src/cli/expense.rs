//! Expense CLI commands
//!
//! Implements CLI commands for adding, editing and browsing expenses.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_list, format_money};
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Expense, ExpenseDraft, ExpenseFilter};
use crate::services::{DashboardView, ExpenseService};
use crate::storage::Storage;

use super::args::{
    category_filter, parse_category, parse_cycle, parse_cycle_filter, parse_date,
    parse_date_or_today, parse_id,
};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// Expense name
        name: String,
        /// Cost per payment (e.g. 12.50)
        cost: String,
        /// Billing cycle: one-time, weekly, monthly or yearly
        #[arg(short = 'y', long, default_value = "monthly")]
        cycle: String,
        /// Category (e.g. "Food", "House", "Savings & Investments")
        #[arg(short, long)]
        category: String,
        /// First payment date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Edit an expense; omitted fields keep their current value
    Edit {
        /// Expense ID (e.g. 3 or #3)
        id: String,
        #[arg(short, long)]
        name: Option<String>,
        #[arg(long)]
        cost: Option<String>,
        #[arg(short = 'y', long)]
        cycle: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        /// First payment date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID
        id: String,
    },
    /// Show expense details
    Show {
        /// Expense ID
        id: String,
    },
    /// List expenses, newest first payment first
    List {
        /// Cycle filter: all, monthly, yearly or one-time
        #[arg(short = 'y', long)]
        cycle: Option<String>,
        /// Category label to filter by
        #[arg(short, long)]
        category: Option<String>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> TrackerResult<()> {
    let service = ExpenseService::new(storage);
    let symbol = &settings.currency_symbol;

    match cmd {
        ExpenseCommands::Add {
            name,
            cost,
            cycle,
            category,
            date,
        } => {
            let draft = ExpenseDraft {
                name,
                cost,
                billing_cycle: Some(parse_cycle(&cycle)?),
                category: Some(parse_category(&category)?),
                first_payment_date: Some(parse_date_or_today(date.as_deref())?),
            };

            let expense = service.create_from_draft(&draft)?;
            println!("Added expense: {} ({})", expense.name, expense.id);
            println!(
                "  {} {} in {}",
                format_money(expense.cost, symbol),
                expense.billing_cycle.suffix(),
                expense.category
            );
        }

        ExpenseCommands::Edit {
            id,
            name,
            cost,
            cycle,
            category,
            date,
        } => {
            let id = parse_id(&id)?;
            let current = service.require(id)?;

            let draft = edit_draft(&current, name, cost, cycle, category, date)?;

            if !service.update_from_draft(id, &draft)? {
                return Err(TrackerError::expense_not_found(id.to_string()));
            }
            println!("Updated expense {}", id);
        }

        ExpenseCommands::Delete { id } => {
            let id = parse_id(&id)?;
            let removed = service
                .delete(id)?
                .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
            println!("Deleted expense: {} ({})", removed.name, removed.id);
        }

        ExpenseCommands::Show { id } => {
            let id = parse_id(&id)?;
            let view = DashboardView::attach_today(storage)?;
            let expense = view
                .get_by_id(id)
                .ok_or_else(|| TrackerError::expense_not_found(id.to_string()))?;
            print!("{}", format_expense_details(expense, settings));
        }

        ExpenseCommands::List { cycle, category } => {
            let cycle = match cycle {
                Some(cycle) => parse_cycle_filter(&cycle)?,
                None => Default::default(),
            };
            let filter = ExpenseFilter::new(cycle, category_filter(category.as_deref()));

            let mut view = DashboardView::attach_today(storage)?;
            view.set_filter(filter);
            let expenses = view.filtered_expenses().unwrap_or_default();
            println!("{}", format_expense_list(expenses, settings));
        }
    }

    Ok(())
}

/// Overlay the supplied fields on a stored expense.
///
/// The cost is carried over at full precision; the form's two-decimal
/// rendering would otherwise round it on every edit.
fn edit_draft(
    current: &Expense,
    name: Option<String>,
    cost: Option<String>,
    cycle: Option<String>,
    category: Option<String>,
    date: Option<String>,
) -> TrackerResult<ExpenseDraft> {
    let mut draft = ExpenseDraft::from_expense(current);
    draft.cost = cost.unwrap_or_else(|| current.cost.to_string());
    if let Some(name) = name {
        draft.name = name;
    }
    if let Some(cycle) = cycle {
        draft.billing_cycle = Some(parse_cycle(&cycle)?);
    }
    if let Some(category) = category {
        draft.category = Some(parse_category(&category)?);
    }
    if let Some(date) = date {
        draft.first_payment_date = Some(parse_date(&date)?);
    }
    Ok(draft)
}
