//! Dashboard and chart CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_category_chart, format_daily_chart, format_dashboard};
use crate::error::{TrackerError, TrackerResult};
use crate::models::ExpenseFilter;
use crate::services::DashboardView;
use crate::storage::Storage;

use super::args::{category_filter, parse_cycle_filter, parse_date_or_today, parse_month};

/// Chart subcommands
#[derive(Subcommand)]
pub enum ChartCommands {
    /// Spending per category with percentages
    Categories,
    /// Payments due on each day of a month
    Daily {
        /// Month to project onto (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,
    },
}

/// Show the dashboard for the month containing `date`
pub fn handle_dashboard_command(
    storage: &Storage,
    settings: &Settings,
    date: Option<&str>,
    cycle: Option<&str>,
    category: Option<&str>,
) -> TrackerResult<()> {
    let reference_date = parse_date_or_today(date)?;
    let cycle = match cycle {
        Some(cycle) => parse_cycle_filter(cycle)?,
        None => Default::default(),
    };

    let mut view = DashboardView::attach(storage, reference_date)?;
    view.set_filter(ExpenseFilter::new(cycle, category_filter(category)));

    let report = view.report().ok_or_else(still_loading)?;
    print!("{}", format_dashboard(report, settings));
    Ok(())
}

/// Handle a chart command
pub fn handle_chart_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ChartCommands,
) -> TrackerResult<()> {
    match cmd {
        ChartCommands::Categories => {
            let view = DashboardView::attach_today(storage)?;
            let report = view.report().ok_or_else(still_loading)?;
            println!("{}", format_category_chart(report, settings));
        }
        ChartCommands::Daily { month } => {
            let reference_date = match month {
                Some(month) => parse_month(&month)?,
                None => chrono::Local::now().date_naive(),
            };
            let view = DashboardView::attach(storage, reference_date)?;
            let distribution = view.daily_distribution().ok_or_else(still_loading)?;
            print!("{}", format_daily_chart(distribution, settings));
        }
    }

    Ok(())
}

fn still_loading() -> TrackerError {
    TrackerError::Storage("Expense data is not loaded yet".into())
}
