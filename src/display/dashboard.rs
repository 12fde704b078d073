//! Dashboard and chart formatting

use chrono::NaiveDate;

use crate::config::Settings;
use crate::reports::{DailyDistribution, DashboardReport};

use super::expense::format_expense_list;
use super::report::{format_bar, format_money, format_percentage, separator};

const BAR_WIDTH: usize = 30;
const LINE_WIDTH: usize = 60;
const HEADLINE_WIDTH: usize = 28;

/// Headline figures followed by the filtered expense list
pub fn format_dashboard(report: &DashboardReport, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&format!(
        "Dashboard for {}\n",
        report.reference_date.format("%B %Y")
    ));
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    let headlines = [
        ("Total monthly cost:", report.monthly_equivalent),
        ("Monthly cost (no yearly):", report.monthly_excluding_yearly),
        ("One-time payments:", report.one_time_total),
        ("Due this month:", report.daily_distribution.total()),
    ];
    for (label, amount) in headlines {
        output.push_str(&format!(
            "  {:<width$}{}\n",
            label,
            format_money(amount, symbol),
            width = HEADLINE_WIDTH,
        ));
    }
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    output.push_str(&format!(
        "Filter: {} / {}\n\n",
        report.filter.cycle, report.filter.category
    ));
    output.push_str(&format_expense_list(&report.filtered_expenses, settings));

    output
}

/// Category totals as a bar chart with their share of the whole
pub fn format_category_chart(report: &DashboardReport, settings: &Settings) -> String {
    let shares = report.category_shares();
    if shares.is_empty() {
        return "No expenses to chart.".to_string();
    }

    let symbol = &settings.currency_symbol;
    let label_width = shares
        .iter()
        .map(|s| s.category.label().chars().count())
        .max()
        .unwrap_or(0);
    let max = shares.iter().map(|s| s.total).fold(0.0, f64::max);

    let mut output = String::from("Spending by category\n");
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    for share in &shares {
        output.push_str(&format!(
            "{:<label_width$}  {}  {} ({})\n",
            share.category.label(),
            format_bar(share.total, max, BAR_WIDTH),
            format_money(share.total, symbol),
            format_percentage(share.percentage),
            label_width = label_width,
        ));
    }

    output
}

/// One line per day of the month, bars scaled to the busiest day
pub fn format_daily_chart(distribution: &DailyDistribution, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let max = distribution.max();

    let title = NaiveDate::from_ymd_opt(distribution.year(), distribution.month(), 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", distribution.year(), distribution.month()));

    let mut output = format!("Daily spending for {}\n", title);
    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');

    for (day, amount) in distribution.iter() {
        let value = if amount == 0.0 {
            String::new()
        } else {
            format_money(amount, symbol)
        };
        output.push_str(&format!(
            "{:>2}  {}  {}\n",
            day,
            format_bar(amount, max, BAR_WIDTH),
            value
        ));
    }

    output.push_str(&separator(LINE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total: {}\n",
        format_money(distribution.total(), symbol)
    ));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        BillingCycle, CycleFilter, Expense, ExpenseCategory, ExpenseFilter, ExpenseId, NewExpense,
    };

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<Expense> {
        vec![
            NewExpense::new("Rent", 900.0, BillingCycle::Monthly, ExpenseCategory::House, date(2024, 1, 1))
                .with_id(ExpenseId::new(1)),
            NewExpense::new("Insurance", 300.0, BillingCycle::Yearly, ExpenseCategory::Insurance, date(2023, 2, 15))
                .with_id(ExpenseId::new(2)),
        ]
    }

    #[test]
    fn test_format_dashboard() {
        let report = DashboardReport::generate(&sample(), &ExpenseFilter::default(), date(2025, 2, 1));
        let output = format_dashboard(&report, &Settings::default());

        assert!(output.contains("Dashboard for February 2025"));
        assert!(output.contains("Total monthly cost:         €925.00"));
        assert!(output.contains("Monthly cost (no yearly):   €900.00"));
        assert!(output.contains("One-time payments:          €0.00"));
        assert!(output.contains("Due this month:             €1200.00"));
        assert!(output.contains("Filter: ALL / ALL"));
        assert!(output.contains("Insurance"));
    }

    #[test]
    fn test_headline_amounts_line_up() {
        let report = DashboardReport::generate(&sample(), &ExpenseFilter::default(), date(2025, 2, 1));
        let output = format_dashboard(&report, &Settings::default());

        let columns: Vec<usize> = output
            .lines()
            .skip(2)
            .take(4)
            .map(|line| line.chars().position(|c| c == '€').unwrap())
            .collect();
        assert_eq!(columns.len(), 4);
        assert!(columns.iter().all(|&c| c == columns[0]));
    }

    #[test]
    fn test_dashboard_shows_filtered_list_only() {
        let filter = ExpenseFilter::default().with_cycle(CycleFilter::Yearly);
        let report = DashboardReport::generate(&sample(), &filter, date(2025, 2, 1));
        let output = format_dashboard(&report, &Settings::default());

        assert!(output.contains("Filter: Yearly / ALL"));
        assert!(!output.contains("Rent"));
        // Aggregates ignore the filter
        assert!(output.contains("€925.00"));
    }

    #[test]
    fn test_format_category_chart() {
        let report = DashboardReport::generate(&sample(), &ExpenseFilter::default(), date(2025, 2, 1));
        let output = format_category_chart(&report, &Settings::default());

        assert!(output.contains("House"));
        assert!(output.contains("€900.00 (75%)"));
        assert!(output.contains("€300.00 (25%)"));
        // Largest first
        assert!(output.find("House").unwrap() < output.find("Insurance").unwrap());
    }

    #[test]
    fn test_format_category_chart_empty() {
        let report = DashboardReport::generate(&[], &ExpenseFilter::default(), date(2025, 2, 1));
        assert_eq!(
            format_category_chart(&report, &Settings::default()),
            "No expenses to chart."
        );
    }

    #[test]
    fn test_format_daily_chart() {
        let report = DashboardReport::generate(&sample(), &ExpenseFilter::default(), date(2025, 2, 1));
        let output = format_daily_chart(&report.daily_distribution, &Settings::default());

        assert!(output.contains("Daily spending for February 2025"));
        assert!(output.contains(" 1  "));
        assert!(output.contains("28  "));
        assert!(!output.contains("29  "));
        assert!(output.contains("€900.00"));
        assert!(output.contains("Total: €1200.00"));
    }
}
