//! Argument parsing shared by the command handlers

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};
use crate::models::{BillingCycle, CategoryFilter, CycleFilter, ExpenseCategory, ExpenseId};

/// Parse an expense id, with or without the leading '#'
pub fn parse_id(s: &str) -> TrackerResult<ExpenseId> {
    s.parse()
        .map_err(|_| TrackerError::Validation(format!("Invalid expense id '{}'", s)))
}

/// Parse a date string or return today's date
pub fn parse_date_or_today(date_str: Option<&str>) -> TrackerResult<NaiveDate> {
    match date_str {
        Some(date_str) => parse_date(date_str),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

pub fn parse_date(date_str: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(date_str.trim(), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid date format: '{}'. Use YYYY-MM-DD",
            date_str
        ))
    })
}

/// Parse "YYYY-MM" into the first day of that month
pub fn parse_month(month_str: &str) -> TrackerResult<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", month_str.trim()), "%Y-%m-%d").map_err(|_| {
        TrackerError::Validation(format!(
            "Invalid month format: '{}'. Use YYYY-MM",
            month_str
        ))
    })
}

pub fn parse_cycle(s: &str) -> TrackerResult<BillingCycle> {
    BillingCycle::parse(s).ok_or_else(|| {
        TrackerError::Validation(format!(
            "Unknown billing cycle '{}'. Valid options: one-time, weekly, monthly, yearly",
            s
        ))
    })
}

pub fn parse_category(s: &str) -> TrackerResult<ExpenseCategory> {
    ExpenseCategory::parse(s).ok_or_else(|| {
        let valid: Vec<_> = ExpenseCategory::all().iter().map(|c| c.label()).collect();
        TrackerError::Validation(format!(
            "Unknown category '{}'. Valid options: {}",
            s,
            valid.join(", ")
        ))
    })
}

pub fn parse_cycle_filter(s: &str) -> TrackerResult<CycleFilter> {
    CycleFilter::parse(s).ok_or_else(|| {
        TrackerError::Validation(format!(
            "Unknown cycle filter '{}'. Valid options: all, monthly, yearly, one-time",
            s
        ))
    })
}

/// Category filter from user input.
///
/// Known categories are normalized to their label; anything else is kept
/// verbatim and simply matches nothing.
pub fn category_filter(s: Option<&str>) -> CategoryFilter {
    match s.map(|s| (s, ExpenseCategory::parse(s))) {
        None => CategoryFilter::All,
        Some((_, Some(category))) => CategoryFilter::category(category),
        Some((raw, None)) => CategoryFilter::from_label(Some(raw.trim())),
    }
}
