//! Recurrence projection
//!
//! Maps a single expense onto the calendar days of one month according to its
//! billing cycle.
//!
//! | Cycle     | Contributes in the reference month when...          | On day                         |
//! |-----------|------------------------------------------------------|--------------------------------|
//! | One time  | first payment falls in the same month and year      | first payment day              |
//! | Monthly   | always                                               | first payment day, clamped     |
//! | Yearly    | first payment month equals the reference month      | first payment day, clamped     |
//! | Weekly    | a 7-day step from the first payment lands in month  | every such step                |
//!
//! Clamping maps a day past the end of the month onto its last day (the 31st
//! becomes the 30th in April, the 28th or 29th in February).
//!
//! Monthly and yearly expenses are projected even when their first payment
//! lies after the reference month.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::{BillingCycle, Expense};

/// Number of days in the given month (28 to 31)
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .and_then(|first_of_next| first_of_next.pred_opt())
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Days of the reference month on which the expense is charged, in ascending order
pub fn payment_days(expense: &Expense, reference: NaiveDate) -> Vec<u32> {
    let year = reference.year();
    let month = reference.month();
    let last_day = days_in_month(year, month);
    let first = expense.first_payment_date;

    match expense.billing_cycle {
        BillingCycle::OneTime => {
            if first.year() == year && first.month() == month {
                vec![first.day()]
            } else {
                Vec::new()
            }
        }
        BillingCycle::Monthly => vec![first.day().min(last_day)],
        BillingCycle::Yearly => {
            if first.month() == month {
                vec![first.day().min(last_day)]
            } else {
                Vec::new()
            }
        }
        BillingCycle::Weekly => weekly_occurrences(first, year, month)
            .into_iter()
            .map(|date| date.day())
            .collect(),
    }
}

/// Project an expense onto the reference month: day of month -> amount charged.
///
/// Days without a charge are absent from the map.
pub fn project_onto_month(expense: &Expense, reference: NaiveDate) -> BTreeMap<u32, f64> {
    let mut contributions = BTreeMap::new();
    for day in payment_days(expense, reference) {
        *contributions.entry(day).or_insert(0.0) += expense.cost;
    }
    contributions
}

/// Weekly payment dates that fall inside the given month
fn weekly_occurrences(first: NaiveDate, year: i32, month: u32) -> Vec<NaiveDate> {
    let Some(month_start) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return Vec::new();
    };

    // Jump straight to the first occurrence on or after the 1st
    let mut date = if first < month_start {
        let gap = (month_start - first).num_days();
        let weeks = (gap + 6) / 7;
        match first.checked_add_signed(Duration::weeks(weeks)) {
            Some(date) => date,
            None => return Vec::new(),
        }
    } else {
        first
    };

    let mut dates = Vec::new();
    while date.year() == year && date.month() == month {
        dates.push(date);
        date = match date.checked_add_signed(Duration::weeks(1)) {
            Some(next) => next,
            None => break,
        };
    }
    dates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseCategory, ExpenseId, NewExpense};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(cost: f64, cycle: BillingCycle, first: NaiveDate) -> Expense {
        NewExpense::new("test", cost, cycle, ExpenseCategory::House, first).with_id(ExpenseId::new(1))
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_one_time_in_reference_month() {
        let e = expense(50.0, BillingCycle::OneTime, date(2025, 3, 9));
        let projected = project_onto_month(&e, date(2025, 3, 20));
        assert_eq!(projected.len(), 1);
        assert_eq!(projected.get(&9), Some(&50.0));
    }

    #[test]
    fn test_one_time_other_month_or_year_contributes_nothing() {
        let e = expense(50.0, BillingCycle::OneTime, date(2025, 3, 9));
        assert!(project_onto_month(&e, date(2025, 4, 1)).is_empty());
        assert!(project_onto_month(&e, date(2024, 3, 1)).is_empty());
    }

    #[test]
    fn test_monthly_every_month() {
        let e = expense(20.0, BillingCycle::Monthly, date(2023, 6, 15));
        for month in 1..=12 {
            let projected = project_onto_month(&e, date(2025, month, 1));
            assert_eq!(projected.get(&15), Some(&20.0));
        }
    }

    #[test]
    fn test_monthly_clamps_to_month_end() {
        let e = expense(100.0, BillingCycle::Monthly, date(2025, 1, 31));

        let april = project_onto_month(&e, date(2025, 4, 10));
        assert_eq!(april.get(&30), Some(&100.0));
        assert!(!april.contains_key(&31));
        assert!(!april.contains_key(&1));

        assert_eq!(project_onto_month(&e, date(2025, 2, 1)).get(&28), Some(&100.0));
        assert_eq!(project_onto_month(&e, date(2024, 2, 1)).get(&29), Some(&100.0));
    }

    #[test]
    fn test_monthly_projects_before_first_payment() {
        let e = expense(10.0, BillingCycle::Monthly, date(2030, 1, 5));
        assert_eq!(project_onto_month(&e, date(2025, 7, 1)).get(&5), Some(&10.0));
    }

    #[test]
    fn test_yearly_matches_month_only() {
        let e = expense(1200.0, BillingCycle::Yearly, date(2020, 8, 12));
        assert_eq!(project_onto_month(&e, date(2025, 8, 1)).get(&12), Some(&1200.0));
        assert_eq!(project_onto_month(&e, date(2019, 8, 1)).get(&12), Some(&1200.0));
        assert!(project_onto_month(&e, date(2025, 9, 1)).is_empty());
    }

    #[test]
    fn test_yearly_leap_day_clamps() {
        let e = expense(99.0, BillingCycle::Yearly, date(2024, 2, 29));
        assert_eq!(project_onto_month(&e, date(2025, 2, 1)).get(&28), Some(&99.0));
        assert_eq!(project_onto_month(&e, date(2028, 2, 1)).get(&29), Some(&99.0));
    }

    #[test]
    fn test_weekly_from_earlier_month() {
        // 2025-01-06 is a Monday; February 2025 Mondays are 3, 10, 17, 24
        let e = expense(52.0, BillingCycle::Weekly, date(2025, 1, 6));
        let days = payment_days(&e, date(2025, 2, 14));
        assert_eq!(days, vec![3, 10, 17, 24]);
    }

    #[test]
    fn test_weekly_starting_mid_month() {
        let e = expense(5.0, BillingCycle::Weekly, date(2025, 3, 20));
        assert_eq!(payment_days(&e, date(2025, 3, 1)), vec![20, 27]);
    }

    #[test]
    fn test_weekly_five_occurrences() {
        // March 2025 starts on a Saturday: Saturdays 1, 8, 15, 22, 29
        let e = expense(5.0, BillingCycle::Weekly, date(2024, 11, 2));
        assert_eq!(payment_days(&e, date(2025, 3, 1)), vec![1, 8, 15, 22, 29]);
    }

    #[test]
    fn test_weekly_starting_after_reference_month() {
        let e = expense(5.0, BillingCycle::Weekly, date(2025, 6, 1));
        assert!(payment_days(&e, date(2025, 5, 1)).is_empty());
    }

    #[test]
    fn test_weekly_across_year_boundary() {
        // 2024-12-30 is a Monday; January 2025 Mondays are 6, 13, 20, 27
        let e = expense(5.0, BillingCycle::Weekly, date(2024, 12, 30));
        assert_eq!(payment_days(&e, date(2025, 1, 31)), vec![6, 13, 20, 27]);
    }

    #[test]
    fn test_weekly_from_distant_past() {
        let e = expense(5.0, BillingCycle::Weekly, date(1970, 1, 1));
        // 1970-01-01 was a Thursday; February 2025 Thursdays are 6, 13, 20, 27
        assert_eq!(payment_days(&e, date(2025, 2, 1)), vec![6, 13, 20, 27]);
    }

    #[test]
    fn test_non_positive_cost_contributes_as_is() {
        let e = expense(-3.0, BillingCycle::Monthly, date(2025, 1, 2));
        assert_eq!(project_onto_month(&e, date(2025, 1, 1)).get(&2), Some(&-3.0));
    }
}
