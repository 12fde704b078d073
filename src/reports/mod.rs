//! Reports module for the money tracker
//!
//! Recurrence projection, aggregation and the combined dashboard report.

pub mod aggregate;
pub mod dashboard;
pub mod projection;

pub use aggregate::{
    category_share, category_totals, daily_distribution, monthly_equivalent,
    monthly_excluding_yearly, one_time_total, CategoryShare, DailyDistribution,
};
pub use dashboard::DashboardReport;
pub use projection::{days_in_month, payment_days, project_onto_month};
