//! Money Tracker - personal recurring expense tracker
//!
//! This library provides the core of the money tracker: expense records,
//! projection of recurring payments onto the days of a month, aggregate
//! views for the dashboard and a two-part list filter.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `log`: Diagnostic logging setup
//! - `models`: Expenses, billing cycles, categories and filters
//! - `storage`: JSON file storage with snapshot subscriptions
//! - `services`: Mutations and the dashboard view state
//! - `reports`: Recurrence projection and aggregation
//! - `audit`: Audit logging system
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use money_tracker::config::TrackerPaths;
//! use money_tracker::services::DashboardView;
//! use money_tracker::storage::Storage;
//!
//! let mut storage = Storage::new(TrackerPaths::new()?)?;
//! storage.load_all()?;
//! let view = DashboardView::attach_today(&storage)?;
//! println!("{:?}", view.monthly_equivalent());
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod log;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::TrackerError;
