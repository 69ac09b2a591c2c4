//! Statistics and dashboard reporting.
//!
//! Aggregation is split in two: `aggregate` holds pure functions over
//! snapshots of records (unit-testable without a database), and
//! `dashboard` orchestrates loading the snapshots.

pub mod aggregate;
pub mod dashboard;

pub use dashboard::DashboardService;
