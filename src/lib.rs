//! Payroll and Leave Ledger Engine for the Dayflow HR platform
//!
//! This crate provides the calculation core of Dayflow: leave balance
//! bookkeeping with a pending/approved/rejected request lifecycle, monthly
//! payroll calculation from attendance data, and read-side attendance
//! aggregation.

#![warn(missing_docs)]

pub mod api;
pub mod attendance;
pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod payroll;
pub mod store;
