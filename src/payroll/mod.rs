//! Payroll calculation for the Dayflow engine.
//!
//! This module derives a period payout for one employee from the monthly
//! base salary and the present-day count in the attendance store.

mod calculator;

pub use calculator::calculate;
