//! Attendance tracking and aggregation for the Dayflow engine.
//!
//! This module covers the write side (check-in creates the day's record,
//! check-out completes it exactly once) and the read side (per-period
//! present/absent/on-leave counts).

mod summary;
mod tracker;

pub use summary::summarize;
pub use tracker::{record_check_in, record_check_out};
