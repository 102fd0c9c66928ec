//! Core data models for the Dayflow engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod employee;
mod leave;
mod payroll;

pub use attendance::{AttendanceRecord, AttendanceStatus, AttendanceSummary};
pub use employee::Employee;
pub use leave::{LeaveBalance, LeaveDecision, LeaveRequest, LeaveStatus, LeaveType};
pub use payroll::{PayPeriod, PayrollResult, STANDARD_MONTH_DAYS};
