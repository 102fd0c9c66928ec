//! Check-in and check-out operations.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, AttendanceStatus};
use crate::store::{AttendanceStore, EmployeeDirectory};

/// Records a check-in, creating the day's attendance record.
///
/// The new record starts in the `working` status and moves to `present`
/// when the matching check-out arrives.
///
/// # Errors
///
/// - Employee-not-found error when `employee_id` does not resolve.
/// - Validation error when a record already exists for the day (at most
///   one record per `(employee_id, date)`).
pub fn record_check_in(
    directory: &dyn EmployeeDirectory,
    attendance: &dyn AttendanceStore,
    employee_id: &str,
    date: NaiveDate,
    time: NaiveTime,
) -> EngineResult<AttendanceRecord> {
    directory
        .get_by_id(employee_id)?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            id: employee_id.to_string(),
        })?;

    attendance.insert(AttendanceRecord {
        employee_id: employee_id.to_string(),
        date,
        check_in: Some(time),
        check_out: None,
        status: AttendanceStatus::Working,
    })
}

/// Records a check-out, completing the day's record exactly once.
///
/// # Errors
///
/// Validation error when no check-in exists for the day, when the record
/// is already checked out, or when `time` is not after the check-in time.
pub fn record_check_out(
    attendance: &dyn AttendanceStore,
    employee_id: &str,
    date: NaiveDate,
    time: NaiveTime,
) -> EngineResult<AttendanceRecord> {
    let records = attendance.find(employee_id, date, date)?;
    let record = records.first().ok_or_else(|| {
        EngineError::validation(format!(
            "no check-in found for '{}' on {}",
            employee_id, date
        ))
    })?;

    if let Some(check_in) = record.check_in {
        if time <= check_in {
            return Err(EngineError::validation(format!(
                "check-out {} must be after check-in {}",
                time, check_in
            )));
        }
    }

    attendance.set_check_out(employee_id, date, time)
}
