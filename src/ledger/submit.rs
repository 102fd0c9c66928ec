//! Leave request submission.

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveRequest, LeaveStatus, LeaveType};
use crate::store::{EmployeeDirectory, LeaveStore};

/// Counts the days in the inclusive `[start, end]` range.
///
/// A single-day request (`start == end`) counts as exactly 1 day.
///
/// # Errors
///
/// Fails with a validation error when `end` is before `start`.
///
/// # Examples
///
/// ```
/// use dayflow_engine::ledger::inclusive_days;
/// use chrono::NaiveDate;
///
/// let start = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let end = NaiveDate::from_ymd_opt(2026, 1, 7).unwrap();
/// assert_eq!(inclusive_days(start, end).unwrap(), 3);
/// assert_eq!(inclusive_days(start, start).unwrap(), 1);
/// ```
pub fn inclusive_days(start: NaiveDate, end: NaiveDate) -> EngineResult<u32> {
    if end < start {
        return Err(EngineError::validation(format!(
            "end_date {} is before start_date {}",
            end, start
        )));
    }
    Ok((end - start).num_days() as u32 + 1)
}

/// Submits a new leave request for an employee.
///
/// The request is created in the `pending` state. No balance is checked or
/// mutated at submission time; sufficiency is enforced when the request is
/// approved.
///
/// # Errors
///
/// - Validation error when `end` is before `start`.
/// - Employee-not-found error when `employee_id` does not resolve.
pub fn submit_request(
    directory: &dyn EmployeeDirectory,
    store: &dyn LeaveStore,
    employee_id: &str,
    leave_type: LeaveType,
    start_date: NaiveDate,
    end_date: NaiveDate,
    reason: &str,
) -> EngineResult<LeaveRequest> {
    let days = inclusive_days(start_date, end_date)?;

    directory
        .get_by_id(employee_id)?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            id: employee_id.to_string(),
        })?;

    let request = LeaveRequest {
        id: Uuid::new_v4(),
        employee_id: employee_id.to_string(),
        leave_type,
        start_date,
        end_date,
        days,
        status: LeaveStatus::Pending,
        reason: reason.to_string(),
        admin_comment: None,
        submitted_at: Utc::now(),
    };

    store.insert_request(request)
}
