//! Abstract store contracts consumed by the engine.
//!
//! Implementations must surface transient faults as
//! [`EngineError::StoreUnavailable`](crate::error::EngineError::StoreUnavailable);
//! every other error kind returned from these methods is a deterministic
//! validation or lookup failure that callers must not retry.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveBalance, LeaveRequest, LeaveStatus,
    LeaveType,
};

/// Read-only lookup of employee identity and salary data.
pub trait EmployeeDirectory: Send + Sync {
    /// Resolves an employee by identifier. `Ok(None)` means the id is
    /// unknown; errors are reserved for store faults.
    fn get_by_id(&self, id: &str) -> EngineResult<Option<Employee>>;
}

/// Storage of per-day attendance records.
pub trait AttendanceStore: Send + Sync {
    /// Returns the records for one employee whose date falls inside the
    /// inclusive `[start, end]` range.
    fn find(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>>;

    /// Counts the records for one employee inside the inclusive range that
    /// carry the given status.
    fn count_by_status(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        status: AttendanceStatus,
    ) -> EngineResult<u32>;

    /// Inserts a new record. Fails with a validation error when a record
    /// already exists for the `(employee_id, date)` key.
    fn insert(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord>;

    /// Sets the check-out time on the day's record, exactly once, and
    /// moves the status to `present`. Fails with a validation error when no
    /// record exists for the key or a check-out is already set.
    fn set_check_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord>;
}

/// Storage of leave requests and per-type balances.
pub trait LeaveStore: Send + Sync {
    /// Persists a freshly submitted request.
    fn insert_request(&self, request: LeaveRequest) -> EngineResult<LeaveRequest>;

    /// Resolves a request by identifier. `Ok(None)` means the id is
    /// unknown.
    fn get_request(&self, id: Uuid) -> EngineResult<Option<LeaveRequest>>;

    /// Returns all requests for one employee in submission order.
    fn list_requests(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>>;

    /// Returns the balance for one employee and leave type, if any.
    fn balance(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
    ) -> EngineResult<Option<LeaveBalance>>;

    /// Returns all balances for one employee.
    fn balances(&self, employee_id: &str) -> EngineResult<Vec<LeaveBalance>>;

    /// Atomically shifts the `used` counter of a balance by `used_delta`,
    /// keeping `available = total - used`. Fails with a validation error
    /// when the delta would break the balance invariant, and with a
    /// not-found error when no balance exists for the key.
    fn apply_delta(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        used_delta: i64,
    ) -> EngineResult<LeaveBalance>;

    /// Compare-and-set transition of a request out of `pending`.
    ///
    /// In one atomic unit: verifies the request is still `pending`, sets
    /// the terminal `status` and `admin_comment`, and applies `used_delta`
    /// to the matching balance. No concurrent reader may observe the status
    /// change without the balance change or vice versa. Exactly one of two
    /// racing calls wins; the loser gets an invalid-state error.
    fn finalize_request(
        &self,
        id: Uuid,
        status: LeaveStatus,
        admin_comment: Option<String>,
        used_delta: i64,
    ) -> EngineResult<LeaveRequest>;
}
