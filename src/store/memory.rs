//! In-memory store implementation.
//!
//! Backs the service binary and the test suite. One mutex guards all
//! collections, so the compare-and-set in [`LeaveStore::finalize_request`]
//! and the balance read-modify-write in [`LeaveStore::apply_delta`] are
//! single atomic units by construction.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::config::LeavePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, AttendanceStatus, Employee, LeaveBalance, LeaveRequest, LeaveStatus,
    LeaveType,
};

use super::contracts::{AttendanceStore, EmployeeDirectory, LeaveStore};

#[derive(Default)]
struct Inner {
    employees: HashMap<String, Employee>,
    attendance: HashMap<(String, NaiveDate), AttendanceRecord>,
    requests: Vec<LeaveRequest>,
    balances: HashMap<(String, LeaveType), LeaveBalance>,
}

/// An in-memory store implementing all three engine contracts.
///
/// Constructed at startup from the leave policy; inserting an employee
/// seeds one balance per policy allowance.
///
/// # Example
///
/// ```
/// use dayflow_engine::config::LeavePolicy;
/// use dayflow_engine::models::{Employee, LeaveType};
/// use dayflow_engine::store::{InMemoryStore, LeaveStore};
/// use rust_decimal::Decimal;
///
/// let store = InMemoryStore::new(LeavePolicy::default());
/// store
///     .add_employee(Employee {
///         id: "emp_001".to_string(),
///         full_name: "Sarah Johnson".to_string(),
///         department: "Engineering".to_string(),
///         monthly_salary: Decimal::from(3000),
///     })
///     .unwrap();
///
/// let balance = store
///     .balance("emp_001", LeaveType::PaidTimeOff)
///     .unwrap()
///     .unwrap();
/// assert_eq!(balance.available, 24);
/// ```
pub struct InMemoryStore {
    policy: LeavePolicy,
    inner: Mutex<Inner>,
}

impl InMemoryStore {
    /// Creates an empty store seeded with the given leave policy.
    pub fn new(policy: LeavePolicy) -> Self {
        Self {
            policy,
            inner: Mutex::new(Inner::default()),
        }
    }

    /// Registers an employee and seeds their leave balances from the
    /// policy. Fails with a validation error on a duplicate id.
    pub fn add_employee(&self, employee: Employee) -> EngineResult<Employee> {
        let mut inner = self.lock()?;
        if inner.employees.contains_key(&employee.id) {
            return Err(EngineError::validation(format!(
                "employee '{}' already exists",
                employee.id
            )));
        }
        for balance in self.policy.seed_balances() {
            inner
                .balances
                .insert((employee.id.clone(), balance.leave_type), balance);
        }
        inner
            .employees
            .insert(employee.id.clone(), employee.clone());
        Ok(employee)
    }

    fn lock(&self) -> EngineResult<MutexGuard<'_, Inner>> {
        self.inner.lock().map_err(|_| EngineError::StoreUnavailable {
            message: "store lock poisoned".to_string(),
        })
    }
}

impl EmployeeDirectory for InMemoryStore {
    fn get_by_id(&self, id: &str) -> EngineResult<Option<Employee>> {
        let inner = self.lock()?;
        Ok(inner.employees.get(id).cloned())
    }
}

impl AttendanceStore for InMemoryStore {
    fn find(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> EngineResult<Vec<AttendanceRecord>> {
        let inner = self.lock()?;
        let mut records: Vec<AttendanceRecord> = inner
            .attendance
            .values()
            .filter(|r| r.employee_id == employee_id && r.date >= start && r.date <= end)
            .cloned()
            .collect();
        records.sort_by_key(|r| r.date);
        Ok(records)
    }

    fn count_by_status(
        &self,
        employee_id: &str,
        start: NaiveDate,
        end: NaiveDate,
        status: AttendanceStatus,
    ) -> EngineResult<u32> {
        let inner = self.lock()?;
        let count = inner
            .attendance
            .values()
            .filter(|r| {
                r.employee_id == employee_id
                    && r.date >= start
                    && r.date <= end
                    && r.status == status
            })
            .count();
        Ok(count as u32)
    }

    fn insert(&self, record: AttendanceRecord) -> EngineResult<AttendanceRecord> {
        let mut inner = self.lock()?;
        let key = (record.employee_id.clone(), record.date);
        if inner.attendance.contains_key(&key) {
            return Err(EngineError::validation(format!(
                "attendance record already exists for '{}' on {}",
                record.employee_id, record.date
            )));
        }
        inner.attendance.insert(key, record.clone());
        Ok(record)
    }

    fn set_check_out(
        &self,
        employee_id: &str,
        date: NaiveDate,
        time: NaiveTime,
    ) -> EngineResult<AttendanceRecord> {
        let mut inner = self.lock()?;
        let key = (employee_id.to_string(), date);
        let record = inner.attendance.get_mut(&key).ok_or_else(|| {
            EngineError::validation(format!(
                "no check-in found for '{}' on {}",
                employee_id, date
            ))
        })?;
        if record.check_out.is_some() {
            return Err(EngineError::validation(format!(
                "'{}' already checked out on {}",
                employee_id, date
            )));
        }
        record.check_out = Some(time);
        record.status = AttendanceStatus::Present;
        Ok(record.clone())
    }
}

impl LeaveStore for InMemoryStore {
    fn insert_request(&self, request: LeaveRequest) -> EngineResult<LeaveRequest> {
        let mut inner = self.lock()?;
        inner.requests.push(request.clone());
        Ok(request)
    }

    fn get_request(&self, id: Uuid) -> EngineResult<Option<LeaveRequest>> {
        let inner = self.lock()?;
        Ok(inner.requests.iter().find(|r| r.id == id).cloned())
    }

    fn list_requests(&self, employee_id: &str) -> EngineResult<Vec<LeaveRequest>> {
        let inner = self.lock()?;
        Ok(inner
            .requests
            .iter()
            .filter(|r| r.employee_id == employee_id)
            .cloned()
            .collect())
    }

    fn balance(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
    ) -> EngineResult<Option<LeaveBalance>> {
        let inner = self.lock()?;
        Ok(inner
            .balances
            .get(&(employee_id.to_string(), leave_type))
            .copied())
    }

    fn balances(&self, employee_id: &str) -> EngineResult<Vec<LeaveBalance>> {
        let inner = self.lock()?;
        let mut balances: Vec<LeaveBalance> = inner
            .balances
            .iter()
            .filter(|((id, _), _)| id == employee_id)
            .map(|(_, balance)| *balance)
            .collect();
        balances.sort_by_key(|b| b.leave_type.to_string());
        Ok(balances)
    }

    fn apply_delta(
        &self,
        employee_id: &str,
        leave_type: LeaveType,
        used_delta: i64,
    ) -> EngineResult<LeaveBalance> {
        let mut inner = self.lock()?;
        apply_delta_locked(&mut inner, employee_id, leave_type, used_delta)
    }

    fn finalize_request(
        &self,
        id: Uuid,
        status: LeaveStatus,
        admin_comment: Option<String>,
        used_delta: i64,
    ) -> EngineResult<LeaveRequest> {
        let mut inner = self.lock()?;

        let index = inner
            .requests
            .iter()
            .position(|r| r.id == id)
            .ok_or(EngineError::RequestNotFound { id })?;

        // Compare-and-set: only a pending request may transition, and the
        // balance check happens before anything is mutated so a failed
        // approval leaves no trace.
        let current = &inner.requests[index];
        if !current.is_pending() {
            return Err(EngineError::InvalidState {
                id,
                status: current.status,
            });
        }

        let employee_id = current.employee_id.clone();
        let leave_type = current.leave_type;
        if used_delta != 0 {
            apply_delta_locked(&mut inner, &employee_id, leave_type, used_delta)?;
        }

        let request = &mut inner.requests[index];
        request.status = status;
        request.admin_comment = admin_comment;
        Ok(request.clone())
    }
}

fn apply_delta_locked(
    inner: &mut Inner,
    employee_id: &str,
    leave_type: LeaveType,
    used_delta: i64,
) -> EngineResult<LeaveBalance> {
    let key = (employee_id.to_string(), leave_type);
    let balance = inner
        .balances
        .get(&key)
        .ok_or_else(|| EngineError::BalanceNotFound {
            employee_id: employee_id.to_string(),
            leave_type,
        })?;
    let updated = balance.with_used_delta(used_delta).ok_or_else(|| {
        EngineError::validation(format!(
            "insufficient {} balance for '{}': {} available, delta {}",
            leave_type, employee_id, balance.available, used_delta
        ))
    })?;
    inner.balances.insert(key, updated);
    Ok(updated)
}
