//! Period payout calculation.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceStatus, PayPeriod, PayrollResult, STANDARD_MONTH_DAYS};
use crate::store::{AttendanceStore, EmployeeDirectory};

/// Calculates the payout for one employee over one pay period.
///
/// The daily rate is the monthly salary divided by the fixed 30-day
/// standard month, and the payout is the daily rate multiplied by the
/// number of `present`-status attendance days whose date falls inside the
/// period. Both the displayed daily rate and the payout are rounded
/// half-up to whole currency units; intermediate math stays in `Decimal`.
///
/// The calculation is side-effect free and idempotent: repeated calls with
/// unchanged underlying data return identical output.
///
/// # Errors
///
/// Fails with an employee-not-found error when `employee_id` does not
/// resolve.
///
/// # Example
///
/// ```
/// use dayflow_engine::config::LeavePolicy;
/// use dayflow_engine::models::{Employee, PayPeriod};
/// use dayflow_engine::payroll::calculate;
/// use dayflow_engine::store::InMemoryStore;
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
/// let period = PayPeriod::new(1, 2026).unwrap();
/// let result = calculate(&store, &store, "emp_001", period).unwrap();
/// assert_eq!(result.daily_rate, Decimal::from(100));
/// assert_eq!(result.payout, Decimal::ZERO); // no present days recorded
/// ```
pub fn calculate(
    directory: &dyn EmployeeDirectory,
    attendance: &dyn AttendanceStore,
    employee_id: &str,
    period: PayPeriod,
) -> EngineResult<PayrollResult> {
    let employee = directory
        .get_by_id(employee_id)?
        .ok_or_else(|| EngineError::EmployeeNotFound {
            id: employee_id.to_string(),
        })?;

    let (start, end) = period.date_range();
    let present_days =
        attendance.count_by_status(employee_id, start, end, AttendanceStatus::Present)?;

    let daily_rate = employee.monthly_salary / STANDARD_MONTH_DAYS;
    let payout = (daily_rate * Decimal::from(present_days))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    Ok(PayrollResult {
        employee_id: employee.id,
        employee_name: employee.full_name,
        period: period.label(),
        base_salary: employee.monthly_salary,
        present_days,
        daily_rate: daily_rate.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
        payout,
    })
}
