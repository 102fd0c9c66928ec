//! Display-ordered views over the leave ledger.

use crate::error::EngineResult;
use crate::models::{LeaveBalance, LeaveRequest};
use crate::store::LeaveStore;

/// Returns an employee's requests ordered for display: pending requests
/// first, then historical (approved/rejected) ones, each group stable by
/// submission time.
pub fn list_requests(
    store: &dyn LeaveStore,
    employee_id: &str,
) -> EngineResult<Vec<LeaveRequest>> {
    let mut requests = store.list_requests(employee_id)?;
    // Stable sort: submission order within each group is preserved.
    requests.sort_by_key(|r| (r.status.is_terminal(), r.submitted_at));
    Ok(requests)
}

/// Returns all leave balances for an employee.
pub fn balance_overview(
    store: &dyn LeaveStore,
    employee_id: &str,
) -> EngineResult<Vec<LeaveBalance>> {
    store.balances(employee_id)
}
