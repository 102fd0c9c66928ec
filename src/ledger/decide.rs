//! Administrative decisions on pending leave requests.

use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{LeaveDecision, LeaveRequest, LeaveStatus};
use crate::store::LeaveStore;

/// Applies an administrative decision to a pending request.
///
/// Approval debits the employee's balance for the request's leave type by
/// `days`; the status transition and the debit are applied as one atomic
/// unit by the store. Rejection requires a non-empty `admin_comment` and
/// never touches the balance.
///
/// The transition is exactly-once: a request that has already reached a
/// terminal status fails with an invalid-state error, including when two
/// decisions race on the same request.
///
/// # Errors
///
/// - Request-not-found error when `request_id` does not resolve.
/// - Invalid-state error when the request is no longer `pending`.
/// - Validation error when rejecting without a comment, or when approving
///   a request whose days exceed the available balance (the request stays
///   `pending` in that case).
pub fn decide(
    store: &dyn LeaveStore,
    request_id: Uuid,
    decision: LeaveDecision,
    admin_comment: Option<&str>,
) -> EngineResult<LeaveRequest> {
    match decision {
        LeaveDecision::Rejected => {
            let comment = admin_comment.map(str::trim).unwrap_or("");
            if comment.is_empty() {
                return Err(EngineError::validation(
                    "rejecting a leave request requires an admin comment",
                ));
            }
            store.finalize_request(
                request_id,
                LeaveStatus::Rejected,
                Some(comment.to_string()),
                0,
            )
        }
        LeaveDecision::Approved => {
            // The day count is immutable after submission, so reading it
            // outside the compare-and-set is safe; only the status guards
            // the transition.
            let request = store
                .get_request(request_id)?
                .ok_or(EngineError::RequestNotFound { id: request_id })?;
            let comment = admin_comment
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string);
            store.finalize_request(
                request_id,
                LeaveStatus::Approved,
                comment,
                i64::from(request.days),
            )
        }
    }
}
