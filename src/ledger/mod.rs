//! Leave ledger for the Dayflow engine.
//!
//! This module owns per-employee, per-type leave balances and the request
//! lifecycle: submission with inclusive day counting, the exactly-once
//! pending to approved/rejected transition with its atomic balance debit,
//! and display-ordered listing.

mod decide;
mod listing;
mod submit;

pub use decide::decide;
pub use listing::{balance_overview, list_requests};
pub use submit::{inclusive_days, submit_request};
