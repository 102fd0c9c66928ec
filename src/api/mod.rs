//! HTTP API module for the Dayflow engine.
//!
//! This module provides the REST endpoints for leave submission and
//! decisions, payroll calculation and attendance tracking.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    CheckInRequest, CheckOutRequest, DecideLeaveRequest, PeriodQuery, SubmitLeaveRequest,
};
pub use response::ApiError;
pub use state::AppState;
