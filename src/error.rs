//! Error types for the Dayflow engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur in the leave ledger, the payroll
//! calculator and the attendance tracker.

use thiserror::Error;
use uuid::Uuid;

use crate::models::{LeaveStatus, LeaveType};

/// The main error type for the Dayflow engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use dayflow_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "emp_404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: emp_404");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input failed validation (malformed dates, missing required comment,
    /// insufficient balance at approval time, and similar).
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of what failed validation.
        message: String,
    },

    /// No employee exists with the given identifier.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee identifier that did not resolve.
        id: String,
    },

    /// No leave request exists with the given identifier.
    #[error("Leave request not found: {id}")]
    RequestNotFound {
        /// The request identifier that did not resolve.
        id: Uuid,
    },

    /// No leave balance exists for the given employee and leave type.
    #[error("No {leave_type} balance for employee '{employee_id}'")]
    BalanceNotFound {
        /// The employee whose balance was requested.
        employee_id: String,
        /// The leave type whose balance was requested.
        leave_type: LeaveType,
    },

    /// A lifecycle transition was attempted on a request that is no longer
    /// pending. Terminal statuses never transition again.
    #[error("Leave request {id} is already {status}")]
    InvalidState {
        /// The request on which the transition was attempted.
        id: Uuid,
        /// The terminal status the request already holds.
        status: LeaveStatus,
    },

    /// The underlying store could not service the call. Deterministic
    /// validation failures never use this kind; it is reserved for
    /// transient store faults that the caller may retry.
    #[error("Store unavailable: {message}")]
    StoreUnavailable {
        /// A description of the store fault.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

impl EngineError {
    /// Convenience constructor for validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
