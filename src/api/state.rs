//! Application state for the Dayflow engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::store::{AttendanceStore, EmployeeDirectory, InMemoryStore, LeaveStore};

/// Shared application state.
///
/// Holds the store contracts the engine depends on. Handlers never touch a
/// concrete store; the state is assembled once at startup and torn down
/// with the process.
#[derive(Clone)]
pub struct AppState {
    directory: Arc<dyn EmployeeDirectory>,
    attendance: Arc<dyn AttendanceStore>,
    leave: Arc<dyn LeaveStore>,
}

impl AppState {
    /// Creates a new application state from individual store contracts.
    pub fn new(
        directory: Arc<dyn EmployeeDirectory>,
        attendance: Arc<dyn AttendanceStore>,
        leave: Arc<dyn LeaveStore>,
    ) -> Self {
        Self {
            directory,
            attendance,
            leave,
        }
    }

    /// Creates an application state backed entirely by one in-memory
    /// store.
    pub fn with_store(store: Arc<InMemoryStore>) -> Self {
        let directory: Arc<dyn EmployeeDirectory> = store.clone();
        let attendance: Arc<dyn AttendanceStore> = store.clone();
        let leave: Arc<dyn LeaveStore> = store;
        Self::new(directory, attendance, leave)
    }

    /// Returns the employee directory contract.
    pub fn directory(&self) -> &dyn EmployeeDirectory {
        self.directory.as_ref()
    }

    /// Returns the attendance store contract.
    pub fn attendance(&self) -> &dyn AttendanceStore {
        self.attendance.as_ref()
    }

    /// Returns the leave store contract.
    pub fn leave(&self) -> &dyn LeaveStore {
        self.leave.as_ref()
    }
}
