//! Store contracts and the in-memory reference store.
//!
//! The ledger, payroll calculator and attendance tracker depend only on the
//! abstract contracts in this module, never on a concrete store. The
//! in-memory implementation backs the service binary and the test suite.

mod contracts;
mod memory;

pub use contracts::{AttendanceStore, EmployeeDirectory, LeaveStore};
pub use memory::InMemoryStore;
