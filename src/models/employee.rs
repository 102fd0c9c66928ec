//! Employee model.
//!
//! This module defines the Employee struct representing a worker whose
//! attendance, leave and payroll the engine manages.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Represents an employee known to the payroll and leave engine.
///
/// Identity is immutable once created; the salary changes only through an
/// administrative action outside this engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's full name.
    pub full_name: String,
    /// The department the employee belongs to.
    pub department: String,
    /// The monthly base salary in whole-and-fractional currency units.
    pub monthly_salary: Decimal,
}
