//! Leave policy configuration types.

use serde::{Deserialize, Serialize};

use crate::models::{LeaveBalance, LeaveType};

/// Descriptive metadata for a leave policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Human-readable policy name.
    pub name: String,
}

/// The annual allowance for one leave type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveAllowance {
    /// The leave type the allowance applies to.
    pub leave_type: LeaveType,
    /// Days allocated per year.
    pub annual_days: u32,
}

/// A complete leave policy: metadata plus one allowance per leave type.
///
/// The default policy mirrors the standard Dayflow allocation: 24 days of
/// paid time off and 7 days of sick leave per year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeavePolicy {
    /// Descriptive metadata.
    pub policy: PolicyMetadata,
    /// Annual allowances, one entry per leave type.
    pub allowances: Vec<LeaveAllowance>,
}

impl LeavePolicy {
    /// Returns the annual allowance for the given leave type, if the
    /// policy defines one.
    pub fn annual_days(&self, leave_type: LeaveType) -> Option<u32> {
        self.allowances
            .iter()
            .find(|a| a.leave_type == leave_type)
            .map(|a| a.annual_days)
    }

    /// Builds the fresh balances a newly registered employee starts with.
    pub fn seed_balances(&self) -> Vec<LeaveBalance> {
        self.allowances
            .iter()
            .map(|a| LeaveBalance::new(a.leave_type, a.annual_days))
            .collect()
    }
}

impl Default for LeavePolicy {
    fn default() -> Self {
        Self {
            policy: PolicyMetadata {
                name: "Dayflow standard leave policy".to_string(),
            },
            allowances: vec![
                LeaveAllowance {
                    leave_type: LeaveType::PaidTimeOff,
                    annual_days: 24,
                },
                LeaveAllowance {
                    leave_type: LeaveType::Sick,
                    annual_days: 7,
                },
            ],
        }
    }
}
