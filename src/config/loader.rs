//! Configuration loading functionality.
//!
//! This module provides the [`PolicyLoader`] type for loading the leave
//! policy and seed employees from YAML files.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::types::LeavePolicy;

#[derive(Debug, Deserialize)]
struct EmployeesFile {
    employees: Vec<Employee>,
}

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/dayflow/
/// ├── leave_policy.yaml   # Annual allowance per leave type
/// └── employees.yaml      # Optional seed employees for the directory
/// ```
///
/// # Example
///
/// ```no_run
/// use dayflow_engine::config::PolicyLoader;
/// use dayflow_engine::models::LeaveType;
///
/// let loader = PolicyLoader::load("./config/dayflow").unwrap();
/// let days = loader.policy().annual_days(LeaveType::PaidTimeOff);
/// println!("PTO allowance: {:?}", days);
/// ```
#[derive(Debug, Clone)]
pub struct PolicyLoader {
    policy: LeavePolicy,
    employees: Vec<Employee>,
}

impl PolicyLoader {
    /// Loads configuration from the specified directory.
    ///
    /// `leave_policy.yaml` is required; `employees.yaml` is optional and
    /// defaults to an empty seed list when absent.
    ///
    /// # Errors
    ///
    /// Returns `ConfigNotFound` when the policy file is missing and
    /// `ConfigParseError` when either file contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("leave_policy.yaml");
        let policy = Self::load_yaml::<LeavePolicy>(&policy_path)?;

        let employees_path = path.join("employees.yaml");
        let employees = if employees_path.exists() {
            Self::load_yaml::<EmployeesFile>(&employees_path)?.employees
        } else {
            Vec::new()
        };

        Ok(Self { policy, employees })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded leave policy.
    pub fn policy(&self) -> &LeavePolicy {
        &self.policy
    }

    /// Returns the seed employees, if any were configured.
    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }
}
