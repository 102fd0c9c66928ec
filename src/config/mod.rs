//! Leave policy configuration for the Dayflow engine.
//!
//! This module provides functionality to load the leave policy (annual
//! allowance per leave type) and the optional seed employee list from YAML
//! files.
//!
//! # Example
//!
//! ```no_run
//! use dayflow_engine::config::PolicyLoader;
//!
//! let loader = PolicyLoader::load("./config/dayflow").unwrap();
//! println!("Loaded policy: {}", loader.policy().policy.name);
//! ```

mod loader;
mod types;

pub use loader::PolicyLoader;
pub use types::{LeaveAllowance, LeavePolicy, PolicyMetadata};
