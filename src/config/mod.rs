//! Configuration loading and management for the Payroll Calculation Engine.
//!
//! This module provides functionality to load payroll configuration from YAML
//! files: the standard shift schedule, rate constants, the per-category
//! policy table, and the withholding tax brackets.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ph_default").unwrap();
//! println!("Loaded tax schedule: {}", config.config().tax_table().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CategoryPolicies, CategoryPolicy, NonTaxableAllowances, PayrollConfig, PayrollSettings,
    ShiftSchedule, TaxBracket, WithholdingTaxTable,
};
