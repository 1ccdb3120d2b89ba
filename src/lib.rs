//! Payroll Calculation Engine
//!
//! This crate computes a complete payroll result for one employee over one
//! period: attendance evaluation, overtime, fixed allowances, SSS,
//! PhilHealth and Pag-IBIG contributions, bracketed withholding tax, and
//! time-based deductions. Every result carries an audit trace of the rules
//! applied. Calculations are pure and may be run in parallel across
//! employees.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;
