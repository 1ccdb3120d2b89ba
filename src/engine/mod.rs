//! Orchestration for the Payroll Calculation Engine.
//!
//! [`PayrollCalculator`] turns one [`PayrollInput`] into a
//! [`PayrollResult`](crate::models::PayrollResult). [`run_batch`] fetches
//! inputs through a [`PayrollDataSource`] and calculates many employees in
//! parallel, each succeeding or failing on its own.

mod batch;
mod calculator;
mod input;
mod source;

pub use batch::{BatchEntry, run_batch};
pub use calculator::PayrollCalculator;
pub use input::PayrollInput;
pub use source::{InMemoryDataSource, PayrollDataSource};
