//! Core data models for the Payroll Calculation Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod attendance;
mod deduction;
mod employee;
mod leave;
mod payroll_result;
mod period;

pub use attendance::AttendanceRecord;
pub use deduction::{ContributionScheme, Deduction};
pub use employee::{
    EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances,
    MAX_MONEY_AMOUNT,
};
pub use leave::{LeaveRequest, LeaveStatus, LeaveType, unpaid_leave_weekdays};
pub use payroll_result::{AuditStep, AuditTrace, AuditWarning, PayrollResult};
pub use period::{PeriodRange, is_weekday};
