//! Leave request model.
//!
//! Approved unpaid leave is the source of the unpaid-leave deduction.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{EmployeeId, PeriodRange, period::is_weekday};

/// The kind of leave requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// Sick leave.
    Sick,
    /// Vacation leave.
    Vacation,
    /// Emergency leave.
    Emergency,
    /// Leave without pay.
    Unpaid,
}

/// Approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting a decision.
    Pending,
    /// Approved by a supervisor.
    Approved,
    /// Rejected by a supervisor.
    Rejected,
}

/// A request for leave over an inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// The employee requesting leave.
    pub employee_id: EmployeeId,
    /// First day of leave (inclusive).
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The kind of leave.
    pub leave_type: LeaveType,
    /// Approval state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns true if this is approved leave without pay.
    pub fn is_approved_unpaid(&self) -> bool {
        self.leave_type == LeaveType::Unpaid && self.status == LeaveStatus::Approved
    }
}

/// Collects the distinct Monday–Friday dates inside `period` that are
/// covered by approved unpaid leave.
///
/// Overlapping requests count each date once.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{
///     unpaid_leave_weekdays, EmployeeId, LeaveRequest, LeaveStatus, LeaveType, PeriodRange,
/// };
/// use chrono::NaiveDate;
///
/// let period = PeriodRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
/// // Friday 16th through Monday 19th: two weekdays
/// let leave = LeaveRequest {
///     employee_id: EmployeeId(1),
///     start_date: NaiveDate::from_ymd_opt(2026, 1, 16).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2026, 1, 19).unwrap(),
///     leave_type: LeaveType::Unpaid,
///     status: LeaveStatus::Approved,
/// };
/// assert_eq!(unpaid_leave_weekdays(&[leave], &period).len(), 2);
/// ```
pub fn unpaid_leave_weekdays(leaves: &[LeaveRequest], period: &PeriodRange) -> BTreeSet<NaiveDate> {
    leaves
        .iter()
        .filter(|leave| leave.is_approved_unpaid())
        .flat_map(|leave| {
            leave
                .start_date
                .iter_days()
                .take_while(move |d| *d <= leave.end_date)
        })
        .filter(|d| period.contains_date(*d) && is_weekday(*d))
        .collect()
}
