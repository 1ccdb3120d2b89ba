//! Calculation input for one employee and period.

use std::collections::HashSet;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, EmployeeProfile, LeaveRequest, PeriodRange};

/// Everything the calculator reads for one (employee, period) calculation.
///
/// # Example
///
/// ```
/// use payroll_engine::engine::PayrollInput;
/// use payroll_engine::models::{EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances, PeriodRange};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: EmployeeId(1),
///     basic_salary: Decimal::from(25000),
///     status: EmploymentStatus::Regular,
///     category: EmploymentCategory::Staff,
///     allowances: FixedAllowances::default(),
/// };
/// let period = PeriodRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
///
/// let input = PayrollInput::new(employee, period).with_overtime_override(Decimal::from(2));
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollInput {
    /// The employee being paid.
    pub employee: EmployeeProfile,
    /// The payroll period.
    pub period: PeriodRange,
    /// Attendance records; those outside the period are ignored.
    #[serde(default)]
    pub attendance: Vec<AttendanceRecord>,
    /// Leave requests; only approved unpaid leave affects pay.
    #[serde(default)]
    pub leaves: Vec<LeaveRequest>,
    /// Overtime hours to use instead of deriving them from attendance.
    #[serde(default)]
    pub overtime_hours_override: Option<Decimal>,
}

impl PayrollInput {
    /// Creates an input with no attendance, leave, or overtime override.
    pub fn new(employee: EmployeeProfile, period: PeriodRange) -> Self {
        Self {
            employee,
            period,
            attendance: Vec::new(),
            leaves: Vec::new(),
            overtime_hours_override: None,
        }
    }

    /// Sets the attendance records.
    pub fn with_attendance(mut self, attendance: Vec<AttendanceRecord>) -> Self {
        self.attendance = attendance;
        self
    }

    /// Sets the leave requests.
    pub fn with_leaves(mut self, leaves: Vec<LeaveRequest>) -> Self {
        self.leaves = leaves;
        self
    }

    /// Supplies the period's overtime hours directly.
    pub fn with_overtime_override(mut self, hours: Decimal) -> Self {
        self.overtime_hours_override = Some(hours);
        self
    }

    /// Attendance records that fall inside the period.
    pub fn attendance_in_period(&self) -> impl Iterator<Item = &AttendanceRecord> {
        self.attendance
            .iter()
            .filter(|record| self.period.contains_date(record.date()))
    }

    /// Checks every input invariant before any calculation proceeds.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for an inverted period, an invalid profile,
    /// an overtime override that is negative or longer than the period,
    /// attendance or leave belonging to a
    /// different employee, duplicate attendance dates, or a leave request
    /// ending before it starts.
    pub fn validate(&self) -> EngineResult<()> {
        self.period.validate()?;
        self.employee.validate()?;

        if let Some(hours) = self.overtime_hours_override {
            if hours < Decimal::ZERO {
                return Err(EngineError::validation(format!(
                    "overtime override cannot be negative: {}",
                    hours
                )));
            }
            let period_hours = Decimal::from(self.period.dates().count()) * Decimal::from(24);
            if hours > period_hours {
                return Err(EngineError::validation(format!(
                    "overtime override of {} hours exceeds the {} hours in the period",
                    hours, period_hours
                )));
            }
        }

        let employee_id = self.employee.id;
        let mut seen_dates = HashSet::with_capacity(self.attendance.len());
        for record in &self.attendance {
            if record.employee_id() != employee_id {
                return Err(EngineError::validation(format!(
                    "attendance on {} belongs to employee {}, not {}",
                    record.date(),
                    record.employee_id(),
                    employee_id
                )));
            }
            if !seen_dates.insert(record.date()) {
                return Err(EngineError::validation(format!(
                    "duplicate attendance for employee {} on {}",
                    employee_id,
                    record.date()
                )));
            }
        }

        for leave in &self.leaves {
            if leave.employee_id != employee_id {
                return Err(EngineError::validation(format!(
                    "leave request starting {} belongs to employee {}, not {}",
                    leave.start_date, leave.employee_id, employee_id
                )));
            }
            if leave.start_date > leave.end_date {
                return Err(EngineError::validation(format!(
                    "leave request start {} is after end {}",
                    leave.start_date, leave.end_date
                )));
            }
        }

        Ok(())
    }
}
