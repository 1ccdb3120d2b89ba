//! Collaborator lookups used at the orchestration boundary.
//!
//! The calculator itself never looks anything up. Callers that want the
//! engine to fetch employees and attendance for them implement
//! [`PayrollDataSource`] over their persistence layer.

use std::collections::HashMap;

use crate::error::{EngineError, EngineResult};
use crate::models::{AttendanceRecord, EmployeeId, EmployeeProfile, LeaveRequest, PeriodRange};

use super::PayrollInput;

/// Read-only access to employee, attendance, and leave data.
///
/// Implementations must be `Sync`: batch runs read from worker threads.
pub trait PayrollDataSource: Sync {
    /// Looks up an employee profile.
    fn employee(&self, id: EmployeeId) -> Option<EmployeeProfile>;

    /// Returns the employee's attendance within the period, ordered by date.
    fn attendance(&self, id: EmployeeId, period: &PeriodRange) -> Vec<AttendanceRecord>;

    /// Returns the employee's leave requests overlapping the period.
    fn leaves(&self, id: EmployeeId, period: &PeriodRange) -> Vec<LeaveRequest>;

    /// Assembles a calculation input for one employee.
    ///
    /// # Errors
    ///
    /// Returns `NotFoundError` if the employee does not exist.
    fn payroll_input(&self, id: EmployeeId, period: &PeriodRange) -> EngineResult<PayrollInput> {
        let employee = self.employee(id).ok_or_else(|| EngineError::NotFoundError {
            entity: "Employee".to_string(),
            id: id.to_string(),
        })?;

        Ok(PayrollInput::new(employee, *period)
            .with_attendance(self.attendance(id, period))
            .with_leaves(self.leaves(id, period)))
    }
}

/// A [`PayrollDataSource`] backed by in-memory maps.
///
/// # Example
///
/// ```
/// use payroll_engine::engine::{InMemoryDataSource, PayrollDataSource};
/// use payroll_engine::models::{EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances};
/// use rust_decimal::Decimal;
///
/// let mut source = InMemoryDataSource::new();
/// source.add_employee(EmployeeProfile {
///     id: EmployeeId(3),
///     basic_salary: Decimal::from(18000),
///     status: EmploymentStatus::Probationary,
///     category: EmploymentCategory::Staff,
///     allowances: FixedAllowances::default(),
/// });
///
/// assert!(source.employee(EmployeeId(3)).is_some());
/// assert!(source.employee(EmployeeId(4)).is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataSource {
    employees: HashMap<EmployeeId, EmployeeProfile>,
    attendance: HashMap<EmployeeId, Vec<AttendanceRecord>>,
    leaves: HashMap<EmployeeId, Vec<LeaveRequest>>,
}

impl InMemoryDataSource {
    /// Creates an empty data source.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces an employee profile.
    pub fn add_employee(&mut self, profile: EmployeeProfile) {
        self.employees.insert(profile.id, profile);
    }

    /// Adds an attendance record under its employee.
    pub fn add_attendance(&mut self, record: AttendanceRecord) {
        self.attendance
            .entry(record.employee_id())
            .or_default()
            .push(record);
    }

    /// Adds a leave request under its employee.
    pub fn add_leave(&mut self, leave: LeaveRequest) {
        self.leaves.entry(leave.employee_id).or_default().push(leave);
    }
}

impl PayrollDataSource for InMemoryDataSource {
    fn employee(&self, id: EmployeeId) -> Option<EmployeeProfile> {
        self.employees.get(&id).cloned()
    }

    fn attendance(&self, id: EmployeeId, period: &PeriodRange) -> Vec<AttendanceRecord> {
        let mut records: Vec<AttendanceRecord> = self
            .attendance
            .get(&id)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| period.contains_date(r.date()))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();
        records.sort_by_key(AttendanceRecord::date);
        records
    }

    fn leaves(&self, id: EmployeeId, period: &PeriodRange) -> Vec<LeaveRequest> {
        self.leaves
            .get(&id)
            .map(|leaves| {
                leaves
                    .iter()
                    .filter(|l| l.start_date <= period.end_date && l.end_date >= period.start_date)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }
}
