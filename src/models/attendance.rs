//! Attendance record model.
//!
//! An [`AttendanceRecord`] captures one employee's presence on one calendar
//! date. Records are validated at construction: a log-out may never precede
//! the log-in, and a log-out cannot exist without a log-in. Deserialized
//! records go through the same constructor.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use super::EmployeeId;
use crate::error::{EngineError, EngineResult};

/// One employee's attendance on one calendar date.
///
/// Once both times are set the record is immutable except through
/// [`AttendanceRecord::corrected`], which produces a new validated record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AttendanceRecordData")]
pub struct AttendanceRecord {
    employee_id: EmployeeId,
    date: NaiveDate,
    log_in: Option<NaiveTime>,
    log_out: Option<NaiveTime>,
}

/// Unvalidated wire shape of an attendance record.
#[derive(Debug, Deserialize)]
struct AttendanceRecordData {
    employee_id: EmployeeId,
    date: NaiveDate,
    #[serde(default)]
    log_in: Option<NaiveTime>,
    #[serde(default)]
    log_out: Option<NaiveTime>,
}

impl TryFrom<AttendanceRecordData> for AttendanceRecord {
    type Error = EngineError;

    fn try_from(data: AttendanceRecordData) -> EngineResult<Self> {
        AttendanceRecord::new(data.employee_id, data.date, data.log_in, data.log_out)
    }
}

impl AttendanceRecord {
    /// Creates a validated attendance record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `log_out` precedes `log_in`, or if a
    /// `log_out` is given without a `log_in`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{AttendanceRecord, EmployeeId};
    /// use chrono::{NaiveDate, NaiveTime};
    ///
    /// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
    /// let nine = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
    /// let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
    ///
    /// assert!(AttendanceRecord::new(EmployeeId(1), date, Some(eight), Some(nine)).is_ok());
    /// assert!(AttendanceRecord::new(EmployeeId(1), date, Some(nine), Some(eight)).is_err());
    /// ```
    pub fn new(
        employee_id: EmployeeId,
        date: NaiveDate,
        log_in: Option<NaiveTime>,
        log_out: Option<NaiveTime>,
    ) -> EngineResult<Self> {
        match (log_in, log_out) {
            (Some(start), Some(end)) if end < start => {
                return Err(EngineError::validation(format!(
                    "attendance for employee {} on {}: log-out {} precedes log-in {}",
                    employee_id, date, end, start
                )));
            }
            (None, Some(end)) => {
                return Err(EngineError::validation(format!(
                    "attendance for employee {} on {}: log-out {} recorded without a log-in",
                    employee_id, date, end
                )));
            }
            _ => {}
        }

        Ok(Self {
            employee_id,
            date,
            log_in,
            log_out,
        })
    }

    /// Returns a corrected copy of this record with new log times.
    ///
    /// The employee and date are preserved; the new times are validated
    /// exactly as in [`AttendanceRecord::new`].
    pub fn corrected(
        &self,
        log_in: Option<NaiveTime>,
        log_out: Option<NaiveTime>,
    ) -> EngineResult<Self> {
        Self::new(self.employee_id, self.date, log_in, log_out)
    }

    /// The employee this record belongs to.
    pub fn employee_id(&self) -> EmployeeId {
        self.employee_id
    }

    /// The calendar date of the record.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// The recorded log-in time, if any.
    pub fn log_in(&self) -> Option<NaiveTime> {
        self.log_in
    }

    /// The recorded log-out time, if any.
    pub fn log_out(&self) -> Option<NaiveTime> {
        self.log_out
    }

    /// Returns true if a log-in was recorded.
    pub fn is_present(&self) -> bool {
        self.log_in.is_some()
    }

    /// Returns true if the employee logged in but has not logged out yet.
    pub fn is_open(&self) -> bool {
        self.log_in.is_some() && self.log_out.is_none()
    }

    /// Minutes between log-in and log-out, zero if either is absent.
    pub fn worked_minutes(&self) -> i64 {
        match (self.log_in, self.log_out) {
            (Some(start), Some(end)) => (end - start).num_minutes(),
            _ => 0,
        }
    }
}
