//! Attendance time evaluation.
//!
//! This module derives lateness, undertime, worked duration, and full-day
//! status from a single attendance record measured against the standard
//! shift, and summarizes those evaluations over a period.
//!
//! The grace window only gates *whether* lateness is counted: once an
//! arrival is past `start + grace`, minutes late are measured from `start`.
//! Undertime has no grace window.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftSchedule;
use crate::models::{AttendanceRecord, AuditStep};

/// The evaluation of one attendance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEvaluation {
    /// The date of the evaluated record.
    pub date: NaiveDate,
    /// A log-in was recorded.
    pub present: bool,
    /// A log-in was recorded without a log-out.
    pub open: bool,
    /// Log-out − log-in in minutes, zero if either is absent.
    pub worked_minutes: i64,
    /// Arrival was strictly after the grace boundary.
    pub late: bool,
    /// Minutes between standard start and arrival, when late.
    pub minutes_late: i64,
    /// Departure was before standard end.
    pub undertime: bool,
    /// Minutes between departure and standard end, when undertime.
    pub minutes_early: i64,
    /// Worked duration reached the full-day threshold.
    pub full_day: bool,
}

impl TimeEvaluation {
    /// Worked duration in hours.
    pub fn worked_hours(&self) -> Decimal {
        Decimal::from(self.worked_minutes) / Decimal::from(60)
    }
}

/// Evaluates one attendance record against the standard shift.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::evaluate_attendance;
/// use payroll_engine::config::ShiftSchedule;
/// use payroll_engine::models::{AttendanceRecord, EmployeeId};
/// use chrono::{NaiveDate, NaiveTime};
///
/// let shift = ShiftSchedule::default(); // 08:00-17:00, 15 minute grace
/// let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
///
/// let within_grace = AttendanceRecord::new(
///     EmployeeId(1), date, NaiveTime::from_hms_opt(8, 14, 0), NaiveTime::from_hms_opt(17, 0, 0),
/// ).unwrap();
/// assert_eq!(evaluate_attendance(&within_grace, &shift).minutes_late, 0);
///
/// let past_grace = AttendanceRecord::new(
///     EmployeeId(1), date, NaiveTime::from_hms_opt(8, 16, 0), NaiveTime::from_hms_opt(17, 0, 0),
/// ).unwrap();
/// assert_eq!(evaluate_attendance(&past_grace, &shift).minutes_late, 16);
/// ```
pub fn evaluate_attendance(record: &AttendanceRecord, shift: &ShiftSchedule) -> TimeEvaluation {
    let grace_boundary = shift.start + Duration::minutes(i64::from(shift.grace_minutes));

    let minutes_late = match record.log_in() {
        Some(arrival) if arrival > grace_boundary => (arrival - shift.start).num_minutes(),
        _ => 0,
    };

    let minutes_early = match record.log_out() {
        Some(departure) if departure < shift.end => (shift.end - departure).num_minutes(),
        _ => 0,
    };

    let worked_minutes = record.worked_minutes();
    let full_day = Decimal::from(worked_minutes) >= shift.full_day_hours * Decimal::from(60);

    TimeEvaluation {
        date: record.date(),
        present: record.is_present(),
        open: record.is_open(),
        worked_minutes,
        late: minutes_late > 0,
        minutes_late,
        undertime: minutes_early > 0,
        minutes_early,
        full_day,
    }
}

/// Period totals over a set of time evaluations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummary {
    /// Records with a log-in.
    pub days_worked: u32,
    /// Records reaching the full-day threshold.
    pub full_days: u32,
    /// Records with a log-in but no log-out.
    pub open_records: u32,
    /// Minutes late summed over all records.
    pub total_minutes_late: i64,
    /// Minutes of undertime summed over all records.
    pub total_minutes_early: i64,
}

/// The result of summarizing attendance, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceSummaryResult {
    /// The period totals.
    pub summary: AttendanceSummary,
    /// The audit step recording the summary.
    pub audit_step: AuditStep,
}

/// Summarizes the evaluations of every attendance record in a period.
pub fn summarize_attendance(
    evaluations: &[TimeEvaluation],
    shift: &ShiftSchedule,
    step_number: u32,
) -> AttendanceSummaryResult {
    let count = |pred: fn(&TimeEvaluation) -> bool| {
        evaluations.iter().filter(|e| pred(e)).count() as u32
    };

    let summary = AttendanceSummary {
        days_worked: count(|e| e.present),
        full_days: count(|e| e.full_day),
        open_records: count(|e| e.open),
        total_minutes_late: evaluations.iter().map(|e| e.minutes_late).sum(),
        total_minutes_early: evaluations.iter().map(|e| e.minutes_early).sum(),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "attendance_evaluation".to_string(),
        rule_name: "Attendance Evaluation".to_string(),
        legal_basis: "Company policy: standard shift and grace period".to_string(),
        input: serde_json::json!({
            "records": evaluations.len(),
            "shift_start": shift.start.format("%H:%M").to_string(),
            "shift_end": shift.end.format("%H:%M").to_string(),
            "grace_minutes": shift.grace_minutes
        }),
        output: serde_json::json!({
            "days_worked": summary.days_worked,
            "full_days": summary.full_days,
            "open_records": summary.open_records,
            "total_minutes_late": summary.total_minutes_late,
            "total_minutes_early": summary.total_minutes_early
        }),
        reasoning: format!(
            "{} of {} records present; {} minutes late, {} minutes undertime",
            summary.days_worked,
            evaluations.len(),
            summary.total_minutes_late,
            summary.total_minutes_early
        ),
    };

    AttendanceSummaryResult {
        summary,
        audit_step,
    }
}
