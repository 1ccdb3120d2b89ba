//! Overtime derivation and pay.
//!
//! Overtime hours for a record are the worked hours beyond the required
//! day once the unpaid meal break is taken out. A caller may instead supply
//! the period's overtime hours directly; either way nothing is paid unless
//! both the employment status and the category policy allow overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::ShiftSchedule;
use crate::error::{EngineError, EngineResult};
use crate::models::AuditStep;

use super::{TimeEvaluation, round_money};

/// Where the overtime hours of a calculation came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OvertimeSource {
    /// Derived from worked durations.
    Derived,
    /// Supplied by the caller.
    Override,
}

/// The result of calculating overtime for a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeResult {
    /// Whether the employee may be paid overtime.
    pub eligible: bool,
    /// Paid overtime hours; zero when ineligible.
    pub hours: Decimal,
    /// Overtime pay, rounded to currency precision.
    pub pay: Decimal,
    /// Where the hours came from.
    pub source: OvertimeSource,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Overtime hours worked on one day.
///
/// Returns max(0, worked − meal break − required hours). A record without a
/// log-out has zero worked time and therefore no overtime.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{TimeEvaluation, daily_overtime_hours};
/// use payroll_engine::config::ShiftSchedule;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let evaluation = TimeEvaluation {
///     date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
///     present: true,
///     open: false,
///     worked_minutes: 11 * 60, // 08:00-19:00
///     late: false,
///     minutes_late: 0,
///     undertime: false,
///     minutes_early: 0,
///     full_day: true,
/// };
/// let hours = daily_overtime_hours(&evaluation, &ShiftSchedule::default(), Decimal::from(8));
/// assert_eq!(hours, Decimal::from(2));
/// ```
pub fn daily_overtime_hours(
    evaluation: &TimeEvaluation,
    shift: &ShiftSchedule,
    required_daily_hours: Decimal,
) -> Decimal {
    let meal_break = Decimal::from(shift.meal_break_minutes) / Decimal::from(60);
    (evaluation.worked_hours() - meal_break - required_daily_hours).max(Decimal::ZERO)
}

/// Sums [`daily_overtime_hours`] over every evaluated record.
pub fn derive_overtime_hours(
    evaluations: &[TimeEvaluation],
    shift: &ShiftSchedule,
    required_daily_hours: Decimal,
) -> Decimal {
    evaluations
        .iter()
        .map(|e| daily_overtime_hours(e, shift, required_daily_hours))
        .sum()
}

/// Calculates overtime pay for a period.
///
/// `override_hours` replaces `derived_hours` when present. Pay is
/// hours × hourly rate × multiplier, rounded once.
///
/// # Arguments
///
/// * `derived_hours` - Overtime hours derived from attendance
/// * `override_hours` - Caller-supplied hours, used instead when present
/// * `eligible` - Whether status and category both allow overtime
/// * `hourly_rate` - The employee's full-precision hourly rate
/// * `multiplier` - The configured overtime premium (e.g., 1.25)
/// * `step_number` - Position of this step in the audit trace
///
/// # Errors
///
/// Returns `CalculationError` if the pay overflows.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_overtime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_overtime(
///     Decimal::from(2),
///     None,
///     true,
///     Decimal::from(100),
///     Decimal::new(125, 2),
///     5,
/// ).unwrap();
/// assert_eq!(result.pay, Decimal::new(25000, 2)); // 2 × 100 × 1.25
/// ```
pub fn calculate_overtime(
    derived_hours: Decimal,
    override_hours: Option<Decimal>,
    eligible: bool,
    hourly_rate: Decimal,
    multiplier: Decimal,
    step_number: u32,
) -> EngineResult<OvertimeResult> {
    let (candidate_hours, source) = match override_hours {
        Some(hours) => (hours, OvertimeSource::Override),
        None => (derived_hours, OvertimeSource::Derived),
    };

    let hours = if eligible {
        candidate_hours.max(Decimal::ZERO)
    } else {
        Decimal::ZERO
    };
    let pay = hours
        .checked_mul(hourly_rate)
        .and_then(|amount| amount.checked_mul(multiplier))
        .map(round_money)
        .ok_or_else(|| {
            EngineError::calculation(format!(
                "overtime pay overflowed: {} hours at {} × {}",
                hours, hourly_rate, multiplier
            ))
        })?;

    let reasoning = if !eligible {
        format!(
            "Not eligible for overtime; {} {:?} hours disregarded",
            candidate_hours.normalize(),
            source
        )
    } else if hours.is_zero() {
        "No overtime hours in period".to_string()
    } else {
        format!(
            "{} hours × ₱{} × {} = ₱{}",
            hours.normalize(),
            round_money(hourly_rate),
            multiplier.normalize(),
            pay
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "overtime_pay".to_string(),
        rule_name: "Overtime Pay".to_string(),
        legal_basis: "Labor Code Art. 87".to_string(),
        input: serde_json::json!({
            "derived_hours": derived_hours.normalize().to_string(),
            "override_hours": override_hours.map(|h| h.normalize().to_string()),
            "eligible": eligible,
            "hourly_rate": round_money(hourly_rate).to_string(),
            "multiplier": multiplier.normalize().to_string()
        }),
        output: serde_json::json!({
            "overtime_hours": hours.normalize().to_string(),
            "overtime_pay": pay.to_string()
        }),
        reasoning,
    };

    Ok(OvertimeResult {
        eligible,
        hours,
        pay,
        source,
        audit_step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn evaluation(worked_minutes: i64) -> TimeEvaluation {
        TimeEvaluation {
            date: NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            present: true,
            open: false,
            worked_minutes,
            late: false,
            minutes_late: 0,
            undertime: false,
            minutes_early: 0,
            full_day: worked_minutes >= 480,
        }
    }

    #[test]
    fn test_standard_day_has_no_overtime() {
        let hours = daily_overtime_hours(&evaluation(540), &ShiftSchedule::default(), dec("8"));
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_short_day_never_negative() {
        let hours = daily_overtime_hours(&evaluation(120), &ShiftSchedule::default(), dec("8"));
        assert_eq!(hours, Decimal::ZERO);
    }

    #[test]
    fn test_extended_day_partial_hour() {
        // 08:00-18:30 less a one hour break is 9.5 hours.
        let hours = daily_overtime_hours(&evaluation(630), &ShiftSchedule::default(), dec("8"));
        assert_eq!(hours, dec("1.5"));
    }

    #[test]
    fn test_part_time_required_hours() {
        let hours = daily_overtime_hours(&evaluation(360), &ShiftSchedule::default(), dec("4"));
        assert_eq!(hours, dec("1"));
    }

    #[test]
    fn test_derived_hours_sum_over_records() {
        let evaluations = vec![evaluation(600), evaluation(540), evaluation(660)];
        let hours = derive_overtime_hours(&evaluations, &ShiftSchedule::default(), dec("8"));
        assert_eq!(hours, dec("3"));
    }

    #[test]
    fn test_overtime_pay() {
        let result = calculate_overtime(dec("3"), None, true, dec("142.045"), dec("1.25"), 1)
            .unwrap();
        assert_eq!(result.hours, dec("3"));
        // 3 × 142.045 × 1.25 = 532.66875
        assert_eq!(result.pay, dec("532.67"));
        assert_eq!(result.source, OvertimeSource::Derived);
    }

    #[test]
    fn test_override_replaces_derived_hours() {
        let result = calculate_overtime(dec("3"), Some(dec("1")), true, dec("100"), dec("1.25"), 1)
            .unwrap();
        assert_eq!(result.hours, dec("1"));
        assert_eq!(result.pay, dec("125.00"));
        assert_eq!(result.source, OvertimeSource::Override);
    }

    #[test]
    fn test_ineligible_employee_gets_nothing() {
        let result = calculate_overtime(dec("3"), Some(dec("5")), false, dec("100"), dec("1.25"), 1)
            .unwrap();
        assert!(!result.eligible);
        assert_eq!(result.hours, Decimal::ZERO);
        assert_eq!(result.pay, Decimal::ZERO);
        assert!(result.audit_step.reasoning.contains("Not eligible"));
    }

    #[test]
    fn test_pay_overflow_is_an_error() {
        let result = calculate_overtime(
            dec("1000000000000000000000000000"),
            None,
            true,
            dec("100"),
            dec("1.25"),
            1,
        );
        match result {
            Err(EngineError::CalculationError { message }) => {
                assert!(message.contains("overflowed"));
            }
            other => panic!("Expected CalculationError, got {:?}", other),
        }
    }

    #[test]
    fn test_audit_step() {
        let result = calculate_overtime(dec("2"), None, true, dec("100"), dec("1.25"), 6).unwrap();
        assert_eq!(result.audit_step.step_number, 6);
        assert_eq!(result.audit_step.rule_id, "overtime_pay");
        assert_eq!(result.audit_step.output["overtime_pay"], "250.00");
    }
}
