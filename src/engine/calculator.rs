//! The payroll calculator.
//!
//! Drives the calculation leaves for one (employee, period) input:
//! validate, evaluate attendance, aggregate allowances, assemble
//! deductions, then compute gross and net pay. Either a complete result is
//! returned or an error is, never a partial result.

use std::sync::Arc;

use rayon::prelude::*;
use rust_decimal::Decimal;
use tracing::{debug, info, warn};

use crate::calculation::{
    DeductionInputs, TimeEvaluation, assemble_deductions, calculate_allowances,
    calculate_contributions, calculate_overtime, calculate_withholding_tax, derive_overtime_hours,
    derive_rates, evaluate_attendance, round_money, summarize_attendance,
};
use crate::config::{ConfigLoader, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{AuditStep, AuditTrace, AuditWarning, PayrollResult, unpaid_leave_weekdays};

use super::PayrollInput;

/// Computes payroll results against a fixed configuration.
///
/// The calculator holds no mutable state; it can be shared across threads
/// and cloned cheaply.
///
/// # Example
///
/// ```
/// use payroll_engine::engine::{PayrollCalculator, PayrollInput};
/// use payroll_engine::models::{AttendanceRecord, EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances, PeriodRange};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let employee = EmployeeProfile {
///     id: EmployeeId(1),
///     basic_salary: Decimal::from(22000),
///     status: EmploymentStatus::Regular,
///     category: EmploymentCategory::Staff,
///     allowances: FixedAllowances::default(),
/// };
/// let day = NaiveDate::from_ymd_opt(2026, 1, 5).unwrap();
/// let attendance = vec![AttendanceRecord::new(
///     EmployeeId(1), day, NaiveTime::from_hms_opt(8, 0, 0), NaiveTime::from_hms_opt(17, 0, 0),
/// ).unwrap()];
/// let input = PayrollInput::new(employee, PeriodRange::new(day, day).unwrap())
///     .with_attendance(attendance);
///
/// let result = PayrollCalculator::default().calculate(&input).unwrap();
/// assert_eq!(result.days_worked, 1);
/// assert_eq!(result.gross_earnings, Decimal::from(1000));
/// assert_eq!(result.net_pay(), result.gross_pay() - result.total_deductions());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PayrollCalculator {
    config: Arc<PayrollConfig>,
}

impl PayrollCalculator {
    /// Creates a calculator for the given configuration.
    pub fn new(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Calculates the payroll result for one employee and period.
    ///
    /// # Errors
    ///
    /// - `ValidationError` if the input fails [`PayrollInput::validate`].
    /// - `CalculationError` if a deduction line computes a negative amount
    ///   or an amount overflows.
    pub fn calculate(&self, input: &PayrollInput) -> EngineResult<PayrollResult> {
        let employee = &input.employee;

        if let Err(err) = input.validate() {
            warn!(employee_id = %employee.id, error = %err, "Payroll input rejected");
            return Err(err);
        }

        let settings = self.config.settings();
        let required_hours = employee.required_daily_hours();
        let shift = self.config.shift().for_required_hours(required_hours);
        let shift = &shift;
        let policy = self.config.policy(employee.category);
        let mut steps: Vec<AuditStep> = Vec::new();
        let mut warnings: Vec<AuditWarning> = Vec::new();
        let mut step_number: u32 = 1;

        // Rates
        let rates_result = derive_rates(
            employee.basic_salary,
            settings.working_days_per_month,
            required_hours,
            step_number,
        );
        let rates = rates_result.rates.clone();
        steps.push(rates_result.audit_step);
        step_number += 1;

        // Attendance
        let evaluations: Vec<TimeEvaluation> = input
            .attendance_in_period()
            .map(|record| evaluate_attendance(record, shift))
            .collect();
        for evaluation in evaluations.iter().filter(|e| e.open) {
            warnings.push(AuditWarning {
                code: "OPEN_ATTENDANCE".to_string(),
                message: format!(
                    "Attendance on {} has a log-in but no log-out; counted as present with no worked time",
                    evaluation.date
                ),
                severity: "medium".to_string(),
            });
        }
        let summary_result = summarize_attendance(&evaluations, shift, step_number);
        let summary = summary_result.summary.clone();
        steps.push(summary_result.audit_step);
        step_number += 1;
        debug!(
            employee_id = %employee.id,
            days_worked = summary.days_worked,
            period_weekdays = input.period.weekday_count(),
            minutes_late = summary.total_minutes_late,
            minutes_early = summary.total_minutes_early,
            "Evaluated attendance"
        );

        let gross_earnings = Decimal::from(summary.days_worked)
            .checked_mul(rates.daily)
            .map(round_money)
            .ok_or_else(|| overflow("gross earnings"))?;

        // Overtime
        let overtime_eligible = employee.status.overtime_eligible() && policy.overtime_eligible;
        let derived_overtime = derive_overtime_hours(&evaluations, shift, required_hours);
        let overtime = calculate_overtime(
            derived_overtime,
            input.overtime_hours_override,
            overtime_eligible,
            rates.hourly,
            settings.overtime_multiplier,
            step_number,
        )?;
        steps.push(overtime.audit_step);
        step_number += 1;

        // Allowances
        let allowance_result = calculate_allowances(employee, policy, step_number);
        let allowances = allowance_result.allowances;
        steps.push(allowance_result.audit_step);
        step_number += 1;

        let gross_pay = gross_earnings
            .checked_add(allowances.total())
            .and_then(|amount| amount.checked_add(overtime.pay))
            .ok_or_else(|| overflow("gross pay"))?;
        debug!(
            employee_id = %employee.id,
            gross_earnings = %gross_earnings,
            overtime_pay = %overtime.pay,
            allowances = %allowances.total(),
            "Computed gross pay"
        );

        // Contributions and tax
        let contributions_result = calculate_contributions(employee.basic_salary, step_number);
        let contributions = contributions_result.contributions;
        steps.push(contributions_result.audit_step);
        step_number += 1;

        let taxable_income = gross_pay - allowances.non_taxable(&settings.non_taxable_allowances);
        let tax_result =
            calculate_withholding_tax(taxable_income, self.config.tax_table(), step_number);
        let withholding_tax = tax_result.tax;
        steps.push(tax_result.audit_step);
        step_number += 1;

        // Deductions
        let unpaid_leave_days = unpaid_leave_weekdays(&input.leaves, &input.period).len() as u32;
        let deduction_result = assemble_deductions(
            &DeductionInputs {
                rates: rates.clone(),
                minutes_late: summary.total_minutes_late,
                minutes_early: summary.total_minutes_early,
                unpaid_leave_days,
                contributions,
                taxable_income,
                withholding_tax,
            },
            step_number,
        )?;
        let deductions = deduction_result.deductions;
        steps.push(deduction_result.audit_step);
        debug!(
            employee_id = %employee.id,
            total_deductions = %deductions.total(),
            unpaid_leave_days,
            "Assembled deductions"
        );

        let result = PayrollResult {
            employee_id: employee.id,
            period: input.period,
            monthly_rate: round_money(rates.monthly),
            daily_rate: round_money(rates.daily),
            days_worked: summary.days_worked,
            overtime_hours: overtime.hours,
            gross_earnings,
            overtime_pay: overtime.pay,
            rice_allowance: allowances.rice,
            phone_allowance: allowances.phone,
            clothing_allowance: allowances.clothing,
            sss: deductions.sss,
            philhealth: deductions.philhealth,
            pagibig: deductions.pagibig,
            withholding_tax: deductions.withholding_tax,
            late_deduction: deductions.late,
            undertime_deduction: deductions.undertime,
            unpaid_leave_deduction: deductions.unpaid_leave,
            deductions: deductions.items,
            audit_trace: AuditTrace { steps, warnings },
        };

        Ok(self.finish(result))
    }

    /// Flags a negative net pay on an otherwise complete result.
    fn finish(&self, mut result: PayrollResult) -> PayrollResult {
        let net_pay = result.net_pay();
        if net_pay < Decimal::ZERO {
            warn!(
                employee_id = %result.employee_id,
                net_pay = %net_pay,
                "Net pay is negative"
            );
            result.audit_trace.warnings.push(AuditWarning {
                code: "NEGATIVE_NET_PAY".to_string(),
                message: format!(
                    "Deductions of ₱{} exceed gross pay of ₱{}",
                    result.total_deductions(),
                    result.gross_pay()
                ),
                severity: "high".to_string(),
            });
        }

        info!(
            employee_id = %result.employee_id,
            days_worked = result.days_worked,
            gross_pay = %result.gross_pay(),
            net_pay = %net_pay,
            "Payroll calculation completed"
        );
        result
    }

    /// Calculates many inputs in parallel.
    ///
    /// Results are returned in input order; one input failing does not
    /// affect the others.
    pub fn calculate_many(&self, inputs: &[PayrollInput]) -> Vec<EngineResult<PayrollResult>> {
        inputs.par_iter().map(|input| self.calculate(input)).collect()
    }
}

fn overflow(quantity: &str) -> EngineError {
    EngineError::calculation(format!("{} overflowed", quantity))
}

impl From<ConfigLoader> for PayrollCalculator {
    fn from(loader: ConfigLoader) -> Self {
        Self::new(loader.into_config())
    }
}
