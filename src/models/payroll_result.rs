//! Payroll result models.
//!
//! This module contains the [`PayrollResult`] type and the audit structures
//! that record every decision taken while producing it.
//!
//! Gross pay, total deductions, and net pay are never stored: they are
//! recomputed from their component fields on every access, and
//! deserialization discards any serialized totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Deduction, EmployeeId, PeriodRange};

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The statute or company rule the step is based on.
    pub legal_basis: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
}

/// The complete, itemized result of one payroll calculation.
///
/// A result is an immutable value: recalculation produces a new instance.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{AuditTrace, EmployeeId, PayrollResult, PeriodRange};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let dec = |s: &str| Decimal::from_str(s).unwrap();
/// let result = PayrollResult {
///     employee_id: EmployeeId(1),
///     period: PeriodRange::new(
///         NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
///     ).unwrap(),
///     monthly_rate: dec("22000"),
///     daily_rate: dec("1000"),
///     days_worked: 20,
///     overtime_hours: Decimal::ZERO,
///     gross_earnings: dec("20000.00"),
///     overtime_pay: Decimal::ZERO,
///     rice_allowance: dec("1500.00"),
///     phone_allowance: Decimal::ZERO,
///     clothing_allowance: Decimal::ZERO,
///     sss: dec("900.00"),
///     philhealth: dec("550.00"),
///     pagibig: dec("200.00"),
///     withholding_tax: Decimal::ZERO,
///     late_deduction: dec("12.50"),
///     undertime_deduction: Decimal::ZERO,
///     unpaid_leave_deduction: Decimal::ZERO,
///     deductions: vec![],
///     audit_trace: AuditTrace::default(),
/// };
///
/// assert_eq!(result.gross_pay(), dec("21500.00"));
/// assert_eq!(result.total_deductions(), dec("1662.50"));
/// assert_eq!(result.net_pay(), dec("19837.50"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "PayrollResultRecord", from = "PayrollResultRecord")]
pub struct PayrollResult {
    /// The employee the calculation is for.
    pub employee_id: EmployeeId,
    /// The period the calculation covers.
    pub period: PeriodRange,
    /// Snapshot of the basic monthly salary used.
    pub monthly_rate: Decimal,
    /// Daily rate (monthly rate ÷ working days per month), rounded for display.
    pub daily_rate: Decimal,
    /// Number of attendance records in the period with a log-in.
    pub days_worked: u32,
    /// Overtime hours paid.
    pub overtime_hours: Decimal,
    /// Days worked × daily rate.
    pub gross_earnings: Decimal,
    /// Overtime hours × hourly rate × overtime multiplier.
    pub overtime_pay: Decimal,
    /// Rice subsidy paid.
    pub rice_allowance: Decimal,
    /// Phone allowance paid.
    pub phone_allowance: Decimal,
    /// Clothing allowance paid.
    pub clothing_allowance: Decimal,
    /// SSS employee contribution.
    pub sss: Decimal,
    /// PhilHealth employee contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG employee contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
    /// Lateness deduction.
    pub late_deduction: Decimal,
    /// Undertime deduction.
    pub undertime_deduction: Decimal,
    /// Unpaid-leave deduction.
    pub unpaid_leave_deduction: Decimal,
    /// Itemized deduction lines.
    pub deductions: Vec<Deduction>,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl PayrollResult {
    /// Sum of the three allowance fields.
    pub fn total_allowances(&self) -> Decimal {
        self.rice_allowance + self.phone_allowance + self.clothing_allowance
    }

    /// Gross earnings + allowances + overtime pay.
    pub fn gross_pay(&self) -> Decimal {
        self.gross_earnings + self.total_allowances() + self.overtime_pay
    }

    /// Sum of all seven deduction fields.
    pub fn total_deductions(&self) -> Decimal {
        self.late_deduction
            + self.undertime_deduction
            + self.unpaid_leave_deduction
            + self.sss
            + self.philhealth
            + self.pagibig
            + self.withholding_tax
    }

    /// Gross pay − total deductions. May be negative.
    pub fn net_pay(&self) -> Decimal {
        self.gross_pay() - self.total_deductions()
    }
}

/// Serialized shape of a [`PayrollResult`], including derived totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PayrollResultRecord {
    employee_id: EmployeeId,
    period: PeriodRange,
    monthly_rate: Decimal,
    daily_rate: Decimal,
    days_worked: u32,
    overtime_hours: Decimal,
    gross_earnings: Decimal,
    overtime_pay: Decimal,
    rice_allowance: Decimal,
    phone_allowance: Decimal,
    clothing_allowance: Decimal,
    #[serde(default)]
    total_allowances: Decimal,
    #[serde(default)]
    gross_pay: Decimal,
    sss: Decimal,
    philhealth: Decimal,
    pagibig: Decimal,
    withholding_tax: Decimal,
    late_deduction: Decimal,
    undertime_deduction: Decimal,
    unpaid_leave_deduction: Decimal,
    #[serde(default)]
    total_deductions: Decimal,
    #[serde(default)]
    net_pay: Decimal,
    #[serde(default)]
    deductions: Vec<Deduction>,
    #[serde(default)]
    audit_trace: AuditTrace,
}

impl From<PayrollResult> for PayrollResultRecord {
    fn from(result: PayrollResult) -> Self {
        let total_allowances = result.total_allowances();
        let gross_pay = result.gross_pay();
        let total_deductions = result.total_deductions();
        let net_pay = result.net_pay();
        PayrollResultRecord {
            employee_id: result.employee_id,
            period: result.period,
            monthly_rate: result.monthly_rate,
            daily_rate: result.daily_rate,
            days_worked: result.days_worked,
            overtime_hours: result.overtime_hours,
            gross_earnings: result.gross_earnings,
            overtime_pay: result.overtime_pay,
            rice_allowance: result.rice_allowance,
            phone_allowance: result.phone_allowance,
            clothing_allowance: result.clothing_allowance,
            total_allowances,
            gross_pay,
            sss: result.sss,
            philhealth: result.philhealth,
            pagibig: result.pagibig,
            withholding_tax: result.withholding_tax,
            late_deduction: result.late_deduction,
            undertime_deduction: result.undertime_deduction,
            unpaid_leave_deduction: result.unpaid_leave_deduction,
            total_deductions,
            net_pay,
            deductions: result.deductions,
            audit_trace: result.audit_trace,
        }
    }
}

impl From<PayrollResultRecord> for PayrollResult {
    fn from(record: PayrollResultRecord) -> Self {
        // Serialized totals are ignored; they are always recomputed.
        PayrollResult {
            employee_id: record.employee_id,
            period: record.period,
            monthly_rate: record.monthly_rate,
            daily_rate: record.daily_rate,
            days_worked: record.days_worked,
            overtime_hours: record.overtime_hours,
            gross_earnings: record.gross_earnings,
            overtime_pay: record.overtime_pay,
            rice_allowance: record.rice_allowance,
            phone_allowance: record.phone_allowance,
            clothing_allowance: record.clothing_allowance,
            sss: record.sss,
            philhealth: record.philhealth,
            pagibig: record.pagibig,
            withholding_tax: record.withholding_tax,
            late_deduction: record.late_deduction,
            undertime_deduction: record.undertime_deduction,
            unpaid_leave_deduction: record.unpaid_leave_deduction,
            deductions: record.deductions,
            audit_trace: record.audit_trace,
        }
    }
}
