//! Deduction assembly.
//!
//! Combines the time-based charges (late, undertime, unpaid leave) with the
//! government contributions and withholding tax into itemized [`Deduction`]
//! lines and their per-field amounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AuditStep, ContributionScheme, Deduction};

use super::{Contributions, PayRates};

/// Everything the assembler needs for one period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionInputs {
    /// Employee rates; the hourly rate prices late and undertime minutes.
    pub rates: PayRates,
    /// Minutes late summed over the period.
    pub minutes_late: i64,
    /// Minutes of undertime summed over the period.
    pub minutes_early: i64,
    /// Approved unpaid-leave weekdays in the period.
    pub unpaid_leave_days: u32,
    /// Government contributions.
    pub contributions: Contributions,
    /// Taxable income the tax was computed on.
    pub taxable_income: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

/// The assembled deductions for a period.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    /// Itemized lines: late, undertime, unpaid leave, SSS, PhilHealth, Pag-IBIG, tax.
    pub items: Vec<Deduction>,
    /// Late deduction.
    pub late: Decimal,
    /// Undertime deduction.
    pub undertime: Decimal,
    /// Unpaid-leave deduction.
    pub unpaid_leave: Decimal,
    /// SSS contribution.
    pub sss: Decimal,
    /// PhilHealth contribution.
    pub philhealth: Decimal,
    /// Pag-IBIG contribution.
    pub pagibig: Decimal,
    /// Withholding tax.
    pub withholding_tax: Decimal,
}

impl DeductionBreakdown {
    /// Sum of all seven deduction amounts.
    pub fn total(&self) -> Decimal {
        self.late
            + self.undertime
            + self.unpaid_leave
            + self.sss
            + self.philhealth
            + self.pagibig
            + self.withholding_tax
    }
}

/// The result of assembling deductions, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionResult {
    /// The assembled deductions.
    pub deductions: DeductionBreakdown,
    /// The audit step recording the assembly.
    pub audit_step: AuditStep,
}

/// Assembles the itemized deductions for a period.
///
/// # Errors
///
/// Returns `CalculationError` if any line computes a negative amount.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::{DeductionInputs, PayRates, assemble_deductions, contributions};
/// use rust_decimal::Decimal;
///
/// let inputs = DeductionInputs {
///     rates: PayRates {
///         monthly: Decimal::from(22000),
///         daily: Decimal::from(1000),
///         hourly: Decimal::from(125),
///     },
///     minutes_late: 30,
///     minutes_early: 0,
///     unpaid_leave_days: 1,
///     contributions: contributions(Decimal::from(22000)),
///     taxable_income: Decimal::from(20000),
///     withholding_tax: Decimal::ZERO,
/// };
///
/// let result = assemble_deductions(&inputs, 9).unwrap();
/// assert_eq!(result.deductions.late, Decimal::new(6250, 2));
/// assert_eq!(result.deductions.unpaid_leave, Decimal::from(1000));
/// assert_eq!(result.deductions.items.len(), 7);
/// ```
pub fn assemble_deductions(
    inputs: &DeductionInputs,
    step_number: u32,
) -> EngineResult<DeductionResult> {
    let items = vec![
        Deduction::Late {
            minutes: inputs.minutes_late,
            hourly_rate: inputs.rates.hourly,
        },
        Deduction::Undertime {
            minutes: inputs.minutes_early,
            hourly_rate: inputs.rates.hourly,
        },
        Deduction::UnpaidLeave {
            days: inputs.unpaid_leave_days,
            daily_rate: inputs.rates.daily,
        },
        Deduction::GovernmentContribution {
            scheme: ContributionScheme::Sss,
            amount: inputs.contributions.sss,
        },
        Deduction::GovernmentContribution {
            scheme: ContributionScheme::PhilHealth,
            amount: inputs.contributions.philhealth,
        },
        Deduction::GovernmentContribution {
            scheme: ContributionScheme::PagIbig,
            amount: inputs.contributions.pagibig,
        },
        Deduction::Tax {
            taxable_income: inputs.taxable_income,
            amount: inputs.withholding_tax,
        },
    ];

    let mut breakdown = DeductionBreakdown::default();
    for item in &items {
        let amount = item.amount()?;
        let slot = match item {
            Deduction::Late { .. } => &mut breakdown.late,
            Deduction::Undertime { .. } => &mut breakdown.undertime,
            Deduction::UnpaidLeave { .. } => &mut breakdown.unpaid_leave,
            Deduction::GovernmentContribution { scheme, .. } => match scheme {
                ContributionScheme::Sss => &mut breakdown.sss,
                ContributionScheme::PhilHealth => &mut breakdown.philhealth,
                ContributionScheme::PagIbig => &mut breakdown.pagibig,
            },
            Deduction::Tax { .. } => &mut breakdown.withholding_tax,
        };
        *slot += amount;
    }
    breakdown.items = items;

    let total = breakdown.total();
    let audit_step = AuditStep {
        step_number,
        rule_id: "deduction_assembly".to_string(),
        rule_name: "Deduction Assembly".to_string(),
        legal_basis: "Labor Code Art. 113".to_string(),
        input: serde_json::json!({
            "minutes_late": inputs.minutes_late,
            "minutes_early": inputs.minutes_early,
            "unpaid_leave_days": inputs.unpaid_leave_days,
            "taxable_income": inputs.taxable_income.to_string()
        }),
        output: serde_json::json!({
            "late": breakdown.late.to_string(),
            "undertime": breakdown.undertime.to_string(),
            "unpaid_leave": breakdown.unpaid_leave.to_string(),
            "sss": breakdown.sss.to_string(),
            "philhealth": breakdown.philhealth.to_string(),
            "pagibig": breakdown.pagibig.to_string(),
            "withholding_tax": breakdown.withholding_tax.to_string(),
            "total": total.to_string()
        }),
        reasoning: format!(
            "Time-based ₱{} + contributions ₱{} + tax ₱{} = ₱{}",
            breakdown.late + breakdown.undertime + breakdown.unpaid_leave,
            breakdown.sss + breakdown.philhealth + breakdown.pagibig,
            breakdown.withholding_tax,
            total
        ),
    };

    Ok(DeductionResult {
        deductions: breakdown,
        audit_step,
    })
}
