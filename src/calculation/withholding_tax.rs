//! Withholding tax on taxable income.
//!
//! The schedule is a configured list of `(over, rate)` brackets. Each rate
//! applies only to the slice of income between its threshold and the next
//! one, so the tax is continuous at every boundary.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::WithholdingTaxTable;
use crate::models::AuditStep;

use super::round_money;

/// Computes withholding tax for a period's taxable income.
///
/// Income at or below the first threshold, or zero/negative income,
/// yields zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::withholding_tax;
/// use payroll_engine::config::WithholdingTaxTable;
/// use rust_decimal::Decimal;
///
/// let table = WithholdingTaxTable::default();
/// assert_eq!(withholding_tax(Decimal::from(20000), &table), Decimal::ZERO);
/// // (25800 - 20833) × 0.15
/// assert_eq!(withholding_tax(Decimal::from(25800), &table), Decimal::new(74505, 2));
/// ```
pub fn withholding_tax(taxable_income: Decimal, table: &WithholdingTaxTable) -> Decimal {
    if taxable_income <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    let mut tax = Decimal::ZERO;
    for (index, bracket) in table.brackets.iter().enumerate() {
        if taxable_income <= bracket.over {
            break;
        }
        let upper = table
            .brackets
            .get(index + 1)
            .map_or(taxable_income, |next| taxable_income.min(next.over));
        tax += (upper - bracket.over) * bracket.rate;
    }

    round_money(tax)
}

/// The result of computing withholding tax, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingTaxResult {
    /// Income the tax was computed on.
    pub taxable_income: Decimal,
    /// The withholding amount.
    pub tax: Decimal,
    /// The audit step recording the computation.
    pub audit_step: AuditStep,
}

/// Computes withholding tax and records an audit step.
///
/// # Arguments
///
/// * `taxable_income` - Gross pay less non-taxable allowances
/// * `table` - The configured bracket schedule
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `WithholdingTaxResult` containing:
/// - the tax from [`withholding_tax`]
/// - an audit step naming the marginal rate, or `null` when exempt
pub fn calculate_withholding_tax(
    taxable_income: Decimal,
    table: &WithholdingTaxTable,
    step_number: u32,
) -> WithholdingTaxResult {
    let tax = withholding_tax(taxable_income, table);

    let bracket = table
        .brackets
        .iter()
        .rev()
        .find(|b| taxable_income > b.over);
    let reasoning = match bracket {
        Some(b) => format!(
            "Taxable income ₱{} falls above ₱{} at marginal rate {}; tax ₱{}",
            taxable_income,
            b.over,
            b.rate.normalize(),
            tax
        ),
        None => format!(
            "Taxable income ₱{} is within the exempt bracket",
            taxable_income
        ),
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "withholding_tax".to_string(),
        rule_name: "Withholding Tax".to_string(),
        legal_basis: format!("RA 10963 (TRAIN), schedule '{}'", table.name),
        input: serde_json::json!({
            "taxable_income": taxable_income.to_string(),
            "schedule": table.name
        }),
        output: serde_json::json!({
            "withholding_tax": tax.to_string(),
            "marginal_rate": bracket.map(|b| b.rate.normalize().to_string())
        }),
        reasoning,
    };

    WithholdingTaxResult {
        taxable_income,
        tax,
        audit_step,
    }
}
