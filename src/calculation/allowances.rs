//! Fixed allowance aggregation.
//!
//! Rice subsidy and clothing allowance go to Regular and Probationary
//! employees; the phone allowance only to Regular ones. The category policy
//! can withhold all three. An ineligible allowance contributes zero; a
//! granted one is rounded to currency precision.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{CategoryPolicy, NonTaxableAllowances};
use crate::models::{AuditStep, EmployeeProfile};

use super::round_money;

/// Allowance amounts granted for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Rice subsidy.
    pub rice: Decimal,
    /// Phone allowance.
    pub phone: Decimal,
    /// Clothing allowance.
    pub clothing: Decimal,
}

impl AllowanceBreakdown {
    /// Sum of all granted allowances.
    pub fn total(&self) -> Decimal {
        self.rice + self.phone + self.clothing
    }

    /// Portion of the total excluded from taxable income.
    pub fn non_taxable(&self, exempt: &NonTaxableAllowances) -> Decimal {
        [
            (exempt.rice, self.rice),
            (exempt.phone, self.phone),
            (exempt.clothing, self.clothing),
        ]
        .into_iter()
        .filter(|(is_exempt, _)| *is_exempt)
        .map(|(_, amount)| amount)
        .sum()
    }
}

/// The result of aggregating allowances, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceResult {
    /// The granted allowances.
    pub allowances: AllowanceBreakdown,
    /// The audit step recording eligibility decisions.
    pub audit_step: AuditStep,
}

/// Aggregates the fixed allowances an employee is eligible for.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_allowances;
/// use payroll_engine::config::CategoryPolicies;
/// use payroll_engine::models::{EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances};
/// use rust_decimal::Decimal;
///
/// let profile = EmployeeProfile {
///     id: EmployeeId(7),
///     basic_salary: Decimal::from(20000),
///     status: EmploymentStatus::Probationary,
///     category: EmploymentCategory::Staff,
///     allowances: FixedAllowances {
///         rice: Decimal::from(1500),
///         phone: Decimal::from(800),
///         clothing: Decimal::from(1000),
///     },
/// };
/// let policy = CategoryPolicies::default().get(EmploymentCategory::Staff);
///
/// let result = calculate_allowances(&profile, policy, 4);
/// assert_eq!(result.allowances.phone, Decimal::ZERO); // Regular only
/// assert_eq!(result.allowances.total(), Decimal::from(2500));
/// ```
pub fn calculate_allowances(
    profile: &EmployeeProfile,
    policy: CategoryPolicy,
    step_number: u32,
) -> AllowanceResult {
    let status = profile.status;
    let rice_and_clothing = policy.allowances_eligible && status.rice_and_clothing_eligible();
    let phone = policy.allowances_eligible && status.phone_eligible();

    let grant = |eligible: bool, amount: Decimal| {
        if eligible { round_money(amount) } else { Decimal::ZERO }
    };

    let allowances = AllowanceBreakdown {
        rice: grant(rice_and_clothing, profile.allowances.rice),
        phone: grant(phone, profile.allowances.phone),
        clothing: grant(rice_and_clothing, profile.allowances.clothing),
    };

    let reasoning = if !policy.allowances_eligible {
        format!(
            "{:?} category is not eligible for allowances",
            profile.category
        )
    } else {
        format!(
            "{:?} status: rice/clothing {}, phone {}; total ₱{}",
            status,
            if rice_and_clothing { "granted" } else { "withheld" },
            if phone { "granted" } else { "withheld" },
            allowances.total()
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "allowances".to_string(),
        rule_name: "Fixed Allowances".to_string(),
        legal_basis: "Company policy: allowance eligibility by status".to_string(),
        input: serde_json::json!({
            "status": status,
            "category": profile.category,
            "rice": profile.allowances.rice.to_string(),
            "phone": profile.allowances.phone.to_string(),
            "clothing": profile.allowances.clothing.to_string()
        }),
        output: serde_json::json!({
            "rice": allowances.rice.to_string(),
            "phone": allowances.phone.to_string(),
            "clothing": allowances.clothing.to_string(),
            "total": allowances.total().to_string()
        }),
        reasoning,
    };

    AllowanceResult {
        allowances,
        audit_step,
    }
}
