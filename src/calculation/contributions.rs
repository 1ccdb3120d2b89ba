//! Government contribution schedules.
//!
//! Employee shares of the SSS, PhilHealth, and Pag-IBIG contributions as
//! pure functions of the basic monthly salary. A zero or negative salary
//! yields zero for every scheme.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AuditStep, ContributionScheme};

use super::round_money;

const SSS_MINIMUM_BRACKET: Decimal = Decimal::from_parts(4000, 0, 0, false, 0);
const SSS_MAXIMUM_BRACKET: Decimal = Decimal::from_parts(25000, 0, 0, false, 0);
const SSS_MINIMUM: Decimal = Decimal::from_parts(180, 0, 0, false, 0);
const SSS_MAXIMUM: Decimal = Decimal::from_parts(1125, 0, 0, false, 0);
const SSS_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 3);

const PHILHEALTH_RATE: Decimal = Decimal::from_parts(25, 0, 0, false, 3);
const PHILHEALTH_FLOOR: Decimal = Decimal::from_parts(500, 0, 0, false, 0);
const PHILHEALTH_CEILING: Decimal = Decimal::from_parts(5000, 0, 0, false, 0);

const PAGIBIG_LOW_BRACKET: Decimal = Decimal::from_parts(1500, 0, 0, false, 0);
const PAGIBIG_LOW_RATE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);
const PAGIBIG_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);
const PAGIBIG_MAXIMUM: Decimal = Decimal::from_parts(200, 0, 0, false, 0);

/// SSS employee contribution for a monthly salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::sss;
/// use rust_decimal::Decimal;
///
/// assert_eq!(sss(Decimal::from(3000)), Decimal::from(180));
/// assert_eq!(sss(Decimal::from(20000)), Decimal::from(900));
/// assert_eq!(sss(Decimal::from(80000)), Decimal::from(1125));
/// ```
pub fn sss(salary: Decimal) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let amount = if salary <= SSS_MINIMUM_BRACKET {
        SSS_MINIMUM
    } else if salary <= SSS_MAXIMUM_BRACKET {
        (salary * SSS_RATE).min(SSS_MAXIMUM)
    } else {
        SSS_MAXIMUM
    };
    round_money(amount)
}

/// PhilHealth employee contribution: 2.5% of salary within [500, 5000].
pub fn philhealth(salary: Decimal) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    round_money(
        (salary * PHILHEALTH_RATE)
            .max(PHILHEALTH_FLOOR)
            .min(PHILHEALTH_CEILING),
    )
}

/// Pag-IBIG employee contribution: 1% up to 1500, then 2% capped at 200.
pub fn pagibig(salary: Decimal) -> Decimal {
    if salary <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let amount = if salary <= PAGIBIG_LOW_BRACKET {
        salary * PAGIBIG_LOW_RATE
    } else {
        (salary * PAGIBIG_RATE).min(PAGIBIG_MAXIMUM)
    };
    round_money(amount)
}

/// The three employee contribution amounts for one salary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Contributions {
    /// Social Security System share.
    pub sss: Decimal,
    /// PhilHealth share.
    pub philhealth: Decimal,
    /// Pag-IBIG (HDMF) share.
    pub pagibig: Decimal,
}

impl Contributions {
    /// Sum of the three contributions.
    pub fn total(&self) -> Decimal {
        self.sss + self.philhealth + self.pagibig
    }

    /// The amount for one scheme.
    pub fn get(&self, scheme: ContributionScheme) -> Decimal {
        match scheme {
            ContributionScheme::Sss => self.sss,
            ContributionScheme::PhilHealth => self.philhealth,
            ContributionScheme::PagIbig => self.pagibig,
        }
    }
}

/// Computes all three contributions for a monthly salary.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::contributions;
/// use rust_decimal::Decimal;
///
/// let c = contributions(Decimal::from(25000));
/// assert_eq!(c.sss, Decimal::from(1125));
/// assert_eq!(c.philhealth, Decimal::from(625));
/// assert_eq!(c.pagibig, Decimal::from(200));
///
/// assert_eq!(contributions(Decimal::ZERO).total(), Decimal::ZERO);
/// ```
pub fn contributions(salary: Decimal) -> Contributions {
    Contributions {
        sss: sss(salary),
        philhealth: philhealth(salary),
        pagibig: pagibig(salary),
    }
}

/// The result of computing contributions, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContributionsResult {
    /// The computed contributions.
    pub contributions: Contributions,
    /// The audit step recording the lookup.
    pub audit_step: AuditStep,
}

/// Computes contributions and records an audit step.
pub fn calculate_contributions(salary: Decimal, step_number: u32) -> ContributionsResult {
    let contributions = contributions(salary);
    let shares: Vec<String> = ContributionScheme::ALL
        .into_iter()
        .map(|scheme| format!("{} ₱{}", scheme.label(), contributions.get(scheme)))
        .collect();

    let audit_step = AuditStep {
        step_number,
        rule_id: "government_contributions".to_string(),
        rule_name: "Government Contributions".to_string(),
        legal_basis: "RA 11199 (SSS), RA 11223 (PhilHealth), RA 9679 (Pag-IBIG)".to_string(),
        input: serde_json::json!({
            "basic_salary": salary.normalize().to_string()
        }),
        output: serde_json::json!({
            "sss": contributions.sss.to_string(),
            "philhealth": contributions.philhealth.to_string(),
            "pagibig": contributions.pagibig.to_string()
        }),
        reasoning: format!("Salary ₱{}: {}", salary.normalize(), shares.join(", ")),
    };

    ContributionsResult {
        contributions,
        audit_step,
    }
}
