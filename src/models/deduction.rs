//! Itemized deductions.
//!
//! [`Deduction`] is a closed set of deduction kinds, each carrying only the
//! inputs it needs. [`Deduction::amount`] is the single place where an item
//! is turned into money.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::round_money;
use crate::error::{EngineError, EngineResult};

/// A government-mandated contribution scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContributionScheme {
    /// Social Security System.
    Sss,
    /// PhilHealth national health insurance.
    PhilHealth,
    /// Pag-IBIG home development mutual fund.
    PagIbig,
}

impl ContributionScheme {
    /// Every scheme, in deduction order.
    pub const ALL: [ContributionScheme; 3] = [
        ContributionScheme::Sss,
        ContributionScheme::PhilHealth,
        ContributionScheme::PagIbig,
    ];

    /// Human-readable name of the scheme.
    pub fn label(self) -> &'static str {
        match self {
            ContributionScheme::Sss => "SSS",
            ContributionScheme::PhilHealth => "PhilHealth",
            ContributionScheme::PagIbig => "Pag-IBIG",
        }
    }
}

/// One deduction line for a payroll period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Deduction {
    /// Total minutes late across the period, charged at the hourly rate.
    Late {
        /// Minutes late summed over all attendance records.
        minutes: i64,
        /// Hourly rate used for the charge.
        hourly_rate: Decimal,
    },
    /// Total minutes of early departure, charged at the hourly rate.
    Undertime {
        /// Minutes of undertime summed over all attendance records.
        minutes: i64,
        /// Hourly rate used for the charge.
        hourly_rate: Decimal,
    },
    /// Weekdays of approved unpaid leave, charged at the daily rate.
    UnpaidLeave {
        /// Number of unpaid-leave weekdays in the period.
        days: u32,
        /// Daily rate used for the charge.
        daily_rate: Decimal,
    },
    /// An employee share of a government contribution.
    GovernmentContribution {
        /// The contribution scheme.
        scheme: ContributionScheme,
        /// The contribution amount.
        amount: Decimal,
    },
    /// Withholding tax on taxable income.
    Tax {
        /// Income the tax was computed on.
        taxable_income: Decimal,
        /// The withholding amount.
        amount: Decimal,
    },
}

impl Deduction {
    /// Short identifier for the deduction kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Deduction::Late { .. } => "late",
            Deduction::Undertime { .. } => "undertime",
            Deduction::UnpaidLeave { .. } => "unpaid_leave",
            Deduction::GovernmentContribution { scheme, .. } => match scheme {
                ContributionScheme::Sss => "sss",
                ContributionScheme::PhilHealth => "philhealth",
                ContributionScheme::PagIbig => "pagibig",
            },
            Deduction::Tax { .. } => "tax",
        }
    }

    /// Computes the money amount of this deduction, rounded to currency precision.
    ///
    /// # Errors
    ///
    /// Returns `CalculationError` if the item would produce a negative amount
    /// or overflow.
    /// Leaf computations clamp at zero, so a negative here is a defect upstream.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::Deduction;
    /// use rust_decimal::Decimal;
    ///
    /// let late = Deduction::Late { minutes: 30, hourly_rate: Decimal::from(100) };
    /// assert_eq!(late.amount().unwrap(), Decimal::new(5000, 2)); // 50.00
    ///
    /// let broken = Deduction::Late { minutes: -30, hourly_rate: Decimal::from(100) };
    /// assert!(broken.amount().is_err());
    /// ```
    pub fn amount(&self) -> EngineResult<Decimal> {
        let raw = match self {
            Deduction::Late {
                minutes,
                hourly_rate,
            }
            | Deduction::Undertime {
                minutes,
                hourly_rate,
            } => Decimal::from(*minutes)
                .checked_mul(*hourly_rate)
                .map(|amount| amount / Decimal::from(60)),
            Deduction::UnpaidLeave { days, daily_rate } => {
                Decimal::from(*days).checked_mul(*daily_rate)
            }
            Deduction::GovernmentContribution { amount, .. } | Deduction::Tax { amount, .. } => {
                Some(*amount)
            }
        }
        .ok_or_else(|| {
            EngineError::calculation(format!("{} deduction overflowed", self.kind()))
        })?;

        if raw < Decimal::ZERO {
            return Err(EngineError::calculation(format!(
                "{} deduction computed a negative amount: {}",
                self.kind(),
                raw
            )));
        }

        Ok(round_money(raw))
    }
}
