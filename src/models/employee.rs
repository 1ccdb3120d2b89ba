//! Employee profile model and related types.
//!
//! This module defines the [`EmployeeProfile`] record together with the
//! [`EmploymentStatus`] and [`EmploymentCategory`] enums that drive
//! required hours, overtime eligibility, and allowance eligibility.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Identifier of an employee. Positive and immutable once assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(pub u32);

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the employment status of an employee.
///
/// Status determines the required daily working hours and gates
/// overtime and allowance eligibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStatus {
    /// Regularized employee with full benefits.
    Regular,
    /// Employee serving a probationary period.
    Probationary,
    /// Fixed-term contractual employee.
    Contractual,
    /// Part-time employee working half days.
    PartTime,
}

impl EmploymentStatus {
    /// Returns the required working hours per day for this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmploymentStatus;
    /// use rust_decimal::Decimal;
    ///
    /// assert_eq!(EmploymentStatus::Regular.required_daily_hours(), Decimal::from(8));
    /// assert_eq!(EmploymentStatus::PartTime.required_daily_hours(), Decimal::from(4));
    /// ```
    pub fn required_daily_hours(self) -> Decimal {
        match self {
            EmploymentStatus::PartTime => Decimal::from(4),
            EmploymentStatus::Regular
            | EmploymentStatus::Probationary
            | EmploymentStatus::Contractual => Decimal::from(8),
        }
    }

    /// Returns true if hours beyond the required day may be paid as overtime.
    pub fn overtime_eligible(self) -> bool {
        !matches!(self, EmploymentStatus::Contractual)
    }

    /// Returns true if the status qualifies for rice subsidy and clothing allowance.
    pub fn rice_and_clothing_eligible(self) -> bool {
        matches!(
            self,
            EmploymentStatus::Regular | EmploymentStatus::Probationary
        )
    }

    /// Returns true if the status qualifies for the phone allowance.
    pub fn phone_eligible(self) -> bool {
        self == EmploymentStatus::Regular
    }
}

/// The organizational category of an employee.
///
/// Each category maps to a [`CategoryPolicy`](crate::config::CategoryPolicy)
/// in the payroll configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentCategory {
    /// Rank-and-file staff.
    #[default]
    Staff,
    /// Managerial employee.
    Manager,
    /// Externally contracted worker.
    Contractor,
    /// Human resources personnel.
    HrPersonnel,
}

/// Largest salary or allowance amount accepted, one trillion.
pub const MAX_MONEY_AMOUNT: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Fixed monthly allowance amounts granted to an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedAllowances {
    /// Rice subsidy.
    #[serde(default)]
    pub rice: Decimal,
    /// Phone allowance.
    #[serde(default)]
    pub phone: Decimal,
    /// Clothing allowance.
    #[serde(default)]
    pub clothing: Decimal,
}

/// Represents an employee subject to payroll calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: EmployeeId,
    /// Basic monthly salary.
    pub basic_salary: Decimal,
    /// Employment status.
    pub status: EmploymentStatus,
    /// Organizational category.
    #[serde(default)]
    pub category: EmploymentCategory,
    /// Fixed allowance amounts.
    #[serde(default)]
    pub allowances: FixedAllowances,
}

impl EmployeeProfile {
    /// Returns the required working hours per day, derived from status.
    pub fn required_daily_hours(&self) -> Decimal {
        self.status.required_daily_hours()
    }

    /// Checks the profile-level invariants.
    ///
    /// The identifier must be positive, and the salary and every allowance
    /// amount must lie within `0..=MAX_MONEY_AMOUNT`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::{EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances};
    /// use rust_decimal::Decimal;
    ///
    /// let profile = EmployeeProfile {
    ///     id: EmployeeId(1),
    ///     basic_salary: Decimal::from(-1),
    ///     status: EmploymentStatus::Regular,
    ///     category: EmploymentCategory::Staff,
    ///     allowances: FixedAllowances::default(),
    /// };
    /// assert!(profile.validate().is_err());
    /// ```
    pub fn validate(&self) -> EngineResult<()> {
        if self.id.0 == 0 {
            return Err(EngineError::validation(
                "employee identifier must be a positive integer",
            ));
        }
        let amounts = [
            ("basic salary", self.basic_salary),
            ("rice allowance", self.allowances.rice),
            ("phone allowance", self.allowances.phone),
            ("clothing allowance", self.allowances.clothing),
        ];
        for (name, amount) in amounts {
            if amount < Decimal::ZERO {
                return Err(EngineError::validation(format!(
                    "{} for employee {} cannot be negative: {}",
                    name, self.id, amount
                )));
            }
            if amount > MAX_MONEY_AMOUNT {
                return Err(EngineError::validation(format!(
                    "{} for employee {} exceeds {}: {}",
                    name, self.id, MAX_MONEY_AMOUNT, amount
                )));
            }
        }
        Ok(())
    }
}
