//! Configuration types for payroll calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, along with built-in
//! defaults matching the shipped `config/ph_default` directory.

use chrono::{Duration, NaiveTime};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::EmploymentCategory;

/// Standard shift boundaries used to evaluate attendance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftSchedule {
    /// Standard shift start (e.g., 08:00).
    pub start: NaiveTime,
    /// Standard shift end (e.g., 17:00).
    pub end: NaiveTime,
    /// Minutes after `start` within which arrival is not penalized.
    pub grace_minutes: u32,
    /// Worked hours at or above which a day counts as a full day.
    pub full_day_hours: Decimal,
    /// Unpaid meal break excluded from worked time when deriving overtime.
    pub meal_break_minutes: u32,
}

impl Default for ShiftSchedule {
    fn default() -> Self {
        Self {
            start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            end: NaiveTime::from_hms_opt(17, 0, 0).unwrap_or_default(),
            grace_minutes: 15,
            full_day_hours: Decimal::from(8),
            meal_break_minutes: 60,
        }
    }
}

impl ShiftSchedule {
    /// The shift as worked by an employee owing `required_hours` a day.
    ///
    /// The scheduled end moves to `start` + required hours + meal break,
    /// never past `end`, and the full-day threshold drops to the required
    /// hours. An eight-hour employee keeps the standard shift unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::config::ShiftSchedule;
    /// use chrono::NaiveTime;
    /// use rust_decimal::Decimal;
    ///
    /// let half_day = ShiftSchedule::default().for_required_hours(Decimal::from(4));
    /// assert_eq!(half_day.end, NaiveTime::from_hms_opt(13, 0, 0).unwrap());
    /// assert_eq!(half_day.full_day_hours, Decimal::from(4));
    /// ```
    pub fn for_required_hours(&self, required_hours: Decimal) -> ShiftSchedule {
        let scheduled_minutes = (required_hours * Decimal::from(60))
            .round()
            .to_i64()
            .map(|minutes| minutes + i64::from(self.meal_break_minutes));
        let end = match scheduled_minutes {
            Some(minutes) if minutes >= 0 && minutes < 24 * 60 => {
                let (end, wrapped) = self.start.overflowing_add_signed(Duration::minutes(minutes));
                if wrapped == 0 { end.min(self.end) } else { self.end }
            }
            _ => self.end,
        };

        ShiftSchedule {
            end,
            full_day_hours: self.full_day_hours.min(required_hours),
            ..self.clone()
        }
    }
}

/// Which allowance types are excluded from taxable income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NonTaxableAllowances {
    /// Rice subsidy is non-taxable.
    pub rice: bool,
    /// Phone allowance is non-taxable.
    pub phone: bool,
    /// Clothing allowance is non-taxable.
    pub clothing: bool,
}

impl Default for NonTaxableAllowances {
    fn default() -> Self {
        Self {
            rice: true,
            phone: false,
            clothing: true,
        }
    }
}

/// Pay policy parameters for one employment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicy {
    /// Whether the category may be paid overtime.
    pub overtime_eligible: bool,
    /// Whether the category may receive fixed allowances.
    pub allowances_eligible: bool,
}

/// Policy table covering every employment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPolicies {
    /// Policy for rank-and-file staff.
    pub staff: CategoryPolicy,
    /// Policy for managers.
    pub manager: CategoryPolicy,
    /// Policy for contractors.
    pub contractor: CategoryPolicy,
    /// Policy for HR personnel.
    pub hr_personnel: CategoryPolicy,
}

impl CategoryPolicies {
    /// Returns the policy for a category.
    pub fn get(&self, category: EmploymentCategory) -> CategoryPolicy {
        match category {
            EmploymentCategory::Staff => self.staff,
            EmploymentCategory::Manager => self.manager,
            EmploymentCategory::Contractor => self.contractor,
            EmploymentCategory::HrPersonnel => self.hr_personnel,
        }
    }
}

impl Default for CategoryPolicies {
    fn default() -> Self {
        Self {
            staff: CategoryPolicy {
                overtime_eligible: true,
                allowances_eligible: true,
            },
            manager: CategoryPolicy {
                overtime_eligible: false,
                allowances_eligible: true,
            },
            contractor: CategoryPolicy {
                overtime_eligible: true,
                allowances_eligible: false,
            },
            hr_personnel: CategoryPolicy {
                overtime_eligible: true,
                allowances_eligible: true,
            },
        }
    }
}

/// General payroll settings from `payroll.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollSettings {
    /// Standard shift boundaries.
    pub shift: ShiftSchedule,
    /// Assumed working days per month used to derive the daily rate.
    pub working_days_per_month: u32,
    /// Multiplier applied to the hourly rate for overtime.
    pub overtime_multiplier: Decimal,
    /// Allowances excluded from taxable income.
    pub non_taxable_allowances: NonTaxableAllowances,
    /// Per-category pay policy.
    pub category_policies: CategoryPolicies,
}

impl Default for PayrollSettings {
    fn default() -> Self {
        Self {
            shift: ShiftSchedule::default(),
            working_days_per_month: 22,
            overtime_multiplier: Decimal::new(125, 2),
            non_taxable_allowances: NonTaxableAllowances::default(),
            category_policies: CategoryPolicies::default(),
        }
    }
}

/// One bracket of a progressive withholding schedule.
///
/// Income above `over` (up to the next bracket's `over`) is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Lower bound of the bracket (exclusive).
    pub over: Decimal,
    /// Marginal rate applied within the bracket.
    pub rate: Decimal,
}

/// Withholding tax table from `withholding_tax.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WithholdingTaxTable {
    /// Name of the schedule (e.g., "TRAIN monthly 2023").
    pub name: String,
    /// Brackets sorted by ascending `over`.
    pub brackets: Vec<TaxBracket>,
}

impl Default for WithholdingTaxTable {
    fn default() -> Self {
        let bracket = |over: i64, rate: i64| TaxBracket {
            over: Decimal::from(over),
            rate: Decimal::new(rate, 2),
        };
        Self {
            name: "TRAIN monthly 2023".to_string(),
            brackets: vec![
                bracket(20_833, 15),
                bracket(33_333, 20),
                bracket(66_667, 25),
                bracket(166_667, 30),
                bracket(666_667, 35),
            ],
        }
    }
}

impl WithholdingTaxTable {
    /// Checks that thresholds ascend strictly from zero or above and that
    /// every rate lies within [0, 1].
    pub fn validate(&self) -> EngineResult<()> {
        let mut previous: Option<Decimal> = None;
        for bracket in &self.brackets {
            if bracket.over < Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("tax bracket threshold {} is negative", bracket.over),
                });
            }
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(EngineError::InvalidConfig {
                    message: format!(
                        "tax bracket over {} has rate {} outside [0, 1]",
                        bracket.over, bracket.rate
                    ),
                });
            }
            if let Some(prev) = previous {
                if bracket.over <= prev {
                    return Err(EngineError::InvalidConfig {
                        message: format!(
                            "tax bracket thresholds must ascend: {} follows {}",
                            bracket.over, prev
                        ),
                    });
                }
            }
            previous = Some(bracket.over);
        }
        Ok(())
    }
}

/// The complete payroll configuration.
///
/// Construct with [`PayrollConfig::new`] (validated) or use
/// [`PayrollConfig::default`] for the built-in schedule.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PayrollConfig {
    settings: PayrollSettings,
    tax_table: WithholdingTaxTable,
}

impl PayrollConfig {
    /// Creates a new PayrollConfig from its component parts.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfig` if the settings or the tax table are inconsistent.
    pub fn new(settings: PayrollSettings, tax_table: WithholdingTaxTable) -> EngineResult<Self> {
        let config = Self {
            settings,
            tax_table,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks rate constants, the shift schedule, and the tax table.
    pub fn validate(&self) -> EngineResult<()> {
        let settings = &self.settings;
        if settings.working_days_per_month == 0 {
            return Err(EngineError::InvalidConfig {
                message: "working_days_per_month must be positive".to_string(),
            });
        }
        if settings.overtime_multiplier < Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "overtime_multiplier cannot be negative: {}",
                    settings.overtime_multiplier
                ),
            });
        }
        if settings.shift.end <= settings.shift.start {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "shift end {} must be after shift start {}",
                    settings.shift.end, settings.shift.start
                ),
            });
        }
        self.tax_table.validate()
    }

    /// Returns the general payroll settings.
    pub fn settings(&self) -> &PayrollSettings {
        &self.settings
    }

    /// Returns the withholding tax table.
    pub fn tax_table(&self) -> &WithholdingTaxTable {
        &self.tax_table
    }

    /// Returns the standard shift schedule.
    pub fn shift(&self) -> &ShiftSchedule {
        &self.settings.shift
    }

    /// Returns the policy for an employment category.
    pub fn policy(&self, category: EmploymentCategory) -> CategoryPolicy {
        self.settings.category_policies.get(category)
    }
}
