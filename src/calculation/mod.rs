//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the leaf computations the calculator drives: rate
//! derivation and currency rounding, attendance time evaluation, overtime,
//! government contributions, withholding tax, allowance aggregation, and
//! deduction assembly. Each is a pure function that returns its value
//! together with an [`AuditStep`](crate::models::AuditStep).

mod allowances;
mod contributions;
mod deductions;
mod overtime;
mod rates;
mod time_evaluation;
mod withholding_tax;

pub use allowances::{AllowanceBreakdown, AllowanceResult, calculate_allowances};
pub use contributions::{
    Contributions, ContributionsResult, calculate_contributions, contributions, pagibig,
    philhealth, sss,
};
pub use deductions::{DeductionBreakdown, DeductionInputs, DeductionResult, assemble_deductions};
pub use overtime::{
    OvertimeResult, OvertimeSource, calculate_overtime, daily_overtime_hours,
    derive_overtime_hours,
};
pub use rates::{CURRENCY_DECIMAL_PLACES, PayRates, PayRatesResult, derive_rates, round_money};
pub use time_evaluation::{
    AttendanceSummary, AttendanceSummaryResult, TimeEvaluation, evaluate_attendance,
    summarize_attendance,
};
pub use withholding_tax::{WithholdingTaxResult, calculate_withholding_tax, withholding_tax};
