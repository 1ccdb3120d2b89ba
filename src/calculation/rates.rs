//! Rate derivation and currency rounding.
//!
//! Daily and hourly rates are kept at full precision for intermediate
//! arithmetic; only result fields are rounded to currency precision.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::models::AuditStep;

/// Number of decimal places kept for currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to currency precision, midpoint away from zero.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_money(Decimal::from_str("745.045").unwrap()), Decimal::from_str("745.05").unwrap());
/// assert_eq!(round_money(Decimal::from_str("1136.3636").unwrap()), Decimal::from_str("1136.36").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly, daily, and hourly rates for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRates {
    /// Basic monthly salary.
    pub monthly: Decimal,
    /// Monthly salary ÷ working days per month (full precision).
    pub daily: Decimal,
    /// Daily rate ÷ required hours per day (full precision).
    pub hourly: Decimal,
}

/// The result of deriving pay rates, including the audit step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayRatesResult {
    /// The derived rates.
    pub rates: PayRates,
    /// The audit step recording the derivation.
    pub audit_step: AuditStep,
}

/// Derives the daily and hourly rates from a monthly salary.
///
/// A zero divisor yields zero rates; configuration validation rejects
/// zero working days, and required hours are always 4 or 8.
///
/// # Arguments
///
/// * `monthly` - The employee's basic monthly salary
/// * `working_days_per_month` - Working days per month (e.g., 22)
/// * `required_daily_hours` - Required hours per day for the employee's status
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Returns a `PayRatesResult` containing the full-precision rates and the
/// audit step, whose output shows them rounded to currency precision.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::derive_rates;
/// use rust_decimal::Decimal;
///
/// let result = derive_rates(Decimal::from(22000), 22, Decimal::from(8), 1);
/// assert_eq!(result.rates.daily, Decimal::from(1000));
/// assert_eq!(result.rates.hourly, Decimal::from(125));
/// ```
pub fn derive_rates(
    monthly: Decimal,
    working_days_per_month: u32,
    required_daily_hours: Decimal,
    step_number: u32,
) -> PayRatesResult {
    let days = Decimal::from(working_days_per_month);
    let daily = monthly.checked_div(days).unwrap_or(Decimal::ZERO);
    let hourly = daily
        .checked_div(required_daily_hours)
        .unwrap_or(Decimal::ZERO);

    let audit_step = AuditStep {
        step_number,
        rule_id: "rate_derivation".to_string(),
        rule_name: "Rate Derivation".to_string(),
        legal_basis: "Company policy: monthly rate over assumed working days".to_string(),
        input: serde_json::json!({
            "monthly_rate": monthly.normalize().to_string(),
            "working_days_per_month": working_days_per_month,
            "required_daily_hours": required_daily_hours.normalize().to_string()
        }),
        output: serde_json::json!({
            "daily_rate": round_money(daily).to_string(),
            "hourly_rate": round_money(hourly).to_string()
        }),
        reasoning: format!(
            "₱{} / {} days = ₱{} daily; / {} hours = ₱{} hourly",
            monthly.normalize(),
            working_days_per_month,
            round_money(daily),
            required_daily_hours.normalize(),
            round_money(hourly)
        ),
    };

    PayRatesResult {
        rates: PayRates {
            monthly,
            daily,
            hourly,
        },
        audit_step,
    }
}
