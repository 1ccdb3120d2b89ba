//! Batch payroll runs across many employees.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::EngineResult;
use crate::models::{EmployeeId, PayrollResult, PeriodRange};

use super::{PayrollCalculator, PayrollDataSource};

/// The outcome of one employee's calculation within a batch.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    /// The employee the entry is for.
    pub employee_id: EmployeeId,
    /// The result, or the error that stopped this employee.
    #[serde(with = "outcome")]
    pub outcome: EngineResult<PayrollResult>,
}

impl BatchEntry {
    /// Returns true if the calculation succeeded.
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Serializes an outcome as `{"result": ...}` or `{"error": "..."}`.
mod outcome {
    use serde::{Serialize, Serializer};

    use crate::error::EngineResult;
    use crate::models::PayrollResult;

    #[derive(Serialize)]
    #[serde(rename_all = "snake_case")]
    enum Outcome<'a> {
        Result(&'a PayrollResult),
        Error(String),
    }

    pub fn serialize<S: Serializer>(
        outcome: &EngineResult<PayrollResult>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match outcome {
            Ok(result) => Outcome::Result(result).serialize(serializer),
            Err(err) => Outcome::Error(err.to_string()).serialize(serializer),
        }
    }
}

/// Runs payroll for every listed employee over one period.
///
/// Employees are calculated in parallel and fail independently: a lookup
/// miss or a validation error affects only that employee's entry. Entries
/// come back in the order of `employee_ids`.
///
/// # Example
///
/// ```
/// use payroll_engine::engine::{InMemoryDataSource, PayrollCalculator, run_batch};
/// use payroll_engine::models::{EmployeeId, EmployeeProfile, EmploymentCategory, EmploymentStatus, FixedAllowances, PeriodRange};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let mut source = InMemoryDataSource::new();
/// source.add_employee(EmployeeProfile {
///     id: EmployeeId(1),
///     basic_salary: Decimal::from(20000),
///     status: EmploymentStatus::Regular,
///     category: EmploymentCategory::Staff,
///     allowances: FixedAllowances::default(),
/// });
/// let period = PeriodRange::new(
///     NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2026, 1, 31).unwrap(),
/// ).unwrap();
///
/// let entries = run_batch(&PayrollCalculator::default(), &source, &[EmployeeId(1), EmployeeId(2)], &period);
/// assert!(entries[0].is_ok());
/// assert!(!entries[1].is_ok()); // not found
/// ```
pub fn run_batch<S: PayrollDataSource>(
    calculator: &PayrollCalculator,
    source: &S,
    employee_ids: &[EmployeeId],
    period: &PeriodRange,
) -> Vec<BatchEntry> {
    let entries: Vec<BatchEntry> = employee_ids
        .par_iter()
        .map(|&employee_id| {
            let outcome = source
                .payroll_input(employee_id, period)
                .and_then(|input| calculator.calculate(&input));
            BatchEntry {
                employee_id,
                outcome,
            }
        })
        .collect();

    let mut failed = 0usize;
    for entry in &entries {
        if let Err(err) = &entry.outcome {
            failed += 1;
            warn!(employee_id = %entry.employee_id, error = %err, "Batch entry failed");
        }
    }
    info!(
        period_start = %period.start_date,
        period_end = %period.end_date,
        succeeded = entries.len() - failed,
        failed,
        "Payroll batch completed"
    );

    entries
}
