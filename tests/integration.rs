//! Integration tests for the Payroll Calculation Engine.
//!
//! This test suite covers:
//! - The full-month end-to-end scenario
//! - Zero-salary and negative-net-pay boundaries
//! - Grace period and undertime behavior
//! - Part-time rates, overtime, leave, and category policy
//! - Validation and lookup errors
//! - Batch isolation
//! - Idempotence and serialization
//! - Property tests over contribution schedules, tax, and net pay

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

use payroll_engine::calculation::{
    contributions, pagibig, philhealth, round_money, sss, withholding_tax,
};
use payroll_engine::config::{ConfigLoader, PayrollConfig, TaxBracket, WithholdingTaxTable};
use payroll_engine::engine::{InMemoryDataSource, PayrollCalculator, PayrollInput, run_batch};
use payroll_engine::error::EngineError;
use payroll_engine::models::{
    AttendanceRecord, Deduction, EmployeeId, EmployeeProfile, EmploymentCategory,
    EmploymentStatus, FixedAllowances, LeaveRequest, LeaveStatus, LeaveType, PayrollResult,
    PeriodRange,
};

// =============================================================================
// Test Helpers
// =============================================================================

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn date(month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, month, day).unwrap()
}

fn make_time(time_str: &str) -> NaiveTime {
    NaiveTime::parse_from_str(time_str, "%H:%M").unwrap()
}

fn january() -> PeriodRange {
    PeriodRange::new(date(1, 1), date(1, 31)).unwrap()
}

fn create_employee(id: u32, salary: &str, status: EmploymentStatus) -> EmployeeProfile {
    EmployeeProfile {
        id: EmployeeId(id),
        basic_salary: decimal(salary),
        status,
        category: EmploymentCategory::Staff,
        allowances: FixedAllowances {
            rice: decimal("1500"),
            phone: decimal("800"),
            clothing: decimal("1000"),
        },
    }
}

fn create_record(id: u32, day: NaiveDate, log_in: &str, log_out: Option<&str>) -> AttendanceRecord {
    AttendanceRecord::new(
        EmployeeId(id),
        day,
        Some(make_time(log_in)),
        log_out.map(make_time),
    )
    .unwrap()
}

/// One 08:00-17:00 record for every weekday of the period.
fn full_attendance(id: u32, period: &PeriodRange) -> Vec<AttendanceRecord> {
    period
        .dates()
        .filter(|d| !matches!(d.weekday(), Weekday::Sat | Weekday::Sun))
        .map(|d| create_record(id, d, "08:00", Some("17:00")))
        .collect()
}

fn calculate(input: &PayrollInput) -> PayrollResult {
    PayrollCalculator::default()
        .calculate(input)
        .expect("calculation should succeed")
}

fn assert_net_pay_consistent(result: &PayrollResult) {
    assert_eq!(
        result.net_pay(),
        result.gross_pay() - result.total_deductions(),
        "net pay must equal gross pay minus total deductions"
    );
}

// =============================================================================
// SECTION 1: End-to-End Scenario
// =============================================================================

#[test]
fn test_full_month_regular_employee() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));

    let result = calculate(&input);

    assert_eq!(result.days_worked, 22);
    assert_eq!(result.gross_earnings, decimal("25000.00"));
    assert_eq!(result.overtime_hours, Decimal::ZERO);
    assert_eq!(result.overtime_pay, Decimal::ZERO);
    assert_eq!(result.total_allowances(), decimal("3300.00"));
    assert_eq!(result.gross_pay(), decimal("28300.00"));

    assert_eq!(result.sss, decimal("1125.00"));
    assert_eq!(result.philhealth, decimal("625.00"));
    assert_eq!(result.pagibig, decimal("200.00"));
    // Taxable income 28300 - 2500 non-taxable = 25800; (25800 - 20833) × 0.15
    assert_eq!(result.withholding_tax, decimal("745.05"));

    assert_eq!(result.late_deduction, Decimal::ZERO);
    assert_eq!(result.undertime_deduction, Decimal::ZERO);
    assert_eq!(result.unpaid_leave_deduction, Decimal::ZERO);
    assert_eq!(result.total_deductions(), decimal("2695.05"));
    assert_eq!(result.net_pay(), decimal("25604.95"));
    assert_net_pay_consistent(&result);
    assert!(result.audit_trace.warnings.is_empty());
}

#[test]
fn test_itemized_deductions_match_fields() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));

    let result = calculate(&input);

    let items_total: Decimal = result
        .deductions
        .iter()
        .map(|d| d.amount().unwrap())
        .sum();
    assert_eq!(items_total, result.total_deductions());
    assert!(matches!(
        result.deductions.last(),
        Some(Deduction::Tax { taxable_income, .. }) if *taxable_income == decimal("25800.00")
    ));
}

// =============================================================================
// SECTION 2: Boundaries
// =============================================================================

#[test]
fn test_zero_salary_yields_zero_contributions() {
    let c = contributions(Decimal::ZERO);
    assert_eq!(c.sss, Decimal::ZERO);
    assert_eq!(c.philhealth, Decimal::ZERO);
    assert_eq!(c.pagibig, Decimal::ZERO);

    let period = january();
    let input = PayrollInput::new(create_employee(1, "0", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));
    let result = calculate(&input);

    assert_eq!(result.gross_earnings, Decimal::ZERO);
    assert_eq!(result.sss, Decimal::ZERO);
    assert_eq!(result.philhealth, Decimal::ZERO);
    assert_eq!(result.pagibig, Decimal::ZERO);
    assert_net_pay_consistent(&result);
}

#[test]
fn test_negative_net_pay_is_not_clamped() {
    let mut employee = create_employee(1, "4000", EmploymentStatus::Regular);
    employee.allowances = FixedAllowances::default();
    let input = PayrollInput::new(employee, january()).with_leaves(vec![LeaveRequest {
        employee_id: EmployeeId(1),
        start_date: date(1, 1),
        end_date: date(1, 31),
        leave_type: LeaveType::Unpaid,
        status: LeaveStatus::Approved,
    }]);

    let result = calculate(&input);

    // 22 weekdays of unpaid leave at 4000/22 plus contributions of 180 + 500 + 80
    assert_eq!(result.unpaid_leave_deduction, decimal("4000.00"));
    assert_eq!(result.net_pay(), decimal("-4760.00"));
    assert_net_pay_consistent(&result);
    assert!(
        result
            .audit_trace
            .warnings
            .iter()
            .any(|w| w.code == "NEGATIVE_NET_PAY")
    );
}

#[test]
fn test_empty_period_attendance() {
    let employee = create_employee(1, "25000", EmploymentStatus::Regular);
    let input = PayrollInput::new(employee, january());
    let result = calculate(&input);
    assert_eq!(result.days_worked, 0);
    assert_eq!(result.gross_earnings, Decimal::ZERO);
    assert_net_pay_consistent(&result);
}

// =============================================================================
// SECTION 3: Grace Period and Undertime
// =============================================================================

#[test]
fn test_grace_period_gates_but_is_not_subtracted() {
    let day = date(1, 5);
    let period = PeriodRange::new(day, day).unwrap();
    let employee = create_employee(1, "22000", EmploymentStatus::Regular);

    let within = PayrollInput::new(employee.clone(), period)
        .with_attendance(vec![create_record(1, day, "08:14", Some("17:00"))]);
    assert_eq!(calculate(&within).late_deduction, Decimal::ZERO);

    // 16 minutes at 125/hour
    let past = PayrollInput::new(employee, period)
        .with_attendance(vec![create_record(1, day, "08:16", Some("17:00"))]);
    assert_eq!(calculate(&past).late_deduction, decimal("33.33"));
}

#[test]
fn test_undertime_has_no_grace_window() {
    // Lateness tolerates 15 minutes; leaving even one minute early does not.
    let day = date(1, 5);
    let period = PeriodRange::new(day, day).unwrap();
    let input = PayrollInput::new(create_employee(1, "22000", EmploymentStatus::Regular), period)
        .with_attendance(vec![create_record(1, day, "08:00", Some("16:59"))]);

    let result = calculate(&input);

    assert_eq!(result.undertime_deduction, decimal("2.08"));
}

#[test]
fn test_invalid_record_rejected_at_construction() {
    let result = AttendanceRecord::new(
        EmployeeId(1),
        date(1, 5),
        Some(make_time("17:00")),
        Some(make_time("08:00")),
    );
    assert!(matches!(result, Err(EngineError::ValidationError { .. })));
}

#[test]
fn test_invalid_record_rejected_on_deserialize() {
    let json = r#"{"employee_id": 1, "date": "2026-01-05", "log_in": "17:00:00", "log_out": "08:00:00"}"#;
    assert!(serde_json::from_str::<AttendanceRecord>(json).is_err());
}

// =============================================================================
// SECTION 4: Status, Category, Overtime, and Leave
// =============================================================================

#[test]
fn test_part_time_uses_four_hour_day() {
    let day = date(1, 5);
    let period = PeriodRange::new(day, day).unwrap();
    let input = PayrollInput::new(create_employee(1, "22000", EmploymentStatus::PartTime), period)
        .with_attendance(vec![create_record(1, day, "08:30", Some("17:00"))]);

    let result = calculate(&input);

    // hourly = 1000 / 4 = 250
    assert_eq!(result.late_deduction, decimal("125.00"));
    // 8.5 hours less a 1 hour break, less 4 required = 3.5 hours × 250 × 1.25
    assert_eq!(result.overtime_hours, decimal("3.5"));
    assert_eq!(result.overtime_pay, decimal("1093.75"));
    assert_eq!(result.total_allowances(), Decimal::ZERO);
}

#[test]
fn test_part_time_day_ends_after_required_hours_and_meal_break() {
    let day = date(1, 5);
    let period = PeriodRange::new(day, day).unwrap();
    let employee = create_employee(1, "22000", EmploymentStatus::PartTime);

    // 08:00-13:00 is four hours plus the meal break: no undertime, no overtime.
    let input = PayrollInput::new(employee.clone(), period)
        .with_attendance(vec![create_record(1, day, "08:00", Some("13:00"))]);
    let result = calculate(&input);
    assert_eq!(result.gross_earnings, decimal("1000.00"));
    assert_eq!(result.undertime_deduction, Decimal::ZERO);
    assert_eq!(result.overtime_hours, Decimal::ZERO);

    // Leaving at 12:00 is one hour short of the part-time day, not five
    // hours short of the standard 17:00 end.
    let input = PayrollInput::new(employee, period)
        .with_attendance(vec![create_record(1, day, "08:00", Some("12:00"))]);
    let result = calculate(&input);
    assert_eq!(result.undertime_deduction, decimal("250.00"));
    assert!(result.undertime_deduction < result.gross_earnings);
}

#[test]
fn test_probationary_allowances() {
    let period = january();
    let employee = create_employee(1, "20000", EmploymentStatus::Probationary);
    let input = PayrollInput::new(employee, period)
        .with_attendance(full_attendance(1, &period));
    let result = calculate(&input);

    assert_eq!(result.rice_allowance, decimal("1500"));
    assert_eq!(result.phone_allowance, Decimal::ZERO);
    assert_eq!(result.clothing_allowance, decimal("1000"));
}

#[test]
fn test_contractor_category_policy() {
    let day = date(1, 5);
    let period = PeriodRange::new(day, day).unwrap();
    let mut employee = create_employee(1, "22000", EmploymentStatus::Regular);
    employee.category = EmploymentCategory::Contractor;
    let input = PayrollInput::new(employee, period)
        .with_attendance(vec![create_record(1, day, "08:00", Some("19:00"))]);

    let result = calculate(&input);

    // Contractors may be paid overtime but receive no allowances.
    assert_eq!(result.total_allowances(), Decimal::ZERO);
    assert_eq!(result.overtime_pay, decimal("312.50"));
}

#[test]
fn test_overtime_override() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period))
        .with_overtime_override(decimal("4"));

    let result = calculate(&input);

    // 4 × (25000 / 22 / 8) × 1.25 = 710.227...
    assert_eq!(result.overtime_hours, decimal("4"));
    assert_eq!(result.overtime_pay, decimal("710.23"));
    assert_net_pay_consistent(&result);
}

#[test]
fn test_unpaid_leave_counts_distinct_weekdays() {
    let period = january();
    let leave = |start: NaiveDate, end: NaiveDate, status| LeaveRequest {
        employee_id: EmployeeId(1),
        start_date: start,
        end_date: end,
        leave_type: LeaveType::Unpaid,
        status,
    };
    let input = PayrollInput::new(create_employee(1, "22000", EmploymentStatus::Regular), period)
        .with_leaves(vec![
            // Friday 9th to Monday 12th: 2 weekdays
            leave(date(1, 9), date(1, 12), LeaveStatus::Approved),
            // Overlaps Monday 12th again, adds Tuesday 13th
            leave(date(1, 12), date(1, 13), LeaveStatus::Approved),
            leave(date(1, 20), date(1, 20), LeaveStatus::Pending),
        ]);

    let result = calculate(&input);

    assert_eq!(result.unpaid_leave_deduction, decimal("3000"));
}

// =============================================================================
// SECTION 5: Validation and Lookup Errors
// =============================================================================

#[test]
fn test_inverted_period_rejected() {
    assert!(matches!(
        PeriodRange::new(date(1, 31), date(1, 1)),
        Err(EngineError::ValidationError { .. })
    ));
}

#[test]
fn test_negative_salary_rejected() {
    let input = PayrollInput::new(create_employee(1, "-1", EmploymentStatus::Regular), january());
    assert!(matches!(
        PayrollCalculator::default().calculate(&input),
        Err(EngineError::ValidationError { .. })
    ));
}

#[test]
fn test_mismatched_employee_rejected() {
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), january())
        .with_attendance(vec![create_record(2, date(1, 5), "08:00", Some("17:00"))]);
    assert!(matches!(
        PayrollCalculator::default().calculate(&input),
        Err(EngineError::ValidationError { .. })
    ));
}

#[test]
fn test_duplicate_dates_rejected() {
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), january())
        .with_attendance(vec![
            create_record(1, date(1, 5), "08:00", Some("17:00")),
            create_record(1, date(1, 5), "09:00", Some("17:00")),
        ]);
    assert!(matches!(
        PayrollCalculator::default().calculate(&input),
        Err(EngineError::ValidationError { .. })
    ));
}

// =============================================================================
// SECTION 6: Batch Runs
// =============================================================================

#[test]
fn test_batch_failures_are_independent() {
    let period = january();
    let mut source = InMemoryDataSource::new();
    source.add_employee(create_employee(1, "25000", EmploymentStatus::Regular));
    source.add_employee(create_employee(2, "-500", EmploymentStatus::Regular));
    source.add_employee(create_employee(3, "18000", EmploymentStatus::Contractual));
    for id in [1, 2, 3] {
        for record in full_attendance(id, &period) {
            source.add_attendance(record);
        }
    }

    let ids = [EmployeeId(1), EmployeeId(2), EmployeeId(4), EmployeeId(3)];
    let entries = run_batch(&PayrollCalculator::default(), &source, &ids, &period);

    assert_eq!(entries.len(), 4);
    assert_eq!(
        entries.iter().map(|e| e.employee_id).collect::<Vec<_>>(),
        ids.to_vec()
    );
    assert_eq!(
        entries[0].outcome.as_ref().unwrap().net_pay(),
        decimal("25604.95")
    );
    assert!(matches!(
        entries[1].outcome,
        Err(EngineError::ValidationError { .. })
    ));
    assert!(matches!(
        entries[2].outcome,
        Err(EngineError::NotFoundError { .. })
    ));
    assert!(entries[3].is_ok());
}

#[test]
fn test_batch_survives_out_of_range_amounts() {
    let period = january();
    let mut source = InMemoryDataSource::new();
    source.add_employee(create_employee(1, "25000", EmploymentStatus::Regular));
    let mut extreme = create_employee(2, "25000", EmploymentStatus::Regular);
    extreme.allowances.rice = Decimal::MAX;
    extreme.allowances.phone = Decimal::MAX;
    source.add_employee(extreme);
    for id in [1, 2] {
        for record in full_attendance(id, &period) {
            source.add_attendance(record);
        }
    }

    let ids = [EmployeeId(2), EmployeeId(1)];
    let entries = run_batch(&PayrollCalculator::default(), &source, &ids, &period);

    assert_eq!(entries.len(), 2);
    assert!(matches!(
        entries[0].outcome,
        Err(EngineError::ValidationError { .. })
    ));
    assert_eq!(
        entries[1].outcome.as_ref().unwrap().net_pay(),
        decimal("25604.95")
    );
}

#[test]
fn test_batch_matches_single_calculation() {
    let period = january();
    let mut source = InMemoryDataSource::new();
    let employee = create_employee(7, "31000", EmploymentStatus::Regular);
    source.add_employee(employee.clone());
    for record in full_attendance(7, &period) {
        source.add_attendance(record);
    }

    let calculator = PayrollCalculator::default();
    let entries = run_batch(&calculator, &source, &[EmployeeId(7)], &period);
    let single = calculator
        .calculate(
            &PayrollInput::new(employee, period).with_attendance(full_attendance(7, &period)),
        )
        .unwrap();

    assert_eq!(entries[0].outcome.as_ref().unwrap(), &single);
}

// =============================================================================
// SECTION 7: Idempotence, Configuration, and Serialization
// =============================================================================

#[test]
fn test_identical_inputs_give_identical_results() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));

    let first = calculate(&input);
    let second = calculate(&input);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[test]
fn test_calculator_from_shipped_configuration() {
    let loader = ConfigLoader::load("./config/ph_default").expect("Failed to load config");
    let calculator = PayrollCalculator::from(loader);
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));

    assert_eq!(calculator.calculate(&input).unwrap(), calculate(&input));
}

#[test]
fn test_custom_tax_table_is_applied() {
    let defaults = PayrollConfig::default();
    let flat = WithholdingTaxTable {
        name: "flat 10%".to_string(),
        brackets: vec![TaxBracket {
            over: Decimal::ZERO,
            rate: decimal("0.10"),
        }],
    };
    let calculator =
        PayrollCalculator::new(PayrollConfig::new(defaults.settings().clone(), flat).unwrap());
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));

    let result = calculator.calculate(&input).unwrap();

    assert_eq!(result.withholding_tax, decimal("2580.00"));
}

#[test]
fn test_serialized_result_includes_totals() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));
    let result = calculate(&input);

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["employee_id"], 1);
    assert_eq!(json["gross_pay"], "28300.00");
    assert_eq!(json["total_deductions"], "2695.05");
    assert_eq!(json["net_pay"], "25604.95");
    assert_eq!(json["deductions"][3]["kind"], "government_contribution");
    assert!(json["audit_trace"]["steps"].is_array());
}

#[test]
fn test_deserialized_totals_are_recomputed() {
    let period = january();
    let input = PayrollInput::new(create_employee(1, "25000", EmploymentStatus::Regular), period)
        .with_attendance(full_attendance(1, &period));
    let result = calculate(&input);

    let mut json = serde_json::to_value(&result).unwrap();
    json["net_pay"] = serde_json::json!("999999.99");
    let restored: PayrollResult = serde_json::from_value(json).unwrap();

    assert_eq!(restored.net_pay(), decimal("25604.95"));
    assert_eq!(restored, result);
}

// =============================================================================
// SECTION 8: Properties
// =============================================================================

fn salary() -> impl Strategy<Value = Decimal> {
    (0i64..100_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn status() -> impl Strategy<Value = EmploymentStatus> {
    prop_oneof![
        Just(EmploymentStatus::Regular),
        Just(EmploymentStatus::Probationary),
        Just(EmploymentStatus::Contractual),
        Just(EmploymentStatus::PartTime),
    ]
}

proptest! {
    #[test]
    fn prop_sss_minimum_bracket(cents in 1i64..=400_000) {
        prop_assert_eq!(sss(Decimal::new(cents, 2)), decimal("180.00"));
    }

    #[test]
    fn prop_sss_middle_and_top_brackets(s in salary()) {
        prop_assume!(s > decimal("4000"));
        let expected = if s <= decimal("25000") {
            round_money((s * decimal("0.045")).min(decimal("1125")))
        } else {
            decimal("1125")
        };
        prop_assert_eq!(sss(s), expected);
    }

    #[test]
    fn prop_philhealth_within_clamp(cents in 1i64..100_000_000) {
        let amount = philhealth(Decimal::new(cents, 2));
        prop_assert!(amount >= decimal("500") && amount <= decimal("5000"));
    }

    #[test]
    fn prop_pagibig_capped(s in salary()) {
        let amount = pagibig(s);
        prop_assert!(amount >= Decimal::ZERO && amount <= decimal("200"));
    }

    #[test]
    fn prop_contributions_monotonic(a in salary(), b in salary()) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let (cl, ch) = (contributions(low), contributions(high));
        prop_assert!(cl.sss <= ch.sss);
        prop_assert!(cl.philhealth <= ch.philhealth);
        prop_assert!(cl.pagibig <= ch.pagibig);
    }

    #[test]
    fn prop_tax_monotonic_and_continuous(cents in 0i64..200_000_000) {
        let table = WithholdingTaxTable::default();
        let income = Decimal::new(cents, 2);
        let step = withholding_tax(income + decimal("0.01"), &table)
            - withholding_tax(income, &table);
        prop_assert!(step >= Decimal::ZERO);
        prop_assert!(step <= decimal("0.01"));
    }

    #[test]
    fn prop_net_pay_equals_gross_minus_deductions(
        s in salary(),
        status in status(),
        days in 0usize..=22,
        late_minutes in 0u32..90,
        early_minutes in 0u32..90,
        overtime_cents in proptest::option::of(0i64..4_000),
        allowance_mills in proptest::array::uniform3(0i64..3_000_000),
    ) {
        let period = january();
        let mut employee = create_employee(1, "0", status);
        employee.basic_salary = s;
        employee.allowances = FixedAllowances {
            rice: Decimal::new(allowance_mills[0], 3),
            phone: Decimal::new(allowance_mills[1], 3),
            clothing: Decimal::new(allowance_mills[2], 3),
        };
        let start = NaiveTime::from_hms_opt(8, 0, 0).unwrap()
            + chrono::Duration::minutes(i64::from(late_minutes));
        let end = NaiveTime::from_hms_opt(17, 0, 0).unwrap()
            - chrono::Duration::minutes(i64::from(early_minutes));
        let attendance: Vec<_> = full_attendance(1, &period)
            .into_iter()
            .take(days)
            .map(|r| {
                AttendanceRecord::new(EmployeeId(1), r.date(), Some(start), Some(end)).unwrap()
            })
            .collect();
        let mut input = PayrollInput::new(employee, period).with_attendance(attendance);
        input.overtime_hours_override = overtime_cents.map(|c| Decimal::new(c, 2));

        let result = PayrollCalculator::default().calculate(&input).unwrap();

        prop_assert_eq!(result.net_pay(), result.gross_pay() - result.total_deductions());
        let money = [
            result.gross_earnings,
            result.overtime_pay,
            result.rice_allowance,
            result.phone_allowance,
            result.clothing_allowance,
            result.gross_pay(),
            result.total_deductions(),
            result.net_pay(),
        ];
        for amount in money {
            prop_assert_eq!(amount.round_dp(2), amount);
        }
        for deduction in &result.deductions {
            prop_assert!(deduction.amount().unwrap() >= Decimal::ZERO);
        }
    }

    #[test]
    fn prop_calculation_is_idempotent(s in salary(), status in status()) {
        let period = january();
        let mut employee = create_employee(1, "0", status);
        employee.basic_salary = s;
        let input =
            PayrollInput::new(employee, period).with_attendance(full_attendance(1, &period));
        let calculator = PayrollCalculator::default();

        prop_assert_eq!(
            calculator.calculate(&input).unwrap(),
            calculator.calculate(&input).unwrap()
        );
    }
}
