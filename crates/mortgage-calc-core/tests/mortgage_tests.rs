use mortgage_calc_core::mortgage::calculator::{CalculatorState, DisplayState};
use mortgage_calc_core::mortgage::input::{FieldId, LoanInput, MortgageType};
use mortgage_calc_core::mortgage::repayment::{self, RepaymentRequest};
use mortgage_calc_core::mortgage::validation::{validate, REQUIRED_MESSAGE};
use mortgage_calc_core::time_value::ZeroRatePolicy;
use mortgage_calc_core::MortgageCalcError;
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

// ===========================================================================
// Validation
// ===========================================================================

#[test]
fn test_missing_fields_reported_in_declaration_order() {
    let input = LoanInput {
        amount: None,
        term_years: Some(30),
        annual_rate_percent: None,
        mortgage_type: Some(MortgageType::Repayment),
    };
    let errors = validate(&input);

    let ids: Vec<&str> = errors.iter().map(|e| e.field.id()).collect();
    assert_eq!(ids, vec!["mortgageAmount", "interestRate"]);
    assert!(errors.iter().all(|e| e.message == REQUIRED_MESSAGE));
}

#[test]
fn test_validation_error_message_names_fields() {
    let request = RepaymentRequest::default();
    let err = repayment::calculate_repayments(&request).unwrap_err();
    let message = err.to_string();

    assert!(message.contains("Mortgage Amount"));
    assert!(message.contains("Mortgage Type"));
    assert_eq!(err.field_errors().len(), 4);
}

// ===========================================================================
// Payment calculation
// ===========================================================================

#[test]
fn test_repayment_100k_25y_6pct() {
    let request = RepaymentRequest {
        input: LoanInput::new(dec!(100_000), 25, dec!(6), MortgageType::Repayment),
        zero_rate_policy: ZeroRatePolicy::Linear,
    };
    let out = repayment::calculate_repayments(&request).unwrap();

    assert_eq!(out.result.monthly_payment, dec!(644.30));
    assert_eq!(out.result.total_repayment, dec!(193_290.00));
    assert_eq!(out.result.monthly_rate, dec!(0.005));
}

#[test]
fn test_repayment_300k_30y_5pct() {
    // Standard table value: 300k at 5% over 30 years ≈ 1610.46
    let payment = repayment::calculate(
        dec!(300_000),
        30,
        dec!(5),
        MortgageType::Repayment,
        ZeroRatePolicy::Linear,
    )
    .unwrap();
    assert!((payment - dec!(1610.46)).abs() < dec!(0.01));
}

#[test]
fn test_interest_only_100k_6pct() {
    let request = RepaymentRequest {
        input: LoanInput::new(dec!(100_000), 25, dec!(6), MortgageType::InterestOnly),
        zero_rate_policy: ZeroRatePolicy::Linear,
    };
    let out = repayment::calculate_repayments(&request).unwrap();

    assert_eq!(out.result.monthly_payment, dec!(500.00));
    assert_eq!(out.result.total_repayment, dec!(150_000.00));
}

#[test]
fn test_repayment_exceeds_interest_only() {
    for rate in [dec!(1), dec!(3.5), dec!(7.25), dec!(12)] {
        let repay = repayment::calculate(dec!(200_000), 20, rate, MortgageType::Repayment, ZeroRatePolicy::Linear).unwrap();
        let io = repayment::calculate(dec!(200_000), 20, rate, MortgageType::InterestOnly, ZeroRatePolicy::Linear).unwrap();
        assert!(repay > io, "rate {rate}");
    }
}

#[test]
fn test_zero_rate_policies() {
    let input = LoanInput::new(dec!(60_000), 5, dec!(0), MortgageType::Repayment);

    let linear = repayment::calculate_loan(&input, ZeroRatePolicy::Linear).unwrap();
    assert_eq!(linear.monthly_payment, dec!(1000.00));

    let rejected = repayment::calculate_loan(&input, ZeroRatePolicy::Reject);
    assert!(matches!(rejected, Err(MortgageCalcError::DivisionByZero { .. })));
}

#[test]
fn test_negative_amount_flows_through() {
    let input = LoanInput::new(dec!(-100_000), 25, dec!(6), MortgageType::InterestOnly);
    let result = repayment::calculate_loan(&input, ZeroRatePolicy::Linear).unwrap();
    assert_eq!(result.monthly_payment, dec!(-500.00));
}

#[test]
fn test_output_serializes_money_as_strings() {
    let request = RepaymentRequest {
        input: LoanInput::new(dec!(100_000), 25, dec!(6), MortgageType::Repayment),
        zero_rate_policy: ZeroRatePolicy::Linear,
    };
    let out = repayment::calculate_repayments(&request).unwrap();
    let json = serde_json::to_value(&out).unwrap();

    assert_eq!(json["result"]["monthly_payment"], "644.30");
    assert_eq!(json["result"]["mortgage_type"], "repayment");
    assert_eq!(json["metadata"]["precision"], "rust_decimal_128bit");
}

// ===========================================================================
// Calculator state
// ===========================================================================

#[test]
fn test_full_session() {
    let state = CalculatorState::new();
    let state = state.submit(ZeroRatePolicy::Linear).unwrap();
    assert_eq!(state.errors.len(), 4);

    let (state, _) = state.edit(FieldId::Amount, "100000");
    let (state, _) = state.edit(FieldId::TermYears, "25");
    let (state, _) = state.edit(FieldId::AnnualRatePercent, "6");
    let (state, _) = state.edit(FieldId::Type, "repayment");
    let state = state.submit(ZeroRatePolicy::Linear).unwrap();
    assert!(state.errors.is_empty());
    assert!(matches!(state.display(), DisplayState::Result(_)));

    let cleared = state.clear();
    assert_eq!(cleared.display(), DisplayState::Empty);
    assert!(cleared.errors.is_empty());
    assert_eq!(cleared.input, LoanInput::default());
}

#[test]
fn test_repayment_beyond_decimal_range_still_prices() {
    let long_term = repayment::calculate(
        dec!(100_000),
        2000,
        dec!(6),
        MortgageType::Repayment,
        ZeroRatePolicy::Linear,
    )
    .unwrap();
    assert_eq!(long_term.round_dp(2), dec!(500.00));

    let high_rate = repayment::calculate(
        dec!(100_000),
        50,
        dec!(200),
        MortgageType::Repayment,
        ZeroRatePolicy::Linear,
    )
    .unwrap();
    assert_eq!(high_rate.round_dp(2), dec!(16666.67));
}

#[test]
fn test_failed_submit_keeps_stale_result() {
    let (state, _) = CalculatorState::new().edit(FieldId::Amount, "100000");
    let (state, _) = state.edit(FieldId::TermYears, "25");
    let (state, _) = state.edit(FieldId::AnnualRatePercent, "6");
    let (state, _) = state.edit(FieldId::Type, "repayment");
    let state = state.submit(ZeroRatePolicy::Linear).unwrap();

    let (state, _) = state.edit(FieldId::Amount, "");
    let state = state.submit(ZeroRatePolicy::Linear).unwrap();

    assert_eq!(state.errors.len(), 1);
    match state.display() {
        DisplayState::Result(r) => assert_eq!(r.monthly_payment, dec!(644.30)),
        DisplayState::Empty => panic!("previous result should remain displayed"),
    }
}
