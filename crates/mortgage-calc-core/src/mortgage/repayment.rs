//! Monthly payment and total repayment for a validated loan form.
//!
//! Repayment loans use the level annuity payment; interest-only loans pay
//! `amount * monthly_rate`. All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, warn};

use super::input::{LoanInput, MortgageType};
use super::validation::validate;
use crate::error::MortgageCalcError;
use crate::time_value::{
    annuity_payment, interest_only_payment, monthly_rate, number_of_payments, round_currency,
    ZeroRatePolicy,
};
use crate::types::{format_money, with_metadata, ComputationOutput, Money, Rate};
use crate::MortgageCalcResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

/// A loan form plus the calculation options applied to it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RepaymentRequest {
    #[serde(flatten)]
    pub input: LoanInput,
    #[serde(default)]
    pub zero_rate_policy: ZeroRatePolicy,
}

/// What the result panel displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Rounded to two decimal places.
    pub monthly_payment: Money,
    /// `monthly_payment * term_years * 12`, from the rounded payment.
    pub total_repayment: Money,
}

impl CalculationResult {
    /// Derive the displayed totals from an unrounded monthly payment.
    pub fn from_monthly_payment(payment: Money, term_years: i64) -> MortgageCalcResult<Self> {
        let monthly_payment = round_currency(payment);
        let n = number_of_payments(term_years)?;
        let total = monthly_payment
            .checked_mul(Decimal::from(n))
            .ok_or_else(|| MortgageCalcError::Overflow {
                context: "total repayment".into(),
            })?;

        Ok(Self {
            monthly_payment,
            total_repayment: round_currency(total),
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepaymentOutput {
    pub mortgage_type: MortgageType,
    pub monthly_payment: Money,
    pub total_repayment: Money,
    pub monthly_payment_display: String,
    pub total_repayment_display: String,
    pub monthly_rate: Rate,
    pub number_of_payments: i64,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Unrounded monthly payment for fully specified inputs.
///
/// No range checks: zero or negative values are evaluated as given. A zero
/// number of payments on a repayment loan has no defined payment and is an
/// error; a zero rate follows `zero_rate`.
pub fn calculate(
    amount: Money,
    term_years: i64,
    annual_rate_percent: Decimal,
    mortgage_type: MortgageType,
    zero_rate: ZeroRatePolicy,
) -> MortgageCalcResult<Money> {
    let rate = monthly_rate(annual_rate_percent);
    let payment = match mortgage_type {
        MortgageType::Repayment => {
            let n = number_of_payments(term_years)?;
            annuity_payment(amount, rate, n, zero_rate)?
        }
        MortgageType::InterestOnly => interest_only_payment(amount, rate)?,
    };

    debug!(
        %amount,
        term_years,
        %annual_rate_percent,
        %mortgage_type,
        %payment,
        "calculated monthly payment"
    );
    Ok(payment)
}

/// Validate then calculate. Missing fields yield
/// [`MortgageCalcError::Validation`] and no calculation runs.
pub fn calculate_loan(
    input: &LoanInput,
    zero_rate: ZeroRatePolicy,
) -> MortgageCalcResult<CalculationResult> {
    let errors = validate(input);
    if !errors.is_empty() {
        debug!(missing = errors.len(), "validation failed, skipping calculation");
        return Err(MortgageCalcError::Validation(errors));
    }

    let (amount, term_years, rate, mortgage_type) = complete_fields(input)?;
    let payment = calculate(amount, term_years, rate, mortgage_type, zero_rate)?;
    CalculationResult::from_monthly_payment(payment, term_years)
}

/// Full repayment calculation wrapped in the standard output envelope.
pub fn calculate_repayments(
    request: &RepaymentRequest,
) -> MortgageCalcResult<ComputationOutput<RepaymentOutput>> {
    let start = Instant::now();
    let input = &request.input;

    let result = calculate_loan(input, request.zero_rate_policy)?;
    let (amount, term_years, rate_percent, mortgage_type) = complete_fields(input)?;

    let mut warnings: Vec<String> = Vec::new();
    if amount < Decimal::ZERO || term_years < 0 || rate_percent < Decimal::ZERO {
        warnings.push("Negative inputs are evaluated as given.".into());
    }
    if rate_percent.is_zero() && mortgage_type == MortgageType::Repayment {
        warnings.push(
            "Zero interest rate: principal repaid in equal instalments (amount / payments)."
                .into(),
        );
    }
    if result.monthly_payment <= Decimal::ZERO {
        warn!(payment = %result.monthly_payment, "monthly payment is not positive");
        warnings.push("Monthly payment is not positive; check the loan inputs.".into());
    }

    let output = RepaymentOutput {
        mortgage_type,
        monthly_payment: result.monthly_payment,
        total_repayment: result.total_repayment,
        monthly_payment_display: format_money(result.monthly_payment),
        total_repayment_display: format_money(result.total_repayment),
        monthly_rate: monthly_rate(rate_percent),
        number_of_payments: number_of_payments(term_years)?,
    };

    let methodology = match mortgage_type {
        MortgageType::Repayment => "Repayment mortgage (level annuity payment)",
        MortgageType::InterestOnly => "Interest-only mortgage (interest on full principal)",
    };
    let assumptions = serde_json::json!({
        "compounding": "monthly",
        "rounding": "2dp, midpoint away from zero",
        "total_repayment_basis": "rounded monthly payment",
        "zero_rate_policy": request.zero_rate_policy,
    });

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, &assumptions, warnings, elapsed, output))
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

fn complete_fields(
    input: &LoanInput,
) -> MortgageCalcResult<(Money, i64, Decimal, MortgageType)> {
    match (
        input.amount,
        input.term_years,
        input.annual_rate_percent,
        input.mortgage_type,
    ) {
        (Some(amount), Some(term), Some(rate), Some(kind)) => Ok((amount, term, rate, kind)),
        _ => Err(MortgageCalcError::Validation(validate(input))),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
