use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MortgageCalcError;
use crate::types::{Money, Rate};
use crate::MortgageCalcResult;

const PERCENT: Decimal = dec!(100);
const MONTHS_PER_YEAR: i64 = 12;

/// How the repayment formula treats a zero periodic rate, where the annuity
/// denominator `1 - (1 + r)^-n` collapses to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroRatePolicy {
    /// Spread the principal evenly: `principal / n`.
    #[default]
    Linear,
    /// Report the zero denominator as an error.
    Reject,
}

/// Monthly periodic rate from an annual nominal percentage (6 -> 0.005).
pub fn monthly_rate(annual_rate_percent: Decimal) -> Rate {
    annual_rate_percent / PERCENT / Decimal::from(MONTHS_PER_YEAR)
}

/// Number of monthly payments over a term given in whole years.
pub fn number_of_payments(term_years: i64) -> MortgageCalcResult<i64> {
    term_years
        .checked_mul(MONTHS_PER_YEAR)
        .ok_or_else(|| MortgageCalcError::Overflow {
            context: "number of payments".into(),
        })
}

/// Level payment that fully amortises `principal` over `nper` periods.
///
/// `principal * r / (1 - (1 + r)^-nper)`. No sign conventions are applied:
/// the payment has the same sign as the principal.
pub fn annuity_payment(
    principal: Money,
    rate: Rate,
    nper: i64,
    zero_rate: ZeroRatePolicy,
) -> MortgageCalcResult<Money> {
    if nper == 0 {
        return Err(MortgageCalcError::DivisionByZero {
            context: "annuity payment (zero number of payments)".into(),
        });
    }

    if rate.is_zero() {
        return match zero_rate {
            ZeroRatePolicy::Linear => Ok(principal / Decimal::from(nper)),
            ZeroRatePolicy::Reject => Err(MortgageCalcError::DivisionByZero {
                context: "annuity payment (zero interest rate)".into(),
            }),
        };
    }

    let one_plus_r = Decimal::ONE + rate;
    if one_plus_r.is_zero() {
        return Err(MortgageCalcError::DivisionByZero {
            context: "annuity discount factor".into(),
        });
    }

    // Past the decimal range the discount factor is at one of its limits:
    // it vanishes when |1 + r| > 1 over positive periods, otherwise it is
    // unbounded and the payment vanishes.
    let discount = match one_plus_r.checked_powi(-nper) {
        Some(discount) => discount,
        None if (one_plus_r.abs() > Decimal::ONE) == (nper > 0) => Decimal::ZERO,
        None => return Ok(Decimal::ZERO),
    };

    let denominator = Decimal::ONE - discount;
    if denominator.is_zero() {
        return Err(MortgageCalcError::DivisionByZero {
            context: "annuity payment denominator".into(),
        });
    }

    principal
        .checked_mul(rate)
        .and_then(|interest| interest.checked_div(denominator))
        .ok_or_else(|| MortgageCalcError::Overflow {
            context: "annuity payment".into(),
        })
}

/// Payment that services interest only; the principal is untouched.
pub fn interest_only_payment(principal: Money, rate: Rate) -> MortgageCalcResult<Money> {
    principal
        .checked_mul(rate)
        .ok_or_else(|| MortgageCalcError::Overflow {
            context: "interest-only payment".into(),
        })
}

/// Rounds to two decimal places, midpoint away from zero.
pub fn round_currency(value: Money) -> Money {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
