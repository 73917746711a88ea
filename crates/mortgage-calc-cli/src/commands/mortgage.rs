use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::info;

use mortgage_calc_core::mortgage::input::{LoanInput, MortgageType};
use mortgage_calc_core::mortgage::repayment;
use mortgage_calc_core::mortgage::validation::validate;
use mortgage_calc_core::time_value::ZeroRatePolicy;

use crate::config::Config;
use crate::input;

/// Loan form fields shared by `calculate` and `validate`
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct LoanArgs {
    /// Path to a JSON or TOML loan file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Mortgage amount
    #[arg(long)]
    pub amount: Option<Decimal>,

    /// Mortgage term in years
    #[arg(long, alias = "term-years")]
    pub term: Option<i64>,

    /// Annual interest rate as a percentage (e.g. 5.25)
    #[arg(long, alias = "interest-rate")]
    pub rate: Option<Decimal>,

    /// Mortgage type: repayment or interest-only
    #[arg(long = "type", alias = "mortgage-type")]
    pub mortgage_type: Option<MortgageType>,
}

impl LoanArgs {
    fn to_input(&self) -> LoanInput {
        LoanInput {
            amount: self.amount,
            term_years: self.term,
            annual_rate_percent: self.rate,
            mortgage_type: self.mortgage_type,
        }
    }
}

/// Arguments for the repayment calculation
#[derive(Args)]
pub struct CalculateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,

    /// Treat a zero interest rate on a repayment mortgage as an error
    #[arg(long)]
    pub reject_zero_rate: bool,
}

/// Arguments for the presence check
#[derive(Args)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub loan: LoanArgs,
}

pub fn run_calculate(args: CalculateArgs, config: &Config) -> Result<Value, Box<dyn std::error::Error>> {
    let mut request = input::resolve_request(args.loan.input.as_deref(), args.loan.to_input())?;

    // The strictest setting wins
    if args.reject_zero_rate || config.zero_rate_policy == ZeroRatePolicy::Reject {
        request.zero_rate_policy = ZeroRatePolicy::Reject;
    }

    let output = repayment::calculate_repayments(&request)?;
    info!(
        monthly_payment = %output.result.monthly_payment,
        total_repayment = %output.result.total_repayment,
        "repayments calculated"
    );
    Ok(serde_json::to_value(output)?)
}

pub fn run_validate(args: ValidateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let request = input::resolve_request(args.loan.input.as_deref(), args.loan.to_input())?;
    let errors = validate(&request.input);
    Ok(serde_json::json!({
        "valid": errors.is_empty(),
        "errors": errors,
    }))
}
