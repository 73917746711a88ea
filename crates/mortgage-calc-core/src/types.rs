use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.005 = 0.5% per month). Never as percentages.
pub type Rate = Decimal;

/// Display symbol for every monetary amount. There is no locale handling.
pub const CURRENCY_SYMBOL: &str = "£";

/// Render an amount the way the result panel shows it, e.g. `£644.30`.
///
/// The value is shown with exactly two decimal places; negative amounts keep
/// their sign in front of the symbol.
pub fn format_money(value: Money) -> String {
    let rounded = crate::time_value::round_currency(value);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-{CURRENCY_SYMBOL}{:.2}", rounded.abs())
    } else {
        format!("{CURRENCY_SYMBOL}{:.2}", rounded.abs())
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
