use thiserror::Error;

use crate::mortgage::validation::FieldError;

#[derive(Debug, Error)]
pub enum MortgageCalcError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Missing required input: {}", describe_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

impl MortgageCalcError {
    /// Field errors carried by a failed validation pass, empty otherwise.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            MortgageCalcError::Validation(errors) => errors,
            _ => &[],
        }
    }
}

fn describe_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.field.label(), e.message))
        .collect::<Vec<_>>()
        .join(", ")
}
