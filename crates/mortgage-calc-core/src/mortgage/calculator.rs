//! Form state for an interactive calculator.
//!
//! The state is a plain value: each transition consumes it by reference and
//! returns the next state, so a shell can keep history or discard it freely.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{FieldEdit, FieldId, LoanInput};
use super::repayment::{calculate_loan, CalculationResult};
use super::validation::{error_for, has_error, FieldError};
use crate::error::MortgageCalcError;
use crate::time_value::ZeroRatePolicy;
use crate::MortgageCalcResult;

/// What the result panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayState {
    /// No calculation has succeeded since the last clear. A submit that
    /// fails validation does not return here: the last result stays shown
    /// until the next successful submit or a clear.
    Empty,
    Result(CalculationResult),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub input: LoanInput,
    /// Errors from the most recent submit only.
    pub errors: Vec<FieldError>,
    pub result: Option<CalculationResult>,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> DisplayState {
        match self.result {
            Some(result) => DisplayState::Result(result),
            None => DisplayState::Empty,
        }
    }

    /// Apply a field edit. Errors and any previous result stay as they are
    /// until the next submit.
    pub fn edit(&self, field: FieldId, raw: &str) -> (Self, FieldEdit) {
        let mut next = self.clone();
        let outcome = next.input.set_field(field, raw);
        debug!(%field, ?outcome, "field edited");
        (next, outcome)
    }

    /// Validate and, when every field is present, recalculate.
    ///
    /// Missing fields replace the error list and keep the previous result,
    /// so a stale result stays on display next to the new errors. Only
    /// `clear` returns the display to `Empty`.
    /// A calculation that cannot be evaluated is returned as an error and the
    /// state is left as it was.
    pub fn submit(&self, zero_rate: ZeroRatePolicy) -> MortgageCalcResult<Self> {
        let mut next = self.clone();
        match calculate_loan(&self.input, zero_rate) {
            Ok(result) => {
                next.errors.clear();
                next.result = Some(result);
                Ok(next)
            }
            Err(MortgageCalcError::Validation(errors)) => {
                next.errors = errors;
                Ok(next)
            }
            Err(e) => Err(e),
        }
    }

    /// Blank every field, drop errors and the result.
    pub fn clear(&self) -> Self {
        debug!("calculator cleared");
        Self::default()
    }

    pub fn error_for(&self, field: FieldId) -> Option<&FieldError> {
        error_for(&self.errors, field)
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        has_error(&self.errors, field)
    }
}
