use serde::{Deserialize, Serialize};

use super::input::{FieldId, LoanInput};

/// Message attached to every missing field.
pub const REQUIRED_MESSAGE: &str = "This field is required";

/// A per-field validation message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(rename = "id")]
    pub field: FieldId,
    #[serde(rename = "msg")]
    pub message: String,
}

impl FieldError {
    pub fn required(field: FieldId) -> Self {
        Self {
            field,
            message: REQUIRED_MESSAGE.to_string(),
        }
    }
}

/// Presence check over the four form fields.
///
/// Returns one error per unset field, in declaration order. Values that are
/// present are never range-checked: zero and negative amounts pass.
pub fn validate(input: &LoanInput) -> Vec<FieldError> {
    FieldId::ALL
        .iter()
        .filter(|field| !input.is_set(**field))
        .map(|field| FieldError::required(*field))
        .collect()
}

/// First error reported for `field`, if any.
pub fn error_for(errors: &[FieldError], field: FieldId) -> Option<&FieldError> {
    errors.iter().find(|e| e.field == field)
}

/// Whether `field` should be marked as invalid.
pub fn has_error(errors: &[FieldError], field: FieldId) -> bool {
    errors.iter().any(|e| e.field == field)
}
