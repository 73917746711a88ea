//! Loan form input: four optional fields plus their identities.
//!
//! Every field starts unset. An unset field is `None` and is never confused
//! with zero: a form with `amount = 0` is complete, a form without an amount
//! is not.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MortgageCalcError;
use crate::types::Money;

// ---------------------------------------------------------------------------
// Mortgage type
// ---------------------------------------------------------------------------

/// Repayment style of the loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MortgageType {
    /// Each payment covers interest and amortises principal.
    Repayment,
    /// Each payment covers interest only.
    InterestOnly,
}

impl MortgageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "repayment",
            MortgageType::InterestOnly => "interest-only",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MortgageType {
    type Err = MortgageCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "repayment" => Ok(MortgageType::Repayment),
            "interest-only" | "interest_only" | "interestonly" => Ok(MortgageType::InterestOnly),
            other => Err(MortgageCalcError::InvalidInput {
                field: FieldId::Type.id().into(),
                reason: format!("unknown mortgage type '{other}' (expected repayment or interest-only)"),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// Field identity
// ---------------------------------------------------------------------------

/// The four form fields, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FieldId {
    #[serde(rename = "mortgageAmount")]
    Amount,
    #[serde(rename = "mortgageTerm")]
    TermYears,
    #[serde(rename = "interestRate")]
    AnnualRatePercent,
    #[serde(rename = "mortgageType")]
    Type,
}

impl FieldId {
    pub const ALL: [FieldId; 4] = [
        FieldId::Amount,
        FieldId::TermYears,
        FieldId::AnnualRatePercent,
        FieldId::Type,
    ];

    /// Form identifier, as used on the wire.
    pub fn id(&self) -> &'static str {
        match self {
            FieldId::Amount => "mortgageAmount",
            FieldId::TermYears => "mortgageTerm",
            FieldId::AnnualRatePercent => "interestRate",
            FieldId::Type => "mortgageType",
        }
    }

    /// Label shown next to the field.
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Amount => "Mortgage Amount",
            FieldId::TermYears => "Mortgage Term",
            FieldId::AnnualRatePercent => "Interest Rate",
            FieldId::Type => "Mortgage Type",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for FieldId {
    type Err = MortgageCalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        FieldId::ALL
            .into_iter()
            .find(|f| f.id().eq_ignore_ascii_case(key))
            .or(match key.to_ascii_lowercase().as_str() {
                "amount" => Some(FieldId::Amount),
                "term" | "term_years" => Some(FieldId::TermYears),
                "rate" | "annual_rate_percent" => Some(FieldId::AnnualRatePercent),
                "type" | "mortgage_type" => Some(FieldId::Type),
                _ => None,
            })
            .ok_or_else(|| MortgageCalcError::InvalidInput {
                field: key.to_string(),
                reason: "unknown form field".into(),
            })
    }
}

// ---------------------------------------------------------------------------
// Loan input
// ---------------------------------------------------------------------------

/// Raw loan form. Values are not range-checked; negatives are representable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInput {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub term_years: Option<i64>,
    /// Annual nominal rate as a percentage (6 = 6%).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annual_rate_percent: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mortgage_type: Option<MortgageType>,
}

/// Outcome of applying raw text to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldEdit {
    /// The text parsed and the field now holds it.
    Set,
    /// The text was blank; the field is now unset.
    Cleared,
    /// The text did not parse; the field is now unset.
    Rejected,
}

impl LoanInput {
    /// A form with every field set.
    pub fn new(
        amount: Money,
        term_years: i64,
        annual_rate_percent: Decimal,
        mortgage_type: MortgageType,
    ) -> Self {
        Self {
            amount: Some(amount),
            term_years: Some(term_years),
            annual_rate_percent: Some(annual_rate_percent),
            mortgage_type: Some(mortgage_type),
        }
    }

    pub fn is_set(&self, field: FieldId) -> bool {
        match field {
            FieldId::Amount => self.amount.is_some(),
            FieldId::TermYears => self.term_years.is_some(),
            FieldId::AnnualRatePercent => self.annual_rate_percent.is_some(),
            FieldId::Type => self.mortgage_type.is_some(),
        }
    }

    pub fn is_complete(&self) -> bool {
        FieldId::ALL.iter().all(|f| self.is_set(*f))
    }

    /// Apply a text edit the way a number input does: blank or unparsable
    /// text leaves the field empty.
    pub fn set_field(&mut self, field: FieldId, raw: &str) -> FieldEdit {
        let text = raw.trim();
        if text.is_empty() {
            self.unset(field);
            return FieldEdit::Cleared;
        }

        let accepted = match field {
            FieldId::Amount => {
                self.amount = Decimal::from_str(text).ok();
                self.amount.is_some()
            }
            FieldId::TermYears => {
                self.term_years = text.parse::<i64>().ok();
                self.term_years.is_some()
            }
            FieldId::AnnualRatePercent => {
                self.annual_rate_percent = Decimal::from_str(text).ok();
                self.annual_rate_percent.is_some()
            }
            FieldId::Type => {
                self.mortgage_type = MortgageType::from_str(text).ok();
                self.mortgage_type.is_some()
            }
        };

        if accepted {
            FieldEdit::Set
        } else {
            FieldEdit::Rejected
        }
    }

    pub fn unset(&mut self, field: FieldId) {
        match field {
            FieldId::Amount => self.amount = None,
            FieldId::TermYears => self.term_years = None,
            FieldId::AnnualRatePercent => self.annual_rate_percent = None,
            FieldId::Type => self.mortgage_type = None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_all_unset() {
        let input = LoanInput::default();
        for field in FieldId::ALL {
            assert!(!input.is_set(field));
        }
        assert!(!input.is_complete());
    }

    #[test]
    fn test_zero_is_not_unset() {
        let input = LoanInput::new(dec!(0), 0, dec!(0), MortgageType::Repayment);
        assert!(input.is_complete());
    }

    #[test]
    fn test_set_field_parses_each_type() {
        let mut input = LoanInput::default();
        assert_eq!(input.set_field(FieldId::Amount, "100000"), FieldEdit::Set);
        assert_eq!(input.set_field(FieldId::TermYears, " 25 "), FieldEdit::Set);
        assert_eq!(input.set_field(FieldId::AnnualRatePercent, "5.25"), FieldEdit::Set);
        assert_eq!(input.set_field(FieldId::Type, "Interest-Only"), FieldEdit::Set);

        assert_eq!(
            input,
            LoanInput::new(dec!(100000), 25, dec!(5.25), MortgageType::InterestOnly)
        );
    }

    #[test]
    fn test_set_field_blank_clears() {
        let mut input = LoanInput::new(dec!(1), 1, dec!(1), MortgageType::Repayment);
        assert_eq!(input.set_field(FieldId::Amount, "   "), FieldEdit::Cleared);
        assert_eq!(input.amount, None);
    }

    #[test]
    fn test_set_field_unparsable_leaves_unset() {
        let mut input = LoanInput::new(dec!(1), 1, dec!(1), MortgageType::Repayment);
        assert_eq!(input.set_field(FieldId::TermYears, "twenty"), FieldEdit::Rejected);
        assert_eq!(input.term_years, None);
        assert_eq!(input.set_field(FieldId::Type, "fixed"), FieldEdit::Rejected);
        assert_eq!(input.mortgage_type, None);
    }

    #[test]
    fn test_negative_values_are_accepted() {
        let mut input = LoanInput::default();
        assert_eq!(input.set_field(FieldId::Amount, "-5000"), FieldEdit::Set);
        assert_eq!(input.set_field(FieldId::TermYears, "-3"), FieldEdit::Set);
        assert_eq!(input.amount, Some(dec!(-5000)));
        assert_eq!(input.term_years, Some(-3));
    }

    #[test]
    fn test_field_id_parsing() {
        assert_eq!("mortgageAmount".parse::<FieldId>().unwrap(), FieldId::Amount);
        assert_eq!("term".parse::<FieldId>().unwrap(), FieldId::TermYears);
        assert_eq!("RATE".parse::<FieldId>().unwrap(), FieldId::AnnualRatePercent);
        assert!("colour".parse::<FieldId>().is_err());
    }

    #[test]
    fn test_field_id_serializes_as_form_id() {
        let json = serde_json::to_string(&FieldId::AnnualRatePercent).unwrap();
        assert_eq!(json, "\"interestRate\"");
    }

    #[test]
    fn test_mortgage_type_serde() {
        let json = serde_json::to_string(&MortgageType::InterestOnly).unwrap();
        assert_eq!(json, "\"interest-only\"");
        let parsed: MortgageType = serde_json::from_str("\"repayment\"").unwrap();
        assert_eq!(parsed, MortgageType::Repayment);
    }
}
