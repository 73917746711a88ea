//! Mortgage repayment calculator.
//!
//! A loan form is collected into [`input::LoanInput`], checked for presence by
//! [`validation::validate`], priced by [`repayment::calculate`], and held as
//! form state by [`calculator::CalculatorState`].

pub mod calculator;
pub mod input;
pub mod repayment;
pub mod validation;
