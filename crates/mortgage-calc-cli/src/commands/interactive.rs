//! Line-oriented form session.
//!
//! Each line is one user gesture: a field edit, a submit, or a clear. The
//! session owns a [`CalculatorState`] and re-renders it after every gesture.

use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::warn;

use mortgage_calc_core::{format_money, CURRENCY_SYMBOL};
use mortgage_calc_core::mortgage::calculator::{CalculatorState, DisplayState};
use mortgage_calc_core::mortgage::input::{FieldEdit, FieldId, LoanInput};
use mortgage_calc_core::time_value::ZeroRatePolicy;

use crate::config::Config;

const HELP: &str = "\
Commands:
  amount <value>     mortgage amount
  term <years>       mortgage term in years
  rate <percent>     annual interest rate
  type <kind>        repayment | interest-only
  calculate          calculate repayments
  clear              clear all fields
  show               show the form again
  help               this message
  quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Gesture {
    Edit(FieldId, String),
    Calculate,
    Clear,
    Show,
    Help,
    Quit,
}

fn parse_gesture(line: &str) -> Result<Gesture, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    match word.to_ascii_lowercase().as_str() {
        "calculate" | "calc" | "c" => Ok(Gesture::Calculate),
        "clear" => Ok(Gesture::Clear),
        "show" | "" => Ok(Gesture::Show),
        "help" | "?" => Ok(Gesture::Help),
        "quit" | "exit" | "q" => Ok(Gesture::Quit),
        other => other
            .parse::<FieldId>()
            .map(|field| Gesture::Edit(field, rest.trim().to_string()))
            .map_err(|_| format!("unknown command '{word}' (type 'help')")),
    }
}

pub fn run_interactive(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), config.zero_rate_policy)?;
    Ok(())
}

/// Drive a session until `quit` or end of input; returns the final state.
fn run_session<R: BufRead, W: Write>(
    reader: R,
    mut out: W,
    zero_rate: ZeroRatePolicy,
) -> io::Result<CalculatorState> {
    let mut state = CalculatorState::new();
    writeln!(out, "Mortgage Calculator (type 'help' for commands)")?;
    writeln!(out, "{}", render(&state))?;

    for line in reader.lines() {
        let line = line?;
        match parse_gesture(&line) {
            Ok(Gesture::Quit) => break,
            Ok(Gesture::Help) => writeln!(out, "{HELP}")?,
            Ok(Gesture::Show) => writeln!(out, "{}", render(&state))?,
            Ok(Gesture::Clear) => {
                state = state.clear();
                writeln!(out, "{}", render(&state))?;
            }
            Ok(Gesture::Edit(field, raw)) => {
                let (next, outcome) = state.edit(field, &raw);
                if outcome == FieldEdit::Rejected {
                    warn!(%field, %raw, "unparsable value, field left empty");
                    writeln!(out, "'{raw}' is not a valid {}; field left empty", field.label())?;
                }
                state = next;
            }
            Ok(Gesture::Calculate) => match state.submit(zero_rate) {
                Ok(next) => {
                    state = next;
                    writeln!(out, "{}", render(&state))?;
                }
                Err(e) => writeln!(out, "{}: {}", "error".red().bold(), e)?,
            },
            Err(msg) => writeln!(out, "{msg}")?,
        }
    }

    Ok(state)
}

fn field_value(input: &LoanInput, field: FieldId) -> String {
    match field {
        FieldId::Amount => input.amount.map(|a| format!("{CURRENCY_SYMBOL}{a}")),
        FieldId::TermYears => input.term_years.map(|t| format!("{t} years")),
        FieldId::AnnualRatePercent => input.annual_rate_percent.map(|r| format!("{r}%")),
        FieldId::Type => input.mortgage_type.map(|t| t.to_string()),
    }
    .unwrap_or_default()
}

/// Text rendering of the form and the result panel.
fn render(state: &CalculatorState) -> String {
    let mut lines = Vec::new();
    for field in FieldId::ALL {
        lines.push(format!("{:<16} {}", field.label(), field_value(&state.input, field)));
        if let Some(err) = state.error_for(field) {
            lines.push(format!("{:<16} ! {}", "", err.message));
        }
    }
    lines.push(String::new());

    match state.display() {
        DisplayState::Result(result) => {
            lines.push("Your results".to_string());
            lines.push(format!("  Your monthly repayments           {}", format_money(result.monthly_payment)));
            lines.push(format!("  Total you'll repay over the term  {}", format_money(result.total_repayment)));
        }
        DisplayState::Empty => {
            lines.push("Results shown here".to_string());
            lines.push("  Complete the form and run 'calculate' to see your monthly repayments.".to_string());
        }
    }
    lines.join("\n")
}
