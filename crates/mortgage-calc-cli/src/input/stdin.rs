use std::io::{self, Read};

use mortgage_calc_core::mortgage::repayment::RepaymentRequest;

/// Read a JSON loan form piped on stdin.
/// Returns None if stdin is a TTY (interactive) or empty.
pub fn read_request() -> Result<Option<RepaymentRequest>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    parse_request(&buffer)
}

fn parse_request(text: &str) -> Result<Option<RepaymentRequest>, Box<dyn std::error::Error>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let request = serde_json::from_str(trimmed)
        .map_err(|e| format!("Failed to parse loan JSON from stdin: {e}"))?;
    Ok(Some(request))
}
