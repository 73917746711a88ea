pub mod file;
pub mod stdin;

use mortgage_calc_core::mortgage::input::LoanInput;
use mortgage_calc_core::mortgage::repayment::RepaymentRequest;

/// Where the loan form comes from, in priority order: `--input` file,
/// individual flags, piped stdin. With none of those the form is empty and
/// validation reports every field.
pub fn resolve_request(
    path: Option<&str>,
    flags: LoanInput,
) -> Result<RepaymentRequest, Box<dyn std::error::Error>> {
    if let Some(path) = path {
        return file::read_request(path);
    }

    if flags != LoanInput::default() {
        return Ok(RepaymentRequest {
            input: flags,
            ..Default::default()
        });
    }

    Ok(stdin::read_request()?.unwrap_or_default())
}
