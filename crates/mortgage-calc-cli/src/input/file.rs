use std::fs;
use std::path::{Path, PathBuf};

use mortgage_calc_core::mortgage::repayment::RepaymentRequest;

/// Read a loan form from a `.json` or `.toml` file.
pub fn read_request(path: &str) -> Result<RepaymentRequest, Box<dyn std::error::Error>> {
    let canonical = resolve_path(path)?;
    let contents = fs::read_to_string(&canonical)
        .map_err(|e| format!("Failed to read '{}': {}", canonical.display(), e))?;

    let is_toml = canonical
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));
    let request = if is_toml {
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    } else {
        serde_json::from_str(&contents)
            .map_err(|e| format!("Failed to parse '{}': {}", canonical.display(), e))?
    };
    Ok(request)
}

/// Resolve the path against the working directory and check it is a file.
fn resolve_path(path: &str) -> Result<PathBuf, Box<dyn std::error::Error>> {
    let p = Path::new(path);
    let canonical = if p.is_absolute() {
        p.to_path_buf()
    } else {
        std::env::current_dir()?.join(p)
    };

    if !canonical.is_file() {
        return Err(format!("Loan file not found: {}", canonical.display()).into());
    }
    Ok(canonical)
}
