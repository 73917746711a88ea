use serde_json::Value;
use std::io::{self, Write};

use super::scalar_text;

/// Write output as CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_csv(value, stdout.lock()) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_csv<W: Write>(value: &Value, out: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    let body = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    match body {
        Value::Object(map) => match map.get("errors") {
            // Validation output: one row per missing field
            Some(Value::Array(errors)) => {
                wtr.write_record(["field", "message"])?;
                for err in errors {
                    let id = err.get("id").map(scalar_text).unwrap_or_default();
                    let msg = err.get("msg").map(scalar_text).unwrap_or_default();
                    wtr.write_record([id, msg])?;
                }
            }
            _ => {
                wtr.write_record(["field", "value"])?;
                for (key, val) in map {
                    wtr.write_record([key.as_str(), &scalar_text(val)])?;
                }
            }
        },
        _ => {
            wtr.write_record([&scalar_text(body)])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
