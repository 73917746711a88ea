use serde_json::Value;
use std::io::{self, Write};

/// Pretty-print the envelope to stdout, keeping money as decimal strings.
pub fn print_json(value: &Value) {
    let stdout = io::stdout();
    if let Err(e) = write_json(value, stdout.lock()) {
        eprintln!("JSON output error: {}", e);
    }
}

fn write_json<W: Write>(value: &Value, mut out: W) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)
}
