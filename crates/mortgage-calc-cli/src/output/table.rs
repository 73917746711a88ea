use serde_json::{Map, Value};
use tabled::{builder::Builder, Table};

use super::scalar_text;

/// Format output as a table using the tabled crate.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

fn render_table(value: &Value) -> String {
    let Value::Object(map) = value else {
        return scalar_text(value);
    };

    match (map.get("result"), map.get("errors")) {
        (Some(Value::Object(result)), _) => render_result(result, map),
        (_, Some(Value::Array(errors))) => render_errors(errors),
        _ => field_value_table(map),
    }
}

fn render_result(result: &Map<String, Value>, envelope: &Map<String, Value>) -> String {
    let mut out = field_value_table(result);

    if let Some(Value::Array(warnings)) = envelope.get("warnings") {
        if !warnings.is_empty() {
            out.push_str("\n\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                out.push_str(&format!("\n  - {w}"));
            }
        }
    }

    if let Some(Value::String(meth)) = envelope.get("methodology") {
        out.push_str(&format!("\n\nMethodology: {meth}"));
    }
    out
}

fn render_errors(errors: &[Value]) -> String {
    if errors.is_empty() {
        return "All required fields are present.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Field", "Message"]);
    for err in errors {
        builder.push_record([
            err.get("id").map(scalar_text).unwrap_or_default(),
            err.get("msg").map(scalar_text).unwrap_or_default(),
        ]);
    }
    Table::from(builder).to_string()
}

fn field_value_table(map: &Map<String, Value>) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (key, val) in map {
        builder.push_record([key.as_str(), &scalar_text(val)]);
    }
    Table::from(builder).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_table_includes_warnings_and_methodology() {
        let out = render_table(&json!({
            "result": { "monthly_payment": "0.00" },
            "warnings": ["Monthly payment is not positive; check the loan inputs."],
            "methodology": "Repayment mortgage (level annuity payment)"
        }));
        assert!(out.contains("monthly_payment"));
        assert!(out.contains("Warnings:"));
        assert!(out.contains("Methodology: Repayment mortgage"));
    }

    #[test]
    fn test_error_table() {
        let out = render_table(&json!({
            "valid": false,
            "errors": [{ "id": "interestRate", "msg": "This field is required" }]
        }));
        assert!(out.contains("interestRate"));
        assert!(out.contains("This field is required"));
    }

    #[test]
    fn test_no_errors() {
        let out = render_table(&json!({ "valid": true, "errors": [] }));
        assert_eq!(out, "All required fields are present.");
    }
}
