use serde_json::Value;

use super::scalar_text;

/// Fields printed by `--output minimal`, most important first.
const PRIORITY_KEYS: [&str; 3] = ["monthly_payment_display", "monthly_payment", "valid"];

/// Print just the key answer: the monthly payment for a calculation, or
/// `valid`/the missing field ids for a validation.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_text(value));
}

fn minimal_text(value: &Value) -> String {
    let result_obj = value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value);

    if let Some(Value::Array(errors)) = result_obj.get("errors") {
        if !errors.is_empty() {
            let ids: Vec<String> = errors
                .iter()
                .filter_map(|e| e.get("id"))
                .map(scalar_text)
                .collect();
            return format!("missing: {}", ids.join(", "));
        }
    }

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return scalar_text(val);
            }
        }
    }

    scalar_text(result_obj)
}
