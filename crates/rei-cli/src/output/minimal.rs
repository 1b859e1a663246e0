use serde_json::Value;

use super::format_value;

/// Print just the key answer value from the metrics output.
///
/// Heuristic: ROI is the headline number; fall back through the cash-flow
/// metrics, then to the first field.
pub fn print_minimal(value: &Value) {
    let priority_keys = ["roi", "monthly_cash_flow", "annual_cash_flow"];

    if let Value::Object(map) = value {
        for key in &priority_keys {
            if let Some(val) = map.get(*key) {
                if !val.is_null() {
                    println!("{}", format_value(val));
                    return;
                }
            }
        }

        if let Some((key, val)) = map.iter().next() {
            println!("{}: {}", key, format_value(val));
            return;
        }
    }

    println!("{}", format_value(value));
}
