use serde_json::Value;

/// Pretty-print the metrics object as indented JSON to stdout, fields in
/// declaration order (monthly income first, ROI last).
pub fn print_json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => eprintln!("JSON serialization error: {}", e),
    }
}
