use serde_json::Value;
use std::io::{self, Read};

/// Read piped JSON line items from stdin.
///
/// Returns None when stdin is a TTY or the pipe is empty, so interactive
/// runs without `--input` fall through to the built-in sample property.
/// The parsed value keeps its document order (serde_json `preserve_order`),
/// which the report layout depends on.
pub fn read_stdin() -> Result<Option<Value>, Box<dyn std::error::Error>> {
    if atty::is(atty::Stream::Stdin) {
        return Ok(None);
    }

    let mut raw = String::new();
    io::stdin().read_to_string(&mut raw)?;

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }

    let items: Value = serde_json::from_str(trimmed)?;
    Ok(Some(items))
}
