//! Flat text rendering of query results
//!
//! Deliberately minimal: one line per row, `key: value, ` per column, no
//! escaping, alignment, or truncation. Good enough to read in a chat
//! response or a log, which is all it is for.

use serde_json::Value;

use crate::executor::ResultRow;

/// Render rows as flat text. An empty result set renders as the empty
/// string.
pub fn render_rows(rows: &[ResultRow]) -> String {
    let mut formatted = String::new();
    for row in rows {
        for (column, value) in row {
            formatted.push_str(column);
            formatted.push_str(": ");
            formatted.push_str(&format_value(value));
            formatted.push_str(", ");
        }
        formatted.push('\n');
    }
    formatted
}

fn format_value(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
