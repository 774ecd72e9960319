pub mod csv_out;
pub mod json;
pub mod minimal;
pub mod table;

use crate::OutputFormat;
use serde_json::Value;

/// Dispatch output to the appropriate formatter.
pub fn format_output(format: &OutputFormat, value: &Value) {
    match format {
        OutputFormat::Json => json::print_json(value),
        OutputFormat::Table => table::print_table(value),
        OutputFormat::Csv => csv_out::print_csv(value),
        OutputFormat::Minimal => minimal::print_minimal(value),
    }
}

/// The `result` object of a computation envelope, or the value itself.
pub(crate) fn result_of(value: &Value) -> &Value {
    value
        .as_object()
        .and_then(|m| m.get("result"))
        .unwrap_or(value)
}

/// Flatten the result into `(field, value)` rows. Nested objects use dotted
/// keys; arrays are joined with `sep`.
pub(crate) fn result_rows(value: &Value, sep: &str) -> Vec<(String, String)> {
    let mut rows = Vec::new();
    match result_of(value) {
        Value::Object(map) => {
            for (key, val) in map {
                push_rows(&mut rows, key.clone(), val, sep);
            }
        }
        other => rows.push(("value".to_string(), scalar(other, sep))),
    }
    rows
}

fn push_rows(rows: &mut Vec<(String, String)>, key: String, value: &Value, sep: &str) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                push_rows(rows, format!("{key}.{k}"), v, sep);
            }
        }
        _ => rows.push((key, scalar(value, sep))),
    }
}

pub(crate) fn scalar(value: &Value, sep: &str) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "-".to_string(),
        Value::Array(arr) => arr
            .iter()
            .map(|v| scalar(v, sep))
            .collect::<Vec<_>>()
            .join(sep),
        Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

/// Envelope warnings as plain strings.
pub(crate) fn warnings_of(value: &Value) -> Vec<&str> {
    value
        .get("warnings")
        .and_then(Value::as_array)
        .map(|w| w.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default()
}
