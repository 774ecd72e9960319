use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{result_rows, warnings_of};

/// Print the result as a two-column table, followed by warnings and methodology.
pub fn print_table(value: &Value) {
    println!("{}", render_table(value));
}

pub(crate) fn render_table(value: &Value) -> String {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    for (field, val) in result_rows(value, "\n") {
        builder.push_record([field, val]);
    }
    let mut out = Table::from(builder).to_string();

    let warnings = warnings_of(value);
    if !warnings.is_empty() {
        out.push_str("\n\nWarnings:");
        for w in warnings {
            out.push_str(&format!("\n  - {}", w));
        }
    }

    if let Some(meth) = value.get("methodology").and_then(Value::as_str) {
        out.push_str(&format!("\n\nMethodology: {}", meth));
    }

    out
}
