use serde_json::Value;

use super::result_rows;

/// Write the result as `field,value` CSV rows to stdout.
pub fn print_csv(value: &Value) {
    match render_csv(value) {
        Ok(s) => print!("{}", s),
        Err(e) => eprintln!("CSV serialization error: {}", e),
    }
}

pub(crate) fn render_csv(value: &Value) -> Result<String, Box<dyn std::error::Error>> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    wtr.write_record(["field", "value"])?;
    for (field, val) in result_rows(value, "; ") {
        wtr.write_record([field, val])?;
    }
    let bytes = wtr.into_inner().map_err(|e| e.to_string())?;
    Ok(String::from_utf8(bytes)?)
}
