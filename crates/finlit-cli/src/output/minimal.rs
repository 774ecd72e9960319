use serde_json::Value;

use super::{result_of, scalar};

/// Headline fields, most specific first.
const PRIORITY_KEYS: [&str; 3] = ["months_to_payoff", "status", "monthly_savings_potential"];

/// Print just the headline answer.
pub fn print_minimal(value: &Value) {
    println!("{}", render_minimal(value));
}

pub(crate) fn render_minimal(value: &Value) -> String {
    let result = result_of(value);

    if let Value::Object(map) = result {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return scalar(val, ", ");
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, scalar(val, ", "));
        }
    }

    scalar(result, ", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_months_preferred_over_status() {
        let value = json!({ "result": { "status": "converged", "months_to_payoff": 23 } });
        assert_eq!(render_minimal(&value), "23");
    }

    #[test]
    fn test_null_months_falls_back_to_status() {
        let value = json!({ "result": { "status": "non_convergent", "months_to_payoff": null } });
        assert_eq!(render_minimal(&value), "non_convergent");
    }

    #[test]
    fn test_advice_shows_savings_potential() {
        let value = json!({ "result": { "debt_payoff": null, "monthly_savings_potential": "1000" } });
        assert_eq!(render_minimal(&value), "1000");
    }
}
