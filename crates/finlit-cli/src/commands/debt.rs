use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finlit_core::debt::amortization::{self, PayoffInput};

use crate::input;

/// Arguments for debt payoff estimation
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Outstanding debt balance
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Fixed monthly payment
    #[arg(long)]
    pub payment: Option<Decimal>,

    /// Annual interest rate in percent (12.5 = 12.5%)
    #[arg(long, alias = "rate")]
    pub annual_rate: Option<Decimal>,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: PayoffInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if args.balance.is_some() || args.payment.is_some() || args.annual_rate.is_some() {
        PayoffInput {
            balance: args.balance.ok_or("--balance is required (or provide --input)")?,
            monthly_payment: args.payment.ok_or("--payment is required (or provide --input)")?,
            annual_rate_pct: args.annual_rate.unwrap_or(Decimal::ZERO),
        }
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--balance and --payment, --input <file.json>, or stdin required".into());
    };

    let result = amortization::estimate_payoff(&payoff_input)?;
    Ok(serde_json::to_value(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::fs;

    fn flags(
        balance: Option<Decimal>,
        payment: Option<Decimal>,
        rate: Option<Decimal>,
    ) -> PayoffArgs {
        PayoffArgs {
            input: None,
            balance,
            payment,
            annual_rate: rate,
        }
    }

    #[test]
    fn test_flags_estimate_payoff() {
        let value = run_payoff(flags(Some(dec!(10000)), Some(dec!(500)), Some(dec!(12)))).unwrap();
        assert_eq!(value["result"]["months_to_payoff"], 23);
        assert_eq!(value["result"]["status"], "converged");
    }

    #[test]
    fn test_missing_rate_defaults_to_zero() {
        let value = run_payoff(flags(Some(dec!(12000)), Some(dec!(1000)), None)).unwrap();
        assert_eq!(value["result"]["months_to_payoff"], 12);
    }

    #[test]
    fn test_balance_without_payment_is_an_error() {
        let err = run_payoff(flags(Some(dec!(10000)), None, Some(dec!(12)))).unwrap_err();
        assert!(err.to_string().starts_with("--payment is required"));
    }

    #[test]
    fn test_rate_alone_asks_for_balance() {
        let err = run_payoff(flags(None, None, Some(dec!(12)))).unwrap_err();
        assert!(err.to_string().starts_with("--balance is required"));
    }

    #[test]
    fn test_input_file_overrides_flags() {
        let path =
            std::env::temp_dir().join(format!("finlit-debt-cmd-{}.json", std::process::id()));
        fs::write(
            &path,
            r#"{ "balance": "10000", "monthly_payment": "50", "annual_rate_pct": "12" }"#,
        )
        .unwrap();

        let args = PayoffArgs {
            input: Some(path.to_string_lossy().into_owned()),
            ..flags(Some(dec!(10000)), Some(dec!(500)), Some(dec!(12)))
        };
        let value = run_payoff(args).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(value["result"]["status"], "non_convergent");
        assert!(value["result"]["months_to_payoff"].is_null());
    }
}
