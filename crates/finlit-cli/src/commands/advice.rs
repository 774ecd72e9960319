use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use finlit_core::advice::recommendations::{self, AdviceInput};

use crate::input;

/// Arguments for the recommendation report
#[derive(Args)]
pub struct AdviseArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Monthly income
    #[arg(long)]
    pub income: Option<Decimal>,

    /// Monthly expenses
    #[arg(long, default_value = "0")]
    pub expenses: Decimal,

    /// Total debt outstanding
    #[arg(long, default_value = "0")]
    pub debt: Decimal,

    /// Debt annual interest rate in percent
    #[arg(long, alias = "rate", default_value = "0")]
    pub annual_rate: Decimal,

    /// Monthly debt payment
    #[arg(long, default_value = "0")]
    pub debt_payment: Decimal,

    /// Savings goal
    #[arg(long, default_value = "0")]
    pub goal: Decimal,
}

impl AdviseArgs {
    fn to_input(&self, monthly_income: Decimal) -> AdviceInput {
        AdviceInput {
            monthly_income,
            monthly_expenses: self.expenses,
            total_debt: self.debt,
            annual_interest_rate_pct: self.annual_rate,
            monthly_debt_payment: self.debt_payment,
            savings_goal: self.goal,
        }
    }
}

pub fn run_advise(args: AdviseArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let advice_input: AdviceInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(income) = args.income {
        args.to_input(income)
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        return Err("--income is required (or provide --input / stdin)".into());
    };

    let result = recommendations::recommend(&advice_input)?;
    Ok(serde_json::to_value(result)?)
}
