use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::debt::amortization::{
    self, status_label, validate_annual_rate, validate_non_negative, PayoffEstimate,
};
use crate::error::FinlitError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::FinlitResult;

/// Share of income suggested as a monthly savings floor.
pub const SUGGESTED_SAVINGS_RATE: Rate = dec!(0.20);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// The six figures a user supplies for a recommendation report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceInput {
    pub monthly_income: Money,
    #[serde(default)]
    pub monthly_expenses: Money,
    #[serde(default)]
    pub total_debt: Money,
    /// Annual rate as a percentage: 12.5 means 12.5% per year.
    #[serde(default)]
    pub annual_interest_rate_pct: Decimal,
    #[serde(default)]
    pub monthly_debt_payment: Money,
    #[serde(default)]
    pub savings_goal: Money,
}

/// Status reported when debt is outstanding but no monthly payment was entered.
pub const NOT_ESTIMATED: &str = "not_estimated";

/// Debt section of the report, present only when the user carries debt.
///
/// With no monthly payment the estimator is not run: `status` is
/// [`NOT_ESTIMATED`] and `months` is `Some(0)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPayoff {
    pub status: String,
    pub months: Option<Months>,
    pub horizon_reached: bool,
}

/// Output of [`recommend`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceOutput {
    pub monthly_savings_potential: Money,
    pub debt_payoff: Option<DebtPayoff>,
    pub suggested_monthly_savings: Option<Money>,
    pub months_to_goal: Option<Decimal>,
    pub recommendations: Vec<String>,
}

// ---------------------------------------------------------------------------
// Core function
// ---------------------------------------------------------------------------

/// Build savings, debt and goal recommendations from monthly figures.
pub fn recommend(input: &AdviceInput) -> FinlitResult<ComputationOutput<AdviceOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    // --- Validation ---
    if input.monthly_income <= Decimal::ZERO {
        return Err(FinlitError::InvalidInput {
            field: "monthly_income".into(),
            reason: "Please enter a valid monthly income".into(),
        });
    }
    validate_non_negative("monthly_expenses", input.monthly_expenses)?;
    validate_non_negative("total_debt", input.total_debt)?;
    validate_annual_rate("annual_interest_rate_pct", input.annual_interest_rate_pct)?;
    validate_non_negative("monthly_debt_payment", input.monthly_debt_payment)?;
    validate_non_negative("savings_goal", input.savings_goal)?;

    let savings = input.monthly_income - input.monthly_expenses;
    if savings < Decimal::ZERO {
        warnings.push("Your expenses exceed your income. Consider cutting costs.".into());
    }
    recommendations.push(format!("Monthly savings potential: {:.2}", savings));

    // --- Debt ---
    let debt_payoff = if input.total_debt > Decimal::ZERO {
        Some(debt_section(input, &mut recommendations, &mut warnings))
    } else {
        None
    };

    // --- Savings and investing ---
    let suggested_monthly_savings = if savings > Decimal::ZERO {
        let suggested = input.monthly_income * SUGGESTED_SAVINGS_RATE;
        recommendations.push(format!(
            "Save at least 20% of income: {:.2} per month.",
            suggested
        ));
        recommendations.push(
            "Invest remaining savings in low-cost index funds or recurring deposits.".into(),
        );
        Some(suggested)
    } else {
        None
    };

    // --- Goal ---
    let months_to_goal = if input.savings_goal > Decimal::ZERO && savings > Decimal::ZERO {
        match input.savings_goal.checked_div(savings) {
            Some(ratio) => {
                let months = ratio.round_dp(1);
                recommendations.push(format!("Estimated time to reach goal: {months:.1} months."));
                Some(months)
            }
            None => {
                warnings.push("Savings goal is out of reach at the current savings rate".into());
                None
            }
        }
    } else {
        None
    };

    let output = AdviceOutput {
        monthly_savings_potential: savings,
        debt_payoff,
        suggested_monthly_savings,
        months_to_goal,
        recommendations,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Income less expenses as savings potential; 20% savings rule; monthly amortization for debt payoff",
        input,
        warnings,
        elapsed,
        output,
    ))
}

fn debt_section(
    input: &AdviceInput,
    recommendations: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> DebtPayoff {
    if input.monthly_debt_payment <= Decimal::ZERO {
        warnings.push("No monthly debt payment entered; payoff time was not estimated".into());
        recommendations.push("Estimated debt payoff time: 0 months.".into());
        return DebtPayoff {
            status: NOT_ESTIMATED.to_string(),
            months: Some(0),
            horizon_reached: false,
        };
    }

    let outcome: PayoffEstimate = amortization::estimate(
        input.total_debt,
        input.monthly_debt_payment,
        input.annual_interest_rate_pct,
    );

    match outcome.periods() {
        None => recommendations.push(
            "Your current monthly payment is too low to ever repay the debt. Increase it.".into(),
        ),
        Some(months) => {
            recommendations.push(format!("Estimated debt payoff time: {months} months."));
            if outcome.reached_horizon() {
                warnings.push(format!(
                    "Debt payoff reached the {}-month horizon; the real payoff time may be longer",
                    amortization::MAX_PAYOFF_PERIODS
                ));
            }
        }
    }

    DebtPayoff {
        status: status_label(&outcome).to_string(),
        months: outcome.periods(),
        horizon_reached: outcome.reached_horizon(),
    }
}
