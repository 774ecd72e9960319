use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::FinlitError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Rate};
use crate::FinlitResult;

/// Simulation horizon: 1200 monthly periods, i.e. 100 years.
pub const MAX_PAYOFF_PERIODS: Months = 1200;

const MONTHS_PER_YEAR: Decimal = dec!(12);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Outcome of the payoff simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PayoffEstimate {
    /// The balance reached zero, or the horizon cap stopped the simulation.
    Converged { periods: Months },
    /// The payment never exceeds one month's interest on the balance.
    NonConvergent,
}

impl PayoffEstimate {
    /// Months to payoff, `None` when the debt is never repaid.
    pub fn periods(&self) -> Option<Months> {
        match self {
            PayoffEstimate::Converged { periods } => Some(*periods),
            PayoffEstimate::NonConvergent => None,
        }
    }

    /// True when the simulation stopped at [`MAX_PAYOFF_PERIODS`].
    ///
    /// The estimator reports the capped count as an ordinary result, so a
    /// debt that would take longer than the horizon is indistinguishable from
    /// one that is repaid in exactly 1200 months.
    pub fn reached_horizon(&self) -> bool {
        self.periods() == Some(MAX_PAYOFF_PERIODS)
    }
}

/// Input parameters for a payoff report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffInput {
    pub balance: Money,
    pub monthly_payment: Money,
    /// Annual rate as a percentage: 12.5 means 12.5% per year.
    pub annual_rate_pct: Decimal,
}

/// Output of [`estimate_payoff`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoffOutput {
    pub status: String,
    pub months_to_payoff: Option<Months>,
    pub years_to_payoff: Option<Decimal>,
    pub monthly_interest_rate: Rate,
    pub first_month_interest: Money,
    pub horizon_reached: bool,
}

// ---------------------------------------------------------------------------
// Core functions
// ---------------------------------------------------------------------------

/// Convert an annual percentage rate into a monthly fractional rate.
pub fn monthly_rate(annual_rate_pct: Decimal) -> Rate {
    annual_rate_pct / MONTHS_PER_YEAR / dec!(100)
}

/// Estimate the number of months needed to repay `balance` with a fixed
/// `payment`, accruing interest monthly before each payment.
///
/// Inputs are expected to be non-negative; no validation happens here.
pub fn estimate(balance: Money, payment: Money, annual_rate_pct: Decimal) -> PayoffEstimate {
    let rate = monthly_rate(annual_rate_pct);

    // An overflowing first-month interest exceeds any representable payment
    match balance.checked_mul(rate) {
        Some(interest) if payment > interest => {}
        _ => {
            tracing::debug!(%balance, %payment, %rate, "payment does not cover monthly interest");
            return PayoffEstimate::NonConvergent;
        }
    }

    // The balance only shrinks from here, so interest stays below the payment
    // and `remaining - payment + interest` stays below `remaining`.
    let mut periods: Months = 0;
    let mut remaining = balance;
    while remaining > Decimal::ZERO && periods < MAX_PAYOFF_PERIODS {
        let interest = match remaining.checked_mul(rate) {
            Some(interest) => interest,
            None => return PayoffEstimate::NonConvergent,
        };
        remaining = remaining - payment + interest;
        periods += 1;
    }

    if remaining > Decimal::ZERO {
        tracing::debug!(%balance, %remaining, "payoff simulation stopped at horizon");
    }

    PayoffEstimate::Converged { periods }
}

/// Validated payoff report built on [`estimate`].
pub fn estimate_payoff(input: &PayoffInput) -> FinlitResult<ComputationOutput<PayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_non_negative("balance", input.balance)?;
    validate_non_negative("monthly_payment", input.monthly_payment)?;
    validate_annual_rate("annual_rate_pct", input.annual_rate_pct)?;

    let rate = monthly_rate(input.annual_rate_pct);
    let outcome = estimate(input.balance, input.monthly_payment, input.annual_rate_pct);
    let first_month_interest = input.balance.checked_mul(rate).unwrap_or(Decimal::MAX);

    match outcome {
        PayoffEstimate::NonConvergent => warnings.push(format!(
            "Monthly payment {} does not exceed first-month interest {}; the debt is never repaid",
            input.monthly_payment,
            first_month_interest.round_dp(2)
        )),
        _ if outcome.reached_horizon() => warnings.push(format!(
            "Payoff reached the {MAX_PAYOFF_PERIODS}-month horizon; months_to_payoff may be capped"
        )),
        _ => {}
    }

    let months_to_payoff = outcome.periods();
    let output = PayoffOutput {
        status: status_label(&outcome).to_string(),
        months_to_payoff,
        years_to_payoff: months_to_payoff
            .map(|m| (Decimal::from(m) / MONTHS_PER_YEAR).round_dp(2)),
        monthly_interest_rate: rate,
        first_month_interest,
        horizon_reached: outcome.reached_horizon(),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Monthly amortization simulation: interest accrues on the balance, then the fixed payment is applied",
        input,
        warnings,
        elapsed,
        output,
    ))
}

pub(crate) fn status_label(estimate: &PayoffEstimate) -> &'static str {
    match estimate {
        PayoffEstimate::Converged { .. } => "converged",
        PayoffEstimate::NonConvergent => "non_convergent",
    }
}

pub(crate) fn validate_non_negative(field: &str, value: Decimal) -> FinlitResult<()> {
    if value < Decimal::ZERO {
        return Err(FinlitError::invalid(field, "must be >= 0"));
    }
    Ok(())
}

pub(crate) fn validate_annual_rate(field: &str, value: Decimal) -> FinlitResult<()> {
    if value < Decimal::ZERO || value > dec!(100) {
        return Err(FinlitError::invalid(field, "must be between 0 and 100 percent"));
    }
    Ok(())
}
