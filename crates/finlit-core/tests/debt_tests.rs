use finlit_core::debt::amortization::{
    self, estimate, PayoffEstimate, PayoffInput, MAX_PAYOFF_PERIODS,
};
use finlit_core::FinlitError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Estimator tests
// ===========================================================================

#[test]
fn test_payment_at_or_below_interest_never_converges() {
    // 25k at 24%: interest is 500/month
    let balance = dec!(25_000);
    let rate = dec!(24);
    for payment in [dec!(0), dec!(100), dec!(499.99), dec!(500)] {
        assert_eq!(
            estimate(balance, payment, rate),
            PayoffEstimate::NonConvergent,
            "payment {payment}"
        );
    }
    assert!(estimate(balance, dec!(500.01), rate).periods().is_some());
}

#[test]
fn test_larger_payment_never_takes_longer() {
    let balance = dec!(10_000);
    let rate = dec!(12);
    let mut previous = MAX_PAYOFF_PERIODS;
    let mut payment = dec!(101);
    while payment <= dec!(12_000) {
        let periods = estimate(balance, payment, rate)
            .periods()
            .expect("payment above interest converges");
        assert!(
            periods <= previous,
            "payment {payment} took {periods} months, previous {previous}"
        );
        previous = periods;
        payment += dec!(137);
    }
    // One payment larger than the balance plus interest clears it
    assert_eq!(previous, 1);
}

#[test]
fn test_zero_rate_is_simple_division() {
    assert_eq!(estimate(dec!(1_000), dec!(100), Decimal::ZERO).periods(), Some(10));
    assert_eq!(estimate(dec!(1_050), dec!(100), Decimal::ZERO).periods(), Some(11));
}

#[test]
fn test_horizon_is_reported_as_a_count() {
    let result = estimate(dec!(1_000_000), dec!(10_000.0001), dec!(12));
    assert_eq!(result, PayoffEstimate::Converged { periods: 1200 });
    assert!(result.reached_horizon());
}

#[test]
fn test_estimate_serializes_as_tagged_status() {
    let converged = serde_json::to_value(PayoffEstimate::Converged { periods: 23 }).unwrap();
    assert_eq!(converged, serde_json::json!({ "status": "converged", "periods": 23 }));

    let never = serde_json::to_value(PayoffEstimate::NonConvergent).unwrap();
    assert_eq!(never, serde_json::json!({ "status": "non_convergent" }));
}

// ===========================================================================
// Payoff report tests
// ===========================================================================

#[test]
fn test_payoff_report_envelope() {
    let input = PayoffInput {
        balance: dec!(5_000),
        monthly_payment: dec!(250),
        annual_rate_pct: dec!(18),
    };
    let out = amortization::estimate_payoff(&input).unwrap();

    assert_eq!(out.result.months_to_payoff, Some(24));
    assert_eq!(out.result.years_to_payoff, Some(dec!(2)));
    assert_eq!(out.result.monthly_interest_rate, dec!(0.015));
    assert_eq!(out.result.first_month_interest, dec!(75));
    assert!(out.methodology.contains("amortization"));
    assert_eq!(out.assumptions["annual_rate_pct"], "18");
}

#[test]
fn test_payoff_report_rejects_negative_payment() {
    let input = PayoffInput {
        balance: dec!(5_000),
        monthly_payment: dec!(-250),
        annual_rate_pct: dec!(18),
    };
    let err = amortization::estimate_payoff(&input).unwrap_err();
    assert!(matches!(
        err,
        FinlitError::InvalidInput { ref field, .. } if field == "monthly_payment"
    ));
}

#[test]
fn test_payoff_input_from_json() {
    let input: PayoffInput = serde_json::from_str(
        r#"{ "balance": "10000", "monthly_payment": "500", "annual_rate_pct": "12" }"#,
    )
    .unwrap();
    let out = amortization::estimate_payoff(&input).unwrap();
    assert_eq!(out.result.months_to_payoff, Some(23));
}
