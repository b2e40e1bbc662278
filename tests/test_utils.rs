//! Shared helpers for the pricing and sweep integration tests.

use pricer_lib::PricingInputs;

/// Textbook reference scenario: S=100, X=100, r=5%, T=1y, sigma=20%
pub fn reference_inputs() -> PricingInputs {
    PricingInputs::new(100.0, 100.0, 0.05, 1.0, 0.2).expect("reference inputs are valid")
}

/// Assert two prices agree within the tolerance implied by 2-decimal rounding
pub fn assert_close(actual: f64, expected: f64, tol: f64, context: &str) {
    assert!(
        (actual - expected).abs() <= tol,
        "{}: expected {} within {}, got {}",
        context,
        expected,
        tol,
        actual
    );
}
