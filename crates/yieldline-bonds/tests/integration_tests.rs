//! Integration tests for yieldline-bonds.
//!
//! End-to-end valuation of textbook bonds through the facade, the free
//! functions and the lower-level modules.

use approx::assert_relative_eq;
use yieldline_bonds::functions;
use yieldline_bonds::prelude::*;
use yieldline_bonds::risk;

// =============================================================================
// TEST FIXTURES
// =============================================================================

/// 8% annual coupon, 5 years, face 1000.
fn textbook_bond() -> Bond {
    Bond::new(1000.0, 0.08, 5).unwrap()
}

// =============================================================================
// PRICING
// =============================================================================

#[test]
fn test_textbook_price() {
    let p = textbook_bond().price(0.10).unwrap();
    assert_relative_eq!(p, 924.18, epsilon = 0.01);
}

#[test]
fn test_zero_yield_price() {
    let p = textbook_bond().price(0.0).unwrap();
    assert_relative_eq!(p, 1400.0, epsilon = 1e-9);
}

#[test]
fn test_schedule_and_price_agree() {
    let bond = textbook_bond().with_frequency(SEMI_ANNUAL).unwrap();
    let schedule = bond.cash_flows();

    assert_eq!(schedule.len(), 10);
    assert_relative_eq!(schedule.flows()[0].amount, 40.0);
    assert_relative_eq!(schedule.flows()[9].amount, 1040.0);
    assert_relative_eq!(
        price(&schedule, 0.05).unwrap(),
        bond.price(0.10).unwrap(),
        epsilon = 1e-12
    );
}

// =============================================================================
// YIELD
// =============================================================================

#[test]
fn test_textbook_yield() {
    let y = textbook_bond().yield_to_maturity(950.0).unwrap();

    assert_relative_eq!(y, 0.092_953_275_395, epsilon = 1e-9);
    assert_relative_eq!(textbook_bond().price(y).unwrap(), 950.0, epsilon = 1e-8);
}

#[test]
fn test_undiscounted_price_gives_zero_yield() {
    let y = textbook_bond().yield_to_maturity(1400.0).unwrap();
    assert_eq!(y, 0.0);
}

#[test]
fn test_price_above_undiscounted_sum_is_out_of_range() {
    let err = textbook_bond().yield_to_maturity(1500.0).unwrap_err();
    assert!(matches!(err, BondError::YtmOutOfRange { .. }));
}

#[test]
fn test_invalid_market_price() {
    for p in [0.0, -10.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            textbook_bond().yield_to_maturity(p),
            Err(BondError::InvalidMarketPrice { .. })
        ));
    }
}

#[test]
fn test_solver_reports_iterations() {
    let result = textbook_bond()
        .solve_yield(950.0, &YieldSolver::new())
        .unwrap();

    assert!(result.iterations > 0);
    assert!(result.iterations <= 100);
    assert!(result.residual.abs() < 1e-8);
}

// =============================================================================
// RISK
// =============================================================================

#[test]
fn test_textbook_risk() {
    let metrics = textbook_bond().sensitivity(0.10).unwrap();

    assert_relative_eq!(metrics.macaulay_duration, 4.2814, epsilon = 1e-4);
    assert_relative_eq!(metrics.modified_duration, 3.8922, epsilon = 1e-4);
    assert_relative_eq!(metrics.convexity, 20.0973, epsilon = 1e-4);
}

#[test]
fn test_semi_annual_modified_duration() {
    let d = functions::modified_duration(1000.0, 0.08, 5, 0.10, 2).unwrap();
    assert_relative_eq!(d, 3.9808, epsilon = 1e-4);
}

#[test]
fn test_price_shock_estimates() {
    let shock = textbook_bond().estimate_price_change(0.10, 0.005).unwrap();

    let actual = shock.actual_change();
    assert!(actual < 0.0);
    assert!((actual - shock.convexity_estimate).abs() < 0.05);
    assert!((actual - shock.duration_estimate).abs() > (actual - shock.convexity_estimate).abs());
}

#[test]
fn test_risk_from_custom_schedule() {
    let schedule = CashFlowSchedule::from_amounts(&[0.0, 0.0, 100.0], ANNUAL).unwrap();

    assert_relative_eq!(risk::macaulay_duration(&schedule, 0.04).unwrap(), 3.0, epsilon = 1e-12);
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_invalid_terms() {
    assert!(matches!(Bond::new(1000.0, 0.08, 0), Err(BondError::InvalidTerms { .. })));
    assert!(matches!(Bond::new(0.0, 0.08, 5), Err(BondError::InvalidTerms { .. })));
    assert!(matches!(Bond::new(1000.0, -0.01, 5), Err(BondError::InvalidTerms { .. })));
    assert!(matches!(
        functions::price(1000.0, 0.08, 5, 0.10, 0),
        Err(BondError::InvalidTerms { .. })
    ));
}

#[test]
fn test_negative_yield_rejected() {
    assert!(matches!(
        functions::convexity(1000.0, 0.08, 5, -0.01, 1),
        Err(BondError::InvalidYield { .. })
    ));
}
