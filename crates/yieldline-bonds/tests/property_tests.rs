//! Property-based tests for bond valuation invariants.
//!
//! - A bond whose coupon equals its yield prices at par
//! - Price falls strictly as yield rises
//! - Pricing then solving for yield recovers the yield
//! - Modified duration is Macaulay duration over (1 + y/f)
//! - Duration never exceeds maturity and equals it for zero coupons

use proptest::prelude::*;
use yieldline_bonds::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

fn frequency() -> impl Strategy<Value = u32> {
    prop_oneof![Just(ANNUAL), Just(SEMI_ANNUAL), Just(QUARTERLY), Just(MONTHLY)]
}

fn bond() -> impl Strategy<Value = Bond> {
    (100.0_f64..10_000.0, 0.0_f64..0.15, 1_u32..=30, frequency()).prop_map(
        |(face, coupon, maturity, freq)| {
            Bond::from_terms(BondTerms::new(face, coupon, maturity, freq).unwrap())
        },
    )
}

// =============================================================================
// PRICE
// =============================================================================

proptest! {
    #[test]
    fn property_par_bond_prices_at_face(
        face in 100.0_f64..10_000.0,
        rate in 0.001_f64..0.20,
        maturity in 1_u32..=30,
        freq in frequency(),
    ) {
        let bond = Bond::from_terms(BondTerms::new(face, rate, maturity, freq).unwrap());

        let p = bond.price(rate).unwrap();

        prop_assert!((p - face).abs() < 1e-9 * face, "par bond priced at {} for face {}", p, face);
    }

    #[test]
    fn property_price_decreases_with_yield(
        bond in bond(),
        y in 0.0_f64..0.30,
        dy in 1e-4_f64..0.10,
    ) {
        let lower = bond.price(y).unwrap();
        let higher = bond.price(y + dy).unwrap();

        prop_assert!(higher < lower, "P({}) = {} not below P({}) = {}", y + dy, higher, y, lower);
    }
}

// =============================================================================
// YIELD
// =============================================================================

proptest! {
    #[test]
    fn property_yield_round_trip(
        face in 100.0_f64..10_000.0,
        coupon in 0.01_f64..0.15,
        maturity in 1_u32..=30,
        freq in frequency(),
        y in 0.005_f64..0.30,
    ) {
        let bond = Bond::from_terms(BondTerms::new(face, coupon, maturity, freq).unwrap());
        let p = bond.price(y).unwrap();

        let solved = bond.yield_to_maturity(p).unwrap();

        prop_assert!((solved - y).abs() < 1e-7, "solved {} for true yield {}", solved, y);
    }
}

// =============================================================================
// SENSITIVITY
// =============================================================================

proptest! {
    #[test]
    fn property_modified_duration_relation(bond in bond(), y in 0.0_f64..0.30) {
        let freq = f64::from(bond.terms().payments_per_year());
        let mac = bond.macaulay_duration(y).unwrap();
        let modified = bond.modified_duration(y).unwrap();

        prop_assert!((modified - mac / (1.0 + y / freq)).abs() < 1e-12 * mac.max(1.0));
    }

    #[test]
    fn property_duration_bounded_by_maturity(bond in bond(), y in 0.0_f64..0.30) {
        let maturity = f64::from(bond.terms().maturity_years());
        let mac = bond.macaulay_duration(y).unwrap();

        prop_assert!(mac > 0.0);
        prop_assert!(mac <= maturity + 1e-9);
        if bond.terms().is_zero_coupon() {
            prop_assert!((mac - maturity).abs() < 1e-9);
        }
    }

    #[test]
    fn property_convexity_positive(bond in bond(), y in 0.0_f64..0.30) {
        prop_assert!(bond.convexity(y).unwrap() > 0.0);
    }

    #[test]
    fn property_longer_zero_coupon_has_more_risk(
        maturity in 1_u32..30,
        y in 0.0_f64..0.20,
    ) {
        let short = Bond::new(100.0, 0.0, maturity).unwrap();
        let long = Bond::new(100.0, 0.0, maturity + 1).unwrap();

        prop_assert!(long.modified_duration(y).unwrap() > short.modified_duration(y).unwrap());
        prop_assert!(long.convexity(y).unwrap() > short.convexity(y).unwrap());
    }
}
