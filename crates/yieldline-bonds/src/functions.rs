//! Standalone functions over raw bond parameters.
//!
//! Each function builds a [`Bond`] from `(face, coupon, maturity, frequency)`
//! and delegates to it, so validation and numerics are shared with the
//! facade. Yields are annual nominal yields compounded `frequency` times a
//! year.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::functions::*;
//!
//! let p = price(1000.0, 0.08, 5, 0.10, 1).unwrap();
//! let y = yield_to_maturity(p, 1000.0, 0.08, 5, 1).unwrap();
//! assert!((y - 0.10).abs() < 1e-9);
//!
//! let d = modified_duration(1000.0, 0.08, 5, 0.10, 2).unwrap();
//! assert!((d - 3.9808).abs() < 1e-4);
//! ```

use crate::bond::Bond;
use crate::error::BondResult;
use crate::terms::BondTerms;

fn bond(face_value: f64, coupon_rate: f64, maturity_years: u32, frequency: u32) -> BondResult<Bond> {
    BondTerms::new(face_value, coupon_rate, maturity_years, frequency).map(Bond::from_terms)
}

// ============================================================================
// PRICE AND YIELD
// ============================================================================

/// Price of a bond at an annual yield.
pub fn price(
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    annual_yield: f64,
    frequency: u32,
) -> BondResult<f64> {
    bond(face_value, coupon_rate, maturity_years, frequency)?.price(annual_yield)
}

/// Annual yield that reprices a bond to `market_price`.
///
/// The market price comes first, ahead of the terms it is quoted against.
pub fn yield_to_maturity(
    market_price: f64,
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    frequency: u32,
) -> BondResult<f64> {
    bond(face_value, coupon_rate, maturity_years, frequency)?.yield_to_maturity(market_price)
}

// ============================================================================
// SENSITIVITY
// ============================================================================

/// Macaulay duration in years.
pub fn macaulay_duration(
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    annual_yield: f64,
    frequency: u32,
) -> BondResult<f64> {
    bond(face_value, coupon_rate, maturity_years, frequency)?.macaulay_duration(annual_yield)
}

/// Modified duration.
pub fn modified_duration(
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    annual_yield: f64,
    frequency: u32,
) -> BondResult<f64> {
    bond(face_value, coupon_rate, maturity_years, frequency)?.modified_duration(annual_yield)
}

/// Convexity in years squared.
pub fn convexity(
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    annual_yield: f64,
    frequency: u32,
) -> BondResult<f64> {
    bond(face_value, coupon_rate, maturity_years, frequency)?.convexity(annual_yield)
}
