//! Static bond terms and yield conventions.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};

/// Payments per year for an annual-pay bond.
pub const ANNUAL: u32 = 1;

/// Payments per year for a semi-annual bond.
pub const SEMI_ANNUAL: u32 = 2;

/// Payments per year for a quarterly bond.
pub const QUARTERLY: u32 = 4;

/// Payments per year for a monthly bond.
pub const MONTHLY: u32 = 12;

/// Fixed terms of a plain coupon bond.
///
/// All fields are validated on construction and never change afterwards;
/// every schedule, price and sensitivity is derived from them.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::terms::{BondTerms, SEMI_ANNUAL};
///
/// let terms = BondTerms::new(1000.0, 0.08, 5, SEMI_ANNUAL).unwrap();
/// assert_eq!(terms.num_periods(), 10);
/// assert_eq!(terms.coupon_per_period(), 40.0);
///
/// assert!(BondTerms::new(1000.0, 0.08, 0, SEMI_ANNUAL).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBondTerms")]
pub struct BondTerms {
    face_value: f64,
    coupon_rate: f64,
    maturity_years: u32,
    payments_per_year: u32,
}

/// Unvalidated bond terms, as read from configuration or JSON.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBondTerms {
    /// Principal repaid at maturity.
    pub face_value: f64,
    /// Annual coupon rate as a decimal (0.08 = 8%).
    pub coupon_rate: f64,
    /// Whole years to maturity.
    pub maturity_years: u32,
    /// Coupon payments per year.
    #[serde(default = "default_payments_per_year")]
    pub payments_per_year: u32,
}

fn default_payments_per_year() -> u32 {
    ANNUAL
}

impl TryFrom<RawBondTerms> for BondTerms {
    type Error = BondError;

    fn try_from(raw: RawBondTerms) -> BondResult<Self> {
        Self::new(
            raw.face_value,
            raw.coupon_rate,
            raw.maturity_years,
            raw.payments_per_year,
        )
    }
}

impl BondTerms {
    /// Validates and creates bond terms.
    ///
    /// Fails with [`BondError::InvalidTerms`] when maturity or frequency is
    /// zero, face value is not positive and finite, coupon rate is negative
    /// or not finite, or the period count overflows.
    pub fn new(
        face_value: f64,
        coupon_rate: f64,
        maturity_years: u32,
        payments_per_year: u32,
    ) -> BondResult<Self> {
        if maturity_years == 0 {
            return Err(BondError::invalid_terms("maturity must be at least one year"));
        }
        if payments_per_year == 0 {
            return Err(BondError::invalid_terms(
                "payments per year must be positive",
            ));
        }
        if maturity_years.checked_mul(payments_per_year).is_none() {
            return Err(BondError::invalid_terms(format!(
                "{maturity_years} years at {payments_per_year} payments per year overflows the period count"
            )));
        }
        if !face_value.is_finite() || face_value <= 0.0 {
            return Err(BondError::invalid_terms(format!(
                "face value must be positive, got {face_value}"
            )));
        }
        if !coupon_rate.is_finite() || coupon_rate < 0.0 {
            return Err(BondError::invalid_terms(format!(
                "coupon rate must be non-negative, got {coupon_rate}"
            )));
        }

        Ok(Self {
            face_value,
            coupon_rate,
            maturity_years,
            payments_per_year,
        })
    }

    /// Creates annual-pay bond terms.
    pub fn annual(face_value: f64, coupon_rate: f64, maturity_years: u32) -> BondResult<Self> {
        Self::new(face_value, coupon_rate, maturity_years, ANNUAL)
    }

    /// Returns a copy with a different payment frequency.
    pub fn with_payments_per_year(self, payments_per_year: u32) -> BondResult<Self> {
        Self::new(
            self.face_value,
            self.coupon_rate,
            self.maturity_years,
            payments_per_year,
        )
    }

    /// Principal repaid at maturity.
    pub fn face_value(&self) -> f64 {
        self.face_value
    }

    /// Annual coupon rate as a decimal.
    pub fn coupon_rate(&self) -> f64 {
        self.coupon_rate
    }

    /// Whole years to maturity.
    pub fn maturity_years(&self) -> u32 {
        self.maturity_years
    }

    /// Coupon payments per year.
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Total number of coupon periods.
    pub fn num_periods(&self) -> u32 {
        // Overflow is rejected in `new`.
        self.maturity_years * self.payments_per_year
    }

    /// Coupon paid each period.
    pub fn coupon_per_period(&self) -> f64 {
        self.coupon_rate * self.face_value / f64::from(self.payments_per_year)
    }

    /// Coupon paid over a year.
    pub fn annual_coupon(&self) -> f64 {
        self.coupon_rate * self.face_value
    }

    /// True when the bond pays no coupons.
    pub fn is_zero_coupon(&self) -> bool {
        self.coupon_rate == 0.0
    }
}

/// Converts an annual nominal yield to the per-period rate.
pub fn per_period_yield(annual_yield: f64, payments_per_year: u32) -> f64 {
    annual_yield / f64::from(payments_per_year)
}

/// Converts a per-period rate to the annual nominal yield.
pub fn annual_yield(per_period_yield: f64, payments_per_year: u32) -> f64 {
    per_period_yield * f64::from(payments_per_year)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_derived_quantities() {
        let terms = BondTerms::new(1000.0, 0.06, 10, QUARTERLY).unwrap();

        assert_eq!(terms.num_periods(), 40);
        assert_relative_eq!(terms.coupon_per_period(), 15.0);
        assert_relative_eq!(terms.annual_coupon(), 60.0);
        assert!(!terms.is_zero_coupon());
    }

    #[test]
    fn test_zero_maturity_rejected() {
        let err = BondTerms::new(1000.0, 0.05, 0, ANNUAL).unwrap_err();
        assert!(matches!(err, BondError::InvalidTerms { .. }));
    }

    #[test]
    fn test_zero_frequency_rejected() {
        let err = BondTerms::new(1000.0, 0.05, 5, 0).unwrap_err();
        assert!(matches!(err, BondError::InvalidTerms { .. }));
    }

    #[test]
    fn test_bad_face_and_coupon_rejected() {
        assert!(BondTerms::annual(0.0, 0.05, 5).is_err());
        assert!(BondTerms::annual(-100.0, 0.05, 5).is_err());
        assert!(BondTerms::annual(f64::NAN, 0.05, 5).is_err());
        assert!(BondTerms::annual(100.0, -0.01, 5).is_err());
        assert!(BondTerms::annual(100.0, f64::INFINITY, 5).is_err());
    }

    #[test]
    fn test_period_overflow_rejected() {
        assert!(BondTerms::new(100.0, 0.05, u32::MAX, MONTHLY).is_err());
    }

    #[test]
    fn test_zero_coupon_allowed() {
        let terms = BondTerms::annual(100.0, 0.0, 3).unwrap();
        assert!(terms.is_zero_coupon());
        assert_relative_eq!(terms.coupon_per_period(), 0.0);
    }

    #[test]
    fn test_with_payments_per_year() {
        let annual = BondTerms::annual(100.0, 0.05, 2).unwrap();
        let semi = annual.with_payments_per_year(SEMI_ANNUAL).unwrap();

        assert_eq!(semi.num_periods(), 4);
        assert!(annual.with_payments_per_year(0).is_err());
    }

    #[test]
    fn test_yield_conversion() {
        assert_relative_eq!(per_period_yield(0.10, SEMI_ANNUAL), 0.05);
        assert_relative_eq!(annual_yield(0.05, SEMI_ANNUAL), 0.10);
    }

    #[test]
    fn test_deserialize_validates() {
        let terms: BondTerms = serde_json::from_str(
            r#"{"face_value": 1000.0, "coupon_rate": 0.08, "maturity_years": 5}"#,
        )
        .unwrap();
        assert_eq!(terms.payments_per_year(), ANNUAL);

        let bad = serde_json::from_str::<BondTerms>(
            r#"{"face_value": 1000.0, "coupon_rate": 0.08, "maturity_years": 0}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_serialize_round_trip() {
        let terms = BondTerms::new(500.0, 0.04, 7, SEMI_ANNUAL).unwrap();
        let json = serde_json::to_string(&terms).unwrap();
        let back: BondTerms = serde_json::from_str(&json).unwrap();
        assert_eq!(terms, back);
    }
}
