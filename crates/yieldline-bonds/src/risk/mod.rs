//! Interest-rate sensitivity of a bond.
//!
//! - **Duration**: Macaulay and modified
//! - **Convexity**: analytical
//! - **DV01** and duration/convexity price-change estimates
//!
//! Every measure takes a per-period yield and reprices the schedule at that
//! yield for its normalizer; nothing is cached between calls.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::cashflows::generate_cash_flows;
//! use yieldline_bonds::risk::sensitivity;
//! use yieldline_bonds::terms::BondTerms;
//!
//! let schedule = generate_cash_flows(&BondTerms::annual(1000.0, 0.08, 5).unwrap());
//! let metrics = sensitivity(&schedule, 0.10).unwrap();
//!
//! assert!((metrics.macaulay_duration - 4.2814).abs() < 1e-4);
//! assert!(metrics.modified_duration < metrics.macaulay_duration);
//! ```

mod convexity;
mod duration;

pub use convexity::{convexity, price_change_with_convexity};
pub use duration::{
    dv01, macaulay_duration, modified_duration, modified_from_macaulay,
    price_change_from_duration,
};

use serde::{Deserialize, Serialize};

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};
use crate::pricing::price;

/// Duration and convexity at a single yield.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensitivityMetrics {
    /// Present-value-weighted average time to payment, in years.
    pub macaulay_duration: f64,
    /// Percentage price change per unit yield change.
    pub modified_duration: f64,
    /// Curvature of the price-yield relation, in years squared.
    pub convexity: f64,
}

/// Computes all three sensitivity measures at a per-period yield.
pub fn sensitivity(
    schedule: &CashFlowSchedule,
    per_period_yield: f64,
) -> BondResult<SensitivityMetrics> {
    let macaulay = macaulay_duration(schedule, per_period_yield)?;
    Ok(SensitivityMetrics {
        macaulay_duration: macaulay,
        modified_duration: modified_from_macaulay(macaulay, per_period_yield),
        convexity: convexity(schedule, per_period_yield)?,
    })
}

/// Effect of a parallel yield shift, estimated and exact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceShock {
    /// Price before the shift.
    pub base_price: f64,
    /// Price after repricing at the shifted yield.
    pub shifted_price: f64,
    /// First-order (duration) estimate of the change.
    pub duration_estimate: f64,
    /// Second-order (duration + convexity) estimate of the change.
    pub convexity_estimate: f64,
}

impl PriceShock {
    /// Exact price change.
    pub fn actual_change(&self) -> f64 {
        self.shifted_price - self.base_price
    }
}

/// Reprices `schedule` under an annual yield shift and compares with the
/// duration and convexity approximations.
///
/// Both `annual_yield` and `annual_yield + shift` must be non-negative.
pub fn price_shock(
    schedule: &CashFlowSchedule,
    annual_yield: f64,
    shift: f64,
) -> BondResult<PriceShock> {
    let freq = f64::from(schedule.payments_per_year());
    let base_yield = annual_yield / freq;
    let shifted_yield = (annual_yield + shift) / freq;

    let base_price = price(schedule, base_yield)?;
    let shifted_price = price(schedule, shifted_yield)?;
    let metrics = sensitivity(schedule, base_yield)?;

    Ok(PriceShock {
        base_price,
        shifted_price,
        duration_estimate: price_change_from_duration(
            metrics.modified_duration,
            base_price,
            shift,
        ),
        convexity_estimate: price_change_with_convexity(
            metrics.modified_duration,
            metrics.convexity,
            base_price,
            shift,
        ),
    })
}

/// Price at `per_period_yield`, rejected when it cannot serve as a divisor.
fn normalizing_price(
    schedule: &CashFlowSchedule,
    per_period_yield: f64,
    measure: &str,
) -> BondResult<f64> {
    let p = price(schedule, per_period_yield)?;
    if !p.is_normal() {
        return Err(BondError::division_by_zero(format!(
            "{measure} is undefined for price {p} at per-period yield {per_period_yield}"
        )));
    }
    Ok(p)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashflows::generate_cash_flows;
    use crate::terms::{BondTerms, SEMI_ANNUAL};
    use approx::assert_relative_eq;

    #[test]
    fn test_sensitivity_matches_individual_measures() {
        let schedule =
            generate_cash_flows(&BondTerms::new(1000.0, 0.06, 8, SEMI_ANNUAL).unwrap());
        let r = 0.035;

        let m = sensitivity(&schedule, r).unwrap();

        assert_relative_eq!(m.macaulay_duration, macaulay_duration(&schedule, r).unwrap());
        assert_relative_eq!(m.modified_duration, modified_duration(&schedule, r).unwrap());
        assert_relative_eq!(m.convexity, convexity(&schedule, r).unwrap());
        assert_relative_eq!(m.modified_duration, m.macaulay_duration / (1.0 + r));
    }

    #[test]
    fn test_zero_price_is_division_by_zero() {
        let schedule = CashFlowSchedule::from_amounts(&[10.0, -10.0], 1).unwrap();

        // 10 - 10 at zero yield
        let err = sensitivity(&schedule, 0.0).unwrap_err();

        assert!(matches!(err, BondError::DivisionByZero { .. }));
    }

    #[test]
    fn test_underflowing_price_is_division_by_zero() {
        let schedule = generate_cash_flows(&BondTerms::annual(100.0, 0.0, 5).unwrap());

        // 100 / (1e100)^5 underflows to zero.
        assert!(matches!(
            macaulay_duration(&schedule, 1e100),
            Err(BondError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_price_shock() {
        let schedule = generate_cash_flows(&BondTerms::annual(1000.0, 0.08, 5).unwrap());

        let shock = price_shock(&schedule, 0.10, 0.01).unwrap();

        assert!(shock.actual_change() < 0.0);
        assert!(shock.duration_estimate < shock.convexity_estimate);
        assert!(
            (shock.actual_change() - shock.convexity_estimate).abs()
                < (shock.actual_change() - shock.duration_estimate).abs()
        );
    }

    #[test]
    fn test_price_shock_below_zero_rejected() {
        let schedule = generate_cash_flows(&BondTerms::annual(1000.0, 0.08, 5).unwrap());

        assert!(matches!(
            price_shock(&schedule, 0.01, -0.02),
            Err(BondError::InvalidYield { .. })
        ));
    }
}
