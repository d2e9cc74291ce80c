//! Immutable bond facade.

use serde::{Deserialize, Serialize};

use crate::cashflows::{generate_cash_flows, CashFlowSchedule};
use crate::error::BondResult;
use crate::pricing::{check_yield, price_at_annual_yield};
use crate::risk::{self, PriceShock, SensitivityMetrics};
use crate::terms::{per_period_yield, BondTerms, ANNUAL};
use crate::yield_solver::{YieldResult, YieldSolver};

/// A plain coupon bond.
///
/// Binds [`BondTerms`] once and answers valuation questions about them. All
/// yields passed to or returned from a `Bond` are annual nominal yields
/// compounded at the bond's payment frequency.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::Bond;
///
/// let bond = Bond::new(1000.0, 0.08, 5).unwrap();
///
/// let price = bond.price(0.10).unwrap();
/// assert!((price - 924.18).abs() < 0.01);
///
/// let ytm = bond.yield_to_maturity(price).unwrap();
/// assert!((ytm - 0.10).abs() < 1e-9);
///
/// let semi = bond.with_frequency(2).unwrap();
/// assert!(semi.modified_duration(0.10).unwrap() > 3.9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bond {
    terms: BondTerms,
}

impl Bond {
    /// Creates an annual-pay bond.
    pub fn new(face_value: f64, coupon_rate: f64, maturity_years: u32) -> BondResult<Self> {
        BondTerms::new(face_value, coupon_rate, maturity_years, ANNUAL).map(Self::from_terms)
    }

    /// Wraps validated terms.
    pub fn from_terms(terms: BondTerms) -> Self {
        Self { terms }
    }

    /// Returns the same bond paying `payments_per_year` coupons a year.
    pub fn with_frequency(self, payments_per_year: u32) -> BondResult<Self> {
        self.terms
            .with_payments_per_year(payments_per_year)
            .map(Self::from_terms)
    }

    /// The bond's terms.
    pub fn terms(&self) -> &BondTerms {
        &self.terms
    }

    /// The bond's payment schedule.
    pub fn cash_flows(&self) -> CashFlowSchedule {
        generate_cash_flows(&self.terms)
    }

    /// Price at an annual yield.
    pub fn price(&self, annual_yield: f64) -> BondResult<f64> {
        price_at_annual_yield(&self.cash_flows(), annual_yield)
    }

    /// Annual yield that reprices the bond to `market_price`.
    pub fn yield_to_maturity(&self, market_price: f64) -> BondResult<f64> {
        self.solve_yield(market_price, &YieldSolver::new())
            .map(|result| result.yield_value)
    }

    /// Yield to maturity with a caller-configured solver.
    pub fn solve_yield(&self, market_price: f64, solver: &YieldSolver) -> BondResult<YieldResult> {
        solver.solve(&self.terms, market_price)
    }

    /// Macaulay duration in years at an annual yield.
    pub fn macaulay_duration(&self, annual_yield: f64) -> BondResult<f64> {
        risk::macaulay_duration(&self.cash_flows(), self.period_yield(annual_yield)?)
    }

    /// Modified duration at an annual yield.
    pub fn modified_duration(&self, annual_yield: f64) -> BondResult<f64> {
        risk::modified_duration(&self.cash_flows(), self.period_yield(annual_yield)?)
    }

    /// Convexity in years squared at an annual yield.
    pub fn convexity(&self, annual_yield: f64) -> BondResult<f64> {
        risk::convexity(&self.cash_flows(), self.period_yield(annual_yield)?)
    }

    /// Duration and convexity at an annual yield.
    pub fn sensitivity(&self, annual_yield: f64) -> BondResult<SensitivityMetrics> {
        risk::sensitivity(&self.cash_flows(), self.period_yield(annual_yield)?)
    }

    /// Price change for a one basis point yield move.
    pub fn dv01(&self, annual_yield: f64) -> BondResult<f64> {
        let schedule = self.cash_flows();
        let r = self.period_yield(annual_yield)?;
        let price = crate::pricing::price(&schedule, r)?;
        Ok(risk::dv01(risk::modified_duration(&schedule, r)?, price))
    }

    /// Exact and approximated effect of shifting the yield by `shift`.
    pub fn estimate_price_change(&self, annual_yield: f64, shift: f64) -> BondResult<PriceShock> {
        risk::price_shock(&self.cash_flows(), annual_yield, shift)
    }

    fn period_yield(&self, annual_yield: f64) -> BondResult<f64> {
        check_yield(annual_yield)?;
        Ok(per_period_yield(
            annual_yield,
            self.terms.payments_per_year(),
        ))
    }
}

impl From<BondTerms> for Bond {
    fn from(terms: BondTerms) -> Self {
        Self::from_terms(terms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BondError;
    use approx::assert_relative_eq;

    #[test]
    fn test_defaults_to_annual() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();

        assert_eq!(bond.terms().payments_per_year(), 1);
        assert_eq!(bond.cash_flows().len(), 5);
    }

    #[test]
    fn test_semi_annual_modified_duration() {
        let bond = Bond::new(1000.0, 0.08, 5)
            .unwrap()
            .with_frequency(2)
            .unwrap();

        assert_relative_eq!(bond.price(0.10).unwrap(), 922.782_650_708_151_6, epsilon = 1e-8);
        assert_relative_eq!(
            bond.modified_duration(0.10).unwrap(),
            3.980_756_744_766_909,
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_modified_is_macaulay_over_one_plus_period_yield() {
        let bond = Bond::new(100.0, 0.045, 12).unwrap().with_frequency(4).unwrap();
        let y = 0.052;

        assert_relative_eq!(
            bond.modified_duration(y).unwrap(),
            bond.macaulay_duration(y).unwrap() / (1.0 + y / 4.0),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_sensitivity_bundle() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();
        let metrics = bond.sensitivity(0.10).unwrap();

        assert_relative_eq!(metrics.macaulay_duration, 4.281_412_085_933_427, epsilon = 1e-10);
        assert_relative_eq!(metrics.modified_duration, 3.892_192_805_394_024, epsilon = 1e-10);
        assert_relative_eq!(metrics.convexity, 20.097_315_358_878_53, epsilon = 1e-9);
    }

    #[test]
    fn test_dv01() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();

        let dv01 = bond.dv01(0.10).unwrap();

        assert_relative_eq!(dv01, 3.892_192_805_394_024 * 924.184_264_611_830_7 * 1e-4, epsilon = 1e-9);
    }

    #[test]
    fn test_negative_yield_rejected_everywhere() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();

        assert!(matches!(bond.price(-0.01), Err(BondError::InvalidYield { .. })));
        assert!(matches!(bond.macaulay_duration(-0.01), Err(BondError::InvalidYield { .. })));
        assert!(matches!(bond.modified_duration(-0.01), Err(BondError::InvalidYield { .. })));
        assert!(matches!(bond.convexity(-0.01), Err(BondError::InvalidYield { .. })));
    }

    #[test]
    fn test_invalid_frequency() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();
        assert!(matches!(bond.with_frequency(0), Err(BondError::InvalidTerms { .. })));
    }

    #[test]
    fn test_solve_yield_with_custom_solver() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();
        let solver = YieldSolver::new().with_tolerance(1e-6);

        let result = bond.solve_yield(950.0, &solver).unwrap();

        assert!(result.residual.abs() < 1e-6);
        assert_relative_eq!(result.yield_value, 0.092_953_275_395, epsilon = 1e-6);
    }

    #[test]
    fn test_serde_transparent() {
        let bond = Bond::new(1000.0, 0.08, 5).unwrap();
        let json = serde_json::to_value(bond).unwrap();

        assert_eq!(json["face_value"], 1000.0);
        assert_eq!(json["payments_per_year"], 1);
    }
}
