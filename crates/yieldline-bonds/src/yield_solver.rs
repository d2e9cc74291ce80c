//! Yield-to-maturity solver.
//!
//! Finds the annual yield `y` at which the bond's price equals an observed
//! market price. The search starts from the textbook approximation
//!
//! ```text
//! y0 = (C + (F - P) / n) / ((F + P) / 2)
//! ```
//!
//! refines it with Newton-Raphson using the analytical price slope, and falls
//! back to bisection over the whole per-period domain `(-1, inf)` when Newton
//! misbehaves. Each stage is capped at `max_iterations`.
//!
//! # Example
//!
//! ```rust
//! use yieldline_bonds::terms::BondTerms;
//! use yieldline_bonds::yield_solver::YieldSolver;
//!
//! let terms = BondTerms::annual(1000.0, 0.08, 5).unwrap();
//! let result = YieldSolver::new().solve(&terms, 950.0).unwrap();
//!
//! assert!((result.yield_value - 0.09295).abs() < 1e-4);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use yieldline_math::solvers::{bisection, newton_raphson, SolverConfig};

use crate::cashflows::{generate_cash_flows, CashFlowSchedule};
use crate::error::{BondError, BondResult};
use crate::pricing::{present_value, present_value_slope};
use crate::terms::BondTerms;

/// Default absolute tolerance on the price residual.
pub const DEFAULT_YIELD_TOLERANCE: f64 = 1e-10;

/// Default iteration cap per solver stage.
pub const DEFAULT_YIELD_MAX_ITERATIONS: u32 = 100;

/// Lowest per-period rate probed by the bisection fallback.
const MIN_PERIOD_RATE: f64 = -0.99;

/// Doublings allowed while searching for an upper bracket.
const MAX_BRACKET_DOUBLINGS: u32 = 64;

/// Roots this close to zero are reported as exactly zero.
const ZERO_YIELD_SNAP: f64 = 1e-12;

/// Result of a yield calculation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YieldResult {
    /// Annual yield as a decimal (0.05 = 5%).
    pub yield_value: f64,
    /// Iterations used by the stage that converged.
    pub iterations: u32,
    /// Price residual at the solution.
    pub residual: f64,
}

/// Yield-to-maturity solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YieldSolver {
    config: SolverConfig,
}

impl Default for YieldSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl YieldSolver {
    /// Creates a solver with tolerance 1e-10 and 100 iterations per stage.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SolverConfig::new(DEFAULT_YIELD_TOLERANCE, DEFAULT_YIELD_MAX_ITERATIONS),
        }
    }

    /// Replaces the whole solver configuration.
    #[must_use]
    pub fn with_config(mut self, config: SolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Sets the price tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_tolerance(tolerance);
        self
    }

    /// Sets the iteration cap per stage.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.config = self.config.with_max_iterations(max_iterations);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves for the annual yield that reprices `terms` to `market_price`.
    ///
    /// # Errors
    ///
    /// - [`BondError::InvalidMarketPrice`] if `market_price` is not positive
    /// - [`BondError::NoConvergence`] if both stages exhaust their caps
    /// - [`BondError::YtmOutOfRange`] if the root is negative or not finite
    pub fn solve(&self, terms: &BondTerms, market_price: f64) -> BondResult<YieldResult> {
        if !market_price.is_finite() || market_price <= 0.0 {
            return Err(BondError::InvalidMarketPrice {
                value: market_price,
            });
        }

        let schedule = generate_cash_flows(terms);
        let guess = initial_yield_estimate(terms, market_price);
        debug!(
            "solving yield for price {market_price} ({} periods), initial estimate {guess:.6}",
            schedule.len()
        );

        let result = self.solve_schedule(&schedule, market_price, guess)?;
        check_root(result)
    }

    fn solve_schedule(
        &self,
        schedule: &CashFlowSchedule,
        target: f64,
        guess: f64,
    ) -> BondResult<YieldResult> {
        let freq = f64::from(schedule.payments_per_year());

        // Rates at or below -100% per period map to +inf, so a Newton step
        // that lands there fails as non-finite.
        let objective = |y: f64| {
            let r = y / freq;
            if r <= -1.0 {
                f64::INFINITY
            } else {
                present_value(schedule, r) - target
            }
        };
        let slope = |y: f64| present_value_slope(schedule, y / freq);

        match newton_raphson(objective, slope, guess, &self.config) {
            Ok(root) => {
                return Ok(YieldResult {
                    yield_value: root.root,
                    iterations: root.iterations,
                    residual: root.residual,
                })
            }
            Err(err) => warn!("newton failed from {guess:.6} ({err}), falling back to bisection"),
        }

        let lower = MIN_PERIOD_RATE * freq;
        if objective(lower) < 0.0 {
            // Even a -99% per-period rate cannot reach the target.
            return Err(BondError::YtmOutOfRange { value: lower });
        }

        let mut upper = freq;
        let mut doublings = 0;
        while objective(upper) > 0.0 {
            if doublings == MAX_BRACKET_DOUBLINGS {
                return Err(BondError::NoConvergence {
                    iterations: doublings,
                    reason: format!("no yield below {upper} reprices to {target}"),
                });
            }
            upper *= 2.0;
            doublings += 1;
        }

        let root = bisection(objective, lower, upper, &self.config).map_err(|err| {
            warn!("bisection failed on [{lower}, {upper}]: {err}");
            BondError::from(err)
        })?;

        Ok(YieldResult {
            yield_value: root.root,
            iterations: root.iterations,
            residual: root.residual,
        })
    }
}

fn check_root(mut result: YieldResult) -> BondResult<YieldResult> {
    if result.yield_value.abs() < ZERO_YIELD_SNAP {
        result.yield_value = 0.0;
    }
    if !result.yield_value.is_finite() || result.yield_value < 0.0 {
        return Err(BondError::YtmOutOfRange {
            value: result.yield_value,
        });
    }
    Ok(result)
}

/// Closed-form yield approximation used to seed the solver.
///
/// ```text
/// y0 = (annual_coupon + (face - price) / years) / ((face + price) / 2)
/// ```
pub fn initial_yield_estimate(terms: &BondTerms, market_price: f64) -> f64 {
    let face = terms.face_value();
    let years = f64::from(terms.maturity_years());

    (terms.annual_coupon() + (face - market_price) / years) / ((face + market_price) / 2.0)
}

/// Solves for the annual yield with the default solver.
pub fn yield_to_maturity(terms: &BondTerms, market_price: f64) -> BondResult<f64> {
    YieldSolver::new()
        .solve(terms, market_price)
        .map(|result| result.yield_value)
}
