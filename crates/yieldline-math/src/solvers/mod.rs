//! Bounded root-finding algorithms.
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | [`newton_raphson`] | quadratic | may diverge | derivative |
//! | [`bisection`] | linear | guaranteed | bracket |
//! | [`brent`] | superlinear | guaranteed | bracket |
//! | [`hybrid`] | quadratic near root | guaranteed* | initial guess |
//!
//! *When bounds are supplied or [`find_bracket`] locates one.
//!
//! All solvers share [`SolverConfig`]: a residual tolerance and a hard cap on
//! the number of iterations.
//!
//! # Example
//!
//! ```rust
//! use yieldline_math::solvers::{newton_raphson, SolverConfig};
//!
//! // 8% annual coupon, 5 years, observed at 950
//! let objective = |y: f64| {
//!     let mut pv = 0.0;
//!     for t in 1..=5 {
//!         pv += 80.0 / (1.0 + y).powi(t);
//!     }
//!     pv + 1000.0 / (1.0 + y).powi(5) - 950.0
//! };
//! let slope = |y: f64| {
//!     let mut dpv = 0.0;
//!     for t in 1..=5 {
//!         dpv -= f64::from(t) * 80.0 / (1.0 + y).powi(t + 1);
//!     }
//!     dpv - 5.0 * 1000.0 / (1.0 + y).powi(6)
//! };
//!
//! let result = newton_raphson(objective, slope, 0.09, &SolverConfig::default()).unwrap();
//! assert!((result.root - 0.09295).abs() < 1e-4);
//! ```

mod bisection;
mod brent;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use brent::brent;
pub use hybrid::{find_bracket, hybrid, hybrid_numerical};
pub use newton::{newton_raphson, newton_raphson_numerical};

use crate::error::MathResult;

/// Default absolute tolerance on the residual.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration shared by every root-finder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// Absolute tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Outcome of a successful root search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Function value at the root.
    pub residual: f64,
}

/// Unified interface over the root-finders.
///
/// Callers pick a strategy at runtime and optionally pass a derivative and a
/// bracket; each implementation uses what it needs.
///
/// ```rust
/// use yieldline_math::solvers::{BisectionSolver, Solver, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let no_deriv: Option<fn(f64) -> f64> = None;
/// let result = BisectionSolver
///     .solve(f, no_deriv, 1.5, Some((1.0, 2.0)), &SolverConfig::default())
///     .unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-9);
/// ```
pub trait Solver: Send + Sync {
    /// Solves for a root of `f`.
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Newton-Raphson, numerical derivative when none is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct NewtonSolver;

impl Solver for NewtonSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        _bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => newton_raphson(f, df, initial_guess, config),
            None => newton_raphson_numerical(f, initial_guess, config),
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// Bisection over the supplied bracket, or a searched one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BisectionSolver;

impl Solver for BisectionSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = resolve_bounds(&f, initial_guess, bounds)?;
        bisection(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}

/// Brent's method over the supplied bracket, or a searched one.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrentSolver;

impl Solver for BrentSolver {
    fn solve<F, D>(
        &self,
        f: F,
        _derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        let (a, b) = resolve_bounds(&f, initial_guess, bounds)?;
        brent(f, a, b, config)
    }

    fn name(&self) -> &'static str {
        "Brent"
    }
}

/// Newton with Brent fallback.
#[derive(Debug, Clone, Copy, Default)]
pub struct HybridSolver;

impl Solver for HybridSolver {
    fn solve<F, D>(
        &self,
        f: F,
        derivative: Option<D>,
        initial_guess: f64,
        bounds: Option<(f64, f64)>,
        config: &SolverConfig,
    ) -> MathResult<SolverResult>
    where
        F: Fn(f64) -> f64,
        D: Fn(f64) -> f64,
    {
        match derivative {
            Some(df) => hybrid(f, df, initial_guess, bounds, config),
            None => hybrid_numerical(f, initial_guess, bounds, config),
        }
    }

    fn name(&self) -> &'static str {
        "Hybrid (Newton + Brent)"
    }
}

fn resolve_bounds<F>(
    f: &F,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
) -> MathResult<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    match bounds {
        Some(b) => Ok(b),
        None => find_bracket(f, initial_guess).ok_or_else(|| {
            crate::error::MathError::invalid_input(format!(
                "no sign change found around initial guess {initial_guess}"
            ))
        }),
    }
}
