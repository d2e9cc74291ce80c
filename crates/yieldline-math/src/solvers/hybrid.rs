//! Newton-Raphson with a Brent fallback.

use log::{debug, warn};

use crate::error::{MathError, MathResult};
use crate::solvers::{brent, SolverConfig, SolverResult};

/// Newton gets at most this many steps before the fallback takes over.
const NEWTON_BUDGET: u32 = 20;

/// Consecutive residual blow-ups tolerated before Newton is abandoned.
const MAX_DIVERGENT_STEPS: u32 = 3;

/// Hybrid root-finding algorithm.
///
/// 1. Runs a monitored Newton iteration from `initial_guess`.
/// 2. If Newton diverges, hits a flat slope or leaves the real line, runs
///    Brent on `bounds`, or on a bracket found by [`find_bracket`].
///
/// The whole search is bounded by `NEWTON_BUDGET + config.max_iterations`
/// function evaluations plus the bracket search.
///
/// # Example
///
/// ```rust
/// use yieldline_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let newton_err = match monitored_newton(&f, &df, initial_guess, config) {
        Ok(result) => return Ok(result),
        Err(err) => err,
    };
    debug!("hybrid: newton abandoned ({newton_err}), falling back to brent");

    let (a, b) = match bounds.or_else(|| find_bracket(&f, initial_guess)) {
        Some(bracket) => bracket,
        None => {
            warn!("hybrid: no bracket around {initial_guess}");
            return Err(MathError::invalid_input(
                "Newton-Raphson failed and no bracketing interval was found",
            ));
        }
    };

    brent(&f, a, b, config)
}

/// Hybrid solver with a central-difference derivative.
pub fn hybrid_numerical<F>(
    f: F,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-7;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    hybrid(&f, df, initial_guess, bounds, config)
}

/// Newton iteration that fails fast on divergence.
fn monitored_newton<F, DF>(
    f: &F,
    df: &DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let budget = config.max_iterations.min(NEWTON_BUDGET);
    let mut x = initial_guess;
    let mut prev_residual = f64::MAX;
    let mut divergent_steps = 0;

    for iteration in 0..budget {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        let residual = fx.abs();
        if residual < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        if residual > 2.0 * prev_residual {
            divergent_steps += 1;
            if divergent_steps >= MAX_DIVERGENT_STEPS {
                return Err(MathError::invalid_input("Newton-Raphson diverging"));
            }
        } else {
            divergent_steps = 0;
        }
        prev_residual = residual;

        let dfx = df(x);
        if !dfx.is_finite() || dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;
        if !x.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        if step.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(budget, f(x).abs()))
}

/// Searches for an interval around `initial_guess` on which `f` changes sign.
///
/// Expands symmetrically with a doubling step, giving up once the step
/// exceeds `1e6`. Points where `f` is not finite are skipped.
pub fn find_bracket<F>(f: &F, initial_guess: f64) -> Option<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    let (mut left, mut right) = if initial_guess.abs() < 1e-10 {
        (-1.0, 1.0)
    } else {
        (initial_guess, initial_guess)
    };
    let f_init = f(initial_guess);
    if !f_init.is_finite() {
        return None;
    }

    let mut delta = 0.1;
    while delta <= 1e6 {
        left -= delta;
        right += delta;

        let f_left = f(left);
        let f_right = f(right);

        if f_left.is_finite() && f_left * f_init < 0.0 {
            return Some((left, initial_guess));
        }
        if f_right.is_finite() && f_right * f_init < 0.0 {
            return Some((initial_guess, right));
        }

        delta *= 2.0;
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_newton_path() {
        let f = |x: f64| x * x - 2.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 1.5, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::SQRT_2, epsilon = 1e-10);
    }

    #[test]
    fn test_falls_back_on_flat_slope() {
        // Newton from 0 hits a zero derivative immediately.
        let f = |x: f64| x * x * x - 1.0;
        let df = |x: f64| 3.0 * x * x;

        let result = hybrid(f, df, 0.0, Some((0.0, 2.0)), &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_falls_back_on_divergence() {
        // Newton on atan overshoots from far away.
        let f = |x: f64| x.atan();
        let df = |x: f64| 1.0 / (1.0 + x * x);

        let result = hybrid(f, df, 3.0, Some((-5.0, 4.0)), &SolverConfig::default()).unwrap();

        assert!(result.root.abs() < 1e-9);
    }

    #[test]
    fn test_numerical_variant() {
        let f = |x: f64| x.exp() - 2.0;

        let result = hybrid_numerical(f, 0.0, None, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, std::f64::consts::LN_2, epsilon = 1e-8);
    }

    #[test]
    fn test_find_bracket() {
        let f = |x: f64| x - 3.7;

        let (a, b) = find_bracket(&f, 1.0).unwrap();

        assert!(a <= 3.7 && 3.7 <= b);
        assert!(f(a) * f(b) <= 0.0);
    }

    #[test]
    fn test_find_bracket_none() {
        let f = |x: f64| x * x + 1.0;

        assert!(find_bracket(&f, 0.5).is_none());
    }

    #[test]
    fn test_no_bracket_error() {
        let f = |x: f64| x * x + 1.0;
        let df = |x: f64| 2.0 * x;

        let result = hybrid(f, df, 0.5, None, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::InvalidInput { .. })));
    }
}
