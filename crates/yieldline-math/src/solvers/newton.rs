//! Newton-Raphson root-finding algorithm.

use log::debug;

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Slopes smaller than this are treated as zero.
const MIN_DERIVATIVE: f64 = 1e-15;

/// Newton-Raphson root-finding algorithm.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` until `|f(x)|` or the step
/// falls below `config.tolerance`.
///
/// Fails with [`MathError::DivisionByZero`] when the slope vanishes,
/// [`MathError::NonFinite`] when an iterate or residual leaves the real line,
/// and [`MathError::ConvergenceFailed`] once `config.max_iterations` steps
/// have been taken.
///
/// # Example
///
/// ```rust
/// use yieldline_math::solvers::{newton_raphson, SolverConfig};
///
/// let f = |x: f64| x * x - 2.0;
/// let df = |x: f64| 2.0 * x;
///
/// let result = newton_raphson(f, df, 1.5, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        if fx.abs() < config.tolerance {
            debug!("newton converged at x={x} after {iteration} iterations");
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }
        if dfx.abs() < MIN_DERIVATIVE {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        let step = fx / dfx;
        x -= step;

        if !x.is_finite() {
            return Err(MathError::NonFinite { iteration });
        }

        if step.abs() < config.tolerance {
            let final_fx = f(x);
            if !final_fx.is_finite() {
                return Err(MathError::NonFinite {
                    iteration: iteration + 1,
                });
            }
            debug!("newton step converged at x={x} after {} iterations", iteration + 1);
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

/// Newton-Raphson with a central-difference derivative.
pub fn newton_raphson_numerical<F>(
    f: F,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let h = 1e-7;
    let df = |x: f64| (f(x + h) - f(x - h)) / (2.0 * h);

    newton_raphson(&f, df, initial_guess, config)
}
