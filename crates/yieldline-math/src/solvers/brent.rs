//! Brent's root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

const EPS: f64 = 1e-15;

/// Brent's root-finding algorithm.
///
/// Bracketing method that takes inverse quadratic or secant steps when they
/// land inside the bracket and shrink it fast enough, and bisects otherwise.
/// The endpoints must give `f` opposite signs and finite values.
///
/// # Example
///
/// ```rust
/// use yieldline_math::solvers::{brent, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
///
/// let result = brent(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-10);
/// ```
pub fn brent<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut a, mut b) = (a, b);
    let (mut fa, mut fb) = (f(a), f(b));

    if !fa.is_finite() || !fb.is_finite() {
        return Err(MathError::NonFinite { iteration: 0 });
    }
    if fa * fb > 0.0 {
        return Err(MathError::InvalidBracket { a, b, fa, fb });
    }

    // Keep b as the best estimate.
    if fa.abs() < fb.abs() {
        std::mem::swap(&mut a, &mut b);
        std::mem::swap(&mut fa, &mut fb);
    }

    let (mut c, mut fc) = (a, fa);
    let mut d = b - a;
    let mut e = d;

    for iteration in 0..config.max_iterations {
        if fb.abs() < config.tolerance || (b - a).abs() < config.tolerance {
            return Ok(SolverResult {
                root: b,
                iterations: iteration,
                residual: fb,
            });
        }

        let interpolated = if (fa - fc).abs() > EPS && (fb - fc).abs() > EPS {
            let r = fb / fc;
            let p = fa / fc;
            let q = fa / fb;
            Some(
                b - (q * (q - r) * (b - a) + (1.0 - r) * (b - c) * p)
                    / ((q - 1.0) * (r - 1.0) * (p - 1.0)),
            )
        } else if (fb - fa).abs() > EPS {
            Some(b - fb * (b - a) / (fb - fa))
        } else {
            None
        };

        let m = 0.5 * (a + b);
        let s = match interpolated {
            Some(s) if s > m.min(b) && s < m.max(b) && (s - b).abs() < 0.5 * e.abs() => {
                e = d;
                d = s - b;
                s
            }
            _ => {
                e = b - a;
                d = e;
                m
            }
        };

        c = b;
        fc = fb;

        let fs = f(s);
        if !fs.is_finite() {
            return Err(MathError::NonFinite {
                iteration: iteration + 1,
            });
        }

        if fa * fs < 0.0 {
            b = s;
            fb = fs;
        } else {
            a = s;
            fa = fs;
        }

        if fa.abs() < fb.abs() {
            std::mem::swap(&mut a, &mut b);
            std::mem::swap(&mut fa, &mut fb);
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, fb.abs()))
}
