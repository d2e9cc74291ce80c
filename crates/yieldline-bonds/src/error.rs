//! Error types for bond valuation.

use thiserror::Error;
use yieldline_math::MathError;

/// A specialized Result type for bond operations.
pub type BondResult<T> = Result<T, BondError>;

/// Errors raised while valuing a bond.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BondError {
    /// Bond terms violate an invariant (non-positive maturity or frequency,
    /// non-positive face value, negative coupon).
    #[error("Invalid bond terms: {reason}")]
    InvalidTerms {
        /// Description of what's invalid.
        reason: String,
    },

    /// Yield supplied for pricing is negative or not finite.
    #[error("Invalid yield: {value} (yields must be finite and non-negative)")]
    InvalidYield {
        /// The rejected yield.
        value: f64,
    },

    /// Market price supplied to the yield solver is non-positive or not finite.
    #[error("Invalid market price: {value} (must be positive and finite)")]
    InvalidMarketPrice {
        /// The rejected price.
        value: f64,
    },

    /// The yield solver exhausted its iteration cap.
    #[error("Yield calculation failed to converge after {iterations} iterations: {reason}")]
    NoConvergence {
        /// Number of iterations attempted.
        iterations: u32,
        /// Why the last stage stopped.
        reason: String,
    },

    /// The yield solver converged to a negative or non-finite yield.
    #[error("Yield to maturity out of range: {value}")]
    YtmOutOfRange {
        /// The rejected root.
        value: f64,
    },

    /// A sensitivity measure would divide by a zero price.
    #[error("Division by zero: {reason}")]
    DivisionByZero {
        /// What was being normalized.
        reason: String,
    },
}

impl BondError {
    /// Creates an invalid terms error.
    #[must_use]
    pub fn invalid_terms(reason: impl Into<String>) -> Self {
        Self::InvalidTerms {
            reason: reason.into(),
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(reason: impl Into<String>) -> Self {
        Self::DivisionByZero {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for BondError {
    fn from(err: MathError) -> Self {
        let iterations = match &err {
            MathError::ConvergenceFailed { iterations, .. } => *iterations,
            MathError::NonFinite { iteration } => *iteration,
            _ => 0,
        };
        Self::NoConvergence {
            iterations,
            reason: err.to_string(),
        }
    }
}
