//! # Yieldline Math
//!
//! Numerical utilities for the yieldline bond analytics library.
//!
//! This crate provides bounded root-finders over scalar real functions:
//!
//! - **Newton-Raphson**: quadratic convergence when a derivative is available
//! - **Bisection**: sign-only bracketing, tolerant of infinite endpoint values
//! - **Brent**: superlinear bracketing method
//! - **Hybrid**: monitored Newton with a Brent fallback
//!
//! Every solver stops after [`solvers::SolverConfig::max_iterations`]; none of
//! them loops unbounded.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, brent, find_bracket, hybrid, hybrid_numerical, newton_raphson,
        newton_raphson_numerical, BisectionSolver, BrentSolver, HybridSolver, NewtonSolver,
        Solver, SolverConfig, SolverResult,
    };
}

pub use error::{MathError, MathResult};
