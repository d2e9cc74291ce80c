//! # Yieldline Bonds
//!
//! Valuation and interest-rate sensitivity of plain fixed-coupon bonds.
//!
//! This crate provides:
//!
//! - **Terms**: validated face value, coupon rate, maturity and frequency
//! - **Cash Flows**: per-period coupon schedule with face value at maturity
//! - **Pricing**: present value at a yield, and its analytical slope
//! - **Yield**: yield-to-maturity from a market price
//! - **Risk**: Macaulay and modified duration, convexity, DV01
//!
//! ## Example
//!
//! ```rust
//! use yieldline_bonds::prelude::*;
//!
//! let bond = Bond::new(1000.0, 0.08, 5).unwrap();
//!
//! let ytm = bond.yield_to_maturity(950.0).unwrap();
//! let metrics = bond.sensitivity(ytm).unwrap();
//!
//! assert!(ytm > 0.08);
//! assert!(metrics.modified_duration < metrics.macaulay_duration);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod bond;
pub mod cashflows;
pub mod error;
pub mod functions;
pub mod pricing;
pub mod risk;
pub mod terms;
pub mod yield_solver;

/// Prelude module for convenient imports.
pub mod prelude {
    // Facade
    pub use crate::bond::Bond;

    // Cash flows
    pub use crate::cashflows::{generate_cash_flows, CashFlow, CashFlowSchedule};

    // Errors
    pub use crate::error::{BondError, BondResult};

    // Pricing
    pub use crate::pricing::{price, price_at_annual_yield, price_derivative};

    // Risk
    pub use crate::risk::{PriceShock, SensitivityMetrics};

    // Terms
    pub use crate::terms::{BondTerms, ANNUAL, MONTHLY, QUARTERLY, SEMI_ANNUAL};

    // Yield
    pub use crate::yield_solver::{YieldResult, YieldSolver};
}

pub use bond::Bond;
pub use error::{BondError, BondResult};
pub use terms::BondTerms;
