//! Shock command implementation.
//!
//! Reprices a bond under a parallel yield shift and compares the exact change
//! with the duration and duration-plus-convexity estimates.

use clap::Args;
use serde::Serialize;
use tracing::debug;
use yieldline_bonds::BondTerms;

use crate::commands::BondArgs;
use crate::error::CliResult;
use crate::output::{format_percent, table, terms_rows, KeyValue, Report};
use crate::settings::Settings;

/// Arguments for the shock command.
#[derive(Args, Debug)]
pub struct ShockArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Annual yield as a decimal
    #[arg(short, long = "yield")]
    pub yield_rate: f64,

    /// Yield shift as a decimal (0.01 for +100bp)
    #[arg(short, long, allow_negative_numbers = true)]
    pub shift: f64,
}

/// Shock result.
#[derive(Debug, Serialize)]
pub struct ShockReport {
    pub terms: BondTerms,
    pub annual_yield: f64,
    pub shift: f64,
    pub base_price: f64,
    pub shifted_price: f64,
    pub actual_change: f64,
    pub duration_estimate: f64,
    pub convexity_estimate: f64,
}

impl Report for ShockReport {
    fn title(&self) -> &'static str {
        "Yield Shock"
    }

    fn table(&self, precision: usize) -> String {
        let mut rows = terms_rows(&self.terms);
        rows.extend([
            KeyValue::new("Yield", format_percent(self.annual_yield, 4)),
            KeyValue::new("Shift", format!("{:+.2} bps", self.shift * 10_000.0)),
            KeyValue::number("Base Price", self.base_price, precision),
            KeyValue::number("Shifted Price", self.shifted_price, precision),
            KeyValue::number("Actual Change", self.actual_change, precision),
            KeyValue::number("Duration Estimate", self.duration_estimate, precision),
            KeyValue::number("Duration + Convexity", self.convexity_estimate, precision),
        ]);
        table(&rows)
    }

    fn minimal(&self, precision: usize) -> String {
        format!("{:.precision$}", self.actual_change)
    }
}

/// Computes the shock report.
pub fn run(args: &ShockArgs, settings: &Settings) -> CliResult<ShockReport> {
    let bond = args.bond.to_bond(settings)?;
    debug!(
        terms = ?bond.terms(),
        annual_yield = args.yield_rate,
        shift = args.shift,
        "applying yield shock"
    );

    let shock = bond.estimate_price_change(args.yield_rate, args.shift)?;

    Ok(ShockReport {
        terms: *bond.terms(),
        annual_yield: args.yield_rate,
        shift: args.shift,
        base_price: shock.base_price,
        shifted_price: shock.shifted_price,
        actual_change: shock.actual_change(),
        duration_estimate: shock.duration_estimate,
        convexity_estimate: shock.convexity_estimate,
    })
}

/// Execute the shock command.
pub fn execute(args: &ShockArgs, settings: &Settings) -> CliResult<()> {
    crate::output::print_report(&run(args, settings)?, &settings.output)
}
