//! Risk command implementation.
//!
//! Calculates duration, convexity and DV01 at a yield.

use clap::Args;
use serde::Serialize;
use tracing::debug;
use yieldline_bonds::BondTerms;

use crate::commands::BondArgs;
use crate::error::CliResult;
use crate::output::{format_percent, table, terms_rows, KeyValue, Report};
use crate::settings::Settings;

/// Arguments for the risk command.
#[derive(Args, Debug)]
pub struct RiskArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Annual yield as a decimal
    #[arg(short, long = "yield")]
    pub yield_rate: f64,
}

/// Risk metrics result.
#[derive(Debug, Serialize)]
pub struct RiskReport {
    pub terms: BondTerms,
    pub annual_yield: f64,
    pub price: f64,
    pub macaulay_duration: f64,
    pub modified_duration: f64,
    pub convexity: f64,
    pub dv01: f64,
}

impl Report for RiskReport {
    fn title(&self) -> &'static str {
        "Risk Metrics"
    }

    fn table(&self, precision: usize) -> String {
        let mut rows = terms_rows(&self.terms);
        rows.extend([
            KeyValue::new("Yield", format_percent(self.annual_yield, 4)),
            KeyValue::number("Price", self.price, precision),
            KeyValue::number("Macaulay Duration", self.macaulay_duration, precision),
            KeyValue::number("Modified Duration", self.modified_duration, precision),
            KeyValue::number("Convexity", self.convexity, precision),
            KeyValue::number("DV01", self.dv01, precision),
        ]);
        table(&rows)
    }

    fn minimal(&self, precision: usize) -> String {
        format!("{:.precision$}", self.modified_duration)
    }
}

/// Computes the risk report.
pub fn run(args: &RiskArgs, settings: &Settings) -> CliResult<RiskReport> {
    let bond = args.bond.to_bond(settings)?;
    debug!(terms = ?bond.terms(), annual_yield = args.yield_rate, "computing risk");

    let metrics = bond.sensitivity(args.yield_rate)?;

    Ok(RiskReport {
        terms: *bond.terms(),
        annual_yield: args.yield_rate,
        price: bond.price(args.yield_rate)?,
        macaulay_duration: metrics.macaulay_duration,
        modified_duration: metrics.modified_duration,
        convexity: metrics.convexity,
        dv01: bond.dv01(args.yield_rate)?,
    })
}

/// Execute the risk command.
pub fn execute(args: &RiskArgs, settings: &Settings) -> CliResult<()> {
    crate::output::print_report(&run(args, settings)?, &settings.output)
}
