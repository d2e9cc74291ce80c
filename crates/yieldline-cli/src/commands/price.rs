//! Price command implementation.
//!
//! Prices a bond at an annual yield.

use clap::Args;
use serde::Serialize;
use tracing::debug;
use yieldline_bonds::BondTerms;

use crate::commands::BondArgs;
use crate::error::CliResult;
use crate::output::{format_percent, table, terms_rows, KeyValue, Report};
use crate::settings::Settings;

/// Arguments for the price command.
#[derive(Args, Debug)]
pub struct PriceArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Annual yield as a decimal (0.10 for 10%)
    #[arg(short, long = "yield")]
    pub yield_rate: f64,
}

/// Price calculation result.
#[derive(Debug, Serialize)]
pub struct PriceReport {
    pub terms: BondTerms,
    pub annual_yield: f64,
    pub price: f64,
}

impl Report for PriceReport {
    fn title(&self) -> &'static str {
        "Bond Price"
    }

    fn table(&self, precision: usize) -> String {
        let mut rows = terms_rows(&self.terms);
        rows.push(KeyValue::new("Yield", format_percent(self.annual_yield, 4)));
        rows.push(KeyValue::number("Price", self.price, precision));
        table(&rows)
    }

    fn minimal(&self, precision: usize) -> String {
        format!("{:.precision$}", self.price)
    }
}

/// Computes the price report.
pub fn run(args: &PriceArgs, settings: &Settings) -> CliResult<PriceReport> {
    let bond = args.bond.to_bond(settings)?;
    debug!(terms = ?bond.terms(), annual_yield = args.yield_rate, "pricing bond");

    Ok(PriceReport {
        terms: *bond.terms(),
        annual_yield: args.yield_rate,
        price: bond.price(args.yield_rate)?,
    })
}

/// Execute the price command.
pub fn execute(args: &PriceArgs, settings: &Settings) -> CliResult<()> {
    crate::output::print_report(&run(args, settings)?, &settings.output)
}
