//! Yield-to-maturity command implementation.

use clap::Args;
use serde::Serialize;
use tracing::{debug, info};
use yieldline_bonds::BondTerms;

use crate::commands::BondArgs;
use crate::error::CliResult;
use crate::output::{format_percent, table, terms_rows, KeyValue, Report};
use crate::settings::Settings;

/// Arguments for the ytm command.
#[derive(Args, Debug)]
pub struct YtmArgs {
    /// Observed market price
    #[arg(short, long)]
    pub price: f64,

    #[command(flatten)]
    pub bond: BondArgs,
}

/// Yield calculation result.
#[derive(Debug, Serialize)]
pub struct YtmReport {
    pub terms: BondTerms,
    pub market_price: f64,
    pub yield_to_maturity: f64,
    pub iterations: u32,
    pub residual: f64,
}

impl Report for YtmReport {
    fn title(&self) -> &'static str {
        "Yield to Maturity"
    }

    fn table(&self, precision: usize) -> String {
        let mut rows = terms_rows(&self.terms);
        rows.push(KeyValue::number("Market Price", self.market_price, precision));
        rows.push(KeyValue::percent(
            "Yield to Maturity",
            self.yield_to_maturity,
            precision.saturating_sub(2),
        ));
        rows.push(KeyValue::new("Iterations", self.iterations.to_string()));
        rows.push(KeyValue::new("Residual", format!("{:.3e}", self.residual)));
        table(&rows)
    }

    fn minimal(&self, precision: usize) -> String {
        format!("{:.precision$}", self.yield_to_maturity)
    }
}

/// Solves for the yield with the configured solver.
pub fn run(args: &YtmArgs, settings: &Settings) -> CliResult<YtmReport> {
    let bond = args.bond.to_bond(settings)?;
    let solver = settings.yield_solver();
    debug!(
        terms = ?bond.terms(),
        market_price = args.price,
        tolerance = solver.config().tolerance,
        max_iterations = solver.config().max_iterations,
        "solving yield"
    );

    let result = bond.solve_yield(args.price, &solver)?;
    info!(
        yield_value = result.yield_value,
        iterations = result.iterations,
        "yield solved"
    );

    Ok(YtmReport {
        terms: *bond.terms(),
        market_price: args.price,
        yield_to_maturity: result.yield_value,
        iterations: result.iterations,
        residual: result.residual,
    })
}

/// Execute the ytm command.
pub fn execute(args: &YtmArgs, settings: &Settings) -> CliResult<()> {
    crate::output::print_report(&run(args, settings)?, &settings.output)
}
