//! Cashflows command implementation.
//!
//! Lists the payment schedule, with present values when a yield is given.

use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;
use yieldline_bonds::terms::per_period_yield;
use yieldline_bonds::BondTerms;

use crate::commands::BondArgs;
use crate::error::CliResult;
use crate::output::{table, Report};
use crate::settings::Settings;

/// Arguments for the cashflows command.
#[derive(Args, Debug)]
pub struct CashflowsArgs {
    #[command(flatten)]
    pub bond: BondArgs,

    /// Annual yield for discounting. Omit to list undiscounted flows.
    #[arg(short, long = "yield")]
    pub yield_rate: Option<f64>,
}

/// One scheduled payment.
#[derive(Debug, Clone, Serialize)]
pub struct CashFlowRow {
    pub period: u32,
    pub time_years: f64,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present_value: Option<f64>,
}

#[derive(Tabled)]
struct DisplayRow {
    #[tabled(rename = "Period")]
    period: u32,
    #[tabled(rename = "Time (y)")]
    time: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "PV")]
    present_value: String,
}

/// Schedule listing result.
#[derive(Debug, Serialize)]
pub struct CashflowsReport {
    pub terms: BondTerms,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annual_yield: Option<f64>,
    pub total_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    pub flows: Vec<CashFlowRow>,
}

impl Report for CashflowsReport {
    fn title(&self) -> &'static str {
        "Cash Flow Schedule"
    }

    fn table(&self, precision: usize) -> String {
        let rows: Vec<DisplayRow> = self
            .flows
            .iter()
            .map(|row| DisplayRow {
                period: row.period,
                time: format!("{:.4}", row.time_years),
                amount: format!("{:.precision$}", row.amount),
                present_value: row
                    .present_value
                    .map_or_else(|| "-".to_string(), |pv| format!("{pv:.precision$}")),
            })
            .collect();
        table(&rows)
    }

    fn minimal(&self, precision: usize) -> String {
        self.flows
            .iter()
            .map(|row| format!("{:.precision$}", row.amount))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Builds the schedule listing.
pub fn run(args: &CashflowsArgs, settings: &Settings) -> CliResult<CashflowsReport> {
    let bond = args.bond.to_bond(settings)?;
    let schedule = bond.cash_flows();
    debug!(terms = ?bond.terms(), flows = schedule.len(), "listing cash flows");

    let freq = schedule.payments_per_year();
    let price = args.yield_rate.map(|y| bond.price(y)).transpose()?;
    let discount_base = args.yield_rate.map(|y| 1.0 + per_period_yield(y, freq));

    let flows = schedule
        .iter()
        .map(|cf| CashFlowRow {
            period: cf.period,
            time_years: cf.time_years(freq),
            amount: cf.amount,
            present_value: discount_base.map(|base| cf.amount / base.powf(f64::from(cf.period))),
        })
        .collect();

    Ok(CashflowsReport {
        terms: *bond.terms(),
        annual_yield: args.yield_rate,
        total_amount: schedule.total_amount(),
        price,
        flows,
    })
}

/// Execute the cashflows command.
pub fn execute(args: &CashflowsArgs, settings: &Settings) -> CliResult<()> {
    crate::output::print_report(&run(args, settings)?, &settings.output)
}
