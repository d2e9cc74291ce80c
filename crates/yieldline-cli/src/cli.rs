//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{CashflowsArgs, ConfigArgs, PriceArgs, RiskArgs, ShockArgs, YtmArgs};
use crate::settings::Overrides;

/// Yieldline - bond pricing, yield and risk from the command line
#[derive(Parser, Debug)]
#[command(name = "yieldline")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file (TOML). Defaults to the user config directory.
    #[arg(long, env = "YIELDLINE_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Output format. Overrides the configuration file.
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Decimal places in table output
    #[arg(long, global = true)]
    pub precision: Option<usize>,

    /// Absolute price tolerance for the yield solver
    #[arg(long, global = true)]
    pub tolerance: Option<f64>,

    /// Iteration cap per yield solver stage
    #[arg(long, global = true)]
    pub max_iterations: Option<u32>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Settings given on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            format: self.format,
            precision: self.precision,
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price a bond at a yield
    Price(PriceArgs),

    /// Solve for yield to maturity from a market price
    Ytm(YtmArgs),

    /// Duration, convexity and DV01 at a yield
    Risk(RiskArgs),

    /// Compare duration and convexity estimates with exact repricing
    Shock(ShockArgs),

    /// List the cash flow schedule
    Cashflows(CashflowsArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Minimal output (just the value)
    Minimal,
}
