//! Yieldline CLI - bond pricing, yield and risk from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Price a bond
//! yieldline price --face 1000 --coupon 0.08 --maturity 5 --yield 0.10
//!
//! # Solve for yield to maturity
//! yieldline ytm --price 950 --face 1000 --coupon 0.08 --maturity 5
//!
//! # Duration, convexity and DV01, semi-annual coupons
//! yieldline risk --coupon 0.08 --maturity 5 --yield 0.10 --frequency 2
//!
//! # Effect of a +100bp shift
//! yieldline shock --coupon 0.08 --maturity 5 --yield 0.10 --shift 0.01
//!
//! # Payment schedule as JSON
//! yieldline cashflows --coupon 0.08 --maturity 5 --format json
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable
    let filter = if cli.verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yieldline=debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("yieldline=warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let settings = Settings::load(cli.config.as_deref())
        .and_then(|settings| settings.with_overrides(cli.overrides()))
        .context("failed to load configuration")?;
    tracing::debug!(?settings, "effective settings");

    match &cli.command {
        Commands::Price(args) => commands::price::execute(args, &settings)?,
        Commands::Ytm(args) => {
            commands::ytm::execute(args, &settings).context("yield solve failed")?;
        }
        Commands::Risk(args) => commands::risk::execute(args, &settings)?,
        Commands::Shock(args) => commands::shock::execute(args, &settings)?,
        Commands::Cashflows(args) => commands::cashflows::execute(args, &settings)?,
        Commands::Config(args) => {
            commands::config::execute(args, &settings, cli.config.as_deref())?;
        }
    }

    Ok(())
}
