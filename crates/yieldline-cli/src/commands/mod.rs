//! CLI command implementations.

pub mod cashflows;
pub mod config;
pub mod price;
pub mod risk;
pub mod shock;
pub mod ytm;

// Re-export submodules for convenience
pub use cashflows::CashflowsArgs;
pub use config::ConfigArgs;
pub use price::PriceArgs;
pub use risk::RiskArgs;
pub use shock::ShockArgs;
pub use ytm::YtmArgs;

use clap::Args;
use yieldline_bonds::Bond;

use crate::error::CliResult;
use crate::settings::Settings;

/// Bond description shared by every valuation command.
#[derive(Args, Debug, Clone, Copy)]
pub struct BondArgs {
    /// Face value
    #[arg(long, default_value = "1000")]
    pub face: f64,

    /// Annual coupon rate as a decimal (0.08 for 8%)
    #[arg(short, long)]
    pub coupon: f64,

    /// Years to maturity
    #[arg(short, long)]
    pub maturity: u32,

    /// Payments per year: 1=Annual, 2=SemiAnnual, 4=Quarterly, 12=Monthly.
    /// Defaults to the configured frequency.
    #[arg(long)]
    pub frequency: Option<u32>,
}

impl BondArgs {
    /// Builds the bond, taking the frequency from settings when omitted.
    pub fn to_bond(&self, settings: &Settings) -> CliResult<Bond> {
        let frequency = self.frequency.unwrap_or(settings.bond.frequency);
        Ok(Bond::new(self.face, self.coupon, self.maturity)?.with_frequency(frequency)?)
    }
}
