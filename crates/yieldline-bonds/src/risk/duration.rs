//! Macaulay and modified duration.
//!
//! ## Formulas
//!
//! ```text
//! D_mac = sum (t/f) * CF_t / (1 + r)^t / P
//! D_mod = D_mac / (1 + r)
//! ```
//!
//! where `r` is the per-period yield and `f` the payments per year.

use crate::cashflows::CashFlowSchedule;
use crate::error::BondResult;
use crate::pricing::check_yield;

use super::normalizing_price;

/// Macaulay duration in years at a per-period yield.
///
/// The price used as normalizer is recomputed at `per_period_yield`.
pub fn macaulay_duration(schedule: &CashFlowSchedule, per_period_yield: f64) -> BondResult<f64> {
    check_yield(per_period_yield)?;
    let price = normalizing_price(schedule, per_period_yield, "Macaulay duration")?;

    let freq = f64::from(schedule.payments_per_year());
    let v = 1.0 / (1.0 + per_period_yield);
    let mut discount = 1.0;
    let mut weighted = 0.0;
    for cf in schedule {
        discount *= v;
        if cf.amount != 0.0 {
            weighted += f64::from(cf.period) / freq * cf.amount * discount;
        }
    }

    Ok(weighted / price)
}

/// Modified duration at a per-period yield.
pub fn modified_duration(schedule: &CashFlowSchedule, per_period_yield: f64) -> BondResult<f64> {
    let mac = macaulay_duration(schedule, per_period_yield)?;
    Ok(modified_from_macaulay(mac, per_period_yield))
}

/// Converts Macaulay duration to modified duration.
pub fn modified_from_macaulay(macaulay: f64, per_period_yield: f64) -> f64 {
    macaulay / (1.0 + per_period_yield)
}

/// First-order price change for a yield shift.
///
/// ```text
/// dP ~ -D_mod * P * dy
/// ```
pub fn price_change_from_duration(modified_duration: f64, price: f64, yield_change: f64) -> f64 {
    -modified_duration * price * yield_change
}

/// Dollar value of one basis point.
pub fn dv01(modified_duration: f64, price: f64) -> f64 {
    modified_duration * price * 0.0001
}
