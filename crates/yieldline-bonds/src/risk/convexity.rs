//! Analytical convexity.

use crate::cashflows::CashFlowSchedule;
use crate::error::BondResult;
use crate::pricing::check_yield;

use super::normalizing_price;

/// Convexity in years squared at a per-period yield.
///
/// ```text
/// C = sum CF_t * t * (t + 1) / (1 + r)^(t + 2) / (P * f^2)
/// ```
pub fn convexity(schedule: &CashFlowSchedule, per_period_yield: f64) -> BondResult<f64> {
    check_yield(per_period_yield)?;
    let price = normalizing_price(schedule, per_period_yield, "convexity")?;

    let freq = f64::from(schedule.payments_per_year());
    let v = 1.0 / (1.0 + per_period_yield);
    // Starts at v^2 for the extra two periods of discounting.
    let mut discount = v * v;
    let mut weighted = 0.0;
    for cf in schedule {
        discount *= v;
        if cf.amount != 0.0 {
            let t = f64::from(cf.period);
            weighted += cf.amount * t * (t + 1.0) * discount;
        }
    }

    Ok(weighted / (price * freq * freq))
}

/// Second-order price change for a yield shift.
///
/// ```text
/// dP ~ -D_mod * P * dy + 0.5 * C * P * dy^2
/// ```
pub fn price_change_with_convexity(
    modified_duration: f64,
    convexity: f64,
    price: f64,
    yield_change: f64,
) -> f64 {
    -modified_duration * price * yield_change
        + 0.5 * convexity * price * yield_change * yield_change
}
