//! Present value of a cash flow schedule.
//!
//! ```text
//! P = sum_{t=1..N} CF_t / (1 + r)^t
//! ```
//!
//! where `r` is the per-period yield. At `r = 0` the price is the plain sum
//! of the flows.

use crate::cashflows::CashFlowSchedule;
use crate::error::{BondError, BondResult};
use crate::terms::per_period_yield;

/// Rejects negative and non-finite yields.
pub(crate) fn check_yield(yield_rate: f64) -> BondResult<()> {
    if !yield_rate.is_finite() || yield_rate < 0.0 {
        return Err(BondError::InvalidYield { value: yield_rate });
    }
    Ok(())
}

/// Prices a schedule at a per-period yield.
///
/// Fails with [`BondError::InvalidYield`] for a negative or non-finite yield.
///
/// # Example
///
/// ```rust
/// use yieldline_bonds::cashflows::generate_cash_flows;
/// use yieldline_bonds::pricing::price;
/// use yieldline_bonds::terms::BondTerms;
///
/// let terms = BondTerms::annual(1000.0, 0.08, 5).unwrap();
/// let schedule = generate_cash_flows(&terms);
///
/// let p = price(&schedule, 0.10).unwrap();
/// assert!((p - 924.18).abs() < 0.01);
/// ```
pub fn price(schedule: &CashFlowSchedule, per_period_yield: f64) -> BondResult<f64> {
    check_yield(per_period_yield)?;

    if per_period_yield == 0.0 {
        return Ok(schedule.total_amount());
    }

    Ok(present_value(schedule, per_period_yield))
}

/// Prices a schedule at an annual nominal yield.
pub fn price_at_annual_yield(schedule: &CashFlowSchedule, annual_yield: f64) -> BondResult<f64> {
    check_yield(annual_yield)?;
    price(
        schedule,
        per_period_yield(annual_yield, schedule.payments_per_year()),
    )
}

/// Slope of the price with respect to the annual yield, at a per-period yield.
///
/// ```text
/// dP/dy = -sum (t / f) * CF_t / (1 + r)^(t + 1)
/// ```
pub fn price_derivative(schedule: &CashFlowSchedule, per_period_yield: f64) -> BondResult<f64> {
    check_yield(per_period_yield)?;
    Ok(present_value_slope(schedule, per_period_yield))
}

/// Discounted sum without validation. Requires `r > -1`.
pub(crate) fn present_value(schedule: &CashFlowSchedule, r: f64) -> f64 {
    let v = 1.0 / (1.0 + r);
    let mut discount = 1.0;
    let mut pv = 0.0;
    for cf in schedule {
        discount *= v;
        // 0 * inf is NaN once the discount factor overflows.
        if cf.amount != 0.0 {
            pv += cf.amount * discount;
        }
    }
    pv
}

/// Annual-yield slope of [`present_value`] without validation.
pub(crate) fn present_value_slope(schedule: &CashFlowSchedule, r: f64) -> f64 {
    let freq = f64::from(schedule.payments_per_year());
    let v = 1.0 / (1.0 + r);
    let mut discount = v;
    let mut slope = 0.0;
    for cf in schedule {
        discount *= v;
        if cf.amount != 0.0 {
            slope -= f64::from(cf.period) / freq * cf.amount * discount;
        }
    }
    slope
}
