//! Cash flow schedule generation.
//!
//! A bond with `N = maturity_years * payments_per_year` periods pays
//! `coupon_rate * face_value / payments_per_year` at the end of each period
//! and the face value on top of the last coupon.

use serde::{Deserialize, Serialize};

use crate::error::{BondError, BondResult};
use crate::terms::BondTerms;

/// A single payment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Period index, starting at 1.
    pub period: u32,
    /// Amount paid at the end of the period.
    pub amount: f64,
}

impl CashFlow {
    /// Time of the payment in years.
    pub fn time_years(&self, payments_per_year: u32) -> f64 {
        f64::from(self.period) / f64::from(payments_per_year)
    }
}

/// Ordered payments for periods `1..=N`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CashFlowSchedule {
    flows: Vec<CashFlow>,
    payments_per_year: u32,
}

impl CashFlowSchedule {
    /// Generates the schedule implied by `terms`.
    ///
    /// Terms are validated on construction, so this cannot fail.
    pub fn from_terms(terms: &BondTerms) -> Self {
        let n = terms.num_periods();
        let coupon = terms.coupon_per_period();

        let flows = (1..=n)
            .map(|period| {
                let amount = if period == n {
                    coupon + terms.face_value()
                } else {
                    coupon
                };
                CashFlow { period, amount }
            })
            .collect();

        Self {
            flows,
            payments_per_year: terms.payments_per_year(),
        }
    }

    /// Builds a schedule from per-period amounts, the first paid at period 1.
    pub fn from_amounts(amounts: &[f64], payments_per_year: u32) -> BondResult<Self> {
        if payments_per_year == 0 {
            return Err(BondError::invalid_terms(
                "payments per year must be positive",
            ));
        }
        if amounts.is_empty() {
            return Err(BondError::invalid_terms("schedule has no cash flows"));
        }
        if let Some(bad) = amounts.iter().find(|a| !a.is_finite()) {
            return Err(BondError::invalid_terms(format!(
                "cash flow amount {bad} is not finite"
            )));
        }
        let count = u32::try_from(amounts.len())
            .map_err(|_| BondError::invalid_terms("too many cash flows"))?;

        let flows = (1..=count)
            .zip(amounts)
            .map(|(period, &amount)| CashFlow { period, amount })
            .collect();

        Ok(Self {
            flows,
            payments_per_year,
        })
    }

    /// The payments, ordered by period.
    pub fn flows(&self) -> &[CashFlow] {
        &self.flows
    }

    /// Iterates over the payments.
    pub fn iter(&self) -> std::slice::Iter<'_, CashFlow> {
        self.flows.iter()
    }

    /// Number of payments.
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// True when there are no payments.
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Payments per year.
    pub fn payments_per_year(&self) -> u32 {
        self.payments_per_year
    }

    /// Undiscounted sum of all payments.
    pub fn total_amount(&self) -> f64 {
        self.flows.iter().map(|cf| cf.amount).sum()
    }

    /// Payment times in years.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        self.flows
            .iter()
            .map(move |cf| cf.time_years(self.payments_per_year))
    }
}

impl<'a> IntoIterator for &'a CashFlowSchedule {
    type Item = &'a CashFlow;
    type IntoIter = std::slice::Iter<'a, CashFlow>;

    fn into_iter(self) -> Self::IntoIter {
        self.flows.iter()
    }
}

/// Generates the cash flow schedule for `terms`.
pub fn generate_cash_flows(terms: &BondTerms) -> CashFlowSchedule {
    CashFlowSchedule::from_terms(terms)
}
