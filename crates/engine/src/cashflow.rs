//! The discounted cash-flow series behind NPV and discounted payback.
//!
//! A retrofit yields a constant annual benefit `b` over a horizon of `N`
//! years. Discounted at rate `r`, year `t` contributes
//!
//! ```text
//! dcf(t) = b / (1 + r)^t
//! ```
//!
//! NPV, discounted payback, and the IRR residual all read the series through
//! [`CashFlowProjector`], so they never disagree about the flows.

use serde::{Deserialize, Serialize};

/// Projects a constant annual benefit over a horizon at a discount rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CashFlowProjector {
    annual_benefit: f64,
    rate: f64,
    horizon: u32,
}

/// One year of a projected series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyCashFlow {
    pub year: u32,

    /// Undiscounted benefit for the year.
    pub nominal: f64,

    /// Benefit discounted to year zero.
    pub discounted: f64,

    /// Running sum of `discounted` through this year.
    pub cumulative: f64,
}

impl CashFlowProjector {
    /// Creates a projector.
    ///
    /// `rate` is a ratio (0.05 = 5 %) and `horizon` the number of years.
    #[must_use]
    pub fn new(annual_benefit: f64, rate: f64, horizon: u32) -> Self {
        Self {
            annual_benefit,
            rate,
            horizon,
        }
    }

    #[must_use]
    pub fn annual_benefit(&self) -> f64 {
        self.annual_benefit
    }

    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    #[must_use]
    pub fn horizon(&self) -> u32 {
        self.horizon
    }

    /// Returns `1 / (1 + r)^year`.
    #[must_use]
    pub fn discount_factor(&self, year: u32) -> f64 {
        if self.rate == 0.0 {
            1.0
        } else {
            (1.0 + self.rate).powi(exponent(year)).recip()
        }
    }

    /// Returns the discounted benefit of a single year.
    #[must_use]
    pub fn discounted_cash_flow(&self, year: u32) -> f64 {
        self.annual_benefit * self.discount_factor(year)
    }

    /// Returns the discounted benefit accumulated over years `1..=year`.
    #[must_use]
    pub fn cumulative_through(&self, year: u32) -> f64 {
        (1..=year).map(|t| self.discounted_cash_flow(t)).sum()
    }

    /// Present value of the benefit over the whole horizon.
    ///
    /// An undiscounted series is `b × N` exactly.
    #[must_use]
    pub fn present_value(&self) -> f64 {
        if self.rate == 0.0 {
            self.annual_benefit * f64::from(self.horizon)
        } else {
            self.cumulative_through(self.horizon)
        }
    }

    /// Derivative of [`present_value`](Self::present_value) with respect to the rate.
    ///
    /// ```text
    /// d/dr Σ b / (1 + r)^t = −Σ t · b / (1 + r)^(t + 1)
    /// ```
    #[must_use]
    pub fn present_value_derivative(&self) -> f64 {
        let base = 1.0 + self.rate;
        -(1..=self.horizon)
            .map(|t| f64::from(t) * self.annual_benefit / base.powi(exponent(t).saturating_add(1)))
            .sum::<f64>()
    }

    /// Iterates over the yearly series, year 1 through the horizon.
    pub fn iter(&self) -> impl Iterator<Item = YearlyCashFlow> + '_ {
        (1..=self.horizon).scan(0.0, move |cumulative, year| {
            let discounted = self.discounted_cash_flow(year);
            *cumulative += discounted;
            Some(YearlyCashFlow {
                year,
                nominal: self.annual_benefit,
                discounted,
                cumulative: *cumulative,
            })
        })
    }
}

fn exponent(year: u32) -> i32 {
    i32::try_from(year).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn discount_factors() {
        let projector = CashFlowProjector::new(100.0, 0.1, 3);

        assert_eq!(projector.discount_factor(0), 1.0);
        assert_relative_eq!(projector.discount_factor(1), 1.0 / 1.1, max_relative = 1e-12);
        assert_relative_eq!(projector.discount_factor(2), 1.0 / 1.21, max_relative = 1e-12);
        assert_relative_eq!(projector.discounted_cash_flow(2), 100.0 / 1.21, max_relative = 1e-12);
    }

    #[test]
    fn present_value_matches_annuity_formula() {
        let projector = CashFlowProjector::new(2_000.0, 0.05, 10);
        let annuity = 2_000.0 * (1.0 - 1.05_f64.powi(-10)) / 0.05;
        assert_relative_eq!(projector.present_value(), annuity, max_relative = 1e-12);
    }

    #[test]
    fn zero_rate_is_undiscounted() {
        let projector = CashFlowProjector::new(250.0, 0.0, 8);
        assert_eq!(projector.present_value(), 2_000.0);
        assert_eq!(projector.cumulative_through(3), 750.0);
    }

    #[test]
    fn derivative_matches_finite_difference() {
        let rate = 0.07;
        let h = 1e-6;
        let at = |r| CashFlowProjector::new(1_500.0, r, 12).present_value();

        let numeric = (at(rate + h) - at(rate - h)) / (2.0 * h);
        let analytic = CashFlowProjector::new(1_500.0, rate, 12).present_value_derivative();

        assert_relative_eq!(analytic, numeric, max_relative = 1e-6);
    }

    #[test]
    fn series_accumulates() {
        let projector = CashFlowProjector::new(100.0, 0.05, 4);
        let series: Vec<_> = projector.iter().collect();

        assert_eq!(series.len(), 4);
        assert_eq!(series[0].year, 1);
        assert_eq!(series[3].year, 4);
        assert!(series.iter().all(|flow| flow.nominal == 100.0));
        assert_relative_eq!(
            series[3].cumulative,
            projector.present_value(),
            max_relative = 1e-12
        );
        assert!(series.windows(2).all(|w| w[1].discounted < w[0].discounted));
    }

    #[test]
    fn empty_horizon() {
        let projector = CashFlowProjector::new(100.0, 0.05, 0);
        assert_eq!(projector.iter().count(), 0);
        assert_eq!(projector.present_value(), 0.0);
        assert_eq!(projector.present_value_derivative(), 0.0);
    }
}
