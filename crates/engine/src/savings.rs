//! Energy-savings calculators, one per scenario family.
//!
//! Every calculator is a pure function of its input record and returns an
//! [`EnergySavingsResult`]. Missing, zero, negative, or non-finite physical
//! inputs are treated as zero (see [`units::measured`](crate::units::measured));
//! calculators never fail.
//!
//! Savings may be negative: a retrofit can increase consumption, and the
//! financial metrics downstream tolerate that.

pub mod boiler;
pub mod envelope;
pub mod fuel_switch;
pub mod hot_water;
pub mod hvac;
pub mod lighting;
pub mod photovoltaic;
pub mod reduction;

use serde::{Deserialize, Serialize};

/// The unit in which [`EnergySavingsResult::annual_savings`] is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsBasis {
    /// Savings are an energy quantity in kWh and still need pricing.
    Energy,

    /// Savings are already monetized in the project currency.
    Currency,
}

/// Annual consumption before and after a retrofit, and the resulting savings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergySavingsResult {
    /// Baseline annual consumption in kWh.
    pub old_consumption_kwh: f64,

    /// Post-retrofit annual consumption in kWh.
    pub new_consumption_kwh: f64,

    /// Annual savings, in kWh or currency depending on `basis`.
    pub annual_savings: f64,

    pub basis: SavingsBasis,
}

impl EnergySavingsResult {
    /// Builds an energy-basis result with `savings = old − new`.
    #[must_use]
    pub fn from_consumption(old_consumption_kwh: f64, new_consumption_kwh: f64) -> Self {
        Self {
            old_consumption_kwh,
            new_consumption_kwh,
            annual_savings: old_consumption_kwh - new_consumption_kwh,
            basis: SavingsBasis::Energy,
        }
    }

    /// Builds a currency-basis result from already monetized savings.
    #[must_use]
    pub fn monetized(
        old_consumption_kwh: f64,
        new_consumption_kwh: f64,
        annual_savings: f64,
    ) -> Self {
        Self {
            old_consumption_kwh,
            new_consumption_kwh,
            annual_savings,
            basis: SavingsBasis::Currency,
        }
    }

    /// Annual savings in currency at the given energy price.
    ///
    /// Currency-basis savings are returned unchanged.
    #[must_use]
    pub fn monetize(&self, energy_price_per_kwh: f64) -> f64 {
        match self.basis {
            SavingsBasis::Energy => self.annual_savings * energy_price_per_kwh,
            SavingsBasis::Currency => self.annual_savings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn energy_basis_is_priced() {
        let result = EnergySavingsResult::from_consumption(1200.0, 800.0);
        assert_eq!(result.annual_savings, 400.0);
        assert_eq!(result.monetize(0.25), 100.0);
    }

    #[test]
    fn currency_basis_passes_through() {
        let result = EnergySavingsResult::monetized(10_000.0, 9_000.0, 350.0);
        assert_eq!(result.monetize(0.25), 350.0);
    }

    #[test]
    fn negative_savings_stay_negative() {
        let result = EnergySavingsResult::from_consumption(500.0, 650.0);
        assert_eq!(result.annual_savings, -150.0);
        assert_eq!(result.monetize(0.2), -30.0);
    }
}
