//! Connection to the natural-gas network (fuel switch).
//!
//! Switching fuel changes both the efficiency and the price of every kWh of
//! fuel, so the savings are computed directly in currency.

use serde::{Deserialize, Serialize};

use crate::units::measured;

use super::{EnergySavingsResult, boiler::fuel_for};

/// Replacement of an oil (or other) heating system by a natural-gas one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NaturalGasNetwork {
    /// Useful heat delivered to the building per year, in kWh.
    pub heat_demand_kwh: f64,
    pub old_efficiency_percent: f64,
    pub old_fuel_price_per_kwh: f64,
    pub gas_efficiency_percent: f64,
    pub gas_price_per_kwh: f64,
}

impl NaturalGasNetwork {
    /// Annual savings in currency.
    ///
    /// Consumption fields report kWh of fuel for each system.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        let demand = measured(self.heat_demand_kwh);
        let old_fuel = fuel_for(demand, self.old_efficiency_percent);
        let new_fuel = fuel_for(demand, self.gas_efficiency_percent);

        let old_cost = old_fuel * measured(self.old_fuel_price_per_kwh);
        let new_cost = new_fuel * measured(self.gas_price_per_kwh);

        EnergySavingsResult::monetized(old_fuel, new_fuel, old_cost - new_cost)
    }
}
