//! Boiler replacement.

use serde::{Deserialize, Serialize};

use crate::units::{efficiency_ratio, measured};

use super::EnergySavingsResult;

/// Replacement of a heating boiler serving a known annual heat demand.
///
/// Fuel consumption is the delivered heat divided by the seasonal efficiency
/// of each boiler. A boiler with no usable efficiency contributes no fuel use.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoilerReplacement {
    /// Useful heat delivered to the building per year, in kWh.
    pub heat_demand_kwh: f64,
    pub old_efficiency_percent: f64,
    pub new_efficiency_percent: f64,
}

impl BoilerReplacement {
    /// Annual savings in kWh of fuel.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        let demand = measured(self.heat_demand_kwh);
        EnergySavingsResult::from_consumption(
            fuel_for(demand, self.old_efficiency_percent),
            fuel_for(demand, self.new_efficiency_percent),
        )
    }
}

/// Fuel energy needed to deliver `heat_kwh` at the given efficiency.
pub(super) fn fuel_for(heat_kwh: f64, efficiency_percent: f64) -> f64 {
    efficiency_ratio(efficiency_percent).map_or(0.0, |ratio| heat_kwh / ratio)
}
