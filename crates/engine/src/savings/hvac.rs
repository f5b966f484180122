//! Air-conditioner (heat pump) replacement.
//!
//! Each unit's electrical draw is derived from its rated thermal capacity and
//! its heating (COP) and cooling (EER) efficiencies:
//!
//! ```text
//! watts       = btu × 0.293
//! heating_kWh = (watts / (COP/100)) × heating_hours × quantity / 1000
//! cooling_kWh = (watts / (EER/100)) × cooling_hours × quantity / 1000
//! ```
//!
//! A COP or EER of zero drops the corresponding term.

use serde::{Deserialize, Serialize};
use uom::si::f64::Power;

use crate::units::{btu_per_hour_to_power, efficiency_ratio, energy_over_hours, to_kwh};

use super::EnergySavingsResult;

/// One group of identical air-conditioning units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AirConditionerUnit {
    /// Rated thermal capacity in BTU/h.
    pub btu_per_hour: f64,

    /// Heating coefficient of performance, as a percentage.
    pub cop_percent: f64,

    /// Cooling energy efficiency ratio, as a percentage.
    pub eer_percent: f64,

    pub heating_hours: f64,
    pub cooling_hours: f64,
    pub quantity: u32,
}

impl Default for AirConditionerUnit {
    fn default() -> Self {
        Self {
            btu_per_hour: 0.0,
            cop_percent: 0.0,
            eer_percent: 0.0,
            heating_hours: 0.0,
            cooling_hours: 0.0,
            quantity: 1,
        }
    }
}

/// Annual electricity use of an [`AirConditionerUnit`] group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirConditionerConsumption {
    pub heating_kwh: f64,
    pub cooling_kwh: f64,
}

impl AirConditionerConsumption {
    #[must_use]
    pub fn total_kwh(&self) -> f64 {
        self.heating_kwh + self.cooling_kwh
    }
}

impl AirConditionerUnit {
    /// Computes annual heating and cooling electricity use.
    #[must_use]
    pub fn consumption(&self) -> AirConditionerConsumption {
        let thermal = btu_per_hour_to_power(self.btu_per_hour);
        let mode_kwh = |efficiency_percent: f64, hours: f64| {
            efficiency_ratio(efficiency_percent).map_or(0.0, |ratio| {
                let electrical: Power = thermal / ratio * f64::from(self.quantity);
                to_kwh(energy_over_hours(electrical, hours))
            })
        };

        AirConditionerConsumption {
            heating_kwh: mode_kwh(self.cop_percent, self.heating_hours),
            cooling_kwh: mode_kwh(self.eer_percent, self.cooling_hours),
        }
    }
}

/// Replacement of an existing air-conditioning installation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AirConditionerReplacement {
    pub old: AirConditionerUnit,
    pub new: AirConditionerUnit,
}

impl AirConditionerReplacement {
    /// Annual savings in kWh of electricity.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        EnergySavingsResult::from_consumption(
            self.old.consumption().total_kwh(),
            self.new.consumption().total_kwh(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn unit(cop_percent: f64, eer_percent: f64) -> AirConditionerUnit {
        AirConditionerUnit {
            btu_per_hour: 9000.0,
            cop_percent,
            eer_percent,
            heating_hours: 1500.0,
            cooling_hours: 1200.0,
            quantity: 2,
        }
    }

    #[test]
    fn heating_and_cooling_terms() {
        let consumption = unit(300.0, 280.0).consumption();

        // 2637 W / 3.0 × 1500 h × 2 / 1000
        assert_relative_eq!(consumption.heating_kwh, 2637.0, max_relative = 1e-12);
        // 2637 W / 2.8 × 1200 h × 2 / 1000
        assert_relative_eq!(
            consumption.cooling_kwh,
            2637.0 / 2.8 * 1200.0 * 2.0 / 1000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn better_unit_saves_energy() {
        let retrofit = AirConditionerReplacement {
            old: unit(300.0, 280.0),
            new: unit(380.0, 350.0),
        };

        let result = retrofit.savings();

        assert!(result.old_consumption_kwh > result.new_consumption_kwh);
        let watts = 9000.0 * 0.293;
        let total = |cop: f64, eer: f64| {
            (watts / cop * 1500.0 * 2.0 + watts / eer * 1200.0 * 2.0) / 1000.0
        };
        assert_relative_eq!(
            result.annual_savings,
            total(3.0, 2.8) - total(3.8, 3.5),
            max_relative = 1e-9
        );
    }

    #[test]
    fn zero_efficiency_drops_the_term() {
        let consumption = unit(0.0, 280.0).consumption();
        assert_eq!(consumption.heating_kwh, 0.0);
        assert!(consumption.cooling_kwh > 0.0);
    }

    #[test]
    fn empty_unit_consumes_nothing() {
        let consumption = AirConditionerUnit::default().consumption();
        assert_eq!(consumption.total_kwh(), 0.0);
    }
}
