//! Domestic hot-water upgrade.
//!
//! The daily hot-water demand is `litres × 4.186 kJ/(kg·K) × ΔT`. The old
//! heater covers it alone; the new installation may take a solar share
//! before its own efficiency applies.

use serde::{Deserialize, Serialize};

use crate::units::{efficiency_ratio, measured, to_kwh, water_heating_energy};

use super::EnergySavingsResult;

fn default_days_per_year() -> f64 {
    365.0
}

/// Upgrade of a hot-water heater, optionally with solar pre-heating.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HotWaterUpgrade {
    #[serde(default)]
    pub daily_volume_litres: f64,

    /// Temperature rise from mains to delivery, in kelvin.
    #[serde(default)]
    pub temperature_rise_kelvin: f64,

    #[serde(default = "default_days_per_year")]
    pub days_per_year: f64,

    #[serde(default)]
    pub old_efficiency_percent: f64,

    #[serde(default)]
    pub new_efficiency_percent: f64,

    /// Share of the demand covered by solar collectors after the upgrade.
    #[serde(default)]
    pub solar_fraction_percent: f64,
}

impl Default for HotWaterUpgrade {
    fn default() -> Self {
        Self {
            daily_volume_litres: 0.0,
            temperature_rise_kelvin: 0.0,
            days_per_year: default_days_per_year(),
            old_efficiency_percent: 0.0,
            new_efficiency_percent: 0.0,
            solar_fraction_percent: 0.0,
        }
    }
}

impl HotWaterUpgrade {
    /// Useful heat delivered as hot water per year, in kWh.
    #[must_use]
    pub fn annual_demand_kwh(&self) -> f64 {
        let daily = water_heating_energy(self.daily_volume_litres, self.temperature_rise_kelvin);
        to_kwh(daily) * measured(self.days_per_year)
    }

    /// Annual savings in kWh of heater energy.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        let demand = self.annual_demand_kwh();
        let solar_share = measured(self.solar_fraction_percent).min(100.0) / 100.0;

        let old = efficiency_ratio(self.old_efficiency_percent).map_or(0.0, |eff| demand / eff);
        let new = efficiency_ratio(self.new_efficiency_percent)
            .map_or(0.0, |eff| demand * (1.0 - solar_share) / eff);

        EnergySavingsResult::from_consumption(old, new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn household() -> HotWaterUpgrade {
        HotWaterUpgrade {
            daily_volume_litres: 200.0,
            temperature_rise_kelvin: 45.0,
            old_efficiency_percent: 80.0,
            new_efficiency_percent: 95.0,
            solar_fraction_percent: 60.0,
            ..HotWaterUpgrade::default()
        }
    }

    #[test]
    fn annual_demand() {
        let expected = 200.0 * 4.186 * 45.0 / 3600.0 * 365.0;
        assert_relative_eq!(household().annual_demand_kwh(), expected, max_relative = 1e-12);
    }

    #[test]
    fn solar_share_reduces_new_consumption() {
        let upgrade = household();
        let demand = upgrade.annual_demand_kwh();

        let result = upgrade.savings();

        assert_relative_eq!(result.old_consumption_kwh, demand / 0.8, max_relative = 1e-12);
        assert_relative_eq!(
            result.new_consumption_kwh,
            demand * 0.4 / 0.95,
            max_relative = 1e-12
        );
        assert!(result.annual_savings > 0.0);
    }

    #[test]
    fn missing_days_default_to_full_year() {
        let upgrade: HotWaterUpgrade = serde_json::from_str(
            r#"{ "daily_volume_litres": 100.0, "temperature_rise_kelvin": 40.0 }"#,
        )
        .unwrap();
        assert_eq!(upgrade.days_per_year, 365.0);
    }
}
