//! Unit and physics conversions shared by the savings calculators.
//!
//! Calculators accept plain `f64` fields (that is what the surrounding
//! persistence layer stores) and convert them into `uom` quantities here, so
//! the dimensional bookkeeping happens in one place.

use serde::{Deserialize, Serialize};
use uom::si::{
    area::square_meter,
    energy::{kilowatt_hour, watt_hour},
    f64::{
        Area, Energy, HeatTransfer, Mass, Power, SpecificHeatCapacity, TemperatureInterval, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    mass::kilogram,
    power::{kilowatt, watt},
    specific_heat_capacity::kilojoule_per_kilogram_kelvin,
    temperature_interval::kelvin,
    time::hour,
};

/// Electrical watts per BTU/h of rated thermal capacity.
pub const WATTS_PER_BTU_PER_HOUR: f64 = 0.293;

/// Specific heat of water in kJ/(kg·K).
pub const WATER_SPECIFIC_HEAT: f64 = 4.186;

/// Returns the value of a physical measurement, or zero if it is absent.
///
/// Negative and non-finite measurements are treated as absent. A missing
/// sub-measurement is a valid state for the calculators, not an error.
#[must_use]
pub fn measured(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Converts an efficiency percentage (COP 300 % → 3.0) into a ratio.
///
/// Returns `None` when the efficiency is zero, negative, or non-finite, so
/// callers can drop the term instead of dividing by it.
#[must_use]
pub fn efficiency_ratio(percent: f64) -> Option<f64> {
    let percent = measured(percent);
    (percent > 0.0).then(|| percent / 100.0)
}

/// Converts a rated thermal capacity in BTU/h into watts.
#[must_use]
pub fn btu_per_hour_to_power(btu_per_hour: f64) -> Power {
    Power::new::<watt>(measured(btu_per_hour) * WATTS_PER_BTU_PER_HOUR)
}

/// Energy drawn by a constant power over a number of hours.
#[must_use]
pub fn energy_over_hours(power: Power, hours: f64) -> Energy {
    power * Time::new::<hour>(measured(hours))
}

/// Converts an energy quantity into kilowatt-hours.
#[must_use]
pub fn to_kwh(energy: Energy) -> f64 {
    energy.get::<kilowatt_hour>()
}

/// Converts watt-hours into kilowatt-hours.
#[must_use]
pub fn watt_hours_to_kwh(watt_hours: f64) -> f64 {
    to_kwh(Energy::new::<watt_hour>(watt_hours))
}

/// Annual electricity use of `quantity` identical loads rated at `power_w`.
///
/// ```text
/// kWh = power_W × quantity × hours / 1000
/// ```
#[must_use]
pub fn electrical_consumption_kwh(power_w: f64, quantity: u32, hours_per_year: f64) -> f64 {
    let power = Power::new::<watt>(measured(power_w) * f64::from(quantity));
    to_kwh(energy_over_hours(power, hours_per_year))
}

/// One homogeneous layer of a building envelope assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialLayer {
    /// Layer thickness in metres.
    #[serde(default)]
    pub thickness_m: f64,

    /// Thermal conductivity in W/(m·K).
    #[serde(default)]
    pub conductivity_w_per_m_k: f64,
}

impl MaterialLayer {
    /// Thermal resistance of the layer in m²K/W.
    ///
    /// Returns `None` for a layer with zero or missing thickness or
    /// conductivity, which is skipped in the assembly.
    #[must_use]
    pub fn resistance(&self) -> Option<f64> {
        let thickness = measured(self.thickness_m);
        let conductivity = measured(self.conductivity_w_per_m_k);
        (thickness > 0.0 && conductivity > 0.0).then(|| thickness / conductivity)
    }
}

/// Interior and exterior surface film resistances in m²K/W.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceResistances {
    pub internal: f64,
    pub external: f64,
}

impl Default for SurfaceResistances {
    fn default() -> Self {
        Self {
            internal: 0.13,
            external: 0.04,
        }
    }
}

/// Thermal transmittance of a layered assembly.
///
/// ```text
/// U = 1 / (R_internal + R_external + Σ thickness_i / conductivity_i)
/// ```
///
/// Returns zero when the total resistance is not positive.
#[must_use]
pub fn u_value(layers: &[MaterialLayer], surfaces: SurfaceResistances) -> HeatTransfer {
    let total: f64 = measured(surfaces.internal)
        + measured(surfaces.external)
        + layers.iter().filter_map(MaterialLayer::resistance).sum::<f64>();

    let u = if total > 0.0 { 1.0 / total } else { 0.0 };
    HeatTransfer::new::<watt_per_square_meter_kelvin>(u)
}

/// Builds a U-value from a W/(m²K) figure.
#[must_use]
pub fn u_value_from_w_per_m2_k(value: f64) -> HeatTransfer {
    HeatTransfer::new::<watt_per_square_meter_kelvin>(measured(value))
}

/// Steady heat loss through an envelope element: `U·A·ΔT`.
#[must_use]
pub fn heat_loss(u: HeatTransfer, area_m2: f64, delta_t_kelvin: f64) -> Power {
    u * Area::new::<square_meter>(measured(area_m2))
        * TemperatureInterval::new::<kelvin>(measured(delta_t_kelvin))
}

/// Converts a power into kilowatts.
#[must_use]
pub fn to_kw(power: Power) -> f64 {
    power.get::<kilowatt>()
}

/// Energy needed to heat a volume of water by `temperature_rise_kelvin`.
///
/// Water is taken at 1 kg per litre.
#[must_use]
pub fn water_heating_energy(litres: f64, temperature_rise_kelvin: f64) -> Energy {
    Mass::new::<kilogram>(measured(litres))
        * SpecificHeatCapacity::new::<kilojoule_per_kilogram_kelvin>(WATER_SPECIFIC_HEAT)
        * TemperatureInterval::new::<kelvin>(measured(temperature_rise_kelvin))
}
