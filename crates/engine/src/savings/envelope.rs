//! Building envelope retrofits: wall/floor insulation, roof insulation, and
//! window replacement.
//!
//! The hourly heat loss through an element is `U × area × ΔT / 1000` kW.
//! Savings are accumulated over the configured seasons, each evaluated at a
//! fixed temperature difference:
//!
//! ```text
//! savings_kWh = Σ_seasons (loss_old − loss_new) × season_hours
//! ```

use serde::{Deserialize, Serialize};
use uom::si::f64::HeatTransfer;

use crate::units::{
    MaterialLayer, SurfaceResistances, heat_loss, measured, to_kw, u_value,
    u_value_from_w_per_m2_k,
};

use super::EnergySavingsResult;

/// A period of the year evaluated at a fixed indoor/outdoor temperature difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Season {
    pub name: String,

    /// Indoor/outdoor temperature difference in kelvin.
    pub delta_t_kelvin: f64,

    /// Hours per year spent in this season.
    pub hours: f64,
}

impl Season {
    pub fn new(name: impl Into<String>, delta_t_kelvin: f64, hours: f64) -> Self {
        Self {
            name: name.into(),
            delta_t_kelvin,
            hours,
        }
    }
}

/// Insulation retrofit of an opaque element (wall, floor, or roof).
///
/// `old_layers` describe the existing assembly and `new_layers` the complete
/// assembly after the works. Each set yields its own U-value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InsulationRetrofit {
    /// Element area in m².
    pub area_m2: f64,
    pub old_layers: Vec<MaterialLayer>,
    pub new_layers: Vec<MaterialLayer>,
    pub surface_resistances: SurfaceResistances,
}

impl InsulationRetrofit {
    /// U-values of the existing and the retrofitted assembly.
    #[must_use]
    pub fn u_values(&self) -> [HeatTransfer; 2] {
        [
            u_value(&self.old_layers, self.surface_resistances),
            u_value(&self.new_layers, self.surface_resistances),
        ]
    }

    /// Annual savings in kWh of space conditioning energy.
    #[must_use]
    pub fn savings(&self, seasons: &[Season]) -> EnergySavingsResult {
        let [old, new] = self.u_values();
        seasonal_savings(old, new, self.area_m2, seasons)
    }
}

/// Replacement of glazing with a known U-value before and after.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowReplacement {
    /// Glazed area in m².
    pub area_m2: f64,
    pub old_u_value: f64,
    pub new_u_value: f64,
}

impl WindowReplacement {
    /// Annual savings in kWh of space conditioning energy.
    #[must_use]
    pub fn savings(&self, seasons: &[Season]) -> EnergySavingsResult {
        seasonal_savings(
            u_value_from_w_per_m2_k(self.old_u_value),
            u_value_from_w_per_m2_k(self.new_u_value),
            self.area_m2,
            seasons,
        )
    }
}

fn seasonal_savings(
    old: HeatTransfer,
    new: HeatTransfer,
    area_m2: f64,
    seasons: &[Season],
) -> EnergySavingsResult {
    let annual_loss_kwh = |u: HeatTransfer| -> f64 {
        seasons
            .iter()
            .map(|season| {
                to_kw(heat_loss(u, area_m2, season.delta_t_kelvin)) * measured(season.hours)
            })
            .sum()
    };

    EnergySavingsResult::from_consumption(annual_loss_kwh(old), annual_loss_kwh(new))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn seasons() -> Vec<Season> {
        vec![
            Season::new("heating", 15.0, 2880.0),
            Season::new("cooling", 8.0, 2160.0),
        ]
    }

    fn brick() -> MaterialLayer {
        MaterialLayer {
            thickness_m: 0.25,
            conductivity_w_per_m_k: 0.77,
        }
    }

    fn mineral_wool() -> MaterialLayer {
        MaterialLayer {
            thickness_m: 0.08,
            conductivity_w_per_m_k: 0.036,
        }
    }

    #[test]
    fn insulation_reduces_losses() {
        let retrofit = InsulationRetrofit {
            area_m2: 120.0,
            old_layers: vec![brick()],
            new_layers: vec![brick(), mineral_wool()],
            surface_resistances: SurfaceResistances::default(),
        };

        let result = retrofit.savings(&seasons());

        let u_old = 1.0 / (0.17 + 0.25 / 0.77);
        let u_new = 1.0 / (0.17 + 0.25 / 0.77 + 0.08 / 0.036);
        let expected = (u_old - u_new) * 120.0 * (15.0 * 2880.0 + 8.0 * 2160.0) / 1000.0;

        assert!(result.annual_savings > 0.0);
        assert_relative_eq!(result.annual_savings, expected, max_relative = 1e-9);
    }

    #[test]
    fn window_replacement() {
        let retrofit = WindowReplacement {
            area_m2: 20.0,
            old_u_value: 5.8,
            new_u_value: 1.4,
        };

        let result = retrofit.savings(&seasons());

        let expected = (5.8 - 1.4) * 20.0 * (15.0 * 2880.0 + 8.0 * 2160.0) / 1000.0;
        assert_relative_eq!(result.annual_savings, expected, max_relative = 1e-9);
    }

    #[test]
    fn no_seasons_means_no_savings() {
        let retrofit = WindowReplacement {
            area_m2: 20.0,
            old_u_value: 5.8,
            new_u_value: 1.4,
        };

        let result = retrofit.savings(&[]);
        assert_eq!(result.annual_savings, 0.0);
    }

    #[test]
    fn missing_area_saves_nothing() {
        let retrofit = InsulationRetrofit {
            old_layers: vec![brick()],
            new_layers: vec![brick(), mineral_wool()],
            ..InsulationRetrofit::default()
        };

        let result = retrofit.savings(&seasons());
        assert_eq!(result.old_consumption_kwh, 0.0);
        assert_eq!(result.annual_savings, 0.0);
    }
}
