//! Bulb replacement.

use serde::{Deserialize, Serialize};

use crate::units::electrical_consumption_kwh;

use super::EnergySavingsResult;

/// A group of identical lamps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingLoad {
    /// Rated power of one lamp in watts.
    pub power_w: f64,
    pub quantity: u32,
    pub hours_per_year: f64,
}

impl LightingLoad {
    /// Annual consumption: `power_W × quantity × hours / 1000`.
    #[must_use]
    pub fn consumption_kwh(&self) -> f64 {
        electrical_consumption_kwh(self.power_w, self.quantity, self.hours_per_year)
    }
}

/// Replacement of existing lamps with more efficient ones.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulbReplacement {
    pub old: LightingLoad,
    pub new: LightingLoad,
}

impl BulbReplacement {
    /// Annual savings in kWh of electricity.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        EnergySavingsResult::from_consumption(
            self.old.consumption_kwh(),
            self.new.consumption_kwh(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn led_retrofit() {
        let retrofit = BulbReplacement {
            old: LightingLoad {
                power_w: 58.0,
                quantity: 120,
                hours_per_year: 3000.0,
            },
            new: LightingLoad {
                power_w: 22.0,
                quantity: 120,
                hours_per_year: 3000.0,
            },
        };

        let result = retrofit.savings();

        assert_relative_eq!(result.old_consumption_kwh, 20_880.0, max_relative = 1e-12);
        assert_relative_eq!(result.new_consumption_kwh, 7_920.0, max_relative = 1e-12);
        assert_relative_eq!(result.annual_savings, 12_960.0, max_relative = 1e-12);
    }

    #[test]
    fn more_lamps_can_increase_consumption() {
        let retrofit = BulbReplacement {
            old: LightingLoad {
                power_w: 40.0,
                quantity: 10,
                hours_per_year: 1000.0,
            },
            new: LightingLoad {
                power_w: 15.0,
                quantity: 40,
                hours_per_year: 1000.0,
            },
        };

        assert!(retrofit.savings().annual_savings < 0.0);
    }
}
