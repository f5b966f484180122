//! Photovoltaic systems.
//!
//! Annual production is estimated from the installed peak power and the site
//! irradiance, de-rated by the collector efficiency, the performance ratio,
//! and a tilt penalty for panels mounted away from the optimum angle:
//!
//! ```text
//! E      = P_panel_kW × efficiency × panels × irradiance × PR × factor
//! factor = max(0.90, 1 − |angle − 32°| × 0.005)
//! ```

use serde::{Deserialize, Serialize};

use crate::units::measured;

use super::EnergySavingsResult;

/// Tilt angle (degrees from horizontal) that yields the full production.
pub const OPTIMAL_TILT_DEGREES: f64 = 32.0;

/// Production lost per degree of deviation from the optimal tilt.
pub const TILT_PENALTY_PER_DEGREE: f64 = 0.005;

/// Lower bound of the tilt factor.
pub const MIN_TILT_FACTOR: f64 = 0.90;

/// A grid-connected photovoltaic array.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotovoltaicSystem {
    /// Peak power of one panel in kW.
    pub panel_power_kw: f64,
    pub panel_count: u32,

    /// Collector efficiency as a ratio.
    pub collector_efficiency: f64,

    /// Annual solar irradiance in kWh/m².
    pub solar_irradiance_kwh_per_m2: f64,

    /// System performance ratio.
    pub performance_ratio: f64,

    /// Panel tilt from horizontal, in degrees.
    pub tilt_angle_degrees: f64,
}

impl PhotovoltaicSystem {
    /// Production factor for the configured tilt angle.
    #[must_use]
    pub fn tilt_factor(&self) -> f64 {
        let deviation = (measured(self.tilt_angle_degrees) - OPTIMAL_TILT_DEGREES).abs();
        (1.0 - deviation * TILT_PENALTY_PER_DEGREE).max(MIN_TILT_FACTOR)
    }

    /// Estimated annual production in kWh.
    #[must_use]
    pub fn annual_production_kwh(&self) -> f64 {
        measured(self.panel_power_kw)
            * measured(self.collector_efficiency)
            * f64::from(self.panel_count)
            * measured(self.solar_irradiance_kwh_per_m2)
            * measured(self.performance_ratio)
            * self.tilt_factor()
    }

    /// Annual savings in kWh of grid electricity.
    ///
    /// The array offsets grid consumption, so the new consumption is the
    /// negative of its production.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        EnergySavingsResult::from_consumption(0.0, -self.annual_production_kwh())
    }
}
