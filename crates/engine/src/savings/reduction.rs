//! Percentage reductions of a measured baseline.
//!
//! Lighting controls (occupancy or daylight sensors) and exterior blinds do
//! not replace equipment; they cut a share of an existing consumption. The
//! share is capped at 100 %.

use serde::{Deserialize, Serialize};

use crate::units::measured;

use super::EnergySavingsResult;

/// A baseline consumption reduced by a fixed percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PercentageReduction {
    /// Baseline annual consumption in kWh.
    pub baseline_consumption_kwh: f64,
    pub savings_percent: f64,
}

impl PercentageReduction {
    /// Annual savings in kWh: `baseline × savings_percent / 100`.
    #[must_use]
    pub fn savings(&self) -> EnergySavingsResult {
        let baseline = measured(self.baseline_consumption_kwh);
        let share = measured(self.savings_percent).min(100.0) / 100.0;
        EnergySavingsResult::from_consumption(baseline, baseline * (1.0 - share))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn applies_percentage() {
        let result = PercentageReduction {
            baseline_consumption_kwh: 8_000.0,
            savings_percent: 30.0,
        }
        .savings();

        assert_relative_eq!(result.new_consumption_kwh, 5_600.0, max_relative = 1e-12);
        assert_relative_eq!(result.annual_savings, 2_400.0, max_relative = 1e-12);
    }

    #[test]
    fn share_is_capped_at_full_baseline() {
        let result = PercentageReduction {
            baseline_consumption_kwh: 1_000.0,
            savings_percent: 140.0,
        }
        .savings();

        assert_eq!(result.new_consumption_kwh, 0.0);
        assert_eq!(result.annual_savings, 1_000.0);
    }
}
