//! Scenario input records.
//!
//! A [`ScenarioInput`] pairs one retrofit [`Measure`] with its cost breakdown
//! and economic parameters. The measure is a tagged union, so the scenario
//! type always agrees with the physical inputs supplied for it:
//!
//! ```json
//! { "type": "boiler_replacement", "heat_demand_kwh": 18000.0, ... }
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    cost::CostBreakdown,
    savings::{
        EnergySavingsResult,
        boiler::BoilerReplacement,
        envelope::{InsulationRetrofit, Season, WindowReplacement},
        fuel_switch::NaturalGasNetwork,
        hot_water::HotWaterUpgrade,
        hvac::AirConditionerReplacement,
        lighting::BulbReplacement,
        photovoltaic::PhotovoltaicSystem,
        reduction::PercentageReduction,
    },
};

/// The kinds of retrofit the engine can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioType {
    AirConditionerReplacement,
    BoilerReplacement,
    ThermalInsulation,
    RoofInsulation,
    WindowReplacement,
    ExteriorBlinds,
    LightingControl,
    BulbReplacement,
    PhotovoltaicSystem,
    NaturalGasNetwork,
    HotWaterUpgrade,
}

impl ScenarioType {
    pub const ALL: [ScenarioType; 11] = [
        Self::AirConditionerReplacement,
        Self::BoilerReplacement,
        Self::ThermalInsulation,
        Self::RoofInsulation,
        Self::WindowReplacement,
        Self::ExteriorBlinds,
        Self::LightingControl,
        Self::BulbReplacement,
        Self::PhotovoltaicSystem,
        Self::NaturalGasNetwork,
        Self::HotWaterUpgrade,
    ];

    /// The energy carrier whose price monetizes this scenario's savings.
    #[must_use]
    pub fn energy_carrier(self) -> EnergyCarrier {
        match self {
            Self::AirConditionerReplacement
            | Self::ExteriorBlinds
            | Self::LightingControl
            | Self::BulbReplacement
            | Self::PhotovoltaicSystem => EnergyCarrier::Electricity,
            Self::BoilerReplacement
            | Self::ThermalInsulation
            | Self::RoofInsulation
            | Self::WindowReplacement
            | Self::NaturalGasNetwork
            | Self::HotWaterUpgrade => EnergyCarrier::HeatingFuel,
        }
    }
}

impl fmt::Display for ScenarioType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::AirConditionerReplacement => "air conditioner replacement",
            Self::BoilerReplacement => "boiler replacement",
            Self::ThermalInsulation => "thermal insulation",
            Self::RoofInsulation => "roof insulation",
            Self::WindowReplacement => "window replacement",
            Self::ExteriorBlinds => "exterior blinds",
            Self::LightingControl => "lighting control",
            Self::BulbReplacement => "bulb replacement",
            Self::PhotovoltaicSystem => "photovoltaic system",
            Self::NaturalGasNetwork => "natural gas network",
            Self::HotWaterUpgrade => "hot water upgrade",
        };
        f.write_str(name)
    }
}

/// The energy carrier a scenario saves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergyCarrier {
    Electricity,
    HeatingFuel,
}

impl fmt::Display for EnergyCarrier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Electricity => f.write_str("electricity"),
            Self::HeatingFuel => f.write_str("heating fuel"),
        }
    }
}

/// The physical description of one retrofit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Measure {
    AirConditionerReplacement(AirConditionerReplacement),
    BoilerReplacement(BoilerReplacement),
    ThermalInsulation(InsulationRetrofit),
    RoofInsulation(InsulationRetrofit),
    WindowReplacement(WindowReplacement),
    ExteriorBlinds(PercentageReduction),
    LightingControl(PercentageReduction),
    BulbReplacement(BulbReplacement),
    PhotovoltaicSystem(PhotovoltaicSystem),
    NaturalGasNetwork(NaturalGasNetwork),
    HotWaterUpgrade(HotWaterUpgrade),
}

impl Measure {
    #[must_use]
    pub fn scenario_type(&self) -> ScenarioType {
        match self {
            Self::AirConditionerReplacement(_) => ScenarioType::AirConditionerReplacement,
            Self::BoilerReplacement(_) => ScenarioType::BoilerReplacement,
            Self::ThermalInsulation(_) => ScenarioType::ThermalInsulation,
            Self::RoofInsulation(_) => ScenarioType::RoofInsulation,
            Self::WindowReplacement(_) => ScenarioType::WindowReplacement,
            Self::ExteriorBlinds(_) => ScenarioType::ExteriorBlinds,
            Self::LightingControl(_) => ScenarioType::LightingControl,
            Self::BulbReplacement(_) => ScenarioType::BulbReplacement,
            Self::PhotovoltaicSystem(_) => ScenarioType::PhotovoltaicSystem,
            Self::NaturalGasNetwork(_) => ScenarioType::NaturalGasNetwork,
            Self::HotWaterUpgrade(_) => ScenarioType::HotWaterUpgrade,
        }
    }

    /// Runs the savings calculator for this measure.
    ///
    /// Envelope measures are evaluated over `seasons`; the others ignore it.
    #[must_use]
    pub fn savings(&self, seasons: &[Season]) -> EnergySavingsResult {
        match self {
            Self::AirConditionerReplacement(m) => m.savings(),
            Self::BoilerReplacement(m) => m.savings(),
            Self::ThermalInsulation(m) | Self::RoofInsulation(m) => m.savings(seasons),
            Self::WindowReplacement(m) => m.savings(seasons),
            Self::ExteriorBlinds(m) | Self::LightingControl(m) => m.savings(),
            Self::BulbReplacement(m) => m.savings(),
            Self::PhotovoltaicSystem(m) => m.savings(),
            Self::NaturalGasNetwork(m) => m.savings(),
            Self::HotWaterUpgrade(m) => m.savings(),
        }
    }
}

/// Economic parameters of a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EconomicParameters {
    /// Price per kWh of the saved carrier; `None` uses the project default.
    #[serde(default)]
    pub energy_price_per_kwh: Option<f64>,

    #[serde(default)]
    pub maintenance_cost_annual: f64,

    /// Economic lifespan in whole years, at least one.
    pub lifespan_years: u32,

    #[serde(default)]
    pub discount_rate_percent: f64,
}

/// Everything needed to evaluate one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioInput {
    pub measure: Measure,

    #[serde(default)]
    pub costs: CostBreakdown,
    pub economics: EconomicParameters,
}

impl ScenarioInput {
    #[must_use]
    pub fn scenario_type(&self) -> ScenarioType {
        self.measure.scenario_type()
    }
}
