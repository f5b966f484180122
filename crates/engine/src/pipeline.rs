//! Scenario evaluation.
//!
//! [`ScenarioEvaluationPipeline::evaluate`] runs one scenario end to end:
//!
//! 1. validate the cost lines and economic parameters, aggregating costs
//! 2. compute the energy savings for the measure
//! 3. resolve the energy price (own value, else the project default)
//! 4. compute the financial metrics
//!
//! The pipeline holds only configuration and can be shared across threads.

use retrofit_core::constraint::StrictlyPositive;
use serde::{Deserialize, Serialize};

use crate::{
    config::{ConfigError, EngineConfig},
    cost::{CostSummary, Markup},
    error::{InputError, finite_non_negative},
    financial::{FinancialInputs, FinancialMetricsCalculator, FinancialResult, IrrStatus},
    savings::{EnergySavingsResult, SavingsBasis, envelope::Season},
    scenario::{EnergyCarrier, ScenarioInput, ScenarioType},
};

/// Supplies the project-level energy price used when a scenario has none.
pub trait PriceDefaults {
    /// Returns the default price per kWh for the carrier, if one is known.
    fn price_per_kwh(&self, carrier: EnergyCarrier) -> Option<f64>;
}

/// Default prices per carrier, as configured on a project.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectPrices {
    pub electricity_per_kwh: Option<f64>,
    pub heating_fuel_per_kwh: Option<f64>,
}

impl PriceDefaults for ProjectPrices {
    fn price_per_kwh(&self, carrier: EnergyCarrier) -> Option<f64> {
        match carrier {
            EnergyCarrier::Electricity => self.electricity_per_kwh,
            EnergyCarrier::HeatingFuel => self.heating_fuel_per_kwh,
        }
    }
}

/// A single price for every carrier.
impl PriceDefaults for f64 {
    fn price_per_kwh(&self, _carrier: EnergyCarrier) -> Option<f64> {
        Some(*self)
    }
}

/// No project defaults.
impl PriceDefaults for () {
    fn price_per_kwh(&self, _carrier: EnergyCarrier) -> Option<f64> {
        None
    }
}

impl<T: PriceDefaults + ?Sized> PriceDefaults for &T {
    fn price_per_kwh(&self, carrier: EnergyCarrier) -> Option<f64> {
        (**self).price_per_kwh(carrier)
    }
}

/// The outcome of evaluating one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub scenario_type: ScenarioType,

    /// The price that monetized the savings, `None` for currency-basis savings
    /// evaluated without any price.
    pub energy_price_per_kwh: Option<f64>,
    pub savings: EnergySavingsResult,
    pub costs: CostSummary,
    pub financial: FinancialResult,
}

/// Evaluates scenarios under a fixed [`EngineConfig`].
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioEvaluationPipeline {
    markup: Markup,
    seasons: Vec<Season>,
    metrics: FinancialMetricsCalculator,
}

impl ScenarioEvaluationPipeline {
    /// Creates a pipeline from a validated config.
    ///
    /// # Errors
    ///
    /// Returns an error if the config fails [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let metrics = FinancialMetricsCalculator::from_config(&config)?;
        Ok(Self {
            markup: config.markup,
            seasons: config.envelope.seasons,
            metrics,
        })
    }

    /// Evaluates one scenario.
    ///
    /// # Errors
    ///
    /// Returns an [`InputError`] if an economic parameter or cost line is
    /// invalid, or if the savings need pricing and no price is available.
    pub fn evaluate(
        &self,
        input: &ScenarioInput,
        prices: &impl PriceDefaults,
    ) -> Result<Evaluation, InputError> {
        let scenario_type = input.scenario_type();
        let economics = &input.economics;

        let costs = input.costs.aggregate(&self.markup)?;
        let maintenance = finite_non_negative(economics.maintenance_cost_annual)
            .map_err(InputError::field("maintenance_cost_annual"))?;
        let lifespan = StrictlyPositive::new(economics.lifespan_years)
            .map_err(InputError::field("lifespan_years"))?;
        let discount_rate = finite_non_negative(economics.discount_rate_percent)
            .map_err(InputError::field("discount_rate_percent"))?;
        if let Some(price) = economics.energy_price_per_kwh {
            finite_non_negative(price).map_err(InputError::field("energy_price_per_kwh"))?;
        }

        let savings = input.measure.savings(&self.seasons);

        let carrier = scenario_type.energy_carrier();
        let price = economics
            .energy_price_per_kwh
            .or_else(|| prices.price_per_kwh(carrier));

        let annual_energy_savings = match (savings.basis, price) {
            (SavingsBasis::Currency, _) => savings.annual_savings,
            (SavingsBasis::Energy, Some(price)) => {
                let price = finite_non_negative(price)
                    .map_err(InputError::field("energy_price_per_kwh"))?;
                savings.monetize(price.into_inner())
            }
            (SavingsBasis::Energy, None) => {
                return Err(InputError::MissingEnergyPrice {
                    scenario: scenario_type,
                    carrier,
                });
            }
        };

        let financial = self.metrics.compute(&FinancialInputs {
            total_investment_cost: costs.total,
            annual_energy_savings,
            maintenance_cost_annual: maintenance.into_inner(),
            lifespan_years: lifespan.into_inner(),
            discount_rate_percent: discount_rate.into_inner(),
        });

        if !matches!(
            financial.irr_status,
            IrrStatus::Converged { .. } | IrrStatus::NotAttempted
        ) {
            tracing::warn!(
                scenario = %scenario_type,
                status = ?financial.irr_status,
                "internal rate of return not found, reporting 0"
            );
        }

        tracing::debug!(
            scenario = %scenario_type,
            savings = savings.annual_savings,
            total_cost = costs.total,
            npv = financial.net_present_value,
            "scenario evaluated"
        );

        Ok(Evaluation {
            scenario_type,
            energy_price_per_kwh: price,
            savings,
            costs,
            financial,
        })
    }
}
