//! Investment-viability metrics.
//!
//! Given a total cost, an annual monetized saving, a maintenance cost, a
//! lifespan, and a discount rate, [`FinancialMetricsCalculator::compute`]
//! produces simple and discounted payback, NPV, and IRR.
//!
//! Degenerate inputs (no benefit, no cost, a flat NPV curve) never fail:
//! they resolve to `None`, a sentinel payback, or an IRR of zero, and the
//! accompanying status says which.

mod irr;
mod payback;

pub use irr::{IrrOutcome, IrrSolver, IrrStatus, NpvEquation};
pub use payback::{
    DiscountedPayback, PaybackStatus, UnrecoveredPayback, discounted_payback, simple_payback,
};

use serde::{Deserialize, Serialize};

use crate::{
    cashflow::CashFlowProjector,
    config::{ConfigError, EngineConfig},
};

/// Validated inputs to the metrics calculator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FinancialInputs {
    pub total_investment_cost: f64,

    /// Monetized annual energy savings, possibly negative.
    pub annual_energy_savings: f64,
    pub maintenance_cost_annual: f64,
    pub lifespan_years: u32,
    pub discount_rate_percent: f64,
}

impl FinancialInputs {
    /// Savings net of maintenance.
    #[must_use]
    pub fn annual_benefit(&self) -> f64 {
        self.annual_energy_savings - self.maintenance_cost_annual
    }

    /// Returns the discount rate as a ratio.
    #[must_use]
    pub fn discount_rate(&self) -> f64 {
        self.discount_rate_percent / 100.0
    }

    /// The benefit series discounted at the input rate.
    #[must_use]
    pub fn projector(&self) -> CashFlowProjector {
        CashFlowProjector::new(self.annual_benefit(), self.discount_rate(), self.lifespan_years)
    }
}

/// The financial viability of one scenario.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialResult {
    pub total_investment_cost: f64,
    pub annual_energy_savings: f64,
    pub maintenance_cost_annual: f64,
    pub annual_economic_benefit: f64,

    /// Simple payback in years, `None` if the benefit is not positive.
    pub payback_period: Option<f64>,
    pub discounted_payback_period: Option<f64>,
    pub discounted_payback_status: PaybackStatus,
    pub net_present_value: f64,

    /// IRR in percent, `0.0` unless `irr_status` is converged.
    pub internal_rate_of_return: f64,
    pub irr_status: IrrStatus,
}

/// Computes payback, NPV, and IRR.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FinancialMetricsCalculator {
    irr: IrrSolver,
    unrecovered: UnrecoveredPayback,
}

impl FinancialMetricsCalculator {
    #[must_use]
    pub fn new(irr: IrrSolver, unrecovered: UnrecoveredPayback) -> Self {
        Self { irr, unrecovered }
    }

    /// Builds a calculator from the `[irr]` and `[payback]` config sections.
    ///
    /// # Errors
    ///
    /// Returns an error if the IRR solver settings are invalid.
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(
            config.irr.solver()?,
            config.payback.unrecovered,
        ))
    }

    #[must_use]
    pub fn compute(&self, inputs: &FinancialInputs) -> FinancialResult {
        let cost = inputs.total_investment_cost;
        let benefit = inputs.annual_benefit();
        let projector = inputs.projector();

        let discounted = discounted_payback(cost, &projector, self.unrecovered);
        let irr = self.irr.solve(cost, benefit, inputs.lifespan_years);

        FinancialResult {
            total_investment_cost: cost,
            annual_energy_savings: inputs.annual_energy_savings,
            maintenance_cost_annual: inputs.maintenance_cost_annual,
            annual_economic_benefit: benefit,
            payback_period: simple_payback(cost, benefit),
            discounted_payback_period: discounted.period,
            discounted_payback_status: discounted.status,
            net_present_value: projector.present_value() - cost,
            internal_rate_of_return: irr.rate * 100.0,
            irr_status: irr.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn inputs(savings: f64, maintenance: f64) -> FinancialInputs {
        FinancialInputs {
            total_investment_cost: 10_000.0,
            annual_energy_savings: savings,
            maintenance_cost_annual: maintenance,
            lifespan_years: 10,
            discount_rate_percent: 5.0,
        }
    }

    #[test]
    fn level_annuity_metrics() {
        let result = FinancialMetricsCalculator::default().compute(&inputs(2_000.0, 0.0));

        assert_eq!(result.payback_period, Some(5.0));
        assert_relative_eq!(
            result.net_present_value,
            2_000.0 * (1.0 - 1.05_f64.powi(-10)) / 0.05 - 10_000.0,
            max_relative = 1e-12
        );
        assert!(result.irr_status.is_converged());
        assert!(result.internal_rate_of_return > 5.0);

        let discounted = result.discounted_payback_period.unwrap();
        assert!(discounted > 5.0 && discounted <= 10.0);
        assert_eq!(result.discounted_payback_status, PaybackStatus::Recovered);
    }

    #[test]
    fn maintenance_reduces_benefit() {
        let result = FinancialMetricsCalculator::default().compute(&inputs(2_500.0, 500.0));

        assert_eq!(result.annual_economic_benefit, 2_000.0);
        assert_eq!(result.payback_period, Some(5.0));
    }

    #[test]
    fn zero_benefit() {
        let result = FinancialMetricsCalculator::default().compute(&inputs(300.0, 300.0));

        assert_eq!(result.payback_period, None);
        assert_eq!(result.discounted_payback_period, None);
        assert_eq!(result.discounted_payback_status, PaybackStatus::Undefined);
        assert_eq!(result.net_present_value, -10_000.0);
        assert_eq!(result.internal_rate_of_return, 0.0);
        assert_eq!(result.irr_status, IrrStatus::NotAttempted);
    }

    #[test]
    fn unrecovered_policy_is_honored() {
        let weak = inputs(800.0, 0.0);

        let sentinel = FinancialMetricsCalculator::default().compute(&weak);
        assert_eq!(sentinel.discounted_payback_period, Some(11.0));

        let undefined = FinancialMetricsCalculator::new(
            IrrSolver::default(),
            UnrecoveredPayback::Undefined,
        )
        .compute(&weak);
        assert_eq!(undefined.discounted_payback_period, None);
        assert_eq!(undefined.discounted_payback_status, PaybackStatus::NotRecovered);
    }

    #[test]
    fn zero_rate_npv() {
        let result = FinancialMetricsCalculator::default().compute(&FinancialInputs {
            discount_rate_percent: 0.0,
            ..inputs(1_500.0, 0.0)
        });

        assert_eq!(result.net_present_value, 5_000.0);
        assert_relative_eq!(
            result.discounted_payback_period.unwrap(),
            result.payback_period.unwrap(),
            max_relative = 1e-12
        );
    }
}
