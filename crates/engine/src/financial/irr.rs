use std::convert::Infallible;

use retrofit_core::{ScalarEquation, ScalarEvaluation};
use retrofit_observers::TraceObserver;
use retrofit_solvers::equation::newton;
use serde::{Deserialize, Serialize};

use crate::cashflow::CashFlowProjector;

/// NPV of an investment as a function of the discount rate.
///
/// The root of this equation is the internal rate of return.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NpvEquation {
    pub cost: f64,
    pub annual_benefit: f64,
    pub horizon: u32,
}

impl ScalarEquation for NpvEquation {
    type Error = Infallible;

    fn evaluate(&self, rate: f64) -> Result<ScalarEvaluation, Self::Error> {
        let projector = CashFlowProjector::new(self.annual_benefit, rate, self.horizon);
        Ok(ScalarEvaluation {
            x: rate,
            residual: projector.present_value() - self.cost,
            derivative: projector.present_value_derivative(),
        })
    }
}

/// How the internal rate of return was resolved.
///
/// Every status other than `Converged` comes with a reported IRR of zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IrrStatus {
    Converged { iters: usize },

    /// The cost or the benefit is not positive, so no root was sought.
    NotAttempted,

    /// The NPV curve was too flat to take a Newton step.
    VanishingDerivative,

    IterationLimit,

    /// The solver stopped on an error or an observer decision.
    Failed,
}

impl IrrStatus {
    #[must_use]
    pub fn is_converged(&self) -> bool {
        matches!(self, Self::Converged { .. })
    }
}

/// Internal rate of return as a ratio, together with its status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrOutcome {
    pub rate: f64,
    pub status: IrrStatus,
}

impl IrrOutcome {
    fn fallback(status: IrrStatus) -> Self {
        Self { rate: 0.0, status }
    }
}

/// Newton-Raphson IRR search with a fixed initial guess.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IrrSolver {
    config: newton::Config,
    initial_guess: f64,
}

impl Default for IrrSolver {
    fn default() -> Self {
        Self::new(newton::Config::default(), 0.10)
    }
}

impl IrrSolver {
    #[must_use]
    pub fn new(config: newton::Config, initial_guess: f64) -> Self {
        Self {
            config,
            initial_guess,
        }
    }

    #[must_use]
    pub fn config(&self) -> &newton::Config {
        &self.config
    }

    #[must_use]
    pub fn initial_guess(&self) -> f64 {
        self.initial_guess
    }

    /// Finds the rate at which the NPV of the investment is zero.
    ///
    /// The search is only attempted when both the cost and the annual benefit
    /// are positive. Iterations are traced under the `irr` solver name.
    #[must_use]
    pub fn solve(&self, cost: f64, annual_benefit: f64, horizon: u32) -> IrrOutcome {
        if !(cost > 0.0 && annual_benefit > 0.0) {
            return IrrOutcome::fallback(IrrStatus::NotAttempted);
        }

        let equation = NpvEquation {
            cost,
            annual_benefit,
            horizon,
        };

        let solution = match newton::solve(
            &equation,
            self.initial_guess,
            &self.config,
            TraceObserver::new("irr"),
        ) {
            Ok(solution) => solution,
            Err(error) => {
                tracing::debug!(%error, "irr solver failed");
                return IrrOutcome::fallback(IrrStatus::Failed);
            }
        };

        match solution.status {
            newton::Status::Converged => IrrOutcome {
                rate: solution.x,
                status: IrrStatus::Converged {
                    iters: solution.iters,
                },
            },
            newton::Status::MaxIters => IrrOutcome::fallback(IrrStatus::IterationLimit),
            newton::Status::VanishingDerivative => {
                IrrOutcome::fallback(IrrStatus::VanishingDerivative)
            }
            newton::Status::StoppedByObserver => IrrOutcome::fallback(IrrStatus::Failed),
        }
    }
}
