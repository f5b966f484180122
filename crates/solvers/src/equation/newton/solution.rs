use retrofit_core::ScalarEvaluation;

/// Indicates how the solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The residual fell below the configured tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The derivative was too small (or non-finite) to take a step.
    VanishingDerivative,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a Newton-Raphson solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Last iterate, which is the root estimate when converged.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Derivative at `x`.
    pub derivative: f64,

    /// Number of Newton steps taken.
    pub iters: usize,
}

impl Solution {
    /// Constructs a solution from the final evaluation.
    pub(super) fn from_eval(eval: ScalarEvaluation, status: Status, iters: usize) -> Self {
        Self {
            status,
            x: eval.x,
            residual: eval.residual,
            derivative: eval.derivative,
            iters,
        }
    }

    /// Returns true if the solver converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
