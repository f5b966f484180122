use retrofit_core::ScalarEvaluation;

/// Iteration event emitted by the Newton-Raphson solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// Iteration counter (0 for the initial guess).
    pub iter: usize,

    /// Evaluation at the current iterate.
    pub eval: ScalarEvaluation,
}
