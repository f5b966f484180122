use retrofit_core::Observer;

use crate::traits::{HasIteration, HasResidual};

/// An observer that logs every solver iteration at `TRACE` level.
///
/// The observer never steers the solver. Attach a `tracing` subscriber with
/// the `retrofit_observers` target enabled to see the iterations.
#[derive(Debug, Clone, Copy)]
pub struct TraceObserver {
    solver: &'static str,
}

impl TraceObserver {
    /// Creates an observer that tags its events with the solver name.
    #[must_use]
    pub fn new(solver: &'static str) -> Self {
        Self { solver }
    }
}

impl<E, A> Observer<E, A> for TraceObserver
where
    E: HasIteration + HasResidual,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        tracing::trace!(
            solver = self.solver,
            iter = event.iter(),
            x = event.x(),
            residual = event.residual(),
            "solver iteration"
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use retrofit_core::{ScalarEquation, ScalarEvaluation};
    use retrofit_solvers::equation::newton;
    use std::convert::Infallible;

    struct Shifted;

    impl ScalarEquation for Shifted {
        type Error = Infallible;

        fn evaluate(&self, x: f64) -> Result<ScalarEvaluation, Self::Error> {
            Ok(ScalarEvaluation {
                x,
                residual: x - 0.25,
                derivative: 1.0,
            })
        }
    }

    #[test]
    fn tracing_does_not_change_the_solution() {
        let config = newton::Config::default();

        let traced = newton::solve(&Shifted, 0.1, &config, TraceObserver::new("newton"))
            .expect("should solve");
        let plain = newton::solve_unobserved(&Shifted, 0.1, &config).expect("should solve");

        assert_eq!(traced, plain);
        assert_eq!(traced.status, newton::Status::Converged);
    }
}
