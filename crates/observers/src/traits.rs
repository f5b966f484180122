//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Example
//!
//! ```rust
//! use retrofit_core::Observer;
//! use retrofit_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual().abs() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use retrofit_solvers::equation::newton;

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    fn residual(&self) -> f64;
}

/// An event emitted at a numbered iterate.
pub trait HasIteration {
    /// Returns the iteration counter.
    fn iter(&self) -> usize;

    /// Returns the solver variable at this iteration.
    fn x(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for newton::Event {
    fn residual(&self) -> f64 {
        self.eval.residual
    }
}

impl HasIteration for newton::Event {
    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.eval.x
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use retrofit_core::{Observer, ScalarEquation, ScalarEvaluation};
    use std::convert::Infallible;

    struct GoodEnough {
        tolerance: f64,
    }

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.tolerance).then(A::stop_early)
        }
    }

    /// f(x) = x³ − 8
    struct CubeEquals8;

    impl ScalarEquation for CubeEquals8 {
        type Error = Infallible;

        fn evaluate(&self, x: f64) -> Result<ScalarEvaluation, Self::Error> {
            Ok(ScalarEvaluation {
                x,
                residual: x.powi(3) - 8.0,
                derivative: 3.0 * x * x,
            })
        }
    }

    #[test]
    fn generic_observer_stops_newton_early() {
        let config = newton::Config::new(100, 1e-14, 1e-12, [-10.0, 10.0]).unwrap();

        let solution = newton::solve(&CubeEquals8, 3.0, &config, GoodEnough { tolerance: 1e-2 })
            .expect("should stop cleanly");

        assert_eq!(solution.status, newton::Status::StoppedByObserver);
        assert_relative_eq!(solution.x, 2.0, epsilon = 1e-2);
    }
}
