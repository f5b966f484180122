//! Numerical solvers for retrofit investment analysis.
//!
//! Solvers operate on the problem traits defined in [`retrofit_core`] and
//! report progress through an [`Observer`](retrofit_core::Observer), so callers
//! can log, monitor, or stop an iteration without changing the solver API.

pub mod equation;
