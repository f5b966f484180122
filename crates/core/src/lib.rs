//! Core traits and types for retrofit investment analysis.
//!
//! This crate defines the shared abstractions that solvers, observers, and
//! the evaluation engine build on:
//!
//! - [`constraint`]: numeric invariants checked once at construction time
//! - [`ScalarEquation`]: a differentiable single-variable equation whose root
//!   a solver searches for
//! - [`Observer`]: receives solver events and optionally returns control actions

pub mod constraint;
mod equation;
mod observer;

pub use equation::{ScalarEquation, ScalarEvaluation};
pub use observer::Observer;
