//! Solvers for equation problems: finding roots of `f(x) = 0`.
//!
//! A [`ScalarEquation`] maps a solver variable `x` to a residual and its
//! derivative. Solvers in this module drive that residual toward zero.
//!
//! # Solvers
//!
//! - [`newton`]: Newton-Raphson with a bounded search interval
//!
//! [`ScalarEquation`]: retrofit_core::ScalarEquation

pub mod newton;
