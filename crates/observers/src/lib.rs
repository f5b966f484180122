//! Reusable observers for retrofit solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across solvers in the workspace.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`HasIteration`], [`CanStopEarly`])
//! - [`TraceObserver`]: emits one `tracing` event per solver iteration
//!
//! [`Observer`]: retrofit_core::Observer
//! [`HasResidual`]: traits::HasResidual
//! [`HasIteration`]: traits::HasIteration
//! [`CanStopEarly`]: traits::CanStopEarly

mod trace;
pub mod traits;

pub use trace::TraceObserver;
