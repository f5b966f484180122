use retrofit_core::constraint::{Constrained, ConstraintError, Finite, NonNegative};
use thiserror::Error;

use crate::scenario::{EnergyCarrier, ScenarioType};

/// Errors raised when a scenario input cannot be evaluated.
///
/// Validation runs before any savings or metric is computed, so an error
/// means no partial result exists.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum InputError {
    #[error("invalid {field}")]
    InvalidField {
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("invalid {field} on cost line {index} ({description:?})")]
    InvalidCostLine {
        index: usize,
        description: String,
        field: &'static str,
        #[source]
        source: ConstraintError,
    },

    #[error("no {carrier} price available for {scenario}")]
    MissingEnergyPrice {
        scenario: ScenarioType,
        carrier: EnergyCarrier,
    },
}

impl InputError {
    pub(crate) fn field(field: &'static str) -> impl FnOnce(ConstraintError) -> Self {
        move |source| Self::InvalidField { field, source }
    }
}

/// Checks that a monetary or rate input is finite and not negative.
pub(crate) fn finite_non_negative(
    value: f64,
) -> Result<Constrained<f64, NonNegative>, ConstraintError> {
    Finite::new(value)?.refine()
}
