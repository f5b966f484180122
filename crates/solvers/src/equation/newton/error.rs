use std::error::Error as StdError;

use thiserror::Error;

/// Errors that can occur during Newton-Raphson solving.
#[derive(Debug, Error)]
pub enum Error {
    #[error("initial guess is not finite: {x}")]
    NonFiniteGuess { x: f64 },

    #[error("equation evaluation failed")]
    Equation(#[source] Box<dyn StdError + Send + Sync>),

    #[error("non-finite residual {residual} at x = {x}")]
    NonFiniteResidual { x: f64, residual: f64 },
}

impl Error {
    pub(crate) fn equation<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Equation(Box::new(err))
    }
}
