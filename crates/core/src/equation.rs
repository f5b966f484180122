/// The value and slope of a [`ScalarEquation`] at a given `x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarEvaluation {
    pub x: f64,
    pub residual: f64,
    pub derivative: f64,
}

/// Defines a differentiable single-variable equation `f(x) = 0`.
///
/// Gradient-based solvers call [`evaluate`](Self::evaluate) once per iteration
/// and need both the residual and its derivative at the same point, so the two
/// are computed together. This lets implementations share intermediate terms
/// such as discount factors.
pub trait ScalarEquation {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the residual `f(x)` and its derivative `f'(x)`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the equation cannot be evaluated at `x`.
    fn evaluate(&self, x: f64) -> Result<ScalarEvaluation, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    /// f(x) = x² - 2
    struct SquareMinusTwo;

    impl ScalarEquation for SquareMinusTwo {
        type Error = Infallible;

        fn evaluate(&self, x: f64) -> Result<ScalarEvaluation, Self::Error> {
            Ok(ScalarEvaluation {
                x,
                residual: x * x - 2.0,
                derivative: 2.0 * x,
            })
        }
    }

    #[test]
    fn evaluation_reports_residual_and_slope() {
        let eval = SquareMinusTwo.evaluate(3.0).unwrap();
        assert_eq!(eval.x, 3.0);
        assert_eq!(eval.residual, 7.0);
        assert_eq!(eval.derivative, 6.0);
    }
}
