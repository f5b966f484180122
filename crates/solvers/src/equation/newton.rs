//! Newton-Raphson root finding for single-variable equations.
//!
//! # Algorithm
//!
//! Starting from an initial guess `x₀`, each iteration evaluates the residual
//! `f(xₖ)` and its derivative `f'(xₖ)` and takes the step
//!
//! ```text
//! xₖ₊₁ = clamp(xₖ − f(xₖ) / f'(xₖ), lower, upper)
//! ```
//!
//! The clamp keeps iterates inside the configured bounds, which prevents
//! overflow for equations (like discounted cash-flow sums) that blow up near
//! a pole.
//!
//! # Termination
//!
//! The solver finishes with a [`Status`] rather than an error whenever the
//! equation itself could be evaluated:
//!
//! - [`Status::Converged`] when `|f(xₖ)| < residual_tol`
//! - [`Status::VanishingDerivative`] when `|f'(xₖ)| < derivative_tol`
//! - [`Status::MaxIters`] when the iteration cap is reached
//! - [`Status::StoppedByObserver`] when the observer returns [`Action::StopEarly`]
//!
//! Callers decide how to treat a non-converged status.
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per evaluation, including the evaluation of
//! the initial guess (iteration 0).

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use solution::{Solution, Status};

use retrofit_core::{Observer, ScalarEquation, ScalarEvaluation};

/// Finds a root of the equation using Newton-Raphson iteration.
///
/// The initial guess is clamped into the configured bounds before the first
/// evaluation. See the [module docs](self) for termination rules.
///
/// # Errors
///
/// Returns an error if the initial guess is not finite, if the equation fails
/// to evaluate, or if it yields a non-finite residual.
pub fn solve<E, Obs>(
    equation: &E,
    initial_guess: f64,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    E: ScalarEquation,
    Obs: Observer<Event, Action>,
{
    if !initial_guess.is_finite() {
        return Err(Error::NonFiniteGuess { x: initial_guess });
    }

    let mut x = config.clamp(initial_guess);
    let mut iter = 0;

    loop {
        let eval = evaluate(equation, x)?;

        if let Some(Action::StopEarly) = observer.observe(&Event { iter, eval }) {
            return Ok(Solution::from_eval(eval, Status::StoppedByObserver, iter));
        }

        if eval.residual.abs() < config.residual_tol() {
            return Ok(Solution::from_eval(eval, Status::Converged, iter));
        }

        if iter >= config.max_iters() {
            return Ok(Solution::from_eval(eval, Status::MaxIters, iter));
        }

        if !eval.derivative.is_finite() || eval.derivative.abs() < config.derivative_tol() {
            return Ok(Solution::from_eval(eval, Status::VanishingDerivative, iter));
        }

        x = config.clamp(x - eval.residual / eval.derivative);
        iter += 1;
    }
}

/// Runs Newton-Raphson without observation.
///
/// # Errors
///
/// Returns an error if the initial guess is not finite, if the equation fails
/// to evaluate, or if it yields a non-finite residual.
pub fn solve_unobserved<E: ScalarEquation>(
    equation: &E,
    initial_guess: f64,
    config: &Config,
) -> Result<Solution, Error> {
    solve(equation, initial_guess, config, ())
}

/// Evaluates the equation and rejects non-finite residuals.
fn evaluate<E: ScalarEquation>(equation: &E, x: f64) -> Result<ScalarEvaluation, Error> {
    let eval = equation.evaluate(x).map_err(Error::equation)?;
    if !eval.residual.is_finite() {
        return Err(Error::NonFiniteResidual {
            x,
            residual: eval.residual,
        });
    }
    Ok(eval)
}
