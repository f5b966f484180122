//! Numeric invariants checked once, at construction.
//!
//! Engine inputs arrive as plain `f64` and `u32` fields. Wrapping a value in
//! [`Constrained<T, C>`] records that it passed the check for marker `C`, so
//! code that receives the wrapper does not test the same value again.
//!
//! Markers:
//!
//! - [`Finite`]: not infinite and not NaN
//! - [`NonNegative`]: zero or greater (quantities, prices, rates)
//! - [`StrictlyPositive`]: greater than zero (lifespans)
//!
//! Checks compose with [`Constrained::refine`], for example a finite value
//! that must also be non-negative:
//!
//! ```
//! use retrofit_core::constraint::{Constrained, Finite, NonNegative};
//!
//! let price: Constrained<f64, NonNegative> = Finite::new(0.18).unwrap().refine().unwrap();
//! assert_eq!(price.into_inner(), 0.18);
//! ```
//!
//! New markers are zero-sized types implementing [`Constraint<T>`].

mod finite;
mod non_negative;
mod strictly_positive;

use std::{iter::Sum, marker::PhantomData, ops::Add};

use num_traits::Zero;
use thiserror::Error;

pub use finite::Finite;
pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;

/// A numeric invariant enforced by [`Constrained::new`].
pub trait Constraint<T> {
    /// Checks that the value satisfies the invariant.
    ///
    /// # Errors
    ///
    /// Returns the [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// The reason a value failed a [`Constraint`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value must be finite")]
    NotFinite,
}

pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A value known to satisfy constraint `C`.
///
/// ```
/// use retrofit_core::constraint::{Constrained, StrictlyPositive};
///
/// let years = Constrained::<u32, StrictlyPositive>::new(20).unwrap();
/// assert_eq!(years.into_inner(), 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` if it satisfies `C`.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `C`.
    pub fn new(value: T) -> ConstraintResult<Self> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Checks the wrapped value against a further constraint `D`.
    ///
    /// # Errors
    ///
    /// Returns the violation reported by `D`.
    pub fn refine<D: Constraint<T>>(self) -> ConstraintResult<Constrained<T, D>> {
        Constrained::new(self.value)
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Totals values whose constraint survives addition, such as cost lines.
impl<T, C> Sum for Constrained<T, C>
where
    C: Constraint<T>,
    Constrained<T, C>: Add<Output = Self> + Zero,
{
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |total, next| total + next)
    }
}
