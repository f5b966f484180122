use std::{
    cmp::Ordering,
    marker::PhantomData,
    ops::{Add, Mul},
};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Requires `T: PartialOrd + Zero`, which covers the primitive numeric types.
/// `NaN` is rejected because it cannot be ordered against zero.
///
/// # Examples
///
/// ```
/// use retrofit_core::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let a = Constrained::<_, NonNegative>::new(3.5).unwrap();
/// assert_eq!(a.into_inner(), 3.5);
///
/// // Associated constructor:
/// let b = NonNegative::new(0.0).unwrap();
/// assert_eq!(b.as_ref(), &0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-1.0).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs `Constrained<T, NonNegative>` if the value is zero or greater.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::Negative`] if the value is below zero.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative> {
            value: T::zero(),
            _marker: PhantomData,
        }
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// The sum of two non-negative values is non-negative for the primitive
/// numeric types. The invariant is checked in debug builds.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

/// Multiplies two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the product is unexpectedly negative.
impl<T> Mul for Constrained<T, NonNegative>
where
    T: Mul<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let value = self.value * rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Multiplication produced a negative value, violating NonNegative invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    fn zero() -> Self {
        NonNegative::zero()
    }

    fn is_zero(&self) -> bool {
        self.value.is_zero()
    }
}
