use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Used for quantities where zero is a meaningful limit: pipe wall roughness
/// (a hydraulically smooth pipe), channel side slope (vertical walls) and
/// trapezoidal bottom width (a triangular section).
///
/// # Examples
///
/// ```
/// use twine_hydraulics::support::constraint::{Constrained, NonNegative};
///
/// // Generic constructor:
/// let side_slope = Constrained::<f64, NonNegative>::new(1.5).unwrap();
/// assert_eq!(side_slope.into_inner(), 1.5);
///
/// // Associated constructor:
/// let roughness = NonNegative::new(0.0).unwrap();
/// assert_eq!(roughness.into_inner(), 0.0);
///
/// // Error cases:
/// assert!(NonNegative::new(-0.001).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
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
