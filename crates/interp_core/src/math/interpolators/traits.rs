//! Common interpolator trait and extrapolation policy.

use crate::types::InterpolationError;
use crate::types::Scalar;

/// One-dimensional interpolator over a fixed axis.
///
/// # Type Parameters
///
/// * `T` - Any [`Scalar`] (e.g., `f64`, `Dual64`)
pub trait Interpolator<T: Scalar> {
    /// Compute the interpolated value at `x`.
    fn interpolate(&self, x: T) -> Result<T, InterpolationError>;

    /// Return the sampled range `(x_min, x_max)`.
    fn domain(&self) -> (T, T);
}

/// Behaviour for queries outside the sampled axis range.
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::Extrapolation;
///
/// assert_eq!(Extrapolation::default(), Extrapolation::Extend);
/// assert_eq!("forbid".parse::<Extrapolation>().unwrap(), Extrapolation::Forbid);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Extrapolation {
    /// Extend the nearest edge segment's slope.
    #[default]
    Extend,
    /// Reject the query with [`InterpolationError::OutOfBounds`].
    Forbid,
}

impl Extrapolation {
    /// Apply the policy to a query against the range `(min, max)`.
    ///
    /// Returns `Ok(())` if the query may proceed.
    pub fn check<T: Scalar>(self, x: T, (min, max): (T, T)) -> Result<(), InterpolationError> {
        match self {
            Extrapolation::Extend => Ok(()),
            Extrapolation::Forbid => {
                let (x, min, max) = (x.real(), min.real(), max.real());
                if x >= min && x <= max {
                    Ok(())
                } else {
                    Err(InterpolationError::OutOfBounds {
                        x,
                        min,
                        max,
                    })
                }
            }
        }
    }

    /// Lowercase name, as accepted by [`FromStr`](std::str::FromStr).
    pub fn as_str(&self) -> &'static str {
        match self {
            Extrapolation::Extend => "extend",
            Extrapolation::Forbid => "forbid",
        }
    }
}

impl std::str::FromStr for Extrapolation {
    type Err = InterpolationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "extend" | "linear" => Ok(Extrapolation::Extend),
            "forbid" | "strict" => Ok(Extrapolation::Forbid),
            other => Err(InterpolationError::InvalidInput(format!(
                "Unknown extrapolation policy: {}. Supported: extend, forbid",
                other
            ))),
        }
    }
}

impl std::fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
