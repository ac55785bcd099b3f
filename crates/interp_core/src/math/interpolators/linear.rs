//! Linear interpolation implementation.

use super::bracket::{bracket_index, validate_axis};
use super::{Extrapolation, Interpolator};
use crate::types::InterpolationError;
use crate::types::Scalar;

/// Linearly interpolate a series sampled on an ascending axis.
///
/// Brackets `x` with [`bracket_index`] and evaluates the straight line
/// through the two bracketing samples. Queries outside the axis extend the
/// first or last segment.
///
/// # Formula
///
/// ```text
/// y = y0 + (x - x0) * (y1 - y0) / (x1 - x0)
/// ```
///
/// # Arguments
///
/// * `axis` - Ascending axis, at least 2 points
/// * `series` - Dependent values, same length as `axis`
/// * `x` - Query point
///
/// # Returns
///
/// * `Ok(y)` - The interpolated (or extrapolated) value
/// * `Err(InterpolationError::InsufficientData)` - Axis shorter than 2
/// * `Err(InterpolationError::InvalidInput)` - `series` length differs from `axis`
/// * `Err(InterpolationError::DegenerateInterval)` - Bracketing points coincide
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::interpolate_1d;
///
/// let axis = [0.0, 1.0, 2.0, 3.0];
/// let series = [0.0, 10.0, 20.0, 30.0];
///
/// assert_eq!(interpolate_1d(&axis, &series, 1.5).unwrap(), 15.0);
/// // Beyond the last point the final segment is extended
/// assert_eq!(interpolate_1d(&axis, &series, 4.0).unwrap(), 40.0);
/// ```
pub fn interpolate_1d<T: Scalar>(axis: &[T], series: &[T], x: T) -> Result<T, InterpolationError> {
    if series.len() != axis.len() {
        return Err(InterpolationError::InvalidInput(format!(
            "axis and series must have same length: got {} and {}",
            axis.len(),
            series.len()
        )));
    }

    let i1 = bracket_index(x, axis)?;
    let i0 = i1 - 1;

    let x0 = axis[i0];
    let x1 = axis[i1];
    let y0 = series[i0];
    let y1 = series[i1];

    let dx = x1 - x0;
    if dx.real() == 0.0 {
        return Err(InterpolationError::DegenerateInterval {
            lower: x0.real(),
            upper: x1.real(),
        });
    }

    Ok(y0 + (x - x0) * (y1 - y0) / dx)
}

/// Piecewise linear interpolator.
///
/// Owns a validated axis and series. Queries outside the axis follow the
/// configured [`Extrapolation`] policy, which defaults to extending the
/// edge segments.
///
/// # Type Parameters
///
/// * `T` - Any [`Scalar`] (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::{Extrapolation, Interpolator, LinearInterpolator};
///
/// let xs = [0.0, 1.0, 2.0, 3.0];
/// let ys = [0.0, 2.0, 4.0, 6.0];
///
/// let interp = LinearInterpolator::new(&xs, &ys).unwrap();
/// assert_eq!(interp.domain(), (0.0, 3.0));
/// assert!((interp.interpolate(3.5).unwrap() - 7.0_f64).abs() < 1e-12);
///
/// let strict = interp.with_extrapolation(Extrapolation::Forbid);
/// assert!(strict.interpolate(3.5).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator<T: Scalar> {
    /// Strictly ascending x-coordinates
    xs: Vec<T>,
    /// Corresponding y-values
    ys: Vec<T>,
    /// Out-of-range query behaviour
    extrapolation: Extrapolation,
}

impl<T: Scalar> LinearInterpolator<T> {
    /// Construct a linear interpolator from x and y data points.
    ///
    /// # Arguments
    ///
    /// * `xs` - Strictly ascending x-coordinates (at least 2)
    /// * `ys` - Corresponding y-values
    ///
    /// # Returns
    ///
    /// * `Ok(LinearInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InvalidInput)` - Mismatched array lengths
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 data points
    /// * `Err(InterpolationError::NonMonotonicData)` - `xs` not strictly ascending
    ///
    /// # Example
    ///
    /// ```
    /// use interp_core::math::interpolators::LinearInterpolator;
    ///
    /// assert!(LinearInterpolator::new(&[0.0, 1.0], &[0.0, 1.0]).is_ok());
    /// assert!(LinearInterpolator::new(&[0.0], &[0.0]).is_err());
    /// assert!(LinearInterpolator::new(&[1.0, 0.0], &[0.0, 1.0]).is_err());
    /// ```
    pub fn new(xs: &[T], ys: &[T]) -> Result<Self, InterpolationError> {
        if xs.len() != ys.len() {
            return Err(InterpolationError::InvalidInput(format!(
                "xs and ys must have same length: got {} and {}",
                xs.len(),
                ys.len()
            )));
        }
        validate_axis(xs)?;

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            extrapolation: Extrapolation::default(),
        })
    }

    /// Return a copy using the given extrapolation policy.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    /// Returns the extrapolation policy.
    #[inline]
    pub fn extrapolation(&self) -> Extrapolation {
        self.extrapolation
    }

    /// Returns a reference to the x-coordinates.
    #[inline]
    pub fn xs(&self) -> &[T] {
        &self.xs
    }

    /// Returns a reference to the y-values.
    #[inline]
    pub fn ys(&self) -> &[T] {
        &self.ys
    }

    /// Returns the number of data points.
    #[inline]
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the interpolator has no data points.
    /// Note: This is never true for a successfully constructed interpolator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

impl<T: Scalar> Interpolator<T> for LinearInterpolator<T> {
    fn interpolate(&self, x: T) -> Result<T, InterpolationError> {
        self.extrapolation.check(x, self.domain())?;
        interpolate_1d(&self.xs, &self.ys, x)
    }

    #[inline]
    fn domain(&self) -> (T, T) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }
}
