//! Bracket search and axis validation.

use crate::types::InterpolationError;
use crate::types::Scalar;

/// Locate the upper bracket index of `x` on an ascending axis.
///
/// Returns the smallest index `i >= 1` with `axis[i] > x`, or
/// `axis.len() - 1` when no such index exists. The lower bracket is
/// `i - 1`, so the result always names a valid segment
/// `[axis[i - 1], axis[i]]`.
///
/// Queries below `axis[1]` land in the first segment and queries at or
/// above the last point land in the final segment; callers extrapolate
/// along those edge segments rather than failing.
///
/// # Arguments
///
/// * `x` - Query value
/// * `axis` - Ascending axis (not validated here, see [`validate_axis`])
///
/// # Returns
///
/// * `Ok(i)` - Upper bracket index in `[1, axis.len() - 1]`
/// * `Err(InterpolationError::InsufficientData)` - Axis has fewer than 2 points
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::bracket_index;
///
/// let axis = [0.0, 1.0, 2.0, 3.0];
/// assert_eq!(bracket_index(1.5, &axis).unwrap(), 2);
/// assert_eq!(bracket_index(-4.0, &axis).unwrap(), 1);
/// assert_eq!(bracket_index(3.0, &axis).unwrap(), 3);
/// assert_eq!(bracket_index(99.0, &axis).unwrap(), 3);
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn bracket_index<T: Scalar>(x: T, axis: &[T]) -> Result<usize, InterpolationError> {
    let n = axis.len();
    if n < 2 {
        return Err(InterpolationError::InsufficientData { got: n, need: 2 });
    }

    // `!(a > x)` rather than `a <= x` so that a NaN query finds no
    // qualifying index and falls through to the last segment.
    let pos = axis[1..].partition_point(|a| !(a.real() > x.real()));

    Ok((1 + pos).min(n - 1))
}

/// Check that an axis has at least two points and is strictly ascending.
///
/// # Returns
///
/// * `Ok(())` - Axis is usable for bracketing
/// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points
/// * `Err(InterpolationError::NonMonotonicData)` - First index `i` where
///   `axis[i] <= axis[i - 1]` (comparisons involving NaN also fail)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::validate_axis;
/// use interp_core::types::InterpolationError;
///
/// assert!(validate_axis(&[0.0, 0.5, 2.0]).is_ok());
/// assert_eq!(
///     validate_axis(&[0.0, 1.0, 1.0]),
///     Err(InterpolationError::NonMonotonicData { index: 2 })
/// );
/// ```
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn validate_axis<T: Scalar>(axis: &[T]) -> Result<(), InterpolationError> {
    if axis.len() < 2 {
        return Err(InterpolationError::InsufficientData {
            got: axis.len(),
            need: 2,
        });
    }

    match axis.windows(2).position(|w| !(w[1].real() > w[0].real())) {
        Some(i) => Err(InterpolationError::NonMonotonicData { index: i + 1 }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Left-to-right scan used as the reference for the binary search.
    fn scan(x: f64, a: &[f64]) -> usize {
        for (i, &v) in a.iter().enumerate().skip(1) {
            if v > x {
                return i;
            }
        }
        a.len() - 1
    }

    #[test]
    fn test_bracket_interior() {
        let axis = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(bracket_index(0.5, &axis).unwrap(), 1);
        assert_eq!(bracket_index(1.5, &axis).unwrap(), 2);
        assert_eq!(bracket_index(2.5, &axis).unwrap(), 3);
    }

    #[test]
    fn test_bracket_at_knots_picks_upper_segment() {
        let axis = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(bracket_index(0.0, &axis).unwrap(), 1);
        assert_eq!(bracket_index(1.0, &axis).unwrap(), 2);
        assert_eq!(bracket_index(2.0, &axis).unwrap(), 3);
    }

    #[test]
    fn test_bracket_below_axis() {
        let axis = [10.0, 20.0, 30.0];
        assert_eq!(bracket_index(-1e9, &axis).unwrap(), 1);
        assert_eq!(bracket_index(9.999, &axis).unwrap(), 1);
        assert_eq!(bracket_index(19.0, &axis).unwrap(), 1);
    }

    #[test]
    fn test_bracket_above_axis() {
        let axis = [10.0, 20.0, 30.0];
        assert_eq!(bracket_index(30.0, &axis).unwrap(), 2);
        assert_eq!(bracket_index(1e9, &axis).unwrap(), 2);
        assert_eq!(bracket_index(f64::INFINITY, &axis).unwrap(), 2);
    }

    #[test]
    fn test_bracket_two_point_axis() {
        let axis = [0.0, 1.0];
        assert_eq!(bracket_index(-5.0, &axis).unwrap(), 1);
        assert_eq!(bracket_index(0.5, &axis).unwrap(), 1);
        assert_eq!(bracket_index(5.0, &axis).unwrap(), 1);
    }

    #[test]
    fn test_bracket_nan_query_uses_last_segment() {
        let axis = [0.0, 1.0, 2.0];
        assert_eq!(bracket_index(f64::NAN, &axis).unwrap(), 2);
    }

    #[test]
    fn test_bracket_insufficient_data() {
        let empty: [f64; 0] = [];
        match bracket_index(0.0, &empty).unwrap_err() {
            InterpolationError::InsufficientData { got, need } => {
                assert_eq!(got, 0);
                assert_eq!(need, 2);
            }
            _ => panic!("Expected InsufficientData error"),
        }

        match bracket_index(0.0, &[1.0]).unwrap_err() {
            InterpolationError::InsufficientData { got, .. } => assert_eq!(got, 1),
            _ => panic!("Expected InsufficientData error"),
        }
    }

    #[test]
    fn test_bracket_matches_scan() {
        let axis = [-3.0, -1.0, 0.0, 0.25, 4.0, 9.5];
        for k in -50..=120 {
            let x = k as f64 * 0.1;
            assert_eq!(bracket_index(x, &axis).unwrap(), scan(x, &axis), "x = {}", x);
        }
    }

    #[test]
    fn test_bracket_f32() {
        let axis: [f32; 3] = [0.0, 1.0, 2.0];
        assert_eq!(bracket_index(1.5_f32, &axis).unwrap(), 2);
    }

    #[test]
    fn test_validate_axis_ok() {
        assert!(validate_axis(&[0.0, 1.0]).is_ok());
        assert!(validate_axis(&[-2.0, -1.0, 0.0, 10.0]).is_ok());
    }

    #[test]
    fn test_validate_axis_too_short() {
        assert_eq!(
            validate_axis(&[1.0]),
            Err(InterpolationError::InsufficientData { got: 1, need: 2 })
        );
    }

    #[test]
    fn test_validate_axis_duplicate() {
        assert_eq!(
            validate_axis(&[0.0, 1.0, 1.0, 2.0]),
            Err(InterpolationError::NonMonotonicData { index: 2 })
        );
    }

    #[test]
    fn test_validate_axis_descending() {
        assert_eq!(
            validate_axis(&[3.0, 2.0, 1.0]),
            Err(InterpolationError::NonMonotonicData { index: 1 })
        );
    }

    #[test]
    fn test_validate_axis_nan() {
        assert_eq!(
            validate_axis(&[0.0, f64::NAN, 2.0]),
            Err(InterpolationError::NonMonotonicData { index: 1 })
        );
    }
}
