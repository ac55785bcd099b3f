//! Bilinear interpolation on a single rectangular cell.

use crate::types::InterpolationError;
use crate::types::Scalar;

/// Bilinearly interpolate within the cell `[x1, x2] x [y1, y2]`.
///
/// Blends linearly along x on both y-edges, then blends the two results
/// along y. Corner values are named by position: `q11` at `(x1, y1)`,
/// `q12` at `(x1, y2)`, `q21` at `(x2, y1)` and `q22` at `(x2, y2)`.
///
/// # Formula
///
/// ```text
/// xy1 = ((x2 - x) * q11 + (x - x1) * q21) / (x2 - x1)
/// xy2 = ((x2 - x) * q12 + (x - x1) * q22) / (x2 - x1)
/// xy  = ((y2 - y) * xy1 + (y - y1) * xy2) / (y2 - y1)
/// ```
///
/// A query outside the cell is extrapolated by the same formula.
///
/// # Returns
///
/// * `Ok(z)` - The interpolated value
/// * `Err(InterpolationError::DegenerateCell)` - `x1 == x2` or `y1 == y2`
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::bilinear;
///
/// // Unit cell with z = x + 2y
/// let z = bilinear(0.0, 1.0, 0.0, 1.0, 0.0, 2.0, 1.0, 3.0, 0.5, 0.25).unwrap();
/// assert!((z - 1.0_f64).abs() < 1e-12);
///
/// // Zero-width x interval
/// assert!(bilinear(5.0, 5.0, 1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 1.5).is_err());
/// ```
#[allow(clippy::too_many_arguments)]
pub fn bilinear<T: Scalar>(
    x1: T,
    x2: T,
    y1: T,
    y2: T,
    q11: T,
    q12: T,
    q21: T,
    q22: T,
    x: T,
    y: T,
) -> Result<T, InterpolationError> {
    let dx = x2 - x1;
    let dy = y2 - y1;

    if dx.real() == 0.0 || dy.real() == 0.0 {
        return Err(InterpolationError::DegenerateCell {
            x1: x1.real(),
            x2: x2.real(),
            y1: y1.real(),
            y2: y2.real(),
        });
    }

    let xy1 = ((x2 - x) * q11 + (x - x1) * q21) / dx;
    let xy2 = ((x2 - x) * q12 + (x - x1) * q22) / dx;

    Ok(((y2 - y) * xy1 + (y - y1) * xy2) / dy)
}
