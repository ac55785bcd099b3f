//! Grid lookup: bilinear interpolation over a tabulated surface.
//!
//! The grid is indexed `d[row][col]` where rows follow axis `i2` and columns
//! follow axis `i1`. Published tables are laid out this way, so the first
//! grid index is always the `i2` bracket and the second the `i1` bracket.

use super::bilinear::bilinear;
use super::bracket::{bracket_index, validate_axis};
use super::Extrapolation;
use crate::types::InterpolationError;
use crate::types::Scalar;

/// Check that `grid` has `i2.len()` rows of `i1.len()` columns each.
fn check_shape<T, R: AsRef<[T]>>(
    i1_len: usize,
    i2_len: usize,
    grid: &[R],
) -> Result<(), InterpolationError> {
    if grid.len() != i2_len {
        return Err(InterpolationError::InvalidInput(format!(
            "Grid rows ({}) must match i2 axis length ({})",
            grid.len(),
            i2_len
        )));
    }

    for (row_idx, row) in grid.iter().enumerate() {
        let cols = row.as_ref().len();
        if cols != i1_len {
            return Err(InterpolationError::InvalidInput(format!(
                "Grid row {} length ({}) must match i1 axis length ({})",
                row_idx, cols, i1_len
            )));
        }
    }

    Ok(())
}

/// Interpolate a tabulated surface at `(x, y)`.
///
/// Brackets `x` on `i1` and `y` on `i2` with [`bracket_index`], reads the
/// four corners of the enclosing cell from `grid` and delegates to
/// [`bilinear`]:
///
/// ```text
/// q11 = d[i21][i11]   q12 = d[i22][i11]
/// q21 = d[i21][i12]   q22 = d[i22][i12]
/// ```
///
/// where `i11`/`i12` bracket `x` on `i1` and `i21`/`i22` bracket `y` on
/// `i2`. Queries outside either axis extrapolate from the edge cell.
///
/// # Arguments
///
/// * `i1` - Ascending axis indexing grid columns
/// * `i2` - Ascending axis indexing grid rows
/// * `grid` - Rows of values, `grid[row][col] = z(i1[col], i2[row])`
/// * `x` - Query coordinate on `i1`
/// * `y` - Query coordinate on `i2`
///
/// # Returns
///
/// * `Ok(z)` - The interpolated value
/// * `Err(InterpolationError::InsufficientData)` - Either axis shorter than 2
/// * `Err(InterpolationError::InvalidInput)` - Grid shape does not match the axes
/// * `Err(InterpolationError::DegenerateCell)` - Enclosing cell has zero width
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::interpolate_2d;
///
/// let i1 = [0.0, 1.0, 2.0];
/// let i2 = [0.0, 10.0];
/// let d = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
///
/// assert_eq!(interpolate_2d(&i1, &i2, &d, 1.0, 10.0).unwrap(), 5.0);
/// assert_eq!(interpolate_2d(&i1, &i2, &d, 0.5, 5.0).unwrap(), 3.0);
/// ```
pub fn interpolate_2d<T: Scalar, R: AsRef<[T]>>(
    i1: &[T],
    i2: &[T],
    grid: &[R],
    x: T,
    y: T,
) -> Result<T, InterpolationError> {
    let i12 = bracket_index(x, i1)?;
    let i11 = i12 - 1;
    let i22 = bracket_index(y, i2)?;
    let i21 = i22 - 1;

    check_shape(i1.len(), i2.len(), grid)?;

    let row1 = grid[i21].as_ref();
    let row2 = grid[i22].as_ref();

    bilinear(
        i1[i11],
        i1[i12],
        i2[i21],
        i2[i22],
        row1[i11],
        row2[i11],
        row1[i12],
        row2[i12],
        x,
        y,
    )
}

/// Bilinear interpolator owning a tabulated surface.
///
/// Stores two validated axes and a grid laid out as for
/// [`interpolate_2d`]: `grid[row][col] = z(i1[col], i2[row])`.
///
/// # Type Parameters
///
/// * `T` - Any [`Scalar`] (e.g., `f64`, `Dual64`)
///
/// # Example
///
/// ```
/// use interp_core::math::interpolators::GridInterpolator;
///
/// let i1 = [0.0, 1.0, 2.0];
/// let i2 = [0.0, 10.0];
/// let d = [&[1.0, 2.0, 3.0][..], &[4.0, 5.0, 6.0][..]];
///
/// let surface = GridInterpolator::new(&i1, &i2, &d).unwrap();
/// assert_eq!(surface.domain_x(), (0.0, 2.0));
/// assert_eq!(surface.domain_y(), (0.0, 10.0));
/// assert_eq!(surface.interpolate(1.0, 10.0).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct GridInterpolator<T: Scalar> {
    /// Column axis
    i1: Vec<T>,
    /// Row axis
    i2: Vec<T>,
    /// Grid values: grid[row][col] = z(i1[col], i2[row])
    grid: Vec<Vec<T>>,
    /// Out-of-range query behaviour, applied to both axes
    extrapolation: Extrapolation,
}

impl<T: Scalar> GridInterpolator<T> {
    /// Construct a grid interpolator.
    ///
    /// # Arguments
    ///
    /// * `i1` - Strictly ascending column axis (length >= 2)
    /// * `i2` - Strictly ascending row axis (length >= 2)
    /// * `grid` - `i2.len()` rows of `i1.len()` values
    ///
    /// # Returns
    ///
    /// * `Ok(GridInterpolator)` - Successfully constructed interpolator
    /// * `Err(InterpolationError::InsufficientData)` - Fewer than 2 points on an axis
    /// * `Err(InterpolationError::NonMonotonicData)` - An axis is not strictly ascending
    /// * `Err(InterpolationError::InvalidInput)` - Grid dimensions don't match axis lengths
    pub fn new<R: AsRef<[T]>>(i1: &[T], i2: &[T], grid: &[R]) -> Result<Self, InterpolationError> {
        validate_axis(i1)?;
        validate_axis(i2)?;
        check_shape(i1.len(), i2.len(), grid)?;

        Ok(Self {
            i1: i1.to_vec(),
            i2: i2.to_vec(),
            grid: grid.iter().map(|row| row.as_ref().to_vec()).collect(),
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

    /// Interpolate value at `(x, y)`, with `x` on `i1` and `y` on `i2`.
    ///
    /// # Returns
    ///
    /// * `Ok(z)` - The interpolated value
    /// * `Err(InterpolationError::OutOfBounds)` - Outside the grid under [`Extrapolation::Forbid`]
    pub fn interpolate(&self, x: T, y: T) -> Result<T, InterpolationError> {
        self.extrapolation.check(x, self.domain_x())?;
        self.extrapolation.check(y, self.domain_y())?;
        interpolate_2d(&self.i1, &self.i2, &self.grid, x, y)
    }

    /// Return the sampled range of `i1`.
    #[inline]
    pub fn domain_x(&self) -> (T, T) {
        (self.i1[0], self.i1[self.i1.len() - 1])
    }

    /// Return the sampled range of `i2`.
    #[inline]
    pub fn domain_y(&self) -> (T, T) {
        (self.i2[0], self.i2[self.i2.len() - 1])
    }

    /// Returns a reference to the column axis.
    #[inline]
    pub fn i1(&self) -> &[T] {
        &self.i1
    }

    /// Returns a reference to the row axis.
    #[inline]
    pub fn i2(&self) -> &[T] {
        &self.i2
    }

    /// Returns a reference to the grid rows.
    #[inline]
    pub fn grid(&self) -> &[Vec<T>] {
        &self.grid
    }
}
