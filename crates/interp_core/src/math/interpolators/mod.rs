//! Interpolation over tabulated axes.
//!
//! This module provides bracketing on ascending axes and the linear and
//! bilinear estimates built on it, generic over
//! [`Scalar`](crate::types::Scalar) so `f64` and dual numbers share one code path.
//!
//! ## Free Functions
//!
//! - [`bracket_index`]: Upper bracket index of a query on an ascending axis
//! - [`interpolate_1d`]: Linear interpolation of a series sampled on an axis
//! - [`bilinear`]: Bilinear blend of the four corner values of one cell
//! - [`interpolate_2d`]: Grid lookup, bracketing each axis and delegating to [`bilinear`]
//! - [`validate_axis`]: Strict-ascending check for caller-supplied axes
//!
//! The free functions extrapolate along the edge segment (or edge cell) for
//! queries outside the sampled range. Duplicate axis values at the bracket
//! are reported as [`InterpolationError::DegenerateInterval`] or
//! [`InterpolationError::DegenerateCell`]; a non-finite result is never
//! returned for them.
//!
//! ## Owning Interpolators
//!
//! - [`LinearInterpolator`]: Validated 1D series, implements [`Interpolator`]
//! - [`GridInterpolator`]: Validated 2D surface
//!
//! Both apply an [`Extrapolation`] policy, extending edge segments by default.
//!
//! ## Example
//!
//! ```
//! use interp_core::math::interpolators::{interpolate_1d, interpolate_2d};
//!
//! let axis = [0.0, 1.0, 2.0, 3.0];
//! let series = [0.0, 10.0, 20.0, 30.0];
//! assert_eq!(interpolate_1d(&axis, &series, 1.5).unwrap(), 15.0);
//!
//! let i1 = [0.0, 1.0, 2.0];
//! let i2 = [0.0, 10.0];
//! let d = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! assert_eq!(interpolate_2d(&i1, &i2, &d, 1.0, 10.0).unwrap(), 5.0);
//! ```
//!
//! [`InterpolationError::DegenerateInterval`]: crate::types::InterpolationError::DegenerateInterval
//! [`InterpolationError::DegenerateCell`]: crate::types::InterpolationError::DegenerateCell

mod ad_tests;
mod bilinear;
mod bracket;
mod grid;
mod linear;
mod traits;

// Re-export public items at module level
pub use bilinear::bilinear;
pub use bracket::{bracket_index, validate_axis};
pub use grid::{interpolate_2d, GridInterpolator};
pub use linear::{interpolate_1d, LinearInterpolator};
pub use traits::{Extrapolation, Interpolator};
