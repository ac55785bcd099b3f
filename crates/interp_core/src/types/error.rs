//! Error types for structured error handling.
//!
//! This module provides:
//! - `InterpolationError`: Errors from bracketing and interpolation operations

use thiserror::Error;

/// Interpolation-related errors.
///
/// Provides structured error handling for interpolation operations
/// with descriptive context for each failure mode.
///
/// # Variants
/// - `DegenerateInterval`: Bracketing interval of zero width on a 1D axis
/// - `DegenerateCell`: Interpolation cell of zero width on either axis
/// - `InsufficientData`: Not enough points on an axis
/// - `NonMonotonicData`: Axis is not strictly ascending
/// - `OutOfBounds`: Query point outside the domain when extrapolation is forbidden
/// - `InvalidInput`: Shape mismatch between axes, series and grids
///
/// Querying outside an axis is not an error under the default
/// [`Extrapolation::Extend`](crate::math::interpolators::Extrapolation::Extend)
/// policy; the edge segment is extended instead.
///
/// # Examples
/// ```
/// use interp_core::types::InterpolationError;
///
/// let err = InterpolationError::DegenerateInterval { lower: 2.0, upper: 2.0 };
/// assert!(format!("{}", err).contains("Degenerate axis interval"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InterpolationError {
    /// Bracket endpoints coincide on a 1D axis.
    #[error("Degenerate axis interval: [{lower}, {upper}] has zero width")]
    DegenerateInterval {
        /// Lower bracket endpoint
        lower: f64,
        /// Upper bracket endpoint
        upper: f64,
    },

    /// Cell endpoints coincide on the x axis, the y axis, or both.
    #[error("Degenerate interpolation cell: x [{x1}, {x2}], y [{y1}, {y2}]")]
    DegenerateCell {
        /// Lower x endpoint
        x1: f64,
        /// Upper x endpoint
        x2: f64,
        /// Lower y endpoint
        y1: f64,
        /// Upper y endpoint
        y2: f64,
    },

    /// Insufficient data points for interpolation.
    #[error("Insufficient data points: got {got}, need at least {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },

    /// Axis is not strictly ascending.
    #[error("Data is not monotonic at index {index}")]
    NonMonotonicData {
        /// Index where monotonicity violation was detected
        index: usize,
    },

    /// Query point outside valid interpolation domain.
    #[error("Query point {x} outside valid domain [{min}, {max}]")]
    OutOfBounds {
        /// The query point that was out of bounds
        x: f64,
        /// Minimum valid value
        min: f64,
        /// Maximum valid value
        max: f64,
    },

    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl InterpolationError {
    /// Returns true for the zero-width bracket errors.
    ///
    /// These indicate duplicate axis values in the caller's data rather than
    /// a malformed call.
    pub fn is_degenerate(&self) -> bool {
        matches!(
            self,
            InterpolationError::DegenerateInterval { .. } | InterpolationError::DegenerateCell { .. }
        )
    }
}
