//! Core numeric and error types.
//!
//! This module provides:
//! - `dual`: Dual number type integration with num-dual for derivative checks (when `num-dual-mode` feature is enabled)
//! - `error`: Structured error type for bracketing and interpolation
//! - `scalar`: Value bound shared by `f64`, `f32` and dual numbers
//!
//! # Re-exports
//!
//! [`InterpolationError`] and [`Scalar`] are re-exported at this module level.

#[cfg(feature = "num-dual-mode")]
pub mod dual;
pub mod error;
pub mod scalar;

pub use error::InterpolationError;
pub use scalar::Scalar;
