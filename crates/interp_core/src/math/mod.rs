//! Numerical routines.
//!
//! - `interpolators`: Bracketing, linear and bilinear interpolation

pub mod interpolators;
