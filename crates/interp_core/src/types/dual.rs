//! Dual number type integration for derivative checks.
//!
//! `Dual64` implements [`Scalar`](crate::types::Scalar), so a
//! dual-number query yields both the estimate and its slope with respect to
//! the query coordinate.
//!
//! ## Usage
//!
//! ```
//! use interp_core::math::interpolators::interpolate_1d;
//! use interp_core::types::dual::DualNumber;
//!
//! let axis = [DualNumber::from(0.0), DualNumber::from(1.0), DualNumber::from(2.0)];
//! let series = [DualNumber::from(0.0), DualNumber::from(3.0), DualNumber::from(4.0)];
//!
//! // Seed dx/dx = 1
//! let x = DualNumber::new(0.5, 1.0);
//! let y = interpolate_1d(&axis, &series, x).unwrap();
//!
//! assert!((y.re - 1.5_f64).abs() < 1e-12);
//! assert!((y.eps - 3.0_f64).abs() < 1e-12);
//! ```

/// Type alias for num-dual's Dual64 (f64-based dual numbers).
///
/// - `re`: Real part (interpolated value)
/// - `eps`: Dual part (slope with respect to the seeded input)
#[cfg(feature = "num-dual-mode")]
pub type DualNumber = num_dual::Dual64;
