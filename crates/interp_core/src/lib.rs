//! # interp_core: Interpolation Engine for Tabulated Figure Data
//!
//! ## Layer Role
//!
//! interp_core is the bottom layer of the workspace, providing:
//! - Bracket search on ascending axes (`math::interpolators::bracket_index`)
//! - Linear interpolation of a sampled series (`math::interpolators::interpolate_1d`)
//! - Bilinear interpolation on a cell and over a grid (`math::interpolators::{bilinear, interpolate_2d}`)
//! - Owning interpolators with an extrapolation policy (`math::interpolators::{LinearInterpolator, GridInterpolator}`)
//! - Error type: `InterpolationError` (`types::error`)
//! - Value bound: `Scalar` (`types::scalar`), implemented for `f64`, `f32` and `Dual64`
//!
//! Every routine is a pure, synchronous function of its inputs. Nothing is
//! cached or shared between calls, so all of it may be called concurrently.
//!
//! ## Minimal Dependencies
//!
//! interp_core depends on no other workspace crate:
//! - num-traits: Arithmetic bound behind `Scalar`
//! - num-dual: Dual number types for derivative checks (optional)
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use interp_core::math::interpolators::{bilinear, bracket_index, interpolate_1d, interpolate_2d};
//! use interp_core::types::InterpolationError;
//!
//! let axis = [0.0, 1.0, 2.0, 3.0];
//! assert_eq!(bracket_index(1.5, &axis).unwrap(), 2);
//! assert_eq!(interpolate_1d(&axis, &[0.0, 10.0, 20.0, 30.0], 1.5).unwrap(), 15.0);
//!
//! let grid = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
//! assert_eq!(interpolate_2d(&[0.0, 1.0, 2.0], &[0.0, 10.0], &grid, 1.0, 10.0).unwrap(), 5.0);
//!
//! let degenerate = bilinear(5.0, 5.0, 1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 1.5);
//! assert!(matches!(degenerate, Err(InterpolationError::DegenerateCell { .. })));
//! ```
//!
//! ## Feature Flags
//!
//! - `num-dual-mode` (default): Dual number alias and derivative tests
//! - `serde` (default): Serialisation for `InterpolationError` and `Extrapolation`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
