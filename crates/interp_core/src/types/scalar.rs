//! Numeric bound for the interpolation routines.
//!
//! `num_traits::Float` is too strict for dual numbers: `Dual64` provides the
//! field arithmetic the routines need but not the `Float` surface. The
//! routines therefore only require arithmetic (`num_traits::Num`) and order
//! their inputs by real part.

use num_traits::Num;
use std::fmt::Debug;

/// Value type accepted by the interpolation routines.
///
/// Bracketing, domain checks and degeneracy checks compare the real part
/// only, so a dual number brackets exactly like its real value while its
/// derivative part flows through the arithmetic.
///
/// # Example
///
/// ```
/// use interp_core::types::Scalar;
///
/// assert_eq!(2.5_f64.real(), 2.5);
/// assert_eq!(0.5_f32.real(), 0.5);
/// ```
pub trait Scalar: Num + Copy + Debug {
    /// Real part as `f64`, used for ordering and in error reports.
    fn real(&self) -> f64;
}

impl Scalar for f64 {
    #[inline]
    fn real(&self) -> f64 {
        *self
    }
}

impl Scalar for f32 {
    #[inline]
    fn real(&self) -> f64 {
        f64::from(*self)
    }
}

#[cfg(feature = "num-dual-mode")]
impl Scalar for num_dual::Dual64 {
    #[inline]
    fn real(&self) -> f64 {
        self.re
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_real_part_of_floats() {
        assert_eq!(3.0_f64.real(), 3.0);
        assert!(f64::NAN.real().is_nan());
        assert_eq!((-1.5_f32).real(), -1.5);
    }

    #[cfg(feature = "num-dual-mode")]
    #[test]
    fn test_real_part_of_dual_ignores_derivative() {
        let x = num_dual::Dual64::new(4.0, 7.0);
        assert_eq!(x.real(), 4.0);
    }
}
