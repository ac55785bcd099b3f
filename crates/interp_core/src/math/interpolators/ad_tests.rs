//! Automatic differentiation compatibility tests for interpolators.
//!
//! These tests verify that the interpolation routines propagate slopes
//! when used with `Dual64` inputs.

#![cfg(all(test, feature = "num-dual-mode"))]

use super::*;
use num_dual::Dual64;

fn duals(values: &[f64]) -> Vec<Dual64> {
    values.iter().map(|&v| Dual64::from(v)).collect()
}

mod linear_ad_tests {
    use super::*;

    #[test]
    fn test_linear_gradient_is_segment_slope() {
        let axis = duals(&[0.0, 1.0, 2.0, 3.0]);
        let series = duals(&[0.0, 10.0, 20.0, 40.0]);

        let y = interpolate_1d(&axis, &series, Dual64::new(1.5, 1.0)).unwrap();
        assert!((y.re - 15.0).abs() < 1e-10, "Value should be 15.0");
        assert!((y.eps - 10.0).abs() < 1e-10, "Gradient should be 10.0");

        let y = interpolate_1d(&axis, &series, Dual64::new(2.5, 1.0)).unwrap();
        assert!((y.eps - 20.0).abs() < 1e-10, "Gradient should be 20.0");
    }

    #[test]
    fn test_linear_gradient_when_extrapolating() {
        let axis = duals(&[0.0, 1.0, 2.0]);
        let series = duals(&[1.0, 3.0, 4.0]);

        let below = interpolate_1d(&axis, &series, Dual64::new(-2.0, 1.0)).unwrap();
        assert!((below.eps - 2.0).abs() < 1e-10);

        let above = interpolate_1d(&axis, &series, Dual64::new(7.0, 1.0)).unwrap();
        assert!((above.eps - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_linear_interpolator_with_dual64() {
        let interp = LinearInterpolator::new(&duals(&[0.0, 1.0, 2.0]), &duals(&[0.0, 2.0, 4.0]))
            .unwrap();

        let y = interp.interpolate(Dual64::new(0.5, 1.0)).unwrap();
        assert!((y.re - 1.0).abs() < 1e-10, "Value should be 1.0");
        assert!((y.eps - 2.0).abs() < 1e-10, "Gradient should be 2.0");
    }
}

mod bilinear_ad_tests {
    use super::*;

    #[test]
    fn test_bilinear_partial_derivatives() {
        // z = 2x + 3y on the unit cell
        let q = |x: f64, y: f64| Dual64::from(2.0 * x + 3.0 * y);
        let zero = Dual64::from(0.0);
        let one = Dual64::from(1.0);

        let dz_dx = bilinear(
            zero,
            one,
            zero,
            one,
            q(0.0, 0.0),
            q(0.0, 1.0),
            q(1.0, 0.0),
            q(1.0, 1.0),
            Dual64::new(0.3, 1.0),
            Dual64::new(0.6, 0.0),
        )
        .unwrap();
        assert!((dz_dx.re - 2.4).abs() < 1e-10);
        assert!((dz_dx.eps - 2.0).abs() < 1e-10, "dz/dx should be 2.0");

        let dz_dy = bilinear(
            zero,
            one,
            zero,
            one,
            q(0.0, 0.0),
            q(0.0, 1.0),
            q(1.0, 0.0),
            q(1.0, 1.0),
            Dual64::new(0.3, 0.0),
            Dual64::new(0.6, 1.0),
        )
        .unwrap();
        assert!((dz_dy.eps - 3.0).abs() < 1e-10, "dz/dy should be 3.0");
    }

    #[test]
    fn test_grid_gradient_respects_row_column_convention() {
        // Columns follow i1, rows follow i2: z = x + 100y
        let i1 = duals(&[0.0, 1.0, 2.0]);
        let i2 = duals(&[0.0, 1.0]);
        let d = vec![duals(&[0.0, 1.0, 2.0]), duals(&[100.0, 101.0, 102.0])];

        let z = interpolate_2d(&i1, &i2, &d, Dual64::new(1.5, 1.0), Dual64::from(0.5)).unwrap();
        assert!((z.re - 51.5).abs() < 1e-10);
        assert!((z.eps - 1.0).abs() < 1e-10, "dz/dx should be 1.0");

        let z = interpolate_2d(&i1, &i2, &d, Dual64::from(1.5), Dual64::new(0.5, 1.0)).unwrap();
        assert!((z.eps - 100.0).abs() < 1e-10, "dz/dy should be 100.0");
    }

    #[test]
    fn test_grid_interpolator_with_dual64() {
        let i1 = duals(&[0.0, 1.0]);
        let i2 = duals(&[0.0, 1.0]);
        let d = vec![duals(&[0.0, 1.0]), duals(&[2.0, 3.0])];

        let surface = GridInterpolator::new(&i1, &i2, &d).unwrap();
        let z = surface
            .interpolate(Dual64::new(0.5, 1.0), Dual64::from(0.5))
            .unwrap();

        assert!(z.re.is_finite(), "Value should be finite");
        assert!((z.eps - 1.0).abs() < 1e-10, "Gradient should be 1.0");
    }
}
