//! Standard normal distribution functions.
//!
//! Both functions are pure and defined for all finite inputs; callers must
//! not pass non-finite values.

use std::f64::consts::PI;

/// Standard normal CDF (cumulative distribution function).
///
/// Computed via the error function: `0.5 * (1 + erf(x / sqrt(2)))`.
/// Accurate to better than 1e-9 absolute error over the practical domain.
#[must_use]
pub fn norm_cdf(x: f64) -> f64 {
    0.5 * (1.0 + libm::erf(x / std::f64::consts::SQRT_2))
}

/// Standard normal PDF (probability density function).
#[must_use]
pub fn norm_pdf(x: f64) -> f64 {
    (-0.5 * x * x).exp() / (2.0 * PI).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn cdf_at_zero_is_half() {
        assert!(approx_eq(norm_cdf(0.0), 0.5, 1e-12));
    }

    #[test]
    fn cdf_known_values() {
        // Reference values from standard normal tables (15 digits).
        assert!(approx_eq(norm_cdf(1.0), 0.841_344_746_068_543, 1e-9));
        assert!(approx_eq(norm_cdf(-1.0), 0.158_655_253_931_457, 1e-9));
        assert!(approx_eq(norm_cdf(1.96), 0.975_002_104_851_780, 1e-9));
        assert!(approx_eq(norm_cdf(-2.575_829_3), 0.005, 1e-7));
    }

    #[test]
    fn cdf_tails() {
        assert!(norm_cdf(10.0) > 1.0 - 1e-9);
        assert!(norm_cdf(-10.0) < 1e-9);
    }

    #[test]
    fn cdf_symmetry() {
        for x in [0.1, 0.7, 1.3, 2.9, 5.0] {
            assert!(approx_eq(norm_cdf(x) + norm_cdf(-x), 1.0, 1e-12));
        }
    }

    #[test]
    fn pdf_at_zero() {
        // 1 / sqrt(2*pi)
        assert!(approx_eq(norm_pdf(0.0), 0.398_942_280_401_433, 1e-12));
    }

    #[test]
    fn pdf_is_even() {
        for x in [0.5, 1.0, 2.0, 3.5] {
            assert_eq!(norm_pdf(x), norm_pdf(-x));
        }
    }
}
