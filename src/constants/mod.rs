//! Constants module for vector and scalar calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / PI;

// Degeneracy thresholds
/// Magnitude below which a vector is treated as zero-length when normalizing
pub const K_EPSILON: f64 = 0.00001;
/// Magnitude product below which the angle between two vectors is taken as zero
pub const K_EPSILON_NORMAL_SQRT: f64 = 1e-15;

// Tolerances
/// Relative tolerance used by `mathf::approximately`
pub const APPROX_RELATIVE: f64 = 1e-6;
/// Absolute floor used by `mathf::approximately`, eight machine epsilons
pub const APPROX_ABSOLUTE: f64 = f64::EPSILON * 8.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angle_factors_are_inverse() {
        assert!((DEG_TO_RAD * RAD_TO_DEG - 1.0).abs() < 1e-15);
        assert!((180.0 * DEG_TO_RAD - PI).abs() < 1e-15);
    }

    #[test]
    fn test_epsilon_ordering() {
        assert!(K_EPSILON_NORMAL_SQRT < K_EPSILON);
        assert!(APPROX_ABSOLUTE > 0.0);
    }
}
