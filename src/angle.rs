//! Angle utilities for region orientation.

use std::f64::consts::PI;

/// Normalizes an angle into the range [0, π).
#[inline]
pub fn normalize_half_pi(angle: f64) -> f64 {
    let mut norm = angle.rem_euclid(PI);
    if norm >= PI {
        norm -= PI;
    }
    if norm >= PI - 1e-12 {
        0.0
    } else {
        norm
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_4;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn normalize_half_pi_basic() {
        assert!(approx_eq(normalize_half_pi(0.5), 0.5));
        assert!(approx_eq(normalize_half_pi(-FRAC_PI_4), 3.0 * FRAC_PI_4));
        assert!(approx_eq(normalize_half_pi(PI), 0.0));
        assert!(approx_eq(normalize_half_pi(3.0 * PI), 0.0));
    }

    #[test]
    fn normalize_keeps_axis_orientation() {
        // opposite directions describe the same axis
        let a = normalize_half_pi(0.3);
        let b = normalize_half_pi(0.3 + PI);
        let c = normalize_half_pi(0.3 - 5.0 * PI);
        assert!(approx_eq(a, b) && approx_eq(a, c));
    }
}
