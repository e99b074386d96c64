//! Total numeric helpers
//!
//! Every length that enters the engine goes through these, so nothing
//! downstream has to care about NaN, infinities or negative values.

use crate::constants::{INGRESS_SNAP_STEPS, MM_PER_INCH};

/// Non-finite values become zero.
#[inline]
pub fn to_finite(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Negative values become zero. NaN also becomes zero.
#[inline]
pub fn clamp0(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// Finite and non-negative.
#[inline]
pub fn sanitize(value: f64) -> f64 {
    clamp0(to_finite(value))
}

/// Clamp into `[min, max]`. A degenerate range collapses to `min`.
#[inline]
pub fn clamp_range(value: f64, min: f64, max: f64) -> f64 {
    if max <= min {
        return min;
    }
    value.max(min).min(max)
}

/// Round to a fixed number of decimals, half away from zero.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    let rounded = (value * factor).round() / factor;
    // Normalize -0.0 so readouts never print a sign on zero
    if rounded == 0.0 { 0.0 } else { rounded }
}

/// Snap a converted length onto the ingress grid.
pub(crate) fn snap(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    (value * INGRESS_SNAP_STEPS).round() / INGRESS_SNAP_STEPS
}

/// Inches to millimeters
#[inline]
pub fn in_to_mm(inches: f64) -> f64 {
    inches * MM_PER_INCH
}

/// Millimeters to inches
#[inline]
pub fn mm_to_in(mm: f64) -> f64 {
    mm / MM_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_finite() {
        assert_eq!(to_finite(f64::NAN), 0.0);
        assert_eq!(to_finite(f64::INFINITY), 0.0);
        assert_eq!(to_finite(f64::NEG_INFINITY), 0.0);
        assert_eq!(to_finite(-2.5), -2.5);
    }

    #[test]
    fn test_sanitize() {
        assert_eq!(sanitize(-1.0), 0.0);
        assert_eq!(sanitize(f64::NAN), 0.0);
        assert_eq!(sanitize(3.25), 3.25);
    }

    #[test]
    fn test_clamp_range() {
        assert_eq!(clamp_range(-1.0, 0.0, 4.0), 0.0);
        assert_eq!(clamp_range(5.0, 0.0, 4.0), 4.0);
        assert_eq!(clamp_range(2.0, 0.0, 4.0), 2.0);
        assert_eq!(clamp_range(2.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456, 3), 1.235);
        assert_eq!(round_to(88.9, 2), 88.9);
        assert_eq!(round_to(0.5625, 3), 0.563);
        assert_eq!(round_to(-0.0001, 3), 0.0);
        assert!(round_to(-0.0001, 3).is_sign_positive());
    }

    #[test]
    fn test_snap_recovers_inches() {
        // 88.9 / 25.4 is not exactly 3.5 in binary floating point
        assert_eq!(snap(88.9 / MM_PER_INCH), 3.5);
        assert_eq!(snap(304.8 / MM_PER_INCH), 12.0);
        assert_eq!(snap(1.5875 / MM_PER_INCH), 0.0625);
    }
}
