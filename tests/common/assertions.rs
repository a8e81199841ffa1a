//! Assertion utilities for testing.
//!
//! This module provides helper functions for making assertions in tests,
//! particularly for floating-point and color comparisons.

#![allow(dead_code)]

use colorstrip::Rgb;

/// Default epsilon for floating-point comparisons
pub const DEFAULT_EPSILON: f64 = 1e-9;

/// Assert that two floating-point values are approximately equal.
///
/// # Panics
///
/// Panics if the absolute difference between `actual` and `expected` is greater than `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: Option<f64>) {
    let epsilon = epsilon.unwrap_or(DEFAULT_EPSILON);
    let diff = (actual - expected).abs();

    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual = {}, expected = {}, diff = {}, epsilon = {}",
        actual,
        expected,
        diff,
        epsilon
    );
}

/// Assert that two colors are approximately equal channel by channel.
pub fn assert_color_approx_eq(actual: Rgb, expected: Rgb, epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    let channels = [
        ("r", actual.r, expected.r),
        ("g", actual.g, expected.g),
        ("b", actual.b, expected.b),
    ];

    for (name, a, e) in channels {
        assert!(
            (a - e).abs() <= eps,
            "Channel {} differs: actual = {:?}, expected = {:?}, epsilon = {}",
            name,
            actual,
            expected,
            eps
        );
    }
}

/// Assert that every channel of a color lies in `[0, 1]` up to `epsilon`.
pub fn assert_color_in_unit_range(color: Rgb, epsilon: Option<f64>) {
    let eps = epsilon.unwrap_or(DEFAULT_EPSILON);
    for c in [color.r, color.g, color.b] {
        assert!(
            c >= -eps && c <= 1.0 + eps,
            "Color channel out of range: {:?}",
            color
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assert_approx_eq() {
        assert_approx_eq(1.0, 1.0, None);
        assert_approx_eq(1.0, 1.0 + 1e-12, None);
        assert_approx_eq(1.0, 1.001, Some(0.01));
    }

    #[test]
    fn test_assert_color_approx_eq() {
        assert_color_approx_eq(Rgb::new(0.5, 0.5, 0.5), Rgb::MID_GRAY, None);
        assert_color_approx_eq(Rgb::new(0.51, 0.5, 0.5), Rgb::MID_GRAY, Some(0.02));
    }
}
