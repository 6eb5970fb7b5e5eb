// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Closed interval used to clamp a single axis of a transform.
///
/// Bounds may be infinite; [`AxisRange::UNBOUNDED`] leaves every finite
/// value untouched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisRange {
    /// Smallest allowed value.
    pub min: f64,
    /// Largest allowed value.
    pub max: f64,
}

impl AxisRange {
    /// The range `(-inf, +inf)`.
    pub const UNBOUNDED: Self = Self {
        min: f64::NEG_INFINITY,
        max: f64::INFINITY,
    };

    /// Creates a range from two bounds, normalized so that `min <= max`.
    #[must_use]
    pub fn new(a: f64, b: f64) -> Self {
        if a <= b {
            Self { min: a, max: b }
        } else {
            Self { min: b, max: a }
        }
    }

    /// Clamps `value` into the range.
    ///
    /// Unlike [`f64::clamp`] this never panics; a NaN `value` is returned
    /// as-is so callers can decide how to treat it.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies inside the range (bounds included).
    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Returns `true` if neither bound is NaN.
    #[must_use]
    pub fn is_valid(self) -> bool {
        !self.min.is_nan() && !self.max.is_nan()
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}
