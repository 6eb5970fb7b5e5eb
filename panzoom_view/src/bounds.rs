// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use panzoom_geometry::AxisRange;

use crate::Transform;

/// Clamp ranges for every component of a [`Transform`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PanZoomBounds {
    /// Allowed horizontal pan.
    pub x: AxisRange,
    /// Allowed vertical pan.
    pub y: AxisRange,
    /// Allowed zoom factors.
    pub zoom: AxisRange,
}

impl PanZoomBounds {
    /// Unbounded pan, zoom restricted to strictly positive values.
    pub const DEFAULT: Self = Self {
        x: AxisRange::UNBOUNDED,
        y: AxisRange::UNBOUNDED,
        zoom: AxisRange {
            min: f64::MIN_POSITIVE,
            max: f64::INFINITY,
        },
    };

    /// Clamps both pan axes independently.
    #[must_use]
    pub fn clamp_pan(&self, pan: Vec2) -> Vec2 {
        Vec2::new(self.x.clamp(pan.x), self.y.clamp(pan.y))
    }

    /// Clamps a zoom factor.
    #[must_use]
    pub fn clamp_zoom(&self, zoom: f64) -> f64 {
        self.zoom.clamp(zoom)
    }

    /// Clamps every component of `t`.
    #[must_use]
    pub fn clamp_transform(&self, t: Transform) -> Transform {
        Transform::new(self.x.clamp(t.x), self.y.clamp(t.y), self.zoom.clamp(t.zoom))
    }

    /// Returns `true` if `t` satisfies every range.
    #[must_use]
    pub fn contains(&self, t: &Transform) -> bool {
        self.x.contains(t.x) && self.y.contains(t.y) && self.zoom.contains(t.zoom)
    }
}

impl Default for PanZoomBounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Vec2;
    use panzoom_geometry::AxisRange;

    use super::PanZoomBounds;
    use crate::Transform;

    #[test]
    fn axes_clamp_independently() {
        let b = PanZoomBounds {
            x: AxisRange::new(-10.0, 10.0),
            y: AxisRange::new(0.0, 100.0),
            ..PanZoomBounds::DEFAULT
        };
        assert_eq!(b.clamp_pan(Vec2::new(50.0, 50.0)), Vec2::new(10.0, 50.0));
        assert_eq!(b.clamp_pan(Vec2::new(-5.0, -1.0)), Vec2::new(-5.0, 0.0));
    }

    #[test]
    fn default_zoom_floor_is_positive() {
        let b = PanZoomBounds::default();
        assert!(b.clamp_zoom(0.0) > 0.0);
        assert!(b.clamp_zoom(-3.0) > 0.0);
        assert_eq!(b.clamp_zoom(1e9), 1e9);
    }

    #[test]
    fn clamp_transform_lands_inside() {
        let b = PanZoomBounds {
            x: AxisRange::new(0.0, 1.0),
            y: AxisRange::new(0.0, 1.0),
            zoom: AxisRange::new(0.5, 2.0),
        };
        let t = b.clamp_transform(Transform::new(-4.0, 9.0, 10.0));
        assert_eq!(t, Transform::new(0.0, 1.0, 2.0));
        assert!(b.contains(&t));
    }
}
