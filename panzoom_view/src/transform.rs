// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Pan offset and uniform zoom of a surface.
///
/// `x` and `y` are in surface-local pixels; `zoom` is a positive scale
/// factor. A content point `c` is rendered at `(x + c.x * zoom, y + c.y * zoom)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Horizontal pan offset.
    pub x: f64,
    /// Vertical pan offset.
    pub y: f64,
    /// Uniform scale factor.
    pub zoom: f64,
}

impl Transform {
    /// No pan, zoom `1.0`.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        zoom: 1.0,
    };

    /// Creates a transform from its parts.
    #[must_use]
    pub const fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// The pan offset as a vector.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Content → view affine: scale by `zoom`, then translate by the pan.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.pan()) * Affine::scale(self.zoom)
    }

    /// Where a content point is rendered in view coordinates.
    #[must_use]
    pub fn content_to_view_point(&self, pt: Point) -> Point {
        Point::new(self.x + pt.x * self.zoom, self.y + pt.y * self.zoom)
    }

    /// Which content point is rendered at a view point.
    ///
    /// The result is not finite when `zoom` is zero.
    #[must_use]
    pub fn view_to_content_point(&self, pt: Point) -> Point {
        Point::new((pt.x - self.x) / self.zoom, (pt.y - self.y) / self.zoom)
    }

    /// Formatter for the CSS `transform` property value.
    ///
    /// Renders as `translate3D({x}px, {y}px, 0) scale({zoom})`.
    #[must_use]
    pub fn css(&self) -> CssTransform {
        CssTransform(*self)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// [`fmt::Display`] adapter returned by [`Transform::css`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CssTransform(Transform);

impl fmt::Display for CssTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // `-0.0 + 0.0` is `+0.0`, so a zero pan never prints as `-0px`.
        write!(
            f,
            "translate3D({}px, {}px, 0) scale({})",
            self.0.x + 0.0,
            self.0.y + 0.0,
            self.0.zoom + 0.0
        )
    }
}

#[cfg(test)]
mod tests {
    extern crate alloc;

    use alloc::string::ToString;

    use kurbo::Point;

    use super::Transform;

    #[test]
    fn css_uses_shortest_number_form() {
        assert_eq!(
            Transform::new(30.0, 15.0, 1.0).css().to_string(),
            "translate3D(30px, 15px, 0) scale(1)"
        );
        assert_eq!(
            Transform::new(-2.5, 0.125, 1.5).css().to_string(),
            "translate3D(-2.5px, 0.125px, 0) scale(1.5)"
        );
    }

    #[test]
    fn css_never_prints_negative_zero() {
        assert_eq!(
            Transform::new(-0.0, -0.0, 1.0).css().to_string(),
            "translate3D(0px, 0px, 0) scale(1)"
        );
    }

    #[test]
    fn content_view_roundtrip() {
        let t = Transform::new(12.0, -8.0, 2.5);
        let content = Point::new(3.0, 4.0);
        let view = t.content_to_view_point(content);
        assert_eq!(view, Point::new(19.5, 2.0));
        let back = t.view_to_content_point(view);
        assert!((back.x - content.x).abs() < 1e-12);
        assert!((back.y - content.y).abs() < 1e-12);
    }

    #[test]
    fn affine_matches_point_mapping() {
        let t = Transform::new(12.0, -8.0, 2.5);
        let p = Point::new(-7.0, 11.0);
        let a = t.to_affine() * p;
        let b = t.content_to_view_point(p);
        assert!((a.x - b.x).abs() < 1e-12);
        assert!((a.y - b.y).abs() < 1e-12);
    }
}
