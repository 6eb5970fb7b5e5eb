// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::{PanZoomBounds, Transform, Update};

/// Owner of a clamped [`Transform`].
///
/// `PanZoomState` is the single mutation point for pan and zoom:
/// - [`set_pan`](Self::set_pan) replaces or derives the pan and clamps each axis.
/// - [`set_zoom`](Self::set_zoom) replaces or derives the zoom, clamps it, and
///   re-pans so a focal point keeps its on-screen position.
///
/// After every call the transform lies inside the configured
/// [`PanZoomBounds`]. A revision counter is bumped whenever the stored
/// transform actually changes, so observers can cheaply detect updates.
#[derive(Clone, Debug)]
pub struct PanZoomState {
    transform: Transform,
    bounds: PanZoomBounds,
    revision: u64,
}

impl PanZoomState {
    /// Creates a state from an initial transform, clamped into `bounds`.
    #[must_use]
    pub fn new(initial: Transform, bounds: PanZoomBounds) -> Self {
        let mut transform = bounds.clamp_transform(initial);
        // Keep the identity defaults for components that are not finite
        // after clamping.
        if !transform.x.is_finite() {
            transform.x = bounds.x.clamp(0.0);
        }
        if !transform.y.is_finite() {
            transform.y = bounds.y.clamp(0.0);
        }
        if !transform.zoom.is_finite() {
            transform.zoom = bounds.zoom.clamp(1.0);
        }
        Self {
            transform,
            bounds,
            revision: 0,
        }
    }

    /// The current clamped transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// The current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.transform.pan()
    }

    /// The current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.transform.zoom
    }

    /// The active clamp ranges.
    #[must_use]
    pub fn bounds(&self) -> PanZoomBounds {
        self.bounds
    }

    /// Number of changes applied to the transform so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the clamp ranges and re-clamps the current transform.
    ///
    /// Returns `true` if the transform changed.
    pub fn set_bounds(&mut self, bounds: PanZoomBounds) -> bool {
        self.bounds = bounds;
        let next = bounds.clamp_transform(self.transform);
        self.commit(next)
    }

    /// Sets the pan offset, clamping each axis independently.
    ///
    /// The zoom is left untouched. An axis whose clamped result is not
    /// finite keeps its current value. Returns `true` if the transform
    /// changed.
    pub fn set_pan(&mut self, update: impl Update<Vec2>) -> bool {
        let current = self.transform.pan();
        let wanted = update.apply(current);
        let x = finite_or(self.bounds.x.clamp(wanted.x), current.x);
        let y = finite_or(self.bounds.y.clamp(wanted.y), current.y);
        self.commit(Transform::new(x, y, self.transform.zoom))
    }

    /// Pans by a relative offset.
    pub fn pan_by(&mut self, delta: Vec2) -> bool {
        if delta == Vec2::ZERO {
            return false;
        }
        self.set_pan(|pan: Vec2| pan + delta)
    }

    /// Sets the zoom factor, anchored at `focal` (view coordinates).
    ///
    /// The new zoom is clamped into the zoom range and the pan is adjusted
    /// so the content under `focal` stays under `focal`:
    ///
    /// ```text
    /// x' = clamp_x(x + (focal.x - x) * (zoom - zoom') / zoom)
    /// y' = clamp_y(y + (focal.y - y) * (zoom - zoom') / zoom)
    /// ```
    ///
    /// A zoom that is NaN or infinite after clamping is ignored, and an axis
    /// whose new pan is not finite keeps its current value. If the current
    /// zoom is not strictly positive the pan is left as-is. Returns `true`
    /// if the transform changed.
    pub fn set_zoom(&mut self, update: impl Update<f64>, focal: Point) -> bool {
        let Transform { x, y, zoom } = self.transform;
        let new_zoom = self.bounds.zoom.clamp(update.apply(zoom));
        if !new_zoom.is_finite() {
            return false;
        }
        if zoom <= 0.0 {
            return self.commit(Transform::new(x, y, new_zoom));
        }

        let ratio = (zoom - new_zoom) / zoom;
        let new_x = self.bounds.x.clamp(x + (focal.x - x) * ratio);
        let new_y = self.bounds.y.clamp(y + (focal.y - y) * ratio);
        self.commit(Transform::new(
            finite_or(new_x, x),
            finite_or(new_y, y),
            new_zoom,
        ))
    }

    /// Content point currently shown at the middle of a view of `view_size`.
    #[must_use]
    pub fn view_center_in_content(&self, view_size: Size) -> Point {
        let Transform { x, y, zoom } = self.transform;
        Point::new(
            (view_size.width / 2.0 - x) / zoom,
            (view_size.height / 2.0 - y) / zoom,
        )
    }

    fn commit(&mut self, next: Transform) -> bool {
        if next == self.transform {
            return false;
        }
        self.transform = next;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

impl Default for PanZoomState {
    fn default() -> Self {
        Self::new(Transform::IDENTITY, PanZoomBounds::DEFAULT)
    }
}

fn finite_or(value: f64, fallback: f64) -> f64 {
    if value.is_finite() { value } else { fallback }
}
