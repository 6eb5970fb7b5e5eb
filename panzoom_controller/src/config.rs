// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};
use panzoom_geometry::AxisRange;
use panzoom_view::{PanZoomBounds, Transform};

use crate::error::{Axis, ConfigError};

/// Plain-data options of a [`ViewportController`](crate::ViewportController).
///
/// Every field has a default (see [`PanZoomOptions::default`]), so options
/// are usually written as a struct update:
///
/// ```rust
/// use panzoom_controller::PanZoomOptions;
///
/// let options = PanZoomOptions {
///     require_ctrl_to_zoom: true,
///     min_zoom: 0.25,
///     max_zoom: 8.0,
///     ..PanZoomOptions::default()
/// };
/// ```
///
/// With the `serde` feature omitted fields fall back to their defaults. JSON
/// has no infinity, so unbounded ranges are expressed by leaving the bound out
/// (or writing `null`); serialization omits bounds that are unbounded.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PanZoomOptions {
    /// Allow drag/touch panning. Default `true`.
    pub enable_pan: bool,
    /// Allow wheel and trackpad-gesture zooming. Default `true`.
    pub enable_zoom: bool,
    /// Leave wheel events out of the handler bundle. Default `false`.
    pub disable_wheel: bool,
    /// Zoom on wheel only while the precision modifier (ctrl) is held;
    /// otherwise the wheel pans. Default `false`.
    pub require_ctrl_to_zoom: bool,
    /// Include mouse, touch and click handlers in the bundle. Default `true`.
    pub pan_on_drag: bool,
    /// Swallow the click that ends a drag. Default `true`.
    pub prevent_click_on_pan: bool,
    /// Wheel zoom response: each unit of vertical delta scales the zoom by
    /// `1 - zoom_sensitivity`. Must be finite and below `1`. Default `0.01`.
    pub zoom_sensitivity: f64,
    /// Multiplier applied to wheel deltas when the wheel pans. Must be
    /// finite. Default `1.0`.
    pub scroll_pan_sensitivity: f64,
    /// Lower bound of the horizontal pan. Default `-inf`.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "bound_serde::is_neg_inf", deserialize_with = "bound_serde::lower")
    )]
    pub min_x: f64,
    /// Upper bound of the horizontal pan. Default `+inf`.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "bound_serde::is_pos_inf", deserialize_with = "bound_serde::upper")
    )]
    pub max_x: f64,
    /// Lower bound of the vertical pan. Default `-inf`.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "bound_serde::is_neg_inf", deserialize_with = "bound_serde::lower")
    )]
    pub min_y: f64,
    /// Upper bound of the vertical pan. Default `+inf`.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "bound_serde::is_pos_inf", deserialize_with = "bound_serde::upper")
    )]
    pub max_y: f64,
    /// Lower bound of the zoom. Must be `> 0`. Default [`f64::MIN_POSITIVE`].
    pub min_zoom: f64,
    /// Upper bound of the zoom. Default `+inf`.
    #[cfg_attr(
        feature = "serde",
        serde(skip_serializing_if = "bound_serde::is_pos_inf", deserialize_with = "bound_serde::upper")
    )]
    pub max_zoom: f64,
    /// Pan at construction, clamped into bounds. Default `(0, 0)`.
    pub initial_pan: Vec2,
    /// Zoom at construction, clamped into bounds. Default `1.0`.
    pub initial_zoom: f64,
}

impl Default for PanZoomOptions {
    fn default() -> Self {
        Self {
            enable_pan: true,
            enable_zoom: true,
            disable_wheel: false,
            require_ctrl_to_zoom: false,
            pan_on_drag: true,
            prevent_click_on_pan: true,
            zoom_sensitivity: 0.01,
            scroll_pan_sensitivity: 1.0,
            min_x: f64::NEG_INFINITY,
            max_x: f64::INFINITY,
            min_y: f64::NEG_INFINITY,
            max_y: f64::INFINITY,
            min_zoom: f64::MIN_POSITIVE,
            max_zoom: f64::INFINITY,
            initial_pan: Vec2::ZERO,
            initial_zoom: 1.0,
        }
    }
}

impl PanZoomOptions {
    /// Checks the options and derives the clamp ranges.
    pub fn validate(&self) -> Result<PanZoomBounds, ConfigError> {
        let x = range(Axis::X, self.min_x, self.max_x)?;
        let y = range(Axis::Y, self.min_y, self.max_y)?;
        let zoom = range(Axis::Zoom, self.min_zoom, self.max_zoom)?;
        if zoom.min <= 0.0 {
            return Err(ConfigError::NonPositiveMinZoom(zoom.min));
        }
        if !self.zoom_sensitivity.is_finite() || self.zoom_sensitivity >= 1.0 {
            return Err(ConfigError::InvalidSensitivity {
                name: "zoom_sensitivity",
                value: self.zoom_sensitivity,
            });
        }
        if !self.scroll_pan_sensitivity.is_finite() {
            return Err(ConfigError::InvalidSensitivity {
                name: "scroll_pan_sensitivity",
                value: self.scroll_pan_sensitivity,
            });
        }
        Ok(PanZoomBounds { x, y, zoom })
    }

    /// The initial transform before clamping.
    #[must_use]
    pub fn initial_transform(&self) -> Transform {
        Transform::new(self.initial_pan.x, self.initial_pan.y, self.initial_zoom)
    }
}

#[cfg(feature = "serde")]
mod bound_serde {
    use serde::{Deserialize, Deserializer};

    pub(super) fn is_neg_inf(v: &f64) -> bool {
        *v == f64::NEG_INFINITY
    }

    pub(super) fn is_pos_inf(v: &f64) -> bool {
        *v == f64::INFINITY
    }

    /// Lower bound; `null` means unbounded.
    pub(super) fn lower<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::NEG_INFINITY))
    }

    /// Upper bound; `null` means unbounded.
    pub(super) fn upper<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
        Ok(Option::<f64>::deserialize(d)?.unwrap_or(f64::INFINITY))
    }
}

fn range(axis: Axis, min: f64, max: f64) -> Result<AxisRange, ConfigError> {
    let r = AxisRange::new(min, max);
    if r.is_valid() {
        Ok(r)
    } else {
        Err(ConfigError::InvalidRange { axis })
    }
}

type PointersHook = Box<dyn FnMut(&[Point])>;
type Hook = Box<dyn FnMut()>;
type TransformHook = Box<dyn FnMut(&Transform)>;

/// Outward lifecycle hooks.
#[derive(Default)]
pub(crate) struct Callbacks {
    pub(crate) on_pan_start: Option<PointersHook>,
    pub(crate) on_pan: Option<PointersHook>,
    pub(crate) on_pan_end: Option<Hook>,
    pub(crate) on_zoom: Option<Hook>,
    pub(crate) on_transform: Option<TransformHook>,
}

impl Callbacks {
    pub(crate) fn pan_start(&mut self, pointers: &[Point]) {
        if let Some(hook) = self.on_pan_start.as_mut() {
            hook(pointers);
        }
    }

    pub(crate) fn pan(&mut self, pointers: &[Point]) {
        if let Some(hook) = self.on_pan.as_mut() {
            hook(pointers);
        }
    }

    pub(crate) fn pan_end(&mut self) {
        if let Some(hook) = self.on_pan_end.as_mut() {
            hook();
        }
    }

    pub(crate) fn zoom(&mut self) {
        if let Some(hook) = self.on_zoom.as_mut() {
            hook();
        }
    }

    pub(crate) fn transform(&mut self, transform: &Transform) {
        if let Some(hook) = self.on_transform.as_mut() {
            hook(transform);
        }
    }
}

impl fmt::Debug for Callbacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callbacks")
            .field("on_pan_start", &self.on_pan_start.is_some())
            .field("on_pan", &self.on_pan.is_some())
            .field("on_pan_end", &self.on_pan_end.is_some())
            .field("on_zoom", &self.on_zoom.is_some())
            .field("on_transform", &self.on_transform.is_some())
            .finish()
    }
}

/// Options plus lifecycle callbacks, consumed by
/// [`ViewportController::new`](crate::ViewportController::new).
///
/// ```rust
/// use panzoom_controller::{Config, PanZoomOptions};
///
/// let config = Config::new(PanZoomOptions::default())
///     .on_pan_start(|pointers| println!("pan started with {} pointer(s)", pointers.len()))
///     .on_pan_end(|| println!("pan ended"));
/// ```
#[derive(Debug, Default)]
pub struct Config {
    pub(crate) options: PanZoomOptions,
    pub(crate) callbacks: Callbacks,
}

impl Config {
    /// Creates a configuration without callbacks.
    #[must_use]
    pub fn new(options: PanZoomOptions) -> Self {
        Self {
            options,
            callbacks: Callbacks::default(),
        }
    }

    /// The plain-data options.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// Called with the initiating pointers when a pan session starts.
    #[must_use]
    pub fn on_pan_start(mut self, f: impl FnMut(&[Point]) + 'static) -> Self {
        self.callbacks.on_pan_start = Some(Box::new(f));
        self
    }

    /// Called with the current pointers after each pan movement.
    #[must_use]
    pub fn on_pan(mut self, f: impl FnMut(&[Point]) + 'static) -> Self {
        self.callbacks.on_pan = Some(Box::new(f));
        self
    }

    /// Called when a pan session ends.
    #[must_use]
    pub fn on_pan_end(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_pan_end = Some(Box::new(f));
        self
    }

    /// Called after every wheel or gesture zoom.
    #[must_use]
    pub fn on_zoom(mut self, f: impl FnMut() + 'static) -> Self {
        self.callbacks.on_zoom = Some(Box::new(f));
        self
    }

    /// Called with the new transform whenever it changes, from any source.
    #[must_use]
    pub fn on_transform(mut self, f: impl FnMut(&Transform) + 'static) -> Self {
        self.callbacks.on_transform = Some(Box::new(f));
        self
    }
}

impl From<PanZoomOptions> for Config {
    fn from(options: PanZoomOptions) -> Self {
        Self::new(options)
    }
}
