// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Point, Vec2};
use panzoom_event_state::click::ClickSuppressor;
use panzoom_event_state::pan::PanSession;
use panzoom_geometry::{ElementGeometry, is_descendant_of, position_on_element, surface_center};
use panzoom_view::{CssTransform, PanZoomState, Transform, Update};
use tracing::{debug, trace};

use crate::config::{Callbacks, Config, PanZoomOptions};
use crate::error::ConfigError;
use crate::event::{EventResponse, GestureInput, InputEvent, InputKinds, WheelInput};

/// Pan/zoom controller for one surface element.
///
/// The controller owns the transform state, the pan session and the
/// click-suppression flag of a single surface. Input reaches it either
/// through [`handle`](Self::handle), which respects the handler bundle
/// reported by [`handlers`](Self::handlers), or through the individual
/// `on_*` methods. Programmatic changes go through [`set_pan`](Self::set_pan)
/// and [`set_zoom`](Self::set_zoom).
///
/// `G` is the host's element geometry; the controller queries it for the
/// surface's page offset (to localize wheel and gesture positions), its size
/// (default zoom focal point) and its subtree (mouse-leave filtering).
pub struct ViewportController<G: ElementGeometry> {
    geometry: G,
    surface: G::Node,
    options: PanZoomOptions,
    callbacks: Callbacks,
    state: PanZoomState,
    session: PanSession,
    clicks: ClickSuppressor,
    gesture_start_zoom: f64,
}

impl<G: ElementGeometry> ViewportController<G> {
    /// Creates a controller for `surface`.
    ///
    /// Fails if `surface` is not an element of `geometry` or if the options
    /// are inconsistent. The initial transform is clamped into the bounds.
    pub fn new(
        geometry: G,
        surface: G::Node,
        config: impl Into<Config>,
    ) -> Result<Self, ConfigError> {
        if !geometry.contains(surface) {
            return Err(ConfigError::SurfaceNotFound);
        }
        let Config { options, callbacks } = config.into();
        let bounds = options.validate()?;
        let state = PanZoomState::new(options.initial_transform(), bounds);
        let t = state.transform();
        debug!(x = t.x, y = t.y, zoom = t.zoom, "viewport controller created");
        Ok(Self {
            geometry,
            surface,
            clicks: ClickSuppressor::new(options.prevent_click_on_pan),
            options,
            callbacks,
            gesture_start_zoom: t.zoom,
            state,
            session: PanSession::new(),
        })
    }

    /// The current clamped transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.state.transform()
    }

    /// The current pan offset.
    #[must_use]
    pub fn pan(&self) -> Vec2 {
        self.state.pan()
    }

    /// The current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom()
    }

    /// The current transform as a CSS `transform` value.
    #[must_use]
    pub fn css_transform(&self) -> CssTransform {
        self.state.transform().css()
    }

    /// Content point currently shown at the middle of the surface.
    #[must_use]
    pub fn center(&self) -> Point {
        self.state
            .view_center_in_content(self.geometry.size(self.surface))
    }

    /// Returns `true` while a pan session is active.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.session.is_panning()
    }

    /// Number of transform changes so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.state.revision()
    }

    /// The options this controller was built with.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// The surface element.
    #[must_use]
    pub fn surface(&self) -> G::Node {
        self.surface
    }

    /// The element geometry.
    #[must_use]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Mutable access to the element geometry, for hosts that own it.
    pub fn geometry_mut(&mut self) -> &mut G {
        &mut self.geometry
    }

    /// Event kinds the host should attach to the surface.
    ///
    /// - Drag kinds (mouse, touch, click capture) when both `pan_on_drag`
    ///   and `enable_pan` are set.
    /// - Wheel when `enable_zoom` is set and `disable_wheel` is not.
    /// - Gestures when `enable_zoom` is set.
    #[must_use]
    pub fn handlers(&self) -> InputKinds {
        let mut kinds = InputKinds::empty();
        if self.options.pan_on_drag && self.options.enable_pan {
            kinds |= InputKinds::DRAG;
        }
        if self.options.enable_zoom {
            kinds |= InputKinds::GESTURE;
            if !self.options.disable_wheel {
                kinds |= InputKinds::WHEEL;
            }
        }
        kinds
    }

    /// Sets the pan, clamped per axis. The zoom is unchanged.
    ///
    /// Returns `true` if the transform changed.
    pub fn set_pan(&mut self, update: impl Update<Vec2>) -> bool {
        let changed = self.state.set_pan(update);
        if changed {
            let t = self.state.transform();
            debug!(x = t.x, y = t.y, "pan set");
            self.callbacks.transform(&t);
        }
        changed
    }

    /// Sets the zoom, keeping `focal` (surface-local) visually fixed.
    ///
    /// Without a focal point the center of the surface's bounding box is
    /// used. Returns `true` if the transform changed.
    pub fn set_zoom(&mut self, update: impl Update<f64>, focal: Option<Point>) -> bool {
        let focal = focal.unwrap_or_else(|| surface_center(&self.geometry, self.surface));
        let changed = self.state.set_zoom(update, focal);
        if changed {
            let t = self.state.transform();
            debug!(x = t.x, y = t.y, zoom = t.zoom, "zoom set");
            self.callbacks.transform(&t);
        }
        changed
    }

    /// Routes a normalized event to its handler.
    ///
    /// Kinds outside [`handlers`](Self::handlers) are ignored.
    pub fn handle(&mut self, event: &InputEvent<G::Node>) -> EventResponse {
        if !self.handlers().contains(event.kind()) {
            return EventResponse::IGNORED;
        }
        match event {
            InputEvent::MouseDown(page) => {
                self.on_mouse_down(*page);
                EventResponse::IGNORED
            }
            InputEvent::MouseMove(page) => {
                self.on_mouse_move(*page);
                EventResponse::IGNORED
            }
            InputEvent::MouseUp => {
                self.on_mouse_up();
                EventResponse::IGNORED
            }
            InputEvent::MouseLeave { related } => {
                self.on_mouse_leave(*related);
                EventResponse::IGNORED
            }
            InputEvent::TouchStart(pointers) => {
                self.on_touch_start(pointers);
                EventResponse::IGNORED
            }
            InputEvent::TouchMove(pointers) => {
                self.on_touch_move(pointers);
                EventResponse::IGNORED
            }
            InputEvent::TouchEnd => {
                self.on_touch_end();
                EventResponse::IGNORED
            }
            InputEvent::TouchCancel => {
                self.on_touch_cancel();
                EventResponse::IGNORED
            }
            InputEvent::Wheel(wheel) => self.on_wheel(wheel),
            InputEvent::GestureStart(gesture) => self.on_gesture_start(gesture),
            InputEvent::GestureChange(gesture) => self.on_gesture_change(gesture),
            InputEvent::GestureEnd(gesture) => self.on_gesture_end(gesture),
            InputEvent::ClickCapture => self.on_click_capture(),
        }
    }

    /// Mouse button pressed at `page`.
    pub fn on_mouse_down(&mut self, page: Point) {
        self.start_pan(&[page]);
    }

    /// Mouse moved to `page`.
    pub fn on_mouse_move(&mut self, page: Point) {
        self.move_pan(&[page]);
    }

    /// Mouse button released.
    pub fn on_mouse_up(&mut self) {
        self.end_pan();
    }

    /// Mouse left the surface for `related`.
    ///
    /// Moving onto an element inside the surface keeps the session alive.
    pub fn on_mouse_leave(&mut self, related: Option<G::Node>) {
        if is_descendant_of(&self.geometry, related, self.surface) {
            return;
        }
        self.end_pan();
    }

    /// Touch contacts went down; `pointers` lists every active contact.
    pub fn on_touch_start(&mut self, pointers: &[Point]) {
        self.start_pan(pointers);
    }

    /// Touch contacts moved; `pointers` lists every active contact.
    pub fn on_touch_move(&mut self, pointers: &[Point]) {
        self.move_pan(pointers);
    }

    /// A touch contact lifted.
    pub fn on_touch_end(&mut self) {
        self.end_pan();
    }

    /// The touch sequence was cancelled.
    pub fn on_touch_cancel(&mut self) {
        self.end_pan();
    }

    /// Capture-phase click. Swallows one click after a drag.
    pub fn on_click_capture(&mut self) -> EventResponse {
        if self.clicks.on_click() {
            debug!("click after pan suppressed");
            EventResponse::STOP_PROPAGATION
        } else {
            EventResponse::IGNORED
        }
    }

    /// Wheel input.
    ///
    /// Zooms by `(1 - zoom_sensitivity) ^ delta.y` around the cursor. When
    /// `require_ctrl_to_zoom` is set and ctrl is not held, pans by
    /// `-delta * scroll_pan_sensitivity` instead (if panning is enabled).
    pub fn on_wheel(&mut self, wheel: &WheelInput) -> EventResponse {
        if !self.options.enable_zoom {
            return EventResponse::IGNORED;
        }

        if !self.options.require_ctrl_to_zoom || wheel.ctrl {
            let local = position_on_element(&self.geometry, self.surface, wheel.page);
            let factor = (1.0 - self.options.zoom_sensitivity).powf(wheel.delta.y);
            let changed = self.state.set_zoom(|zoom: f64| zoom * factor, local);
            trace!(
                delta_y = wheel.delta.y,
                zoom = self.state.zoom(),
                local_x = local.x,
                local_y = local.y,
                "wheel zoom"
            );
            self.after_zoom(changed);
        } else if self.options.enable_pan {
            let delta = -wheel.delta * self.options.scroll_pan_sensitivity;
            if self.state.pan_by(delta) {
                trace!(dx = delta.x, dy = delta.y, "wheel pan");
                self.callbacks.transform(&self.state.transform());
            }
        }
        EventResponse::PREVENT_DEFAULT
    }

    /// Trackpad pinch began; remembers the zoom to scale from.
    pub fn on_gesture_start(&mut self, _gesture: &GestureInput) -> EventResponse {
        if !self.options.enable_zoom {
            return EventResponse::IGNORED;
        }
        self.gesture_start_zoom = self.state.zoom();
        trace!(zoom = self.gesture_start_zoom, "gesture start");
        EventResponse::PREVENT_DEFAULT
    }

    /// Trackpad pinch changed.
    pub fn on_gesture_change(&mut self, gesture: &GestureInput) -> EventResponse {
        self.gesture_zoom(gesture)
    }

    /// Trackpad pinch finished; applies the final scale.
    pub fn on_gesture_end(&mut self, gesture: &GestureInput) -> EventResponse {
        self.gesture_zoom(gesture)
    }

    fn gesture_zoom(&mut self, gesture: &GestureInput) -> EventResponse {
        if !self.options.enable_zoom {
            return EventResponse::IGNORED;
        }
        let local = position_on_element(&self.geometry, self.surface, gesture.page);
        let changed = self
            .state
            .set_zoom(self.gesture_start_zoom * gesture.scale, local);
        trace!(scale = gesture.scale, zoom = self.state.zoom(), "gesture zoom");
        self.after_zoom(changed);
        EventResponse::PREVENT_DEFAULT
    }

    fn after_zoom(&mut self, changed: bool) {
        if changed {
            self.callbacks.transform(&self.state.transform());
        }
        self.callbacks.zoom();
    }

    fn start_pan(&mut self, pointers: &[Point]) {
        if !self.options.enable_pan {
            return;
        }
        // Extra contacts joining an active pan keep the click flag.
        if self.session.start(pointers) {
            self.clicks.on_press();
        }
        debug!(pointers = pointers.len(), "pan started");
        self.callbacks.pan_start(pointers);
    }

    fn move_pan(&mut self, pointers: &[Point]) {
        let Some(delta) = self.session.update(pointers) else {
            return;
        };
        self.clicks.on_pan();
        if self.state.pan_by(delta) {
            self.callbacks.transform(&self.state.transform());
        }
        trace!(dx = delta.x, dy = delta.y, pointers = pointers.len(), "pan moved");
        self.callbacks.pan(pointers);
    }

    fn end_pan(&mut self) {
        if self.session.end() {
            debug!("pan ended");
            self.callbacks.pan_end();
        }
    }
}

impl<G> fmt::Debug for ViewportController<G>
where
    G: ElementGeometry + fmt::Debug,
    G::Node: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportController")
            .field("geometry", &self.geometry)
            .field("surface", &self.surface)
            .field("options", &self.options)
            .field("callbacks", &self.callbacks)
            .field("state", &self.state)
            .field("session", &self.session)
            .field("clicks", &self.clicks)
            .field("gesture_start_zoom", &self.gesture_start_zoom)
            .finish()
    }
}
