// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Vec2};
use panzoom_event_state::pan::Pointers;

/// Wheel input in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Cursor position.
    pub page: Point,
    /// Scroll delta; `y` drives zoom, both axes drive wheel panning.
    pub delta: Vec2,
    /// Whether the precision modifier (ctrl) is held.
    pub ctrl: bool,
}

impl WheelInput {
    /// Vertical-only wheel input without modifier.
    #[must_use]
    pub fn vertical(page: Point, delta_y: f64) -> Self {
        Self {
            page,
            delta: Vec2::new(0.0, delta_y),
            ctrl: false,
        }
    }

    /// Returns the same input with the modifier flag set to `ctrl`.
    #[must_use]
    pub fn with_ctrl(mut self, ctrl: bool) -> Self {
        self.ctrl = ctrl;
        self
    }
}

/// Trackpad gesture input in page coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureInput {
    /// Gesture focal position.
    pub page: Point,
    /// Scale relative to the start of the gesture.
    pub scale: f64,
}

/// A host input event, normalized.
///
/// Adapters for a concrete event source translate native events into this
/// record; the controller never sees host-specific event shapes. `N` is the
/// host's element handle, used to tell where a leaving pointer went.
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent<N> {
    /// Mouse button pressed.
    MouseDown(Point),
    /// Mouse moved.
    MouseMove(Point),
    /// Mouse button released.
    MouseUp,
    /// Mouse left the surface; `related` is the element it entered.
    MouseLeave {
        /// Element the pointer moved onto, if known.
        related: Option<N>,
    },
    /// Contacts at the time of a touch start, in order.
    TouchStart(Pointers),
    /// Contacts after a touch move, in order.
    TouchMove(Pointers),
    /// A contact lifted.
    TouchEnd,
    /// The platform cancelled the touch sequence.
    TouchCancel,
    /// Wheel or two-finger scroll.
    Wheel(WheelInput),
    /// Trackpad pinch began.
    GestureStart(GestureInput),
    /// Trackpad pinch changed.
    GestureChange(GestureInput),
    /// Trackpad pinch finished.
    GestureEnd(GestureInput),
    /// A click in the capture phase.
    ClickCapture,
}

impl<N> InputEvent<N> {
    /// The kind flag of this event.
    #[must_use]
    pub fn kind(&self) -> InputKinds {
        match self {
            Self::MouseDown(_) => InputKinds::MOUSE_DOWN,
            Self::MouseMove(_) => InputKinds::MOUSE_MOVE,
            Self::MouseUp => InputKinds::MOUSE_UP,
            Self::MouseLeave { .. } => InputKinds::MOUSE_LEAVE,
            Self::TouchStart(_) => InputKinds::TOUCH_START,
            Self::TouchMove(_) => InputKinds::TOUCH_MOVE,
            Self::TouchEnd => InputKinds::TOUCH_END,
            Self::TouchCancel => InputKinds::TOUCH_CANCEL,
            Self::Wheel(_) => InputKinds::WHEEL,
            Self::GestureStart(_) => InputKinds::GESTURE_START,
            Self::GestureChange(_) => InputKinds::GESTURE_CHANGE,
            Self::GestureEnd(_) => InputKinds::GESTURE_END,
            Self::ClickCapture => InputKinds::CLICK_CAPTURE,
        }
    }

    /// Touch start with the given contacts.
    #[must_use]
    pub fn touch_start(points: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchStart(points.into_iter().collect())
    }

    /// Touch move with the given contacts.
    #[must_use]
    pub fn touch_move(points: impl IntoIterator<Item = Point>) -> Self {
        Self::TouchMove(points.into_iter().collect())
    }
}

bitflags::bitflags! {
    /// Set of input event kinds, used to describe the handler bundle a host
    /// should attach to the surface.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct InputKinds: u16 {
        /// [`InputEvent::MouseDown`].
        const MOUSE_DOWN     = 1 << 0;
        /// [`InputEvent::MouseMove`].
        const MOUSE_MOVE     = 1 << 1;
        /// [`InputEvent::MouseUp`].
        const MOUSE_UP       = 1 << 2;
        /// [`InputEvent::MouseLeave`].
        const MOUSE_LEAVE    = 1 << 3;
        /// [`InputEvent::TouchStart`].
        const TOUCH_START    = 1 << 4;
        /// [`InputEvent::TouchMove`].
        const TOUCH_MOVE     = 1 << 5;
        /// [`InputEvent::TouchEnd`].
        const TOUCH_END      = 1 << 6;
        /// [`InputEvent::TouchCancel`].
        const TOUCH_CANCEL   = 1 << 7;
        /// [`InputEvent::Wheel`].
        const WHEEL          = 1 << 8;
        /// [`InputEvent::GestureStart`].
        const GESTURE_START  = 1 << 9;
        /// [`InputEvent::GestureChange`].
        const GESTURE_CHANGE = 1 << 10;
        /// [`InputEvent::GestureEnd`].
        const GESTURE_END    = 1 << 11;
        /// [`InputEvent::ClickCapture`].
        const CLICK_CAPTURE  = 1 << 12;

        /// Everything that drives drag panning, including click suppression.
        const DRAG = Self::MOUSE_DOWN.bits()
            | Self::MOUSE_MOVE.bits()
            | Self::MOUSE_UP.bits()
            | Self::MOUSE_LEAVE.bits()
            | Self::TOUCH_START.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits()
            | Self::TOUCH_CANCEL.bits()
            | Self::CLICK_CAPTURE.bits();
        /// Trackpad pinch gestures.
        const GESTURE = Self::GESTURE_START.bits()
            | Self::GESTURE_CHANGE.bits()
            | Self::GESTURE_END.bits();
    }
}

/// What the host should do with the native event after handling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[must_use]
pub struct EventResponse {
    /// Stop the event from reaching other listeners.
    pub stop_propagation: bool,
    /// Suppress the platform default action (page scroll, page zoom).
    pub prevent_default: bool,
}

impl EventResponse {
    /// Nothing to do.
    pub const IGNORED: Self = Self {
        stop_propagation: false,
        prevent_default: false,
    };
    /// Suppress the default action only.
    pub const PREVENT_DEFAULT: Self = Self {
        stop_propagation: false,
        prevent_default: true,
    };
    /// Stop propagation only.
    pub const STOP_PROPAGATION: Self = Self {
        stop_propagation: true,
        prevent_default: false,
    };
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{InputEvent, InputKinds, WheelInput};

    #[test]
    fn kinds_are_distinct() {
        let events: [InputEvent<u32>; 5] = [
            InputEvent::MouseDown(Point::ZERO),
            InputEvent::MouseLeave { related: Some(3) },
            InputEvent::touch_move([Point::ZERO]),
            InputEvent::Wheel(WheelInput::vertical(Point::ZERO, 1.0)),
            InputEvent::ClickCapture,
        ];
        let mut seen = InputKinds::empty();
        for e in &events {
            assert!(!seen.intersects(e.kind()), "duplicate kind {:?}", e.kind());
            seen |= e.kind();
        }
    }

    #[test]
    fn drag_group_excludes_zoom_inputs() {
        assert!(InputKinds::DRAG.contains(InputKinds::CLICK_CAPTURE));
        assert!(!InputKinds::DRAG.intersects(InputKinds::WHEEL | InputKinds::GESTURE));
    }

    #[test]
    fn touch_helpers_collect_points() {
        let e: InputEvent<u32> = InputEvent::touch_start([Point::new(1.0, 2.0), Point::new(3.0, 4.0)]);
        match e {
            InputEvent::TouchStart(p) => assert_eq!(p.len(), 2),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn wheel_builder_sets_modifier() {
        let w = WheelInput::vertical(Point::new(5.0, 5.0), -3.0).with_ctrl(true);
        assert!(w.ctrl);
        assert_eq!(w.delta.y, -3.0);
        assert_eq!(w.delta.x, 0.0);
    }
}
