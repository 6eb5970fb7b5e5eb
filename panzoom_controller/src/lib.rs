// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Controller: pan and zoom a surface from mouse, touch, wheel and
//! trackpad-gesture input.
//!
//! [`ViewportController`] ties the lower layers together:
//! - `panzoom_view` owns the clamped `{x, y, zoom}` transform.
//! - `panzoom_event_state` tracks the pan session and post-drag clicks.
//! - `panzoom_geometry` localizes page coordinates against the surface.
//!
//! Hosts translate their native events into [`InputEvent`]s, feed them to
//! [`ViewportController::handle`], honor the returned [`EventResponse`],
//! and apply [`ViewportController::css_transform`] (or the raw
//! [`Transform`]) to the content element.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use panzoom_controller::{Config, InputEvent, PanZoomOptions, ViewportController, WheelInput};
//! use panzoom_geometry::ElementArena;
//!
//! let mut tree = ElementArena::new();
//! let page = tree.push_root(Vec2::ZERO, Size::new(1280.0, 720.0));
//! let surface = tree.push_child(page, Vec2::new(0.0, 0.0), Size::new(800.0, 600.0));
//!
//! let config = Config::new(PanZoomOptions::default()).on_pan_end(|| println!("done"));
//! let mut viewport = ViewportController::new(tree, surface, config)?;
//!
//! // Drag from (100, 100) to (130, 115).
//! let _ = viewport.handle(&InputEvent::MouseDown(Point::new(100.0, 100.0)));
//! let _ = viewport.handle(&InputEvent::MouseMove(Point::new(130.0, 115.0)));
//! let _ = viewport.handle(&InputEvent::MouseUp);
//! assert_eq!(viewport.pan(), Vec2::new(30.0, 15.0));
//!
//! // The click that follows the drag is swallowed.
//! assert!(viewport.handle(&InputEvent::ClickCapture).stop_propagation);
//!
//! // Wheel up zooms in around the cursor.
//! let response = viewport.handle(&InputEvent::Wheel(WheelInput::vertical(
//!     Point::new(400.0, 300.0),
//!     -10.0,
//! )));
//! assert!(response.prevent_default);
//! assert!(viewport.zoom() > 1.0);
//!
//! // Reset the view.
//! viewport.set_pan((0.0, 0.0));
//! viewport.set_zoom(1.0, None);
//! # Ok::<(), panzoom_controller::ConfigError>(())
//! ```
//!
//! ## Logging
//!
//! Session transitions and programmatic changes are logged at `debug`, and
//! per-event deltas at `trace`, through `tracing`. No subscriber is installed
//! by this crate.

mod config;
mod controller;
mod error;
mod event;

pub use config::{Config, PanZoomOptions};
pub use controller::ViewportController;
pub use error::{Axis, ConfigError};
pub use event::{EventResponse, GestureInput, InputEvent, InputKinds, WheelInput};

pub use panzoom_event_state::pan::Pointers;
pub use panzoom_view::{CssTransform, Transform, Update};
