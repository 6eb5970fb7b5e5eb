// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom View: clamped pan/zoom transform state.
//!
//! This crate holds the transform half of a pan/zoom surface:
//! - [`Transform`]: the `{x, y, zoom}` triple, its affine form, and a
//!   ready-to-apply CSS transform string.
//! - [`PanZoomBounds`]: per-axis clamp ranges for pan and zoom.
//! - [`PanZoomState`]: the only place a transform is mutated. Every
//!   mutation goes through [`PanZoomState::set_pan`] or
//!   [`PanZoomState::set_zoom`] and is clamped before it is stored.
//! - [`Update`]: lets both mutators accept either a literal value or a
//!   closure over the current value.
//!
//! It does **not** interpret input events; see `panzoom_event_state` and
//! `panzoom_controller` for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use panzoom_view::{PanZoomBounds, PanZoomState, Transform};
//!
//! let mut state = PanZoomState::new(Transform::IDENTITY, PanZoomBounds::default());
//!
//! // Pan by a relative amount.
//! state.set_pan(|pan: Vec2| pan + Vec2::new(30.0, 15.0));
//!
//! // Double the zoom while keeping the view point (100, 100) fixed.
//! let focal = Point::new(100.0, 100.0);
//! let under_focal = state.transform().view_to_content_point(focal);
//! state.set_zoom(|zoom: f64| zoom * 2.0, focal);
//! let after = state.transform().content_to_view_point(under_focal);
//! assert!((after.x - focal.x).abs() < 1e-9);
//! assert!((after.y - focal.y).abs() < 1e-9);
//!
//! assert_eq!(
//!     state.transform().css().to_string(),
//!     "translate3D(-40px, -70px, 0) scale(2)"
//! );
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and anchored at a focal point in view coordinates.
//! - Pan and zoom are clamped independently per axis; clamping the pan can
//!   move the focal point when a bound is hit.
//! - The CSS string assumes `transform-origin: 0 0` on the transformed
//!   element.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod state;
mod transform;
mod update;

pub use bounds::PanZoomBounds;
pub use state::PanZoomState;
pub use transform::{CssTransform, Transform};
pub use update::Update;
