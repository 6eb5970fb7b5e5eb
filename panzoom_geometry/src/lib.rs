// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Geometry: element geometry helpers for pan/zoom surfaces.
//!
//! This crate is the small, pure layer underneath a pan/zoom controller. It
//! knows nothing about transforms or input sessions. It provides:
//! - [`AxisRange`], the clamp primitive used for every axis of a transform.
//! - [`ElementGeometry`], a narrow query trait over a host element tree
//!   (offsets, offset parents, structural parents and sizes).
//! - Free functions that walk that tree: [`cumulative_offset`],
//!   [`position_on_element`], [`is_descendant_of`] and [`surface_center`].
//! - [`ElementArena`], an in-memory element tree for tests and headless hosts.
//!
//! Hosts backed by a real document tree implement [`ElementGeometry`] for a
//! handle to it; the conversion functions stay the same.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use panzoom_geometry::{ElementArena, position_on_element, is_descendant_of};
//!
//! let mut tree = ElementArena::new();
//! let page = tree.push_root(Vec2::ZERO, Size::new(1024.0, 768.0));
//! let panel = tree.push_child(page, Vec2::new(40.0, 20.0), Size::new(600.0, 400.0));
//! let surface = tree.push_child(panel, Vec2::new(10.0, 10.0), Size::new(500.0, 300.0));
//!
//! // Page coordinates become surface-local coordinates.
//! let local = position_on_element(&tree, surface, Point::new(100.0, 80.0));
//! assert_eq!(local, Point::new(50.0, 50.0));
//!
//! assert!(is_descendant_of(&tree, Some(surface), panel));
//! assert!(!is_descendant_of(&tree, Some(panel), surface));
//! ```
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod arena;
mod element;
mod range;

pub use arena::{ElementArena, ElementData, ElementId};
pub use element::{
    ElementGeometry, cumulative_offset, cumulative_offset_iterative, is_descendant_of,
    position_on_element, surface_center,
};
pub use range::AxisRange;
