// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Panzoom Event State: interaction state for pan/zoom surfaces.
//!
//! Two small state machines that need to remember something between input
//! events:
//!
//! - [`pan`]: an `Idle`/`Panning` session over a set of contact points that
//!   turns successive pointer sets into averaged pan deltas.
//! - [`click`]: swallows the synthetic click that follows a drag, exactly
//!   once.
//!
//! Neither knows about transforms or element trees; they accept raw pointer
//! positions and report what happened.
//!
//! ## Pan sessions
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use panzoom_event_state::pan::{PanSession, Pointers};
//!
//! let mut session = PanSession::new();
//!
//! // Two fingers touch down.
//! let down: Pointers = [Point::new(0.0, 0.0), Point::new(100.0, 0.0)].into_iter().collect();
//! assert!(session.start(&down));
//!
//! // Both move by (4, 6): the averaged delta is (4, 6), not (8, 12).
//! let moved: Pointers = [Point::new(4.0, 6.0), Point::new(104.0, 6.0)].into_iter().collect();
//! assert_eq!(session.update(&moved), Some(Vec2::new(4.0, 6.0)));
//!
//! assert!(session.end());
//! assert!(!session.is_panning());
//! ```
//!
//! ## Click suppression
//!
//! ```rust
//! use panzoom_event_state::click::ClickSuppressor;
//!
//! let mut clicks = ClickSuppressor::new(true);
//! clicks.on_press();
//! clicks.on_pan();
//! assert!(clicks.on_click()); // swallowed
//! assert!(!clicks.on_click()); // the next one goes through
//! ```
//!
//! This crate is `no_std` compatible.

#![no_std]

pub mod click;
pub mod pan;
