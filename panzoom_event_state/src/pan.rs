// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pan session: turn successive contact-point sets into pan deltas.
//!
//! ## Usage
//!
//! 1) Start a session with [`PanSession::start`] and the initiating pointer set
//!    (one point for a mouse, one per finger for touch).
//! 2) On each move event, call [`PanSession::update`] to get the averaged
//!    movement since the previous set.
//! 3) End the session with [`PanSession::end`].
//!
//! Pointers are matched by position in the set, not by identity: the `i`-th
//! point of the new set is compared with the `i`-th point of the previous set,
//! up to the shorter of the two lengths.

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Contact points of one input event, in page coordinates.
pub type Pointers = SmallVec<[Point; 4]>;

/// Coarse state of a [`PanSession`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PanPhase {
    /// No pan gesture in progress.
    #[default]
    Idle,
    /// A pan gesture is in progress.
    Panning,
}

/// Tracks one pan gesture across move events.
#[derive(Clone, Debug, Default)]
pub struct PanSession {
    phase: PanPhase,
    last_pointers: Pointers,
}

impl PanSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enters `Panning` and records `pointers` as the reference set.
    ///
    /// Calling this while already panning (for example when another finger
    /// touches down) replaces the reference set. Returns `true` if the
    /// session was idle before.
    pub fn start(&mut self, pointers: &[Point]) -> bool {
        let was_idle = self.phase == PanPhase::Idle;
        self.phase = PanPhase::Panning;
        self.last_pointers.clear();
        self.last_pointers.extend_from_slice(pointers);
        was_idle
    }

    /// Feeds a new pointer set and returns the averaged delta.
    ///
    /// Returns `None` when idle or when `pointers` is empty; neither case
    /// changes any state. Otherwise the reference set is replaced and the
    /// mean of the positional deltas is returned, which is zero if the
    /// previous set was empty.
    pub fn update(&mut self, pointers: &[Point]) -> Option<Vec2> {
        if self.phase == PanPhase::Idle || pointers.is_empty() {
            return None;
        }

        let matched = pointers.len().min(self.last_pointers.len());
        let mut sum = Vec2::ZERO;
        for (new, old) in pointers.iter().zip(self.last_pointers.iter()) {
            sum += *new - *old;
        }

        self.last_pointers.clear();
        self.last_pointers.extend_from_slice(pointers);

        if matched == 0 {
            Some(Vec2::ZERO)
        } else {
            Some(sum / matched as f64)
        }
    }

    /// Leaves `Panning`. Returns `true` if a session was actually ended.
    pub fn end(&mut self) -> bool {
        if self.phase == PanPhase::Idle {
            return false;
        }
        self.phase = PanPhase::Idle;
        self.last_pointers.clear();
        true
    }

    /// Returns `true` while a pan gesture is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.phase == PanPhase::Panning
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> PanPhase {
        self.phase
    }

    /// Pointer set recorded by the last start or update.
    #[must_use]
    pub fn last_pointers(&self) -> &[Point] {
        &self.last_pointers
    }
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;

    #[test]
    fn new_session_is_idle() {
        let session = PanSession::new();
        assert!(!session.is_panning());
        assert_eq!(session.phase(), PanPhase::Idle);
        assert!(session.last_pointers().is_empty());
    }

    #[test]
    fn start_records_pointers() {
        let mut session = PanSession::new();
        let p = [Point::new(100.0, 100.0)];

        assert!(session.start(&p));

        assert!(session.is_panning());
        assert_eq!(session.last_pointers(), &p);
    }

    #[test]
    fn single_pointer_delta() {
        let mut session = PanSession::new();
        session.start(&[Point::new(100.0, 100.0)]);

        let delta = session.update(&[Point::new(130.0, 115.0)]);

        assert_eq!(delta, Some(Vec2::new(30.0, 15.0)));
        assert_eq!(session.last_pointers(), &[Point::new(130.0, 115.0)]);
    }

    #[test]
    fn incremental_deltas() {
        let mut session = PanSession::new();
        session.start(&[Point::new(0.0, 0.0)]);

        assert_eq!(session.update(&[Point::new(5.0, 3.0)]), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(session.update(&[Point::new(8.0, 7.0)]), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(session.update(&[Point::new(8.0, 7.0)]), Some(Vec2::ZERO));
    }

    #[test]
    fn two_pointers_moving_together_average() {
        let mut session = PanSession::new();
        session.start(&[Point::new(0.0, 0.0), Point::new(50.0, 50.0)]);

        let delta = session.update(&[Point::new(10.0, -4.0), Point::new(60.0, 46.0)]);

        assert_eq!(delta, Some(Vec2::new(10.0, -4.0)));
    }

    #[test]
    fn pinch_like_motion_cancels_out() {
        let mut session = PanSession::new();
        session.start(&[Point::new(40.0, 0.0), Point::new(60.0, 0.0)]);

        let delta = session.update(&[Point::new(30.0, 0.0), Point::new(70.0, 0.0)]);

        assert_eq!(delta, Some(Vec2::ZERO));
    }

    #[test]
    fn only_the_shorter_prefix_is_matched() {
        let mut session = PanSession::new();
        session.start(&[Point::new(0.0, 0.0)]);

        // A second finger appears without a start event.
        let delta = session.update(&[Point::new(2.0, 2.0), Point::new(500.0, 500.0)]);
        assert_eq!(delta, Some(Vec2::new(2.0, 2.0)));

        // Back to one finger: only the first pair is compared.
        let delta = session.update(&[Point::new(3.0, 5.0)]);
        assert_eq!(delta, Some(Vec2::new(1.0, 3.0)));
    }

    #[test]
    fn update_while_idle_is_noop() {
        let mut session = PanSession::new();

        assert_eq!(session.update(&[Point::new(1.0, 1.0)]), None);
        assert!(session.last_pointers().is_empty());
    }

    #[test]
    fn empty_update_is_noop() {
        let mut session = PanSession::new();
        session.start(&[Point::new(1.0, 1.0)]);

        assert_eq!(session.update(&[]), None);
        assert_eq!(session.last_pointers(), &[Point::new(1.0, 1.0)]);
    }

    #[test]
    fn empty_start_yields_zero_then_tracks() {
        let mut session = PanSession::new();
        session.start(&[]);

        assert_eq!(session.update(&[Point::new(9.0, 9.0)]), Some(Vec2::ZERO));
        assert_eq!(session.update(&[Point::new(10.0, 12.0)]), Some(Vec2::new(1.0, 3.0)));
    }

    #[test]
    fn restart_replaces_reference_set() {
        let mut session = PanSession::new();
        session.start(&[Point::new(0.0, 0.0)]);
        session.update(&[Point::new(10.0, 10.0)]);

        assert!(!session.start(&[Point::new(50.0, 60.0), Point::new(70.0, 80.0)]));
        let delta = session.update(&[Point::new(55.0, 65.0), Point::new(75.0, 85.0)]);

        assert_eq!(delta, Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn end_resets_and_reports_once() {
        let mut session = PanSession::new();
        session.start(&[Point::new(10.0, 20.0)]);

        assert!(session.end());
        assert!(!session.end());
        assert!(!session.is_panning());
        assert!(session.last_pointers().is_empty());
    }

    #[test]
    fn fractional_coordinates() {
        let mut session = PanSession::new();
        session.start(&[Point::new(1.5, 2.7)]);

        let delta = session.update(&[Point::new(3.2, 4.1)]).unwrap();

        assert!((delta.x - 1.7).abs() < f64::EPSILON * 10.0);
        assert!((delta.y - 1.4).abs() < f64::EPSILON * 10.0);
    }
}
