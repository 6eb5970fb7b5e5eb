// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Post-drag click suppression.
//!
//! Releasing a mouse button after a drag usually produces a click on whatever
//! is under the pointer. [`ClickSuppressor`] remembers whether a pan happened
//! since the last press and, if so, tells a capture-phase click handler to
//! swallow exactly one click.

/// Decides whether a click should be swallowed after a drag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClickSuppressor {
    enabled: bool,
    did_pan: bool,
}

impl ClickSuppressor {
    /// Creates a suppressor. A disabled suppressor never swallows clicks.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            did_pan: false,
        }
    }

    /// A new press starts; forget any earlier pan.
    pub fn on_press(&mut self) {
        self.did_pan = false;
    }

    /// A pan movement happened during the current press.
    pub fn on_pan(&mut self) {
        self.did_pan = true;
    }

    /// A click reached the capture phase.
    ///
    /// Returns `true` if it should be swallowed, which happens at most once
    /// per pan.
    pub fn on_click(&mut self) -> bool {
        let swallow = self.enabled && self.did_pan;
        self.did_pan = false;
        swallow
    }

    /// Returns `true` if a pan happened since the last press and no click has
    /// consumed it yet.
    #[must_use]
    pub fn did_pan(&self) -> bool {
        self.did_pan
    }

    /// Returns `true` if this suppressor may swallow clicks.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
