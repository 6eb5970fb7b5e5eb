// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Transform component a bound applies to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal pan.
    X,
    /// Vertical pan.
    Y,
    /// Zoom factor.
    Zoom,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Zoom => "zoom",
        })
    }
}

/// Misconfiguration detected while constructing a
/// [`ViewportController`](crate::ViewportController).
///
/// These are the only errors the controller reports; input handling itself
/// never fails.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The surface handle does not refer to a live element.
    #[error("surface element is not present in the element geometry")]
    SurfaceNotFound,
    /// A bound of the given axis is NaN.
    #[error("{axis} bounds must not be NaN")]
    InvalidRange {
        /// Offending axis.
        axis: Axis,
    },
    /// The zoom floor would allow a zero or negative zoom.
    #[error("minimum zoom must be greater than zero, got {0}")]
    NonPositiveMinZoom(f64),
    /// A sensitivity factor is out of range.
    #[error("{name} is out of range: {value}")]
    InvalidSensitivity {
        /// Option name.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}
