// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Errors from sizing a drawer's panes.

use thiserror::Error;

/// Reasons a drawer cannot compute its geometry.
///
/// Either one leaves the drawer disabled: event handlers return `false` and
/// open/close do nothing until a later layout pass succeeds.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum DrawerError {
    /// The viewport does not hold exactly a menu and a content child.
    #[error("sliding drawer needs exactly 2 children (menu, content), found {found}")]
    ChildCount {
        /// Number of children the viewport reported.
        found: usize,
    },
    /// The reveal margin leaves no room for a menu narrower than the viewport.
    #[error("reveal margin of {reveal_margin}px does not fit a {viewport_width}px viewport")]
    InvalidGeometry {
        /// Viewport width in pixels.
        viewport_width: f64,
        /// Reveal margin in pixels.
        reveal_margin: f64,
    },
}
