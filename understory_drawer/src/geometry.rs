// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu geometry derived from the viewport width.
//!
//! The drawer's scroll range is `[0, menu_width]`. Offset `0` shows the whole
//! menu with the content pushed right; offset `menu_width` is fully closed,
//! the content covering the viewport.
//!
//! The menu width is truncated to whole pixels.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `trunc`

use crate::DrawerError;

/// Pane widths for one viewport width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MenuGeometry {
    viewport_width: f64,
    reveal_margin: f64,
    menu_width: f64,
}

impl MenuGeometry {
    /// Computes the geometry for a viewport, both values in pixels.
    ///
    /// The menu width is `viewport_width - reveal_margin`, truncated to a
    /// whole pixel. Fails unless it lands in `(0, viewport_width)`.
    ///
    /// ```
    /// use understory_drawer::MenuGeometry;
    ///
    /// let g = MenuGeometry::new(400.0, 50.0).unwrap();
    /// assert_eq!(g.menu_width(), 350.0);
    /// assert_eq!(g.content_width(), 400.0);
    ///
    /// assert!(MenuGeometry::new(40.0, 50.0).is_err());
    /// ```
    pub fn new(viewport_width: f64, reveal_margin: f64) -> Result<Self, DrawerError> {
        let menu_width = (viewport_width - reveal_margin).trunc();
        if menu_width > 0.0 && menu_width < viewport_width {
            Ok(Self {
                viewport_width,
                reveal_margin,
                menu_width,
            })
        } else {
            Err(DrawerError::InvalidGeometry {
                viewport_width,
                reveal_margin,
            })
        }
    }

    /// Viewport width in pixels.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Reveal margin in pixels.
    #[must_use]
    pub fn reveal_margin(&self) -> f64 {
        self.reveal_margin
    }

    /// Menu pane width, which is also the closed scroll offset.
    #[must_use]
    pub fn menu_width(&self) -> f64 {
        self.menu_width
    }

    /// Content pane width; always the full viewport.
    #[must_use]
    pub fn content_width(&self) -> f64 {
        self.viewport_width
    }

    /// Clamps a scroll offset into `[0, menu_width]`.
    #[must_use]
    pub fn clamp_offset(&self, offset: f64) -> f64 {
        offset.clamp(0.0, self.menu_width)
    }

    /// How far open the menu is at `offset`: `1.0` open, `0.0` closed.
    #[must_use]
    pub fn open_fraction(&self, offset: f64) -> f64 {
        1.0 - self.clamp_offset(offset) / self.menu_width
    }

    /// Release-snap rule: past the midpoint the drawer closes.
    #[must_use]
    pub fn snaps_closed(&self, offset: f64) -> bool {
        offset > self.menu_width / 2.0
    }

    /// Returns `true` if viewport x-coordinate `x` lands on the content pane
    /// while the menu is open.
    #[must_use]
    pub fn in_open_content(&self, x: f64) -> bool {
        x > self.menu_width
    }
}
