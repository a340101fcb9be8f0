// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scroll-to-visual mapping.
//!
//! With `s = offset / menu_width` (`0` open, `1` closed):
//!
//! | quantity              | formula                 | open | closed            |
//! |-----------------------|-------------------------|------|-------------------|
//! | content scale         | `0.8 + 0.2·s`           | 0.8  | 1.0               |
//! | menu alpha            | `0.5 + 0.5·(1 − s)`     | 1.0  | 0.5               |
//! | menu scale            | `0.7 + 0.3·(1 − s)`     | 1.0  | 0.7               |
//! | menu translation x    | `0.25·offset`           | 0    | `0.25·menu_width` |
//!
//! The content pane scales about its left edge, vertically centered. The menu
//! trails the scroll by a quarter of the offset, so it appears to slide out
//! from underneath the content.

use kurbo::Point;

use crate::host::Surface;

const CONTENT_MIN_SCALE: f64 = 0.8;
const MENU_MIN_ALPHA: f64 = 0.5;
const MENU_MIN_SCALE: f64 = 0.7;
const MENU_PARALLAX: f64 = 0.25;

/// Visual state of both panes for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transforms {
    /// Uniform scale of the content pane.
    pub content_scale: f64,
    /// Opacity of the menu pane.
    pub menu_alpha: f64,
    /// Uniform scale of the menu pane.
    pub menu_scale: f64,
    /// Horizontal translation of the menu pane in pixels.
    pub menu_translation_x: f64,
}

/// Computes pane transforms for `offset` within `[0, menu_width]`.
///
/// `menu_width` must be positive. Offsets outside the range extrapolate
/// linearly; callers keep the offset in range.
///
/// ```
/// use understory_drawer::compute_transforms;
///
/// let open = compute_transforms(0.0, 300.0);
/// assert_eq!(open.content_scale, 0.8);
/// assert_eq!(open.menu_alpha, 1.0);
///
/// let closed = compute_transforms(300.0, 300.0);
/// assert_eq!(closed.menu_scale, 0.7);
/// assert_eq!(closed.menu_translation_x, 75.0);
/// ```
#[must_use]
pub fn compute_transforms(offset: f64, menu_width: f64) -> Transforms {
    debug_assert!(menu_width > 0.0, "menu width must be positive");
    let scale = offset / menu_width;
    let open = 1.0 - scale;
    Transforms {
        content_scale: CONTENT_MIN_SCALE + (1.0 - CONTENT_MIN_SCALE) * scale,
        menu_alpha: MENU_MIN_ALPHA + open * (1.0 - MENU_MIN_ALPHA),
        menu_scale: MENU_MIN_SCALE + open * (1.0 - MENU_MIN_SCALE),
        menu_translation_x: MENU_PARALLAX * offset,
    }
}

impl Transforms {
    /// Pivot for the content pane's scale: left edge, vertically centered.
    #[must_use]
    pub fn content_pivot(content_height: f64) -> Point {
        Point::new(0.0, content_height / 2.0)
    }

    /// Writes these transforms onto the two panes.
    pub fn apply<M, C>(&self, menu: &mut M, content: &mut C)
    where
        M: Surface + ?Sized,
        C: Surface + ?Sized,
    {
        let pivot = Self::content_pivot(content.height());
        content.set_pivot_x(pivot.x);
        content.set_pivot_y(pivot.y);
        content.set_scale_x(self.content_scale);
        content.set_scale_y(self.content_scale);

        menu.set_scale_x(self.menu_scale);
        menu.set_scale_y(self.menu_scale);
        menu.set_alpha(self.menu_alpha);
        menu.set_translation_x(self.menu_translation_x);
    }
}
