// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the host platform provides to the drawer.
//!
//! The drawer never owns a widget tree. Hosts adapt their native views to
//! these traits: a [`Surface`] per pane, a [`DrawerViewport`] holding the two
//! panes, and a [`HorizontalScrollSurface`] owning the scroll position.

/// Index of the menu pane within the viewport.
pub const MENU_INDEX: usize = 0;

/// Index of the content pane within the viewport.
pub const CONTENT_INDEX: usize = 1;

/// A pane whose size and visual transform the drawer can set.
///
/// Scale and translation are applied about the pivot, in the pane's own
/// coordinate space. Alpha is in `[0, 1]`.
pub trait Surface {
    /// Current laid-out height in pixels.
    fn height(&self) -> f64;
    /// Sets the pane's layout width in pixels.
    fn set_width(&mut self, width: f64);
    /// Sets horizontal scale.
    fn set_scale_x(&mut self, scale: f64);
    /// Sets vertical scale.
    fn set_scale_y(&mut self, scale: f64);
    /// Sets the pivot's x-coordinate.
    fn set_pivot_x(&mut self, x: f64);
    /// Sets the pivot's y-coordinate.
    fn set_pivot_y(&mut self, y: f64);
    /// Sets opacity.
    fn set_alpha(&mut self, alpha: f64);
    /// Sets horizontal translation in pixels.
    fn set_translation_x(&mut self, dx: f64);
}

/// The horizontally scrollable container hosting `[menu, content]`.
pub trait DrawerViewport {
    /// Pane type.
    type Surface: Surface;

    /// Measured width in pixels.
    fn width(&self) -> f64;

    /// Number of direct children.
    fn child_count(&self) -> usize;

    /// Child at `index`, if present.
    fn child_mut(&mut self, index: usize) -> Option<&mut Self::Surface>;

    /// Both panes at once, as `(menu, content)`: the children at
    /// [`MENU_INDEX`] and [`CONTENT_INDEX`].
    ///
    /// Returns `None` unless the viewport holds exactly two children. The
    /// drawer resolves both panes through this before writing to either.
    fn panes_mut(&mut self) -> Option<(&mut Self::Surface, &mut Self::Surface)>;

    /// Asks the host to run another measure/layout pass.
    fn request_layout(&mut self);
}

/// Scroll position store with immediate and animated scrolling.
///
/// Animated scrolls run asynchronously. The host reports every offset change,
/// animated or not, back through
/// [`SlidingDrawer::on_scroll_changed`](crate::SlidingDrawer::on_scroll_changed).
pub trait HorizontalScrollSurface {
    /// Current scroll offset in pixels.
    fn scroll_x(&self) -> f64;

    /// Jumps to `x`.
    fn scroll_to(&mut self, x: f64);

    /// Animates to `x`.
    fn smooth_scroll_to(&mut self, x: f64);

    /// Animates by `dx` relative to the current offset.
    fn smooth_scroll_by(&mut self, dx: f64);

    /// Tells the surface its valid range is `[0, max]`.
    ///
    /// Native scroll containers usually derive this from their content width
    /// and can ignore it.
    fn set_max_offset(&mut self, max: f64);
}
