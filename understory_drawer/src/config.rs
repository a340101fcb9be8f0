// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawer configuration.
//!
//! Sizes that come from design specs are usually written in
//! density-independent units. [`Length`] keeps that distinction explicit, and
//! [`DrawerConfig`] converts to pixels with its `density` (pixels per
//! density-independent unit), which the host passes in rather than the drawer
//! looking it up.
//!
//! Density-independent lengths round half-up to whole device pixels, so a
//! margin lands on the pixel grid at fractional densities. Explicit pixel
//! lengths are used as given.

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `floor`
use understory_gesture::fling::FlingConfig;

/// Default reveal margin, in density-independent units.
pub const DEFAULT_REVEAL_MARGIN_DP: f64 = 50.0;

/// Default touch slop, in density-independent units.
pub const DEFAULT_TOUCH_SLOP_DP: f64 = 8.0;

/// A length either in device pixels or in density-independent units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Device pixels, used as-is.
    Px(f64),
    /// Density-independent units, multiplied by the density.
    Dp(f64),
}

impl Length {
    /// Converts to device pixels.
    ///
    /// `Dp` values round half-up to a whole pixel.
    ///
    /// ```
    /// use understory_drawer::Length;
    ///
    /// assert_eq!(Length::Dp(50.0).to_px(2.625), 131.0);
    /// assert_eq!(Length::Dp(50.0).to_px(1.5), 75.0);
    /// assert_eq!(Length::Px(131.25).to_px(2.625), 131.25);
    /// ```
    #[must_use]
    pub fn to_px(self, density: f64) -> f64 {
        match self {
            Self::Px(px) => px,
            Self::Dp(dp) => (dp * density + 0.5).floor(),
        }
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::Dp(DEFAULT_REVEAL_MARGIN_DP)
    }
}

/// Configuration for a [`SlidingDrawer`](crate::SlidingDrawer).
///
/// ```
/// use understory_drawer::{DrawerConfig, Length};
///
/// let config = DrawerConfig::default().with_density(2.0);
/// assert_eq!(config.reveal_margin_px(), 100.0);
///
/// let config = config.with_reveal_margin(Length::Px(64.0));
/// assert_eq!(config.reveal_margin_px(), 64.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawerConfig {
    /// Strip of the content pane kept visible while the menu is open.
    pub reveal_margin: Length,
    /// Device pixels per density-independent unit. Expected to be positive.
    pub density: f64,
    /// Pointer travel before movement counts as a drag, in density-independent units.
    pub touch_slop: f64,
    /// Minimum release speed for a fling, in density-independent units per second.
    pub min_fling_velocity: f64,
    /// Cap on reported fling speed, in density-independent units per second.
    pub max_fling_velocity: f64,
    /// Whether pointer drags move the scroll offset directly.
    ///
    /// Turn this off when the host's scroll container already scrolls on drag.
    pub drag_scroll: bool,
}

impl Default for DrawerConfig {
    fn default() -> Self {
        let fling = FlingConfig::default();
        Self {
            reveal_margin: Length::default(),
            density: 1.0,
            touch_slop: DEFAULT_TOUCH_SLOP_DP,
            min_fling_velocity: fling.min_velocity,
            max_fling_velocity: fling.max_velocity,
            drag_scroll: true,
        }
    }
}

impl DrawerConfig {
    /// Sets the reveal margin.
    #[must_use]
    pub fn with_reveal_margin(mut self, reveal_margin: Length) -> Self {
        self.reveal_margin = reveal_margin;
        self
    }

    /// Sets the density used for unit conversion.
    #[must_use]
    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the touch slop, in density-independent units.
    #[must_use]
    pub fn with_touch_slop(mut self, touch_slop: f64) -> Self {
        self.touch_slop = touch_slop;
        self
    }

    /// Sets the fling velocity thresholds, in density-independent units per second.
    #[must_use]
    pub fn with_fling_velocity(mut self, min: f64, max: f64) -> Self {
        self.min_fling_velocity = min;
        self.max_fling_velocity = max;
        self
    }

    /// Enables or disables drag scrolling.
    #[must_use]
    pub fn with_drag_scroll(mut self, drag_scroll: bool) -> Self {
        self.drag_scroll = drag_scroll;
        self
    }

    /// Reveal margin in device pixels.
    #[must_use]
    pub fn reveal_margin_px(&self) -> f64 {
        self.reveal_margin.to_px(self.density)
    }

    /// Touch slop in device pixels.
    #[must_use]
    pub fn touch_slop_px(&self) -> f64 {
        self.touch_slop * self.density
    }

    /// Fling thresholds in device pixels per second.
    #[must_use]
    pub fn fling_config(&self) -> FlingConfig {
        FlingConfig {
            min_velocity: self.min_fling_velocity,
            max_velocity: self.max_fling_velocity,
        }
        .scaled(self.density)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_reveal_margin_is_fifty_dp() {
        let config = DrawerConfig::default();
        assert_eq!(config.reveal_margin, Length::Dp(50.0));
        assert_eq!(config.reveal_margin_px(), 50.0);
    }

    #[test]
    fn dp_scales_with_density_but_px_does_not() {
        assert_eq!(Length::Dp(50.0).to_px(3.0), 150.0);
        assert_eq!(Length::Px(50.0).to_px(3.0), 50.0);
    }

    #[test]
    fn dp_rounds_to_whole_pixels_at_fractional_density() {
        // 50 dp at 2.625 is 131.25 px; 8 dp at 1.3125 is 10.5 px.
        let config = DrawerConfig::default().with_density(2.625);
        assert_eq!(config.reveal_margin_px(), 131.0);
        assert_eq!(Length::Dp(8.0).to_px(1.3125), 11.0);
        assert_eq!(Length::Dp(10.0).to_px(0.75), 8.0);
    }

    #[test]
    fn slop_and_fling_thresholds_scale_with_density() {
        let config = DrawerConfig::default()
            .with_density(2.0)
            .with_touch_slop(10.0)
            .with_fling_velocity(100.0, 1_000.0);
        assert_eq!(config.touch_slop_px(), 20.0);
        assert_eq!(
            config.fling_config(),
            FlingConfig {
                min_velocity: 200.0,
                max_velocity: 2_000.0,
            }
        );
    }

    #[test]
    fn drag_scroll_defaults_on() {
        assert!(DrawerConfig::default().drag_scroll);
        assert!(!DrawerConfig::default().with_drag_scroll(false).drag_scroll);
    }
}
