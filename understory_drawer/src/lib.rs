// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_drawer --heading-base-level=0

//! Understory Drawer: a headless two-pane sliding drawer.
//!
//! A menu pane and a content pane share one horizontally scrollable viewport.
//! Horizontal drags and flings open or close the menu, and the scroll offset
//! drives a parallax effect: the content shrinks toward its left edge while
//! the menu fades in, grows, and slides out from underneath.
//!
//! The crate is split along the same lines as the rest of Understory:
//!
//! - [`MenuGeometry`]: pane widths from the viewport width and the reveal margin.
//! - [`compute_transforms`]: the pure scroll-offset → pane-transform mapping.
//! - [`SlidingDrawer`]: the gesture state machine (intercept, fling, release snap)
//!   and the open/close actions.
//! - [`host`]: traits the host implements for its panes, its viewport, and its
//!   scroll container.
//! - [`SmoothScroller`]: a tick-driven scroll container for hosts without one.
//!
//! It does **not** own views, measure text, or look up display metrics. The
//! host passes in the viewport width and the display density, translates its
//! input into [`PointerEvent`]s, and reports scroll changes back.
//!
//! ## Offsets
//!
//! The scroll range is `[0, menu_width]`: `0` shows the menu, `menu_width`
//! hides it. The drawer starts closed and every layout pass parks it closed.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_drawer::host::{DrawerViewport, Surface};
//! use understory_drawer::{DrawerConfig, SlidingDrawer, SmoothScroller};
//!
//! #[derive(Default)]
//! struct Pane { width: f64, scale: f64, alpha: f64 }
//!
//! impl Surface for Pane {
//!     fn height(&self) -> f64 { 800.0 }
//!     fn set_width(&mut self, width: f64) { self.width = width; }
//!     fn set_scale_x(&mut self, scale: f64) { self.scale = scale; }
//!     fn set_scale_y(&mut self, _: f64) {}
//!     fn set_pivot_x(&mut self, _: f64) {}
//!     fn set_pivot_y(&mut self, _: f64) {}
//!     fn set_alpha(&mut self, alpha: f64) { self.alpha = alpha; }
//!     fn set_translation_x(&mut self, _: f64) {}
//! }
//!
//! struct Viewport { panes: [Pane; 2] }
//!
//! impl DrawerViewport for Viewport {
//!     type Surface = Pane;
//!     fn width(&self) -> f64 { 400.0 }
//!     fn child_count(&self) -> usize { 2 }
//!     fn child_mut(&mut self, index: usize) -> Option<&mut Pane> { self.panes.get_mut(index) }
//!     fn panes_mut(&mut self) -> Option<(&mut Pane, &mut Pane)> {
//!         let [menu, content] = &mut self.panes;
//!         Some((menu, content))
//!     }
//!     fn request_layout(&mut self) {}
//! }
//!
//! let mut viewport = Viewport { panes: Default::default() };
//! let mut drawer = SlidingDrawer::new(DrawerConfig::default(), SmoothScroller::new(0.0));
//!
//! let geometry = drawer.on_layout(&mut viewport).unwrap();
//! assert_eq!(geometry.menu_width(), 350.0);
//! assert_eq!(viewport.panes[0].width, 350.0);
//! assert_eq!(viewport.panes[1].width, 400.0);
//!
//! // Open, then drive the animation to completion.
//! drawer.open();
//! let mut now = 0;
//! while let Some(change) = drawer.scroller_mut().tick(now) {
//!     drawer.on_scroll_changed(&mut viewport, change.new_offset, change.old_offset);
//!     now += 16;
//! }
//! assert!(drawer.is_open());
//! assert_eq!(viewport.panes[0].alpha, 1.0);
//! assert_eq!(viewport.panes[1].scale, 0.8);
//! ```
//!
//! ## Features
//!
//! - `std` (default): Compile Kurbo with the standard library.
//! - `libm`: Use `libm` for float functions in `no_std` builds.
//!
//! Diagnostics go through the [`log`] facade; the crate installs no logger.
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod controller;
mod error;
mod geometry;
pub mod host;
mod scroller;
mod transform;

pub use config::{DEFAULT_REVEAL_MARGIN_DP, DEFAULT_TOUCH_SLOP_DP, DrawerConfig, Length};
pub use controller::{InterceptState, SlidingDrawer};
pub use error::DrawerError;
pub use geometry::MenuGeometry;
pub use host::HorizontalScrollSurface;
pub use scroller::{DEFAULT_DURATION_MS, ScrollChange, SmoothScroller};
pub use transform::{Transforms, compute_transforms};
pub use understory_gesture::pointer::{PointerEvent, PointerPhase};
