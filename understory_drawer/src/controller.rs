// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The sliding drawer controller.
//!
//! ## Event flow
//!
//! 1) Layout: the host calls [`SlidingDrawer::on_layout`] after every layout
//!    pass. The first pass (and any pass with a new viewport width) sizes the
//!    panes; every pass parks the drawer closed.
//! 2) Touch: for each pointer event the host first asks
//!    [`SlidingDrawer::on_intercept_touch`] whether the drawer takes the
//!    sequence away from its children, then delivers events the drawer owns to
//!    [`SlidingDrawer::on_touch_event`]. Pointer down may arrive at both.
//! 3) Scroll: whenever the scroll offset changes the host calls
//!    [`SlidingDrawer::on_scroll_changed`], which restyles both panes.
//!
//! ## Gesture rules
//!
//! - Tapping the visible strip of content while the menu is open closes the
//!   menu, and the rest of that sequence is swallowed.
//! - A fling toward the other state toggles. A fling toward the current state
//!   is ignored.
//! - Otherwise, releasing past the midpoint closes and anything else opens.

use log::{debug, trace, warn};
use understory_gesture::drag::{DragDirection, DragState};
use understory_gesture::fling::FlingRecognizer;
use understory_gesture::pointer::{PointerEvent, PointerPhase};

use crate::host::{DrawerViewport, HorizontalScrollSurface, Surface};
use crate::{DrawerConfig, DrawerError, MenuGeometry, Transforms, compute_transforms};

/// Per-sequence intercept state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InterceptState {
    /// Events flow through normal touch handling.
    #[default]
    Idle,
    /// The sequence closed the menu on pointer down; everything else in it is
    /// swallowed.
    Intercepting,
}

/// Two-pane sliding drawer driven by touch gestures.
///
/// The drawer owns the scroll capability `S`; panes are passed in per call.
///
/// ```
/// use understory_drawer::{DrawerConfig, HorizontalScrollSurface, SlidingDrawer, SmoothScroller};
///
/// let mut drawer = SlidingDrawer::new(DrawerConfig::default(), SmoothScroller::new(0.0));
/// assert!(!drawer.is_enabled());
///
/// // Without geometry, actions are no-ops.
/// drawer.open();
/// assert!(!drawer.is_open());
/// assert_eq!(drawer.scroller().scroll_x(), 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct SlidingDrawer<S> {
    scroller: S,
    config: DrawerConfig,
    geometry: Option<MenuGeometry>,
    is_open: bool,
    intercept: InterceptState,
    drag: DragState,
    flings: FlingRecognizer,
}

impl<S: HorizontalScrollSurface> SlidingDrawer<S> {
    /// Creates a closed, not yet laid out drawer.
    #[must_use]
    pub fn new(config: DrawerConfig, scroller: S) -> Self {
        Self {
            scroller,
            drag: DragState::new(config.touch_slop_px()),
            flings: FlingRecognizer::new(config.fling_config()),
            config,
            geometry: None,
            is_open: false,
            intercept: InterceptState::Idle,
        }
    }

    /// Configuration in use.
    #[must_use]
    pub fn config(&self) -> &DrawerConfig {
        &self.config
    }

    /// The scroll capability.
    #[must_use]
    pub fn scroller(&self) -> &S {
        &self.scroller
    }

    /// Mutable access to the scroll capability, for example to tick it.
    pub fn scroller_mut(&mut self) -> &mut S {
        &mut self.scroller
    }

    /// Gives the scroll capability back.
    pub fn into_scroller(self) -> S {
        self.scroller
    }

    /// Geometry from the last successful measure, if any.
    #[must_use]
    pub fn geometry(&self) -> Option<MenuGeometry> {
        self.geometry
    }

    /// Returns `true` once a layout pass has produced geometry.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.geometry.is_some()
    }

    /// Logical open state.
    ///
    /// This follows open/close actions, not the live scroll offset, so it does
    /// not flicker while a drag is in progress.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Intercept state of the current gesture sequence.
    #[must_use]
    pub fn intercept_state(&self) -> InterceptState {
        self.intercept
    }

    /// Sizes the panes for the viewport's current width.
    ///
    /// Sets the menu to `width − reveal margin` and the content to the full
    /// width, updates the scroll range, and requests a re-layout. On failure
    /// the drawer is disabled and nothing is written to the viewport.
    pub fn measure<V>(&mut self, viewport: &mut V) -> Result<MenuGeometry, DrawerError>
    where
        V: DrawerViewport + ?Sized,
    {
        let found = viewport.child_count();
        if found != 2 {
            return Err(self.disable(DrawerError::ChildCount { found }));
        }
        let geometry = match MenuGeometry::new(viewport.width(), self.config.reveal_margin_px()) {
            Ok(geometry) => geometry,
            Err(err) => return Err(self.disable(err)),
        };
        let Some((menu, content)) = viewport.panes_mut() else {
            return Err(self.disable(DrawerError::ChildCount { found }));
        };
        menu.set_width(geometry.menu_width());
        content.set_width(geometry.content_width());

        self.scroller.set_max_offset(geometry.menu_width());
        viewport.request_layout();
        if self.geometry != Some(geometry) {
            debug!(
                "sliding drawer measured: viewport {}px, menu {}px",
                geometry.viewport_width(),
                geometry.menu_width()
            );
        }
        self.geometry = Some(geometry);
        Ok(geometry)
    }

    /// Runs after every layout pass of the host.
    ///
    /// Measures on the first pass and whenever the viewport width changed,
    /// then jumps to the closed offset. The logical state is reset to closed
    /// as well, so a rotation never leaves `is_open` disagreeing with the
    /// panes.
    pub fn on_layout<V>(&mut self, viewport: &mut V) -> Result<MenuGeometry, DrawerError>
    where
        V: DrawerViewport + ?Sized,
    {
        let geometry = match self.geometry {
            Some(geometry) if geometry.viewport_width() == viewport.width() => geometry,
            _ => self.measure(viewport)?,
        };
        if self.is_open {
            debug!("layout pass closed the sliding drawer");
        }
        self.is_open = false;
        self.scroller.scroll_to(geometry.menu_width());
        Ok(geometry)
    }

    /// Restyles both panes for a new scroll offset.
    ///
    /// Returns the applied transforms, or `None` while disabled.
    pub fn on_scroll_changed<V>(
        &mut self,
        viewport: &mut V,
        new_offset: f64,
        old_offset: f64,
    ) -> Option<Transforms>
    where
        V: DrawerViewport + ?Sized,
    {
        let geometry = self.geometry?;
        let transforms = compute_transforms(new_offset, geometry.menu_width());
        let (menu, content) = viewport.panes_mut()?;
        transforms.apply(menu, content);
        trace!("scroll {old_offset} -> {new_offset}: {transforms:?}");
        Some(transforms)
    }

    /// Decides whether the drawer takes this event's sequence from its children.
    ///
    /// On pointer down with the menu open and the pointer on the content
    /// strip, closes the menu and returns `true`. Also returns `true` once a
    /// horizontal drag crosses the touch slop.
    pub fn on_intercept_touch(&mut self, event: &PointerEvent) -> bool {
        let Some(geometry) = self.geometry else {
            return false;
        };
        match event.phase {
            PointerPhase::Down => {
                self.intercept = InterceptState::Idle;
                self.drag.start(event.position);
                self.flings.on_event(event);
                if self.is_open && geometry.in_open_content(event.position.x) {
                    debug!(
                        "pointer down at x={} on open content, closing",
                        event.position.x
                    );
                    self.intercept = InterceptState::Intercepting;
                    self.close();
                    return true;
                }
                false
            }
            PointerPhase::Move => {
                if self.intercept == InterceptState::Intercepting {
                    return true;
                }
                self.flings.on_event(event);
                if !self.config.drag_scroll {
                    return false;
                }
                let was_dragging = self.drag.is_dragging();
                self.drag.update(event.position);
                let steal = !was_dragging && self.drag.direction() == Some(DragDirection::Horizontal);
                if steal {
                    debug!("horizontal drag crossed slop, intercepting");
                }
                steal
            }
            PointerPhase::Up | PointerPhase::Cancel => {
                self.drag.end();
                self.flings.reset();
                self.intercept == InterceptState::Intercepting
            }
        }
    }

    /// Handles an event of a sequence the drawer owns.
    ///
    /// Returns `true` when the event was consumed, which is always the case
    /// while enabled.
    pub fn on_touch_event(&mut self, event: &PointerEvent) -> bool {
        let Some(geometry) = self.geometry else {
            return false;
        };
        if self.intercept == InterceptState::Intercepting {
            if event.ends_sequence() {
                self.drag.end();
                self.flings.reset();
            }
            return true;
        }

        if let Some(fling) = self.flings.on_event(event) {
            if self.on_fling(fling.velocity.x) {
                self.drag.end();
                return true;
            }
        }

        match event.phase {
            PointerPhase::Down => {
                self.drag.start(event.position);
            }
            PointerPhase::Move => {
                if let Some(delta) = self.drag.update(event.position) {
                    if self.config.drag_scroll
                        && self.drag.direction() == Some(DragDirection::Horizontal)
                    {
                        let target = geometry.clamp_offset(self.scroller.scroll_x() - delta.x);
                        self.scroller.scroll_to(target);
                    }
                }
            }
            PointerPhase::Up => {
                self.drag.end();
                let offset = self.scroller.scroll_x();
                if geometry.snaps_closed(offset) {
                    debug!("released at {offset}, snapping closed");
                    self.close();
                } else {
                    debug!("released at {offset}, snapping open");
                    self.open();
                }
            }
            PointerPhase::Cancel => {
                self.drag.end();
            }
        }
        true
    }

    /// Applies the fling rule for a horizontal release velocity.
    ///
    /// Positive `velocity_x` is rightward. Toggles when the fling points
    /// toward the other state and returns whether it did.
    pub fn on_fling(&mut self, velocity_x: f64) -> bool {
        if self.geometry.is_none() {
            return false;
        }
        let toward_other_state = if self.is_open {
            velocity_x < 0.0
        } else {
            velocity_x > 0.0
        };
        if toward_other_state {
            debug!("fling at {velocity_x}px/s, toggling");
            self.toggle();
        }
        toward_other_state
    }

    /// Opens the menu: animates to offset `0`.
    pub fn open(&mut self) {
        if self.geometry.is_none() {
            return;
        }
        self.is_open = true;
        self.scroller.smooth_scroll_to(0.0);
    }

    /// Closes the menu: animates by `+menu_width` from the current offset.
    ///
    /// The scroll surface stops at the end of its range, so the remaining
    /// distance is eased rather than jumped.
    pub fn close(&mut self) {
        let Some(geometry) = self.geometry else {
            return;
        };
        self.is_open = false;
        self.scroller.smooth_scroll_by(geometry.menu_width());
    }

    /// Opens if closed, closes if open.
    pub fn toggle(&mut self) {
        if self.is_open {
            self.close();
        } else {
            self.open();
        }
    }

    fn disable(&mut self, err: DrawerError) -> DrawerError {
        warn!("sliding drawer disabled: {err}");
        self.geometry = None;
        self.intercept = InterceptState::Idle;
        self.drag.end();
        self.flings.reset();
        err
    }
}
