// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A headless, tick-driven [`HorizontalScrollSurface`].
//!
//! [`SmoothScroller`] is for hosts without a native animated scroll container,
//! and for tests. The host calls [`SmoothScroller::tick`] once per frame with
//! a monotonic timestamp and forwards any returned [`ScrollChange`] to
//! [`SlidingDrawer::on_scroll_changed`](crate::SlidingDrawer::on_scroll_changed).
//!
//! Offsets are clamped to `[0, max_offset]`. A new animated scroll interrupts
//! the running one and starts from wherever the offset currently is. Its clock
//! starts at the first tick after it was requested, counted as at most one
//! frame in, so a host that stops ticking while idle still sees the full ease.
//!
//! ```
//! use understory_drawer::{HorizontalScrollSurface, SmoothScroller};
//!
//! let mut scroller = SmoothScroller::new(300.0).with_duration(100);
//! scroller.smooth_scroll_to(200.0);
//! assert!(scroller.is_animating());
//!
//! let change = scroller.tick(5_000).unwrap();
//! assert_eq!(change.old_offset, 0.0);
//! assert!(change.new_offset > 0.0 && change.new_offset < 200.0);
//!
//! scroller.tick(5_100);
//! assert_eq!(scroller.scroll_x(), 200.0);
//! assert!(!scroller.is_animating());
//! ```

use crate::host::HorizontalScrollSurface;

/// Default animated scroll duration in milliseconds.
pub const DEFAULT_DURATION_MS: u64 = 250;

/// Progress credited to an animation on its first tick after an idle gap.
const FRAME_MS: u64 = 16;

/// An offset change to report to the drawer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollChange {
    /// Offset after the change.
    pub new_offset: f64,
    /// Offset last reported before the change.
    pub old_offset: f64,
}

#[derive(Clone, Copy, Debug)]
struct Animation {
    from: f64,
    to: f64,
    /// Set by the first tick after the animation was requested.
    start_ms: Option<u64>,
}

/// Scroll position with ease-out animated scrolling.
#[derive(Clone, Debug)]
pub struct SmoothScroller {
    offset: f64,
    reported: f64,
    max_offset: f64,
    duration_ms: u64,
    clock_ms: u64,
    animation: Option<Animation>,
}

impl SmoothScroller {
    /// Creates a scroller at offset `0` with range `[0, max_offset]`.
    #[must_use]
    pub fn new(max_offset: f64) -> Self {
        Self {
            offset: 0.0,
            reported: 0.0,
            max_offset: max_offset.max(0.0),
            duration_ms: DEFAULT_DURATION_MS,
            clock_ms: 0,
            animation: None,
        }
    }

    /// Sets the animated scroll duration.
    #[must_use]
    pub fn with_duration(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Upper end of the scroll range.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        self.max_offset
    }

    /// Returns `true` while an animated scroll is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Where the running animation will end, if any.
    #[must_use]
    pub fn target(&self) -> Option<f64> {
        self.animation.map(|a| a.to)
    }

    /// Advances the animation to `now_ms` and returns the pending change.
    ///
    /// Timestamps must not go backwards. An animation requested between
    /// ticks counts from the previous tick, or from one frame before `now_ms`
    /// if the previous tick is older than that.
    pub fn tick(&mut self, now_ms: u64) -> Option<ScrollChange> {
        let previous_ms = self.clock_ms;
        self.clock_ms = self.clock_ms.max(now_ms);
        if let Some(anim) = &mut self.animation {
            let start_ms = *anim
                .start_ms
                .get_or_insert(previous_ms.max(now_ms.saturating_sub(FRAME_MS)));
            let elapsed = self.clock_ms - start_ms;
            if elapsed >= self.duration_ms {
                self.offset = anim.to;
                self.animation = None;
            } else {
                let t = elapsed as f64 / self.duration_ms as f64;
                self.offset = anim.from + (anim.to - anim.from) * ease_out(t);
            }
        }
        self.take_change()
    }

    /// Returns the change since the last report, if the offset moved.
    pub fn take_change(&mut self) -> Option<ScrollChange> {
        if self.offset == self.reported {
            return None;
        }
        let change = ScrollChange {
            new_offset: self.offset,
            old_offset: self.reported,
        };
        self.reported = self.offset;
        Some(change)
    }

    fn clamp(&self, x: f64) -> f64 {
        x.clamp(0.0, self.max_offset)
    }

    fn animate_to(&mut self, x: f64) {
        let to = self.clamp(x);
        if to == self.offset {
            self.animation = None;
            return;
        }
        self.animation = Some(Animation {
            from: self.offset,
            to,
            start_ms: None,
        });
    }
}

/// Cubic ease-out on `[0, 1]`.
fn ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

impl HorizontalScrollSurface for SmoothScroller {
    fn scroll_x(&self) -> f64 {
        self.offset
    }

    fn scroll_to(&mut self, x: f64) {
        self.animation = None;
        self.offset = self.clamp(x);
    }

    fn smooth_scroll_to(&mut self, x: f64) {
        self.animate_to(x);
    }

    fn smooth_scroll_by(&mut self, dx: f64) {
        self.animate_to(self.offset + dx);
    }

    fn set_max_offset(&mut self, max: f64) {
        self.max_offset = max.max(0.0);
        self.offset = self.clamp(self.offset);
        if let Some(anim) = &mut self.animation {
            anim.from = anim.from.clamp(0.0, self.max_offset);
            anim.to = anim.to.clamp(0.0, self.max_offset);
        }
    }
}
