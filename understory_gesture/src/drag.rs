// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: distinguish taps from drags and report movement deltas.
//!
//! ## Usage
//!
//! 1) Start tracking on pointer down with [`DragState::start`].
//! 2) On each move, call [`DragState::update`]. It returns `None` until the
//!    pointer has travelled further than the configured slop from the start
//!    position, then the movement delta since the last reported position.
//! 3) Once the slop is crossed, [`DragState::direction`] tells whether the
//!    drag is mostly horizontal or vertical. The direction is latched for the
//!    rest of the sequence.
//! 4) End tracking with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use understory_gesture::drag::{DragDirection, DragState};
//!
//! let mut drag = DragState::new(8.0);
//! drag.start(Point::new(100.0, 50.0));
//!
//! // Small jitter stays below the slop.
//! assert_eq!(drag.update(Point::new(103.0, 51.0)), None);
//! assert!(!drag.is_dragging());
//!
//! // Crossing the slop reports the whole movement so far.
//! assert_eq!(drag.update(Point::new(120.0, 52.0)), Some(Vec2::new(20.0, 2.0)));
//! assert_eq!(drag.direction(), Some(DragDirection::Horizontal));
//!
//! // After that, plain deltas.
//! assert_eq!(drag.update(Point::new(110.0, 52.0)), Some(Vec2::new(-10.0, 0.0)));
//! ```

use kurbo::{Point, Vec2};

/// Dominant axis of a drag, decided when the slop is first crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragDirection {
    /// Horizontal movement was at least as large as vertical movement.
    Horizontal,
    /// Vertical movement dominated.
    Vertical,
}

/// Tracks a single pointer drag with a touch slop.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragState {
    /// Position where the pointer went down.
    pub start_pos: Option<Point>,
    /// Last position reported as part of a delta.
    pub last_pos: Option<Point>,
    slop: f64,
    direction: Option<DragDirection>,
}

impl DragState {
    /// Creates an idle drag tracker with the given slop distance.
    ///
    /// Negative slop values are treated as zero.
    #[must_use]
    pub fn new(slop: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            slop: slop.max(0.0),
            direction: None,
        }
    }

    /// Returns the configured slop distance.
    #[must_use]
    pub fn slop(&self) -> f64 {
        self.slop
    }

    /// Start tracking a new sequence from the given position.
    ///
    /// Any previous sequence is discarded.
    pub fn start(&mut self, pos: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.direction = None;
    }

    /// Feed a new pointer position.
    ///
    /// Returns `None` while not tracking or while still inside the slop.
    /// Returns the delta since the last reported position otherwise.
    pub fn update(&mut self, pos: Point) -> Option<Vec2> {
        let start = self.start_pos?;
        if self.direction.is_none() {
            let total = pos - start;
            if total.hypot2() <= self.slop * self.slop {
                return None;
            }
            self.direction = Some(if total.x.abs() >= total.y.abs() {
                DragDirection::Horizontal
            } else {
                DragDirection::Vertical
            });
        }
        let last = self.last_pos.unwrap_or(start);
        self.last_pos = Some(pos);
        Some(pos - last)
    }

    /// Get total offset from the start position.
    #[must_use]
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns the latched direction once the slop has been crossed.
    #[must_use]
    pub fn direction(&self) -> Option<DragDirection> {
        self.direction
    }

    /// End the current sequence and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.direction = None;
    }

    /// Returns `true` while a sequence is being tracked, slop crossed or not.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.start_pos.is_some()
    }

    /// Returns `true` once the slop has been crossed in the current sequence.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.direction.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_drag_state_is_idle() {
        let drag = DragState::new(8.0);
        assert!(!drag.is_tracking());
        assert!(!drag.is_dragging());
        assert_eq!(drag.direction(), None);
    }

    #[test]
    fn negative_slop_is_clamped() {
        let drag = DragState::new(-3.0);
        assert_eq!(drag.slop(), 0.0);
    }

    #[test]
    fn update_returns_none_when_not_tracking() {
        let mut drag = DragState::new(8.0);
        assert_eq!(drag.update(Point::new(15.0, 25.0)), None);
        assert!(drag.last_pos.is_none());
    }

    #[test]
    fn movement_inside_slop_is_swallowed() {
        let mut drag = DragState::new(10.0);
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(6.0, 8.0)), None);
        assert!(drag.is_tracking());
        assert!(!drag.is_dragging());
        assert_eq!(drag.last_pos, Some(Point::new(0.0, 0.0)));
    }

    #[test]
    fn crossing_slop_latches_direction() {
        let mut drag = DragState::new(8.0);
        drag.start(Point::new(50.0, 50.0));

        let delta = drag.update(Point::new(50.0, 70.0));
        assert_eq!(delta, Some(Vec2::new(0.0, 20.0)));
        assert_eq!(drag.direction(), Some(DragDirection::Vertical));

        // Later horizontal movement does not change the latched direction.
        drag.update(Point::new(150.0, 70.0));
        assert_eq!(drag.direction(), Some(DragDirection::Vertical));
    }

    #[test]
    fn multiple_updates_track_incremental_deltas() {
        let mut drag = DragState::new(0.0);
        drag.start(Point::new(0.0, 0.0));

        assert_eq!(drag.update(Point::new(5.0, 3.0)), Some(Vec2::new(5.0, 3.0)));
        assert_eq!(drag.update(Point::new(8.0, 7.0)), Some(Vec2::new(3.0, 4.0)));
        assert_eq!(
            drag.update(Point::new(10.0, 10.0)),
            Some(Vec2::new(2.0, 3.0))
        );
    }

    #[test]
    fn total_offset_calculates_from_start() {
        let mut drag = DragState::new(8.0);
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(40.0, 25.0));

        let total = drag.total_offset(Point::new(20.0, 35.0));
        assert_eq!(total, Some(Vec2::new(10.0, 15.0)));
    }

    #[test]
    fn end_resets_state() {
        let mut drag = DragState::new(8.0);
        drag.start(Point::new(10.0, 20.0));
        drag.update(Point::new(40.0, 25.0));

        drag.end();

        assert!(!drag.is_tracking());
        assert!(!drag.is_dragging());
        assert_eq!(drag.total_offset(Point::ZERO), None);
    }

    #[test]
    fn start_overwrites_previous_sequence() {
        let mut drag = DragState::new(8.0);
        drag.start(Point::new(0.0, 0.0));
        drag.update(Point::new(30.0, 0.0));

        drag.start(Point::new(50.0, 60.0));

        assert!(!drag.is_dragging());
        assert_eq!(
            drag.total_offset(Point::new(55.0, 65.0)),
            Some(Vec2::new(5.0, 5.0))
        );
    }

    #[test]
    fn diagonal_tie_counts_as_horizontal() {
        let mut drag = DragState::new(1.0);
        drag.start(Point::ZERO);
        drag.update(Point::new(-10.0, 10.0));
        assert_eq!(drag.direction(), Some(DragDirection::Horizontal));
    }
}
