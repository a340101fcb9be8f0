// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal pointer event model shared by the gesture state machines.
//!
//! Hosts translate their native touch or mouse events into [`PointerEvent`]s.
//! Positions are in the coordinate space of the receiving container, and
//! timestamps are monotonic milliseconds from any origin.

use kurbo::Point;

/// Where a pointer event sits within a gesture sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    /// The pointer touched down; starts a new sequence.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted; ends the sequence.
    Up,
    /// The sequence was aborted by the host (for example, a parent stole it).
    Cancel,
}

/// A single pointer sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Phase within the current gesture sequence.
    pub phase: PointerPhase,
    /// Pointer position in container coordinates.
    pub position: Point,
    /// Monotonic timestamp in milliseconds.
    pub time_ms: u64,
}

impl PointerEvent {
    /// Creates an event with an explicit phase.
    #[must_use]
    pub fn new(phase: PointerPhase, position: Point, time_ms: u64) -> Self {
        Self {
            phase,
            position,
            time_ms,
        }
    }

    /// Shorthand for a [`PointerPhase::Down`] event.
    #[must_use]
    pub fn down(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Down, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Move`] event.
    #[must_use]
    pub fn moved(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Move, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Up`] event.
    #[must_use]
    pub fn up(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Up, position, time_ms)
    }

    /// Shorthand for a [`PointerPhase::Cancel`] event.
    #[must_use]
    pub fn cancel(position: Point, time_ms: u64) -> Self {
        Self::new(PointerPhase::Cancel, position, time_ms)
    }

    /// Returns `true` if this event ends its gesture sequence.
    #[must_use]
    pub fn ends_sequence(&self) -> bool {
        matches!(self.phase, PointerPhase::Up | PointerPhase::Cancel)
    }
}
