// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fling recognition from a stream of pointer events.
//!
//! [`FlingRecognizer`] is fed raw [`PointerEvent`]s. A pointer down restarts
//! it, moves are sampled into per-axis [`VelocityTracker1D`]s, and the pointer
//! up decides whether the release was fast enough to count as a fling. A
//! cancel discards the sequence without emitting anything.
//!
//! ```
//! use kurbo::Point;
//! use understory_gesture::fling::{FlingConfig, FlingRecognizer};
//! use understory_gesture::pointer::PointerEvent;
//!
//! let mut flings = FlingRecognizer::new(FlingConfig::default());
//!
//! assert!(flings.on_event(&PointerEvent::down(Point::new(300.0, 10.0), 0)).is_none());
//! assert!(flings.on_event(&PointerEvent::moved(Point::new(250.0, 10.0), 10)).is_none());
//! let fling = flings
//!     .on_event(&PointerEvent::up(Point::new(200.0, 10.0), 20))
//!     .expect("fast leftward release");
//! assert!(fling.velocity.x < 0.0);
//! ```

use kurbo::Vec2;

use crate::pointer::{PointerEvent, PointerPhase};
use crate::velocity::VelocityTracker1D;

/// Velocity thresholds for fling recognition, in units per second.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingConfig {
    /// A release must exceed this speed on at least one axis.
    pub min_velocity: f64,
    /// Reported velocities are clamped to this magnitude per axis.
    pub max_velocity: f64,
}

impl Default for FlingConfig {
    fn default() -> Self {
        Self {
            min_velocity: 50.0,
            max_velocity: 8_000.0,
        }
    }
}

impl FlingConfig {
    /// Scales both thresholds, for example from density-independent units to pixels.
    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self {
            min_velocity: self.min_velocity * factor,
            max_velocity: self.max_velocity * factor,
        }
    }
}

/// A recognized fling.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlingEvent {
    /// Release velocity in units per second. Positive `x` is rightward.
    pub velocity: Vec2,
}

/// Recognizes flings in a pointer event stream, one sequence at a time.
#[derive(Clone, Debug)]
pub struct FlingRecognizer {
    config: FlingConfig,
    x: VelocityTracker1D,
    y: VelocityTracker1D,
    tracking: bool,
}

impl Default for FlingRecognizer {
    fn default() -> Self {
        Self::new(FlingConfig::default())
    }
}

impl FlingRecognizer {
    /// Creates an idle recognizer.
    #[must_use]
    pub fn new(config: FlingConfig) -> Self {
        Self {
            config,
            x: VelocityTracker1D::new(),
            y: VelocityTracker1D::new(),
            tracking: false,
        }
    }

    /// Returns the thresholds in use.
    #[must_use]
    pub fn config(&self) -> FlingConfig {
        self.config
    }

    /// Returns `true` between a pointer down and the end of its sequence.
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Feeds one event; returns a fling when a release qualifies.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<FlingEvent> {
        match event.phase {
            PointerPhase::Down => {
                self.reset();
                self.tracking = true;
                self.sample(event);
                None
            }
            PointerPhase::Move => {
                if self.tracking {
                    self.sample(event);
                }
                None
            }
            PointerPhase::Up => {
                if !self.tracking {
                    return None;
                }
                self.sample(event);
                self.tracking = false;
                let velocity = Vec2::new(
                    self.x.velocity_with_max(self.config.max_velocity),
                    self.y.velocity_with_max(self.config.max_velocity),
                );
                let min = self.config.min_velocity;
                (velocity.x.abs() > min || velocity.y.abs() > min)
                    .then_some(FlingEvent { velocity })
            }
            PointerPhase::Cancel => {
                self.reset();
                None
            }
        }
    }

    /// Lazily recognizes flings over a sequence of events.
    pub fn recognize<'a, I>(&'a mut self, events: I) -> impl Iterator<Item = FlingEvent> + 'a
    where
        I: IntoIterator<Item = PointerEvent>,
        I::IntoIter: 'a,
    {
        events.into_iter().filter_map(move |e| self.on_event(&e))
    }

    /// Drops any in-progress sequence.
    pub fn reset(&mut self) {
        self.x.reset();
        self.y.reset();
        self.tracking = false;
    }

    fn sample(&mut self, event: &PointerEvent) {
        self.x.add_data_point(event.time_ms, event.position.x);
        self.y.add_data_point(event.time_ms, event.position.y);
    }
}
