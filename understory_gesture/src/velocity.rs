// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-dimensional pointer velocity estimation.
//!
//! [`VelocityTracker1D`] keeps a small ring buffer of timestamped positions and
//! estimates velocity with an impulse (kinetic energy) strategy: each segment
//! between two samples contributes work proportional to the change in
//! velocity it implies, and the accumulated energy is converted back to a
//! velocity. Only samples inside a short horizon contribute, and a gap longer
//! than [`ASSUME_STOPPED_MS`] between samples means the pointer stopped.
//!
//! ```
//! use understory_gesture::velocity::VelocityTracker1D;
//!
//! let mut tracker = VelocityTracker1D::new();
//! tracker.add_data_point(0, 0.0);
//! tracker.add_data_point(10, 100.0);
//! tracker.add_data_point(20, 200.0);
//!
//! // 100 px per 10 ms.
//! let v = tracker.velocity();
//! assert!((v - 10_000.0).abs() < 1_000.0);
//! ```

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

const HISTORY_SIZE: usize = 20;

/// Samples older than this, relative to the newest, are ignored.
const HORIZON_MS: u64 = 100;

/// A gap of this many milliseconds between samples means the pointer stopped.
pub const ASSUME_STOPPED_MS: u64 = 40;

#[derive(Clone, Copy, Debug)]
struct Sample {
    time_ms: u64,
    position: f64,
}

/// Impulse-based velocity tracker over absolute positions on one axis.
#[derive(Clone, Debug)]
pub struct VelocityTracker1D {
    samples: [Option<Sample>; HISTORY_SIZE],
    index: usize,
}

impl Default for VelocityTracker1D {
    fn default() -> Self {
        Self::new()
    }
}

impl VelocityTracker1D {
    /// Creates an empty tracker.
    #[must_use]
    pub fn new() -> Self {
        Self {
            samples: [None; HISTORY_SIZE],
            index: 0,
        }
    }

    /// Records the position at the given time.
    pub fn add_data_point(&mut self, time_ms: u64, position: f64) {
        self.index = (self.index + 1) % HISTORY_SIZE;
        self.samples[self.index] = Some(Sample { time_ms, position });
    }

    /// Estimated velocity in units per second.
    ///
    /// Returns `0.0` with fewer than two usable samples.
    #[must_use]
    pub fn velocity(&self) -> f64 {
        let Some(newest) = self.samples[self.index] else {
            return 0.0;
        };

        let mut positions = [0.0_f64; HISTORY_SIZE];
        let mut times = [0.0_f64; HISTORY_SIZE];
        let mut count = 0;
        let mut cursor = self.index;
        let mut previous = newest;

        while let Some(sample) = self.samples[cursor] {
            let age = newest.time_ms.saturating_sub(sample.time_ms);
            let gap = sample.time_ms.abs_diff(previous.time_ms);
            previous = sample;
            if age > HORIZON_MS || gap > ASSUME_STOPPED_MS {
                break;
            }

            positions[count] = sample.position;
            times[count] = -(age as f64);
            count += 1;
            if count == HISTORY_SIZE {
                break;
            }
            cursor = if cursor == 0 {
                HISTORY_SIZE - 1
            } else {
                cursor - 1
            };
        }

        if count < 2 {
            return 0.0;
        }
        impulse_velocity(&positions[..count], &times[..count]) * 1000.0
    }

    /// Estimated velocity, clamped to `[-max_velocity, max_velocity]`.
    ///
    /// A non-finite or non-positive `max_velocity` yields `0.0`.
    #[must_use]
    pub fn velocity_with_max(&self, max_velocity: f64) -> f64 {
        if !max_velocity.is_finite() || max_velocity <= 0.0 {
            return 0.0;
        }
        let velocity = self.velocity();
        if velocity.is_nan() {
            return 0.0;
        }
        velocity.clamp(-max_velocity, max_velocity)
    }

    /// Clears all samples.
    pub fn reset(&mut self) {
        self.samples = [None; HISTORY_SIZE];
        self.index = 0;
    }
}

/// `positions[0]`/`times[0]` is the newest sample; times are non-positive ages.
fn impulse_velocity(positions: &[f64], times: &[f64]) -> f64 {
    let oldest = positions.len() - 1;
    let mut work = 0.0;
    let mut next_time = times[oldest];

    for i in (1..=oldest).rev() {
        let current_time = next_time;
        next_time = times[i - 1];
        if current_time == next_time {
            continue;
        }
        let v_curr = (positions[i - 1] - positions[i]) / (next_time - current_time);
        let v_prev = energy_to_velocity(work);
        work += (v_curr - v_prev) * v_curr.abs();
        if i == oldest {
            work *= 0.5;
        }
    }

    energy_to_velocity(work)
}

/// E = ½·v² with unit mass.
fn energy_to_velocity(energy: f64) -> f64 {
    let v = (2.0 * energy.abs()).sqrt();
    if energy < 0.0 { -v } else { v }
}
