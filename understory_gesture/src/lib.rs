// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_gesture --heading-base-level=0

//! Understory Gesture: pointer gesture state for touch UI.
//!
//! This crate provides small state machines that turn a raw pointer stream
//! into gesture facts. Each module handles one concern:
//!
//! - [`pointer`]: The [`PointerEvent`](pointer::PointerEvent) model fed to everything else
//! - [`drag`]: Tap-versus-drag discrimination with a touch slop and a latched direction
//! - [`velocity`]: Impulse-based 1D velocity estimation over a short sample horizon
//! - [`fling`]: Fling recognition on release, built on the velocity trackers
//!
//! Like the rest of Understory, these types do not assume a UI framework or an
//! event loop. Hosts translate native events into [`PointerEvent`](pointer::PointerEvent)s,
//! feed them in order, and interpret the results.
//!
//! ## Fling recognition
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::fling::FlingRecognizer;
//! use understory_gesture::pointer::PointerEvent;
//!
//! let mut flings = FlingRecognizer::default();
//! let events = [
//!     PointerEvent::down(Point::new(10.0, 0.0), 0),
//!     PointerEvent::moved(Point::new(60.0, 0.0), 8),
//!     PointerEvent::moved(Point::new(110.0, 0.0), 16),
//!     PointerEvent::up(Point::new(160.0, 0.0), 24),
//! ];
//! let fling = flings.recognize(events).next().unwrap();
//! assert!(fling.velocity.x > 0.0);
//! ```
//!
//! ## Drag slop
//!
//! ```rust
//! use kurbo::Point;
//! use understory_gesture::drag::DragState;
//!
//! let mut drag = DragState::new(8.0);
//! drag.start(Point::new(0.0, 0.0));
//! assert!(drag.update(Point::new(4.0, 0.0)).is_none());
//! assert!(drag.update(Point::new(40.0, 0.0)).is_some());
//! ```
//!
//! ## Features
//!
//! - `std` (default): Compile Kurbo with the standard library.
//! - `libm`: Use `libm` for float functions in `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod drag;
pub mod fling;
pub mod pointer;
pub mod velocity;
