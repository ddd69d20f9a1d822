// Copyright 2026 the Listkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Listkit Feedback: active-state tracking for list rows.
//!
//! This crate tracks the `active` visual flag of a single row across three
//! input modalities, without depending on any UI framework or runtime:
//!
//! - **Pointer**: enter sets `active`, leave clears it, both gated on a
//!   `disabled` flag supplied by the caller.
//! - **Touch**: touch-start sets `active` and records a start time;
//!   touch-end schedules a clear so that feedback stays visible for at
//!   least [`MIN_TOUCH_FEEDBACK_MS`] measured from touch-start, however
//!   fast the gesture was.
//! - **Keyboard**: a Tab key-up sets `active` and acquires a one-shot
//!   subscription from an [`OutsideClickRegistry`]; the next click outside
//!   the row's bounds (or a Tab key-down, or teardown) clears both.
//!
//! All time-sensitive calls take `u64` millisecond timestamps from the
//! host. There are no threads and no timers here: [`FeedbackState::touch_end`]
//! stores a deadline, [`FeedbackState::next_deadline`] exposes it so the
//! host can arm a real timer, and [`FeedbackState::poll`] applies it.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect};
//! use listkit_feedback::{FeedbackState, Key, OutsideClickRegistry, MIN_TOUCH_FEEDBACK_MS};
//!
//! let mut state = FeedbackState::new();
//! let mut registry = OutsideClickRegistry::new();
//!
//! // A quick tap: touch-start at t=1000, touch-end at t=1100.
//! state.touch_start(1000);
//! assert!(state.is_active());
//! let clear_at = state.touch_end(1100);
//! assert_eq!(clear_at, 1000 + MIN_TOUCH_FEEDBACK_MS);
//!
//! // Still active until the deadline passes.
//! assert!(!state.poll(1400));
//! assert!(state.poll(1450));
//! assert!(!state.is_active());
//!
//! // Keyboard entry: Tab key-up subscribes to outside clicks.
//! state.key_up(Key::Tab, &mut registry, Rect::new(0.0, 0.0, 200.0, 48.0));
//! assert!(state.is_active());
//!
//! // A click somewhere else fires the subscription and clears `active`.
//! let fired = registry.global_click(Point::new(500.0, 500.0));
//! assert!(state.outside_click(&fired));
//! assert!(!state.is_active());
//! assert!(registry.is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod feedback;
mod outside_click;

pub use feedback::{FeedbackState, Key, MIN_TOUCH_FEEDBACK_MS};
pub use outside_click::{OutsideClickRegistry, SubscriptionId};
