// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tween --heading-base-level=0

//! Understory Tween: host-agnostic animated values.
//!
//! This crate models a single animatable property as a small state machine:
//! a **target** value, the **live** interpolated value, and at most one
//! **in-flight** transition between them. It does not own a clock, a frame
//! loop, or a renderer. Hosts feed monotonic timestamps (as [`Duration`]s since
//! an arbitrary epoch) and read back the value to draw.
//!
//! The one behavioral rule that matters is *cancel-and-restart from the live
//! value*: when a new target arrives while a transition is running, the old
//! transition is dropped and the new one starts from wherever the property is
//! currently displayed, not from the old target. Rapid successive changes
//! therefore never produce a visual jump.
//!
//! - [`Easing`]: timing curves, including the cubic-bezier
//!   ease-in-ease-out curve used by most platform toolkits.
//! - [`Lerp`]: linear interpolation for the value types that get animated.
//! - [`Animated`]: the property itself, with [`AnimationPhase`] reporting
//!   whether it is idle or animating.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use understory_tween::{Animated, AnimationPhase, Easing};
//!
//! let mut fill = Animated::new(0.0_f64);
//! let duration = Duration::from_millis(200);
//!
//! fill.animate_to(1.0, Duration::ZERO, duration, Easing::Linear);
//! assert_eq!(fill.phase(), AnimationPhase::Animating);
//!
//! // Halfway through, the live value is halfway to the target.
//! assert_eq!(fill.tick(Duration::from_millis(100)), 0.5);
//!
//! // Retarget mid-flight: the new transition starts from 0.5.
//! fill.animate_to(0.0, Duration::from_millis(100), duration, Easing::Linear);
//! assert_eq!(fill.sample(Duration::from_millis(100)), 0.5);
//!
//! // Once the duration elapses the value settles on the last target.
//! assert_eq!(fill.tick(Duration::from_millis(300)), 0.0);
//! assert_eq!(fill.phase(), AnimationPhase::Idle);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use core::time::Duration;

mod animated;
mod easing;

pub use animated::{Animated, AnimationPhase, Lerp};
pub use easing::Easing;

/// Returns the normalized progress of a transition started at `start`.
///
/// The result is in `[0, 1]`. A zero `duration` is treated as already
/// complete.
#[must_use]
pub fn progress(start: Duration, now: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_sub(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}
