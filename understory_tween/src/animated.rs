// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated property state machine.
//!
//! ## Usage
//!
//! 1) Create the property with [`Animated::new`] at its initial value.
//! 2) Call [`Animated::animate_to`] to request an animated change, or
//!    [`Animated::set`] to jump without animation. Hosts that stop ticking
//!    while idle use [`Animated::schedule`] instead, so the transition starts
//!    on the next tick rather than at a stale timestamp.
//! 3) On each frame, call [`Animated::tick`] with the host's current time and
//!    draw the returned value.
//! 4) Stop requesting frames once [`Animated::is_animating`] is `false`.

use core::time::Duration;

use kurbo::{Point, Vec2};

use crate::{Easing, progress};

/// Linear interpolation between two values of the same type.
pub trait Lerp: Copy + PartialEq {
    /// Interpolates from `self` (at `t = 0`) to `other` (at `t = 1`).
    ///
    /// `t` may leave `[0, 1]` for overshooting curves.
    #[must_use]
    fn lerp(self, other: Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Lerp for Point {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

impl Lerp for Vec2 {
    fn lerp(self, other: Self, t: f64) -> Self {
        Self::lerp(self, other, t)
    }
}

/// Whether an [`Animated`] property currently has a transition in flight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum AnimationPhase {
    /// The live value equals the target.
    #[default]
    Idle,
    /// A transition toward the target is in flight.
    Animating,
}

impl AnimationPhase {
    /// Returns `true` for [`AnimationPhase::Animating`].
    #[must_use]
    pub fn is_animating(self) -> bool {
        self == Self::Animating
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct Transition<T> {
    from: T,
    /// `None` until the first tick after [`Animated::schedule`].
    start: Option<Duration>,
    duration: Duration,
    easing: Easing,
}

/// A single animatable property.
///
/// Tracks the target value, the live value as of the last [`tick`](Self::tick),
/// and at most one in-flight transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Animated<T> {
    value: T,
    target: T,
    transition: Option<Transition<T>>,
}

impl<T: Lerp + Default> Default for Animated<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Lerp> Animated<T> {
    /// Creates an idle property resting at `value`.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            value,
            target: value,
            transition: None,
        }
    }

    /// Returns the live value as of the last [`tick`](Self::tick).
    #[must_use]
    pub fn value(&self) -> T {
        self.value
    }

    /// Returns the value the property is heading toward (or resting at).
    #[must_use]
    pub fn target(&self) -> T {
        self.target
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        if self.transition.is_some() {
            AnimationPhase::Animating
        } else {
            AnimationPhase::Idle
        }
    }

    /// Returns `true` while a transition is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Jumps to `value` immediately, dropping any in-flight transition.
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.target = value;
        self.transition = None;
    }

    /// Starts a transition toward `target` at time `now`.
    ///
    /// Any in-flight transition is canceled and the new one starts from the
    /// live value at `now`. Requesting the target that is already in flight
    /// leaves that transition untouched. A zero `duration` behaves like
    /// [`set`](Self::set).
    pub fn animate_to(&mut self, target: T, now: Duration, duration: Duration, easing: Easing) {
        self.retarget(target, now, Some(now), duration, easing);
    }

    /// Requests a transition toward `target` that starts on the next
    /// [`tick`](Self::tick).
    ///
    /// `now` is only used to sample the live value of a transition already in
    /// flight. Otherwise this behaves like [`animate_to`](Self::animate_to).
    pub fn schedule(&mut self, target: T, now: Duration, duration: Duration, easing: Easing) {
        self.retarget(target, now, None, duration, easing);
    }

    fn retarget(
        &mut self,
        target: T,
        now: Duration,
        start: Option<Duration>,
        duration: Duration,
        easing: Easing,
    ) {
        if target == self.target {
            return;
        }
        if duration.is_zero() {
            self.set(target);
            return;
        }
        let live = self.sample(now);
        self.value = live;
        self.target = target;
        self.transition = Some(Transition {
            from: live,
            start,
            duration,
            easing,
        });
    }

    /// Returns the value the property would display at `now` without
    /// advancing any state.
    #[must_use]
    pub fn sample(&self, now: Duration) -> T {
        match &self.transition {
            Some(transition) => {
                let Some(start) = transition.start else {
                    return transition.from;
                };
                let t = progress(start, now, transition.duration);
                if t >= 1.0 {
                    self.target
                } else {
                    transition
                        .from
                        .lerp(self.target, transition.easing.apply(t))
                }
            }
            None => self.value,
        }
    }

    /// Advances the property to `now` and returns the live value.
    ///
    /// A scheduled transition starts at the first `now` it sees. When the
    /// transition's duration has elapsed the property settles on the target
    /// and returns to [`AnimationPhase::Idle`].
    pub fn tick(&mut self, now: Duration) -> T {
        if let Some(transition) = &mut self.transition {
            let start = *transition.start.get_or_insert(now);
            if progress(start, now, transition.duration) >= 1.0 {
                self.value = self.target;
                self.transition = None;
            } else {
                self.value = self.sample(now);
            }
        }
        self.value
    }
}
