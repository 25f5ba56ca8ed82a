// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_slider --heading-base-level=0

//! Understory Slider: a headless, discrete slider control.
//!
//! This crate implements the logic of a touch slider that snaps to a fixed set
//! of allowed integer values: the mapping between pointer positions and values,
//! nearest-value snapping, a begin/continue/end gesture state machine, and the
//! animated track fill and thumb that follow the value.
//!
//! It does **not** receive platform events or rasterize anything. Callers are
//! expected to:
//! - Deliver pointer input in the control's local coordinates through
//!   [`Slider::on_begin`], [`Slider::on_continue`], and [`Slider::on_end`].
//! - Drive time with [`Slider::tick`] and repaint while
//!   [`Slider::take_redraw`] or [`Slider::is_animating`] says so.
//! - Turn the [`DrawCommand`]s from [`Slider::render`] into pixels with the
//!   backend of their choice.
//!
//! ## Variants
//!
//! One [`Slider`] type covers both variants:
//!
//! - **Track only** (`SliderConfig::thumb == None`): touching the track and
//!   moving updates the value live; lifting the finger does nothing more.
//! - **With thumb** (`SliderConfig::thumb == Some(_)`): a gesture that starts
//!   on the thumb drags it; a gesture that starts anywhere else is a tap and
//!   jumps to the value under the finger when it ends.
//!
//! With no allowed values configured the slider is continuous over
//! [`SliderConfig::default_range`] (`0..=100` unless changed).
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Rect};
//! use understory_slider::{Slider, SliderConfig, ThumbStyle};
//!
//! let mut slider = Slider::new(SliderConfig::default().with_thumb(ThumbStyle::default()));
//! slider.set_bounds(Rect::new(0.0, 0.0, 600.0, 120.0));
//! slider.configure([1, 10, 30, 40]);
//! assert_eq!(slider.value(), 1);
//! assert_eq!(slider.markers().len(), 2);
//!
//! // Tap near the right end of the track: nothing moves until the finger lifts.
//! let tap = Point::new(560.0, 50.0);
//! slider.on_begin(tap);
//! assert_eq!(slider.on_continue(tap), None);
//! assert_eq!(slider.on_end(Some(tap)), Some(40));
//!
//! // Animations start on the next tick; keep ticking frames until they finish.
//! let mut now = Duration::from_secs(3);
//! while slider.tick(now) {
//!     now += Duration::from_millis(16);
//! }
//! assert!(now >= Duration::from_millis(3_200));
//! assert_eq!(slider.displayed_percentage(), 1.0);
//! ```
//!
//! ## Snapping rules
//!
//! - Gestures map the pointer X onto the range (rounding to the nearest
//!   integer, clamping at the ends), then snap to the closest allowed value.
//!   Ties go to the lower value.
//! - [`Slider::set_value`] only clamps. A programmatic value between two
//!   allowed values stays where it was put.
//! - [`Slider::configure`] always resets the value to the new minimum.
//!
//! ## Errors
//!
//! The control never fails: out-of-range input is clamped, a degenerate range
//! draws an empty fill, and an empty value list means a continuous slider.
//! [`ValueSet::new`] is available for callers who want to validate a list up
//! front and get a [`ValueSetError`] instead.
//!
//! ## Logging
//!
//! Value changes and configuration are reported through `tracing` at `debug`
//! level and gesture transitions at `trace` level. A `warn` event is emitted
//! when [`Slider::configure`] has to sort or deduplicate its input.
//!
//! This crate is `no_std` (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod draw;
mod layout;
mod markers;
mod slider;
mod thumb;
mod track;
pub mod value;

pub use config::{
    DEFAULT_ANIMATION_DURATION, SliderConfig, SliderMetrics, SliderStyle, ThumbImage, ThumbStyle,
};
pub use draw::{DrawCommand, LabelAlignment, SliderRenderer};
pub use layout::TrackGeometry;
pub use markers::{Label, Marker, MarkerLayout};
pub use slider::{GesturePhase, Redraw, Slider, SliderState};
pub use thumb::ThumbController;
pub use track::{TrackRenderer, render_track};
pub use value::{ValueRange, ValueSet, ValueSetError};

pub use understory_tween::Easing;
