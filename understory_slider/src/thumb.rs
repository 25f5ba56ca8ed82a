// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The draggable thumb.
//!
//! The thumb decides whether a gesture is a *grab* (it started inside the
//! thumb) or a *tap* elsewhere on the track, and animates its center in
//! lockstep with the track fill.

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Circle, Point, Rect};
use understory_tween::{Animated, AnimationPhase};

use crate::config::{SliderStyle, ThumbStyle};
use crate::draw::DrawCommand;
use crate::layout::TrackGeometry;
use crate::value::ValueRange;

/// Thumb position and hit testing.
#[derive(Clone, Debug, PartialEq)]
pub struct ThumbController {
    style: ThumbStyle,
    center: Animated<Point>,
}

impl ThumbController {
    /// Creates a thumb resting at `center`.
    #[must_use]
    pub fn new(style: ThumbStyle, center: Point) -> Self {
        Self {
            style,
            center: Animated::new(center),
        }
    }

    /// Appearance of the thumb.
    #[must_use]
    pub fn style(&self) -> &ThumbStyle {
        &self.style
    }

    /// Where the thumb's center belongs for `value`.
    #[must_use]
    pub fn center_for(&self, value: i64, range: ValueRange, geometry: &TrackGeometry) -> Point {
        Point::new(
            geometry.position_for(value, range),
            geometry.center_y() + self.style.vertical_offset,
        )
    }

    /// The thumb frame at its resting position, used for hit testing.
    #[must_use]
    pub fn frame(&self) -> Rect {
        Rect::from_center_size(self.center.target(), self.style.size)
    }

    /// The thumb frame as currently displayed.
    #[must_use]
    pub fn displayed_frame(&self) -> Rect {
        Rect::from_center_size(self.center.value(), self.style.size)
    }

    /// Returns `true` if a gesture starting at `point` grabs the thumb.
    #[must_use]
    pub fn is_grab(&self, point: Point) -> bool {
        self.frame().contains(point)
    }

    /// Animates the thumb to `center`, restarting from the live position on
    /// the next tick.
    pub fn animate_to(&mut self, center: Point, now: Duration, style: &SliderStyle) {
        self.center
            .schedule(center, now, style.animation_duration, style.easing);
    }

    /// Moves the thumb to `center` immediately.
    pub fn jump_to(&mut self, center: Point) {
        self.center.set(center);
    }

    /// Advances the animation; returns the displayed center.
    pub fn tick(&mut self, now: Duration) -> Point {
        self.center.tick(now)
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.center.phase()
    }

    /// Appends the thumb's draw command.
    pub fn render_into(&self, out: &mut Vec<DrawCommand>, style: &SliderStyle) {
        let frame = self.displayed_frame();
        out.push(match self.style.image {
            Some(image) => DrawCommand::Image { image, frame },
            None => DrawCommand::FillCircle {
                circle: Circle::new(frame.center(), frame.width().min(frame.height()) * 0.5),
                color: style.fill_color,
            },
        });
    }
}
