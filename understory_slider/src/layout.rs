// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track placement inside the control bounds.

use kurbo::{Point, Rect, RoundedRect};

use crate::config::SliderMetrics;
use crate::value::{ValueRange, percentage, value_from_position};

/// Track placement derived from the control bounds.
///
/// The *content span* is the part of the track a value can map to: it is
/// inset by half the track height on each side so the rounded fill cap of the
/// minimum and maximum values sits exactly inside the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrackGeometry {
    /// The full track rectangle.
    pub track: Rect,
    /// X coordinate that maps to the range minimum.
    pub content_origin: f64,
    /// Distance from `content_origin` to the X coordinate of the range maximum.
    pub content_width: f64,
}

impl TrackGeometry {
    /// Lays out the track inside `bounds`.
    ///
    /// Bounds narrower than the insets produce an empty track rather than a
    /// negative one.
    #[must_use]
    pub fn new(bounds: Rect, metrics: &SliderMetrics) -> Self {
        let bounds = bounds.abs();
        let inset = metrics.track_horizontal_inset;
        let half_height = metrics.track_height * 0.5;
        let x0 = bounds.x0 + inset;
        let width = (bounds.width() - inset * 2.0).max(0.0);
        let y0 = bounds.y0 + metrics.track_top_offset;
        Self {
            track: Rect::new(x0, y0, x0 + width, y0 + metrics.track_height),
            content_origin: x0 + half_height,
            content_width: (bounds.width() - (inset + half_height) * 2.0).max(0.0),
        }
    }

    /// Y coordinate of the track's center line.
    #[must_use]
    pub fn center_y(&self) -> f64 {
        self.track.center().y
    }

    /// Track thickness.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.track.height()
    }

    /// The track as a fully rounded rectangle.
    #[must_use]
    pub fn rounded(&self) -> RoundedRect {
        self.track.to_rounded_rect(self.height() * 0.5)
    }

    /// X coordinate of `value` on the track.
    #[must_use]
    pub fn position_for(&self, value: i64, range: ValueRange) -> f64 {
        percentage(value, range) * self.content_width + self.content_origin
    }

    /// Point on the track's center line for `value`.
    #[must_use]
    pub fn point_for(&self, value: i64, range: ValueRange) -> Point {
        Point::new(self.position_for(value, range), self.center_y())
    }

    /// Unsnapped value under `x`.
    #[must_use]
    pub fn value_at(&self, x: f64, range: ValueRange) -> i64 {
        value_from_position(x, self.content_origin, self.content_width, range)
    }
}
