// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The filled progress track.
//!
//! [`TrackRenderer`] owns the only presentation state of the track: the
//! displayed percentage, animated with cancel-and-restart semantics. Drawing
//! is the pure function [`render_track`].

use core::time::Duration;

use kurbo::Rect;
use understory_tween::{Animated, AnimationPhase};

use crate::config::SliderStyle;
use crate::draw::DrawCommand;
use crate::layout::TrackGeometry;

/// Displayed fill percentage of the track.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct TrackRenderer {
    percentage: Animated<f64>,
}

impl TrackRenderer {
    /// Creates a renderer displaying `percentage`.
    #[must_use]
    pub fn new(percentage: f64) -> Self {
        Self {
            percentage: Animated::new(percentage),
        }
    }

    /// Animates toward `percentage`, starting on the next tick.
    ///
    /// `now` samples the live value of a transition already in flight.
    pub fn animate_to(&mut self, percentage: f64, now: Duration, style: &SliderStyle) {
        self.percentage
            .schedule(percentage, now, style.animation_duration, style.easing);
    }

    /// Shows `percentage` immediately.
    pub fn jump_to(&mut self, percentage: f64) {
        self.percentage.set(percentage);
    }

    /// Advances the animation; returns the displayed percentage.
    pub fn tick(&mut self, now: Duration) -> f64 {
        self.percentage.tick(now)
    }

    /// Percentage as of the last tick.
    #[must_use]
    pub fn displayed(&self) -> f64 {
        self.percentage.value()
    }

    /// Percentage the track is heading toward.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.percentage.target()
    }

    /// Whether a transition is in flight.
    #[must_use]
    pub fn phase(&self) -> AnimationPhase {
        self.percentage.phase()
    }
}

/// Background and fill of the track at `percentage`.
///
/// The fill is left aligned and `percentage × content + track height` wide,
/// so an empty track still shows one rounded cap of fill.
#[must_use]
pub fn render_track(
    geometry: &TrackGeometry,
    percentage: f64,
    style: &SliderStyle,
) -> [DrawCommand; 2] {
    let track = geometry.track;
    let height = track.height();
    let radius = height * 0.5;
    let content_width = (track.width() - height).max(0.0);
    let fill_width = (percentage.clamp(0.0, 1.0) * content_width + height).min(track.width());
    let fill = Rect::new(track.x0, track.y0, track.x0 + fill_width, track.y1);
    [
        DrawCommand::FillRoundedRect {
            shape: track.to_rounded_rect(radius),
            color: style.track_color,
        },
        DrawCommand::FillRoundedRect {
            shape: fill.to_rounded_rect(radius),
            color: style.fill_color,
        },
    ]
}
