// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration: colors, timing, geometry, and the
//! optional thumb.

use core::time::Duration;

use kurbo::Size;
use peniko::Color;
use understory_tween::Easing;

use crate::value::ValueRange;

/// Default animation duration for track and thumb transitions.
pub const DEFAULT_ANIMATION_DURATION: Duration = Duration::from_millis(200);

/// Colors and timing.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderStyle {
    /// Unfilled track background.
    pub track_color: Color,
    /// Filled portion of the track, and the fallback thumb.
    pub fill_color: Color,
    /// Value labels.
    pub text_color: Color,
    /// The control's background. Marker rings are stroked with it to cut the
    /// dots out of the track.
    pub background_color: Color,
    /// Small marker dots, before [`SliderMetrics::small_dot_opacity`] is applied.
    pub marker_color: Color,
    /// Duration of value-change transitions.
    pub animation_duration: Duration,
    /// Timing curve of value-change transitions.
    pub easing: Easing,
}

impl Default for SliderStyle {
    fn default() -> Self {
        Self {
            track_color: Color::from_rgb8(0xE5, 0xE5, 0xE5),
            fill_color: Color::from_rgb8(0x00, 0xAF, 0xD0),
            text_color: Color::from_rgb8(0x99, 0x99, 0x99),
            background_color: Color::WHITE,
            marker_color: Color::BLACK,
            animation_duration: DEFAULT_ANIMATION_DURATION,
            easing: Easing::EaseInOut,
        }
    }
}

/// Geometry of the track, markers, and labels, in local units.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SliderMetrics {
    /// Track thickness; the track's corner radius is half of it.
    pub track_height: f64,
    /// Distance from the top of the bounds to the top of the track.
    pub track_top_offset: f64,
    /// Inset of the track from the left and right edges of the bounds.
    pub track_horizontal_inset: f64,
    /// Label font size, also the label box height.
    pub label_font_size: f64,
    /// Distance from the bottom of the track to the label center line.
    pub label_offset: f64,
    /// Diameter of the marker dot.
    pub small_dot_diameter: f64,
    /// Diameter of the marker ring.
    pub big_dot_diameter: f64,
    /// Opacity multiplier for marker dots.
    pub small_dot_opacity: f32,
}

impl Default for SliderMetrics {
    fn default() -> Self {
        Self {
            track_height: 20.0,
            track_top_offset: 40.0,
            track_horizontal_inset: 20.0,
            label_font_size: 20.0,
            label_offset: 30.0,
            small_dot_diameter: 20.0,
            big_dot_diameter: 24.0,
            small_dot_opacity: 0.1,
        }
    }
}

/// Opaque handle to a thumb image owned by the host.
#[repr(transparent)]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThumbImage(pub u32);

/// Appearance of the draggable thumb.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ThumbStyle {
    /// Size of the thumb frame; also its touch target.
    pub size: Size,
    /// Offset of the thumb center below the track's center line.
    pub vertical_offset: f64,
    /// Image drawn in the thumb frame. Without one a filled circle is drawn.
    pub image: Option<ThumbImage>,
}

impl Default for ThumbStyle {
    fn default() -> Self {
        Self {
            size: Size::new(32.0, 32.0),
            vertical_offset: 0.0,
            image: None,
        }
    }
}

/// Everything a [`Slider`](crate::Slider) needs at construction.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct SliderConfig {
    /// Colors and timing.
    pub style: SliderStyle,
    /// Track, marker, and label geometry.
    pub metrics: SliderMetrics,
    /// The thumb; `None` selects the track-only variant.
    pub thumb: Option<ThumbStyle>,
    /// Range used while no allowed values are configured.
    pub default_range: ValueRange,
}

impl SliderConfig {
    /// Returns a config for the variant with a draggable thumb.
    #[must_use]
    pub fn with_thumb(mut self, thumb: ThumbStyle) -> Self {
        self.thumb = Some(thumb);
        self
    }

    /// Replaces the colors and timing.
    #[must_use]
    pub fn with_style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    /// Replaces the geometry.
    #[must_use]
    pub fn with_metrics(mut self, metrics: SliderMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the range used while no allowed values are configured.
    #[must_use]
    pub fn with_default_range(mut self, range: ValueRange) -> Self {
        self.default_range = range;
        self
    }

    /// Sets the transition duration.
    #[must_use]
    pub fn with_animation_duration(mut self, duration: Duration) -> Self {
        self.style.animation_duration = duration;
        self
    }

    /// Sets the transition timing curve.
    #[must_use]
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.style.easing = easing;
        self
    }
}
