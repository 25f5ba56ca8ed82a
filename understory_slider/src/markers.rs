// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Markers at the allowed values and their text labels.
//!
//! Both collections are rebuilt wholesale whenever the allowed values change
//! ([`MarkerLayout::rebuild`]); a bounds change only moves them
//! ([`MarkerLayout::relayout`]). Nothing here animates.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Circle, Point, Rect};

use crate::config::{SliderMetrics, SliderStyle};
use crate::draw::{DrawCommand, LabelAlignment};
use crate::layout::TrackGeometry;
use crate::value::{ValueRange, ValueSet};

/// Tick marker for an allowed value strictly inside the range.
///
/// A marker is a faint filled dot surrounded by a ring stroked in the
/// control's background color, which cuts the dot out of the track.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marker {
    /// The allowed value this marker stands for.
    pub value: i64,
    /// The filled dot.
    pub small_dot: Circle,
    /// Center line of the ring.
    pub ring: Circle,
    /// Stroke width of the ring.
    pub ring_width: f64,
}

impl Marker {
    fn new(value: i64, center: Point, metrics: &SliderMetrics) -> Self {
        let ring_width = (metrics.big_dot_diameter - metrics.small_dot_diameter).max(0.0);
        Self {
            value,
            small_dot: Circle::new(center, metrics.small_dot_diameter * 0.5),
            ring: Circle::new(center, metrics.big_dot_diameter * 0.5),
            ring_width,
        }
    }
}

/// Text label for an allowed value.
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    /// The allowed value this label shows.
    pub value: i64,
    /// Decimal text of `value`.
    pub text: String,
    /// Leading at the minimum, trailing at the maximum, centered otherwise.
    pub alignment: LabelAlignment,
    /// Box the text is laid out in.
    pub frame: Rect,
}

/// Owner of the marker and label collections.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MarkerLayout {
    markers: Vec<Marker>,
    labels: Vec<Label>,
}

impl MarkerLayout {
    /// Creates an empty layout.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Discards all markers and labels and creates new ones for `values`.
    pub fn rebuild(
        &mut self,
        values: &ValueSet,
        range: ValueRange,
        geometry: &TrackGeometry,
        metrics: &SliderMetrics,
    ) {
        self.markers.clear();
        self.labels.clear();

        self.markers.extend(
            values
                .iter()
                .filter(|&v| !range.is_boundary(v))
                .map(|v| Marker::new(v, geometry.point_for(v, range), metrics)),
        );
        self.labels.extend(values.iter().map(|value| {
            let alignment = alignment_for(value, range);
            Label {
                value,
                text: value.to_string(),
                alignment,
                frame: label_frame(value, alignment, range, geometry, metrics),
            }
        }));
    }

    /// Moves existing markers and labels to match new track geometry.
    pub fn relayout(
        &mut self,
        range: ValueRange,
        geometry: &TrackGeometry,
        metrics: &SliderMetrics,
    ) {
        for marker in &mut self.markers {
            let center = geometry.point_for(marker.value, range);
            *marker = Marker::new(marker.value, center, metrics);
        }
        for label in &mut self.labels {
            label.frame = label_frame(label.value, label.alignment, range, geometry, metrics);
        }
    }

    /// Markers in ascending value order.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Labels in ascending value order.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Appends draw commands for all markers, then all labels.
    pub fn render_into(
        &self,
        out: &mut Vec<DrawCommand>,
        style: &SliderStyle,
        metrics: &SliderMetrics,
    ) {
        let dot_color = style.marker_color.multiply_alpha(metrics.small_dot_opacity);
        for marker in &self.markers {
            out.push(DrawCommand::StrokeCircle {
                circle: marker.ring,
                width: marker.ring_width,
                color: style.background_color,
            });
            out.push(DrawCommand::FillCircle {
                circle: marker.small_dot,
                color: dot_color,
            });
        }
        for label in &self.labels {
            out.push(DrawCommand::Text {
                text: label.text.clone(),
                frame: label.frame,
                alignment: label.alignment,
                font_size: metrics.label_font_size,
                color: style.text_color,
            });
        }
    }
}

fn alignment_for(value: i64, range: ValueRange) -> LabelAlignment {
    if value == range.min() {
        LabelAlignment::Leading
    } else if value == range.max() {
        LabelAlignment::Trailing
    } else {
        LabelAlignment::Center
    }
}

/// Label boxes are as wide as the track. Boundary labels cover the track
/// exactly so their leading/trailing text lines up with its ends; the rest are
/// centered on their value.
fn label_frame(
    value: i64,
    alignment: LabelAlignment,
    range: ValueRange,
    geometry: &TrackGeometry,
    metrics: &SliderMetrics,
) -> Rect {
    let track = geometry.track;
    let center_y = track.y1 + metrics.label_offset;
    let center_x = match alignment {
        LabelAlignment::Center => geometry.position_for(value, range),
        LabelAlignment::Leading | LabelAlignment::Trailing => track.center().x,
    };
    Rect::from_center_size(
        Point::new(center_x, center_y),
        (track.width(), metrics.label_font_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn layout_for(values: &[i64], width: f64) -> (MarkerLayout, ValueRange) {
        let metrics = SliderMetrics::default();
        let geometry = TrackGeometry::new(Rect::new(0.0, 0.0, width, 120.0), &metrics);
        let set = ValueSet::try_from(values).unwrap();
        let range = set.range_or(ValueRange::DEFAULT);
        let mut layout = MarkerLayout::new();
        layout.rebuild(&set, range, &geometry, &metrics);
        (layout, range)
    }

    #[test]
    fn markers_skip_boundaries() {
        let (layout, _) = layout_for(&[1, 10, 30, 40], 600.0);
        let values: Vec<i64> = layout.markers().iter().map(|m| m.value).collect();
        assert_eq!(values, vec![10, 30]);
    }

    #[test]
    fn labels_cover_every_value_with_edge_alignment() {
        let (layout, _) = layout_for(&[1, 10, 30, 40], 600.0);
        let labels: Vec<(&str, LabelAlignment)> = layout
            .labels()
            .iter()
            .map(|l| (l.text.as_str(), l.alignment))
            .collect();
        assert_eq!(
            labels,
            vec![
                ("1", LabelAlignment::Leading),
                ("10", LabelAlignment::Center),
                ("30", LabelAlignment::Center),
                ("40", LabelAlignment::Trailing),
            ]
        );
    }

    #[test]
    fn marker_geometry_sits_on_track_line() {
        let (layout, range) = layout_for(&[0, 50, 100], 600.0);
        assert_eq!(range, ValueRange::new(0, 100));
        let marker = layout.markers()[0];
        assert_eq!(marker.small_dot.center, Point::new(300.0, 50.0));
        assert_eq!(marker.small_dot.radius, 10.0);
        assert_eq!(marker.ring.radius, 12.0);
        assert_eq!(marker.ring_width, 4.0);
    }

    #[test]
    fn label_frames_follow_alignment() {
        let (layout, _) = layout_for(&[0, 50, 100], 600.0);
        let labels = layout.labels();
        // Track spans 20..580; labels are centered 30 below its bottom edge (60).
        assert_eq!(labels[0].frame, Rect::new(20.0, 80.0, 580.0, 100.0));
        assert_eq!(labels[2].frame, labels[0].frame);
        assert_eq!(labels[1].frame.center(), Point::new(300.0, 90.0));
        assert_eq!(labels[1].frame.width(), 560.0);
    }

    #[test]
    fn relayout_moves_without_recreating() {
        let metrics = SliderMetrics::default();
        let (mut layout, range) = layout_for(&[0, 50, 100], 600.0);
        let wider = TrackGeometry::new(Rect::new(0.0, 0.0, 1_000.0, 120.0), &metrics);
        layout.relayout(range, &wider, &metrics);
        assert_eq!(layout.markers().len(), 1);
        assert_eq!(layout.markers()[0].small_dot.center.x, 500.0);
        assert_eq!(layout.labels()[1].frame.center().x, 500.0);
    }

    #[test]
    fn empty_and_single_sets() {
        let (layout, _) = layout_for(&[], 600.0);
        assert!(layout.markers().is_empty());
        assert!(layout.labels().is_empty());

        let (layout, _) = layout_for(&[7], 600.0);
        assert!(layout.markers().is_empty());
        assert_eq!(layout.labels().len(), 1);
        assert_eq!(layout.labels()[0].alignment, LabelAlignment::Leading);
    }

    #[test]
    fn render_order_rings_dots_labels() {
        let (layout, _) = layout_for(&[0, 25, 75, 100], 600.0);
        let style = SliderStyle::default();
        let mut out = Vec::new();
        layout.render_into(&mut out, &style, &SliderMetrics::default());
        assert_eq!(out.len(), 2 * 2 + 4);
        assert!(matches!(
            out[0],
            DrawCommand::StrokeCircle { color, .. } if color == style.background_color
        ));
        assert!(matches!(out[1], DrawCommand::FillCircle { .. }));
        assert!(matches!(out[4], DrawCommand::Text { .. }));
    }
}
