// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The slider controller: value ownership, gesture state machine, and the
//! redraw contract with the host.
//!
//! ## Usage
//!
//! 1) Create a [`Slider`] from a [`SliderConfig`] and give it bounds with
//!    [`Slider::set_bounds`].
//! 2) Optionally restrict it to a set of allowed values with
//!    [`Slider::configure`].
//! 3) Feed pointer input through [`Slider::on_begin`],
//!    [`Slider::on_continue`], and [`Slider::on_end`].
//! 4) Each frame, call [`Slider::tick`] with the current time, drain
//!    [`Slider::take_redraw`], and draw [`Slider::render`] when asked to.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use kurbo::{Point, Rect};
use understory_tween::Easing;

use crate::config::SliderConfig;
use crate::draw::{DrawCommand, SliderRenderer};
use crate::layout::TrackGeometry;
use crate::markers::{Label, Marker, MarkerLayout};
use crate::thumb::ThumbController;
use crate::track::{TrackRenderer, render_track};
use crate::value::{ValueRange, ValueSet, percentage, snap_to_nearest};

/// Where the slider is within a gesture.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum GesturePhase {
    /// No gesture.
    #[default]
    Idle,
    /// A gesture has begun but has not moved yet.
    Tracking,
    /// A gesture is moving.
    Dragging,
    /// A gesture just ended. Returns to [`Idle`](Self::Idle) on the next
    /// [`Slider::tick`] or [`Slider::on_begin`].
    Snapped,
}

impl GesturePhase {
    /// Returns `true` for [`Tracking`](Self::Tracking) and [`Dragging`](Self::Dragging).
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, Self::Tracking | Self::Dragging)
    }
}

/// Snapshot of the slider's domain state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct SliderState {
    /// The current value; always inside the range.
    pub current_value: i64,
    /// A gesture is in progress.
    pub is_dragging: bool,
    /// The gesture in progress started on the thumb.
    pub is_thumb_grabbed: bool,
}

/// How the host should repaint after a state change.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Redraw {
    /// Repaint once; nothing is animating because of this change.
    Immediate,
    /// Keep repainting (calling [`Slider::tick`]) for `duration`.
    Animated {
        /// Transition duration.
        duration: Duration,
        /// Transition timing curve.
        easing: Easing,
    },
}

impl Redraw {
    fn merge(self, other: Self) -> Self {
        match (self, other) {
            (animated @ Self::Animated { .. }, Self::Immediate) => animated,
            (_, other) => other,
        }
    }
}

type ValueListener = Box<dyn FnMut(i64)>;

/// A discrete slider control.
///
/// The slider owns its value, its allowed values, and the presentation state
/// needed to animate the track and thumb. It never draws; see
/// [`render`](Self::render).
///
/// The value-changed listener runs while the slider is mutably borrowed, so it
/// cannot call back into the slider that is notifying it. Hosts that share the
/// slider through `Rc<RefCell<_>>` and re-enter it from the listener hit a
/// borrow panic; re-entrant `set_value` or `configure` is not supported.
pub struct Slider {
    config: SliderConfig,
    values: ValueSet,
    range: ValueRange,
    state: SliderState,
    phase: GesturePhase,
    bounds: Rect,
    geometry: TrackGeometry,
    track: TrackRenderer,
    thumb: Option<ThumbController>,
    markers: MarkerLayout,
    on_value_changed: Option<ValueListener>,
    redraw: Option<Redraw>,
    now: Duration,
}

impl fmt::Debug for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slider")
            .field("values", &self.values)
            .field("range", &self.range)
            .field("state", &self.state)
            .field("phase", &self.phase)
            .field("bounds", &self.bounds)
            .field("has_listener", &self.on_value_changed.is_some())
            .finish_non_exhaustive()
    }
}

impl Default for Slider {
    fn default() -> Self {
        Self::new(SliderConfig::default())
    }
}

impl Slider {
    /// Creates a continuous slider over `config.default_range` at its minimum,
    /// with empty bounds.
    #[must_use]
    pub fn new(config: SliderConfig) -> Self {
        let range = config.default_range;
        let bounds = Rect::ZERO;
        let geometry = TrackGeometry::new(bounds, &config.metrics);
        let value = range.min();
        let thumb = config.thumb.map(|style| {
            let mut thumb = ThumbController::new(style, Point::ZERO);
            let center = thumb.center_for(value, range, &geometry);
            thumb.jump_to(center);
            thumb
        });
        Self {
            config,
            values: ValueSet::empty(),
            range,
            state: SliderState {
                current_value: value,
                ..SliderState::default()
            },
            phase: GesturePhase::Idle,
            bounds,
            geometry,
            track: TrackRenderer::new(percentage(value, range)),
            thumb,
            markers: MarkerLayout::new(),
            on_value_changed: None,
            redraw: Some(Redraw::Immediate),
            now: Duration::ZERO,
        }
    }

    /// The configuration the slider was built with.
    #[must_use]
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// The current value.
    #[must_use]
    pub fn value(&self) -> i64 {
        self.state.current_value
    }

    /// Snapshot of value and gesture flags.
    #[must_use]
    pub fn state(&self) -> SliderState {
        self.state
    }

    /// Current gesture phase.
    #[must_use]
    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// The allowed values; empty for a continuous slider.
    #[must_use]
    pub fn values(&self) -> &ValueSet {
        &self.values
    }

    /// The range the track covers.
    #[must_use]
    pub fn range(&self) -> ValueRange {
        self.range
    }

    /// Local bounds from the last layout pass.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Track placement from the last layout pass.
    #[must_use]
    pub fn geometry(&self) -> &TrackGeometry {
        &self.geometry
    }

    /// Markers for the allowed values strictly inside the range.
    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        self.markers.markers()
    }

    /// Labels for every allowed value.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        self.markers.labels()
    }

    /// The thumb, for the thumb variant.
    #[must_use]
    pub fn thumb(&self) -> Option<&ThumbController> {
        self.thumb.as_ref()
    }

    /// Track fill percentage as currently displayed.
    #[must_use]
    pub fn displayed_percentage(&self) -> f64 {
        self.track.displayed()
    }

    /// Returns `true` while the track or thumb is animating.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.track.phase().is_animating()
            || self.thumb.as_ref().is_some_and(|t| t.phase().is_animating())
    }

    /// Registers the listener called with the new value whenever it changes.
    ///
    /// Replaces any previous listener.
    pub fn set_on_value_changed(&mut self, listener: impl FnMut(i64) + 'static) {
        self.on_value_changed = Some(Box::new(listener));
    }

    /// Removes the value-changed listener.
    pub fn clear_on_value_changed(&mut self) {
        self.on_value_changed = None;
    }

    /// Layout pass: positions the track, markers, labels, and thumb inside
    /// `bounds` without animation.
    ///
    /// A value transition in flight is finished immediately so the track and
    /// thumb stay in lockstep.
    pub fn set_bounds(&mut self, bounds: Rect) {
        if self.bounds == bounds {
            return;
        }
        self.bounds = bounds;
        self.geometry = TrackGeometry::new(bounds, &self.config.metrics);
        self.markers
            .relayout(self.range, &self.geometry, &self.config.metrics);
        self.track.jump_to(self.track.target());
        if let Some(thumb) = &mut self.thumb {
            let center = thumb.center_for(self.state.current_value, self.range, &self.geometry);
            thumb.jump_to(center);
        }
        self.request_redraw(Redraw::Immediate);
    }

    /// Replaces the allowed values.
    ///
    /// The values are sorted and deduplicated if needed. The value resets to
    /// the new minimum and everything is laid out again without animation. An
    /// empty list makes the slider continuous over `config.default_range`.
    pub fn configure(&mut self, values: impl IntoIterator<Item = i64>) {
        let raw: Vec<i64> = values.into_iter().collect();
        let set = ValueSet::from_unsorted(raw.iter().copied());
        if set.as_slice() != raw.as_slice() {
            tracing::warn!(
                given = raw.len(),
                kept = set.len(),
                "slider values were not strictly increasing; sorted and deduplicated"
            );
        }
        self.configure_set(set);
    }

    /// Replaces the allowed values with an already validated set.
    ///
    /// See [`configure`](Self::configure).
    pub fn configure_set(&mut self, values: ValueSet) {
        self.values = values;
        self.range = self.values.range_or(self.config.default_range);
        tracing::debug!(
            count = self.values.len(),
            min = self.range.min(),
            max = self.range.max(),
            "slider configured"
        );

        self.markers.rebuild(
            &self.values,
            self.range,
            &self.geometry,
            &self.config.metrics,
        );

        let previous = self.state.current_value;
        let value = self.range.min();
        self.state.current_value = value;
        self.track.jump_to(percentage(value, self.range));
        if let Some(thumb) = &mut self.thumb {
            let center = thumb.center_for(value, self.range, &self.geometry);
            thumb.jump_to(center);
        }
        self.request_redraw(Redraw::Immediate);
        if value != previous {
            self.notify(value);
        }
    }

    /// Sets the value programmatically, clamped to the range and animated.
    ///
    /// The value is *not* snapped to the allowed values; only gestures snap.
    /// Returns the new value if it changed.
    pub fn set_value(&mut self, value: i64) -> Option<i64> {
        if self.phase.is_active() {
            tracing::debug!(value, "set_value during an active gesture");
        }
        self.apply_value(self.range.clamp(value))
    }

    /// Starts a gesture at `position`.
    ///
    /// With a thumb, the gesture is a grab if `position` is inside the
    /// thumb's frame. That decision holds until the gesture ends.
    pub fn on_begin(&mut self, position: Point) {
        if self.phase.is_active() {
            tracing::trace!("gesture began while another was active; restarting");
        }
        let grabbed = self.thumb.as_ref().is_some_and(|t| t.is_grab(position));
        self.phase = GesturePhase::Tracking;
        self.state.is_dragging = true;
        self.state.is_thumb_grabbed = grabbed;
        tracing::trace!(x = position.x, y = position.y, grabbed, "gesture began");
    }

    /// Moves the active gesture to `position`.
    ///
    /// Returns the new value if it changed. Without a grab, a thumb slider
    /// ignores movement.
    pub fn on_continue(&mut self, position: Point) -> Option<i64> {
        if !self.phase.is_active() {
            tracing::trace!("gesture moved without a begin; ignored");
            return None;
        }
        self.phase = GesturePhase::Dragging;
        if self.thumb.is_some() && !self.state.is_thumb_grabbed {
            tracing::trace!(x = position.x, "movement ignored; thumb not grabbed");
            return None;
        }
        self.apply_position(position)
    }

    /// Ends the active gesture.
    ///
    /// A tap on a thumb slider (a gesture that did not grab the thumb) jumps to
    /// the value nearest the end position. Every other gesture has already
    /// applied its value while moving. Returns the new value if it changed.
    pub fn on_end(&mut self, position: Option<Point>) -> Option<i64> {
        if !self.phase.is_active() {
            tracing::trace!("gesture ended without a begin; ignored");
            return None;
        }
        let is_tap = self.thumb.is_some() && !self.state.is_thumb_grabbed;
        let changed = match position {
            Some(position) if is_tap => self.apply_position(position),
            _ => None,
        };
        self.phase = GesturePhase::Snapped;
        self.state.is_dragging = false;
        self.state.is_thumb_grabbed = false;
        tracing::trace!(is_tap, "gesture ended");
        changed
    }

    /// Abandons the active gesture without applying a tap.
    pub fn on_cancel(&mut self) {
        if self.phase.is_active() {
            tracing::trace!("gesture canceled");
        }
        self.phase = GesturePhase::Idle;
        self.state.is_dragging = false;
        self.state.is_thumb_grabbed = false;
    }

    /// Advances animations to `now` and settles a finished gesture.
    ///
    /// `now` is a monotonic timestamp from the host's clock. Animations started
    /// by input or [`set_value`](Self::set_value) begin at the first tick after
    /// the change, so a host may stop ticking while idle. Returns `true` while
    /// something is still animating.
    pub fn tick(&mut self, now: Duration) -> bool {
        self.now = self.now.max(now);
        if self.phase == GesturePhase::Snapped {
            self.phase = GesturePhase::Idle;
        }
        self.track.tick(self.now);
        if let Some(thumb) = &mut self.thumb {
            thumb.tick(self.now);
        }
        self.is_animating()
    }

    /// Takes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> Option<Redraw> {
        self.redraw.take()
    }

    /// Draw commands for the current frame, in painter's order: track
    /// background, fill, markers, labels, thumb.
    #[must_use]
    pub fn render(&self) -> Vec<DrawCommand> {
        let mut out = Vec::with_capacity(3 + self.markers().len() * 2 + self.labels().len());
        out.extend(render_track(
            &self.geometry,
            self.track.displayed(),
            &self.config.style,
        ));
        self.markers
            .render_into(&mut out, &self.config.style, &self.config.metrics);
        if let Some(thumb) = &self.thumb {
            thumb.render_into(&mut out, &self.config.style);
        }
        out
    }

    /// Renders the current frame into `renderer`.
    pub fn render_to(&self, renderer: &mut impl SliderRenderer) {
        renderer.draw(&self.render());
    }

    fn apply_position(&mut self, position: Point) -> Option<i64> {
        let raw = self.geometry.value_at(position.x, self.range);
        self.apply_value(snap_to_nearest(raw, &self.values))
    }

    fn apply_value(&mut self, value: i64) -> Option<i64> {
        if value == self.state.current_value {
            return None;
        }
        self.state.current_value = value;

        let style = self.config.style;
        self.track
            .animate_to(percentage(value, self.range), self.now, &style);
        if let Some(thumb) = &mut self.thumb {
            let center = thumb.center_for(value, self.range, &self.geometry);
            thumb.animate_to(center, self.now, &style);
        }
        self.request_redraw(Redraw::Animated {
            duration: style.animation_duration,
            easing: style.easing,
        });
        self.notify(value);
        Some(value)
    }

    fn notify(&mut self, value: i64) {
        tracing::debug!(value, "slider value changed");
        if let Some(listener) = &mut self.on_value_changed {
            listener(value);
        }
    }

    fn request_redraw(&mut self, redraw: Redraw) {
        self.redraw = Some(match self.redraw {
            Some(pending) => pending.merge(redraw),
            None => redraw,
        });
    }
}
