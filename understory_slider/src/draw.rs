// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend-agnostic draw commands produced by the slider.
//!
//! The slider never rasterizes anything. Each frame it emits a short list of
//! plain-data [`DrawCommand`]s in painter's order; a host [`SliderRenderer`]
//! turns them into whatever its backend understands.

use alloc::string::String;
use alloc::vec::Vec;

use kurbo::{Circle, Rect, RoundedRect};
use peniko::Color;

use crate::config::ThumbImage;

/// Horizontal text alignment of a label inside its box.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LabelAlignment {
    /// Flush with the left edge.
    Leading,
    /// Centered.
    Center,
    /// Flush with the right edge.
    Trailing,
}

/// A single drawing operation, in local coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// Fill a rounded rectangle.
    FillRoundedRect {
        /// Shape to fill.
        shape: RoundedRect,
        /// Fill color.
        color: Color,
    },
    /// Fill a circle.
    FillCircle {
        /// Shape to fill.
        circle: Circle,
        /// Fill color.
        color: Color,
    },
    /// Stroke a circle outline centered on its radius.
    StrokeCircle {
        /// Shape to stroke.
        circle: Circle,
        /// Stroke width.
        width: f64,
        /// Stroke color.
        color: Color,
    },
    /// Draw a single line of text inside a box.
    Text {
        /// Text to draw.
        text: String,
        /// Box the text is laid out in; the text is vertically centered.
        frame: Rect,
        /// Horizontal alignment inside `frame`.
        alignment: LabelAlignment,
        /// Font size in local units.
        font_size: f64,
        /// Text color.
        color: Color,
    },
    /// Draw a host-owned image scaled into a rectangle.
    Image {
        /// The image handle.
        image: ThumbImage,
        /// Destination rectangle.
        frame: Rect,
    },
}

/// Consumer of slider draw commands.
pub trait SliderRenderer {
    /// Draws one frame worth of commands, in order.
    fn draw(&mut self, commands: &[DrawCommand]);
}

impl SliderRenderer for Vec<DrawCommand> {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.clear();
        self.extend_from_slice(commands);
    }
}
