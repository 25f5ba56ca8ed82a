// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the slider demos.
//!
//! The demos are headless: instead of rasterizing, [`TextRenderer`] turns each
//! frame's draw commands into readable lines on stdout.

use std::fmt::Write as _;

use peniko::Color;
use tracing_subscriber::EnvFilter;
use understory_slider::{DrawCommand, SliderRenderer};

/// Installs a `fmt` subscriber honoring `RUST_LOG`.
///
/// Defaults to `understory_slider=debug` so value changes show up without any
/// configuration.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,understory_slider=debug"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// A [`SliderRenderer`] that prints one line per command.
#[derive(Debug, Default)]
pub struct TextRenderer {
    frames: usize,
    /// Print only the frame header and command count.
    pub summary_only: bool,
}

impl TextRenderer {
    /// Number of frames drawn so far.
    pub fn frames(&self) -> usize {
        self.frames
    }
}

impl SliderRenderer for TextRenderer {
    fn draw(&mut self, commands: &[DrawCommand]) {
        self.frames += 1;
        println!("frame {} ({} commands)", self.frames, commands.len());
        if self.summary_only {
            return;
        }
        for command in commands {
            println!("  {}", describe(command));
        }
    }
}

/// One-line description of a draw command.
pub fn describe(command: &DrawCommand) -> String {
    let mut line = String::new();
    let _ = match command {
        DrawCommand::FillRoundedRect { shape, color } => {
            let r = shape.rect();
            write!(
                line,
                "fill rounded rect ({:.1}, {:.1})-({:.1}, {:.1}) {}",
                r.x0,
                r.y0,
                r.x1,
                r.y1,
                hex(*color)
            )
        }
        DrawCommand::FillCircle { circle, color } => write!(
            line,
            "fill circle at ({:.1}, {:.1}) r={:.1} {}",
            circle.center.x,
            circle.center.y,
            circle.radius,
            hex(*color)
        ),
        DrawCommand::StrokeCircle {
            circle,
            width,
            color,
        } => write!(
            line,
            "stroke circle at ({:.1}, {:.1}) r={:.1} w={width:.1} {}",
            circle.center.x,
            circle.center.y,
            circle.radius,
            hex(*color)
        ),
        DrawCommand::Text {
            text,
            frame,
            alignment,
            font_size,
            color,
        } => write!(
            line,
            "text {text:?} {alignment:?} in ({:.1}, {:.1})-({:.1}, {:.1}) size={font_size} {}",
            frame.x0,
            frame.y0,
            frame.x1,
            frame.y1,
            hex(*color)
        ),
        DrawCommand::Image { image, frame } => write!(
            line,
            "image #{} in ({:.1}, {:.1})-({:.1}, {:.1})",
            image.0, frame.x0, frame.y0, frame.x1, frame.y1
        ),
    };
    line
}

fn hex(color: Color) -> String {
    let c = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
}
