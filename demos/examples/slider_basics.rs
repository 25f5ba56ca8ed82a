// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Track-only slider basics.
//!
//! Configure a discrete slider, drag across it, and print every value change
//! and the frames an animation produces.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_basics`
//! - `RUST_LOG=understory_slider=trace cargo run -p understory_demos --example slider_basics`

use std::time::Duration;

use kurbo::{Point, Rect};
use understory_demos::{TextRenderer, init_logging};
use understory_slider::{Slider, SliderConfig};

const FRAME: Duration = Duration::from_millis(16);

fn main() {
    init_logging();

    let mut slider = Slider::new(SliderConfig::default());
    slider.set_on_value_changed(|value| println!("value -> {value}"));
    slider.set_bounds(Rect::new(0.0, 0.0, 600.0, 120.0));
    slider.configure([0, 10, 25, 50, 100]);

    let mut renderer = TextRenderer::default();
    let mut now = Duration::ZERO;
    slider.tick(now);
    slider.take_redraw();
    slider.render_to(&mut renderer);

    // Drag from the left end to about two thirds of the way along.
    let y = slider.geometry().center_y();
    slider.on_begin(Point::new(30.0, y));
    for x in (30..=400).step_by(40) {
        now += FRAME;
        slider.tick(now);
        slider.on_continue(Point::new(f64::from(x), y));
    }
    slider.on_end(Some(Point::new(400.0, y)));
    println!("released at {}", slider.value());

    // Let the fill catch up, printing only a summary for in-between frames.
    renderer.summary_only = true;
    while slider.tick(now) {
        println!("  fill at {:.3}", slider.displayed_percentage());
        slider.render_to(&mut renderer);
        now += FRAME;
    }
    slider.take_redraw();

    renderer.summary_only = false;
    slider.render_to(&mut renderer);

    // Programmatic values are clamped but not snapped.
    slider.set_value(42);
    slider.set_value(1_000);
    println!("final value {} after {} frames", slider.value(), renderer.frames());
}
