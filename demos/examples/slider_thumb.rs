// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumb slider: grab versus tap.
//!
//! A gesture that starts on the thumb drags it; one that starts elsewhere is a
//! tap that jumps on release. Each step prints the gesture state and the value.
//!
//! Run:
//! - `cargo run -p understory_demos --example slider_thumb`

use std::time::Duration;

use kurbo::{Point, Rect, Size};
use understory_demos::{TextRenderer, init_logging};
use understory_slider::{Slider, SliderConfig, ThumbImage, ThumbStyle};
use understory_tween::Easing;

fn main() {
    init_logging();

    let config = SliderConfig::default()
        .with_thumb(ThumbStyle {
            size: Size::new(36.0, 36.0),
            vertical_offset: 0.0,
            image: Some(ThumbImage(1)),
        })
        .with_animation_duration(Duration::from_millis(250))
        .with_easing(Easing::CubicBezier {
            x1: 0.2,
            y1: 0.0,
            x2: 0.0,
            y2: 1.0,
        });
    let mut slider = Slider::new(config);
    slider.set_bounds(Rect::new(0.0, 0.0, 480.0, 120.0));
    slider.configure([1, 10, 30, 40]);

    let y = slider.geometry().center_y();
    let x_of = |slider: &Slider, value| slider.geometry().position_for(value, slider.range());
    let mut now = Duration::ZERO;

    // Tap near 30: movement is ignored, the value jumps on release.
    let tap = Point::new(x_of(&slider, 28), y);
    slider.on_begin(tap);
    println!("tap began, grabbed: {}", slider.state().is_thumb_grabbed);
    let ignored = slider.on_continue(Point::new(x_of(&slider, 5), y));
    println!("moved during tap: {ignored:?}");
    println!("released: {:?}", slider.on_end(Some(tap)));

    while slider.tick(now) {
        now += Duration::from_millis(16);
    }

    // Grab the thumb where it now rests and drag it to the right end.
    let Some(frame) = slider.thumb().map(|t| t.frame()) else {
        return;
    };
    slider.on_begin(frame.center());
    println!("drag began, grabbed: {}", slider.state().is_thumb_grabbed);
    for value in [32, 36, 38, 45] {
        now += Duration::from_millis(16);
        slider.tick(now);
        let changed = slider.on_continue(Point::new(x_of(&slider, value), y));
        tracing::info!(pointer_value = value, ?changed, "drag step");
    }
    println!("released: {:?}", slider.on_end(None));

    while slider.tick(now) {
        now += Duration::from_millis(16);
    }

    let mut renderer = TextRenderer::default();
    slider.render_to(&mut renderer);
    println!("state: {:?}", slider.state());
}
