// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect};
use understory_slider::value::{snap_to_nearest, value_from_position};
use understory_slider::{Slider, SliderConfig, ThumbStyle, ValueRange, ValueSet};

const BOUNDS: Rect = Rect::new(0.0, 0.0, 600.0, 120.0);

/// `n` evenly spaced allowed values starting at zero.
fn spaced_values(n: i64) -> ValueSet {
    ValueSet::from_unsorted((0..n).map(|i| i * 7))
}

fn bench_snapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_slider/snap");

    for n in [4_i64, 16, 256] {
        let values = spaced_values(n);
        let max = (n - 1) * 7;
        group.bench_function(format!("snap_to_nearest(n={n})"), |b| {
            b.iter(|| {
                let mut sum = 0_i64;
                for v in (0..=max).step_by(3) {
                    sum = sum.wrapping_add(snap_to_nearest(black_box(v), &values));
                }
                black_box(sum);
            });
        });
    }

    let range = ValueRange::new(0, 1_000);
    group.bench_function("value_from_position(sweep)", |b| {
        b.iter(|| {
            let mut sum = 0_i64;
            for i in 0..600 {
                let x = f64::from(i);
                sum = sum.wrapping_add(value_from_position(black_box(x), 30.0, 540.0, range));
            }
            black_box(sum);
        });
    });

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_slider/gesture");

    for (name, thumb) in [("track", None), ("thumb", Some(ThumbStyle::default()))] {
        group.bench_function(format!("drag_across({name})"), |b| {
            b.iter_batched(
                || {
                    let mut config = SliderConfig::default();
                    config.thumb = thumb;
                    let mut slider = Slider::new(config);
                    slider.set_bounds(BOUNDS);
                    slider.configure([0, 10, 25, 50, 75, 90, 100]);
                    slider
                },
                |mut slider| {
                    let start = slider.geometry().point_for(0, slider.range());
                    slider.on_begin(start);
                    let mut now = Duration::ZERO;
                    for x in 30..570 {
                        now += Duration::from_millis(1);
                        slider.tick(now);
                        slider.on_continue(Point::new(f64::from(x), start.y));
                    }
                    black_box(slider.on_end(Some(Point::new(570.0, start.y))));
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.bench_function("render(markers=5)", |b| {
        let mut slider = Slider::new(SliderConfig::default().with_thumb(ThumbStyle::default()));
        slider.set_bounds(BOUNDS);
        slider.configure([0, 10, 25, 50, 75, 90, 100]);
        b.iter(|| black_box(slider.render()));
    });

    group.finish();
}

criterion_group!(benches, bench_snapping, bench_gestures);
criterion_main!(benches);
