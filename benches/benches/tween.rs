// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::time::Duration;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kurbo::Point;
use understory_tween::{Animated, Easing};

fn bench_easing(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_tween/easing");

    for (name, easing) in [
        ("linear", Easing::Linear),
        ("ease_in_out", Easing::EaseInOut),
        (
            "cubic_bezier",
            Easing::CubicBezier {
                x1: 0.2,
                y1: 0.0,
                x2: 0.0,
                y2: 1.0,
            },
        ),
    ] {
        group.bench_function(format!("apply_sweep({name})"), |b| {
            b.iter(|| {
                let mut sum = 0.0;
                for i in 0..=1_000 {
                    sum += easing.apply(black_box(f64::from(i) / 1_000.0));
                }
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_retarget(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_tween/animated");

    // A drag retargets every frame; each retarget samples the live value.
    group.bench_function("retarget_every_frame(point)", |b| {
        b.iter(|| {
            let mut thumb = Animated::new(Point::ZERO);
            let mut now = Duration::ZERO;
            for i in 0..240 {
                now += Duration::from_millis(4);
                thumb.tick(now);
                thumb.animate_to(
                    Point::new(f64::from(i) * 2.0, 50.0),
                    now,
                    Duration::from_millis(200),
                    Easing::EaseInOut,
                );
            }
            black_box(thumb.tick(now + Duration::from_secs(1)));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_easing, bench_retarget);
criterion_main!(benches);
