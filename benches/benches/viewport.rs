// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use panzoom_controller::{InputEvent, PanZoomOptions, ViewportController, WheelInput};
use panzoom_event_state::pan::PanSession;
use panzoom_geometry::{ElementArena, ElementId};
use panzoom_view::{PanZoomBounds, PanZoomState, Transform};

fn controller(depth: usize) -> ViewportController<ElementArena> {
    let mut tree = ElementArena::new();
    let mut node = tree.push_root(Vec2::ZERO, Size::new(2000.0, 2000.0));
    for _ in 0..depth {
        node = tree.push_child(node, Vec2::new(3.0, 2.0), Size::new(1000.0, 1000.0));
    }
    let options = PanZoomOptions {
        min_x: -5000.0,
        max_x: 5000.0,
        min_y: -5000.0,
        max_y: 5000.0,
        min_zoom: 0.1,
        max_zoom: 10.0,
        ..PanZoomOptions::default()
    };
    match ViewportController::new(tree, node, options) {
        Ok(c) => c,
        Err(e) => panic!("bench controller: {e}"),
    }
}

fn drag_events(steps: usize) -> Vec<InputEvent<ElementId>> {
    let mut events = Vec::with_capacity(steps + 2);
    events.push(InputEvent::MouseDown(Point::new(100.0, 100.0)));
    for i in 0..steps {
        let t = i as f64;
        events.push(InputEvent::MouseMove(Point::new(100.0 + t, 100.0 + 0.5 * t)));
    }
    events.push(InputEvent::MouseUp);
    events
}

fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_pan");

    for &pointers in &[1_usize, 2, 4, 8] {
        group.bench_function(format!("session_update(pointers={pointers})"), |b| {
            let base: Vec<Point> = (0..pointers)
                .map(|i| Point::new(10.0 * i as f64, 5.0 * i as f64))
                .collect();
            let moved: Vec<Point> = base.iter().map(|p| *p + Vec2::new(1.5, -0.5)).collect();
            let mut session = PanSession::new();
            session.start(&base);
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let next = if flip { &moved } else { &base };
                black_box(session.update(black_box(next)))
            });
        });
    }

    group.bench_function("controller_drag(steps=256)", |b| {
        let events = drag_events(256);
        b.iter_batched(
            || controller(4),
            |mut viewport| {
                for e in &events {
                    let _ = viewport.handle(e);
                }
                black_box(viewport.transform())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_zoom(c: &mut Criterion) {
    let mut group = c.benchmark_group("panzoom_zoom");

    group.bench_function("state_set_zoom", |b| {
        let mut state = PanZoomState::new(Transform::IDENTITY, PanZoomBounds::DEFAULT);
        let mut flip = false;
        b.iter(|| {
            flip = !flip;
            let factor = if flip { 1.1 } else { 1.0 / 1.1 };
            black_box(state.set_zoom(|z: f64| z * factor, Point::new(320.0, 240.0)))
        });
    });

    for &depth in &[1_usize, 16, 64] {
        group.bench_function(format!("controller_wheel(depth={depth})"), |b| {
            let mut viewport = controller(depth);
            let mut flip = false;
            b.iter(|| {
                flip = !flip;
                let dy = if flip { -4.0 } else { 4.0 };
                black_box(viewport.on_wheel(&WheelInput::vertical(Point::new(400.0, 300.0), dy)))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pan, bench_zoom);
criterion_main!(benches);
