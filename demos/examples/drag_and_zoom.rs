// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag and wheel basics.
//!
//! Drive a viewport controller through a short mouse drag, a wheel zoom and a
//! trackpad pinch, printing the CSS transform after every step.
//!
//! Run:
//! - `cargo run -p panzoom_demos --example drag_and_zoom`

use kurbo::{Point, Size, Vec2};
use panzoom_controller::{
    Config, GestureInput, InputEvent, PanZoomOptions, ViewportController, WheelInput,
};
use panzoom_geometry::ElementArena;

fn main() {
    // A 640x480 surface placed at (80, 40) on the page.
    let mut tree = ElementArena::new();
    let page = tree.push_root(Vec2::ZERO, Size::new(1024.0, 768.0));
    let surface = tree.push_child(page, Vec2::new(80.0, 40.0), Size::new(640.0, 480.0));

    let config = Config::new(PanZoomOptions {
        min_zoom: 0.5,
        max_zoom: 4.0,
        ..PanZoomOptions::default()
    })
    .on_pan_start(|pointers| println!("  pan start ({} pointer)", pointers.len()))
    .on_pan_end(|| println!("  pan end"));

    let Ok(mut viewport) = ViewportController::new(tree, surface, config) else {
        eprintln!("surface is not part of the page");
        return;
    };
    println!("start: {}", viewport.css_transform());

    let pinch = |scale| GestureInput {
        page: Point::new(400.0, 280.0),
        scale,
    };
    let steps = [
        ("press", InputEvent::MouseDown(Point::new(200.0, 200.0))),
        ("drag", InputEvent::MouseMove(Point::new(260.0, 230.0))),
        ("release", InputEvent::MouseUp),
        ("click", InputEvent::ClickCapture),
        (
            "wheel up",
            InputEvent::Wheel(WheelInput::vertical(Point::new(400.0, 280.0), -30.0)),
        ),
        ("pinch start", InputEvent::GestureStart(pinch(1.0))),
        ("pinch", InputEvent::GestureChange(pinch(2.0))),
        ("pinch end", InputEvent::GestureEnd(pinch(3.0))),
    ];

    for (label, event) in &steps {
        let response = viewport.handle(event);
        println!("{label}: {} {response:?}", viewport.css_transform());
    }

    // Reset button.
    viewport.set_pan((0.0, 0.0));
    viewport.set_zoom(1.0, None);
    println!("reset: {}", viewport.css_transform());
    println!("center: {:?}", viewport.center());
}
