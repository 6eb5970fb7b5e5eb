// Copyright 2025 the Panzoom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replay a recorded input session against a viewport controller.
//!
//! A scene file describes the surface placement, the controller options and a
//! list of steps (input events or programmatic resets). Each step is applied
//! in order and the resulting CSS transform is printed.
//!
//! Run:
//! - `cargo run -p panzoom_demos --bin replay -- demos/scenes/drag_wheel_pinch.json`
//! - `RUST_LOG=panzoom_controller=trace cargo run -p panzoom_demos --bin replay -- demos/scenes/ctrl_wheel.json`

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use kurbo::{Point, Size, Vec2};
use panzoom_controller::{
    Config, EventResponse, GestureInput, InputEvent, PanZoomOptions, ViewportController,
    WheelInput,
};
use panzoom_geometry::{ElementArena, ElementId};
use serde::Deserialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Replay a pan/zoom input session and print the resulting transforms")]
struct Args {
    /// Scene file (JSON).
    scene: PathBuf,
    /// Override `require_ctrl_to_zoom` from the scene.
    #[arg(long)]
    require_ctrl: Option<bool>,
    /// Override `zoom_sensitivity` from the scene.
    #[arg(long)]
    zoom_sensitivity: Option<f64>,
    /// Override `min_zoom` from the scene.
    #[arg(long)]
    min_zoom: Option<f64>,
    /// Override `max_zoom` from the scene.
    #[arg(long)]
    max_zoom: Option<f64>,
    /// Print the transform as JSON instead of a CSS string.
    #[arg(long)]
    json: bool,
}

#[derive(Deserialize, Debug)]
struct Scene {
    /// Page offset of the surface.
    #[serde(default)]
    surface_offset: [f64; 2],
    surface_size: [f64; 2],
    #[serde(default)]
    options: PanZoomOptions,
    steps: Vec<Step>,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Step {
    MouseDown { x: f64, y: f64 },
    MouseMove { x: f64, y: f64 },
    MouseUp,
    /// Pointer left the surface; `inside` marks a move onto a child element.
    MouseLeave {
        #[serde(default)]
        inside: bool,
    },
    TouchStart { points: Vec<[f64; 2]> },
    TouchMove { points: Vec<[f64; 2]> },
    TouchEnd,
    Wheel {
        x: f64,
        y: f64,
        #[serde(default)]
        dx: f64,
        dy: f64,
        #[serde(default)]
        ctrl: bool,
    },
    GestureStart { x: f64, y: f64, scale: f64 },
    GestureChange { x: f64, y: f64, scale: f64 },
    GestureEnd { x: f64, y: f64, scale: f64 },
    Click,
    /// Programmatic reset to the origin at zoom 1.
    Reset,
}

struct Surface {
    tree: ElementArena,
    surface: ElementId,
    child: ElementId,
}

fn build_surface(scene: &Scene) -> Surface {
    let [ox, oy] = scene.surface_offset;
    let [w, h] = scene.surface_size;
    let mut tree = ElementArena::new();
    let page = tree.push_root(Vec2::ZERO, Size::new(ox + w, oy + h));
    let surface = tree.push_child(page, Vec2::new(ox, oy), Size::new(w, h));
    let child = tree.push_child(surface, Vec2::ZERO, Size::new(w / 2.0, h / 2.0));
    Surface {
        tree,
        surface,
        child,
    }
}

fn points(raw: &[[f64; 2]]) -> impl Iterator<Item = Point> + '_ {
    raw.iter().map(|&[x, y]| Point::new(x, y))
}

fn to_event(step: &Step, child: ElementId) -> Option<InputEvent<ElementId>> {
    let event = match step {
        Step::MouseDown { x, y } => InputEvent::MouseDown(Point::new(*x, *y)),
        Step::MouseMove { x, y } => InputEvent::MouseMove(Point::new(*x, *y)),
        Step::MouseUp => InputEvent::MouseUp,
        Step::MouseLeave { inside } => InputEvent::MouseLeave {
            related: inside.then_some(child),
        },
        Step::TouchStart { points: p } => InputEvent::touch_start(points(p)),
        Step::TouchMove { points: p } => InputEvent::touch_move(points(p)),
        Step::TouchEnd => InputEvent::TouchEnd,
        Step::Wheel {
            x,
            y,
            dx,
            dy,
            ctrl,
        } => InputEvent::Wheel(WheelInput {
            page: Point::new(*x, *y),
            delta: Vec2::new(*dx, *dy),
            ctrl: *ctrl,
        }),
        Step::GestureStart { x, y, scale } => InputEvent::GestureStart(GestureInput {
            page: Point::new(*x, *y),
            scale: *scale,
        }),
        Step::GestureChange { x, y, scale } => InputEvent::GestureChange(GestureInput {
            page: Point::new(*x, *y),
            scale: *scale,
        }),
        Step::GestureEnd { x, y, scale } => InputEvent::GestureEnd(GestureInput {
            page: Point::new(*x, *y),
            scale: *scale,
        }),
        Step::Click => InputEvent::ClickCapture,
        Step::Reset => return None,
    };
    Some(event)
}

fn apply_overrides(options: &mut PanZoomOptions, args: &Args) {
    if let Some(v) = args.require_ctrl {
        options.require_ctrl_to_zoom = v;
    }
    if let Some(v) = args.zoom_sensitivity {
        options.zoom_sensitivity = v;
    }
    if let Some(v) = args.min_zoom {
        options.min_zoom = v;
    }
    if let Some(v) = args.max_zoom {
        options.max_zoom = v;
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .with_target(false)
        .init();

    let text = fs::read_to_string(&args.scene)
        .with_context(|| format!("reading scene {}", args.scene.display()))?;
    let mut scene: Scene = serde_json::from_str(&text)
        .with_context(|| format!("parsing scene {}", args.scene.display()))?;
    apply_overrides(&mut scene.options, &args);

    let Surface {
        tree,
        surface,
        child,
    } = build_surface(&scene);
    let config = Config::new(scene.options.clone())
        .on_pan_start(|p| info!(pointers = p.len(), "pan start"))
        .on_pan_end(|| info!("pan end"))
        .on_zoom(|| info!("zoom"));
    let mut viewport =
        ViewportController::new(tree, surface, config).context("creating viewport controller")?;
    info!(handlers = ?viewport.handlers(), "controller ready");

    for (i, step) in scene.steps.iter().enumerate() {
        let response = match to_event(step, child) {
            Some(event) => viewport.handle(&event),
            None => {
                viewport.set_pan((0.0, 0.0));
                viewport.set_zoom(1.0, None);
                EventResponse::IGNORED
            }
        };
        if args.json {
            println!("{}", serde_json::to_string(&viewport.transform())?);
        } else {
            println!(
                "{i:>3} {:<14} {}{}",
                step_name(step),
                viewport.css_transform(),
                flags(response)
            );
        }
    }

    let center = viewport.center();
    info!(x = center.x, y = center.y, "final center");
    Ok(())
}

fn step_name(step: &Step) -> &'static str {
    match step {
        Step::MouseDown { .. } => "mouse_down",
        Step::MouseMove { .. } => "mouse_move",
        Step::MouseUp => "mouse_up",
        Step::MouseLeave { .. } => "mouse_leave",
        Step::TouchStart { .. } => "touch_start",
        Step::TouchMove { .. } => "touch_move",
        Step::TouchEnd => "touch_end",
        Step::Wheel { .. } => "wheel",
        Step::GestureStart { .. } => "gesture_start",
        Step::GestureChange { .. } => "gesture_change",
        Step::GestureEnd { .. } => "gesture_end",
        Step::Click => "click",
        Step::Reset => "reset",
    }
}

fn flags(response: EventResponse) -> &'static str {
    match (response.stop_propagation, response.prevent_default) {
        (true, true) => "  [stop, prevent]",
        (true, false) => "  [stop]",
        (false, true) => "  [prevent]",
        (false, false) => "",
    }
}
