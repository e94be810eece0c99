// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve demos for `loci_core`.
//!
//! Acts as a stand-in host: every "button" and "spin box" interaction goes through
//! [`RenderState`], and each redraw is dumped as an inline SVG into `loci_demo.html`.
//! Set `RUST_LOG=debug` to see state transitions.

mod html;
mod svg;

use core::f64::consts::PI;

use log::info;
use loci_core::{Frame, RenderState, SIZE_HINT, Shape};
use peniko::Color;
use peniko::color::palette::css;

use crate::html::HtmlSection;

fn main() {
    env_logger::init();

    let mut sections = shape_gallery();
    sections.push(overrides_demo());
    sections.push(colors_demo());
    sections.push(degenerate_demo());

    let html = html::render_report("Loci curves demo", &sections);
    std::fs::write("loci_demo.html", html).expect("write loci_demo.html");
    info!("rendered {} sections", sections.len());
    println!("wrote loci_demo.html");
}

/// One section per shape, each at its default profile.
fn shape_gallery() -> Vec<HtmlSection> {
    let mut state = RenderState::new();
    Shape::ALL
        .into_iter()
        .map(|shape| {
            state.select_shape(shape);
            section(&state, shape.name().to_string())
        })
        .collect()
}

/// Spin-box overrides on top of a selected shape.
fn overrides_demo() -> HtmlSection {
    let mut state = RenderState::new().with_shape(Shape::Fancy);
    state.set_scale(14.0);
    state.set_interval_length(6.0 * PI);
    state.set_step_count(48);
    section(&state, "fancy (overridden)".to_string())
}

/// Color-picker and pen changes, which survive shape selection.
fn colors_demo() -> HtmlSection {
    let mut state = RenderState::new();
    state.set_background(Color::from_rgb8(24, 24, 32));
    state.set_stroke_color(css::GOLD);
    state.set_stroke_width(1.0);
    state.select_shape(Shape::HypoCycloid);
    section(&state, "hypo-cycloid (custom colors)".to_string())
}

/// Zero step count and interval are clamped instead of hanging the redraw.
fn degenerate_demo() -> HtmlSection {
    let mut state = RenderState::new().with_shape(Shape::Circle);
    state.set_step_count(0);
    state.set_interval_length(0.0);
    section(&state, "circle (degenerate input)".to_string())
}

fn section(state: &RenderState, title: String) -> HtmlSection {
    let frame = state.frame(Frame::surface_for(SIZE_HINT));
    let caption = format!(
        "scale={} interval={:.4} steps={} segments={}",
        state.scale(),
        state.interval_length(),
        state.step_count(),
        frame.curve.segment_count()
    );
    HtmlSection {
        title,
        caption,
        svg: svg::frame_to_svg(&frame),
    }
}
