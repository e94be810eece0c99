// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

extern crate std;

use core::f64::consts::PI;

use kurbo::{Point, Rect};
use peniko::color::palette::css;

use crate::{Frame, Polyline, Profile, RenderState, SIZE_HINT, Shape, evaluate};

fn assert_point_close(a: Point, b: Point) {
    let eps = 1e-9;
    assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
    assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
}

#[test]
fn circle_opens_and_closes_at_the_same_pixel() {
    let state = RenderState::new().with_shape(Shape::Circle);
    assert_eq!(state.profile(), Profile::new(150.0, 2.0 * PI, 128));

    let surface = Rect::new(0.0, 0.0, 640.0, 480.0);
    let center = surface.center();
    let curve = state.polyline(surface);
    let want = Point::new(center.x + 150.0, center.y);

    let first = curve.segments().next().expect("first segment");
    let last = curve.segments().next_back().expect("closing segment");
    assert_point_close(first.p0, want);
    assert_point_close(last.p1, want);
    assert_eq!(curve.segment_count(), 129);
}

#[test]
fn line_samples_sixths_and_crosses_the_origin() {
    let state = RenderState::new().with_shape(Shape::Line);
    let profile = state.profile();
    assert_eq!(profile.interval_length, 2.0);
    assert_eq!(profile.step_count, 12);
    assert!((profile.step() - 1.0 / 6.0).abs() < 1e-12);

    assert_point_close(evaluate(Shape::Line, 1.0), Point::ORIGIN);

    // Sample i = 6 is t = 1, which lands on the surface center.
    let surface = Frame::surface_for(SIZE_HINT);
    let curve = state.polyline(surface);
    assert_point_close(curve.points()[7], surface.center());
    assert_point_close(
        curve.end().expect("end point"),
        Point::new(200.0 - 198.0, 200.0 - 198.0),
    );
}

#[test]
fn host_round_trip_reflects_effective_values() {
    // A host flow: pick a shape, tweak the spin boxes, pick another shape.
    let mut state = RenderState::new();
    state.select_shape(Shape::Starfish);
    state.set_scale(30.0);
    state.set_step_count(64);
    assert_eq!(
        (state.scale(), state.interval_length(), state.step_count()),
        (30.0, 6.0 * PI, 64)
    );
    assert_eq!(
        state.polyline(Frame::surface_for(SIZE_HINT)).segment_count(),
        65
    );

    state.select_shape(Shape::Cycloid);
    assert_eq!(
        (state.scale(), state.interval_length(), state.step_count()),
        (10.0, 4.0 * PI, 128)
    );
}

#[test]
fn degenerate_state_still_renders() {
    let mut state = RenderState::new();
    state.set_step_count(0);
    state.set_interval_length(0.0);
    let frame = state.frame(Frame::surface_for(SIZE_HINT));
    assert_eq!(frame.curve.segment_count(), 2);
    for pt in frame.curve.points() {
        assert!(pt.x.is_finite() && pt.y.is_finite(), "{pt:?}");
    }

    // Raw degenerate profiles bypassing the setters are sanitized by the sampler.
    let raw = Polyline::sample(Shape::Astroid, &Profile::new(1.0, -5.0, 0), Point::ORIGIN);
    assert_eq!(raw.segment_count(), 2);
}

#[test]
fn every_shape_renders_with_default_profile() {
    let mut state = RenderState::new();
    state.set_stroke_color(css::YELLOW);
    for shape in Shape::ALL {
        state.select_shape(shape);
        let frame = state.frame(Frame::surface_for(SIZE_HINT));
        assert_eq!(
            frame.curve.segment_count(),
            shape.profile().step_count as usize + 1,
            "{shape}"
        );
        assert_eq!(frame.stroke.color(), Some(css::YELLOW), "{shape}");
        assert!(frame.curve.bounding_box().is_some(), "{shape}");
    }
}
