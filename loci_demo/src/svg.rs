// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG dump utilities for `loci_demo`.

use loci_core::Frame;
use peniko::{Brush, Color};

/// Renders one frame the way a paint handler would: background, outline, curve.
pub(crate) fn frame_to_svg(frame: &Frame) -> String {
    let surface = frame.surface;
    let mut out = String::new();

    out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
    out.push_str(&format!(
        r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
        surface.x0,
        surface.y0,
        surface.width(),
        surface.height(),
        surface.width(),
        surface.height()
    ));
    out.push('\n');

    out.push_str(&format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}""#,
        surface.x0,
        surface.y0,
        surface.width(),
        surface.height(),
    ));
    write_paint_attr(&mut out, "fill", &Brush::Solid(frame.background));
    write_stroke_attrs(&mut out, frame);
    out.push_str("/>\n");

    let d = frame.curve_path().to_svg();
    out.push_str(&format!(r#"<path d="{d}" fill="none""#));
    write_stroke_attrs(&mut out, frame);
    out.push_str(r#" stroke-linejoin="round"/>"#);
    out.push('\n');

    out.push_str("</svg>\n");
    out
}

fn write_stroke_attrs(out: &mut String, frame: &Frame) {
    if frame.stroke.stroke_width > 0.0 {
        write_paint_attr(out, "stroke", &frame.stroke.brush);
        out.push_str(&format!(r#" stroke-width="{}""#, frame.stroke.stroke_width));
    }
}

fn svg_paint(brush: &Brush) -> (String, Option<f64>) {
    match brush {
        Brush::Solid(color) => color_paint(*color),
        _ => ("none".to_string(), None),
    }
}

fn color_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let fill = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (fill, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, brush: &Brush) {
    let (value, opacity) = svg_paint(brush);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
