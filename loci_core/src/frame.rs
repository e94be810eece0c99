// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One paint pass worth of drawing data.

use kurbo::{BezPath, Point, Rect, Size};
use peniko::Color;

use crate::polyline::Polyline;
use crate::style::StrokeStyle;

/// Preferred (and minimum) drawing surface size.
pub const SIZE_HINT: Size = Size::new(400.0, 400.0);

/// The drawing data for one redraw.
///
/// Hosts draw it in order: fill `surface` with `background`, outline `surface` with `stroke`,
/// then stroke `curve` with `stroke`. Nothing is clipped; segments outside `surface` are left
/// for the host canvas to drop.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// The drawing surface, in pixels.
    pub surface: Rect,
    /// Surface fill.
    pub background: Color,
    /// Pen for the surface outline and the curve.
    pub stroke: StrokeStyle,
    /// The sampled curve, in the same pixel space as `surface`.
    pub curve: Polyline,
}

impl Frame {
    /// Returns a surface of `size` anchored at the origin.
    pub fn surface_for(size: Size) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, size)
    }

    /// Returns the curve as a path for stroking.
    pub fn curve_path(&self) -> BezPath {
        self.curve.to_path()
    }
}
