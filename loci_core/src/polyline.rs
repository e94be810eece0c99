// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sampling a curve into a pixel-space polyline.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{BezPath, Line, Point, Rect};

use crate::curve::evaluate;
use crate::profile::Profile;
use crate::shape::Shape;

/// A connected pixel-space polyline approximating one curve.
///
/// A polyline sampled from a profile with `n` steps stores `n + 2` points and therefore yields
/// `n + 1` segments: the start point, one point per step, and the exact interval end.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Samples `shape` with `profile`, centering curve space on `origin`.
    ///
    /// The profile is sanitized first, so degenerate step counts or intervals still produce a
    /// short, finite polyline.
    pub fn sample(shape: Shape, profile: &Profile, origin: Point) -> Self {
        let profile = profile.sanitized();
        let to_pixel = profile.pixel_transform(origin);
        let step = profile.step();
        let n = profile.step_count;

        let mut points = Vec::with_capacity(n as usize + 2);
        points.push(to_pixel * evaluate(shape, 0.0));
        for i in 0..n {
            let t = f64::from(i) * step;
            points.push(to_pixel * evaluate(shape, t));
        }
        // Close on the exact end of the interval rather than the last sample.
        points.push(to_pixel * evaluate(shape, profile.interval_length));

        Self { points }
    }

    /// Returns the pixel-space points in drawing order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Returns the segments between consecutive points, in drawing order.
    pub fn segments(
        &self,
    ) -> impl DoubleEndedIterator<Item = Line> + ExactSizeIterator + '_ {
        self.points.windows(2).map(|w| Line::new(w[0], w[1]))
    }

    /// Returns the number of segments.
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    /// Returns the first point.
    pub fn start(&self) -> Option<Point> {
        self.points.first().copied()
    }

    /// Returns the last point (the curve evaluated at the end of the interval).
    pub fn end(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Builds an open path through every point.
    pub fn to_path(&self) -> BezPath {
        let mut p = BezPath::new();
        for (i, &pt) in self.points.iter().enumerate() {
            if i == 0 {
                p.move_to(pt);
            } else {
                p.line_to(pt);
            }
        }
        p
    }

    /// Returns the smallest rectangle containing every point.
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        let mut r = Rect::from_points(*first, *first);
        for &pt in rest {
            r = r.union_pt(pt);
        }
        Some(r)
    }
}
