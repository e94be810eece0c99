// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-shape rendering parameters.

use core::f64::consts::PI;

use kurbo::{Affine, Point};

use crate::shape::Shape;

/// Smallest step count a profile can carry.
pub const MIN_STEP_COUNT: u32 = 1;

/// Largest step count a profile can carry.
pub const MAX_STEP_COUNT: u32 = 1 << 20;

/// Smallest parameter interval a profile can carry.
pub const MIN_INTERVAL_LENGTH: f64 = f64::EPSILON;

/// How a shape is swept and scaled into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Profile {
    /// Pixels per curve-space unit.
    pub scale: f64,
    /// Length of the parameter interval `[0, interval_length]` to sweep.
    pub interval_length: f64,
    /// Number of evenly spaced samples taken across the interval.
    pub step_count: u32,
}

impl Profile {
    /// Creates a profile from raw values (not sanitized).
    #[must_use]
    pub const fn new(scale: f64, interval_length: f64, step_count: u32) -> Self {
        Self {
            scale,
            interval_length,
            step_count,
        }
    }

    /// Returns the default profile for `shape`.
    #[must_use]
    pub fn for_shape(shape: Shape) -> Self {
        match shape {
            Shape::Astroid => Self::new(180.0, 2.0 * PI, 256),
            Shape::Cycloid => Self::new(10.0, 4.0 * PI, 128),
            Shape::HuygensCycloid => Self::new(12.0, 4.0 * PI, 256),
            Shape::HypoCycloid => Self::new(40.0, 2.0 * PI, 256),
            // The scale is the line's half-length in pixels.
            Shape::Line => Self::new(198.0, 2.0, 12),
            Shape::Circle => Self::new(150.0, 2.0 * PI, 128),
            Shape::Ellipse => Self::new(75.0, 2.0 * PI, 128),
            Shape::Fancy => Self::new(10.0, 12.0 * PI, 512),
            Shape::Starfish => Self::new(26.0, 6.0 * PI, 256),
            Shape::Cloud | Shape::InvertedCloud => Self::new(10.0, 28.0 * PI, 128),
        }
    }

    /// Returns a copy with a usable step count and interval.
    ///
    /// `step_count` is clamped to [`MIN_STEP_COUNT`]..=[`MAX_STEP_COUNT`]; a non-positive or
    /// non-finite `interval_length` becomes [`MIN_INTERVAL_LENGTH`]. `scale` is left alone.
    #[must_use]
    pub fn sanitized(self) -> Self {
        Self {
            scale: self.scale,
            interval_length: sanitize_interval_length(self.interval_length),
            step_count: self.step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT),
        }
    }

    /// Returns the parameter distance between consecutive samples.
    #[must_use]
    pub fn step(&self) -> f64 {
        let p = self.sanitized();
        p.interval_length / f64::from(p.step_count)
    }

    /// Returns the curve-space to pixel-space transform centered on `origin`.
    ///
    /// `pixel = curve * scale + origin`, per axis.
    #[must_use]
    pub fn pixel_transform(&self, origin: Point) -> Affine {
        Affine::translate(origin.to_vec2()) * Affine::scale(self.scale)
    }
}

pub(crate) fn sanitize_interval_length(interval_length: f64) -> f64 {
    if interval_length.is_finite() && interval_length > 0.0 {
        interval_length
    } else {
        MIN_INTERVAL_LENGTH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_matches_documented_values() {
        let cases = [
            (Shape::Astroid, 180.0, 2.0 * PI, 256),
            (Shape::Cycloid, 10.0, 4.0 * PI, 128),
            (Shape::HuygensCycloid, 12.0, 4.0 * PI, 256),
            (Shape::HypoCycloid, 40.0, 2.0 * PI, 256),
            (Shape::Line, 198.0, 2.0, 12),
            (Shape::Circle, 150.0, 2.0 * PI, 128),
            (Shape::Ellipse, 75.0, 2.0 * PI, 128),
            (Shape::Fancy, 10.0, 12.0 * PI, 512),
            (Shape::Starfish, 26.0, 6.0 * PI, 256),
            (Shape::Cloud, 10.0, 28.0 * PI, 128),
        ];
        for (shape, scale, interval_length, step_count) in cases {
            assert_eq!(
                Profile::for_shape(shape),
                Profile::new(scale, interval_length, step_count),
                "{shape}"
            );
        }
    }

    #[test]
    fn inverted_cloud_borrows_cloud_profile() {
        assert_eq!(
            Profile::for_shape(Shape::InvertedCloud),
            Profile::for_shape(Shape::Cloud)
        );
    }

    #[test]
    fn every_default_profile_is_already_sane() {
        for shape in Shape::ALL {
            let p = shape.profile();
            assert_eq!(p.sanitized(), p, "{shape}");
            assert!(p.step() > 0.0, "{shape}");
        }
    }

    #[test]
    fn sanitizing_clamps_degenerate_values() {
        let p = Profile::new(5.0, 0.0, 0).sanitized();
        assert_eq!(p, Profile::new(5.0, MIN_INTERVAL_LENGTH, MIN_STEP_COUNT));

        let p = Profile::new(5.0, -3.0, 4).sanitized();
        assert_eq!(p.interval_length, MIN_INTERVAL_LENGTH);

        let p = Profile::new(5.0, f64::NAN, 4).sanitized();
        assert_eq!(p.interval_length, MIN_INTERVAL_LENGTH);

        let p = Profile::new(5.0, f64::INFINITY, u32::MAX).sanitized();
        assert_eq!(p.interval_length, MIN_INTERVAL_LENGTH);
        assert_eq!(p.step_count, MAX_STEP_COUNT);
    }

    #[test]
    fn line_step_is_one_sixth() {
        let step = Shape::Line.profile().step();
        assert!((step - 1.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn pixel_transform_scales_then_offsets() {
        let p = Profile::new(150.0, 1.0, 1);
        let px = p.pixel_transform(Point::new(200.0, 100.0)) * Point::new(1.0, -0.5);
        assert!((px.x - 350.0).abs() < 1e-12);
        assert!((px.y - 25.0).abs() < 1e-12);
    }
}
