// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed-form curve formulas.
//!
//! Every shape maps a real parameter `t` to a point in curve space. Curve space is roughly unit
//! sized; the shape's [`Profile`](crate::Profile) scale brings it up to pixels.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::Point;

use crate::shape::Shape;

const ELLIPSE_A: f64 = 2.0;
const ELLIPSE_B: f64 = 1.1;

const FANCY_V1: f64 = 11.0;
const FANCY_V2: f64 = 6.0;

const STARFISH_BIG_R: f64 = 5.0;
const STARFISH_SMALL_R: f64 = 3.0;
const STARFISH_D: f64 = 5.0;

const CLOUD_A: f64 = 14.0;
const CLOUD_B: f64 = 1.0;

/// Evaluates `shape` at parameter `t`, in curve space.
///
/// This is pure and total: any finite `t` gives a finite point.
#[must_use]
pub fn evaluate(shape: Shape, t: f64) -> Point {
    match shape {
        Shape::Astroid => astroid(t),
        Shape::Cycloid => cycloid(t),
        Shape::HuygensCycloid => huygens(t),
        Shape::HypoCycloid => hypo(t),
        Shape::Line => line(t),
        Shape::Circle => circle(t),
        Shape::Ellipse => ellipse(t),
        Shape::Fancy => fancy(t),
        Shape::Starfish => starfish(t),
        Shape::Cloud => cloud_with_sign(t, 1.0),
        Shape::InvertedCloud => cloud_with_sign(t, -1.0),
    }
}

fn astroid(t: f64) -> Point {
    let (sin_t, cos_t) = (t.sin(), t.cos());
    Point::new(cos_t * cos_t * cos_t, sin_t * sin_t * sin_t)
}

fn cycloid(t: f64) -> Point {
    Point::new(1.5 * (1.0 - t.cos()), 1.5 * (t - t.sin()))
}

fn huygens(t: f64) -> Point {
    Point::new(
        4.0 * (3.0 * t.cos() - (3.0 * t).cos()),
        4.0 * (3.0 * t.sin() - (3.0 * t).sin()),
    )
}

fn hypo(t: f64) -> Point {
    Point::new(
        1.5 * (2.0 * t.cos() + (2.0 * t).cos()),
        1.5 * (2.0 * t.sin() - (2.0 * t).sin()),
    )
}

fn line(t: f64) -> Point {
    Point::new(1.0 - t, 1.0 - t)
}

fn circle(t: f64) -> Point {
    Point::new(t.cos(), t.sin())
}

fn ellipse(t: f64) -> Point {
    Point::new(ELLIPSE_A * t.cos(), ELLIPSE_B * t.sin())
}

fn fancy(t: f64) -> Point {
    let k = FANCY_V1 / FANCY_V2;
    Point::new(
        FANCY_V1 * t.cos() - FANCY_V2 * (k * t).cos(),
        FANCY_V1 * t.sin() - FANCY_V2 * (k * t).sin(),
    )
}

fn starfish(t: f64) -> Point {
    let rolled = STARFISH_BIG_R - STARFISH_SMALL_R;
    let k = rolled / STARFISH_SMALL_R;
    Point::new(
        rolled * t.cos() + STARFISH_D * (k * t).cos(),
        rolled * t.sin() - STARFISH_D * (k * t).sin(),
    )
}

/// Cloud family: `sign` multiplies the second x-term (`1` for cloud, `-1` for inverted cloud).
fn cloud_with_sign(t: f64, sign: f64) -> Point {
    let sum = CLOUD_A + CLOUD_B;
    let slow = t * CLOUD_B / CLOUD_A;
    let fast = (sum / CLOUD_A) * t;
    Point::new(
        sum * slow.cos() - sign * CLOUD_B * fast.cos(),
        sum * slow.sin() - CLOUD_B * fast.sin(),
    )
}
