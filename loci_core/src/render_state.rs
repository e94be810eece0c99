// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-owned render state.
//!
//! The state has two kinds of transition:
//! - **Select**: [`RenderState::select_shape`] switches the curve and resets scale, interval and
//!   step count to the new shape's [`Profile`]. Earlier overrides are discarded, and flipping back
//!   to a previous shape does not restore them.
//! - **Override**: [`RenderState::set_scale`], [`RenderState::set_interval_length`] and
//!   [`RenderState::set_step_count`] each touch one field and leave the shape alone.
//!
//! Colors and the pen width are independent of both and survive shape changes.

use kurbo::Rect;
use log::{debug, warn};
use peniko::{Brush, Color};

use crate::frame::Frame;
use crate::polyline::Polyline;
use crate::profile::{
    MAX_STEP_COUNT, MIN_INTERVAL_LENGTH, MIN_STEP_COUNT, Profile, sanitize_interval_length,
};
use crate::shape::{ParseShapeError, Shape};
use crate::style::{StrokeStyle, sanitize_width};

/// Everything a host needs to draw one curve.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    shape: Shape,
    profile: Profile,
    background: Color,
    stroke: StrokeStyle,
}

impl RenderState {
    /// Default background (opaque blue).
    pub const DEFAULT_BACKGROUND: Color = Color::from_rgb8(0, 0, 255);

    /// Creates the initial state: an astroid with its default profile, a blue background and a
    /// white pen of width 2.
    pub fn new() -> Self {
        let shape = Shape::default();
        Self {
            shape,
            profile: shape.profile(),
            background: Self::DEFAULT_BACKGROUND,
            stroke: StrokeStyle::default(),
        }
    }

    /// Switches to `shape`, resetting scale, interval and step count to its defaults.
    pub fn select_shape(&mut self, shape: Shape) {
        self.shape = shape;
        self.profile = shape.profile();
        debug!("selected {shape}: {:?}", self.profile);
    }

    /// Value form of [`RenderState::select_shape`].
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.select_shape(shape);
        self
    }

    /// Switches to the shape called `name`.
    ///
    /// Unknown names leave the state untouched.
    pub fn select_shape_named(&mut self, name: &str) -> Result<Shape, ParseShapeError> {
        match name.parse::<Shape>() {
            Ok(shape) => {
                self.select_shape(shape);
                Ok(shape)
            }
            Err(err) => {
                warn!("ignoring unknown shape {name:?}");
                Err(err)
            }
        }
    }

    /// Overrides the scale. Non-finite values are ignored.
    pub fn set_scale(&mut self, scale: f64) {
        if !scale.is_finite() {
            warn!("ignoring non-finite scale {scale}");
            return;
        }
        self.profile.scale = scale;
    }

    /// Overrides the interval length.
    ///
    /// Non-positive or non-finite values are clamped to [`MIN_INTERVAL_LENGTH`].
    pub fn set_interval_length(&mut self, interval_length: f64) {
        let clamped = sanitize_interval_length(interval_length);
        if clamped != interval_length {
            warn!("interval length {interval_length} clamped to {MIN_INTERVAL_LENGTH}");
        }
        self.profile.interval_length = clamped;
    }

    /// Overrides the step count, clamped to [`MIN_STEP_COUNT`]..=[`MAX_STEP_COUNT`].
    pub fn set_step_count(&mut self, step_count: u32) {
        let clamped = step_count.clamp(MIN_STEP_COUNT, MAX_STEP_COUNT);
        if clamped != step_count {
            warn!("step count {step_count} clamped to {clamped}");
        }
        self.profile.step_count = clamped;
    }

    /// Sets the background fill.
    pub fn set_background(&mut self, color: Color) {
        self.background = color;
    }

    /// Sets the pen color, keeping its width.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke.brush = Brush::Solid(color);
    }

    /// Sets the pen width. Negative or non-finite widths become `0`.
    pub fn set_stroke_width(&mut self, stroke_width: f64) {
        self.stroke.stroke_width = sanitize_width(stroke_width);
    }

    /// Returns the selected shape.
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Returns the effective profile.
    pub fn profile(&self) -> Profile {
        self.profile
    }

    /// Returns the effective scale.
    pub fn scale(&self) -> f64 {
        self.profile.scale
    }

    /// Returns the effective interval length.
    pub fn interval_length(&self) -> f64 {
        self.profile.interval_length
    }

    /// Returns the effective step count.
    pub fn step_count(&self) -> u32 {
        self.profile.step_count
    }

    /// Returns the background fill.
    pub fn background(&self) -> Color {
        self.background
    }

    /// Returns the pen.
    pub fn stroke(&self) -> &StrokeStyle {
        &self.stroke
    }

    /// Returns the pen color.
    pub fn stroke_color(&self) -> Color {
        self.stroke.color().unwrap_or(Color::TRANSPARENT)
    }

    /// Samples the current curve, centered on `surface`.
    pub fn polyline(&self, surface: Rect) -> Polyline {
        Polyline::sample(self.shape, &self.profile, surface.center())
    }

    /// Builds everything one paint pass over `surface` needs.
    pub fn frame(&self, surface: Rect) -> Frame {
        Frame {
            surface,
            background: self.background,
            stroke: self.stroke.clone(),
            curve: self.polyline(surface),
        }
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::new()
    }
}
