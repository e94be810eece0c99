// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pen styling for curves and frames.

use peniko::color::palette::css;
use peniko::{Brush, Color};

/// A paint + width pair for the pen that strokes the curve and the frame outline.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in pixels.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Default pen width.
    pub const DEFAULT_WIDTH: f64 = 2.0;

    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width: sanitize_width(stroke_width),
        }
    }

    /// Sets the stroke width, clamping negative or non-finite widths to zero.
    #[must_use]
    pub fn with_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = sanitize_width(stroke_width);
        self
    }

    /// Returns the solid color of this stroke, if the brush is solid.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match &self.brush {
            Brush::Solid(color) => Some(*color),
            _ => None,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::WHITE, Self::DEFAULT_WIDTH)
    }
}

pub(crate) fn sanitize_width(stroke_width: f64) -> f64 {
    if stroke_width.is_finite() && stroke_width > 0.0 {
        stroke_width
    } else {
        0.0
    }
}
