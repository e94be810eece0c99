// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Parametric curve rendering core for Loci.
//!
//! This crate is the toolkit-independent part of a "curve widget":
//! - a closed set of [`Shape`]s, each with a closed-form curve `t -> (x, y)`,
//! - a per-shape default [`Profile`] (scale, parameter interval, step count),
//! - a [`RenderState`] owned by the host UI, with an explicit reset-on-select transition, and
//! - a [`Polyline`] sampler that maps curve space into pixel space.
//!
//! Window chrome, event dispatch and color pickers belong to the host. A host typically keeps a
//! [`RenderState`], feeds button/spin-box input into it, and draws [`RenderState::frame`] from its
//! paint handler:
//!
//! ```
//! use kurbo::Rect;
//! use loci_core::{RenderState, Shape};
//!
//! let mut state = RenderState::new();
//! state.select_shape(Shape::Circle);
//! let frame = state.frame(Rect::new(0.0, 0.0, 400.0, 400.0));
//! assert_eq!(frame.curve.segment_count(), 129);
//! ```

#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod curve;
#[cfg(not(feature = "std"))]
mod float;
mod frame;
mod polyline;
mod profile;
mod render_state;
#[cfg(test)]
mod scenario_tests;
mod shape;
mod style;

pub use curve::evaluate;
pub use frame::{Frame, SIZE_HINT};
pub use polyline::Polyline;
pub use profile::{MAX_STEP_COUNT, MIN_INTERVAL_LENGTH, MIN_STEP_COUNT, Profile};
pub use render_state::RenderState;
pub use shape::{ParseShapeError, Shape};
pub use style::StrokeStyle;
