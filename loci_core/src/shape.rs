// Copyright 2025 the Loci Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of curves Loci can draw.

use core::fmt;
use core::str::FromStr;

use kurbo::Point;

use crate::profile::Profile;

/// A parametric curve kind.
///
/// Each shape selects both a closed-form formula (see [`crate::evaluate`]) and a default
/// [`Profile`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `(cos³t, sin³t)`, a four-cusped hypocycloid.
    #[default]
    Astroid,
    /// A cycloid rolled along the y axis.
    Cycloid,
    /// A Huygens (two-cusped epicycloid) curve.
    HuygensCycloid,
    /// A three-cusped hypocycloid (deltoid).
    HypoCycloid,
    /// A diagonal line through the origin.
    Line,
    /// The unit circle.
    Circle,
    /// An axis-aligned ellipse with semi-axes `2` and `1.1`.
    Ellipse,
    /// A Lissajous-like epitrochoid.
    Fancy,
    /// A five-armed hypotrochoid.
    Starfish,
    /// An epicycloid with fourteen lobes.
    Cloud,
    /// [`Shape::Cloud`] with the sign of the second x-term flipped.
    InvertedCloud,
}

impl Shape {
    /// Every shape, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::Astroid,
        Self::Cycloid,
        Self::HuygensCycloid,
        Self::HypoCycloid,
        Self::Line,
        Self::Circle,
        Self::Ellipse,
        Self::Fancy,
        Self::Starfish,
        Self::Cloud,
        Self::InvertedCloud,
    ];

    /// Returns the stable identifier used by [`Display`](fmt::Display) and [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Astroid => "astroid",
            Self::Cycloid => "cycloid",
            Self::HuygensCycloid => "huygens-cycloid",
            Self::HypoCycloid => "hypo-cycloid",
            Self::Line => "line",
            Self::Circle => "circle",
            Self::Ellipse => "ellipse",
            Self::Fancy => "fancy",
            Self::Starfish => "starfish",
            Self::Cloud => "cloud",
            Self::InvertedCloud => "inverted-cloud",
        }
    }

    /// Returns the default profile for this shape.
    #[must_use]
    pub fn profile(self) -> Profile {
        Profile::for_shape(self)
    }

    /// Evaluates this shape's curve at parameter `t`, in curve space.
    #[must_use]
    pub fn evaluate(self, t: f64) -> Point {
        crate::curve::evaluate(self, t)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown shape name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParseShapeError;

impl fmt::Display for ParseShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("unknown shape name")
    }
}

impl core::error::Error for ParseShapeError {}

impl FromStr for Shape {
    type Err = ParseShapeError;

    /// Parses a shape name, ignoring ASCII case and accepting `_` in place of `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|shape| names_match(shape.name(), s))
            .ok_or(ParseShapeError)
    }
}

fn names_match(canonical: &str, input: &str) -> bool {
    canonical.len() == input.len()
        && canonical.bytes().zip(input.bytes()).all(|(c, i)| {
            let i = if i == b'_' { b'-' } else { i };
            c == i.to_ascii_lowercase()
        })
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::string::ToString;

    use super::*;

    #[test]
    fn default_shape_is_astroid() {
        assert_eq!(Shape::default(), Shape::Astroid);
    }

    #[test]
    fn names_round_trip_through_from_str() {
        for shape in Shape::ALL {
            assert_eq!(shape.to_string().parse::<Shape>(), Ok(shape));
        }
    }

    #[test]
    fn parsing_is_lenient_about_case_and_separators() {
        assert_eq!("Huygens_Cycloid".parse::<Shape>(), Ok(Shape::HuygensCycloid));
        assert_eq!("  INVERTED-CLOUD ".parse::<Shape>(), Ok(Shape::InvertedCloud));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!("spiral".parse::<Shape>(), Err(ParseShapeError));
        assert_eq!("".parse::<Shape>(), Err(ParseShapeError));
        assert_eq!("cloudy".parse::<Shape>(), Err(ParseShapeError));
    }
}
