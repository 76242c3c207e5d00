// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain value types carried by modifier operations.

use kurbo::{Insets, RoundedRectRadii};
use peniko::{Brush, Color};

/// A density-independent distance.
///
/// The surface never converts `Dp` to device pixels itself; that is the
/// renderer's job. Values are not clamped, so negative distances are
/// representable and passed through unchanged.
#[derive(Copy, Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Dp(pub f64);

impl Dp {
    /// Zero distance.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new distance.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Returns the raw distance value.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl From<f64> for Dp {
    #[inline]
    fn from(value: f64) -> Self {
        Self(value)
    }
}

/// A width/height pair expressed in [`Dp`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct DpSize {
    /// Horizontal extent.
    pub width: Dp,
    /// Vertical extent.
    pub height: Dp,
}

impl DpSize {
    /// Creates a size from its two extents.
    #[inline]
    pub const fn new(width: Dp, height: Dp) -> Self {
        Self { width, height }
    }

    /// Creates a size whose width and height are both `side`.
    #[inline]
    pub const fn square(side: Dp) -> Self {
        Self::new(side, side)
    }
}

impl From<(Dp, Dp)> for DpSize {
    #[inline]
    fn from((width, height): (Dp, Dp)) -> Self {
        Self::new(width, height)
    }
}

/// Padding on the four edges of an element.
///
/// `start` and `end` are relative to the layout direction; [`to_insets`]
/// resolves them for left-to-right layout.
///
/// [`to_insets`]: PaddingValues::to_insets
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PaddingValues {
    /// Padding on the leading edge.
    pub start: Dp,
    /// Padding on the top edge.
    pub top: Dp,
    /// Padding on the trailing edge.
    pub end: Dp,
    /// Padding on the bottom edge.
    pub bottom: Dp,
}

impl PaddingValues {
    /// Creates padding with explicit values for every edge.
    #[inline]
    pub const fn new(start: Dp, top: Dp, end: Dp, bottom: Dp) -> Self {
        Self {
            start,
            top,
            end,
            bottom,
        }
    }

    /// Creates padding with the same value on every edge.
    #[inline]
    pub const fn all(value: Dp) -> Self {
        Self::new(value, value, value, value)
    }

    /// Creates padding with one value for both horizontal edges and one for
    /// both vertical edges.
    #[inline]
    pub const fn symmetric(horizontal: Dp, vertical: Dp) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }

    /// Converts to kurbo insets for left-to-right layout.
    #[inline]
    pub fn to_insets(self) -> Insets {
        Insets::new(self.start.0, self.top.0, self.end.0, self.bottom.0)
    }
}

/// Outline used by shaped backgrounds and borders.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Shape {
    /// Axis-aligned rectangle covering the element bounds.
    #[default]
    Rectangle,
    /// Circle (or ellipse, for non-square bounds) inscribed in the element bounds.
    Circle,
    /// Rectangle with rounded corners.
    RoundedCorners(RoundedRectRadii),
}

impl Shape {
    /// Rounded rectangle with the same radius on every corner.
    #[inline]
    pub fn rounded(radius: f64) -> Self {
        Self::RoundedCorners(RoundedRectRadii::from_single_radius(radius))
    }
}

/// Position of content inside a larger box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Alignment {
    /// Top leading corner.
    TopStart,
    /// Top edge, horizontally centered.
    TopCenter,
    /// Top trailing corner.
    TopEnd,
    /// Leading edge, vertically centered.
    CenterStart,
    /// Centered on both axes.
    #[default]
    Center,
    /// Trailing edge, vertically centered.
    CenterEnd,
    /// Bottom leading corner.
    BottomStart,
    /// Bottom edge, horizontally centered.
    BottomCenter,
    /// Bottom trailing corner.
    BottomEnd,
}

/// Width and paint of a border.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderStroke {
    /// Stroke width.
    pub width: Dp,
    /// Paint used for the stroke.
    pub brush: Brush,
}

impl BorderStroke {
    /// Creates a stroke from a width and any brush.
    #[inline]
    pub fn new(width: Dp, brush: impl Into<Brush>) -> Self {
        Self {
            width,
            brush: brush.into(),
        }
    }

    /// Creates a solid-color stroke.
    #[inline]
    pub fn solid(width: Dp, color: Color) -> Self {
        Self {
            width,
            brush: Brush::Solid(color),
        }
    }
}
