// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Slot names and type-directed slot resolution.
//!
//! Each union-typed slot has a value enum with one variant per accepted
//! shape, plus `Unrecognized` for values that arrived through the loosely
//! typed [`RawValue`] path and matched no shape. [`SlotValue::resolve`] maps a
//! value to at most one [`ModifierOp`]; `Unrecognized` resolves to `None`,
//! which callers treat as a silent no-op.

use core::fmt;

use peniko::{Brush, Color};
use understory_modifier::{
    Alignment, BorderStroke, Dp, DpSize, InteractionSource, ModifierOp, OnClick, OnKeyEvent,
    PaddingValues, PointerEventPass, PointerEventType, PointerHandler, Shape,
};

use crate::raw::RawValue;

/// The property group a slot belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum GroupKind {
    /// Width, height and fill constraints.
    Size,
    /// Padding, background and border.
    Appearance,
    /// Focus and input handlers.
    Interaction,
}

impl GroupKind {
    /// Stable, human-readable name of the group.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Size => "size",
            Self::Appearance => "appearance",
            Self::Interaction => "interaction",
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A named property slot.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    /// Accepts a [`PaddingValue`].
    Padding,
    /// Accepts a [`BackgroundValue`].
    Background,
    /// Accepts a [`BorderValue`].
    Border,
    /// Accepts a single distance.
    Width,
    /// Accepts a single distance.
    Height,
    /// Accepts a fraction.
    FillMaxWidth,
    /// Accepts a fraction.
    FillMaxHeight,
    /// Accepts a fraction.
    FillMaxSize,
    /// Accepts a [`WrapContentValue`].
    WrapContentSize,
    /// Accepts a [`SizeValue`].
    Size,
    /// Accepts a [`FocusableValue`].
    Focusable,
    /// Accepts an [`OnClick`].
    OnClick,
    /// Accepts an [`OnKeyEvent`].
    OnKeyEvent,
    /// Accepts a [`PointerInputValue`].
    OnPointerEvent,
}

impl Slot {
    /// Returns the group that owns this slot.
    #[must_use]
    pub const fn group(self) -> GroupKind {
        match self {
            Self::Padding | Self::Background | Self::Border => GroupKind::Appearance,
            Self::Width
            | Self::Height
            | Self::FillMaxWidth
            | Self::FillMaxHeight
            | Self::FillMaxSize
            | Self::WrapContentSize
            | Self::Size => GroupKind::Size,
            Self::Focusable | Self::OnClick | Self::OnKeyEvent | Self::OnPointerEvent => {
                GroupKind::Interaction
            }
        }
    }

    /// Stable, human-readable name of the slot.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Padding => "padding",
            Self::Background => "background",
            Self::Border => "border",
            Self::Width => "width",
            Self::Height => "height",
            Self::FillMaxWidth => "fillMaxWidth",
            Self::FillMaxHeight => "fillMaxHeight",
            Self::FillMaxSize => "fillMaxSize",
            Self::WrapContentSize => "wrapContentSize",
            Self::Size => "size",
            Self::Focusable => "focusable",
            Self::OnClick => "onClick",
            Self::OnKeyEvent => "onKeyEvent",
            Self::OnPointerEvent => "onPointerEvent",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A value that can be assigned to a union-typed slot.
pub trait SlotValue: Clone + Sized + 'static {
    /// The slot this value type is accepted by.
    const SLOT: Slot;

    /// Classifies a loosely typed value by its runtime shape.
    ///
    /// A `RawValue` already holding `Self` is returned as is. Anything that
    /// matches no documented shape becomes the `Unrecognized` variant.
    fn from_raw(raw: RawValue) -> Self;

    /// Maps the value to the operation it contributes, if any.
    fn resolve(&self) -> Option<ModifierOp>;

    /// Shorthand for [`from_raw`](Self::from_raw) on a concrete value.
    ///
    /// A [`RawValue`] passed here is classified by what it holds.
    fn from_any<T: Clone + 'static>(value: T) -> Self {
        Self::from_raw(RawValue::new(value))
    }
}

/// Value of the `padding` slot.
#[derive(Clone, Debug)]
pub enum PaddingValue {
    /// A pre-built [`PaddingValues`].
    Values(PaddingValues),
    /// One distance for every edge.
    All(Dp),
    /// Horizontal and vertical distances.
    Symmetric {
        /// Leading and trailing edges.
        horizontal: Dp,
        /// Top and bottom edges.
        vertical: Dp,
    },
    /// One distance per edge.
    Each {
        /// Leading edge.
        start: Dp,
        /// Top edge.
        top: Dp,
        /// Trailing edge.
        end: Dp,
        /// Bottom edge.
        bottom: Dp,
    },
    /// A value matching no padding shape.
    Unrecognized(RawValue),
}

impl SlotValue for PaddingValue {
    const SLOT: Slot = Slot::Padding;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(values) = raw.cloned::<PaddingValues>() {
            return Self::Values(values);
        }
        if let Some(all) = raw.distance() {
            return Self::All(all);
        }
        if let Some((horizontal, vertical)) = raw.distance_pair() {
            return Self::Symmetric {
                horizontal,
                vertical,
            };
        }
        if let Some([start, top, end, bottom]) = raw.distance_quad() {
            return Self::Each {
                start,
                top,
                end,
                bottom,
            };
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        match *self {
            Self::Values(values) => Some(ModifierOp::PaddingValues(values)),
            Self::All(all) => Some(ModifierOp::PaddingAll(all)),
            Self::Symmetric {
                horizontal,
                vertical,
            } => Some(ModifierOp::PaddingSymmetric {
                horizontal,
                vertical,
            }),
            Self::Each {
                start,
                top,
                end,
                bottom,
            } => Some(ModifierOp::PaddingEach {
                start,
                top,
                end,
                bottom,
            }),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<PaddingValues> for PaddingValue {
    fn from(values: PaddingValues) -> Self {
        Self::Values(values)
    }
}

impl From<Dp> for PaddingValue {
    fn from(all: Dp) -> Self {
        Self::All(all)
    }
}

impl From<(Dp, Dp)> for PaddingValue {
    fn from((horizontal, vertical): (Dp, Dp)) -> Self {
        Self::Symmetric {
            horizontal,
            vertical,
        }
    }
}

impl From<(Dp, Dp, Dp, Dp)> for PaddingValue {
    fn from((start, top, end, bottom): (Dp, Dp, Dp, Dp)) -> Self {
        Self::Each {
            start,
            top,
            end,
            bottom,
        }
    }
}

/// Value of the `background` slot.
#[derive(Clone, Debug)]
pub enum BackgroundValue {
    /// Solid color over the element bounds.
    Color(Color),
    /// Solid color clipped to a shape.
    Shaped(Color, Shape),
    /// A value matching no background shape.
    Unrecognized(RawValue),
}

impl SlotValue for BackgroundValue {
    const SLOT: Slot = Slot::Background;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(color) = raw.cloned::<Color>() {
            return Self::Color(color);
        }
        if let Some((color, shape)) = raw.cloned::<(Color, Shape)>() {
            return Self::Shaped(color, shape);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        match *self {
            Self::Color(color) => Some(ModifierOp::Background(color)),
            Self::Shaped(color, shape) => Some(ModifierOp::BackgroundShaped { color, shape }),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<Color> for BackgroundValue {
    fn from(color: Color) -> Self {
        Self::Color(color)
    }
}

impl From<(Color, Shape)> for BackgroundValue {
    fn from((color, shape): (Color, Shape)) -> Self {
        Self::Shaped(color, shape)
    }
}

/// Value of the `border` slot.
///
/// The two-element shapes are distinct variants. On the loosely typed path
/// they are told apart by the kind of the first tuple element: a distance
/// means width and color, a [`BorderStroke`] means stroke and shape.
#[derive(Clone, Debug)]
pub enum BorderValue {
    /// A pre-built stroke along the element bounds.
    Stroke(BorderStroke),
    /// Width and solid color along the element bounds.
    WidthColor(Dp, Color),
    /// A pre-built stroke along a shape.
    StrokeShape(BorderStroke, Shape),
    /// Width and paint along a shape.
    WidthBrushShape(Dp, Brush, Shape),
    /// A value matching no border shape.
    Unrecognized(RawValue),
}

impl SlotValue for BorderValue {
    const SLOT: Slot = Slot::Border;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(stroke) = raw.cloned::<BorderStroke>() {
            return Self::Stroke(stroke);
        }
        // Distance-like first element.
        if let Some((width, color)) = raw.distance_and::<Color>() {
            return Self::WidthColor(width, color);
        }
        // Stroke-like first element.
        if let Some((stroke, shape)) = raw.cloned::<(BorderStroke, Shape)>() {
            return Self::StrokeShape(stroke, shape);
        }
        if let Some((width, color, shape)) = raw.distance_and2::<Color, Shape>() {
            return Self::WidthBrushShape(width, Brush::Solid(color), shape);
        }
        if let Some((width, brush, shape)) = raw.distance_and2::<Brush, Shape>() {
            return Self::WidthBrushShape(width, brush, shape);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        let (width, brush, shape) = match self {
            Self::Stroke(stroke) => (stroke.width, stroke.brush.clone(), Shape::Rectangle),
            Self::WidthColor(width, color) => (*width, Brush::Solid(*color), Shape::Rectangle),
            Self::StrokeShape(stroke, shape) => (stroke.width, stroke.brush.clone(), *shape),
            Self::WidthBrushShape(width, brush, shape) => (*width, brush.clone(), *shape),
            Self::Unrecognized(_) => return None,
        };
        Some(ModifierOp::Border {
            width,
            brush,
            shape,
        })
    }
}

impl From<BorderStroke> for BorderValue {
    fn from(stroke: BorderStroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<(Dp, Color)> for BorderValue {
    fn from((width, color): (Dp, Color)) -> Self {
        Self::WidthColor(width, color)
    }
}

impl From<(BorderStroke, Shape)> for BorderValue {
    fn from((stroke, shape): (BorderStroke, Shape)) -> Self {
        Self::StrokeShape(stroke, shape)
    }
}

impl From<(Dp, Color, Shape)> for BorderValue {
    fn from((width, color, shape): (Dp, Color, Shape)) -> Self {
        Self::WidthBrushShape(width, Brush::Solid(color), shape)
    }
}

impl From<(Dp, Brush, Shape)> for BorderValue {
    fn from((width, brush, shape): (Dp, Brush, Shape)) -> Self {
        Self::WidthBrushShape(width, brush, shape)
    }
}

/// Value of the `wrapContentSize` slot.
#[derive(Clone, Debug)]
pub enum WrapContentValue {
    /// Alignment, bounded by the incoming constraints.
    Align(Alignment),
    /// Centered, optionally unbounded.
    Unbounded(bool),
    /// Alignment and unbounded flag.
    AlignUnbounded(Alignment, bool),
    /// A value matching no wrap-content shape.
    Unrecognized(RawValue),
}

impl SlotValue for WrapContentValue {
    const SLOT: Slot = Slot::WrapContentSize;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(alignment) = raw.cloned::<Alignment>() {
            return Self::Align(alignment);
        }
        if let Some(unbounded) = raw.cloned::<bool>() {
            return Self::Unbounded(unbounded);
        }
        if let Some((alignment, unbounded)) = raw.cloned::<(Alignment, bool)>() {
            return Self::AlignUnbounded(alignment, unbounded);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        let (alignment, unbounded) = match *self {
            Self::Align(alignment) => (alignment, false),
            Self::Unbounded(unbounded) => (Alignment::Center, unbounded),
            Self::AlignUnbounded(alignment, unbounded) => (alignment, unbounded),
            Self::Unrecognized(_) => return None,
        };
        Some(ModifierOp::WrapContentSize {
            alignment,
            unbounded,
        })
    }
}

impl From<Alignment> for WrapContentValue {
    fn from(alignment: Alignment) -> Self {
        Self::Align(alignment)
    }
}

impl From<bool> for WrapContentValue {
    fn from(unbounded: bool) -> Self {
        Self::Unbounded(unbounded)
    }
}

impl From<(Alignment, bool)> for WrapContentValue {
    fn from((alignment, unbounded): (Alignment, bool)) -> Self {
        Self::AlignUnbounded(alignment, unbounded)
    }
}

/// Value of the `size` slot.
#[derive(Clone, Debug)]
pub enum SizeValue {
    /// Square of the given side.
    Square(Dp),
    /// Width and height.
    WidthHeight(Dp, Dp),
    /// A combined size value.
    Size(DpSize),
    /// A value matching no size shape.
    Unrecognized(RawValue),
}

impl SlotValue for SizeValue {
    const SLOT: Slot = Slot::Size;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(size) = raw.cloned::<DpSize>() {
            return Self::Size(size);
        }
        if let Some(side) = raw.distance() {
            return Self::Square(side);
        }
        if let Some((width, height)) = raw.distance_pair() {
            return Self::WidthHeight(width, height);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        let size = match *self {
            Self::Square(side) => DpSize::square(side),
            Self::WidthHeight(width, height) => DpSize::new(width, height),
            Self::Size(size) => size,
            Self::Unrecognized(_) => return None,
        };
        Some(ModifierOp::Size(size))
    }
}

impl From<Dp> for SizeValue {
    fn from(side: Dp) -> Self {
        Self::Square(side)
    }
}

impl From<(Dp, Dp)> for SizeValue {
    fn from((width, height): (Dp, Dp)) -> Self {
        Self::WidthHeight(width, height)
    }
}

impl From<DpSize> for SizeValue {
    fn from(size: DpSize) -> Self {
        Self::Size(size)
    }
}

/// Value of the `focusable` slot.
#[derive(Clone, Debug)]
pub enum FocusableValue {
    /// Enabled flag, no interaction source.
    Enabled(bool),
    /// Enabled, reporting into an interaction source.
    Source(InteractionSource),
    /// Enabled flag and interaction source.
    EnabledSource(bool, InteractionSource),
    /// A value matching no focusable shape.
    Unrecognized(RawValue),
}

impl SlotValue for FocusableValue {
    const SLOT: Slot = Slot::Focusable;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some(enabled) = raw.cloned::<bool>() {
            return Self::Enabled(enabled);
        }
        if let Some(source) = raw.cloned::<InteractionSource>() {
            return Self::Source(source);
        }
        if let Some((enabled, source)) = raw.cloned::<(bool, InteractionSource)>() {
            return Self::EnabledSource(enabled, source);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        let (enabled, interaction_source) = match self {
            Self::Enabled(enabled) => (*enabled, None),
            Self::Source(source) => (true, Some(source.clone())),
            Self::EnabledSource(enabled, source) => (*enabled, Some(source.clone())),
            Self::Unrecognized(_) => return None,
        };
        Some(ModifierOp::Focusable {
            enabled,
            interaction_source,
        })
    }
}

impl From<bool> for FocusableValue {
    fn from(enabled: bool) -> Self {
        Self::Enabled(enabled)
    }
}

impl From<InteractionSource> for FocusableValue {
    fn from(source: InteractionSource) -> Self {
        Self::Source(source)
    }
}

impl From<(bool, InteractionSource)> for FocusableValue {
    fn from((enabled, source): (bool, InteractionSource)) -> Self {
        Self::EnabledSource(enabled, source)
    }
}

/// Value of the `onPointerEvent` slot.
#[derive(Clone, Debug)]
pub enum PointerInputValue {
    /// Handler for one event type in the main pass.
    Handler(PointerEventType, PointerHandler),
    /// Handler for one event type in an explicit pass.
    PassHandler(PointerEventType, PointerEventPass, PointerHandler),
    /// A value matching no pointer-input shape.
    Unrecognized(RawValue),
}

impl SlotValue for PointerInputValue {
    const SLOT: Slot = Slot::OnPointerEvent;

    fn from_raw(raw: RawValue) -> Self {
        if let Some(value) = raw.cloned::<Self>() {
            return value;
        }
        if let Some((event_type, handler)) = raw.cloned::<(PointerEventType, PointerHandler)>() {
            return Self::Handler(event_type, handler);
        }
        if let Some((event_type, pass, handler)) =
            raw.cloned::<(PointerEventType, PointerEventPass, PointerHandler)>()
        {
            return Self::PassHandler(event_type, pass, handler);
        }
        Self::Unrecognized(raw)
    }

    fn resolve(&self) -> Option<ModifierOp> {
        let (event_type, pass, handler) = match self {
            Self::Handler(event_type, handler) => {
                (*event_type, PointerEventPass::Main, handler.clone())
            }
            Self::PassHandler(event_type, pass, handler) => (*event_type, *pass, handler.clone()),
            Self::Unrecognized(_) => return None,
        };
        Some(ModifierOp::PointerInput {
            event_type,
            pass,
            handler,
        })
    }
}

impl From<(PointerEventType, PointerHandler)> for PointerInputValue {
    fn from((event_type, handler): (PointerEventType, PointerHandler)) -> Self {
        Self::Handler(event_type, handler)
    }
}

impl From<(PointerEventType, PointerEventPass, PointerHandler)> for PointerInputValue {
    fn from(
        (event_type, pass, handler): (PointerEventType, PointerEventPass, PointerHandler),
    ) -> Self {
        Self::PassHandler(event_type, pass, handler)
    }
}

/// Resolves a loosely typed click handler.
pub(crate) fn click_handler(raw: &RawValue) -> Option<OnClick> {
    raw.cloned::<OnClick>()
}

/// Resolves a loosely typed key handler.
pub(crate) fn key_handler(raw: &RawValue) -> Option<OnKeyEvent> {
    raw.cloned::<OnKeyEvent>()
}
