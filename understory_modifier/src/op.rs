// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier operations and their discriminants.

use core::fmt;

use peniko::{Brush, Color};

use crate::callback::{
    InteractionSource, OnClick, OnKeyEvent, PointerEventPass, PointerEventType, PointerHandler,
};
use crate::units::{Alignment, Dp, DpSize, PaddingValues, Shape};

/// A single operation applied to a styleable surface.
///
/// Operations are immutable once created. A [`Modifier`](crate::Modifier) is
/// an ordered sequence of them.
///
/// `PartialEq` compares payloads by value, except for callback handles and
/// [`InteractionSource`], which compare by identity.
#[derive(Clone, Debug, PartialEq)]
pub enum ModifierOp {
    /// Padding from a pre-built [`PaddingValues`].
    PaddingValues(PaddingValues),
    /// The same padding on every edge.
    PaddingAll(Dp),
    /// Horizontal and vertical padding.
    PaddingSymmetric {
        /// Padding on the leading and trailing edges.
        horizontal: Dp,
        /// Padding on the top and bottom edges.
        vertical: Dp,
    },
    /// Explicit padding for every edge.
    PaddingEach {
        /// Leading edge.
        start: Dp,
        /// Top edge.
        top: Dp,
        /// Trailing edge.
        end: Dp,
        /// Bottom edge.
        bottom: Dp,
    },
    /// Solid rectangular background fill.
    Background(Color),
    /// Solid background fill clipped to a shape.
    BackgroundShaped {
        /// Fill color.
        color: Color,
        /// Fill outline.
        shape: Shape,
    },
    /// Border drawn along a shape's outline.
    Border {
        /// Stroke width.
        width: Dp,
        /// Stroke paint.
        brush: Brush,
        /// Outline the stroke follows.
        shape: Shape,
    },
    /// Preferred width.
    Width(Dp),
    /// Preferred height.
    Height(Dp),
    /// Fill a fraction of the maximum incoming width.
    FillMaxWidth(f32),
    /// Fill a fraction of the maximum incoming height.
    FillMaxHeight(f32),
    /// Fill a fraction of both maximum incoming dimensions.
    FillMaxSize(f32),
    /// Measure content at its preferred size and align it inside the incoming bounds.
    WrapContentSize {
        /// Placement of the content when it is smaller than the bounds.
        alignment: Alignment,
        /// Whether content may measure larger than the incoming maximum.
        unbounded: bool,
    },
    /// Preferred width and height.
    Size(DpSize),
    /// Focus participation.
    Focusable {
        /// Whether the element can take focus.
        enabled: bool,
        /// Source receiving focus interactions, if any.
        interaction_source: Option<InteractionSource>,
    },
    /// Click handling.
    Clickable(OnClick),
    /// Keyboard event handling.
    KeyEvent(OnKeyEvent),
    /// Raw pointer event handling.
    PointerInput {
        /// Event category the handler observes.
        event_type: PointerEventType,
        /// Dispatch pass the handler runs in.
        pass: PointerEventPass,
        /// The handler.
        handler: PointerHandler,
    },
}

impl ModifierOp {
    /// Returns the discriminant of this operation.
    #[must_use]
    pub fn kind(&self) -> OpKind {
        match self {
            Self::PaddingValues(_) => OpKind::PaddingValues,
            Self::PaddingAll(_) => OpKind::PaddingAll,
            Self::PaddingSymmetric { .. } => OpKind::PaddingSymmetric,
            Self::PaddingEach { .. } => OpKind::PaddingEach,
            Self::Background(_) => OpKind::Background,
            Self::BackgroundShaped { .. } => OpKind::BackgroundShaped,
            Self::Border { .. } => OpKind::Border,
            Self::Width(_) => OpKind::Width,
            Self::Height(_) => OpKind::Height,
            Self::FillMaxWidth(_) => OpKind::FillMaxWidth,
            Self::FillMaxHeight(_) => OpKind::FillMaxHeight,
            Self::FillMaxSize(_) => OpKind::FillMaxSize,
            Self::WrapContentSize { .. } => OpKind::WrapContentSize,
            Self::Size(_) => OpKind::Size,
            Self::Focusable { .. } => OpKind::Focusable,
            Self::Clickable(_) => OpKind::Clickable,
            Self::KeyEvent(_) => OpKind::KeyEvent,
            Self::PointerInput { .. } => OpKind::PointerInput,
        }
    }
}

/// Discriminant of a [`ModifierOp`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// [`ModifierOp::PaddingValues`].
    PaddingValues,
    /// [`ModifierOp::PaddingAll`].
    PaddingAll,
    /// [`ModifierOp::PaddingSymmetric`].
    PaddingSymmetric,
    /// [`ModifierOp::PaddingEach`].
    PaddingEach,
    /// [`ModifierOp::Background`].
    Background,
    /// [`ModifierOp::BackgroundShaped`].
    BackgroundShaped,
    /// [`ModifierOp::Border`].
    Border,
    /// [`ModifierOp::Width`].
    Width,
    /// [`ModifierOp::Height`].
    Height,
    /// [`ModifierOp::FillMaxWidth`].
    FillMaxWidth,
    /// [`ModifierOp::FillMaxHeight`].
    FillMaxHeight,
    /// [`ModifierOp::FillMaxSize`].
    FillMaxSize,
    /// [`ModifierOp::WrapContentSize`].
    WrapContentSize,
    /// [`ModifierOp::Size`].
    Size,
    /// [`ModifierOp::Focusable`].
    Focusable,
    /// [`ModifierOp::Clickable`].
    Clickable,
    /// [`ModifierOp::KeyEvent`].
    KeyEvent,
    /// [`ModifierOp::PointerInput`].
    PointerInput,
}

impl OpKind {
    /// Every kind, in declaration order.
    pub const ALL: [Self; 18] = [
        Self::PaddingValues,
        Self::PaddingAll,
        Self::PaddingSymmetric,
        Self::PaddingEach,
        Self::Background,
        Self::BackgroundShaped,
        Self::Border,
        Self::Width,
        Self::Height,
        Self::FillMaxWidth,
        Self::FillMaxHeight,
        Self::FillMaxSize,
        Self::WrapContentSize,
        Self::Size,
        Self::Focusable,
        Self::Clickable,
        Self::KeyEvent,
        Self::PointerInput,
    ];

    /// Stable, human-readable name of the kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PaddingValues => "padding-values",
            Self::PaddingAll => "padding-all",
            Self::PaddingSymmetric => "padding-symmetric",
            Self::PaddingEach => "padding-each",
            Self::Background => "background",
            Self::BackgroundShaped => "background-shaped",
            Self::Border => "border",
            Self::Width => "width",
            Self::Height => "height",
            Self::FillMaxWidth => "fill-max-width",
            Self::FillMaxHeight => "fill-max-height",
            Self::FillMaxSize => "fill-max-size",
            Self::WrapContentSize => "wrap-content-size",
            Self::Size => "size",
            Self::Focusable => "focusable",
            Self::Clickable => "clickable",
            Self::KeyEvent => "key-event",
            Self::PointerInput => "pointer-input",
        }
    }
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::vec::Vec;

    #[test]
    fn kind_matches_variant() {
        assert_eq!(ModifierOp::Width(Dp(1.0)).kind(), OpKind::Width);
        assert_eq!(
            ModifierOp::Clickable(OnClick::new(|| {})).kind(),
            OpKind::Clickable
        );
        assert_eq!(
            ModifierOp::WrapContentSize {
                alignment: Alignment::Center,
                unbounded: false,
            }
            .kind(),
            OpKind::WrapContentSize
        );
    }

    #[test]
    fn kind_names_are_unique() {
        let mut names: Vec<_> = OpKind::ALL.iter().map(|k| k.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), OpKind::ALL.len());
    }

    #[test]
    fn kind_display_uses_name() {
        assert_eq!(format!("{}", OpKind::FillMaxSize), "fill-max-size");
    }

    #[test]
    fn payload_equality() {
        assert_eq!(ModifierOp::Height(Dp(5.0)), ModifierOp::Height(Dp(5.0)));
        assert_ne!(ModifierOp::Height(Dp(5.0)), ModifierOp::Height(Dp(6.0)));
        // Distinct closures never compare equal by value.
        assert_ne!(
            ModifierOp::Clickable(OnClick::new(|| {})),
            ModifierOp::Clickable(OnClick::new(|| {}))
        );
    }
}
