// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The persistent modifier chain.

use alloc::rc::Rc;
use alloc::vec::Vec;

use peniko::{Brush, Color};

use crate::callback::{
    InteractionSource, OnClick, OnKeyEvent, PointerEventPass, PointerEventType, PointerHandler,
};
use crate::op::ModifierOp;
use crate::units::{Alignment, BorderStroke, Dp, DpSize, PaddingValues, Shape};

/// An ordered, persistent chain of [`ModifierOp`]s.
///
/// Appending returns a new `Modifier`; any clone taken earlier keeps seeing
/// the operations it had. Internally the operations live in an
/// `Rc<Vec<ModifierOp>>` which is only copied when an append hits a shared
/// chain, so building a chain by value is linear.
///
/// ```rust
/// use understory_modifier::{Dp, Modifier, OpKind};
///
/// let base = Modifier::new().width(Dp(100.0));
/// let taller = base.clone().height(Dp(50.0));
///
/// assert_eq!(base.len(), 1);
/// let kinds: Vec<_> = taller.iter().map(|op| op.kind()).collect();
/// assert_eq!(kinds, [OpKind::Width, OpKind::Height]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Modifier {
    ops: Rc<Vec<ModifierOp>>,
}

impl Modifier {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the chain has no operations.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Returns the number of operations in the chain.
    #[must_use]
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns the operations, outermost first.
    #[must_use]
    #[inline]
    pub fn ops(&self) -> &[ModifierOp] {
        &self.ops
    }

    /// Iterates over the operations, outermost first.
    pub fn iter(&self) -> core::slice::Iter<'_, ModifierOp> {
        self.ops.iter()
    }

    /// Layers `op` on top of this chain.
    #[must_use]
    pub fn then(mut self, op: ModifierOp) -> Self {
        Rc::make_mut(&mut self.ops).push(op);
        self
    }

    /// Layers every operation of `other`, in order, on top of this chain.
    #[must_use]
    pub fn then_all(mut self, other: &Self) -> Self {
        if other.is_empty() {
            return self;
        }
        if self.is_empty() {
            return other.clone();
        }
        Rc::make_mut(&mut self.ops).extend(other.ops.iter().cloned());
        self
    }

    /// Folds over the operations from the outermost to the innermost.
    pub fn fold_in<R>(&self, initial: R, f: impl FnMut(R, &ModifierOp) -> R) -> R {
        self.ops.iter().fold(initial, f)
    }

    /// Folds over the operations from the innermost to the outermost.
    pub fn fold_out<R>(&self, initial: R, f: impl FnMut(R, &ModifierOp) -> R) -> R {
        self.ops.iter().rev().fold(initial, f)
    }

    /// Pads with a pre-built [`PaddingValues`].
    #[must_use]
    pub fn padding(self, values: PaddingValues) -> Self {
        self.then(ModifierOp::PaddingValues(values))
    }

    /// Pads every edge by `all`.
    #[must_use]
    pub fn padding_all(self, all: Dp) -> Self {
        self.then(ModifierOp::PaddingAll(all))
    }

    /// Pads horizontal and vertical edges separately.
    #[must_use]
    pub fn padding_symmetric(self, horizontal: Dp, vertical: Dp) -> Self {
        self.then(ModifierOp::PaddingSymmetric {
            horizontal,
            vertical,
        })
    }

    /// Pads each edge explicitly.
    #[must_use]
    pub fn padding_each(self, start: Dp, top: Dp, end: Dp, bottom: Dp) -> Self {
        self.then(ModifierOp::PaddingEach {
            start,
            top,
            end,
            bottom,
        })
    }

    /// Fills the element bounds with `color`.
    #[must_use]
    pub fn background(self, color: Color) -> Self {
        self.then(ModifierOp::Background(color))
    }

    /// Fills `shape` with `color`.
    #[must_use]
    pub fn background_shaped(self, color: Color, shape: Shape) -> Self {
        self.then(ModifierOp::BackgroundShaped { color, shape })
    }

    /// Draws a border of the given width and paint along `shape`.
    #[must_use]
    pub fn border(self, width: Dp, brush: impl Into<Brush>, shape: Shape) -> Self {
        self.then(ModifierOp::Border {
            width,
            brush: brush.into(),
            shape,
        })
    }

    /// Draws `stroke` along `shape`.
    #[must_use]
    pub fn border_stroke(self, stroke: BorderStroke, shape: Shape) -> Self {
        self.border(stroke.width, stroke.brush, shape)
    }

    /// Draws a solid rectangular border.
    #[must_use]
    pub fn border_width_color(self, width: Dp, color: Color) -> Self {
        self.border(width, color, Shape::Rectangle)
    }

    /// Sets the preferred width.
    #[must_use]
    pub fn width(self, width: Dp) -> Self {
        self.then(ModifierOp::Width(width))
    }

    /// Sets the preferred height.
    #[must_use]
    pub fn height(self, height: Dp) -> Self {
        self.then(ModifierOp::Height(height))
    }

    /// Fills `fraction` of the maximum width.
    #[must_use]
    pub fn fill_max_width(self, fraction: f32) -> Self {
        self.then(ModifierOp::FillMaxWidth(fraction))
    }

    /// Fills `fraction` of the maximum height.
    #[must_use]
    pub fn fill_max_height(self, fraction: f32) -> Self {
        self.then(ModifierOp::FillMaxHeight(fraction))
    }

    /// Fills `fraction` of the maximum width and height.
    #[must_use]
    pub fn fill_max_size(self, fraction: f32) -> Self {
        self.then(ModifierOp::FillMaxSize(fraction))
    }

    /// Wraps content at its preferred size.
    #[must_use]
    pub fn wrap_content_size(self, alignment: Alignment, unbounded: bool) -> Self {
        self.then(ModifierOp::WrapContentSize {
            alignment,
            unbounded,
        })
    }

    /// Sets the preferred width and height.
    #[must_use]
    pub fn size(self, size: DpSize) -> Self {
        self.then(ModifierOp::Size(size))
    }

    /// Makes the element focusable.
    #[must_use]
    pub fn focusable(self, enabled: bool, interaction_source: Option<InteractionSource>) -> Self {
        self.then(ModifierOp::Focusable {
            enabled,
            interaction_source,
        })
    }

    /// Attaches a click handler.
    #[must_use]
    pub fn clickable(self, on_click: OnClick) -> Self {
        self.then(ModifierOp::Clickable(on_click))
    }

    /// Attaches a keyboard handler.
    #[must_use]
    pub fn on_key_event(self, on_key_event: OnKeyEvent) -> Self {
        self.then(ModifierOp::KeyEvent(on_key_event))
    }

    /// Attaches a pointer handler for one event type and pass.
    #[must_use]
    pub fn pointer_input(
        self,
        event_type: PointerEventType,
        pass: PointerEventPass,
        handler: PointerHandler,
    ) -> Self {
        self.then(ModifierOp::PointerInput {
            event_type,
            pass,
            handler,
        })
    }
}

impl<'a> IntoIterator for &'a Modifier {
    type Item = &'a ModifierOp;
    type IntoIter = core::slice::Iter<'a, ModifierOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<ModifierOp> for Modifier {
    fn from_iter<I: IntoIterator<Item = ModifierOp>>(iter: I) -> Self {
        Self {
            ops: Rc::new(iter.into_iter().collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::op::OpKind;

    fn kinds(modifier: &Modifier) -> Vec<OpKind> {
        modifier.iter().map(ModifierOp::kind).collect()
    }

    #[test]
    fn empty_chain() {
        let m = Modifier::new();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
    }

    #[test]
    fn append_preserves_order() {
        let m = Modifier::new()
            .padding_all(Dp(4.0))
            .background(Color::from_rgb8(0, 0, 0))
            .width(Dp(10.0));
        assert_eq!(
            kinds(&m),
            [OpKind::PaddingAll, OpKind::Background, OpKind::Width]
        );
    }

    #[test]
    fn append_does_not_mutate_shared_chain() {
        let base = Modifier::new().width(Dp(1.0));
        let a = base.clone().height(Dp(2.0));
        let b = base.clone().size(DpSize::square(Dp(3.0)));

        assert_eq!(base.len(), 1);
        assert_eq!(kinds(&a), [OpKind::Width, OpKind::Height]);
        assert_eq!(kinds(&b), [OpKind::Width, OpKind::Size]);
    }

    #[test]
    fn unique_chain_appends_in_place() {
        let m = Modifier::new().width(Dp(1.0));
        let before = Rc::as_ptr(&m.ops);
        let m = m.height(Dp(2.0));
        assert_eq!(Rc::as_ptr(&m.ops), before);
    }

    #[test]
    fn then_all_concatenates() {
        let outer = Modifier::new().width(Dp(1.0));
        let inner = Modifier::new().height(Dp(2.0)).fill_max_size(1.0);
        let m = outer.then_all(&inner);
        assert_eq!(
            kinds(&m),
            [OpKind::Width, OpKind::Height, OpKind::FillMaxSize]
        );
        assert_eq!(inner.len(), 2);
    }

    #[test]
    fn then_all_with_empty_sides() {
        let inner = Modifier::new().height(Dp(2.0));
        let m = Modifier::new().then_all(&inner);
        assert!(Rc::ptr_eq(&m.ops, &inner.ops));
        let m = m.then_all(&Modifier::new());
        assert_eq!(m.len(), 1);
    }

    #[test]
    fn fold_directions() {
        let m = Modifier::new()
            .width(Dp(1.0))
            .height(Dp(2.0))
            .fill_max_width(0.5);
        let outward = m.fold_in(Vec::new(), |mut acc, op| {
            acc.push(op.kind());
            acc
        });
        let inward = m.fold_out(Vec::new(), |mut acc, op| {
            acc.push(op.kind());
            acc
        });
        assert_eq!(
            outward,
            [OpKind::Width, OpKind::Height, OpKind::FillMaxWidth]
        );
        assert_eq!(
            inward,
            [OpKind::FillMaxWidth, OpKind::Height, OpKind::Width]
        );
    }

    #[test]
    fn border_primitives_normalize() {
        let red = Color::from_rgb8(255, 0, 0);
        let m = Modifier::new()
            .border_width_color(Dp(1.0), red)
            .border_stroke(BorderStroke::solid(Dp(1.0), red), Shape::Rectangle);
        assert_eq!(m.ops()[0], m.ops()[1]);
        assert_eq!(
            m.ops()[0],
            ModifierOp::Border {
                width: Dp(1.0),
                brush: Brush::Solid(red),
                shape: Shape::Rectangle,
            }
        );
    }

    #[test]
    fn collect_from_ops() {
        let m: Modifier = [ModifierOp::Width(Dp(1.0)), ModifierOp::Height(Dp(2.0))]
            .into_iter()
            .collect();
        assert_eq!(kinds(&m), [OpKind::Width, OpKind::Height]);
    }
}
