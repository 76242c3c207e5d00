// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property groups.
//!
//! A group owns a fixed set of slots. Assigning a slot is a pure builder
//! step: it records the slot's latest value and, when the value resolves to
//! an operation, appends a [`Delta`]. Groups never observe each other.
//!
//! Re-assigning a slot replaces its recorded value but appends a second
//! delta; earlier deltas are never removed.

use alloc::vec::Vec;

use hashbrown::HashMap;
use ui_events::keyboard::KeyboardEvent;
use understory_modifier::{Dp, Modifier, ModifierOp, OnClick, OnKeyEvent};

use crate::raw::RawValue;
use crate::slot::{
    BackgroundValue, BorderValue, FocusableValue, GroupKind, PaddingValue, PointerInputValue,
    SizeValue, Slot, SlotValue, WrapContentValue, click_handler, key_handler,
};

/// The operation contributed by one slot assignment.
#[derive(Clone, Debug, PartialEq)]
pub struct Delta {
    /// Slot that was assigned.
    pub slot: Slot,
    /// Operation the assignment resolved to.
    pub op: ModifierOp,
}

/// The latest value recorded for a slot.
#[derive(Clone, Debug)]
pub enum AssignedValue {
    /// `padding`.
    Padding(PaddingValue),
    /// `background`.
    Background(BackgroundValue),
    /// `border`.
    Border(BorderValue),
    /// `width` or `height`.
    Distance(Dp),
    /// One of the `fillMax*` slots.
    Fraction(f32),
    /// `wrapContentSize`.
    WrapContent(WrapContentValue),
    /// `size`.
    Size(SizeValue),
    /// `focusable`.
    Focusable(FocusableValue),
    /// `onClick`.
    OnClick(OnClick),
    /// `onKeyEvent`.
    OnKeyEvent(OnKeyEvent),
    /// `onPointerEvent`.
    PointerInput(PointerInputValue),
    /// A loosely typed value a scalar or handler slot could not use.
    Raw(RawValue),
}

/// Slot values and deltas of one group.
#[derive(Clone, Debug, Default)]
pub struct GroupState {
    values: HashMap<Slot, AssignedValue>,
    deltas: Vec<Delta>,
}

impl GroupState {
    /// Creates an empty state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no assignment contributed an operation.
    #[must_use]
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Returns the latest value assigned to `slot`, if any.
    #[must_use]
    pub fn value(&self, slot: Slot) -> Option<&AssignedValue> {
        self.values.get(&slot)
    }

    /// Returns the deltas in assignment order.
    #[must_use]
    #[inline]
    pub fn deltas(&self) -> &[Delta] {
        &self.deltas
    }

    /// Returns the group's operations as a standalone chain.
    #[must_use]
    pub fn chain(&self) -> Modifier {
        self.fold_onto(Modifier::new())
    }

    /// Layers the group's operations, in order, on top of `base`.
    #[must_use]
    pub fn fold_onto(&self, base: Modifier) -> Modifier {
        self.deltas
            .iter()
            .fold(base, |chain, delta| chain.then(delta.op.clone()))
    }

    #[must_use]
    fn assign(mut self, slot: Slot, value: AssignedValue, op: Option<ModifierOp>) -> Self {
        match op {
            Some(op) => {
                log::trace!("{slot}: appending {}", op.kind());
                self.deltas.push(Delta { slot, op });
            }
            None => log::debug!("{slot}: ignoring unrecognized value {value:?}"),
        }
        self.values.insert(slot, value);
        self
    }

    #[must_use]
    fn assign_value<V: SlotValue>(self, value: V, wrap: fn(V) -> AssignedValue) -> Self {
        let op = value.resolve();
        self.assign(V::SLOT, wrap(value), op)
    }

    #[must_use]
    fn ignore(self, slot: Slot, raw: RawValue) -> Self {
        self.assign(slot, AssignedValue::Raw(raw), None)
    }
}

/// Common surface of the three property groups.
pub trait PropertyGroup: Default {
    /// Which group this is.
    const KIND: GroupKind;

    /// Returns the group's slot values and deltas.
    fn state(&self) -> &GroupState;

    /// Consumes the group, returning its state.
    fn into_state(self) -> GroupState;

    /// Assigns a loosely typed value to `slot`.
    ///
    /// Values matching none of the slot's shapes leave the chain unchanged.
    /// Slots that belong to another group are ignored entirely.
    #[must_use]
    fn set_raw(self, slot: Slot, raw: RawValue) -> Self;

    /// Returns the latest value assigned to `slot`, if any.
    fn value(&self, slot: Slot) -> Option<&AssignedValue> {
        self.state().value(slot)
    }

    /// Returns the deltas in assignment order.
    fn deltas(&self) -> &[Delta] {
        self.state().deltas()
    }

    /// Returns the group's operations as a standalone chain.
    fn chain(&self) -> Modifier {
        self.state().chain()
    }
}

fn foreign_slot(kind: GroupKind, slot: Slot) {
    log::debug!("{kind} group has no `{slot}` slot (it belongs to {}); ignoring", slot.group());
}

/// Slots for width, height and fill constraints.
///
/// ```rust
/// use understory_modifier::{Dp, ModifierOp};
/// use understory_modifier_builder::{PropertyGroup, SizeScope};
///
/// let size = SizeScope::new().width(Dp(100.0)).fill_max_height();
/// assert_eq!(size.chain().ops()[1], ModifierOp::FillMaxHeight(1.0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SizeScope {
    state: GroupState,
}

impl SizeScope {
    /// Creates an empty size group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn with(self, slot: Slot, value: AssignedValue, op: ModifierOp) -> Self {
        Self {
            state: self.state.assign(slot, value, Some(op)),
        }
    }

    /// Sets the preferred width.
    #[must_use]
    pub fn width(self, width: Dp) -> Self {
        self.with(
            Slot::Width,
            AssignedValue::Distance(width),
            ModifierOp::Width(width),
        )
    }

    /// Sets the preferred height.
    #[must_use]
    pub fn height(self, height: Dp) -> Self {
        self.with(
            Slot::Height,
            AssignedValue::Distance(height),
            ModifierOp::Height(height),
        )
    }

    /// Fills the whole maximum width.
    #[must_use]
    pub fn fill_max_width(self) -> Self {
        self.fill_max_width_fraction(1.0)
    }

    /// Fills `fraction` of the maximum width. The fraction is not clamped.
    #[must_use]
    pub fn fill_max_width_fraction(self, fraction: f32) -> Self {
        self.with(
            Slot::FillMaxWidth,
            AssignedValue::Fraction(fraction),
            ModifierOp::FillMaxWidth(fraction),
        )
    }

    /// Fills the whole maximum height.
    #[must_use]
    pub fn fill_max_height(self) -> Self {
        self.fill_max_height_fraction(1.0)
    }

    /// Fills `fraction` of the maximum height. The fraction is not clamped.
    #[must_use]
    pub fn fill_max_height_fraction(self, fraction: f32) -> Self {
        self.with(
            Slot::FillMaxHeight,
            AssignedValue::Fraction(fraction),
            ModifierOp::FillMaxHeight(fraction),
        )
    }

    /// Fills the whole maximum width and height.
    #[must_use]
    pub fn fill_max_size(self) -> Self {
        self.fill_max_size_fraction(1.0)
    }

    /// Fills `fraction` of the maximum width and height. The fraction is not clamped.
    #[must_use]
    pub fn fill_max_size_fraction(self, fraction: f32) -> Self {
        self.with(
            Slot::FillMaxSize,
            AssignedValue::Fraction(fraction),
            ModifierOp::FillMaxSize(fraction),
        )
    }

    /// Assigns the `wrapContentSize` slot.
    #[must_use]
    pub fn wrap_content_size(self, value: impl Into<WrapContentValue>) -> Self {
        Self {
            state: self
                .state
                .assign_value(value.into(), AssignedValue::WrapContent),
        }
    }

    /// Assigns the `size` slot.
    #[must_use]
    pub fn size(self, value: impl Into<SizeValue>) -> Self {
        Self {
            state: self.state.assign_value(value.into(), AssignedValue::Size),
        }
    }

    fn ignore(self, slot: Slot, raw: RawValue) -> Self {
        Self {
            state: self.state.ignore(slot, raw),
        }
    }
}

impl PropertyGroup for SizeScope {
    const KIND: GroupKind = GroupKind::Size;

    fn state(&self) -> &GroupState {
        &self.state
    }

    fn into_state(self) -> GroupState {
        self.state
    }

    fn set_raw(self, slot: Slot, raw: RawValue) -> Self {
        match slot {
            Slot::Width => match raw.distance() {
                Some(width) => self.width(width),
                None => self.ignore(slot, raw),
            },
            Slot::Height => match raw.distance() {
                Some(height) => self.height(height),
                None => self.ignore(slot, raw),
            },
            Slot::FillMaxWidth => match raw.fraction() {
                Some(f) => self.fill_max_width_fraction(f),
                None => self.ignore(slot, raw),
            },
            Slot::FillMaxHeight => match raw.fraction() {
                Some(f) => self.fill_max_height_fraction(f),
                None => self.ignore(slot, raw),
            },
            Slot::FillMaxSize => match raw.fraction() {
                Some(f) => self.fill_max_size_fraction(f),
                None => self.ignore(slot, raw),
            },
            Slot::WrapContentSize => self.wrap_content_size(WrapContentValue::from_raw(raw)),
            Slot::Size => self.size(SizeValue::from_raw(raw)),
            _ => {
                foreign_slot(Self::KIND, slot);
                self
            }
        }
    }
}

/// Slots for padding, background and border.
#[derive(Clone, Debug, Default)]
pub struct AppearanceScope {
    state: GroupState,
}

impl AppearanceScope {
    /// Creates an empty appearance group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the `padding` slot.
    #[must_use]
    pub fn padding(self, value: impl Into<PaddingValue>) -> Self {
        Self {
            state: self.state.assign_value(value.into(), AssignedValue::Padding),
        }
    }

    /// Assigns the `background` slot.
    #[must_use]
    pub fn background(self, value: impl Into<BackgroundValue>) -> Self {
        Self {
            state: self
                .state
                .assign_value(value.into(), AssignedValue::Background),
        }
    }

    /// Assigns the `border` slot.
    #[must_use]
    pub fn border(self, value: impl Into<BorderValue>) -> Self {
        Self {
            state: self.state.assign_value(value.into(), AssignedValue::Border),
        }
    }
}

impl PropertyGroup for AppearanceScope {
    const KIND: GroupKind = GroupKind::Appearance;

    fn state(&self) -> &GroupState {
        &self.state
    }

    fn into_state(self) -> GroupState {
        self.state
    }

    fn set_raw(self, slot: Slot, raw: RawValue) -> Self {
        match slot {
            Slot::Padding => self.padding(PaddingValue::from_raw(raw)),
            Slot::Background => self.background(BackgroundValue::from_raw(raw)),
            Slot::Border => self.border(BorderValue::from_raw(raw)),
            _ => {
                foreign_slot(Self::KIND, slot);
                self
            }
        }
    }
}

/// Slots for focus and input handlers.
///
/// Handlers can be assigned pre-built or from a bare closure:
///
/// ```rust
/// use understory_modifier::{OnClick, OpKind};
/// use understory_modifier_builder::{InteractionScope, PropertyGroup};
///
/// let a = InteractionScope::new().on_click(OnClick::new(|| {}));
/// let b = InteractionScope::new().on_click_fn(|| {});
/// assert_eq!(a.chain().ops()[0].kind(), OpKind::Clickable);
/// assert_eq!(b.chain().ops()[0].kind(), OpKind::Clickable);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InteractionScope {
    state: GroupState,
}

impl InteractionScope {
    /// Creates an empty interaction group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Assigns the `focusable` slot.
    #[must_use]
    pub fn focusable(self, value: impl Into<FocusableValue>) -> Self {
        Self {
            state: self
                .state
                .assign_value(value.into(), AssignedValue::Focusable),
        }
    }

    /// Assigns the `onClick` slot.
    #[must_use]
    pub fn on_click(self, handler: OnClick) -> Self {
        let op = ModifierOp::Clickable(handler.clone());
        Self {
            state: self
                .state
                .assign(Slot::OnClick, AssignedValue::OnClick(handler), Some(op)),
        }
    }

    /// Assigns the `onClick` slot from a closure.
    #[must_use]
    pub fn on_click_fn(self, f: impl Fn() + 'static) -> Self {
        self.on_click(OnClick::new(f))
    }

    /// Assigns the `onKeyEvent` slot.
    #[must_use]
    pub fn on_key_event(self, handler: OnKeyEvent) -> Self {
        let op = ModifierOp::KeyEvent(handler.clone());
        Self {
            state: self.state.assign(
                Slot::OnKeyEvent,
                AssignedValue::OnKeyEvent(handler),
                Some(op),
            ),
        }
    }

    /// Assigns the `onKeyEvent` slot from a closure.
    ///
    /// The closure returns `true` when it consumed the event.
    #[must_use]
    pub fn on_key_event_fn(self, f: impl Fn(&KeyboardEvent) -> bool + 'static) -> Self {
        self.on_key_event(OnKeyEvent::new(f))
    }

    /// Assigns the `onPointerEvent` slot.
    #[must_use]
    pub fn on_pointer_event(self, value: impl Into<PointerInputValue>) -> Self {
        Self {
            state: self
                .state
                .assign_value(value.into(), AssignedValue::PointerInput),
        }
    }

    fn ignore(self, slot: Slot, raw: RawValue) -> Self {
        Self {
            state: self.state.ignore(slot, raw),
        }
    }
}

impl PropertyGroup for InteractionScope {
    const KIND: GroupKind = GroupKind::Interaction;

    fn state(&self) -> &GroupState {
        &self.state
    }

    fn into_state(self) -> GroupState {
        self.state
    }

    fn set_raw(self, slot: Slot, raw: RawValue) -> Self {
        match slot {
            Slot::Focusable => self.focusable(FocusableValue::from_raw(raw)),
            Slot::OnClick => match click_handler(&raw) {
                Some(handler) => self.on_click(handler),
                None => self.ignore(slot, raw),
            },
            Slot::OnKeyEvent => match key_handler(&raw) {
                Some(handler) => self.on_key_event(handler),
                None => self.ignore(slot, raw),
            },
            Slot::OnPointerEvent => self.on_pointer_event(PointerInputValue::from_raw(raw)),
            _ => {
                foreign_slot(Self::KIND, slot);
                self
            }
        }
    }
}
