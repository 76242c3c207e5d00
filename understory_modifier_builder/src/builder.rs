// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Composition of group chains into one modifier.

use alloc::vec::Vec;
use core::fmt;

use understory_modifier::Modifier;

use crate::group::{AppearanceScope, GroupState, InteractionScope, PropertyGroup, SizeScope};
use crate::raw::RawValue;
use crate::slot::{GroupKind, Slot};

/// The order in which group chains are concatenated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroupOrder([GroupKind; 3]);

impl GroupOrder {
    /// Size, then appearance, then interaction.
    pub const CANONICAL: Self = Self([
        GroupKind::Size,
        GroupKind::Appearance,
        GroupKind::Interaction,
    ]);

    /// Creates an order from a permutation of the three groups.
    ///
    /// Returns `None` if a group is repeated.
    ///
    /// ```rust
    /// use understory_modifier_builder::{GroupKind, GroupOrder};
    ///
    /// let order = GroupOrder::new([
    ///     GroupKind::Interaction,
    ///     GroupKind::Size,
    ///     GroupKind::Appearance,
    /// ]);
    /// assert!(order.is_some());
    /// assert!(GroupOrder::new([GroupKind::Size; 3]).is_none());
    /// ```
    #[must_use]
    pub fn new(kinds: [GroupKind; 3]) -> Option<Self> {
        let [a, b, c] = kinds;
        (a != b && b != c && a != c).then_some(Self(kinds))
    }

    /// Returns the groups in concatenation order.
    #[must_use]
    #[inline]
    pub const fn kinds(self) -> [GroupKind; 3] {
        self.0
    }

    /// Puts `opened` first, in the given order, followed by the remaining
    /// groups in canonical order.
    fn opened_first(opened: &[GroupKind]) -> Self {
        let mut kinds = Self::CANONICAL.0;
        let rest = Self::CANONICAL
            .0
            .into_iter()
            .filter(|kind| !opened.contains(kind));
        for (slot, kind) in kinds.iter_mut().zip(opened.iter().copied().chain(rest)) {
            *slot = kind;
        }
        Self(kinds)
    }
}

impl Default for GroupOrder {
    fn default() -> Self {
        Self::CANONICAL
    }
}

impl fmt::Display for GroupOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.0;
        write!(f, "{a} -> {b} -> {c}")
    }
}

/// Grouped builder for a [`Modifier`].
///
/// Each group is configured in a closure. The first time a group is opened
/// fixes its position in the final chain; reopening it later continues the
/// same group. Groups are concatenated, never interleaved.
///
/// ```rust
/// use peniko::Color;
/// use understory_modifier::{Dp, OpKind};
/// use understory_modifier_builder::ModifierBuilder;
///
/// let modifier = ModifierBuilder::new()
///     .appearance(|a| a.background(Color::from_rgb8(0, 0, 255)))
///     .size(|s| s.width(Dp(100.0)))
///     .appearance(|a| a.padding(Dp(4.0)))
///     .build();
///
/// let kinds: Vec<_> = modifier.iter().map(|op| op.kind()).collect();
/// assert_eq!(kinds, [OpKind::Background, OpKind::PaddingAll, OpKind::Width]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct ModifierBuilder {
    size: SizeScope,
    appearance: AppearanceScope,
    interaction: InteractionScope,
    opened: Vec<GroupKind>,
    order: Option<GroupOrder>,
}

impl ModifierBuilder {
    /// Creates a builder with every group empty.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fixes the group order regardless of the order groups are opened in.
    #[must_use]
    pub fn with_order(mut self, order: GroupOrder) -> Self {
        self.order = Some(order);
        self
    }

    fn open(&mut self, kind: GroupKind) {
        if !self.opened.contains(&kind) {
            self.opened.push(kind);
        }
    }

    /// Configures the size group.
    #[must_use]
    pub fn size(mut self, f: impl FnOnce(SizeScope) -> SizeScope) -> Self {
        self.open(GroupKind::Size);
        self.size = f(core::mem::take(&mut self.size));
        self
    }

    /// Configures the appearance group.
    #[must_use]
    pub fn appearance(mut self, f: impl FnOnce(AppearanceScope) -> AppearanceScope) -> Self {
        self.open(GroupKind::Appearance);
        self.appearance = f(core::mem::take(&mut self.appearance));
        self
    }

    /// Configures the interaction group.
    #[must_use]
    pub fn interaction(mut self, f: impl FnOnce(InteractionScope) -> InteractionScope) -> Self {
        self.open(GroupKind::Interaction);
        self.interaction = f(core::mem::take(&mut self.interaction));
        self
    }

    /// Assigns a loosely typed value, routing it to the group that owns `slot`.
    ///
    /// The group counts as opened only if the value contributed an
    /// operation, so an ignored value never moves a group in the chain.
    #[must_use]
    pub fn set_raw(mut self, slot: Slot, raw: RawValue) -> Self {
        let kind = slot.group();
        let before = self.group(kind).deltas().len();
        match kind {
            GroupKind::Size => self.size = core::mem::take(&mut self.size).set_raw(slot, raw),
            GroupKind::Appearance => {
                self.appearance = core::mem::take(&mut self.appearance).set_raw(slot, raw);
            }
            GroupKind::Interaction => {
                self.interaction = core::mem::take(&mut self.interaction).set_raw(slot, raw);
            }
        }
        if self.group(kind).deltas().len() > before {
            self.open(kind);
        }
        self
    }

    /// Returns the order [`build`](Self::build) will concatenate groups in.
    #[must_use]
    pub fn order(&self) -> GroupOrder {
        self.order
            .unwrap_or_else(|| GroupOrder::opened_first(&self.opened))
    }

    /// Returns the state of one group.
    #[must_use]
    pub fn group(&self, kind: GroupKind) -> &GroupState {
        match kind {
            GroupKind::Size => self.size.state(),
            GroupKind::Appearance => self.appearance.state(),
            GroupKind::Interaction => self.interaction.state(),
        }
    }

    /// Concatenates the group chains into a new modifier.
    #[must_use]
    pub fn build(self) -> Modifier {
        self.build_on(Modifier::new())
    }

    /// Concatenates the group chains onto `base`.
    #[must_use]
    pub fn build_on(self, base: Modifier) -> Modifier {
        let order = self.order();
        log::trace!("building modifier groups in order {order}");
        order
            .kinds()
            .into_iter()
            .fold(base, |chain, kind| self.group(kind).fold_onto(chain))
    }
}

/// Concatenates three configured groups in canonical order:
/// size, then appearance, then interaction.
///
/// ```rust
/// use understory_modifier::{Dp, OpKind};
/// use understory_modifier_builder::{
///     AppearanceScope, InteractionScope, SizeScope, accumulate,
/// };
///
/// let modifier = accumulate(
///     SizeScope::new().width(Dp(10.0)),
///     AppearanceScope::new().padding(Dp(2.0)),
///     InteractionScope::new().focusable(true),
/// );
/// let kinds: Vec<_> = modifier.iter().map(|op| op.kind()).collect();
/// assert_eq!(kinds, [OpKind::Width, OpKind::PaddingAll, OpKind::Focusable]);
/// ```
#[must_use]
pub fn accumulate(
    size: SizeScope,
    appearance: AppearanceScope,
    interaction: InteractionScope,
) -> Modifier {
    let chain = size.into_state().chain();
    let chain = appearance.into_state().fold_onto(chain);
    interaction.into_state().fold_onto(chain)
}
