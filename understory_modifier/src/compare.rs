// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structural comparison of modifier chains.
//!
//! Two chains built independently are *equivalent* when they hold the same
//! operations in the same order. Some operations carry closures, which have
//! no meaningful value equality; an [`EqualityPolicy`] says which kinds are
//! compared by payload and which only need matching kinds.
//!
//! The comparison is total, deterministic and order-sensitive. It is not a
//! multiset comparison.

use core::fmt;

use hashbrown::HashMap;

use crate::chain::Modifier;
use crate::op::{ModifierOp, OpKind};

/// How two operations of the same kind are compared.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Equality {
    /// Payloads must be equal by value.
    #[default]
    Value,
    /// Matching kinds are enough; payloads are ignored.
    KindOnly,
}

/// Registry mapping [`OpKind`] to the [`Equality`] used when comparing chains.
///
/// Kinds with no entry use [`Equality::Value`].
///
/// ```rust
/// use understory_modifier::{Equality, EqualityPolicy, OpKind};
///
/// let policy = EqualityPolicy::default();
/// assert_eq!(policy.equality(OpKind::Clickable), Equality::KindOnly);
/// assert_eq!(policy.equality(OpKind::Width), Equality::Value);
///
/// let lenient = EqualityPolicy::strict().with(OpKind::Width, Equality::KindOnly);
/// assert_eq!(lenient.equality(OpKind::Width), Equality::KindOnly);
/// assert_eq!(lenient.equality(OpKind::Clickable), Equality::Value);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EqualityPolicy {
    overrides: HashMap<OpKind, Equality>,
}

impl EqualityPolicy {
    /// Kinds whose payload is a closure handle.
    ///
    /// Under [`Equality::KindOnly`] the whole payload is skipped, including
    /// plain fields next to the handle. Two `PointerInput` operations with
    /// different `event_type` or `pass` therefore compare equal under the
    /// default policy. Use [`EqualityPolicy::strict`] to tell them apart.
    pub const CALLBACK_KINDS: [OpKind; 3] =
        [OpKind::Clickable, OpKind::KeyEvent, OpKind::PointerInput];

    /// A policy that compares every kind by value.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            overrides: HashMap::new(),
        }
    }

    /// Sets the equality used for `kind`.
    #[must_use]
    pub fn with(mut self, kind: OpKind, equality: Equality) -> Self {
        self.set(kind, equality);
        self
    }

    /// Sets the equality used for `kind` in place.
    pub fn set(&mut self, kind: OpKind, equality: Equality) {
        match equality {
            Equality::Value => {
                self.overrides.remove(&kind);
            }
            Equality::KindOnly => {
                self.overrides.insert(kind, equality);
            }
        }
    }

    /// Returns the equality used for `kind`.
    #[must_use]
    pub fn equality(&self, kind: OpKind) -> Equality {
        self.overrides.get(&kind).copied().unwrap_or_default()
    }

    /// Compares two operations under this policy.
    #[must_use]
    pub fn ops_equal(&self, left: &ModifierOp, right: &ModifierOp) -> bool {
        let kind = left.kind();
        if kind != right.kind() {
            return false;
        }
        match self.equality(kind) {
            Equality::KindOnly => true,
            Equality::Value => left == right,
        }
    }
}

impl Default for EqualityPolicy {
    /// Callback-carrying kinds compare by kind only; everything else by value.
    fn default() -> Self {
        Self::CALLBACK_KINDS
            .iter()
            .fold(Self::strict(), |policy, &kind| {
                policy.with(kind, Equality::KindOnly)
            })
    }
}

/// The first difference found between two chains.
#[derive(Clone, Debug, PartialEq)]
pub enum ChainMismatch {
    /// The chains have different lengths.
    Length {
        /// Length of the left chain.
        left: usize,
        /// Length of the right chain.
        right: usize,
    },
    /// The operations at `index` have different kinds.
    Kind {
        /// Position in both chains.
        index: usize,
        /// Kind in the left chain.
        left: OpKind,
        /// Kind in the right chain.
        right: OpKind,
    },
    /// The operations at `index` share a kind but their payloads differ.
    Payload {
        /// Position in both chains.
        index: usize,
        /// Operation in the left chain.
        left: ModifierOp,
        /// Operation in the right chain.
        right: ModifierOp,
    },
}

impl ChainMismatch {
    /// Position of the mismatching operations, if the lengths matched.
    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Length { .. } => None,
            Self::Kind { index, .. } | Self::Payload { index, .. } => Some(*index),
        }
    }
}

impl fmt::Display for ChainMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Length { left, right } => {
                write!(f, "chain lengths differ: {left} vs {right}")
            }
            Self::Kind { index, left, right } => {
                write!(f, "operation kinds differ at {index}: {left} vs {right}")
            }
            Self::Payload { index, left, right } => {
                write!(f, "operations differ at {index}: {left:?} vs {right:?}")
            }
        }
    }
}

impl core::error::Error for ChainMismatch {}

/// Compares two chains position by position under `policy`.
///
/// Returns the first mismatch. Lengths are checked before any operation.
pub fn compare_chains(
    left: &Modifier,
    right: &Modifier,
    policy: &EqualityPolicy,
) -> Result<(), ChainMismatch> {
    if left.len() != right.len() {
        return Err(ChainMismatch::Length {
            left: left.len(),
            right: right.len(),
        });
    }
    for (index, (l, r)) in left.iter().zip(right).enumerate() {
        let (lk, rk) = (l.kind(), r.kind());
        if lk != rk {
            return Err(ChainMismatch::Kind {
                index,
                left: lk,
                right: rk,
            });
        }
        if !policy.ops_equal(l, r) {
            return Err(ChainMismatch::Payload {
                index,
                left: l.clone(),
                right: r.clone(),
            });
        }
    }
    Ok(())
}

/// Returns `true` if the chains are equivalent under the default policy.
///
/// Mismatches are logged at debug level.
///
/// ```rust
/// use understory_modifier::{Dp, Modifier, OnClick, chains_equivalent};
///
/// let a = Modifier::new().width(Dp(10.0)).clickable(OnClick::new(|| {}));
/// let b = Modifier::new().width(Dp(10.0)).clickable(OnClick::new(|| {}));
/// assert!(chains_equivalent(&a, &b));
/// assert!(!chains_equivalent(&a, &Modifier::new().width(Dp(10.0))));
/// ```
#[must_use]
pub fn chains_equivalent(left: &Modifier, right: &Modifier) -> bool {
    match compare_chains(left, right, &EqualityPolicy::default()) {
        Ok(()) => true,
        Err(mismatch) => {
            log::debug!("modifier chains not equivalent: {mismatch}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::callback::{OnClick, OnKeyEvent, PointerEventPass, PointerEventType, PointerHandler};
    use crate::units::{Dp, PaddingValues, Shape};
    use alloc::string::ToString;
    use peniko::Color;

    fn sample() -> Modifier {
        Modifier::new()
            .padding(PaddingValues::all(Dp(8.0)))
            .background_shaped(Color::from_rgb8(0, 0, 255), Shape::Circle)
            .width(Dp(100.0))
            .clickable(OnClick::new(|| {}))
    }

    #[test]
    fn reflexive() {
        let m = sample();
        assert_eq!(compare_chains(&m, &m, &EqualityPolicy::default()), Ok(()));
        assert_eq!(compare_chains(&m, &m, &EqualityPolicy::strict()), Ok(()));
        assert!(chains_equivalent(&Modifier::new(), &Modifier::new()));
    }

    #[test]
    fn length_mismatch_reported_first() {
        let long = sample().height(Dp(1.0));
        let short = sample();
        assert_eq!(
            compare_chains(&long, &short, &EqualityPolicy::default()),
            Err(ChainMismatch::Length { left: 5, right: 4 })
        );
    }

    #[test]
    fn prefix_chain_is_not_equivalent() {
        let nine = sample()
            .height(Dp(1.0))
            .fill_max_size(1.0)
            .focusable(true, None)
            .on_key_event(OnKeyEvent::new(|_| false))
            .fill_max_width(1.0);
        let eight: Modifier = nine.iter().take(8).cloned().collect();
        assert_eq!(nine.len(), 9);
        assert!(!chains_equivalent(&nine, &eight));
    }

    #[test]
    fn kind_mismatch_reports_position() {
        let a = Modifier::new().width(Dp(1.0)).height(Dp(2.0));
        let b = Modifier::new().width(Dp(1.0)).size((Dp(2.0), Dp(2.0)).into());
        let err = compare_chains(&a, &b, &EqualityPolicy::default()).unwrap_err();
        assert_eq!(
            err,
            ChainMismatch::Kind {
                index: 1,
                left: OpKind::Height,
                right: OpKind::Size,
            }
        );
        assert_eq!(err.index(), Some(1));
        assert_eq!(
            err.to_string(),
            "operation kinds differ at 1: height vs size"
        );
    }

    #[test]
    fn payload_mismatch_reports_both_ops() {
        let a = Modifier::new().width(Dp(1.0));
        let b = Modifier::new().width(Dp(2.0));
        assert_eq!(
            compare_chains(&a, &b, &EqualityPolicy::default()),
            Err(ChainMismatch::Payload {
                index: 0,
                left: ModifierOp::Width(Dp(1.0)),
                right: ModifierOp::Width(Dp(2.0)),
            })
        );
    }

    #[test]
    fn callbacks_compare_by_kind_only() {
        let a = sample().on_key_event(OnKeyEvent::new(|_| true));
        let b = sample().on_key_event(OnKeyEvent::new(|_| false));
        assert!(chains_equivalent(&a, &b));

        let strict = compare_chains(&a, &b, &EqualityPolicy::strict());
        assert_eq!(strict.unwrap_err().index(), Some(3));
    }

    #[test]
    fn pointer_input_ignores_payload_under_default_policy() {
        let handler = || PointerHandler::new(|_| {});
        let a = Modifier::new().pointer_input(
            PointerEventType::Press,
            PointerEventPass::Main,
            handler(),
        );
        let b = Modifier::new().pointer_input(
            PointerEventType::Release,
            PointerEventPass::Final,
            handler(),
        );
        assert!(chains_equivalent(&a, &b));
        assert_eq!(
            compare_chains(&a, &b, &EqualityPolicy::strict())
                .unwrap_err()
                .index(),
            Some(0)
        );
    }

    #[test]
    fn order_sensitive() {
        let a = Modifier::new().width(Dp(1.0)).height(Dp(1.0));
        let b = Modifier::new().height(Dp(1.0)).width(Dp(1.0));
        assert!(!chains_equivalent(&a, &b));
    }

    #[test]
    fn policy_set_back_to_value_removes_override() {
        let mut policy = EqualityPolicy::default();
        policy.set(OpKind::Clickable, Equality::Value);
        assert_eq!(policy.equality(OpKind::Clickable), Equality::Value);
        assert_eq!(policy.equality(OpKind::KeyEvent), Equality::KindOnly);
        assert_ne!(policy, EqualityPolicy::default());
    }

    #[test]
    fn kind_only_policy_can_cover_plain_kinds() {
        let policy = EqualityPolicy::strict().with(OpKind::Width, Equality::KindOnly);
        let a = Modifier::new().width(Dp(1.0));
        let b = Modifier::new().width(Dp(99.0));
        assert_eq!(compare_chains(&a, &b, &policy), Ok(()));
    }
}
