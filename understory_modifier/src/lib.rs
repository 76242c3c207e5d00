// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Modifier: ordered operation chains for styleable UI surfaces.
//!
//! A [`Modifier`] is an ordered, persistent chain of [`ModifierOp`]s that a
//! host toolkit applies to an element: padding, backgrounds, borders, sizing,
//! focus, and input handlers. This crate defines the operations, the chain
//! that layers them, and a structural comparator for chains.
//!
//! It does not lay out, paint, or dispatch events. Those belong to the host
//! toolkit that consumes the finished chain.
//!
//! ## Building chains
//!
//! Every primitive returns a new chain with one more operation appended.
//! Earlier clones are unaffected.
//!
//! ```rust
//! use peniko::Color;
//! use understory_modifier::{Dp, Modifier, OpKind, Shape};
//!
//! let modifier = Modifier::new()
//!     .padding_all(Dp(8.0))
//!     .background_shaped(Color::from_rgb8(0, 0, 255), Shape::Circle)
//!     .width(Dp(100.0));
//!
//! let kinds: Vec<_> = modifier.iter().map(|op| op.kind()).collect();
//! assert_eq!(kinds, [OpKind::PaddingAll, OpKind::BackgroundShaped, OpKind::Width]);
//! ```
//!
//! ## Comparing chains
//!
//! Operations that wrap closures ([`OnClick`], [`OnKeyEvent`],
//! [`PointerHandler`]) cannot be compared by value. [`compare_chains`] takes an
//! [`EqualityPolicy`] saying which [`OpKind`]s are compared by payload and
//! which only by kind, and reports the first [`ChainMismatch`].
//!
//! ```rust
//! use understory_modifier::{
//!     ChainMismatch, Dp, EqualityPolicy, Modifier, OnClick, compare_chains,
//! };
//!
//! let a = Modifier::new().width(Dp(1.0)).clickable(OnClick::new(|| {}));
//! let b = Modifier::new().width(Dp(1.0)).clickable(OnClick::new(|| {}));
//! assert_eq!(compare_chains(&a, &b, &EqualityPolicy::default()), Ok(()));
//!
//! let c = Modifier::new().width(Dp(1.0));
//! assert_eq!(
//!     compare_chains(&a, &c, &EqualityPolicy::default()),
//!     Err(ChainMismatch::Length { left: 2, right: 1 })
//! );
//! ```
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. Enable either the `std` (default)
//! or `libm` feature so that `kurbo` and `peniko` can do floating-point math.

#![no_std]

extern crate alloc;

mod callback;
mod chain;
mod compare;
mod op;
mod units;

pub use callback::{
    Interaction, InteractionSource, OnClick, OnKeyEvent, PointerEventPass, PointerEventType,
    PointerHandler,
};
pub use chain::Modifier;
pub use compare::{ChainMismatch, Equality, EqualityPolicy, chains_equivalent, compare_chains};
pub use op::{ModifierOp, OpKind};
pub use units::{Alignment, BorderStroke, Dp, DpSize, PaddingValues, Shape};
