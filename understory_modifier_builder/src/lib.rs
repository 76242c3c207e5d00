// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Modifier Builder: grouped, type-directed property slots that
//! compile into a [`Modifier`](understory_modifier::Modifier) chain.
//!
//! Properties are split into three groups:
//!
//! - [`SizeScope`]: `width`, `height`, `fillMaxWidth`, `fillMaxHeight`,
//!   `fillMaxSize`, `wrapContentSize`, `size`.
//! - [`AppearanceScope`]: `padding`, `background`, `border`.
//! - [`InteractionScope`]: `focusable`, `onClick`, `onKeyEvent`, `onPointerEvent`.
//!
//! Several slots accept more than one shape of value. Each such slot has a
//! value enum ([`PaddingValue`], [`BorderValue`], ...) with one variant per
//! shape, and `From` conversions so the typed API takes plain tuples:
//!
//! ```rust
//! use peniko::Color;
//! use understory_modifier::{Dp, ModifierOp, Shape};
//! use understory_modifier_builder::{AppearanceScope, PropertyGroup};
//!
//! let red = Color::from_rgb8(255, 0, 0);
//! let appearance = AppearanceScope::new()
//!     .padding((Dp(8.0), Dp(4.0)))
//!     .border((Dp(2.0), red, Shape::Circle));
//!
//! assert!(matches!(
//!     appearance.chain().ops()[1],
//!     ModifierOp::Border { shape: Shape::Circle, .. }
//! ));
//! ```
//!
//! ## Loosely typed values
//!
//! [`RawValue`] wraps any `Clone + 'static` value. Its runtime type decides
//! which shape a slot sees. Values that match no shape are recorded but add
//! nothing to the chain:
//!
//! ```rust
//! use understory_modifier::Dp;
//! use understory_modifier_builder::{ModifierBuilder, RawValue, Slot};
//!
//! let modifier = ModifierBuilder::new()
//!     .set_raw(Slot::Padding, RawValue::new((Dp(1.0), Dp(2.0))))
//!     .set_raw(Slot::Border, RawValue::new(("thick", 3)))
//!     .build();
//! assert_eq!(modifier.len(), 1);
//! ```
//!
//! ## Composing groups
//!
//! [`ModifierBuilder`] concatenates the group chains in the order the groups
//! were first opened. [`accumulate`] takes three finished groups and uses the
//! canonical order size, appearance, interaction. Groups are never
//! interleaved, and assigning a slot twice contributes two operations.
//!
//! ## `no_std` Support
//!
//! This crate is `no_std` and uses `alloc`. The `std` (default) and `libm`
//! features are forwarded to `understory_modifier`.

#![no_std]

extern crate alloc;

mod builder;
mod group;
mod raw;
mod slot;

pub use builder::{GroupOrder, ModifierBuilder, accumulate};
pub use group::{
    AppearanceScope, AssignedValue, Delta, GroupState, InteractionScope, PropertyGroup, SizeScope,
};
pub use raw::RawValue;
pub use slot::{
    BackgroundValue, BorderValue, FocusableValue, GroupKind, PaddingValue, PointerInputValue,
    SizeValue, Slot, SlotValue, WrapContentValue,
};
