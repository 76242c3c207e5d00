// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loosely typed slot values.
//!
//! A [`RawValue`] holds any `'static` value behind a shared handle. Slots
//! never look at it directly; they ask it for the shapes they understand:
//! a distance, a pair or quadruple of distances, a fill fraction, a distance
//! followed by something else, or one exact type.
//!
//! Distances may be given as [`Dp`], `f64`, `f32` or `i32`. Tuples must use
//! one scalar type throughout; `(1.0_f64, 2_i32)` is not a pair of distances.

use alloc::rc::Rc;
use core::any::{Any, TypeId};
use core::fmt;

use understory_modifier::Dp;

/// A value handed to a slot without a static type.
///
/// ```rust
/// use understory_modifier::Dp;
/// use understory_modifier_builder::RawValue;
///
/// let padding = RawValue::new((8, 4));
/// assert_eq!(padding.distance_pair(), Some((Dp(8.0), Dp(4.0))));
/// assert_eq!(padding.distance(), None);
/// assert!(padding.type_name().contains("i32"));
/// ```
#[derive(Clone)]
pub struct RawValue {
    value: Rc<dyn Any>,
    type_name: &'static str,
}

/// Scalars accepted wherever a slot wants a distance.
trait Distance: Copy + 'static {
    fn to_dp(self) -> Dp;
}

impl Distance for Dp {
    fn to_dp(self) -> Dp {
        self
    }
}

impl Distance for f64 {
    fn to_dp(self) -> Dp {
        Dp(self)
    }
}

impl Distance for f32 {
    fn to_dp(self) -> Dp {
        Dp(f64::from(self))
    }
}

impl Distance for i32 {
    fn to_dp(self) -> Dp {
        Dp(f64::from(self))
    }
}

impl RawValue {
    /// Wraps a value.
    ///
    /// Wrapping a `RawValue` yields that same value, not a nested one.
    #[must_use]
    pub fn new<T: 'static>(value: T) -> Self {
        let value: Rc<dyn Any> = Rc::new(value);
        match value.downcast::<Self>() {
            Ok(raw) => Rc::unwrap_or_clone(raw),
            Err(value) => Self {
                value,
                type_name: core::any::type_name::<T>(),
            },
        }
    }

    /// Returns the [`TypeId`] of the held value.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Returns the Rust type name of the held value, for diagnostics.
    #[must_use]
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns `true` if the held value is exactly a `T`.
    #[must_use]
    #[inline]
    pub fn is<T: 'static>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Returns a reference to the held value if it is exactly a `T`.
    #[must_use]
    #[inline]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Returns a clone of the held value if it is exactly a `T`.
    #[must_use]
    pub fn cloned<T: Clone + 'static>(&self) -> Option<T> {
        self.downcast_ref::<T>().cloned()
    }

    fn scalar<T: Distance>(&self) -> Option<Dp> {
        self.downcast_ref::<T>().map(|d| d.to_dp())
    }

    fn pair<T: Distance>(&self) -> Option<(Dp, Dp)> {
        self.downcast_ref::<(T, T)>()
            .map(|&(a, b)| (a.to_dp(), b.to_dp()))
    }

    fn quad<T: Distance>(&self) -> Option<[Dp; 4]> {
        self.downcast_ref::<(T, T, T, T)>()
            .map(|&(a, b, c, d)| [a.to_dp(), b.to_dp(), c.to_dp(), d.to_dp()])
    }

    fn leading<T: Distance, R: Clone + 'static>(&self) -> Option<(Dp, R)> {
        self.downcast_ref::<(T, R)>()
            .map(|(d, rest)| (d.to_dp(), rest.clone()))
    }

    fn leading2<T: Distance, A: Clone + 'static, B: Clone + 'static>(
        &self,
    ) -> Option<(Dp, A, B)> {
        self.downcast_ref::<(T, A, B)>()
            .map(|(d, a, b)| (d.to_dp(), a.clone(), b.clone()))
    }

    /// Reads a single distance.
    #[must_use]
    pub fn distance(&self) -> Option<Dp> {
        self.scalar::<Dp>()
            .or_else(|| self.scalar::<f64>())
            .or_else(|| self.scalar::<f32>())
            .or_else(|| self.scalar::<i32>())
    }

    /// Reads a two-element tuple of distances.
    #[must_use]
    pub fn distance_pair(&self) -> Option<(Dp, Dp)> {
        self.pair::<Dp>()
            .or_else(|| self.pair::<f64>())
            .or_else(|| self.pair::<f32>())
            .or_else(|| self.pair::<i32>())
    }

    /// Reads a four-element tuple of distances.
    #[must_use]
    pub fn distance_quad(&self) -> Option<[Dp; 4]> {
        self.quad::<Dp>()
            .or_else(|| self.quad::<f64>())
            .or_else(|| self.quad::<f32>())
            .or_else(|| self.quad::<i32>())
    }

    /// Reads a `(distance, R)` pair.
    ///
    /// Only the first element is a distance; `R` must match exactly.
    #[must_use]
    pub fn distance_and<R: Clone + 'static>(&self) -> Option<(Dp, R)> {
        self.leading::<Dp, R>()
            .or_else(|| self.leading::<f64, R>())
            .or_else(|| self.leading::<f32, R>())
            .or_else(|| self.leading::<i32, R>())
    }

    /// Reads a `(distance, A, B)` triple.
    #[must_use]
    pub fn distance_and2<A: Clone + 'static, B: Clone + 'static>(&self) -> Option<(Dp, A, B)> {
        self.leading2::<Dp, A, B>()
            .or_else(|| self.leading2::<f64, A, B>())
            .or_else(|| self.leading2::<f32, A, B>())
            .or_else(|| self.leading2::<i32, A, B>())
    }

    /// Reads a fill fraction from `f32`, `f64` or `i32`.
    ///
    /// `()` stands for the no-argument form and means `1.0`.
    #[must_use]
    #[expect(
        clippy::cast_possible_truncation,
        reason = "fractions are stored as f32 and callers may hand in f64 literals"
    )]
    pub fn fraction(&self) -> Option<f32> {
        if self.is::<()>() {
            return Some(1.0);
        }
        self.cloned::<f32>()
            .or_else(|| self.cloned::<f64>().map(|f| f as f32))
            .or_else(|| self.cloned::<i32>().map(|i| f64::from(i) as f32))
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue")
            .field("type_name", &self.type_name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;
    use alloc::string::String;
    use peniko::{Brush, Color};
    use understory_modifier::Shape;

    fn red() -> Color {
        Color::from_rgb8(255, 0, 0)
    }

    #[test]
    fn distance_accepts_listed_scalars_only() {
        assert_eq!(RawValue::new(Dp(1.5)).distance(), Some(Dp(1.5)));
        assert_eq!(RawValue::new(2.0_f64).distance(), Some(Dp(2.0)));
        assert_eq!(RawValue::new(2.5_f32).distance(), Some(Dp(2.5)));
        assert_eq!(RawValue::new(3_i32).distance(), Some(Dp(3.0)));
        assert_eq!(RawValue::new(3_u32).distance(), None);
        assert_eq!(RawValue::new(String::from("3dp")).distance(), None);
    }

    #[test]
    fn tuples_must_be_homogeneous() {
        assert_eq!(
            RawValue::new((4_i32, 2_i32)).distance_pair(),
            Some((Dp(4.0), Dp(2.0)))
        );
        assert_eq!(RawValue::new((4.0_f64, 2_i32)).distance_pair(), None);
        assert_eq!(
            RawValue::new((15, 16, 16, 16)).distance_quad(),
            Some([Dp(15.0), Dp(16.0), Dp(16.0), Dp(16.0)])
        );
        assert_eq!(RawValue::new((1, 2, 3)).distance_quad(), None);
        assert_eq!(RawValue::new((1, 2, 3, 4)).distance_pair(), None);
    }

    #[test]
    fn leading_distance_splits_border_pairs() {
        let by_width = RawValue::new((2, red()));
        assert_eq!(by_width.distance_and::<Color>(), Some((Dp(2.0), red())));
        assert_eq!(by_width.distance_and::<Brush>(), None);

        let not_a_width = RawValue::new((true, red()));
        assert_eq!(not_a_width.distance_and::<Color>(), None);

        let triple = RawValue::new((Dp(1.0), <Brush>::Solid(red()), Shape::Circle));
        assert_eq!(
            triple.distance_and2::<Brush, Shape>(),
            Some((Dp(1.0), Brush::Solid(red()), Shape::Circle))
        );
        assert_eq!(triple.distance_and2::<Color, Shape>(), None);
    }

    #[test]
    fn fraction_shapes() {
        assert_eq!(RawValue::new(()).fraction(), Some(1.0));
        assert_eq!(RawValue::new(0.5_f32).fraction(), Some(0.5));
        assert_eq!(RawValue::new(0.25_f64).fraction(), Some(0.25));
        assert_eq!(RawValue::new(1_i32).fraction(), Some(1.0));
        assert_eq!(RawValue::new(Dp(0.5)).fraction(), None);
    }

    #[test]
    fn wrapping_a_raw_value_does_not_nest() {
        let inner = RawValue::new(Dp(4.0));
        let outer = RawValue::new(inner.clone());
        assert!(outer.is::<Dp>());
        assert_eq!(outer.type_id(), TypeId::of::<Dp>());
        assert_eq!(outer.type_name(), inner.type_name());
        assert_eq!(outer.distance(), Some(Dp(4.0)));
    }

    #[test]
    fn exact_type_lookup() {
        let value = RawValue::new(Shape::Circle);
        assert_eq!(value.cloned::<Shape>(), Some(Shape::Circle));
        assert_eq!(value.downcast_ref::<Dp>(), None);
        assert!(format!("{value:?}").contains("Shape"));
    }
}
