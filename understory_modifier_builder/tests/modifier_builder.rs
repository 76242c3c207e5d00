// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_modifier_builder` crate.
//!
//! These build whole modifiers through the grouped builder and compare them
//! against chains built directly with `understory_modifier` primitives.

use std::cell::Cell;
use std::rc::Rc;

use peniko::Color;
use understory_modifier::{
    Alignment, BorderStroke, ChainMismatch, Dp, DpSize, EqualityPolicy, InteractionSource,
    Modifier, OnClick, OnKeyEvent, OpKind, PointerEventPass, PointerEventType, PointerHandler,
    Shape, chains_equivalent, compare_chains,
};
use understory_modifier_builder::{
    AppearanceScope, InteractionScope, ModifierBuilder, PropertyGroup, RawValue, SizeScope, Slot,
    accumulate,
};

fn blue() -> Color {
    Color::from_rgb8(0, 0, 255)
}

fn red() -> Color {
    Color::from_rgb8(255, 0, 0)
}

fn kinds(modifier: &Modifier) -> Vec<OpKind> {
    modifier.iter().map(|op| op.kind()).collect()
}

fn built_directly() -> Modifier {
    Modifier::new()
        .padding_each(Dp(15.0), Dp(16.0), Dp(16.0), Dp(16.0))
        .background_shaped(blue(), Shape::Circle)
        .border(Dp(2.0), red(), Shape::Circle)
        .width(Dp(100.0))
        .height(Dp(50.0))
        .fill_max_size(1.0)
        .focusable(true, None)
        .clickable(OnClick::new(|| {}))
        .on_key_event(OnKeyEvent::new(|_| true))
}

#[test]
fn end_to_end_matches_direct_chain() {
    let modifier = ModifierBuilder::new()
        .appearance(|a| {
            a.padding((Dp(15.0), Dp(16.0), Dp(16.0), Dp(16.0)))
                .background((blue(), Shape::Circle))
                .border((Dp(2.0), red(), Shape::Circle))
        })
        .size(|s| s.width(Dp(100.0)).height(Dp(50.0)).fill_max_size())
        .interaction(|i| {
            i.focusable(true)
                .on_click_fn(|| {})
                .on_key_event_fn(|_| false)
        })
        .build();

    assert_eq!(modifier.len(), 9);
    assert_eq!(
        kinds(&modifier),
        [
            OpKind::PaddingEach,
            OpKind::BackgroundShaped,
            OpKind::Border,
            OpKind::Width,
            OpKind::Height,
            OpKind::FillMaxSize,
            OpKind::Focusable,
            OpKind::Clickable,
            OpKind::KeyEvent,
        ]
    );
    assert!(chains_equivalent(&modifier, &built_directly()));

    // Different closures only line up because the callback kinds are kind-only.
    let strict = compare_chains(&modifier, &built_directly(), &EqualityPolicy::strict());
    assert_eq!(strict.map_err(|m| m.index()), Err(Some(7)));
}

#[test]
fn end_to_end_through_raw_values() {
    let modifier = ModifierBuilder::new()
        .set_raw(Slot::Padding, RawValue::new((15, 16, 16, 16)))
        .set_raw(Slot::Background, RawValue::new((blue(), Shape::Circle)))
        .set_raw(Slot::Border, RawValue::new((2.0_f64, red(), Shape::Circle)))
        .set_raw(Slot::Width, RawValue::new(100))
        .set_raw(Slot::Height, RawValue::new(50.0_f32))
        .set_raw(Slot::FillMaxSize, RawValue::new(1.0_f64))
        .set_raw(Slot::Focusable, RawValue::new(true))
        .set_raw(Slot::OnClick, RawValue::new(OnClick::new(|| {})))
        .set_raw(Slot::OnKeyEvent, RawValue::new(OnKeyEvent::new(|_| false)))
        .build();
    assert!(chains_equivalent(&modifier, &built_directly()));
}

#[test]
fn negative_border_leaves_chain_unchanged() {
    let base = ModifierBuilder::new()
        .appearance(|a| a.padding(Dp(1.0)))
        .build();
    let modifier = ModifierBuilder::new()
        .appearance(|a| {
            a.padding(Dp(1.0))
                .set_raw(Slot::Border, RawValue::new((true, red())))
                .set_raw(Slot::Border, RawValue::new((String::from("2dp"), red())))
                .set_raw(Slot::Border, RawValue::new((Shape::Circle, Shape::Circle)))
        })
        .build();
    assert_eq!(modifier.len(), base.len());
    assert!(!kinds(&modifier).contains(&OpKind::Border));
}

#[test]
fn border_pairs_split_by_first_element() {
    let by_width = AppearanceScope::new().set_raw(Slot::Border, RawValue::new((Dp(2.0), red())));
    let by_stroke = AppearanceScope::new().set_raw(
        Slot::Border,
        RawValue::new((BorderStroke::solid(Dp(2.0), red()), Shape::Circle)),
    );
    assert!(chains_equivalent(
        &by_width.chain(),
        &Modifier::new().border_width_color(Dp(2.0), red())
    ));
    assert!(chains_equivalent(
        &by_stroke.chain(),
        &Modifier::new().border(Dp(2.0), red(), Shape::Circle)
    ));
}

#[test]
fn unsupported_shapes_are_ignored_in_every_slot() {
    let junk = || RawValue::new(String::from("junk"));
    let modifier = ModifierBuilder::new()
        .size(|s| s.width(Dp(1.0)))
        .set_raw(Slot::Padding, junk())
        .set_raw(Slot::Background, junk())
        .set_raw(Slot::Border, junk())
        .set_raw(Slot::Width, junk())
        .set_raw(Slot::Height, junk())
        .set_raw(Slot::FillMaxWidth, junk())
        .set_raw(Slot::FillMaxHeight, junk())
        .set_raw(Slot::FillMaxSize, junk())
        .set_raw(Slot::WrapContentSize, junk())
        .set_raw(Slot::Size, junk())
        .set_raw(Slot::Focusable, junk())
        .set_raw(Slot::OnClick, junk())
        .set_raw(Slot::OnKeyEvent, junk())
        .set_raw(Slot::OnPointerEvent, junk())
        .build();
    assert_eq!(kinds(&modifier), [OpKind::Width]);
}

#[test]
fn groups_are_concatenated_in_open_order() {
    let source = InteractionSource::new();
    let modifier = ModifierBuilder::new()
        .size(|s| {
            s.width(Dp(1.0))
                .height(Dp(2.0))
                .fill_max_width()
                .fill_max_height_fraction(0.5)
                .wrap_content_size((Alignment::BottomEnd, true))
                .size(DpSize::square(Dp(4.0)))
        })
        .appearance(|a| a.background(red()).padding(Dp(3.0)))
        .interaction(|i| {
            i.focusable((true, source.clone())).on_pointer_event((
                PointerEventType::Press,
                PointerEventPass::Initial,
                PointerHandler::new(|_| {}),
            ))
        })
        .size(|s| s.fill_max_size_fraction(0.25))
        .build();

    assert_eq!(
        kinds(&modifier),
        [
            OpKind::Width,
            OpKind::Height,
            OpKind::FillMaxWidth,
            OpKind::FillMaxHeight,
            OpKind::WrapContentSize,
            OpKind::Size,
            OpKind::FillMaxSize,
            OpKind::Background,
            OpKind::PaddingAll,
            OpKind::Focusable,
            OpKind::PointerInput,
        ]
    );
}

#[test]
fn accumulate_puts_size_first() {
    let modifier = accumulate(
        SizeScope::new().width(Dp(100.0)),
        AppearanceScope::new().padding(Dp(8.0)),
        InteractionScope::new().on_click_fn(|| {}),
    );
    assert_eq!(
        kinds(&modifier),
        [OpKind::Width, OpKind::PaddingAll, OpKind::Clickable]
    );
}

#[test]
fn reassigned_slot_contributes_twice() {
    let modifier = ModifierBuilder::new()
        .appearance(|a| a.background(red()))
        .appearance(|a| a.background(blue()))
        .build();
    assert!(chains_equivalent(
        &modifier,
        &Modifier::new().background(red()).background(blue())
    ));
}

#[test]
fn nine_versus_eight_is_a_length_mismatch() {
    let nine = built_directly();
    let eight: Modifier = nine.iter().take(8).cloned().collect();
    assert_eq!(
        compare_chains(&nine, &eight, &EqualityPolicy::default()),
        Err(ChainMismatch::Length { left: 9, right: 8 })
    );
}

#[test]
fn built_handlers_are_the_ones_assigned() {
    let clicks = Rc::new(Cell::new(0));
    let handler = {
        let clicks = clicks.clone();
        OnClick::new(move || clicks.set(clicks.get() + 1))
    };
    let modifier = ModifierBuilder::new()
        .interaction(|i| i.on_click(handler.clone()))
        .build();
    for op in &modifier {
        if let understory_modifier::ModifierOp::Clickable(on_click) = op {
            assert_eq!(on_click, &handler);
            on_click.invoke();
        }
    }
    assert_eq!(clicks.get(), 1);
}
