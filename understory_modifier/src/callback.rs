// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Callback handles and interaction sources.
//!
//! Handles wrap shared closures. Two handles are equal only when they wrap
//! the *same* closure allocation; there is no meaningful value equality for
//! closures, which is why the chain comparator treats operations carrying
//! these handles as comparable by kind only.

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use ui_events::keyboard::KeyboardEvent;
use ui_events::pointer::PointerEvent;

/// Click handler.
#[derive(Clone)]
pub struct OnClick(Rc<dyn Fn()>);

impl OnClick {
    /// Wraps a closure as a click handler.
    pub fn new(f: impl Fn() + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    #[inline]
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl PartialEq for OnClick {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnClick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnClick").field(&"<function>").finish()
    }
}

/// Keyboard event handler.
///
/// The handler returns `true` when it consumed the event.
#[derive(Clone)]
pub struct OnKeyEvent(Rc<dyn Fn(&KeyboardEvent) -> bool>);

impl OnKeyEvent {
    /// Wraps a closure as a key handler.
    pub fn new(f: impl Fn(&KeyboardEvent) -> bool + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler, returning whether the event was consumed.
    #[inline]
    pub fn invoke(&self, event: &KeyboardEvent) -> bool {
        (self.0)(event)
    }
}

impl PartialEq for OnKeyEvent {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for OnKeyEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OnKeyEvent").field(&"<function>").finish()
    }
}

/// Pointer event handler.
#[derive(Clone)]
pub struct PointerHandler(Rc<dyn Fn(&PointerEvent)>);

impl PointerHandler {
    /// Wraps a closure as a pointer handler.
    pub fn new(f: impl Fn(&PointerEvent) + 'static) -> Self {
        Self(Rc::new(f))
    }

    /// Invokes the handler.
    #[inline]
    pub fn invoke(&self, event: &PointerEvent) {
        (self.0)(event);
    }
}

impl PartialEq for PointerHandler {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for PointerHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PointerHandler")
            .field(&"<function>")
            .finish()
    }
}

/// Pointer event category a [`PointerHandler`] is attached to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerEventType {
    /// A button or contact went down.
    Press,
    /// A button or contact went up.
    Release,
    /// The pointer moved.
    Move,
    /// The pointer entered the element bounds.
    Enter,
    /// The pointer left the element bounds.
    Exit,
    /// Scroll wheel or trackpad scroll.
    Scroll,
}

/// Dispatch pass a [`PointerHandler`] runs in.
///
/// `Initial` runs root to target before descendants see the event, `Main`
/// runs target to root, and `Final` runs root to target after `Main`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum PointerEventPass {
    /// Ancestors first, before the main pass.
    Initial,
    /// Descendants first.
    #[default]
    Main,
    /// Ancestors first, after the main pass.
    Final,
}

/// An interaction emitted into an [`InteractionSource`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Interaction {
    /// The element was pressed.
    Press,
    /// A previous press ended.
    Release,
    /// The element gained focus.
    Focus,
    /// The element lost focus.
    Unfocus,
    /// The pointer started hovering the element.
    HoverEnter,
    /// The pointer stopped hovering the element.
    HoverExit,
}

/// Shared stream of [`Interaction`]s for one element.
///
/// Cloning yields another handle to the same source. Equality is identity.
///
/// ```rust
/// use understory_modifier::{Interaction, InteractionSource};
///
/// let source = InteractionSource::new();
/// let observer = source.clone();
/// source.emit(Interaction::Focus);
/// assert_eq!(observer.interactions(), vec![Interaction::Focus]);
/// assert_eq!(source, observer);
/// assert_ne!(source, InteractionSource::new());
/// ```
#[derive(Clone, Default)]
pub struct InteractionSource {
    log: Rc<RefCell<Vec<Interaction>>>,
}

impl InteractionSource {
    /// Creates a new, empty interaction source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an interaction.
    pub fn emit(&self, interaction: Interaction) {
        self.log.borrow_mut().push(interaction);
    }

    /// Returns every interaction emitted so far, oldest first.
    #[must_use]
    pub fn interactions(&self) -> Vec<Interaction> {
        self.log.borrow().clone()
    }
}

impl PartialEq for InteractionSource {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.log, &other.log)
    }
}

impl fmt::Debug for InteractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InteractionSource")
            .field("emitted", &self.log.borrow().len())
            .finish_non_exhaustive()
    }
}
