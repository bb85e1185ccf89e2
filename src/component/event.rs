//! Events delivered to input handlers and the handler types that receive them.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fmt;
use std::rc::Rc;

/// Focus gained or lost by an input.
///
/// A focus handler may call [`FocusEvent::select`] to ask the host to select
/// the whole text of the input once handlers have run.
#[derive(Debug, Clone)]
pub struct FocusEvent {
    value: String,
    select_all: bool,
}

impl FocusEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            select_all: false,
        }
    }

    /// Text of the input at the moment the event fired.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn select(&mut self) {
        self.select_all = true;
    }

    pub fn select_requested(&self) -> bool {
        self.select_all
    }
}

/// A key press routed to the focused input.
#[derive(Debug, Clone)]
pub struct KeyInput {
    key: KeyEvent,
    default_prevented: bool,
}

impl KeyInput {
    pub fn new(key: KeyEvent) -> Self {
        Self {
            key,
            default_prevented: false,
        }
    }

    pub fn key(&self) -> &KeyEvent {
        &self.key
    }

    /// The typed character, if this is a plain character key. Chords with
    /// Control or Alt are not text input.
    pub fn char(&self) -> Option<char> {
        match self.key.code {
            KeyCode::Char(c)
                if !self
                    .key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(c)
            }
            _ => None,
        }
    }

    /// Stop the host from applying its default edit for this key.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Handler for an event it may mutate (select text, prevent the default).
pub struct EventHandler<E>(Rc<dyn Fn(&mut E)>);

impl<E: 'static> EventHandler<E> {
    pub fn new(handler: impl Fn(&mut E) + 'static) -> Self {
        Self(Rc::new(handler))
    }

    pub fn call(&self, event: &mut E) {
        (self.0)(event)
    }

    /// Run `self`, then `next` if one was supplied.
    pub fn then(self, next: Option<EventHandler<E>>) -> Self {
        match next {
            None => self,
            Some(next) => Self::new(move |event| {
                self.call(event);
                next.call(event);
            }),
        }
    }
}

impl<E> Clone for EventHandler<E> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<E> fmt::Debug for EventHandler<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("EventHandler")
    }
}

/// Notification that takes its payload by value.
pub struct Callback<T>(Rc<dyn Fn(T)>);

impl<T: Clone + 'static> Callback<T> {
    pub fn new(callback: impl Fn(T) + 'static) -> Self {
        Self(Rc::new(callback))
    }

    pub fn emit(&self, value: T) {
        (self.0)(value)
    }

    /// Run `self`, then `next` if one was supplied.
    pub fn then(self, next: Option<Callback<T>>) -> Self {
        match next {
            None => self,
            Some(next) => Self::new(move |value: T| {
                self.emit(value.clone());
                next.emit(value);
            }),
        }
    }
}

impl<T> Clone for Callback<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

impl<T> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Callback")
    }
}
