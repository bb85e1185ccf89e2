//! A mounted component instance: the host side of the component layer.
//!
//! `Mount` owns the props, the hook tree and the last rendered element. It
//! tracks which input has focus and what part of it is selected, routes
//! focus and key events to the handlers in the tree, applies the default edit
//! when a key handler did not prevent it, and re-renders after every event.

use crate::component::event::{FocusEvent, KeyInput};
use crate::component::{Component, Element, Hooks, InputNode};
use crossterm::event::{KeyCode, KeyEvent};

/// Selected character range `[start, end)` within the focused input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    pub fn all(text: &str) -> Self {
        Self {
            start: 0,
            end: text.chars().count(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn slice(&self, text: &str) -> String {
        text.chars()
            .skip(self.start)
            .take(self.end.saturating_sub(self.start))
            .collect()
    }

    /// `text` with the selected range replaced by `with`.
    pub fn replace(&self, text: &str, with: &str) -> String {
        let head: String = text.chars().take(self.start).collect();
        let tail: String = text.chars().skip(self.end).collect();
        format!("{}{}{}", head, with, tail)
    }

    fn clamp(self, len: usize) -> Self {
        Self {
            start: self.start.min(len),
            end: self.end.min(len),
        }
    }
}

pub struct Mount<P> {
    component: Component<P>,
    props: P,
    hooks: Hooks,
    tree: Element,
    focused: Option<usize>,
    selection: Option<Selection>,
}

impl<P> Mount<P> {
    pub fn new(component: Component<P>, props: P) -> Self {
        let mut hooks = Hooks::new();
        let tree = component(&props, &mut hooks);
        Self {
            component,
            props,
            hooks,
            tree,
            focused: None,
            selection: None,
        }
    }

    /// Re-render the tree. If the focused input is gone from the new tree it
    /// gets its blur event, taken from the previous tree, and focus is cleared.
    pub fn render(&mut self) {
        let previous = self.focused.and_then(|i| self.node(i));
        self.rerender();

        let Some(index) = self.focused else {
            return;
        };
        if let Some(node) = self.tree.input(index) {
            let len = node.value.chars().count();
            self.selection = self.selection.map(|s| s.clamp(len));
            return;
        }

        self.focused = None;
        self.selection = None;
        tracing::debug!(index, "focused input removed");
        if let Some(node) = previous {
            if let Some(handler) = &node.on_blur {
                handler.call(&mut FocusEvent::new(node.value.clone()));
                self.rerender();
            }
        }
    }

    fn rerender(&mut self) {
        self.hooks.rewind();
        self.tree = (self.component)(&self.props, &mut self.hooks);
    }

    /// Throw away all component state and render from scratch.
    pub fn remount(&mut self) {
        self.hooks = Hooks::new();
        self.focused = None;
        self.selection = None;
        self.render();
        tracing::debug!(tree = %self.tree.describe(), "component remounted");
    }

    pub fn props(&self) -> &P {
        &self.props
    }

    pub fn set_props(&mut self, props: P) {
        self.props = props;
        self.render();
    }

    pub fn update_props(&mut self, f: impl FnOnce(&mut P)) {
        f(&mut self.props);
        self.render();
    }

    pub fn element(&self) -> &Element {
        &self.tree
    }

    pub fn input_count(&self) -> usize {
        self.tree.inputs().len()
    }

    pub fn value(&self, index: usize) -> Option<&str> {
        self.tree.input(index).map(|node| node.value.as_str())
    }

    pub fn focused(&self) -> Option<usize> {
        self.focused
    }

    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    pub fn selected_text(&self) -> Option<String> {
        let sel = self.selection?;
        let value = self.value(self.focused?)?;
        Some(sel.slice(value))
    }

    fn node(&self, index: usize) -> Option<InputNode> {
        self.tree.input(index).cloned()
    }

    pub fn focus(&mut self, index: usize) {
        if self.focused == Some(index) {
            return;
        }
        if index >= self.input_count() {
            return;
        }
        self.blur();
        let Some(node) = self.node(index) else {
            return;
        };

        self.focused = Some(index);
        let mut event = FocusEvent::new(node.value.clone());
        if let Some(handler) = &node.on_focus {
            handler.call(&mut event);
        }
        self.selection = event
            .select_requested()
            .then(|| Selection::all(&node.value));
        tracing::debug!(index, selected = event.select_requested(), "input focused");
        self.render();
    }

    pub fn blur(&mut self) {
        let Some(index) = self.focused.take() else {
            return;
        };
        self.selection = None;
        if let Some(node) = self.node(index) {
            if let Some(handler) = &node.on_blur {
                handler.call(&mut FocusEvent::new(node.value.clone()));
            }
        }
        tracing::debug!(index, "input blurred");
        self.render();
    }

    pub fn focus_next(&mut self) {
        let count = self.input_count();
        if count == 0 {
            return;
        }
        let next = match self.focused {
            Some(i) => (i + 1) % count,
            None => 0,
        };
        self.focus(next);
    }

    pub fn focus_prev(&mut self) {
        let count = self.input_count();
        if count == 0 {
            return;
        }
        let prev = match self.focused {
            Some(0) | None => count - 1,
            Some(i) => i - 1,
        };
        self.focus(prev);
    }

    /// Route a key to the focused input. Returns `false` when nothing has
    /// focus.
    pub fn key(&mut self, key: KeyEvent) -> bool {
        let Some(index) = self.focused else {
            return false;
        };
        let Some(node) = self.node(index) else {
            return false;
        };

        let mut input = KeyInput::new(key);
        if let Some(handler) = &node.on_key_down {
            handler.call(&mut input);
        }
        if !input.default_prevented() {
            if let Some(next) = self.default_edit(&node.value, &input) {
                if let Some(on_change) = &node.on_change {
                    on_change.emit(next);
                }
            }
        }
        self.selection = None;
        self.render();
        true
    }

    fn default_edit(&self, value: &str, input: &KeyInput) -> Option<String> {
        match input.key().code {
            KeyCode::Char(_) => {
                let c = input.char()?;
                Some(match self.selection {
                    Some(sel) => sel.replace(value, &c.to_string()),
                    None => format!("{}{}", value, c),
                })
            }
            KeyCode::Backspace => match self.selection {
                Some(sel) if !sel.is_empty() => Some(sel.replace(value, "")),
                _ => {
                    let mut next = value.to_string();
                    next.pop()?;
                    Some(next)
                }
            },
            _ => None,
        }
    }
}
