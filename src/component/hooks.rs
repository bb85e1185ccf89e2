//! Per-instance component state.
//!
//! A mounted component owns one [`Hooks`] tree. Each render walks it again in
//! the same order: `use_state` hands back the slot at the current position,
//! creating it on first use, and `child` hands back a nested scope so that a
//! wrapped component keeps its own slots apart from its wrapper's. Dropping
//! the tree (a remount) discards all state.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

pub struct Hooks {
    states: Vec<Rc<dyn Any>>,
    state_cursor: usize,
    children: Vec<Hooks>,
    child_cursor: usize,
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Hooks {
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            state_cursor: 0,
            children: Vec::new(),
            child_cursor: 0,
        }
    }

    /// Start a new render pass over this scope.
    pub(crate) fn rewind(&mut self) {
        self.state_cursor = 0;
        self.child_cursor = 0;
    }

    /// State slot at the current position; `init` runs only the first time.
    pub fn use_state<T: 'static>(&mut self, init: impl FnOnce() -> T) -> State<T> {
        let index = self.state_cursor;
        self.state_cursor += 1;

        if let Some(slot) = self.states.get(index) {
            match Rc::clone(slot).downcast::<RefCell<T>>() {
                Ok(cell) => return State { cell },
                Err(_) => {
                    tracing::warn!(index, "hook order changed between renders, resetting slot");
                }
            }
        }

        let cell = Rc::new(RefCell::new(init()));
        let slot: Rc<dyn Any> = cell.clone();
        if index < self.states.len() {
            self.states[index] = slot;
        } else {
            self.states.push(slot);
        }
        State { cell }
    }

    /// Nested scope for the next component rendered by the caller.
    pub fn child(&mut self) -> &mut Hooks {
        let index = self.child_cursor;
        self.child_cursor += 1;
        if index == self.children.len() {
            self.children.push(Hooks::new());
        }
        let child = &mut self.children[index];
        child.rewind();
        child
    }
}

/// Handle to one state slot. Clones share the slot.
pub struct State<T> {
    cell: Rc<RefCell<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            cell: Rc::clone(&self.cell),
        }
    }
}

impl<T> State<T> {
    pub fn set(&self, value: T) {
        *self.cell.borrow_mut() = value;
    }

    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut *self.cell.borrow_mut());
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.cell.borrow())
    }
}

impl<T: Clone> State<T> {
    pub fn get(&self) -> T {
        self.cell.borrow().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_persists_across_renders() {
        let mut hooks = Hooks::new();
        let count = hooks.use_state(|| 1);
        count.set(5);

        hooks.rewind();
        let count = hooks.use_state(|| 1);
        assert_eq!(count.get(), 5);
    }

    #[test]
    fn test_child_scopes_are_isolated() {
        let mut hooks = Hooks::new();
        hooks.child().use_state(|| "a".to_string()).set("outer".into());
        hooks.child().use_state(|| "b".to_string());

        hooks.rewind();
        assert_eq!(hooks.child().use_state(|| String::new()).get(), "outer");
        assert_eq!(hooks.child().use_state(|| String::new()).get(), "b");
    }

    #[test]
    fn test_type_mismatch_resets_slot() {
        let mut hooks = Hooks::new();
        hooks.use_state(|| 7u32);
        hooks.rewind();
        let text = hooks.use_state(|| "fresh".to_string());
        assert_eq!(text.get(), "fresh");
    }

    #[test]
    fn test_clones_share_the_slot() {
        let mut hooks = Hooks::new();
        let inner = hooks.child().use_state(|| 0);
        inner.clone().update(|v| *v += 1);

        hooks.rewind();
        assert_eq!(hooks.child().use_state(|| 0).get(), 1);
        assert_eq!(inner.with(|v| *v), 1);
    }
}
