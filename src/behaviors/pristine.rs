//! Tracking whether an input shows the user's edits or an external value.

use crate::behaviors::InputProps;
use crate::component::event::{Callback, EventHandler, FocusEvent};
use crate::component::hooks::State;
use crate::component::{component, Component, Hooks};

/// Who the displayed value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    /// Showing the externally supplied value.
    Calculated,
    /// Showing the user's value.
    Owned,
}

impl Ownership {
    pub fn is_owned(self) -> bool {
        self == Ownership::Owned
    }
}

/// Controlled value with ownership tracking.
///
/// Focus hands the value to the user. A new external `props.value` arriving
/// while the input is unfocused takes it back and replaces what is shown;
/// one arriving while focused is noted but not shown. Blur changes nothing.
/// `on_ownership_change` fires once per flip.
pub fn with_pristine(inner: Component<InputProps>) -> Component<InputProps> {
    component(move |props: &InputProps, hooks: &mut Hooks| {
        let ownership = hooks.use_state(|| Ownership::Calculated);
        let focused = hooks.use_state(|| false);
        let value = hooks.use_state(|| props.value.clone());
        let external = hooks.use_state(|| props.value.clone());
        let notify = props.on_ownership_change.clone();

        if external.with(|seen| *seen != props.value) {
            external.set(props.value.clone());
            if !focused.get() {
                value.set(props.value.clone());
                transition(&ownership, Ownership::Calculated, notify.as_ref());
            }
        }

        let on_focus = {
            let focused = focused.clone();
            let ownership = ownership.clone();
            let notify = notify.clone();
            EventHandler::new(move |_: &mut FocusEvent| {
                focused.set(true);
                transition(&ownership, Ownership::Owned, notify.as_ref());
            })
        };
        let on_blur = EventHandler::new(move |_: &mut FocusEvent| focused.set(false));
        let on_change = {
            let value = value.clone();
            Callback::new(move |next: String| value.set(next))
        };

        let props = InputProps {
            value: value.get(),
            on_focus: Some(on_focus.then(props.on_focus.clone())),
            on_blur: Some(on_blur.then(props.on_blur.clone())),
            on_change: Some(on_change.then(props.on_change.clone())),
            ..props.clone()
        };
        inner(&props, hooks.child())
    })
}

fn transition(state: &State<Ownership>, next: Ownership, notify: Option<&Callback<bool>>) {
    if state.get() == next {
        return;
    }
    state.set(next);
    tracing::debug!(?next, "ownership changed");
    if let Some(notify) = notify {
        notify.emit(next.is_owned());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::mount::Mount;
    use crate::demo::text_input;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tracked(value: &str) -> (Mount<InputProps>, Rc<RefCell<Vec<bool>>>, InputProps) {
        let flips = Rc::new(RefCell::new(Vec::new()));
        let props = {
            let flips = flips.clone();
            InputProps::new(value).with_on_ownership_change(move |owned| flips.borrow_mut().push(owned))
        };
        let mount = Mount::new(with_pristine(text_input()), props.clone());
        (mount, flips, props)
    }

    fn with_value(props: &InputProps, value: &str) -> InputProps {
        InputProps {
            value: value.to_string(),
            ..props.clone()
        }
    }

    #[test]
    fn test_ownership_transitions() {
        let (mut mount, flips, props) = tracked("x");
        assert_eq!(mount.value(0), Some("x"));
        assert!(flips.borrow().is_empty());

        mount.focus(0);
        assert_eq!(*flips.borrow(), vec![true]);

        mount.set_props(with_value(&props, "y"));
        assert_eq!(*flips.borrow(), vec![true]);
        assert_eq!(mount.value(0), Some("x"));

        mount.blur();
        assert_eq!(*flips.borrow(), vec![true]);

        mount.set_props(with_value(&props, "z"));
        assert_eq!(*flips.borrow(), vec![true, false]);
        assert_eq!(mount.value(0), Some("z"));
    }

    #[test]
    fn test_no_duplicate_notifications() {
        let (mut mount, flips, props) = tracked("x");
        // Already calculated: an external change while unfocused must not notify.
        mount.set_props(with_value(&props, "y"));
        assert!(flips.borrow().is_empty());
        assert_eq!(mount.value(0), Some("y"));

        mount.focus(0);
        mount.blur();
        mount.focus(0);
        assert_eq!(*flips.borrow(), vec![true]);

        // Same external value again is not a change.
        mount.blur();
        mount.set_props(with_value(&props, "y"));
        assert_eq!(*flips.borrow(), vec![true]);
    }

    #[test]
    fn test_user_edits_update_value_without_flipping() {
        let changes = Rc::new(RefCell::new(Vec::new()));
        let (mut mount, flips, props) = tracked("x");
        let props = {
            let changes = changes.clone();
            props.with_on_change(move |v| changes.borrow_mut().push(v))
        };
        mount.set_props(props);

        mount.focus(0);
        mount.key(KeyEvent::new(KeyCode::Char('1'), KeyModifiers::NONE));
        mount.key(KeyEvent::new(KeyCode::Char('2'), KeyModifiers::NONE));
        assert_eq!(mount.value(0), Some("x12"));
        assert_eq!(*changes.borrow(), vec!["x1".to_string(), "x12".to_string()]);
        assert_eq!(*flips.borrow(), vec![true]);
    }

    #[test]
    fn test_is_owned() {
        assert!(Ownership::Owned.is_owned());
        assert!(!Ownership::Calculated.is_owned());
    }
}
