//! Behavior transforms for input components.
//!
//! Every input behavior maps `Component<InputProps>` to `Component<InputProps>`,
//! so they stack in any order. A behavior adds its own handler in front of
//! the caller's and passes the props down to the wrapped component in a
//! child hook scope. `with_theme` is the odd one out: it changes the props
//! shape and lives in [`theme`].

mod pristine;
mod select_all;
mod stuttering;
pub mod theme;

pub use pristine::{with_pristine, Ownership};
pub use select_all::with_select_all_on_focus;
pub use stuttering::with_stuttering;
pub use theme::{with_theme, Loadable, ThemeContext, Themed};

use crate::component::event::{Callback, EventHandler, FocusEvent, KeyInput};
use crate::component::InputNode;

/// Properties accepted by input components and every input behavior.
#[derive(Debug, Clone, Default)]
pub struct InputProps {
    pub value: String,
    pub placeholder: Option<String>,
    pub on_focus: Option<EventHandler<FocusEvent>>,
    pub on_blur: Option<EventHandler<FocusEvent>>,
    pub on_key_down: Option<EventHandler<KeyInput>>,
    pub on_change: Option<Callback<String>>,
    /// Fired by [`with_pristine`] whenever ownership flips.
    pub on_ownership_change: Option<Callback<bool>>,
}

impl InputProps {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_on_change(mut self, f: impl Fn(String) + 'static) -> Self {
        self.on_change = Some(Callback::new(f));
        self
    }

    pub fn with_on_ownership_change(mut self, f: impl Fn(bool) + 'static) -> Self {
        self.on_ownership_change = Some(Callback::new(f));
        self
    }

    pub fn to_node(&self) -> InputNode {
        InputNode {
            value: self.value.clone(),
            placeholder: self.placeholder.clone(),
            on_focus: self.on_focus.clone(),
            on_blur: self.on_blur.clone(),
            on_key_down: self.on_key_down.clone(),
            on_change: self.on_change.clone(),
        }
    }
}
