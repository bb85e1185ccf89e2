use crate::behaviors::InputProps;
use crate::component::event::{EventHandler, KeyInput};
use crate::component::{component, Component, Hooks};

/// Echo every word or whitespace character twice.
///
/// The wrapper keeps its own copy of the value, seeded from `props.value` on
/// first render. Later changes to `props.value` are ignored. Matching keys
/// append the character twice and suppress the host's default append; any
/// other key passes through untouched.
pub fn with_stuttering(inner: Component<InputProps>) -> Component<InputProps> {
    component(move |props: &InputProps, hooks: &mut Hooks| {
        let value = hooks.use_state(|| props.value.clone());
        tracing::debug!(value = %value.get(), "stutter render");

        let buffer = value.clone();
        let stutter = EventHandler::new(move |event: &mut KeyInput| {
            let Some(c) = event.char().filter(|c| is_word_or_space(*c)) else {
                return;
            };
            buffer.update(|v| {
                v.push(c);
                v.push(c);
            });
            event.prevent_default();
        });

        let props = InputProps {
            value: value.get(),
            on_key_down: Some(stutter.then(props.on_key_down.clone())),
            ..props.clone()
        };
        inner(&props, hooks.child())
    })
}

fn is_word_or_space(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c.is_whitespace()
}
