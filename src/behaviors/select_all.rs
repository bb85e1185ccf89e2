use crate::behaviors::InputProps;
use crate::component::event::{EventHandler, FocusEvent};
use crate::component::{component, Component, Hooks};

/// Select the whole text whenever the input gains focus. The caller's own
/// `on_focus` still runs, after the selection request.
pub fn with_select_all_on_focus(inner: Component<InputProps>) -> Component<InputProps> {
    component(move |props: &InputProps, hooks: &mut Hooks| {
        let select = EventHandler::new(|event: &mut FocusEvent| {
            tracing::debug!(text = event.value(), "selecting all on focus");
            event.select();
        });
        let props = InputProps {
            on_focus: Some(select.then(props.on_focus.clone())),
            ..props.clone()
        };
        inner(&props, hooks.child())
    })
}
