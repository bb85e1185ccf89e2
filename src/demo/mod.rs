//! The sandbox page: base components and the composition root that wires
//! every behavior onto them.

use crate::behaviors::{
    with_pristine, with_select_all_on_focus, with_stuttering, with_theme, InputProps, Loadable,
    ThemeContext, Themed,
};
use crate::component::wrapper::{compose, Transform, Wrapper};
use crate::component::{component, Component, Element, Hooks};
use crate::config::model::DemoConfig;

#[derive(Debug, Clone, Default)]
pub struct HelloProps {
    pub title: String,
}

/// Greeting heading tinted with the theme's primary color.
pub fn hello() -> Component<Themed<HelloProps>> {
    component(|props: &Themed<HelloProps>, _: &mut Hooks| Element::Heading {
        text: format!("Hello {}", props.props.title),
        color: props.primary.clone(),
    })
}

/// Bare input: shows `props.value` and forwards every handler.
pub fn text_input() -> Component<InputProps> {
    component(|props: &InputProps, _: &mut Hooks| Element::Input(props.to_node()))
}

#[derive(Debug, Clone)]
pub struct RootProps {
    pub title: String,
    pub loading: bool,
    /// Ticks elapsed since start; drives the pristine field's external value.
    pub clock: u64,
}

impl RootProps {
    pub fn new(demo: &DemoConfig) -> Self {
        Self {
            title: demo.title.clone(),
            loading: demo.loading,
            clock: 0,
        }
    }
}

pub fn clock_value(clock: u64) -> String {
    format!("tick {}", clock)
}

/// Build the page. The theme is passed in here and reaches only the heading.
pub fn root(theme: Option<ThemeContext>, demo: &DemoConfig) -> Component<RootProps> {
    let heading = with_theme(theme)(hello());
    // Manual nesting.
    let select_all = with_select_all_on_focus(text_input());
    // Fluent chain.
    let stuttered = Wrapper::new(text_input())
        .with(with_select_all_on_focus)
        .with(with_stuttering)
        .into_inner();
    // Fold.
    let pristine = compose(
        text_input(),
        [with_select_all_on_focus as Transform<InputProps>, with_pristine],
    );

    let select_all_seed = demo.select_all_value.clone();
    let stutter_seed = demo.stutter_value.clone();

    component(move |props: &RootProps, hooks: &mut Hooks| {
        let select_all_value = hooks.use_state(|| select_all_seed.clone());
        let owned = hooks.use_state(|| false);

        let title = heading(
            &Loadable::new(HelloProps {
                title: props.title.clone(),
            })
            .loading(props.loading),
            hooks.child(),
        );

        let setter = select_all_value.clone();
        let first = select_all(
            &InputProps::new(select_all_value.get()).with_on_change(move |v| setter.set(v)),
            hooks.child(),
        );

        let second = stuttered(
            &InputProps::new(stutter_seed.clone()).with_placeholder("type to stutter"),
            hooks.child(),
        );

        let flag = owned.clone();
        let third = pristine(
            &InputProps::new(clock_value(props.clock)).with_on_ownership_change(move |o| flag.set(o)),
            hooks.child(),
        );

        let ownership = if owned.get() { "owned" } else { "calculated" };
        Element::Group(vec![
            title,
            Element::Text("select all on focus".into()),
            first,
            Element::Text("stuttering, select all on focus".into()),
            second,
            Element::Text(format!("pristine ({})", ownership)),
            third,
        ])
    })
}
