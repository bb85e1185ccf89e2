//! Theme injection with a loading short-circuit.

use crate::component::{component, Component, Element, Hooks};
use serde::{Deserialize, Serialize};

/// Theme values handed to themed components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeContext {
    /// Color token, e.g. `"red"` or `"#ff8800"`.
    pub primary: String,
}

/// Props of a component that receives the theme. `primary` is `None` when no
/// theme was provided.
#[derive(Debug, Clone, Default)]
pub struct Themed<P> {
    pub primary: Option<String>,
    pub props: P,
}

/// Props of a themed component as seen from outside: the caller supplies
/// everything except the theme, plus a loading flag.
#[derive(Debug, Clone, Default)]
pub struct Loadable<P> {
    pub loading: bool,
    pub props: P,
}

impl<P> Loadable<P> {
    pub fn new(props: P) -> Self {
        Self {
            loading: false,
            props,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }
}

/// Build a transform that injects `theme` into the wrapped component.
///
/// While `loading` is set the result renders [`Element::Loading`] and the
/// wrapped component is not called at all.
pub fn with_theme<P>(
    theme: Option<ThemeContext>,
) -> impl Fn(Component<Themed<P>>) -> Component<Loadable<P>>
where
    P: Clone + 'static,
{
    move |inner: Component<Themed<P>>| {
        let primary = theme.as_ref().map(|t| t.primary.clone());
        if primary.is_none() {
            tracing::warn!("no theme provided, rendering unthemed");
        }
        component(move |props: &Loadable<P>, hooks: &mut Hooks| {
            // Claim the child scope even when skipping the inner render so
            // sibling scopes keep their positions.
            let scope = hooks.child();
            if props.loading {
                return Element::Loading;
            }
            let themed = Themed {
                primary: primary.clone(),
                props: props.props.clone(),
            };
            inner(&themed, scope)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::mount::Mount;
    use crate::demo::{hello, HelloProps};
    use std::cell::Cell;
    use std::rc::Rc;

    fn red() -> Option<ThemeContext> {
        Some(ThemeContext {
            primary: "red".into(),
        })
    }

    fn props(loading: bool) -> Loadable<HelloProps> {
        Loadable::new(HelloProps {
            title: "Select All Sandbox".into(),
        })
        .loading(loading)
    }

    #[test]
    fn test_primary_is_injected() {
        let mount = Mount::new(with_theme(red())(hello()), props(false));
        assert_eq!(mount.element().describe(), "heading[red] Hello Select All Sandbox");
    }

    #[test]
    fn test_missing_theme_renders_unthemed() {
        let mount = Mount::new(with_theme(None)(hello()), props(false));
        assert_eq!(mount.element().describe(), "heading Hello Select All Sandbox");
    }

    #[test]
    fn test_loading_never_calls_inner() {
        let calls = Rc::new(Cell::new(0));
        let counting = {
            let calls = calls.clone();
            component(move |p: &Themed<HelloProps>, _: &mut Hooks| {
                calls.set(calls.get() + 1);
                Element::Text(p.props.title.clone())
            })
        };
        let mut mount = Mount::new(with_theme(red())(counting), props(true));
        mount.render();
        assert_eq!(mount.element().describe(), "loading");
        assert_eq!(calls.get(), 0);

        mount.set_props(props(false));
        assert_eq!(calls.get(), 1);
        assert_eq!(mount.element().describe(), "text Select All Sandbox");
    }
}
