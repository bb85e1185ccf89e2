//! Chaining behavior transforms onto a base component.
//!
//! Three call shapes give the same component for the same transform list:
//!
//! ```text
//! with_stuttering(with_select_all_on_focus(base))
//! Wrapper::new(base).with(with_select_all_on_focus).with(with_stuttering).into_inner()
//! compose(base, [with_select_all_on_focus as Transform<_>, with_stuttering])
//! ```
//!
//! Transforms apply left to right, so the last one listed is the outermost.

use crate::component::Component;

/// A behavior transform as a plain function pointer, handy for arrays.
pub type Transform<P> = fn(Component<P>) -> Component<P>;

/// A boxed behavior transform, for lists that mix closures and functions.
pub type Behavior<P> = Box<dyn Fn(Component<P>) -> Component<P>>;

/// Fold `behaviors` over `base`. An empty list returns `base` itself.
pub fn compose<P, I>(base: Component<P>, behaviors: I) -> Component<P>
where
    I: IntoIterator,
    I::Item: Fn(Component<P>) -> Component<P>,
{
    behaviors
        .into_iter()
        .fold(base, |component, behavior| behavior(component))
}

/// Fluent builder over [`compose`].
pub struct Wrapper<P> {
    component: Component<P>,
}

impl<P> Wrapper<P> {
    pub fn new(base: Component<P>) -> Self {
        Self { component: base }
    }

    pub fn with(self, behavior: impl FnOnce(Component<P>) -> Component<P>) -> Self {
        Self {
            component: behavior(self.component),
        }
    }

    pub fn into_inner(self) -> Component<P> {
        self.component
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::behaviors::{
        with_pristine, with_select_all_on_focus, with_stuttering, InputProps,
    };
    use crate::component::event::Callback;
    use crate::component::mount::Mount;
    use crate::component::{component, Element, Hooks};
    use crate::demo::text_input;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn tagged(tag: &'static str) -> impl Fn(Component<String>) -> Component<String> {
        move |inner: Component<String>| {
            component(move |props: &String, hooks: &mut Hooks| match inner(props, hooks.child()) {
                Element::Text(text) => Element::Text(format!("{}({})", tag, text)),
                other => other,
            })
        }
    }

    fn base() -> Component<String> {
        component(|props: &String, _: &mut Hooks| Element::Text(props.clone()))
    }

    fn rendered(component: &Component<String>) -> String {
        Mount::new(component.clone(), "x".to_string()).element().describe()
    }

    #[test]
    fn test_empty_list_is_identity() {
        let base = base();
        let none: Vec<Behavior<String>> = Vec::new();
        let composed = compose(base.clone(), none);
        assert!(Rc::ptr_eq(&base, &composed));
        assert!(Rc::ptr_eq(&base, &Wrapper::new(base.clone()).into_inner()));
    }

    #[test]
    fn test_last_transform_is_outermost() {
        let behaviors: Vec<Behavior<String>> = vec![Box::new(tagged("f")), Box::new(tagged("g"))];
        assert_eq!(rendered(&compose(base(), behaviors)), "text g(f(x))");
    }

    #[test]
    fn test_call_shapes_render_alike() {
        let manual = tagged("g")(tagged("f")(base()));
        let fluent = Wrapper::new(base()).with(tagged("f")).with(tagged("g")).into_inner();
        let folded = compose(base(), [tagged("f"), tagged("g")]);
        assert_eq!(rendered(&manual), rendered(&fluent));
        assert_eq!(rendered(&manual), rendered(&folded));
    }

    /// Drive a component through focus, typing and an external update and
    /// record everything observable along the way.
    fn script(component: Component<InputProps>) -> Vec<String> {
        let flips = Rc::new(RefCell::new(Vec::new()));
        let props = {
            let flips = flips.clone();
            InputProps::new("ab").with_on_ownership_change(move |owned| flips.borrow_mut().push(owned))
        };
        let mut mount = Mount::new(component, props.clone());
        let mut trace = vec![mount.element().describe()];

        mount.focus(0);
        trace.push(format!("selected {:?}", mount.selected_text()));
        for code in [KeyCode::Char('c'), KeyCode::Right, KeyCode::Char(' '), KeyCode::Char('!')] {
            mount.key(KeyEvent::new(code, KeyModifiers::NONE));
            trace.push(mount.element().describe());
        }
        mount.blur();
        mount.set_props(InputProps {
            value: "external".into(),
            ..props
        });
        trace.push(mount.element().describe());
        trace.push(format!("flips {:?}", flips.borrow()));
        trace
    }

    #[test]
    fn test_call_shapes_behave_alike() {
        let manual = with_pristine(with_stuttering(with_select_all_on_focus(text_input())));
        let fluent = Wrapper::new(text_input())
            .with(with_select_all_on_focus)
            .with(with_stuttering)
            .with(with_pristine)
            .into_inner();
        let folded = compose(
            text_input(),
            [
                with_select_all_on_focus as Transform<InputProps>,
                with_stuttering,
                with_pristine,
            ],
        );

        let expected = script(manual);
        assert_eq!(expected, script(fluent));
        assert_eq!(expected, script(folded));
        assert_eq!(expected[1], "selected Some(\"ab\")");
    }

    #[test]
    fn test_boxed_behaviors_mix_closures() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let logging: Behavior<InputProps> = {
            let log = log.clone();
            Box::new(move |inner: Component<InputProps>| {
                let log = log.clone();
                component(move |props: &InputProps, hooks: &mut Hooks| {
                    let log = log.clone();
                    let on_change = Callback::new(move |v: String| log.borrow_mut().push(v));
                    let props = InputProps {
                        on_change: Some(on_change.then(props.on_change.clone())),
                        ..props.clone()
                    };
                    inner(&props, hooks.child())
                })
            })
        };
        let behaviors: Vec<Behavior<InputProps>> =
            vec![Box::new(with_select_all_on_focus), logging];
        let mut mount = Mount::new(compose(text_input(), behaviors), InputProps::new("hi"));
        mount.focus(0);
        mount.key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE));
        assert_eq!(*log.borrow(), vec!["z".to_string()]);
    }
}
