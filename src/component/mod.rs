//! Headless component layer: element trees, input events, per-instance state,
//! mounting, and composition of behavior transforms.

pub mod element;
pub mod event;
pub mod hooks;
pub mod mount;
pub mod wrapper;

use std::rc::Rc;

pub use element::{Element, InputNode};
pub use hooks::Hooks;

/// A component maps a property record to an element tree. State lives in the
/// [`Hooks`] scope handed in by whoever renders it, never in the closure.
pub type Component<P> = Rc<dyn Fn(&P, &mut Hooks) -> Element>;

pub fn component<P, F>(render: F) -> Component<P>
where
    F: Fn(&P, &mut Hooks) -> Element + 'static,
{
    Rc::new(render)
}
