use crate::component::event::{Callback, EventHandler, FocusEvent, KeyInput};

/// An input as the host sees it: the text to show plus the handlers to call.
#[derive(Debug, Clone, Default)]
pub struct InputNode {
    pub value: String,
    pub placeholder: Option<String>,
    pub on_focus: Option<EventHandler<FocusEvent>>,
    pub on_blur: Option<EventHandler<FocusEvent>>,
    pub on_key_down: Option<EventHandler<KeyInput>>,
    pub on_change: Option<Callback<String>>,
}

/// Rendered output of a component.
#[derive(Debug, Clone)]
pub enum Element {
    /// Title line, optionally tinted with a theme color token.
    Heading { text: String, color: Option<String> },
    Text(String),
    Input(InputNode),
    /// Placeholder shown while the real content is not ready.
    Loading,
    Group(Vec<Element>),
}

impl Element {
    /// All inputs in tree order. Focus indices refer to this order.
    pub fn inputs(&self) -> Vec<&InputNode> {
        let mut out = Vec::new();
        self.collect_inputs(&mut out);
        out
    }

    pub fn input(&self, index: usize) -> Option<&InputNode> {
        self.inputs().into_iter().nth(index)
    }

    fn collect_inputs<'a>(&'a self, out: &mut Vec<&'a InputNode>) {
        match self {
            Element::Input(node) => out.push(node),
            Element::Group(children) => {
                for child in children {
                    child.collect_inputs(out);
                }
            }
            Element::Heading { .. } | Element::Text(_) | Element::Loading => {}
        }
    }

    /// Handler-free outline of the tree, one node per line.
    pub fn describe(&self) -> String {
        let mut lines = Vec::new();
        self.describe_into(0, &mut lines);
        lines.join("\n")
    }

    fn describe_into(&self, depth: usize, lines: &mut Vec<String>) {
        let pad = "  ".repeat(depth);
        match self {
            Element::Heading { text, color } => match color {
                Some(color) => lines.push(format!("{}heading[{}] {}", pad, color, text)),
                None => lines.push(format!("{}heading {}", pad, text)),
            },
            Element::Text(text) => lines.push(format!("{}text {}", pad, text)),
            Element::Input(node) => lines.push(format!("{}input {:?}", pad, node.value)),
            Element::Loading => lines.push(format!("{}loading", pad)),
            Element::Group(children) => {
                lines.push(format!("{}group", pad));
                for child in children {
                    child.describe_into(depth + 1, lines);
                }
            }
        }
    }
}
