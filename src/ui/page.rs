//! Draws the page's element tree: one row per heading, label or loading
//! marker, and a bordered box per input.

use crate::app::state::AppState;
use crate::component::mount::Selection;
use crate::component::{Element, InputNode};
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

enum Row<'a> {
    Heading(&'a str, Option<&'a str>),
    Label(&'a str),
    Loading,
    Input(usize, &'a InputNode),
}

impl Row<'_> {
    fn height(&self) -> u16 {
        match self {
            Row::Input(..) => 3,
            _ => 1,
        }
    }
}

fn flatten<'a>(element: &'a Element, rows: &mut Vec<Row<'a>>, inputs: &mut usize) {
    match element {
        Element::Heading { text, color } => rows.push(Row::Heading(text.as_str(), color.as_deref())),
        Element::Text(text) => rows.push(Row::Label(text.as_str())),
        Element::Loading => rows.push(Row::Loading),
        Element::Input(node) => {
            rows.push(Row::Input(*inputs, node));
            *inputs += 1;
        }
        Element::Group(children) => {
            for child in children {
                flatten(child, rows, inputs);
            }
        }
    }
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut rows = Vec::new();
    flatten(state.page.element(), &mut rows, &mut 0);

    let heights: Vec<u16> = rows.iter().map(Row::height).collect();
    let areas = layout::stack(area, &heights);

    for (row, area) in rows.iter().zip(areas) {
        if area.height == 0 {
            continue;
        }
        match row {
            Row::Heading(text, color) => {
                let paragraph = Paragraph::new(Span::styled(*text, Theme::heading(*color)));
                frame.render_widget(paragraph, area);
            }
            Row::Label(text) => {
                frame.render_widget(Paragraph::new(Span::styled(*text, Theme::label())), area);
            }
            Row::Loading => {
                frame.render_widget(Paragraph::new(Span::styled("loading", Theme::loading())), area);
            }
            Row::Input(index, node) => {
                let focused = state.page.focused() == Some(*index);
                let selection = if focused { state.page.selection() } else { None };
                render_input(frame, area, node, focused, selection);
            }
        }
    }
}

fn render_input(
    frame: &mut Frame,
    area: Rect,
    node: &InputNode,
    focused: bool,
    selection: Option<Selection>,
) {
    let (border_style, border_type, bg) = if focused {
        (
            Theme::border_focused(),
            Theme::border_type_focused(),
            Theme::panel_bg_focused(),
        )
    } else {
        (Theme::border(), Theme::border_type(), Theme::panel_bg())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1))
        .style(bg);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if node.value.is_empty() && !focused {
        if let Some(ref placeholder) = node.placeholder {
            let paragraph = Paragraph::new(Span::styled(placeholder.as_str(), Theme::placeholder()));
            frame.render_widget(paragraph, inner);
        }
        return;
    }

    let mut spans = Vec::new();
    if focused {
        spans.push(Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)));
    }
    spans.extend(value_spans(&node.value, selection));
    frame.render_widget(Paragraph::new(Line::from(spans)), inner);

    if focused && inner.width > 0 {
        // Cursor sits after the text: chevron "❯ " (2 cells) + text width
        let prompt_offset = 2u16;
        let text_width = u16::try_from(node.value.width()).unwrap_or(u16::MAX);
        let cursor_x = inner
            .x
            .saturating_add(prompt_offset)
            .saturating_add(text_width);
        frame.set_cursor_position((cursor_x.min(inner.right() - 1), inner.y));
    }
}

/// Split `value` into plain and highlighted spans around the selection.
fn value_spans(value: &str, selection: Option<Selection>) -> Vec<Span<'static>> {
    let Some(sel) = selection.filter(|s| !s.is_empty()) else {
        return vec![Span::styled(value.to_string(), Theme::input_text())];
    };
    let head: String = value.chars().take(sel.start).collect();
    let tail: String = value.chars().skip(sel.end).collect();
    [
        Span::styled(head, Theme::input_text()),
        Span::styled(sel.slice(value), Theme::selection()),
        Span::styled(tail, Theme::input_text()),
    ]
    .into_iter()
    .filter(|span| !span.content.is_empty())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_spans_highlight_selection() {
        let spans = value_spans("abcdef", Some(Selection { start: 1, end: 3 }));
        let parts: Vec<_> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(parts, vec!["a", "bc", "def"]);
        assert_eq!(spans[1].style, Theme::selection());
    }

    #[test]
    fn test_value_spans_full_and_none() {
        let all = value_spans("abc", Some(Selection::all("abc")));
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].style, Theme::selection());

        let none = value_spans("abc", None);
        assert_eq!(none.len(), 1);
        assert_eq!(none[0].style, Theme::input_text());
    }

    #[test]
    fn test_flatten_numbers_inputs() {
        let tree = Element::Group(vec![
            Element::Text("a".into()),
            Element::Input(InputNode::default()),
            Element::Group(vec![Element::Loading, Element::Input(InputNode::default())]),
        ]);
        let mut rows = Vec::new();
        flatten(&tree, &mut rows, &mut 0);
        let indices: Vec<usize> = rows
            .iter()
            .filter_map(|r| match r {
                Row::Input(i, _) => Some(*i),
                _ => None,
            })
            .collect();
        assert_eq!(indices, vec![0, 1]);
        assert_eq!(rows.iter().map(Row::height).sum::<u16>(), 1 + 3 + 1 + 3);
    }
}
