use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ThemeError {
    #[error("unknown color token: {0:?}")]
    UnknownColor(String),
}

/// Resolve a theme color token (`"red"`, `"lightblue"`, `"#ff8800"`, `"42"`).
pub fn parse_color(token: &str) -> Result<Color, ThemeError> {
    Color::from_str(token.trim()).map_err(|_| ThemeError::UnknownColor(token.to_string()))
}

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(0x4f, 0xd1, 0xc5);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn border_type() -> BorderType {
        BorderType::Plain
    }

    pub fn border_type_focused() -> BorderType {
        BorderType::Rounded
    }

    pub fn panel_bg() -> Style {
        Style::default()
    }

    pub fn panel_bg_focused() -> Style {
        Style::default().bg(Color::Rgb(0x1c, 0x1f, 0x26))
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    /// Heading style for a theme primary token. Falls back to the plain
    /// title style when there is no theme or the token does not parse.
    pub fn heading(primary: Option<&str>) -> Style {
        match primary.map(parse_color) {
            Some(Ok(color)) => Style::default().fg(color).add_modifier(Modifier::BOLD),
            _ => Self::title(),
        }
    }

    pub fn label() -> Style {
        Style::default().fg(Color::Yellow)
    }

    pub fn loading() -> Style {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn input_text() -> Style {
        Style::default().fg(Color::White)
    }

    pub fn placeholder() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn selection() -> Style {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
