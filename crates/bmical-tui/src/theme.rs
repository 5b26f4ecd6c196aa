#![forbid(unsafe_code)]

//! Style palette for the form, one function per visual role.

use crossterm::style::Color;

use crate::render::Style;

pub fn card_border() -> Style {
    Style::new().fg(Color::DarkGrey)
}

pub fn card_title() -> Style {
    Style::new().bold()
}

pub fn description() -> Style {
    Style::new().dim()
}

pub fn label() -> Style {
    Style::new().fg(Color::Cyan)
}

pub fn label_focused() -> Style {
    Style::new().fg(Color::Cyan).bold()
}

pub fn field() -> Style {
    Style::new().bg(Color::DarkGrey)
}

pub fn field_placeholder() -> Style {
    Style::new().bg(Color::DarkGrey).dim()
}

pub fn field_cursor() -> Style {
    Style::new().reverse()
}

pub fn error_text() -> Style {
    Style::new().fg(Color::Red)
}

pub fn result_value() -> Style {
    Style::new().fg(Color::Green).bold()
}

pub fn result_category() -> Style {
    Style::new()
}

pub fn muted() -> Style {
    Style::new().dim()
}

pub fn status_bar() -> Style {
    Style::new().fg(Color::Black).bg(Color::Grey)
}
