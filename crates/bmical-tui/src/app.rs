#![forbid(unsafe_code)]

//! The form model: engine, fields, focus, and the card layout.
//!
//! Elm-style: [`BmiApp::update`] folds messages into state and returns a
//! command, [`BmiApp::view`] renders the state into a buffer. Every
//! accepted edit is pushed into the engine immediately, so the engine's
//! raw text always mirrors what the fields show.

use bmical_core::BmiEngine;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

use crate::msg::Msg;
use crate::render::{Buffer, Rect, Style};
use crate::theme;
use crate::widgets::{Block, TextField, Widget};

/// Card geometry: wide enough for the description line, tall enough for
/// the two fields and a two-row outcome area.
const CARD_WIDTH: u16 = 56;
const CARD_HEIGHT: u16 = 9;
const LABEL_WIDTH: u16 = 14;

const DESCRIPTION: &str = "Enter your height and weight to calculate your BMI.";
const STATUS_HINTS: &str = "Tab: switch field | Enter: calculate | Esc: quit";

/// Side effect requested by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cmd {
    #[default]
    None,
    Quit,
}

/// Which field currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Height,
    Weight,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Self::Height => Self::Weight,
            Self::Weight => Self::Height,
        }
    }

    fn prev(self) -> Self {
        // Two fields: forward and backward are the same swap.
        self.next()
    }

    fn label(self) -> &'static str {
        match self {
            Self::Height => "height (cm)",
            Self::Weight => "weight (kg)",
        }
    }
}

pub struct BmiApp {
    engine: BmiEngine,
    height_field: TextField,
    weight_field: TextField,
    focus: Focus,
    status_text: String,
}

impl Default for BmiApp {
    fn default() -> Self {
        Self::new()
    }
}

impl BmiApp {
    pub fn new() -> Self {
        let height_field = TextField::new()
            .with_placeholder("e.g. 170")
            .with_style(theme::field())
            .with_placeholder_style(theme::field_placeholder())
            .with_cursor_style(theme::field_cursor())
            .with_focused(true);
        let weight_field = TextField::new()
            .with_placeholder("e.g. 70")
            .with_style(theme::field())
            .with_placeholder_style(theme::field_placeholder())
            .with_cursor_style(theme::field_cursor());

        let mut app = Self {
            engine: BmiEngine::new(),
            height_field,
            weight_field,
            focus: Focus::Height,
            status_text: String::new(),
        };
        app.update_status();
        app
    }

    /// The engine, for inspection.
    #[must_use]
    pub fn engine(&self) -> &BmiEngine {
        &self.engine
    }

    #[must_use]
    pub fn focus(&self) -> Focus {
        self.focus
    }

    #[must_use]
    pub fn status_text(&self) -> &str {
        &self.status_text
    }

    // ── Update ────────────────────────────────────────────────────────

    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::Key(key) => self.handle_key(&key),
            // The next view call reads the new size from its buffer.
            Msg::Resize { .. } | Msg::Noop => Cmd::None,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> Cmd {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return Cmd::None;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Cmd::Quit;
        }
        match key.code {
            KeyCode::Esc => Cmd::Quit,
            KeyCode::Tab | KeyCode::Down => {
                self.set_focus(self.focus.next());
                Cmd::None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.set_focus(self.focus.prev());
                Cmd::None
            }
            KeyCode::Enter => {
                let _ = self.engine.compute();
                self.update_status();
                Cmd::None
            }
            _ => {
                self.edit_focused_field(key);
                Cmd::None
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.height_field.set_focused(focus == Focus::Height);
        self.weight_field.set_focused(focus == Focus::Weight);
        self.update_status();
    }

    /// Route an edit key to the focused field and mirror the accepted
    /// value into the engine. This is the explicit setter boundary: the
    /// engine sees every keystroke's result, verbatim.
    fn edit_focused_field(&mut self, key: &KeyEvent) {
        let changed = match self.focus {
            Focus::Height => self.height_field.handle_key(key),
            Focus::Weight => self.weight_field.handle_key(key),
        };
        if changed {
            match self.focus {
                Focus::Height => self.engine.set_height(self.height_field.value()),
                Focus::Weight => self.engine.set_weight(self.weight_field.value()),
            }
            self.update_status();
        }
    }

    fn update_status(&mut self) {
        self.status_text = match self.engine.outcome() {
            Some(Ok(reading)) => format!("BMI {reading}"),
            Some(Err(err)) => err.to_string(),
            None => format!("Editing {}", self.focus.label()),
        };
    }

    // ── View ──────────────────────────────────────────────────────────

    pub fn view(&self, buffer: &mut Buffer) {
        let area = buffer.area();
        if area.is_empty() {
            return;
        }
        let body = Rect::new(0, 0, area.width, area.height - 1);
        self.render_card(buffer, body);
        self.render_status_bar(buffer, Rect::new(0, area.height - 1, area.width, 1));
    }

    fn render_card(&self, buffer: &mut Buffer, body: Rect) {
        let card = body.centered(CARD_WIDTH, CARD_HEIGHT);
        let block = Block::new()
            .title("BMI Calculator")
            .border_style(theme::card_border())
            .title_style(theme::card_title());
        let inner = block.inner(card);
        block.render(card, buffer);
        if inner.is_empty() {
            return;
        }

        draw_centered(buffer, inner.row(0), DESCRIPTION, theme::description());
        self.render_field_row(
            buffer,
            inner.row(2),
            "Height (cm):",
            &self.height_field,
            self.focus == Focus::Height,
        );
        self.render_field_row(
            buffer,
            inner.row(3),
            "Weight (kg):",
            &self.weight_field,
            self.focus == Focus::Weight,
        );
        self.render_outcome(buffer, inner);
    }

    fn render_field_row(
        &self,
        buffer: &mut Buffer,
        row: Rect,
        label: &str,
        field: &TextField,
        focused: bool,
    ) {
        if row.is_empty() {
            return;
        }
        let label_style = if focused {
            theme::label_focused()
        } else {
            theme::label()
        };
        buffer.set_string(row.x, row.y, label, label_style, row.right());
        let label_width = LABEL_WIDTH.min(row.width);
        let field_area = Rect::new(row.x + label_width, row.y, row.width - label_width, 1);
        if !field_area.is_empty() {
            field.render(field_area, buffer);
        }
    }

    fn render_outcome(&self, buffer: &mut Buffer, inner: Rect) {
        match self.engine.outcome() {
            None => draw_centered(
                buffer,
                inner.row(5),
                "Press Enter to calculate.",
                theme::muted(),
            ),
            Some(Err(err)) => {
                draw_centered(buffer, inner.row(5), &err.to_string(), theme::error_text());
            }
            Some(Ok(reading)) => {
                draw_centered(
                    buffer,
                    inner.row(5),
                    &format!("{:.1}", reading.bmi),
                    theme::result_value(),
                );
                draw_centered(
                    buffer,
                    inner.row(6),
                    reading.category.label(),
                    theme::result_category(),
                );
            }
        }
    }

    fn render_status_bar(&self, buffer: &mut Buffer, row: Rect) {
        if row.is_empty() {
            return;
        }
        buffer.fill_row(row, theme::status_bar());
        buffer.set_string(row.x + 1, row.y, STATUS_HINTS, theme::status_bar(), row.right());

        // Right-aligned status, only when it fits next to the hints.
        let hints_width = text_width(STATUS_HINTS);
        let status_width = text_width(&self.status_text);
        if row.width > hints_width.saturating_add(status_width).saturating_add(3) {
            let x = row.right() - status_width - 1;
            buffer.set_string(x, row.y, &self.status_text, theme::status_bar(), row.right());
        }
    }
}

fn text_width(text: &str) -> u16 {
    UnicodeWidthStr::width(text).min(usize::from(u16::MAX)) as u16
}

fn draw_centered(buffer: &mut Buffer, row: Rect, text: &str, style: Style) {
    if row.is_empty() {
        return;
    }
    let width = text_width(text).min(row.width);
    let x = row.x + (row.width - width) / 2;
    buffer.set_string(x, row.y, text, style, row.right());
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmical_core::BmiCategory;

    fn press(code: KeyCode) -> Msg {
        Msg::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut BmiApp, text: &str) {
        for c in text.chars() {
            app.update(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn initial_state() {
        let app = BmiApp::new();
        assert_eq!(app.focus(), Focus::Height);
        assert_eq!(app.engine().height_text(), "");
        assert_eq!(app.engine().weight_text(), "");
        assert_eq!(app.status_text(), "Editing height (cm)");
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = BmiApp::new();
        app.update(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Weight);
        assert_eq!(app.status_text(), "Editing weight (kg)");
        app.update(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Height);
        app.update(press(KeyCode::BackTab));
        assert_eq!(app.focus(), Focus::Weight);
    }

    #[test]
    fn typing_mirrors_into_the_engine() {
        let mut app = BmiApp::new();
        type_text(&mut app, "170");
        assert_eq!(app.engine().height_text(), "170");
        app.update(press(KeyCode::Tab));
        type_text(&mut app, "70");
        assert_eq!(app.engine().weight_text(), "70");
        // Backspace mirrors too.
        app.update(press(KeyCode::Backspace));
        assert_eq!(app.engine().weight_text(), "7");
    }

    #[test]
    fn enter_computes_a_reading() {
        let mut app = BmiApp::new();
        type_text(&mut app, "170");
        app.update(press(KeyCode::Tab));
        type_text(&mut app, "70");
        app.update(press(KeyCode::Enter));

        let reading = app.engine().reading().unwrap();
        assert_eq!(reading.bmi, 24.2);
        assert_eq!(reading.category, BmiCategory::Normal);
        assert_eq!(app.status_text(), "BMI 24.2 (Normal)");
    }

    #[test]
    fn enter_without_input_reports_missing_input() {
        let mut app = BmiApp::new();
        app.update(press(KeyCode::Enter));
        assert_eq!(
            app.status_text(),
            "Please enter both height and weight."
        );
        assert!(app.engine().reading().is_none());
    }

    #[test]
    fn esc_quits() {
        let mut app = BmiApp::new();
        assert_eq!(app.update(press(KeyCode::Esc)), Cmd::Quit);
    }

    #[test]
    fn ctrl_c_quits() {
        let mut app = BmiApp::new();
        let chord = Msg::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(app.update(chord), Cmd::Quit);
    }

    #[test]
    fn release_events_do_nothing() {
        let mut app = BmiApp::new();
        let release = Msg::Key(KeyEvent::new_with_kind(
            KeyCode::Esc,
            KeyModifiers::NONE,
            KeyEventKind::Release,
        ));
        assert_eq!(app.update(release), Cmd::None);
    }

    #[test]
    fn resize_is_a_no_op_command() {
        let mut app = BmiApp::new();
        assert_eq!(
            app.update(Msg::Resize {
                width: 10,
                height: 5
            }),
            Cmd::None
        );
    }
}
