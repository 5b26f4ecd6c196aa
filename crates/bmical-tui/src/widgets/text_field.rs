#![forbid(unsafe_code)]

//! Single-line text input widget.
//!
//! [`TextField`] stores whatever the user types, verbatim. The form's
//! engine owns validation, so the field does no numeric filtering. The
//! cursor moves over grapheme clusters, and long values scroll
//! horizontally to keep the cursor visible.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::render::{Buffer, Rect, Style};
use crate::widgets::Widget;

/// Single-line input with placeholder, focus flag, and horizontal scroll.
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// Cursor as a grapheme index, `0..=grapheme count`.
    cursor: usize,
    placeholder: String,
    focused: bool,
    style: Style,
    placeholder_style: Style,
    cursor_style: Style,
}

impl TextField {
    /// Create a new empty field.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cursor_style: Style::new().reverse(),
            ..Self::default()
        }
    }

    /// Set the placeholder shown while the field is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the base style.
    #[must_use]
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Set the placeholder style.
    #[must_use]
    pub fn with_placeholder_style(mut self, style: Style) -> Self {
        self.placeholder_style = style;
        self
    }

    /// Set the style overlaid on the cursor cell while focused.
    #[must_use]
    pub fn with_cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }

    /// Set the initial focus state.
    #[must_use]
    pub fn with_focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position as a grapheme index.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    // ── Event handling ────────────────────────────────────────────────

    /// Handle a key press.
    ///
    /// Returns `true` if the value or cursor changed.
    pub fn handle_key(&mut self, key: &KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
            return false;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char(c) if !ctrl => {
                self.insert_char(c);
                true
            }
            KeyCode::Backspace => self.delete_backward(),
            KeyCode::Delete => self.delete_forward(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => false,
        }
    }

    /// Insert a character at the cursor. No filtering: validation is the
    /// engine's job.
    pub fn insert_char(&mut self, ch: char) {
        let byte = self.byte_offset(self.cursor);
        self.value.insert(byte, ch);
        // A combining mark can merge into the previous cluster, so clamp
        // instead of assuming the count grew.
        self.cursor = (self.cursor + 1).min(self.grapheme_count());
    }

    /// Delete the grapheme before the cursor.
    pub fn delete_backward(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = self.byte_offset(self.cursor - 1);
        let end = self.byte_offset(self.cursor);
        self.value.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the grapheme under the cursor.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let start = self.byte_offset(self.cursor);
        let end = self.byte_offset(self.cursor + 1);
        self.value.replace_range(start..end, "");
        true
    }

    pub fn move_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    pub fn move_right(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        self.cursor += 1;
        true
    }

    pub fn move_home(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor = 0;
        true
    }

    pub fn move_end(&mut self) -> bool {
        let end = self.grapheme_count();
        if self.cursor == end {
            return false;
        }
        self.cursor = end;
        true
    }

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    /// Byte offset of the grapheme at `index`, or the end of the value.
    fn byte_offset(&self, index: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(index)
            .map_or(self.value.len(), |(byte, _)| byte)
    }
}

impl Widget for TextField {
    fn render(&self, area: Rect, buffer: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        buffer.fill_row(area.row(0), self.style);

        if self.value.is_empty() {
            buffer.set_string(area.x, area.y, &self.placeholder, self.placeholder_style, area.right());
            if self.focused {
                let under = buffer.get(area.x, area.y).map_or(' ', |cell| cell.ch);
                buffer.set(area.x, area.y, under, self.style.patch(self.cursor_style));
            }
            return;
        }

        // Scroll so the cursor stays inside the visible window.
        let window = usize::from(area.width);
        let scroll = self.cursor.saturating_sub(window.saturating_sub(1));

        let mut x = area.x;
        for (index, grapheme) in self.value.graphemes(true).enumerate().skip(scroll) {
            let w = UnicodeWidthStr::width(grapheme).max(1) as u16;
            if area.right() - x < w {
                break;
            }
            let style = if self.focused && index == self.cursor {
                self.style.patch(self.cursor_style)
            } else {
                self.style
            };
            x = buffer.set_string(x, area.y, grapheme, style, area.right());
        }

        // Cursor past the last grapheme sits on the trailing blank.
        if self.focused && self.cursor >= self.grapheme_count() && x < area.right() {
            buffer.set(x, area.y, ' ', self.style.patch(self.cursor_style));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn field_with(text: &str) -> TextField {
        let mut field = TextField::new();
        field.set_value(text);
        field
    }

    #[test]
    fn typing_appends_at_the_cursor() {
        let mut field = TextField::new();
        for c in "170".chars() {
            assert!(field.handle_key(&press(KeyCode::Char(c))));
        }
        assert_eq!(field.value(), "170");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn characters_are_stored_verbatim() {
        let mut field = TextField::new();
        for c in " -1.7e2x".chars() {
            field.handle_key(&press(KeyCode::Char(c)));
        }
        assert_eq!(field.value(), " -1.7e2x");
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = field_with("10");
        field.handle_key(&press(KeyCode::Left));
        field.handle_key(&press(KeyCode::Char('7')));
        assert_eq!(field.value(), "170");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_removes_before_the_cursor() {
        let mut field = field_with("170");
        assert!(field.handle_key(&press(KeyCode::Backspace)));
        assert_eq!(field.value(), "17");
        assert!(!field_with("").handle_key(&press(KeyCode::Backspace)));
    }

    #[test]
    fn delete_removes_under_the_cursor() {
        let mut field = field_with("170");
        field.handle_key(&press(KeyCode::Home));
        assert!(field.handle_key(&press(KeyCode::Delete)));
        assert_eq!(field.value(), "70");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn movement_is_clamped_to_the_value() {
        let mut field = field_with("42");
        assert!(!field.move_right());
        assert!(field.move_left());
        assert!(field.move_left());
        assert!(!field.move_left());
        assert!(field.move_end());
        assert_eq!(field.cursor(), 2);
        assert!(field.move_home());
        assert!(!field.move_home());
    }

    #[test]
    fn cursor_moves_over_graphemes_not_bytes() {
        let mut field = field_with("é7");
        assert_eq!(field.cursor(), 2);
        field.handle_key(&press(KeyCode::Left));
        field.handle_key(&press(KeyCode::Left));
        assert_eq!(field.cursor(), 0);
        field.handle_key(&press(KeyCode::Delete));
        assert_eq!(field.value(), "7");
    }

    #[test]
    fn ctrl_chords_are_not_inserted() {
        let mut field = TextField::new();
        let chord = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(&chord));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut field = TextField::new();
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('x'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert!(!field.handle_key(&release));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn set_value_moves_the_cursor_to_the_end() {
        let mut field = TextField::new();
        field.set_value("180");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn renders_value_and_placeholder() {
        let mut buffer = Buffer::new(10, 2);
        field_with("170").render(Rect::new(0, 0, 10, 1), &mut buffer);
        assert_eq!(buffer.row_text(0), "170");

        let empty = TextField::new().with_placeholder("e.g. 170");
        empty.render(Rect::new(0, 1, 10, 1), &mut buffer);
        assert_eq!(buffer.row_text(1), "e.g. 170");
    }

    #[test]
    fn focused_cursor_cell_is_reversed() {
        let mut buffer = Buffer::new(10, 1);
        let field = field_with("42").with_focused(true);
        field.render(Rect::new(0, 0, 10, 1), &mut buffer);
        // Cursor sits after the value, on the trailing blank.
        assert!(buffer.get(2, 0).unwrap().style.reverse);
        assert!(!buffer.get(1, 0).unwrap().style.reverse);
    }

    #[test]
    fn long_values_scroll_to_keep_the_cursor_visible() {
        let mut buffer = Buffer::new(4, 1);
        let field = field_with("123456").with_focused(true);
        field.render(Rect::new(0, 0, 4, 1), &mut buffer);
        // Window of 4 ends with the cursor cell: "456" plus the blank.
        assert_eq!(buffer.row_text(0), "456");
        assert!(buffer.get(3, 0).unwrap().style.reverse);
    }

    #[test]
    fn zero_area_render_does_not_panic() {
        let mut buffer = Buffer::new(4, 1);
        field_with("42").render(Rect::new(0, 0, 0, 0), &mut buffer);
    }
}
