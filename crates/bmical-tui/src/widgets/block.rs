#![forbid(unsafe_code)]

//! Rounded-border box with a centered title.

use unicode_width::UnicodeWidthStr;

use crate::render::{Buffer, Rect, Style};
use crate::widgets::Widget;

const TOP_LEFT: char = '\u{256d}';
const TOP_RIGHT: char = '\u{256e}';
const BOTTOM_LEFT: char = '\u{2570}';
const BOTTOM_RIGHT: char = '\u{256f}';
const HORIZONTAL: char = '\u{2500}';
const VERTICAL: char = '\u{2502}';

/// A box drawn around a content area, with an optional title centered on
/// the top border.
#[derive(Debug, Clone, Default)]
pub struct Block<'a> {
    title: Option<&'a str>,
    border_style: Style,
    title_style: Style,
}

impl<'a> Block<'a> {
    /// Create a new block with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title displayed on the top border.
    #[must_use]
    pub fn title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the style applied to border characters.
    #[must_use]
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the style applied to the title.
    #[must_use]
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Compute the content area inside the borders.
    #[must_use]
    pub fn inner(&self, area: Rect) -> Rect {
        Rect::new(
            area.x.saturating_add(1),
            area.y.saturating_add(1),
            area.width.saturating_sub(2),
            area.height.saturating_sub(2),
        )
    }
}

impl Widget for Block<'_> {
    fn render(&self, area: Rect, buffer: &mut Buffer) {
        if area.width < 2 || area.height < 2 {
            return;
        }
        let right = area.right() - 1;
        let bottom = area.bottom() - 1;

        for x in area.x + 1..right {
            buffer.set(x, area.y, HORIZONTAL, self.border_style);
            buffer.set(x, bottom, HORIZONTAL, self.border_style);
        }
        for y in area.y + 1..bottom {
            buffer.set(area.x, y, VERTICAL, self.border_style);
            buffer.set(right, y, VERTICAL, self.border_style);
        }
        buffer.set(area.x, area.y, TOP_LEFT, self.border_style);
        buffer.set(right, area.y, TOP_RIGHT, self.border_style);
        buffer.set(area.x, bottom, BOTTOM_LEFT, self.border_style);
        buffer.set(right, bottom, BOTTOM_RIGHT, self.border_style);

        if let Some(title) = self.title {
            let text = format!(" {title} ");
            let width = UnicodeWidthStr::width(text.as_str()).min(usize::from(u16::MAX)) as u16;
            let slot = area.width.saturating_sub(2);
            if width <= slot {
                let x = area.x + 1 + (slot - width) / 2;
                buffer.set_string(x, area.y, &text, self.title_style, right);
            }
        }
    }
}
