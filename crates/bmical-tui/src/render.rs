#![forbid(unsafe_code)]

//! Minimal render kernel: a char-cell buffer plus a crossterm paint pass.
//!
//! The app draws into a [`Buffer`] headlessly (tests snapshot it as text),
//! and [`present`] paints a finished buffer to the terminal, grouping each
//! row into runs of identical style. The whole UI is one small card, so a
//! full repaint per event replaces any diffing machinery.
//!
//! Cells hold a single scalar: a wide grapheme paints its first scalar and
//! blanks the spill cell. Sufficient for a numeric form.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// A rectangular region in cell coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Rect {
    #[must_use]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// First column past the right edge.
    #[must_use]
    pub const fn right(self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// First row past the bottom edge.
    #[must_use]
    pub const fn bottom(self) -> u16 {
        self.y.saturating_add(self.height)
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// A `width` x `height` rect centered in `self`, clamped to fit.
    #[must_use]
    pub fn centered(self, width: u16, height: u16) -> Self {
        let w = width.min(self.width);
        let h = height.min(self.height);
        Self::new(
            self.x + (self.width - w) / 2,
            self.y + (self.height - h) / 2,
            w,
            h,
        )
    }

    /// The single-row rect `dy` rows below the top, empty when out of range.
    #[must_use]
    pub fn row(self, dy: u16) -> Self {
        if dy >= self.height {
            return Self::default();
        }
        Self::new(self.x, self.y + dy, self.width, 1)
    }
}

/// Terminal text style. `None` color fields keep the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: bool,
    pub dim: bool,
    pub reverse: bool,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            bold: false,
            dim: false,
            reverse: false,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    #[must_use]
    pub const fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    #[must_use]
    pub const fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Overlay `other` on `self`: set color fields win, flag fields or.
    #[must_use]
    pub fn patch(self, other: Self) -> Self {
        Self {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            bold: self.bold || other.bold,
            dim: self.dim || other.dim,
            reverse: self.reverse || other.reverse,
        }
    }
}

/// One terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: Style,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::new(),
        }
    }
}

/// A width x height grid of cells.
#[derive(Debug, Clone)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a blank buffer.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::default(); usize::from(width) * usize::from(height)],
        }
    }

    #[must_use]
    pub fn width(&self) -> u16 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u16 {
        self.height
    }

    /// The full buffer area.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(usize::from(y) * usize::from(self.width) + usize::from(x))
        } else {
            None
        }
    }

    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Write one cell. Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, ch: char, style: Style) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = Cell { ch, style };
        }
    }

    /// Write a string starting at `(x, y)`, clipped at `max_x` and the
    /// buffer edge. Wide graphemes blank their spill cell. Returns the
    /// column after the last cell written.
    pub fn set_string(&mut self, x: u16, y: u16, text: &str, style: Style, max_x: u16) -> u16 {
        let limit = max_x.min(self.width);
        let mut x = x;
        for grapheme in text.graphemes(true) {
            let w = UnicodeWidthStr::width(grapheme).max(1) as u16;
            if x >= limit || limit - x < w {
                break;
            }
            let ch = grapheme.chars().next().unwrap_or(' ');
            self.set(x, y, ch, style);
            for pad in 1..w {
                self.set(x + pad, y, ' ', style);
            }
            x += w;
        }
        x
    }

    /// Fill a single row segment with blanks in the given style.
    pub fn fill_row(&mut self, area: Rect, style: Style) {
        if area.is_empty() {
            return;
        }
        for x in area.x..area.right() {
            self.set(x, area.y, ' ', style);
        }
    }

    /// Row contents as plain text with trailing blanks trimmed.
    ///
    /// Snapshot-test helper; styling is not included.
    #[must_use]
    pub fn row_text(&self, y: u16) -> String {
        let mut out = String::new();
        for x in 0..self.width {
            if let Some(cell) = self.get(x, y) {
                out.push(cell.ch);
            }
        }
        out.trim_end().to_string()
    }
}

/// Paint a buffer to the terminal.
///
/// Every row is repainted; runs of identical style become one print call.
/// The buffer covers the whole screen, so no clear is needed and nothing
/// flickers.
pub fn present<W: Write>(buffer: &Buffer, out: &mut W) -> io::Result<()> {
    for y in 0..buffer.height() {
        queue!(out, MoveTo(0, y))?;
        let mut x = 0;
        while x < buffer.width() {
            let style = buffer.get(x, y).map_or_else(Style::new, |cell| cell.style);
            let mut run = String::new();
            while x < buffer.width() {
                match buffer.get(x, y) {
                    Some(cell) if cell.style == style => {
                        run.push(cell.ch);
                        x += 1;
                    }
                    _ => break,
                }
            }
            apply_style(out, style)?;
            queue!(out, Print(&run), SetAttribute(Attribute::Reset), ResetColor)?;
        }
    }
    out.flush()
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(fg))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(bg))?;
    }
    if style.bold {
        queue!(out, SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        queue!(out, SetAttribute(Attribute::Dim))?;
    }
    if style.reverse {
        queue!(out, SetAttribute(Attribute::Reverse))?;
    }
    Ok(())
}
