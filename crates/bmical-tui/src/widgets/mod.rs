#![forbid(unsafe_code)]

//! Widget library for the form.

pub mod block;
pub mod text_field;

pub use block::Block;
pub use text_field::TextField;

use crate::render::{Buffer, Rect};

/// Anything that can draw itself into a buffer area.
pub trait Widget {
    fn render(&self, area: Rect, buffer: &mut Buffer);
}
