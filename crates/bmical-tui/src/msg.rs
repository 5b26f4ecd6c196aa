#![forbid(unsafe_code)]

//! Messages driving the app model.

use crossterm::event::{Event, KeyEvent};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    Key(KeyEvent),
    Resize { width: u16, height: u16 },
    Noop,
}

impl From<Event> for Msg {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(key) => Msg::Key(key),
            Event::Resize(width, height) => Msg::Resize { width, height },
            _ => Msg::Noop,
        }
    }
}
