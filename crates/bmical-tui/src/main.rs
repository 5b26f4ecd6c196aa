#![forbid(unsafe_code)]

//! Terminal BMI form binary entry point.

use std::io::{self, BufWriter};

use crossterm::event;

use bmical_tui::app::{BmiApp, Cmd};
use bmical_tui::msg::Msg;
use bmical_tui::render::{self, Buffer};
use bmical_tui::terminal::TerminalSession;

fn main() -> io::Result<()> {
    let session = TerminalSession::new()?;
    let mut app = BmiApp::new();
    let mut out = BufWriter::new(io::stdout());

    loop {
        let (width, height) = session.size()?;
        let mut buffer = Buffer::new(width, height);
        app.view(&mut buffer);
        render::present(&buffer, &mut out)?;

        let msg = Msg::from(event::read()?);
        if app.update(msg) == Cmd::Quit {
            break;
        }
    }
    Ok(())
}
