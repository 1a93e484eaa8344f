//! Terminal session guard.
//!
//! Enters raw mode, switches to the alternate screen, hides the cursor, and
//! enables mouse capture; restores everything on drop, including when the
//! render loop unwinds. Keeping this separate from the engine lets tests
//! drive the full lifecycle headlessly.

use std::io::{self, stdout};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

/// RAII guard for the terminal state the gallery needs.
pub struct TerminalSession {
    _private: (),
}

impl TerminalSession {
    /// Take over the terminal.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnterAlternateScreen, Hide, EnableMouseCapture)?;
        Ok(Self { _private: () })
    }

    /// Current terminal size in cells.
    pub fn size() -> io::Result<(u16, u16)> {
        crossterm::terminal::size()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
