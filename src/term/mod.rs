//! The terminal device the watch loop draws on.

pub mod interrupt;
pub mod raw;

use std::io::{self, IsTerminal, Stdout, Write};

use tracing::debug;

pub use interrupt::{Cancellation, Interrupt};
pub use raw::RawMode;

use crate::core::geometry::{TermSize, terminal_geometry};

/// Screen + input-mode operations the watch loop needs.
pub trait Terminal {
    /// Switch input to raw mode.
    fn enter_raw(&mut self) -> io::Result<()>;
    /// Undo [`Terminal::enter_raw`]. Must be a no-op when raw mode is off.
    fn restore(&mut self) -> io::Result<()>;
    /// Current size; called once per frame.
    fn size(&mut self) -> TermSize;
    fn out(&mut self) -> &mut dyn Write;
}

/// The process's own terminal: stdin for the mode, stdout for drawing.
pub struct Tty {
    raw: Option<RawMode>,
    out: Stdout,
}

impl Tty {
    #[must_use]
    pub fn new() -> Self {
        Self {
            raw: None,
            out: io::stdout(),
        }
    }
}

impl Default for Tty {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal for Tty {
    fn enter_raw(&mut self) -> io::Result<()> {
        if self.raw.is_some() {
            return Ok(());
        }
        if !io::stdin().is_terminal() {
            debug!("stdin is not a terminal, skipping raw mode");
            return Ok(());
        }
        self.raw = Some(RawMode::enable()?);
        Ok(())
    }

    fn restore(&mut self) -> io::Result<()> {
        match self.raw.take() {
            Some(mode) => mode.restore(),
            None => Ok(()),
        }
    }

    fn size(&mut self) -> TermSize {
        terminal_geometry()
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}
