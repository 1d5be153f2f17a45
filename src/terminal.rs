//! Terminal capabilities consumed by the player.
//!
//! The player needs two things from the outside world: the terminal size,
//! queried once per session, and a surface it can clear, write to and flush.
//! Both are traits so playback can be driven against fixed sizes and
//! in-memory surfaces.

use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    terminal::{Clear, ClearType},
};

use crate::TerminalSize;

/// Source of terminal dimensions.
pub trait TerminalSizeProvider {
    /// Query the current terminal size in character cells.
    fn terminal_size(&self) -> io::Result<TerminalSize>;
}

/// Output target for frame draws.
pub trait TerminalSurface {
    /// Clear the whole screen and home the cursor.
    fn clear(&mut self) -> io::Result<()>;

    fn write_text(&mut self, text: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()>;
}

/// Size provider backed by the controlling terminal.
#[derive(Clone, Copy, Debug, Default)]
pub struct CrosstermSize;

impl TerminalSizeProvider for CrosstermSize {
    fn terminal_size(&self) -> io::Result<TerminalSize> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(TerminalSize::new(width, height))
    }
}

/// Provider that always reports the same size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSize(pub TerminalSize);

impl TerminalSizeProvider for FixedSize {
    fn terminal_size(&self) -> io::Result<TerminalSize> {
        Ok(self.0)
    }
}

/// Surface that emits ANSI clear sequences into any writer.
#[derive(Debug)]
pub struct CrosstermSurface<W: Write> {
    out: W,
}

impl CrosstermSurface<io::Stdout> {
    /// Surface over the process's standard output.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> CrosstermSurface<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> TerminalSurface for CrosstermSurface<W> {
    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.out.write_all(text.as_bytes())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// In-memory surface recording every flushed screen.
///
/// Text written since the last clear is collected and pushed to
/// [`RecordingSurface::screens`] on flush.
#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pending: String,
    screens: Vec<String>,
    clears: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screens flushed so far, oldest first.
    pub fn screens(&self) -> &[String] {
        &self.screens
    }

    /// Number of times the screen was cleared.
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl TerminalSurface for RecordingSurface {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        self.pending.clear();
        Ok(())
    }

    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.pending.push_str(text);
        Ok(())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.screens.push(std::mem::take(&mut self.pending));
        Ok(())
    }
}
