//! Screen surface: the thin layer between the reader and the terminal.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use crossterm::{cursor, execute, queue, style, terminal};
use std::io::{self, BufWriter, Stdout, Write};
use std::panic;

/// Cell-addressed drawing target plus a blocking key source.
pub trait ScreenSurface {
    /// `(rows, cols)` of the drawable area.
    fn dimensions(&self) -> io::Result<(u16, u16)>;
    fn clear(&mut self) -> io::Result<()>;
    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()>;
    fn refresh(&mut self) -> io::Result<()>;
    /// Block until the next key press.
    fn read_key(&mut self) -> io::Result<KeyEvent>;
}

/// The real terminal, held in raw mode on the alternate screen with the
/// cursor hidden for as long as this value lives.
pub struct TerminalSurface {
    out: BufWriter<Stdout>,
    restored: bool,
}

impl TerminalSurface {
    pub fn acquire() -> io::Result<Self> {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            restore_terminal();
            original_hook(info);
        }));

        terminal::enable_raw_mode()?;
        let mut out = BufWriter::new(io::stdout());
        if let Err(err) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            restore_terminal();
            return Err(err);
        }
        Ok(TerminalSurface {
            out,
            restored: false,
        })
    }

    /// Hand the terminal back in its original mode. Safe to call twice.
    pub fn release(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = self.out.flush();
        restore_terminal();
    }
}

impl Drop for TerminalSurface {
    fn drop(&mut self) {
        self.release();
    }
}

fn restore_terminal() {
    let _ = execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show);
    let _ = terminal::disable_raw_mode();
}

impl ScreenSurface for TerminalSurface {
    fn dimensions(&self) -> io::Result<(u16, u16)> {
        let (cols, rows) = terminal::size()?;
        Ok((rows, cols))
    }

    fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    fn write_at(&mut self, row: u16, col: u16, text: &str) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(col, row), style::Print(text))
    }

    fn refresh(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn read_key(&mut self) -> io::Result<KeyEvent> {
        loop {
            // Resize, mouse and key-release events are not commands.
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(key),
                _ => continue,
            }
        }
    }
}
