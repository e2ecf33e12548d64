//! In-place terminal repaint.

use std::io::{self, Write};

use crossterm::{cursor, queue, style::Print, terminal};

use crate::render::table::display_width;

/// Sink for the live dashboard block.
pub trait Repaint {
    /// Replace the previously written block with `text`.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Leave the last block on screen and stop repainting over it.
    fn done(&mut self) -> io::Result<()>;
}

/// Repaints a block of lines in place using ANSI cursor movement.
///
/// Lines wider than the terminal wrap onto several screen rows; the block
/// height is counted in screen rows so the next repaint moves up far enough.
pub struct TerminalRepaint<W: Write> {
    out: W,
    /// Fixed column count; `None` asks the terminal on every write.
    width: Option<u16>,
    previous_rows: u16,
    cursor_hidden: bool,
}

impl TerminalRepaint<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalRepaint<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            width: None,
            previous_rows: 0,
            cursor_hidden: false,
        }
    }

    /// Wrap at `columns` instead of the terminal's reported width.
    pub fn with_width(mut self, columns: u16) -> Self {
        self.width = Some(columns);
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn columns(&self) -> Option<u16> {
        self.width
            .or_else(|| terminal::size().ok().map(|(cols, _)| cols))
            .filter(|cols| *cols > 0)
    }
}

/// Screen rows one logical line occupies once the terminal wraps it.
fn screen_rows(line: &str, columns: Option<u16>) -> u16 {
    let width = display_width(&strip_ansi_escapes::strip_str(line));
    match columns {
        Some(cols) if width > usize::from(cols) => {
            u16::try_from(width.div_ceil(usize::from(cols))).unwrap_or(u16::MAX)
        }
        _ => 1,
    }
}

impl<W: Write> Repaint for TerminalRepaint<W> {
    fn write(&mut self, text: &str) -> io::Result<()> {
        if !self.cursor_hidden {
            queue!(self.out, cursor::Hide)?;
            self.cursor_hidden = true;
        }
        if self.previous_rows > 0 {
            queue!(self.out, cursor::MoveToPreviousLine(self.previous_rows))?;
        }
        queue!(self.out, terminal::Clear(terminal::ClearType::FromCursorDown))?;

        let columns = self.columns();
        let mut rows: u16 = 0;
        for line in text.lines() {
            queue!(self.out, Print(line), Print("\n"))?;
            rows = rows.saturating_add(screen_rows(line, columns));
        }
        self.previous_rows = rows;

        self.out.flush()
    }

    fn done(&mut self) -> io::Result<()> {
        if self.cursor_hidden {
            queue!(self.out, cursor::Show)?;
            self.cursor_hidden = false;
        }
        self.previous_rows = 0;
        self.out.flush()
    }
}
