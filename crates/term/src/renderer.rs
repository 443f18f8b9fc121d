//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Every draw is a full redraw. Two backends share the same framebuffer input:
//!
//! - [`RenderMode::EscapeStream`] walks the grid row-major into one byte
//!   buffer and switches color only where the tag changes between cells.
//! - [`RenderMode::RunGrouped`] positions the cursor at each row, splits it
//!   into same-tag runs and prints each run with a single color change. The
//!   commands are queued straight onto the output so consoles without escape
//!   support get native color calls.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, FrameBuffer};
use crate::palette::tag_color;
use crate::types::ColorTag;

/// Output backend, chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    EscapeStream,
    RunGrouped,
}

impl RenderMode {
    /// Pick the backend for a "rich color supported" capability flag.
    pub fn for_capability(rich_color: bool) -> Self {
        if rich_color {
            RenderMode::EscapeStream
        } else {
            RenderMode::RunGrouped
        }
    }
}

pub struct TerminalRenderer {
    stdout: io::Stdout,
    mode: RenderMode,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new(mode: RenderMode) -> Self {
        Self {
            stdout: io::stdout(),
            mode,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        let mut out = self.stdout.lock();
        out.queue(terminal::EnterAlternateScreen)?;
        out.queue(cursor::Hide)?;
        out.queue(terminal::DisableLineWrap)?;
        out.queue(terminal::Clear(terminal::ClearType::All))?;
        out.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        restore_terminal()
    }

    /// Draw a full frame with the configured backend.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        match self.mode {
            RenderMode::EscapeStream => {
                self.buf.clear();
                encode_escape_into(fb, &mut self.buf)?;
                let mut out = self.stdout.lock();
                out.write_all(&self.buf)?;
                out.flush()?;
            }
            RenderMode::RunGrouped => {
                let mut out = self.stdout.lock();
                encode_runs_into(fb, &mut out)?;
                out.flush()?;
            }
        }
        Ok(())
    }
}

/// Current terminal size as `(columns, rows)`.
pub fn terminal_size() -> Result<(u16, u16)> {
    Ok(terminal::size()?)
}

/// Put the terminal back into a usable state.
///
/// Safe to call more than once, and from a panic hook.
pub fn restore_terminal() -> Result<()> {
    let mut out = io::stdout().lock();
    out.queue(ResetColor)?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    out.queue(Print("\r\n"))?;
    out.flush()?;
    terminal::disable_raw_mode()?;
    Ok(())
}

/// Encode a full frame as one escape stream into `out`.
///
/// A color switch is emitted only when the tag differs from the previous
/// cell, so the number of switches tracks color transitions rather than cells.
pub fn encode_escape_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(cursor::MoveTo(0, 0))?;

    let mut current: Option<ColorTag> = None;
    for y in 0..fb.height() {
        for cell in fb.row(y) {
            if current != Some(cell.tag) {
                out.queue(SetForegroundColor(tag_color(cell.tag)))?;
                current = Some(cell.tag);
            }
            out.queue(Print(cell.ch))?;
        }
        if y + 1 < fb.height() {
            out.queue(Print("\r\n"))?;
        }
    }

    out.queue(ResetColor)?;
    Ok(())
}

/// Encode a full frame as cursor-positioned same-color runs into `out`.
pub fn encode_runs_into<W: Write>(fb: &FrameBuffer, out: &mut W) -> Result<()> {
    let mut run = String::with_capacity(fb.width() as usize * 4);
    for y in 0..fb.height() {
        let row = fb.row(y);
        out.queue(cursor::MoveTo(0, y))?;
        for_each_color_run(row, |start, len, tag| {
            run.clear();
            run.extend(row[start..start + len].iter().map(|c| c.ch));
            out.queue(SetForegroundColor(tag_color(tag)))?;
            out.queue(Print(&run))?;
            Ok(())
        })?;
    }
    out.queue(ResetColor)?;
    Ok(())
}

/// Call `f(start, len, tag)` for each maximal run of equal tags in `row`.
fn for_each_color_run(
    row: &[Cell],
    mut f: impl FnMut(usize, usize, ColorTag) -> Result<()>,
) -> Result<()> {
    let mut x = 0;
    while x < row.len() {
        let tag = row[x].tag;
        let start = x;
        x += 1;
        while x < row.len() && row[x].tag == tag {
            x += 1;
        }
        f(start, x - start, tag)?;
    }
    Ok(())
}
