//! TerminalRenderer: presents text frames on a real terminal.
//!
//! Writes are queued as crossterm commands into a byte buffer and reach stdout
//! in one `write_all` on flush, so a clear and the frame drawn after it land
//! together.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Print, ResetColor, SetAttribute},
    terminal, QueueableCommand,
};

use crate::core::ConsoleOutput;

pub struct TerminalRenderer {
    stdout: io::Stdout,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Bytes queued since the last flush.
    pub fn pending(&self) -> &[u8] {
        &self.buf
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        self.buf.clear();
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleOutput for TerminalRenderer {
    /// Drop anything not yet flushed and start the next frame from a blank
    /// screen with the cursor at the origin.
    fn clear(&mut self) -> Result<()> {
        self.buf.clear();
        encode_clear_into(&mut self.buf)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.buf.queue(Print(text))?;
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        encode_line_into(text, &mut self.buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.flush_buf()
    }
}

/// Encode a full-screen clear that leaves the cursor at the origin.
pub fn encode_clear_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    out.queue(cursor::MoveTo(0, 0))?;
    Ok(())
}

/// Encode one line of text. Raw mode does not translate `\n`, so lines end
/// with an explicit carriage return.
pub fn encode_line_into(text: &str, out: &mut Vec<u8>) -> Result<()> {
    out.queue(Print(text))?;
    out.queue(Print("\r\n"))?;
    Ok(())
}
