//! In-memory console holding the most recent frame as plain lines.

use anyhow::Result;

use crate::core::ConsoleOutput;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextConsole {
    lines: Vec<String>,
    partial: String,
    clears: u64,
}

impl TextConsole {
    pub fn new() -> Self {
        Self::default()
    }

    /// Completed lines written since the last clear.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Text written after the last completed line.
    pub fn partial(&self) -> &str {
        &self.partial
    }

    /// How many times the console was cleared, i.e. frames started.
    pub fn clears(&self) -> u64 {
        self.clears
    }

    /// Current frame joined with `\n`.
    pub fn text(&self) -> String {
        let mut s = self.lines.join("\n");
        if !self.partial.is_empty() {
            if !s.is_empty() {
                s.push('\n');
            }
            s.push_str(&self.partial);
        }
        s
    }
}

impl ConsoleOutput for TextConsole {
    fn clear(&mut self) -> Result<()> {
        self.lines.clear();
        self.partial.clear();
        self.clears += 1;
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.partial.push_str(text);
        Ok(())
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        self.partial.push_str(text);
        self.lines.push(std::mem::take(&mut self.partial));
        Ok(())
    }
}
