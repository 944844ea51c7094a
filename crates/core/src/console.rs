//! Collaborator seams: where the game meets a keyboard and a screen.
//!
//! The core never performs I/O itself. The terminal crates implement these
//! traits with crossterm, tests implement them with plain in-memory values.

use anyhow::Result;

use crate::types::GameKey;

/// Polled keyboard state.
pub trait KeySource {
    /// Drain whatever the device has queued since the previous poll.
    fn poll(&mut self) -> Result<()> {
        Ok(())
    }

    /// Whether `key` is currently held.
    fn is_down(&self, key: GameKey) -> bool;
}

/// Line-oriented text sink.
pub trait ConsoleOutput {
    fn clear(&mut self) -> Result<()>;

    fn write(&mut self, text: &str) -> Result<()>;

    fn write_line(&mut self, text: &str) -> Result<()>;

    /// Push everything written so far to the device.
    fn flush(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<K: KeySource + ?Sized> KeySource for &mut K {
    fn poll(&mut self) -> Result<()> {
        (**self).poll()
    }

    fn is_down(&self, key: GameKey) -> bool {
        (**self).is_down(key)
    }
}

impl<O: ConsoleOutput + ?Sized> ConsoleOutput for &mut O {
    fn clear(&mut self) -> Result<()> {
        (**self).clear()
    }

    fn write(&mut self, text: &str) -> Result<()> {
        (**self).write(text)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        (**self).write_line(text)
    }

    fn flush(&mut self) -> Result<()> {
        (**self).flush()
    }
}
