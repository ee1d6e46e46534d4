//! Output buffer - batched terminal writes.
//!
//! Escape sequences and text accumulate in memory and reach the terminal in
//! a single write, which keeps partially-drawn frames off the screen.

use std::io::{self, Write};

/// Byte buffer that flushes to stdout in one syscall.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buf: Vec<u8>,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self { buf: Vec::with_capacity(16 * 1024) }
    }

    /// Write the accumulated bytes to stdout and clear the buffer.
    pub fn flush_stdout(&mut self) -> io::Result<()> {
        let mut stdout = io::stdout().lock();
        stdout.write_all(&self.buf)?;
        stdout.flush()?;
        self.buf.clear();
        Ok(())
    }

    /// Number of pending bytes (for tests).
    pub fn pending(&self) -> usize {
        self.buf.len()
    }
}

// crossterm's queue! macro targets any io::Write
impl Write for OutputBuffer {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
