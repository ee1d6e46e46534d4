//! Differential renderer.
//!
//! Compares the current frame to the previous one and rewrites only the
//! rows that changed. Output is wrapped in a synchronized update block and
//! flushed in a single syscall, which keeps updates flicker-free.

use std::io;

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{
        BeginSynchronizedUpdate, Clear, ClearType, EndSynchronizedUpdate,
        EnterAlternateScreen, LeaveAlternateScreen,
    },
};

use crate::types::{Attr, Line, Rgba, Span};

use super::buffer::Frame;
use super::output::OutputBuffer;

/// Row-diffing renderer for fullscreen mode.
///
/// Keeps the previous frame to enable diff rendering; only rows that changed
/// since the last frame are written.
pub struct DiffRenderer {
    output: OutputBuffer,
    previous: Option<Frame>,
}

impl DiffRenderer {
    /// Create a new diff renderer.
    pub fn new() -> Self {
        Self {
            output: OutputBuffer::new(),
            previous: None,
        }
    }

    /// Render a frame, writing only changed rows.
    ///
    /// Returns true if anything was written.
    pub fn render(&mut self, frame: &Frame) -> io::Result<bool> {
        let mut has_changes = false;

        queue!(self.output, BeginSynchronizedUpdate)?;

        let same_size = self
            .previous
            .as_ref()
            .is_some_and(|prev| prev.width() == frame.width() && prev.height() == frame.height());

        for y in 0..frame.height() {
            let line = frame.line(y);
            let changed = match (&self.previous, same_size) {
                (Some(prev), true) => prev.line(y) != line,
                _ => true,
            };

            if changed {
                has_changes = true;
                queue!(self.output, MoveTo(0, y), Clear(ClearType::UntilNewLine))?;
                if let Some(line) = line {
                    self.queue_line(line)?;
                }
            }
        }

        queue!(self.output, EndSynchronizedUpdate)?;
        self.output.flush_stdout()?;

        self.previous = Some(frame.clone());

        Ok(has_changes)
    }

    /// Invalidate the previous frame; the next render is a full redraw.
    pub fn invalidate(&mut self) {
        self.previous = None;
    }

    /// Check if there is a previous frame to diff against.
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }

    /// Enter fullscreen mode (alternate screen buffer, hidden cursor).
    pub fn enter_fullscreen(&mut self) -> io::Result<()> {
        queue!(
            self.output,
            EnterAlternateScreen,
            Hide,
            Clear(ClearType::All)
        )?;
        self.output.flush_stdout()?;
        self.invalidate();
        Ok(())
    }

    /// Exit fullscreen mode.
    pub fn exit_fullscreen(&mut self) -> io::Result<()> {
        queue!(
            self.output,
            ResetColor,
            SetAttribute(Attribute::Reset),
            Show,
            LeaveAlternateScreen
        )?;
        self.output.flush_stdout()
    }

    fn queue_line(&mut self, line: &Line) -> io::Result<()> {
        for span in &line.spans {
            self.queue_span(span)?;
        }
        Ok(())
    }

    fn queue_span(&mut self, span: &Span) -> io::Result<()> {
        queue!(self.output, SetForegroundColor(to_color(span.fg)))?;
        for attribute in to_attributes(span.attrs) {
            queue!(self.output, SetAttribute(attribute))?;
        }
        queue!(
            self.output,
            Print(&span.text),
            SetAttribute(Attribute::Reset),
            ResetColor
        )
    }
}

impl Default for DiffRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Map an [`Rgba`] onto a crossterm color.
fn to_color(color: Rgba) -> Color {
    if color.is_terminal_default() {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r as u8,
            g: color.g as u8,
            b: color.b as u8,
        }
    }
}

/// Expand attribute flags into crossterm attributes.
fn to_attributes(attrs: Attr) -> Vec<Attribute> {
    let mut out = Vec::new();
    if attrs.contains(Attr::BOLD) {
        out.push(Attribute::Bold);
    }
    if attrs.contains(Attr::DIM) {
        out.push(Attribute::Dim);
    }
    if attrs.contains(Attr::ITALIC) {
        out.push(Attribute::Italic);
    }
    if attrs.contains(Attr::UNDERLINE) {
        out.push(Attribute::Underlined);
    }
    if attrs.contains(Attr::REVERSE) {
        out.push(Attribute::Reverse);
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
