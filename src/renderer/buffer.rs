//! Frame buffer - one screenful of styled lines.

use unicode_width::UnicodeWidthChar;

use crate::types::{Line, Span};

/// A full-screen frame: `height` rows of styled lines, each at most `width`
/// cells wide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    width: u16,
    height: u16,
    lines: Vec<Line>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            lines: vec![Line::empty(); height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Row at `y`, if in bounds.
    pub fn line(&self, y: u16) -> Option<&Line> {
        self.lines.get(y as usize)
    }

    /// Replace the row at `y`, truncating to the frame width.
    /// Out-of-bounds writes are ignored.
    pub fn set_line(&mut self, y: u16, line: Line) {
        if let Some(slot) = self.lines.get_mut(y as usize) {
            *slot = truncate_line(line, self.width as usize);
        }
    }
}

/// Truncate a line to `max_width` display cells, preserving span styles.
///
/// Wide characters that would straddle the boundary are dropped entirely.
pub fn truncate_line(line: Line, max_width: usize) -> Line {
    if line.width() <= max_width {
        return line;
    }

    let mut out = Line::empty();
    let mut used = 0;

    for span in line.spans {
        if used >= max_width {
            break;
        }

        let mut text = String::new();
        for c in span.text.chars() {
            let w = c.width().unwrap_or(0);
            if used + w > max_width {
                break;
            }
            used += w;
            text.push(c);
        }

        if !text.is_empty() {
            out.push(Span {
                text,
                fg: span.fg,
                attrs: span.attrs,
            });
        }
    }

    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Attr, Rgba};

    #[test]
    fn test_new_frame_is_empty() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.height(), 24);
        assert_eq!(frame.line(0), Some(&Line::empty()));
        assert_eq!(frame.line(24), None);
    }

    #[test]
    fn test_set_line_truncates_to_width() {
        let mut frame = Frame::new(5, 1);
        frame.set_line(0, Line::plain("hello world"));
        assert_eq!(frame.line(0).map(Line::text), Some("hello".to_string()));
    }

    #[test]
    fn test_set_line_out_of_bounds_is_ignored() {
        let mut frame = Frame::new(5, 1);
        frame.set_line(9, Line::plain("x"));
        assert_eq!(frame.line(0), Some(&Line::empty()));
    }

    #[test]
    fn test_truncate_preserves_styles() {
        let mut line = Line::empty();
        line.push(Span::new("ab", Rgba::GRAY, Attr::BOLD));
        line.push(Span::new("cd", Rgba::WHITE, Attr::NONE));

        let out = truncate_line(line, 3);
        assert_eq!(out.spans.len(), 2);
        assert_eq!(out.spans[0].text, "ab");
        assert_eq!(out.spans[0].attrs, Attr::BOLD);
        assert_eq!(out.spans[1].text, "c");
    }

    #[test]
    fn test_truncate_drops_straddling_wide_char() {
        // Each CJK char is two cells; the second one would straddle cell 3
        let out = truncate_line(Line::plain("日本語"), 3);
        assert_eq!(out.text(), "日");
        assert_eq!(out.width(), 2);
    }
}
