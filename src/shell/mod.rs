//! Shell composition - persistent chrome around the routed content.
//!
//! The shell selects the top-level arm (home, docs subtree, not-found),
//! wraps it in the header bar, and - inside the docs arm - places the
//! navigation panel beside the content column. Everything here is a pure
//! function from immutable inputs to a [`Frame`]; mounting the terminal
//! itself (alternate screen, raw mode) happens once per session in the
//! pipeline.

use unicode_width::UnicodeWidthStr;

use crate::content::{self, Block, Page};
use crate::nav;
use crate::renderer::Frame;
use crate::route::shell::ShellResolution;
use crate::route::Resolution;
use crate::theme::Theme;
use crate::types::{Attr, Line, Span};

/// Width of the navigation panel column, separator included.
pub const PANEL_WIDTH: u16 = 28;

/// Header rows: brand bar plus separator rule.
pub const HEADER_HEIGHT: u16 = 2;

/// Footer rows: key hint bar.
pub const FOOTER_HEIGHT: u16 = 1;

/// Everything the composer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInput {
    pub width: u16,
    pub height: u16,
    pub path: String,
    pub resolution: ShellResolution,
    pub cursor: usize,
    pub scroll: usize,
    pub theme: Theme,
}

/// A composed frame plus the unclipped content height (for scroll bounds).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedFrame {
    pub frame: Frame,
    pub content_rows: usize,
}

/// Compose one full frame.
///
/// `highlights` looks up the refreshed display lines for the current view's
/// code samples by document order; `None` means the sample has not been
/// tokenized yet and its literal text renders plain (the refresher fills it
/// in after this frame is committed).
pub fn compose_frame(
    input: &ShellInput,
    highlights: &dyn Fn(usize) -> Option<Vec<Line>>,
) -> ComposedFrame {
    let mut frame = Frame::new(input.width, input.height);
    let theme = &input.theme;

    for (y, line) in header_lines(input).into_iter().enumerate() {
        frame.set_line(y as u16, line);
    }

    let body_top = HEADER_HEIGHT;
    let body_height = input
        .height
        .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT);

    let docs_arm = matches!(input.resolution, ShellResolution::Docs(_));
    let content_width = if docs_arm {
        input.width.saturating_sub(PANEL_WIDTH) as usize
    } else {
        input.width as usize
    };

    let content = content_lines(input, content_width, highlights);
    let content_rows = content.len();

    let panel = if docs_arm {
        nav::panel::render_panel(nav::MANIFEST, &input.path, input.cursor, theme)
    } else {
        Vec::new()
    };

    for row in 0..body_height {
        let mut line = Line::empty();

        if docs_arm {
            let panel_line = panel.get(row as usize).cloned().unwrap_or_default();
            line = pad_to(panel_line, PANEL_WIDTH as usize - 2);
            line.push(Span::new("\u{2502} ", theme.border.resolve(), Attr::NONE));
        }

        if let Some(content_line) = content.get(input.scroll + row as usize) {
            for span in &content_line.spans {
                line.push(span.clone());
            }
        }

        frame.set_line(body_top + row, line);
    }

    if input.height > 0 {
        frame.set_line(input.height - 1, footer_line(input));
    }

    ComposedFrame {
        frame,
        content_rows,
    }
}

// =============================================================================
// Chrome
// =============================================================================

fn header_lines(input: &ShellInput) -> Vec<Line> {
    let theme = &input.theme;
    let docs_arm = matches!(input.resolution, ShellResolution::Docs(_));

    let mut bar = Line::empty();
    bar.push(Span::new(" courier ", theme.brand.resolve(), Attr::BOLD));
    bar.push(Span::new("  ", theme.text.resolve(), Attr::NONE));

    let home_attrs = if matches!(input.resolution, ShellResolution::Home) {
        Attr::BOLD | Attr::UNDERLINE
    } else {
        Attr::NONE
    };
    bar.push(Span::new("Home", theme.text.resolve(), home_attrs));
    bar.push(Span::plain("  "));

    let docs_attrs = if docs_arm {
        Attr::BOLD | Attr::UNDERLINE
    } else {
        Attr::NONE
    };
    bar.push(Span::new("Documentation", theme.text.resolve(), docs_attrs));

    let rule = "\u{2500}".repeat(input.width as usize);
    vec![
        bar,
        Line::from_span(Span::new(rule, theme.border.resolve(), Attr::NONE)),
    ]
}

fn footer_line(input: &ShellInput) -> Line {
    Line::from_span(Span::new(
        " \u{2191}\u{2193} select   enter open   \u{2190} back   \u{2192} forward   h home   d docs   q quit",
        input.theme.text_muted.resolve(),
        Attr::NONE,
    ))
}

// =============================================================================
// Content Column
// =============================================================================

fn content_lines(
    input: &ShellInput,
    width: usize,
    highlights: &dyn Fn(usize) -> Option<Vec<Line>>,
) -> Vec<Line> {
    match &input.resolution {
        ShellResolution::Home => page_lines(&content::home(), width, &|_| None, &input.theme),
        ShellResolution::NotFound => {
            page_lines(&content::not_found(&input.path), width, &|_| None, &input.theme)
        }
        ShellResolution::Docs(Resolution::View(view)) => {
            page_lines(&content::page(*view), width, highlights, &input.theme)
        }
        ShellResolution::Docs(Resolution::NotFound) => {
            page_lines(&content::not_found(&input.path), width, &|_| None, &input.theme)
        }
        // The redirect effect replaces this location before the next event;
        // the arm is on screen for at most one frame.
        ShellResolution::Docs(Resolution::Redirect { .. }) => Vec::new(),
    }
}

/// Render a page into display lines at the given width.
pub fn page_lines(
    page: &Page,
    width: usize,
    highlights: &dyn Fn(usize) -> Option<Vec<Line>>,
    theme: &Theme,
) -> Vec<Line> {
    let text_width = width.saturating_sub(2).max(20);
    let mut lines = Vec::new();
    let mut code_index = 0;

    lines.push(Line::from_span(Span::new(
        format!(" {}", page.title),
        theme.heading.resolve(),
        Attr::BOLD | Attr::UNDERLINE,
    )));
    lines.push(Line::empty());

    for block in &page.blocks {
        match block {
            Block::Heading(text) => {
                lines.push(Line::from_span(Span::new(
                    format!(" {text}"),
                    theme.heading.resolve(),
                    Attr::BOLD,
                )));
                lines.push(Line::empty());
            }
            Block::Prose(text) => {
                for row in wrap(text, text_width) {
                    lines.push(Line::from_span(Span::new(
                        format!(" {row}"),
                        theme.text.resolve(),
                        Attr::NONE,
                    )));
                }
                lines.push(Line::empty());
            }
            Block::List(items) => {
                for item in items {
                    for (i, row) in wrap(item, text_width.saturating_sub(2)).into_iter().enumerate()
                    {
                        let bullet = if i == 0 { " \u{2022} " } else { "   " };
                        let mut line =
                            Line::from_span(Span::new(bullet, theme.accent.resolve(), Attr::NONE));
                        line.push(Span::new(row, theme.text.resolve(), Attr::NONE));
                        lines.push(line);
                    }
                }
                lines.push(Line::empty());
            }
            Block::Code(sample) => {
                let rendered = highlights(code_index).unwrap_or_else(|| {
                    sample.text.split('\n').map(Line::plain).collect()
                });
                code_index += 1;

                for code_line in rendered {
                    let mut line =
                        Line::from_span(Span::new("   ", theme.text.resolve(), Attr::NONE));
                    for span in code_line.spans {
                        line.push(span);
                    }
                    lines.push(line);
                }
                lines.push(Line::empty());
            }
            Block::Callout { title, body } => {
                let mut head =
                    Line::from_span(Span::new(" \u{258c} ", theme.accent.resolve(), Attr::NONE));
                head.push(Span::new(title.clone(), theme.accent.resolve(), Attr::BOLD));
                lines.push(head);

                for row in wrap(body, text_width.saturating_sub(2)) {
                    let mut line =
                        Line::from_span(Span::new(" \u{258c} ", theme.accent.resolve(), Attr::NONE));
                    line.push(Span::new(row, theme.text.resolve(), Attr::NONE));
                    lines.push(line);
                }
                lines.push(Line::empty());
            }
        }
    }

    lines
}

// =============================================================================
// Helpers
// =============================================================================

/// Greedy word wrap at display width. Words longer than the width land on
/// their own overlong line rather than being split.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.width() + 1 + word.width() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            rows.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    if rows.is_empty() {
        rows.push(String::new());
    }
    rows
}

/// Pad a line with spaces up to `width` cells (truncating when over).
fn pad_to(line: Line, width: usize) -> Line {
    let mut line = crate::renderer::truncate_line(line, width);
    let deficit = width.saturating_sub(line.width());
    if deficit > 0 {
        line.push(Span::plain(" ".repeat(deficit)));
    }
    line
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{docs_route_table, ViewId};
    use crate::route::shell::resolve_shell;
    use crate::theme::tomorrow_night;

    fn input(path: &str) -> ShellInput {
        let table = docs_route_table();
        ShellInput {
            width: 100,
            height: 30,
            path: path.to_string(),
            resolution: resolve_shell(&table, path),
            cursor: 0,
            scroll: 0,
            theme: tomorrow_night(),
        }
    }

    fn frame_texts(frame: &Frame) -> Vec<String> {
        (0..frame.height())
            .map(|y| frame.line(y).map(Line::text).unwrap_or_default())
            .collect()
    }

    #[test]
    fn test_header_present_on_every_arm() {
        for path in ["/", "/docs/introduction", "/nope"] {
            let composed = compose_frame(&input(path), &|_| None);
            let texts = frame_texts(&composed.frame);
            assert!(
                texts[0].contains("courier"),
                "header missing on {path}: {:?}",
                texts[0]
            );
        }
    }

    #[test]
    fn test_docs_arm_shows_panel_and_content() {
        let composed = compose_frame(&input("/docs/introduction"), &|_| None);
        let texts = frame_texts(&composed.frame);
        let body = texts.join("\n");

        assert!(body.contains("Getting Started"), "panel should render");
        assert!(
            body.contains("Introduction to courier"),
            "content title should render"
        );
    }

    #[test]
    fn test_home_arm_has_no_panel() {
        let composed = compose_frame(&input("/"), &|_| None);
        let body = frame_texts(&composed.frame).join("\n");
        assert!(!body.contains("Getting Started"));
        assert!(body.contains("mediator pattern library"));
    }

    #[test]
    fn test_not_found_arm() {
        let composed = compose_frame(&input("/missing"), &|_| None);
        let body = frame_texts(&composed.frame).join("\n");
        assert!(body.contains("Page Not Found"));
        assert!(body.contains("/missing"));
    }

    #[test]
    fn test_scroll_shifts_content() {
        let mut base = input("/docs/installation");
        let top = compose_frame(&base, &|_| None);

        base.scroll = 5;
        let scrolled = compose_frame(&base, &|_| None);

        assert_ne!(
            frame_texts(&top.frame),
            frame_texts(&scrolled.frame),
            "scrolling must move the content column"
        );
        assert_eq!(top.content_rows, scrolled.content_rows);
    }

    #[test]
    fn test_unhighlighted_code_renders_literal_text() {
        let page = content::page(ViewId::BasicUsage);
        let theme = tomorrow_night();
        let lines = page_lines(&page, 90, &|_| None, &theme);
        let body: Vec<String> = lines.iter().map(Line::text).collect();

        assert!(
            body.iter().any(|l| l.contains("pub struct Ping")),
            "plain code text should be visible before the first refresh"
        );
    }

    #[test]
    fn test_highlight_lookup_replaces_code_lines() {
        let page = content::page(ViewId::BasicUsage);
        let theme = tomorrow_night();

        let lines = page_lines(
            &page,
            90,
            &|i| (i == 0).then(|| vec![Line::plain("HIGHLIGHTED")]),
            &theme,
        );
        let body: Vec<String> = lines.iter().map(Line::text).collect();

        assert!(body.iter().any(|l| l.contains("HIGHLIGHTED")));
        // Only the first sample was swapped; later samples still render plain
        assert!(body.iter().any(|l| l.contains("impl Handle<Ping> for PingHandler")));
    }

    #[test]
    fn test_wrap_respects_width() {
        let rows = wrap("one two three four five six seven", 10);
        assert!(rows.iter().all(|r| r.width() <= 10), "rows: {rows:?}");
        assert_eq!(rows.join(" "), "one two three four five six seven");
    }

    #[test]
    fn test_pad_to_exact_width() {
        let line = pad_to(Line::plain("ab"), 5);
        assert_eq!(line.width(), 5);
        let line = pad_to(Line::plain("abcdefgh"), 5);
        assert_eq!(line.width(), 5);
    }
}
