//! Navigation panel rendering.
//!
//! A pure function from (manifest, current path, cursor) to styled lines.
//! The panel holds no state of its own: active comes from the path via
//! [`crate::nav::is_active`], the cursor index comes from the caller, and
//! activating an entry is the caller's side effect.

use crate::nav::{is_active, NavSection};
use crate::theme::Theme;
use crate::types::{Attr, Line, Span};

/// Render the navigation panel.
///
/// `cursor` indexes the flattened entry list ([`crate::nav::flat_entries`]);
/// the cursor row carries a pointer glyph, the active row carries the accent
/// style. Render order equals declaration order.
pub fn render_panel(
    sections: &[NavSection],
    current_path: &str,
    cursor: usize,
    theme: &Theme,
) -> Vec<Line> {
    let mut lines = Vec::new();
    let mut entry_index = 0;

    for (section_index, section) in sections.iter().enumerate() {
        if section_index > 0 {
            lines.push(Line::empty());
        }

        lines.push(Line::from_span(Span::new(
            section.heading,
            theme.text_muted.resolve(),
            Attr::BOLD,
        )));

        for entry in section.entries {
            let active = is_active(entry.path, current_path);
            let pointed = entry_index == cursor;

            let marker = if pointed { "\u{203a} " } else { "  " };
            let (fg, attrs) = if active {
                (theme.accent.resolve(), Attr::BOLD)
            } else {
                (theme.text.resolve(), Attr::NONE)
            };

            let mut line = Line::from_span(Span::new(marker, theme.accent.resolve(), Attr::NONE));
            line.push(Span::new(entry.label, fg, attrs));
            lines.push(line);

            entry_index += 1;
        }
    }

    lines
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::MANIFEST;
    use crate::theme::tomorrow_night;

    fn label_rows(lines: &[Line]) -> Vec<String> {
        lines
            .iter()
            .filter(|l| l.spans.len() == 2)
            .map(|l| l.spans[1].text.clone())
            .collect()
    }

    #[test]
    fn test_render_order_is_declaration_order() {
        let theme = tomorrow_night();
        let lines = render_panel(MANIFEST, "/", 0, &theme);
        assert_eq!(
            label_rows(&lines),
            vec![
                "Introduction",
                "Installation",
                "Basic Usage",
                "Requests & Handlers",
                "Notifications",
                "Pipeline Behaviors",
                "Notification Behaviors",
                "Auto-Registration",
            ]
        );
    }

    #[test]
    fn test_exactly_active_row_carries_accent() {
        let theme = tomorrow_night();
        let accent = theme.accent.resolve();
        let lines = render_panel(MANIFEST, "/docs/notifications", 0, &theme);

        let accented: Vec<String> = lines
            .iter()
            .filter(|l| l.spans.len() == 2 && l.spans[1].fg == accent)
            .map(|l| l.spans[1].text.clone())
            .collect();
        assert_eq!(accented, vec!["Notifications"]);
    }

    #[test]
    fn test_no_active_row_outside_docs() {
        let theme = tomorrow_night();
        let accent = theme.accent.resolve();
        let lines = render_panel(MANIFEST, "/", 0, &theme);

        assert!(
            lines
                .iter()
                .filter(|l| l.spans.len() == 2)
                .all(|l| l.spans[1].fg != accent),
            "home path activates no entry"
        );
    }

    #[test]
    fn test_cursor_marker_on_pointed_row() {
        let theme = tomorrow_night();
        let lines = render_panel(MANIFEST, "/", 2, &theme);

        let markers: Vec<(String, String)> = lines
            .iter()
            .filter(|l| l.spans.len() == 2)
            .map(|l| (l.spans[0].text.clone(), l.spans[1].text.clone()))
            .collect();

        for (i, (marker, label)) in markers.iter().enumerate() {
            if i == 2 {
                assert_eq!(marker, "\u{203a} ", "cursor row is {label}");
            } else {
                assert_eq!(marker, "  ");
            }
        }
    }

    #[test]
    fn test_section_headings_present() {
        let theme = tomorrow_night();
        let lines = render_panel(MANIFEST, "/", 0, &theme);
        let texts: Vec<String> = lines.iter().map(Line::text).collect();

        for heading in ["Getting Started", "Core Concepts", "Advanced"] {
            assert!(texts.iter().any(|t| t == heading), "missing {heading}");
        }
    }
}
