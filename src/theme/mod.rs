//! Theme system for courier-docs.
//!
//! Semantic color definitions for the chrome plus one color per syntax
//! token category. Two presets: `terminal` (ANSI palette, respects the
//! user's terminal scheme) and `tomorrow_night` (the RGB palette the
//! documentation ships with by default).
//!
//! The active theme is a thread-local signal: deriveds that read it through
//! [`active_theme`] recompute when the theme changes.

use spark_signals::{signal, Signal};

use crate::highlight::TokenKind;
use crate::types::Rgba;

// =============================================================================
// ThemeColor
// =============================================================================

/// A theme color slot.
///
/// - `Default`: terminal's own default color
/// - `Ansi(n)`: ANSI palette index (0-255)
/// - `Rgb(rgba)`: explicit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeColor {
    Default,
    Ansi(u8),
    Rgb(Rgba),
}

impl ThemeColor {
    /// Resolve to a concrete [`Rgba`].
    pub fn resolve(&self) -> Rgba {
        match self {
            Self::Default => Rgba::TERMINAL_DEFAULT,
            Self::Ansi(i) => Rgba::ansi(*i),
            Self::Rgb(c) => *c,
        }
    }
}

impl Default for ThemeColor {
    fn default() -> Self {
        Self::Default
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Theme definition: chrome colors plus token-category colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Theme name (e.g. "tomorrow-night").
    pub name: &'static str,

    // Chrome
    /// Brand text in the header bar.
    pub brand: ThemeColor,
    /// Accent for the active navigation entry and links.
    pub accent: ThemeColor,
    /// Section headings in the panel and page headings.
    pub heading: ThemeColor,
    /// Body text.
    pub text: ThemeColor,
    /// Secondary text (section headings in the panel, hints).
    pub text_muted: ThemeColor,
    /// Border and separator glyphs.
    pub border: ThemeColor,

    // Syntax tokens
    pub token_keyword: ThemeColor,
    pub token_type: ThemeColor,
    pub token_string: ThemeColor,
    pub token_number: ThemeColor,
    pub token_comment: ThemeColor,
    pub token_punct: ThemeColor,
    pub token_ident: ThemeColor,
}

impl Theme {
    /// Color for a syntax token category.
    pub fn token_color(&self, kind: TokenKind) -> Rgba {
        match kind {
            TokenKind::Keyword => self.token_keyword.resolve(),
            TokenKind::Type => self.token_type.resolve(),
            TokenKind::Str => self.token_string.resolve(),
            TokenKind::Number => self.token_number.resolve(),
            TokenKind::Comment => self.token_comment.resolve(),
            TokenKind::Punct => self.token_punct.resolve(),
            TokenKind::Ident => self.token_ident.resolve(),
            TokenKind::Text => self.text.resolve(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        tomorrow_night()
    }
}

// =============================================================================
// Presets
// =============================================================================

/// ANSI-palette preset that respects the terminal's own scheme.
pub fn terminal() -> Theme {
    Theme {
        name: "terminal",
        brand: ThemeColor::Ansi(13),
        accent: ThemeColor::Ansi(13),
        heading: ThemeColor::Ansi(11),
        text: ThemeColor::Default,
        text_muted: ThemeColor::Ansi(8),
        border: ThemeColor::Ansi(8),
        token_keyword: ThemeColor::Ansi(13),
        token_type: ThemeColor::Ansi(11),
        token_string: ThemeColor::Ansi(10),
        token_number: ThemeColor::Ansi(9),
        token_comment: ThemeColor::Ansi(8),
        token_punct: ThemeColor::Default,
        token_ident: ThemeColor::Default,
    }
}

/// The "tomorrow night" palette the documentation ships with.
pub fn tomorrow_night() -> Theme {
    Theme {
        name: "tomorrow-night",
        brand: ThemeColor::Rgb(Rgba::rgb(204, 153, 205)),
        accent: ThemeColor::Rgb(Rgba::rgb(139, 92, 246)),
        heading: ThemeColor::Rgb(Rgba::rgb(248, 197, 85)),
        text: ThemeColor::Rgb(Rgba::rgb(204, 204, 204)),
        text_muted: ThemeColor::Rgb(Rgba::rgb(153, 153, 153)),
        border: ThemeColor::Rgb(Rgba::rgb(85, 85, 85)),
        token_keyword: ThemeColor::Rgb(Rgba::rgb(204, 153, 205)),
        token_type: ThemeColor::Rgb(Rgba::rgb(248, 197, 85)),
        token_string: ThemeColor::Rgb(Rgba::rgb(126, 198, 153)),
        token_number: ThemeColor::Rgb(Rgba::rgb(240, 141, 73)),
        token_comment: ThemeColor::Rgb(Rgba::rgb(153, 153, 153)),
        token_punct: ThemeColor::Rgb(Rgba::rgb(204, 204, 204)),
        token_ident: ThemeColor::Rgb(Rgba::rgb(204, 204, 204)),
    }
}

/// Look up a preset by name.
pub fn get_preset(name: &str) -> Option<Theme> {
    match name {
        "terminal" => Some(terminal()),
        "tomorrow-night" => Some(tomorrow_night()),
        _ => None,
    }
}

// =============================================================================
// Active Theme Signal
// =============================================================================

thread_local! {
    static ACTIVE_THEME: Signal<Theme> = signal(Theme::default());
}

/// Current theme (creates a reactive dependency when read inside an effect
/// or derived).
pub fn active_theme() -> Theme {
    ACTIVE_THEME.with(|s| s.get())
}

/// Clone the theme signal for use inside deriveds.
pub fn theme_signal() -> Signal<Theme> {
    ACTIVE_THEME.with(Clone::clone)
}

/// Swap the active theme.
pub fn set_theme(theme: Theme) {
    ACTIVE_THEME.with(|s| s.set(theme));
}

/// Restore the default theme (for tests).
pub fn reset_theme() {
    set_theme(Theme::default());
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_color_resolve() {
        assert!(ThemeColor::Default.resolve().is_terminal_default());
        assert_eq!(ThemeColor::Ansi(12).resolve().ansi_index(), 12);
        assert_eq!(
            ThemeColor::Rgb(Rgba::rgb(1, 2, 3)).resolve(),
            Rgba::rgb(1, 2, 3)
        );
    }

    #[test]
    fn test_default_preset() {
        assert_eq!(Theme::default().name, "tomorrow-night");
    }

    #[test]
    fn test_get_preset() {
        assert_eq!(get_preset("terminal").map(|t| t.name), Some("terminal"));
        assert!(get_preset("dracula").is_none());
    }

    #[test]
    fn test_token_colors_cover_all_kinds() {
        let theme = tomorrow_night();
        for kind in [
            TokenKind::Keyword,
            TokenKind::Type,
            TokenKind::Str,
            TokenKind::Number,
            TokenKind::Comment,
            TokenKind::Punct,
            TokenKind::Ident,
            TokenKind::Text,
        ] {
            // Every category resolves to some concrete color
            let _ = theme.token_color(kind);
        }
    }

    #[test]
    fn test_set_theme_switches_active() {
        reset_theme();
        set_theme(terminal());
        assert_eq!(active_theme().name, "terminal");
        reset_theme();
    }
}
