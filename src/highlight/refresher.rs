//! Highlight refresher - change-detection keyed re-tokenization.
//!
//! One refresher per mounted code sample. A refresh pass runs exactly when
//! the sample's text differs (by full string equality) from the text used in
//! the previous successful pass; unchanged text is an idempotent no-op. Each
//! pass re-scans the complete sample - tokenization is not incremental or
//! diffed.
//!
//! "Render happened" and "refresh is needed" are deliberately decoupled: the
//! pipeline calls [`Refresher::refresh`] after every commit, and the
//! baseline comparison decides whether any work runs.

use std::rc::Rc;

use crate::theme::active_theme;
use crate::types::{Attr, Line, Span};

use super::{CodeSample, TokenKind, Tokenizer};

/// Mount-scoped refresh state for a single code sample.
pub struct Refresher {
    tokenizer: Rc<dyn Tokenizer>,
    baseline: Option<String>,
}

impl Refresher {
    /// Create a refresher around a (shared) tokenizer.
    pub fn new(tokenizer: Rc<dyn Tokenizer>) -> Self {
        Self {
            tokenizer,
            baseline: None,
        }
    }

    /// Run a refresh pass if the sample's text changed since the last pass.
    ///
    /// Returns `Some(lines)` when a pass ran (the new baseline is recorded),
    /// `None` when the text was unchanged and no work was done.
    ///
    /// An unrecognized language tag is not an error: the pass still runs and
    /// produces the literal text as unhighlighted plain lines.
    pub fn refresh(&mut self, sample: &CodeSample) -> Option<Vec<Line>> {
        if self.baseline.as_deref() == Some(sample.text.as_str()) {
            return None;
        }

        let lines = match self.tokenizer.tokenize(&sample.text, &sample.language) {
            Some(tokens) => styled_lines(&tokens),
            None => plain_lines(&sample.text),
        };

        self.baseline = Some(sample.text.clone());
        Some(lines)
    }

    /// Forget the baseline; the next refresh re-tokenizes unconditionally.
    ///
    /// Used when the styling inputs (theme) change under an unchanged text.
    pub fn invalidate(&mut self) {
        self.baseline = None;
    }

    /// Whether a pass has run yet for this mount.
    pub fn has_baseline(&self) -> bool {
        self.baseline.is_some()
    }
}

/// Convert a token stream into styled display lines.
///
/// Newlines inside token text split lines; the line count always equals
/// `text.split('\n').count()`.
fn styled_lines(tokens: &[super::Token]) -> Vec<Line> {
    let theme = active_theme();
    let mut lines = vec![Line::empty()];

    for token in tokens {
        let fg = theme.token_color(token.kind);
        let attrs = match token.kind {
            TokenKind::Comment => Attr::ITALIC,
            TokenKind::Keyword => Attr::BOLD,
            _ => Attr::NONE,
        };

        let mut pieces = token.text.split('\n');
        if let Some(first) = pieces.next() {
            if !first.is_empty() {
                push_span(&mut lines, Span::new(first, fg, attrs));
            }
        }
        for piece in pieces {
            lines.push(Line::empty());
            if !piece.is_empty() {
                push_span(&mut lines, Span::new(piece, fg, attrs));
            }
        }
    }

    lines
}

/// Literal text as unhighlighted plain lines.
fn plain_lines(text: &str) -> Vec<Line> {
    text.split('\n').map(Line::plain).collect()
}

fn push_span(lines: &mut Vec<Line>, span: Span) {
    if let Some(last) = lines.last_mut() {
        last.push(span);
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;
    use crate::highlight::{SyntaxLexer, Token};

    /// Tokenizer fake that counts full scans.
    struct CountingTokenizer {
        passes: Rc<Cell<usize>>,
        recognize: bool,
    }

    impl Tokenizer for CountingTokenizer {
        fn tokenize(&self, text: &str, _language: &str) -> Option<Vec<Token>> {
            self.passes.set(self.passes.get() + 1);
            self.recognize
                .then(|| vec![Token::new(TokenKind::Text, text)])
        }
    }

    fn counting(recognize: bool) -> (Refresher, Rc<Cell<usize>>) {
        let passes = Rc::new(Cell::new(0));
        let tokenizer = CountingTokenizer {
            passes: passes.clone(),
            recognize,
        };
        (Refresher::new(Rc::new(tokenizer)), passes)
    }

    #[test]
    fn test_same_text_twice_runs_one_pass() {
        let (mut refresher, passes) = counting(true);
        let sample = CodeSample::rust("let x = 1;");

        assert!(refresher.refresh(&sample).is_some());
        assert!(refresher.refresh(&sample).is_none(), "no-op on same text");
        assert_eq!(passes.get(), 1);
    }

    #[test]
    fn test_distinct_texts_run_two_ordered_passes() {
        let (mut refresher, passes) = counting(true);

        let a = CodeSample::rust("let a = 1;");
        let b = CodeSample::rust("let b = 2;");

        let first = refresher.refresh(&a);
        assert_eq!(passes.get(), 1, "pass for A runs before B exists");
        let second = refresher.refresh(&b);
        assert_eq!(passes.get(), 2);

        assert!(first.is_some());
        assert!(second.is_some());
        assert!(refresher.refresh(&b).is_none());
    }

    #[test]
    fn test_language_change_alone_still_refreshes_only_on_text_change() {
        let (mut refresher, passes) = counting(true);

        let rust = CodeSample::new("echo hi", "rust");
        let bash = CodeSample::new("echo hi", "bash");

        assert!(refresher.refresh(&rust).is_some());
        // Same text under a different tag: the baseline contract is keyed
        // on text equality only.
        assert!(refresher.refresh(&bash).is_none());
        assert_eq!(passes.get(), 1);
    }

    #[test]
    fn test_unknown_language_degrades_to_plain_text() {
        let (mut refresher, _passes) = counting(false);
        let sample = CodeSample::new("first line\nsecond line", "csharp");

        let lines = refresher.refresh(&sample).expect("pass should run");
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text(), "first line");
        assert_eq!(lines[1].text(), "second line");
        assert!(
            lines
                .iter()
                .flat_map(|l| &l.spans)
                .all(|s| s.fg.is_terminal_default() && s.attrs == Attr::NONE),
            "unknown language renders literal unstyled text"
        );
    }

    #[test]
    fn test_mounts_are_isolated() {
        let (mut a, passes_a) = counting(true);
        let (mut b, passes_b) = counting(true);
        let sample = CodeSample::rust("let x = 1;");

        a.refresh(&sample);
        a.refresh(&sample);
        assert_eq!(passes_a.get(), 1);
        assert_eq!(passes_b.get(), 0, "sibling mount is untouched");

        b.refresh(&sample);
        assert_eq!(passes_b.get(), 1);
    }

    #[test]
    fn test_invalidate_forces_next_pass() {
        let (mut refresher, passes) = counting(true);
        let sample = CodeSample::rust("let x = 1;");

        refresher.refresh(&sample);
        refresher.invalidate();
        assert!(refresher.refresh(&sample).is_some());
        assert_eq!(passes.get(), 2);
    }

    #[test]
    fn test_styled_lines_match_source_line_count() {
        let mut refresher = Refresher::new(Rc::new(SyntaxLexer));
        let sample = CodeSample::rust("fn main() {\n    // hi\n}");

        let lines = refresher.refresh(&sample).expect("pass should run");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].text(), "fn main() {");
        assert_eq!(lines[1].text(), "    // hi");
        assert_eq!(lines[2].text(), "}");
    }
}
