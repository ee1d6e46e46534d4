//! Syntax highlighting - tokenizer boundary and refresh engine.
//!
//! Highlighting is a presentation enhancement, never required for
//! correctness: an unrecognized language tag degrades to plain text, and no
//! path through this module can fail.
//!
//! The tokenizer sits behind the [`Tokenizer`] trait so the refresh engine
//! can be tested deterministically with a fake. The built-in
//! [`lexer::SyntaxLexer`] covers the languages the documentation actually
//! uses (`rust`, `toml`, `bash`).
//!
//! Refresh lifecycle lives in [`refresher::Refresher`]: one refresher per
//! mounted code sample, re-validated on content change, destroyed with the
//! owning view.

pub mod lexer;
pub mod refresher;

pub use lexer::SyntaxLexer;
pub use refresher::Refresher;

// =============================================================================
// Code Samples
// =============================================================================

/// A unit of source text plus a language tag destined for tokenized display.
///
/// Immutable per render; identity for refresh purposes is content equality
/// of `text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    pub text: String,
    pub language: String,
}

impl CodeSample {
    pub fn new(text: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
        }
    }

    /// A sample in the documented library's own language.
    pub fn rust(text: impl Into<String>) -> Self {
        Self::new(text, "rust")
    }
}

// =============================================================================
// Tokens
// =============================================================================

/// Syntax category of a token run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Type,
    Str,
    Number,
    Comment,
    Punct,
    Ident,
    /// Whitespace and anything uncategorized.
    Text,
}

/// A categorized run of source text.
///
/// Tokenization is lossless: concatenating the `text` of every token
/// reproduces the input exactly (including newlines).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
}

// =============================================================================
// Tokenizer Boundary
// =============================================================================

/// External tokenizer contract.
///
/// A full, non-incremental scan of one sample. Returns `None` when the
/// language tag is not recognized; the caller then renders the literal text
/// unhighlighted.
pub trait Tokenizer {
    fn tokenize(&self, text: &str, language: &str) -> Option<Vec<Token>>;
}
