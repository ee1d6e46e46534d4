//! Built-in tokenizer for the languages the documentation uses.
//!
//! A single generic scanner parameterized per language: keyword set, line
//! comment prefix, string delimiters. Deliberately shallow - this is display
//! tokenization, not parsing. Unknown languages return `None` so the caller
//! degrades to plain text.

use super::{Token, TokenKind, Tokenizer};

/// Per-language scanning profile.
struct Profile {
    keywords: &'static [&'static str],
    line_comment: &'static str,
}

const RUST: Profile = Profile {
    keywords: &[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move", "mut",
        "pub", "ref", "return", "self", "Self", "static", "struct", "trait", "true", "type",
        "use", "where", "while",
    ],
    line_comment: "//",
};

const TOML: Profile = Profile {
    keywords: &["true", "false"],
    line_comment: "#",
};

const BASH: Profile = Profile {
    keywords: &[
        "if", "then", "else", "elif", "fi", "for", "in", "do", "done", "case", "esac", "while",
        "function", "export", "return",
    ],
    line_comment: "#",
};

/// The built-in syntax lexer.
///
/// Recognizes `rust`, `toml` and `bash`/`sh`/`shell`; everything else is
/// reported as unknown via `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxLexer;

impl Tokenizer for SyntaxLexer {
    fn tokenize(&self, text: &str, language: &str) -> Option<Vec<Token>> {
        let profile = match language {
            "rust" => &RUST,
            "toml" => &TOML,
            "bash" | "sh" | "shell" => &BASH,
            _ => return None,
        };
        Some(scan(text, profile))
    }
}

/// Scan the whole sample into a lossless token sequence.
fn scan(text: &str, profile: &Profile) -> Vec<Token> {
    let mut tokens = Vec::new();
    let chars: Vec<char> = text.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        // Line comment: runs to end of line, newline stays outside
        if starts_with_at(&chars, i, profile.line_comment) {
            let start = i;
            while i < chars.len() && chars[i] != '\n' {
                i += 1;
            }
            tokens.push(collect(TokenKind::Comment, &chars[start..i]));
            continue;
        }

        // String literal with backslash escapes
        if c == '"' {
            let start = i;
            i += 1;
            while i < chars.len() && chars[i] != '"' && chars[i] != '\n' {
                if chars[i] == '\\' && i + 1 < chars.len() {
                    i += 1;
                }
                i += 1;
            }
            if i < chars.len() && chars[i] == '"' {
                i += 1;
            }
            tokens.push(collect(TokenKind::Str, &chars[start..i]));
            continue;
        }

        // Word: keyword, type, number or identifier
        if c.is_alphanumeric() || c == '_' {
            let start = i;
            while i < chars.len() && (chars[i].is_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let kind = classify_word(&word, profile);
            tokens.push(Token::new(kind, word));
            continue;
        }

        // Whitespace run (including newlines)
        if c.is_whitespace() {
            let start = i;
            while i < chars.len() && chars[i].is_whitespace() {
                i += 1;
            }
            tokens.push(collect(TokenKind::Text, &chars[start..i]));
            continue;
        }

        // Everything else: one punctuation character
        tokens.push(Token::new(TokenKind::Punct, c.to_string()));
        i += 1;
    }

    tokens
}

fn starts_with_at(chars: &[char], at: usize, needle: &str) -> bool {
    needle
        .chars()
        .enumerate()
        .all(|(j, n)| chars.get(at + j) == Some(&n))
}

fn collect(kind: TokenKind, chars: &[char]) -> Token {
    Token::new(kind, chars.iter().collect::<String>())
}

fn classify_word(word: &str, profile: &Profile) -> TokenKind {
    if profile.keywords.contains(&word) {
        return TokenKind::Keyword;
    }
    if word.chars().all(|c| c.is_ascii_digit() || c == '_') {
        return TokenKind::Number;
    }
    if word.chars().next().is_some_and(char::is_uppercase) {
        return TokenKind::Type;
    }
    TokenKind::Ident
}

// =============================================================================
// Tests
// =============================================================================
