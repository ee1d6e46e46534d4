//! # courier-docs
//!
//! Reactive terminal documentation browser for the courier mediator library.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity: the current path is a signal, route resolution
//! and frame composition are deriveds, and terminal output happens in a
//! single render effect.
//!
//! ## Architecture
//!
//! ```text
//! path signal -> resolution derived -> frame derived -> render effect
//!                      |                                     |
//!               redirect effect                  post-commit highlight refresh
//! ```
//!
//! Route resolution is total: malformed or unknown paths land on a
//! not-found view, the bare `/docs` root redirects (with replace) to the
//! first topic, and code samples are re-tokenized after the frame that
//! introduced them is on screen.
//!
//! ## Modules
//!
//! - [`types`] - Core types (Rgba, Attr, Span, Line)
//! - [`route`] - Path grammar, route table, shell resolution
//! - [`nav`] - Navigation manifest and panel rendering
//! - [`state`] - History, panel selection, content scroll
//! - [`content`] - The documentation pages themselves
//! - [`highlight`] - Tokenizer and change-detection refresher
//! - [`shell`] - Pure frame composition (chrome + panel + content)
//! - [`renderer`] - Terminal renderer (ANSI output, diff rendering)
//! - [`pipeline`] - Deriveds, effects, mount and event loop

pub mod content;
pub mod highlight;
pub mod nav;
pub mod pipeline;
pub mod renderer;
pub mod route;
pub mod shell;
pub mod state;
pub mod theme;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use route::{
    docs_route_table, docs_sub_path, normalize, paths_equal, resolve_docs, Resolution,
    RouteTable, ViewId, DOCS_PREFIX,
};

pub use nav::{default_entry, flat_entries, is_active, NavEntry, NavSection, MANIFEST};

pub use highlight::{CodeSample, SyntaxLexer, Token, TokenKind, Tokenizer};

pub use renderer::{DiffRenderer, Frame, OutputBuffer};

pub use pipeline::{
    detect_terminal_size, mount, run, set_terminal_size, terminal_height, terminal_width,
    tick, unmount, MountHandle,
};
