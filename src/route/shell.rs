//! Shell-level routing - the top of the path hierarchy.
//!
//! One level above the section router, the shell selects exactly one of
//! three arms: the home view, the documentation subtree, or the not-found
//! view. Same disjoint exact-match policy as the section router.

use crate::route::{docs_sub_path, normalize, resolve_docs, Resolution, RouteTable};

/// Top-level resolution for a full application path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellResolution {
    /// The landing page at `/`.
    Home,
    /// Somewhere under `/docs`; carries the section router's verdict.
    Docs(Resolution),
    /// Everything else.
    NotFound,
}

/// Resolve a full path to one of the three shell arms.
///
/// Total: malformed paths land on the not-found arm instead of raising.
pub fn resolve_shell(table: &RouteTable, full_path: &str) -> ShellResolution {
    let Some(segments) = normalize(full_path) else {
        return ShellResolution::NotFound;
    };

    if segments.is_empty() {
        return ShellResolution::Home;
    }

    match docs_sub_path(full_path) {
        Some(sub_path) => ShellResolution::Docs(resolve_docs(table, &sub_path)),
        None => ShellResolution::NotFound,
    }
}

// =============================================================================
// Tests
// =============================================================================
