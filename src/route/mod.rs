//! Route path grammar and resolution.
//!
//! A route path is a `/`-delimited logical address within the content tree.
//! Everything in this module is a pure, total function: malformed input maps
//! to `None` or to the not-found arm, never to a panic.
//!
//! # Path grammar
//!
//! - Must start with `/`
//! - One optional trailing `/` is stripped before comparison
//! - Interior segments must be non-empty (`/docs//x` is malformed)
//! - Comparison is case-sensitive, segment by segment

mod table;

pub mod shell;

pub use table::{docs_route_table, resolve_docs, Resolution, RouteTable, ViewId};

/// Mount prefix of the documentation subtree.
pub const DOCS_PREFIX: &str = "/docs";

/// Normalize a route path into its segment sequence.
///
/// Returns `None` when the path does not conform to the grammar. The root
/// path `/` normalizes to an empty segment sequence.
///
/// # Example
///
/// ```
/// use courier_docs::route::normalize;
///
/// assert_eq!(normalize("/docs/intro/"), Some(vec!["docs", "intro"]));
/// assert_eq!(normalize("/"), Some(vec![]));
/// assert_eq!(normalize("docs"), None);
/// ```
pub fn normalize(path: &str) -> Option<Vec<&str>> {
    let rest = path.strip_prefix('/')?;

    // Only the bare "/" is the root; "//" has an empty segment, not a
    // trailing slash.
    if rest.is_empty() {
        return Some(Vec::new());
    }

    // Strip at most one trailing slash.
    let rest = rest.strip_suffix('/').unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }

    let segments: Vec<&str> = rest.split('/').collect();
    if segments.iter().any(|s| s.is_empty()) {
        return None;
    }

    Some(segments)
}

/// Check two route paths for normalized equality.
///
/// Two paths are equal iff their normalized segment sequences are identical
/// element-for-element. Either side being malformed yields `false`.
pub fn paths_equal(a: &str, b: &str) -> bool {
    match (normalize(a), normalize(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

/// Split a full path into the docs sub-path, if it lives under [`DOCS_PREFIX`].
///
/// `/docs` and `/docs/` yield `Some("/")`; `/docs/intro` yields
/// `Some("/intro")`; anything outside the prefix (or malformed) yields `None`.
pub fn docs_sub_path(full_path: &str) -> Option<String> {
    let segments = normalize(full_path)?;
    match segments.split_first() {
        Some((&"docs", rest)) => {
            let mut sub = String::from("/");
            sub.push_str(&rest.join("/"));
            Some(sub)
        }
        _ => None,
    }
}

// =============================================================================
// Tests
// =============================================================================
