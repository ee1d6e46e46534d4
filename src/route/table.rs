//! Section router - maps docs sub-paths to content views.
//!
//! The route table is a closed, enumerable set of static patterns validated
//! for disjointness when it is built. Because patterns are disjoint,
//! first-match and best-match coincide; adding an overlapping pattern is a
//! configuration defect caught by the construction assertion, not a runtime
//! ambiguity.

use crate::nav;
use crate::route::normalize;

// =============================================================================
// View Identifiers
// =============================================================================

/// Opaque identifier selecting which documentation view to render.
///
/// One variant per topic; the mapping from sub-path to variant is injective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewId {
    Introduction,
    Installation,
    BasicUsage,
    Requests,
    Notifications,
    Behaviors,
    NotificationBehaviors,
    AutoRegistration,
}

// =============================================================================
// Resolution
// =============================================================================

/// Result of resolving a sub-path below the documentation mount prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one content view matched.
    View(ViewId),
    /// The synthetic root: navigate elsewhere instead of rendering.
    ///
    /// `replace` is always true so the redirect source never becomes a
    /// distinct history entry (back-button semantics stay correct).
    Redirect { to: String, replace: bool },
    /// Terminal fallback for anything the table does not know.
    NotFound,
}

// =============================================================================
// Route Table
// =============================================================================

/// Ordered mapping from docs sub-path pattern to content view.
///
/// Patterns are single segments matched exactly (no wildcards below the
/// mount point other than the terminal not-found fallback).
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<(&'static str, ViewId)>,
}

impl RouteTable {
    /// Build a table from `(pattern, view)` pairs.
    ///
    /// # Panics
    ///
    /// Panics when two entries share a pattern or a view. Both directions of
    /// the mapping must stay injective; this runs once at startup and is
    /// covered by a test.
    pub fn new(entries: Vec<(&'static str, ViewId)>) -> Self {
        for (i, (pattern, view)) in entries.iter().enumerate() {
            for (other_pattern, other_view) in &entries[..i] {
                assert!(
                    pattern != other_pattern,
                    "route table: overlapping pattern {pattern:?}"
                );
                assert!(
                    view != other_view,
                    "route table: view {view:?} registered twice"
                );
            }
        }
        Self { entries }
    }

    /// Look up a single sub-path segment. Exact match, registration order.
    pub fn lookup(&self, segment: &str) -> Option<ViewId> {
        self.entries
            .iter()
            .find(|(pattern, _)| *pattern == segment)
            .map(|(_, view)| *view)
    }

    /// All registered `(pattern, view)` pairs in registration order.
    pub fn entries(&self) -> &[(&'static str, ViewId)] {
        &self.entries
    }
}

/// The documentation route table, one entry per topic page.
pub fn docs_route_table() -> RouteTable {
    RouteTable::new(vec![
        ("introduction", ViewId::Introduction),
        ("installation", ViewId::Installation),
        ("basic-usage", ViewId::BasicUsage),
        ("requests", ViewId::Requests),
        ("notifications", ViewId::Notifications),
        ("behaviors", ViewId::Behaviors),
        ("notification-behaviors", ViewId::NotificationBehaviors),
        ("auto-registration", ViewId::AutoRegistration),
    ])
}

/// Resolve a sub-path below [`crate::route::DOCS_PREFIX`] to a content view.
///
/// Policy, in order:
/// 1. Empty or root sub-path: history-replacing redirect to the default
///    entry (first entry of the first navigation section).
/// 2. Exactly one segment matching a table pattern: that view.
/// 3. Anything else (including malformed input and deeper paths): not found.
pub fn resolve_docs(table: &RouteTable, sub_path: &str) -> Resolution {
    let Some(segments) = normalize(sub_path) else {
        return Resolution::NotFound;
    };

    match segments.as_slice() {
        [] => Resolution::Redirect {
            to: nav::default_entry().path.to_string(),
            replace: true,
        },
        [segment] => match table.lookup(segment) {
            Some(view) => Resolution::View(view),
            None => Resolution::NotFound,
        },
        _ => Resolution::NotFound,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_every_topic_resolves_to_its_own_view() {
        let table = docs_route_table();
        let cases = [
            ("/introduction", ViewId::Introduction),
            ("/installation", ViewId::Installation),
            ("/basic-usage", ViewId::BasicUsage),
            ("/requests", ViewId::Requests),
            ("/notifications", ViewId::Notifications),
            ("/behaviors", ViewId::Behaviors),
            ("/notification-behaviors", ViewId::NotificationBehaviors),
            ("/auto-registration", ViewId::AutoRegistration),
        ];

        for (sub_path, expected) in cases {
            assert_eq!(
                resolve_docs(&table, sub_path),
                Resolution::View(expected),
                "sub-path {sub_path} should resolve to {expected:?}"
            );
        }
    }

    #[test]
    fn test_mapping_is_injective() {
        let table = docs_route_table();
        let views: HashSet<ViewId> = table
            .entries()
            .iter()
            .map(|(_, view)| *view)
            .collect();
        assert_eq!(
            views.len(),
            table.entries().len(),
            "no two sub-paths may resolve to the same view"
        );
    }

    #[test]
    fn test_root_redirects_to_default_entry() {
        let table = docs_route_table();
        let expected = Resolution::Redirect {
            to: "/docs/introduction".to_string(),
            replace: true,
        };
        assert_eq!(resolve_docs(&table, "/"), expected);
        assert_eq!(resolve_docs(&table, ""), Resolution::NotFound);
    }

    #[test]
    fn test_unknown_sub_path_is_not_found() {
        let table = docs_route_table();
        assert_eq!(resolve_docs(&table, "/missing"), Resolution::NotFound);
        assert_eq!(
            resolve_docs(&table, "/introduction/extra"),
            Resolution::NotFound
        );
    }

    #[test]
    fn test_malformed_sub_path_is_not_found() {
        let table = docs_route_table();
        assert_eq!(resolve_docs(&table, "//"), Resolution::NotFound);
        assert_eq!(resolve_docs(&table, "introduction"), Resolution::NotFound);
    }

    #[test]
    fn test_trailing_slash_matches() {
        let table = docs_route_table();
        assert_eq!(
            resolve_docs(&table, "/requests/"),
            Resolution::View(ViewId::Requests)
        );
    }

    #[test]
    #[should_panic(expected = "overlapping pattern")]
    fn test_overlapping_pattern_is_rejected() {
        RouteTable::new(vec![
            ("introduction", ViewId::Introduction),
            ("introduction", ViewId::Installation),
        ]);
    }

    #[test]
    #[should_panic(expected = "registered twice")]
    fn test_duplicate_view_is_rejected() {
        RouteTable::new(vec![
            ("introduction", ViewId::Introduction),
            ("intro", ViewId::Introduction),
        ]);
    }
}
