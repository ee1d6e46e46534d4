//! Navigation manifest and active-path resolution.
//!
//! The manifest is static declarative data: sections of entries, declared
//! once, never mutated at runtime. Render order equals declaration order.
//!
//! "Active" is a pure function of the current path - exact normalized
//! equality with an entry's path, nothing else. Ancestor entries do not
//! light up for nested paths, and malformed input resolves to inactive
//! rather than raising (active state is a presentation hint, never
//! load-bearing).

pub mod panel;

use crate::route::paths_equal;

// =============================================================================
// Manifest Types
// =============================================================================

/// A single navigation link: a route path plus its display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub path: &'static str,
    pub label: &'static str,
}

/// An ordered group of entries under a heading. Sections are flat siblings,
/// never nested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSection {
    pub heading: &'static str,
    pub entries: &'static [NavEntry],
}

/// The sidebar manifest, in render order.
pub const MANIFEST: &[NavSection] = &[
    NavSection {
        heading: "Getting Started",
        entries: &[
            NavEntry {
                path: "/docs/introduction",
                label: "Introduction",
            },
            NavEntry {
                path: "/docs/installation",
                label: "Installation",
            },
            NavEntry {
                path: "/docs/basic-usage",
                label: "Basic Usage",
            },
        ],
    },
    NavSection {
        heading: "Core Concepts",
        entries: &[
            NavEntry {
                path: "/docs/requests",
                label: "Requests & Handlers",
            },
            NavEntry {
                path: "/docs/notifications",
                label: "Notifications",
            },
            NavEntry {
                path: "/docs/behaviors",
                label: "Pipeline Behaviors",
            },
            NavEntry {
                path: "/docs/notification-behaviors",
                label: "Notification Behaviors",
            },
        ],
    },
    NavSection {
        heading: "Advanced",
        entries: &[NavEntry {
            path: "/docs/auto-registration",
            label: "Auto-Registration",
        }],
    },
];

// =============================================================================
// Active-Path Resolver
// =============================================================================

/// Is `entry_path` the active entry for `current_path`?
///
/// Exact normalized-path equality, not prefix containment. Trailing-slash
/// variants compare equal; malformed input on either side yields `false`.
pub fn is_active(entry_path: &str, current_path: &str) -> bool {
    paths_equal(entry_path, current_path)
}

/// The designated default entry: first entry of the first section.
///
/// The manifest is non-empty by construction, so indexing is safe.
pub fn default_entry() -> NavEntry {
    MANIFEST[0].entries[0]
}

/// All entries across sections, flattened in declaration order.
///
/// Used for cursor movement in the panel: the cursor walks this sequence.
pub fn flat_entries() -> Vec<NavEntry> {
    MANIFEST
        .iter()
        .flat_map(|section| section.entries.iter().copied())
        .collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_active_exact_match_only() {
        assert!(is_active("/docs/introduction", "/docs/introduction"));
        assert!(!is_active("/docs", "/docs/introduction"));
        assert!(!is_active("/docs/introduction", "/docs"));
    }

    #[test]
    fn test_is_active_trailing_slash_variants() {
        assert!(is_active("/docs/requests", "/docs/requests/"));
        assert!(is_active("/docs/requests/", "/docs/requests"));
    }

    #[test]
    fn test_is_active_malformed_is_false() {
        assert!(!is_active("/docs/requests", "docs/requests"));
        assert!(!is_active("/docs/requests", ""));
        assert!(!is_active("/docs/requests", "/docs//requests"));
    }

    #[test]
    fn test_at_most_one_entry_active_per_path() {
        // For every entry path taken as the current location, exactly one
        // manifest entry may report active.
        for section in MANIFEST {
            for entry in section.entries {
                let active_count = flat_entries()
                    .iter()
                    .filter(|e| is_active(e.path, entry.path))
                    .count();
                assert_eq!(
                    active_count, 1,
                    "path {} should activate exactly one entry",
                    entry.path
                );
            }
        }
    }

    #[test]
    fn test_default_entry_is_first_of_first_section() {
        let entry = default_entry();
        assert_eq!(entry.path, "/docs/introduction");
        assert_eq!(entry.label, "Introduction");
    }

    #[test]
    fn test_flat_entries_preserve_declaration_order() {
        let paths: Vec<&str> = flat_entries().iter().map(|e| e.path).collect();
        assert_eq!(
            paths,
            vec![
                "/docs/introduction",
                "/docs/installation",
                "/docs/basic-usage",
                "/docs/requests",
                "/docs/notifications",
                "/docs/behaviors",
                "/docs/notification-behaviors",
                "/docs/auto-registration",
            ]
        );
    }

    #[test]
    fn test_manifest_paths_match_route_table() {
        // Every nav entry must have a backing route table pattern.
        use crate::route::{docs_route_table, resolve_docs, Resolution};
        let table = docs_route_table();
        for entry in flat_entries() {
            let sub = entry.path.trim_start_matches("/docs").to_string();
            match resolve_docs(&table, &sub) {
                Resolution::View(_) => {}
                other => panic!("nav entry {} resolves to {other:?}", entry.path),
            }
        }
    }
}
