//! Resolution derived and the redirect effect.
//!
//! The derived maps the current path signal through the route table; the
//! redirect effect watches it and rewrites the location whenever resolution
//! lands on a redirect arm, so a bare `/docs` never survives as a history
//! entry.

use spark_signals::{derived, effect, Derived};

use crate::route::shell::{resolve_shell, ShellResolution};
use crate::route::{docs_route_table, Resolution};
use crate::state::history;

/// Create the derived that resolves the current path.
///
/// The route table is built once at creation; resolution itself is a pure
/// lookup, so the derived recomputes only when the path signal changes.
pub fn create_resolution_derived() -> Derived<ShellResolution> {
    let path = history::current_path_signal();
    let table = docs_route_table();

    derived(move || resolve_shell(&table, &path.get()))
}

/// Spawn the effect that applies redirect arms to history.
///
/// A redirect always replaces the current entry, so going back never lands
/// on the redirecting path again. Returns the effect's stop function.
pub fn create_redirect_effect(resolution: Derived<ShellResolution>) -> impl FnOnce() {
    effect(move || {
        if let ShellResolution::Docs(Resolution::Redirect { to, replace }) = resolution.get() {
            history::navigate_to(&to, replace);
        }
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::ViewId;
    use crate::state::history::{back, back_len, current_path, navigate_to, reset_history};

    #[test]
    fn test_resolution_tracks_path_signal() {
        reset_history();
        let resolution = create_resolution_derived();

        assert_eq!(resolution.get(), ShellResolution::Home);

        navigate_to("/docs/requests", false);
        assert_eq!(
            resolution.get(),
            ShellResolution::Docs(Resolution::View(ViewId::Requests))
        );

        navigate_to("/nowhere", false);
        assert_eq!(resolution.get(), ShellResolution::NotFound);

        reset_history();
    }

    #[test]
    fn test_redirect_effect_replaces_docs_root() {
        reset_history();
        let resolution = create_resolution_derived();
        let stop = create_redirect_effect(resolution.clone());

        navigate_to("/docs", false);

        assert_eq!(current_path(), "/docs/introduction");
        assert_eq!(
            resolution.get(),
            ShellResolution::Docs(Resolution::View(ViewId::Introduction))
        );
        assert_eq!(
            back_len(),
            1,
            "the bare /docs entry is replaced, not stacked"
        );

        // Going back skips /docs entirely
        assert!(back());
        assert_eq!(current_path(), "/");

        stop();
        reset_history();
    }

    #[test]
    fn test_trailing_slash_redirects_too() {
        reset_history();
        let resolution = create_resolution_derived();
        let stop = create_redirect_effect(resolution);

        navigate_to("/docs/", false);
        assert_eq!(current_path(), "/docs/introduction");

        stop();
        reset_history();
    }
}
