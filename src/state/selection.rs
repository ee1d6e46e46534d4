//! Panel selection - the keyboard cursor over the navigation manifest.
//!
//! The cursor is presentation state only. It is independent of the active
//! entry (which is derived purely from the current path): the cursor marks
//! where Enter would navigate to, the active style marks where the
//! application currently is.

use spark_signals::{signal, Signal};

use crate::nav::{self, NavEntry};

thread_local! {
    static SELECTED: Signal<usize> = signal(0);
}

/// Index of the cursor within the flattened manifest.
pub fn selected_index() -> usize {
    SELECTED.with(|s| s.get())
}

/// Clone the selection signal for use inside deriveds.
pub fn selected_signal() -> Signal<usize> {
    SELECTED.with(Clone::clone)
}

/// The entry under the cursor.
pub fn selected_entry() -> NavEntry {
    let entries = nav::flat_entries();
    let index = selected_index().min(entries.len() - 1);
    entries[index]
}

/// Move the cursor up one entry, clamped at the top.
pub fn move_up() {
    SELECTED.with(|s| {
        let current = s.get();
        if current > 0 {
            s.set(current - 1);
        }
    });
}

/// Move the cursor down one entry, clamped at the bottom.
pub fn move_down() {
    SELECTED.with(|s| {
        let current = s.get();
        if current + 1 < nav::flat_entries().len() {
            s.set(current + 1);
        }
    });
}

/// Snap the cursor to the entry matching `path`, if any.
///
/// Keeps the cursor in step when navigation happens through history rather
/// than through the panel.
pub fn sync_to_path(path: &str) {
    if let Some(index) = nav::flat_entries()
        .iter()
        .position(|entry| nav::is_active(entry.path, path))
    {
        SELECTED.with(|s| {
            if s.get() != index {
                s.set(index);
            }
        });
    }
}

/// Reset the cursor to the first entry (for tests).
pub fn reset_selection() {
    SELECTED.with(|s| s.set(0));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_and_clamps() {
        reset_selection();

        move_up();
        assert_eq!(selected_index(), 0, "cursor clamps at the top");

        let last = nav::flat_entries().len() - 1;
        for _ in 0..last + 5 {
            move_down();
        }
        assert_eq!(selected_index(), last, "cursor clamps at the bottom");
    }

    #[test]
    fn test_selected_entry_follows_cursor() {
        reset_selection();
        assert_eq!(selected_entry().path, "/docs/introduction");

        move_down();
        assert_eq!(selected_entry().path, "/docs/installation");
    }

    #[test]
    fn test_sync_to_path() {
        reset_selection();

        sync_to_path("/docs/behaviors");
        assert_eq!(selected_entry().path, "/docs/behaviors");

        // Paths without a manifest entry leave the cursor alone
        sync_to_path("/docs/missing");
        assert_eq!(selected_entry().path, "/docs/behaviors");
    }
}
