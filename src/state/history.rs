//! Navigation history - the host-provided navigation collaborator.
//!
//! Owns the observable current path plus browser-style back/forward stacks.
//! The router and shell only ever read the current-path signal; committing a
//! navigation goes through [`navigate_to`], [`back`] and [`forward`].
//!
//! Replace semantics matter for the docs-root redirect: a replacing
//! navigation swaps the current entry without growing the back stack, so the
//! synthetic `/docs` location never becomes a distinct history entry.
//!
//! # Example
//!
//! ```
//! use courier_docs::state::history;
//!
//! history::reset_history();
//! history::navigate_to("/docs/introduction", false);
//! history::navigate_to("/docs/requests", false);
//! history::back();
//! assert_eq!(history::current_path(), "/docs/introduction");
//! ```

use std::cell::RefCell;

use spark_signals::{signal, Signal};

/// Path the application starts on.
pub const INITIAL_PATH: &str = "/";

thread_local! {
    static CURRENT_PATH: Signal<String> = signal(INITIAL_PATH.to_string());
    static BACK_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static FORWARD_STACK: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
}

/// Get the current path (creates a reactive dependency when read inside an
/// effect or derived).
pub fn current_path() -> String {
    CURRENT_PATH.with(|s| s.get())
}

/// Clone the current-path signal for use inside deriveds.
pub fn current_path_signal() -> Signal<String> {
    CURRENT_PATH.with(Clone::clone)
}

/// Navigate to `path`.
///
/// With `replace = false` the current location is pushed onto the back stack
/// and the forward stack is cleared (a fresh branch of history). With
/// `replace = true` the current entry is swapped in place and both stacks
/// are left untouched.
///
/// Navigating to the current path is a no-op either way.
pub fn navigate_to(path: &str, replace: bool) {
    let previous = current_path();
    if previous == path {
        return;
    }

    if !replace {
        BACK_STACK.with(|stack| stack.borrow_mut().push(previous));
        FORWARD_STACK.with(|stack| stack.borrow_mut().clear());
    }

    CURRENT_PATH.with(|s| s.set(path.to_string()));
}

/// Go back one entry. No-op when the back stack is empty.
///
/// Returns true when a navigation happened.
pub fn back() -> bool {
    let Some(target) = BACK_STACK.with(|stack| stack.borrow_mut().pop()) else {
        return false;
    };
    FORWARD_STACK.with(|stack| stack.borrow_mut().push(current_path()));
    CURRENT_PATH.with(|s| s.set(target));
    true
}

/// Go forward one entry. No-op when the forward stack is empty.
///
/// Returns true when a navigation happened.
pub fn forward() -> bool {
    let Some(target) = FORWARD_STACK.with(|stack| stack.borrow_mut().pop()) else {
        return false;
    };
    BACK_STACK.with(|stack| stack.borrow_mut().push(current_path()));
    CURRENT_PATH.with(|s| s.set(target));
    true
}

/// Number of entries behind the current location.
pub fn back_len() -> usize {
    BACK_STACK.with(|stack| stack.borrow().len())
}

/// Number of entries ahead of the current location.
pub fn forward_len() -> usize {
    FORWARD_STACK.with(|stack| stack.borrow().len())
}

/// Reset to the initial location with empty stacks (for tests).
pub fn reset_history() {
    BACK_STACK.with(|stack| stack.borrow_mut().clear());
    FORWARD_STACK.with(|stack| stack.borrow_mut().clear());
    CURRENT_PATH.with(|s| s.set(INITIAL_PATH.to_string()));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_navigation_grows_back_stack() {
        reset_history();

        navigate_to("/docs/introduction", false);
        navigate_to("/docs/requests", false);

        assert_eq!(current_path(), "/docs/requests");
        assert_eq!(back_len(), 2);
        assert_eq!(forward_len(), 0);
    }

    #[test]
    fn test_back_and_forward_round_trip() {
        reset_history();

        navigate_to("/docs/introduction", false);
        navigate_to("/docs/requests", false);

        assert!(back());
        assert_eq!(current_path(), "/docs/introduction");
        assert_eq!(forward_len(), 1);

        assert!(forward());
        assert_eq!(current_path(), "/docs/requests");
        assert_eq!(forward_len(), 0);
    }

    #[test]
    fn test_back_on_empty_stack_is_noop() {
        reset_history();
        assert!(!back());
        assert_eq!(current_path(), INITIAL_PATH);
    }

    #[test]
    fn test_replace_does_not_grow_back_stack() {
        reset_history();

        navigate_to("/docs", false);
        assert_eq!(back_len(), 1);

        // Replacing swaps the top entry in place
        navigate_to("/docs/introduction", true);
        assert_eq!(current_path(), "/docs/introduction");
        assert_eq!(back_len(), 1);

        // Going back skips the replaced /docs entirely
        assert!(back());
        assert_eq!(current_path(), INITIAL_PATH);
    }

    #[test]
    fn test_push_navigation_clears_forward_stack() {
        reset_history();

        navigate_to("/docs/introduction", false);
        back();
        assert_eq!(forward_len(), 1);

        navigate_to("/docs/requests", false);
        assert_eq!(forward_len(), 0, "a fresh navigation branches history");
    }

    #[test]
    fn test_navigate_to_current_path_is_noop() {
        reset_history();

        navigate_to("/docs/introduction", false);
        navigate_to("/docs/introduction", false);
        assert_eq!(back_len(), 1);
    }

    #[test]
    fn test_current_path_signal_is_reactive() {
        use std::cell::RefCell;
        use std::rc::Rc;

        use spark_signals::effect;

        reset_history();

        let seen: Rc<RefCell<Vec<String>>> = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = seen.clone();

        let _stop = effect(move || {
            seen_clone.borrow_mut().push(current_path());
        });

        navigate_to("/docs", false);

        let seen = seen.borrow();
        assert_eq!(seen.as_slice(), ["/".to_string(), "/docs".to_string()]);
    }
}
