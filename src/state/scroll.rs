//! Content scroll - vertical offset of the content area.
//!
//! Scrolling is bounded by the rendered content height, which the pipeline
//! reports after each frame. A navigation resets the offset to the top, the
//! same way a browser starts a fresh page at the top.

use spark_signals::{signal, Signal};

thread_local! {
    static OFFSET: Signal<usize> = signal(0);
    static MAX_OFFSET: Signal<usize> = signal(0);
}

/// Current scroll offset in rows.
pub fn offset() -> usize {
    OFFSET.with(|s| s.get())
}

/// Clone the offset signal for use inside deriveds.
pub fn offset_signal() -> Signal<usize> {
    OFFSET.with(Clone::clone)
}

/// Scroll down by `rows`, clamped to the last reported maximum.
pub fn scroll_down(rows: usize) {
    let max = MAX_OFFSET.with(|s| s.get());
    OFFSET.with(|s| {
        let next = (s.get() + rows).min(max);
        if next != s.get() {
            s.set(next);
        }
    });
}

/// Scroll up by `rows`, clamped at the top.
pub fn scroll_up(rows: usize) {
    OFFSET.with(|s| {
        let next = s.get().saturating_sub(rows);
        if next != s.get() {
            s.set(next);
        }
    });
}

/// Jump back to the top.
pub fn scroll_to_top() {
    OFFSET.with(|s| {
        if s.get() != 0 {
            s.set(0);
        }
    });
}

/// Report the scrollable range for the current view.
///
/// Called by the pipeline once the content height for a frame is known.
/// Shrinks the offset when the new content is shorter than the old scroll
/// position.
pub fn set_max_offset(max: usize) {
    MAX_OFFSET.with(|s| {
        if s.get() != max {
            s.set(max);
        }
    });
    OFFSET.with(|s| {
        if s.get() > max {
            s.set(max);
        }
    });
}

/// Reset scroll state (for tests).
pub fn reset_scroll() {
    OFFSET.with(|s| s.set(0));
    MAX_OFFSET.with(|s| s.set(0));
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_clamps_to_range() {
        reset_scroll();
        set_max_offset(10);

        scroll_down(4);
        assert_eq!(offset(), 4);

        scroll_down(100);
        assert_eq!(offset(), 10, "offset clamps at the reported maximum");

        scroll_up(100);
        assert_eq!(offset(), 0, "offset clamps at the top");
    }

    #[test]
    fn test_shrinking_content_pulls_offset_back() {
        reset_scroll();
        set_max_offset(20);
        scroll_down(15);

        set_max_offset(5);
        assert_eq!(offset(), 5);
    }

    #[test]
    fn test_scroll_to_top() {
        reset_scroll();
        set_max_offset(10);
        scroll_down(7);

        scroll_to_top();
        assert_eq!(offset(), 0);
    }
}
