//! Terminal size signals.
//!
//! Width and height live in signals so the frame derived recomputes on
//! resize. A resize event only has to call [`set_terminal_size`].

use spark_signals::{signal, Signal};

/// Fallback size when the terminal cannot be queried (e.g. under a pipe).
pub const DEFAULT_SIZE: (u16, u16) = (80, 24);

thread_local! {
    static TERMINAL_WIDTH: Signal<u16> = signal(DEFAULT_SIZE.0);
    static TERMINAL_HEIGHT: Signal<u16> = signal(DEFAULT_SIZE.1);
}

/// Current terminal width in columns.
pub fn terminal_width() -> u16 {
    TERMINAL_WIDTH.with(|s| s.get())
}

/// Current terminal height in rows.
pub fn terminal_height() -> u16 {
    TERMINAL_HEIGHT.with(|s| s.get())
}

/// Clone the width signal for use inside deriveds.
pub fn terminal_width_signal() -> Signal<u16> {
    TERMINAL_WIDTH.with(Clone::clone)
}

/// Clone the height signal for use inside deriveds.
pub fn terminal_height_signal() -> Signal<u16> {
    TERMINAL_HEIGHT.with(Clone::clone)
}

/// Update the stored size (typically from a resize event).
pub fn set_terminal_size(width: u16, height: u16) {
    TERMINAL_WIDTH.with(|s| {
        if s.get() != width {
            s.set(width);
        }
    });
    TERMINAL_HEIGHT.with(|s| {
        if s.get() != height {
            s.set(height);
        }
    });
}

/// Query the real terminal size and store it.
///
/// Falls back to [`DEFAULT_SIZE`] when the query fails.
pub fn detect_terminal_size() {
    let (width, height) = crossterm::terminal::size().unwrap_or(DEFAULT_SIZE);
    set_terminal_size(width, height);
}

// =============================================================================
// Tests
// =============================================================================
