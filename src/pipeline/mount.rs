//! Mount API - application lifecycle and the render effect.
//!
//! Mounting wires the reactive pipeline to the terminal:
//!
//! 1. path signal -> resolution derived (+ redirect effect)
//! 2. resolution + presentation state -> frame derived
//! 3. render effect: diff-render the frame, report the scroll range
//! 4. event loop tick: input events, then post-commit highlight refresh
//!
//! # Example
//!
//! ```ignore
//! use courier_docs::pipeline::mount;
//!
//! let handle = mount::mount()?;
//! mount::run(&handle)?;
//! handle.unmount();
//! ```

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_signals::effect;

use crate::renderer::DiffRenderer;
use crate::state::{history, scroll, selection};
use crate::theme;

use super::frame::{create_frame_derived, invalidate_mounted, refresh_mounted};
use super::resolution::{create_redirect_effect, create_resolution_derived};
use super::terminal::{detect_terminal_size, set_terminal_size};
use crate::shell::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Rows scrolled by PageUp/PageDown.
const PAGE_SCROLL: usize = 5;

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`] that allows unmounting.
pub struct MountHandle {
    stop_effects: Vec<Box<dyn FnOnce()>>,
    refresh: Box<dyn Fn() -> bool>,
    running: Arc<AtomicBool>,
}

impl MountHandle {
    /// Stop the effects and restore the terminal.
    pub fn unmount(mut self) {
        self.running.store(false, Ordering::SeqCst);

        for stop in self.stop_effects.drain(..) {
            stop();
        }

        restore_terminal();
    }

    /// Check if still running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Request a graceful shutdown.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        // Best effort if unmount() was never called
        for stop in self.stop_effects.drain(..) {
            stop();
        }
        restore_terminal();
    }
}

fn restore_terminal() {
    let mut renderer = DiffRenderer::new();
    let _ = renderer.exit_fullscreen();
    let _ = disable_raw_mode();
}

// =============================================================================
// Mount Function
// =============================================================================

/// Mount the documentation browser.
///
/// Sets up terminal size detection, the resolution and frame deriveds, the
/// redirect and render effects, and switches the terminal to fullscreen raw
/// mode. Returns a handle for ticking and cleanup.
pub fn mount() -> io::Result<MountHandle> {
    detect_terminal_size();
    enable_raw_mode()?;

    let resolution = create_resolution_derived();
    let stop_redirect = create_redirect_effect(resolution.clone());

    // Navigation side effects: a path change starts the new view at the top
    // with the panel cursor on the matching entry.
    let path_signal = history::current_path_signal();
    let stop_navigation = effect(move || {
        let path = path_signal.get();
        scroll::scroll_to_top();
        selection::sync_to_path(&path);
    });

    let frame_derived = create_frame_derived(resolution.clone());

    let running = Arc::new(AtomicBool::new(true));
    let running_clone = running.clone();

    let mut renderer = DiffRenderer::new();
    renderer.enter_fullscreen()?;

    let stop_render = effect(move || {
        if !running_clone.load(Ordering::SeqCst) {
            return;
        }

        // Read from the derived (creates the dependency)
        let composed = frame_derived.get();

        let body_height = composed
            .frame
            .height()
            .saturating_sub(HEADER_HEIGHT + FOOTER_HEIGHT) as usize;
        scroll::set_max_offset(composed.content_rows.saturating_sub(body_height));

        // Terminal I/O (side effect)
        let _ = renderer.render(&composed.frame);
    });

    let refresh = Box::new(move || refresh_mounted(&resolution.get()));

    Ok(MountHandle {
        stop_effects: vec![
            Box::new(stop_redirect),
            Box::new(stop_navigation),
            Box::new(stop_render),
        ],
        refresh,
        running,
    })
}

/// Unmount and clean up.
pub fn unmount(handle: MountHandle) {
    handle.unmount();
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once (non-blocking).
///
/// Polls for one input event, applies it to the state signals (the effects
/// repaint on their own), then runs the post-commit highlight refresh for
/// the current view's code samples.
///
/// Returns `Ok(false)` once the application should stop.
pub fn tick(handle: &MountHandle) -> io::Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if event::poll(Duration::from_millis(16))? {
        match event::read()? {
            Event::Key(key) => handle_key(key, handle),
            Event::Resize(width, height) => set_terminal_size(width, height),
            _ => {}
        }
    }

    // Post-commit refresh: the frame above painted plain; tokenizing now
    // re-dirties the frame derived and the next paint is highlighted.
    (handle.refresh)();

    Ok(handle.is_running())
}

/// Run the event loop (blocking until stopped).
pub fn run(handle: &MountHandle) -> io::Result<()> {
    while tick(handle)? {
        // Continue processing events
    }
    Ok(())
}

fn handle_key(key: KeyEvent, handle: &MountHandle) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            handle.stop();
        }
        KeyCode::Char('q') | KeyCode::Esc => handle.stop(),

        KeyCode::Up => selection::move_up(),
        KeyCode::Down => selection::move_down(),
        KeyCode::Enter => {
            history::navigate_to(selection::selected_entry().path, false);
        }

        KeyCode::Left | KeyCode::Backspace => {
            history::back();
        }
        KeyCode::Right => {
            history::forward();
        }
        KeyCode::Char('h') => history::navigate_to("/", false),
        KeyCode::Char('d') => history::navigate_to("/docs", false),

        KeyCode::Char('j') => scroll::scroll_down(1),
        KeyCode::Char('k') => scroll::scroll_up(1),
        KeyCode::PageDown => scroll::scroll_down(PAGE_SCROLL),
        KeyCode::PageUp => scroll::scroll_up(PAGE_SCROLL),
        KeyCode::Home => scroll::scroll_to_top(),

        KeyCode::Char('t') => {
            let next = if theme::active_theme().name == "tomorrow-night" {
                theme::terminal()
            } else {
                theme::tomorrow_night()
            };
            theme::set_theme(next);
            // Highlighted lines bake in token colors; force a re-style
            invalidate_mounted();
        }

        _ => {}
    }
}

// =============================================================================
// Tests
// =============================================================================
