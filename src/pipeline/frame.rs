//! Frame derived and code-sample mounts.
//!
//! The derived is the pure half of rendering: it reads the path, the
//! resolution, the panel cursor, the scroll offset, the theme and the
//! terminal size, and composes a full [`ComposedFrame`]. Tokenization is the
//! impure half: each code sample on the current view gets a mount holding a
//! [`Refresher`] and a lines signal, and the event loop runs the refreshers
//! after every commit. Setting a lines signal re-dirties the derived, so the
//! highlighted repaint follows the plain paint on its own.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{derived, signal, Derived, Signal};

use crate::content;
use crate::highlight::{CodeSample, Refresher, SyntaxLexer, Tokenizer};
use crate::route::shell::ShellResolution;
use crate::route::{Resolution, ViewId};
use crate::shell::{compose_frame, ComposedFrame, ShellInput};
use crate::state::{history, scroll, selection};
use crate::theme;

use super::terminal::{terminal_height_signal, terminal_width_signal};

// =============================================================================
// Code Sample Mounts
// =============================================================================

/// One mounted code sample: its text, its refresher, and the lines signal
/// the frame derived reads.
pub struct SampleMount {
    sample: CodeSample,
    lines: Signal<Option<Vec<crate::types::Line>>>,
    refresher: RefCell<Refresher>,
}

impl SampleMount {
    fn new(sample: CodeSample, tokenizer: Rc<dyn Tokenizer>) -> Self {
        Self {
            sample,
            lines: signal(None),
            refresher: RefCell::new(Refresher::new(tokenizer)),
        }
    }

    /// Run one refresh pass. Returns true if the lines signal was updated.
    pub fn refresh(&self) -> bool {
        match self.refresher.borrow_mut().refresh(&self.sample) {
            Some(lines) => {
                self.lines.set(Some(lines));
                true
            }
            None => false,
        }
    }

    /// Drop the baseline so the next pass re-tokenizes (theme changes).
    pub fn invalidate(&self) {
        self.refresher.borrow_mut().invalidate();
    }
}

/// All sample mounts for one documentation view.
pub struct ViewMount {
    view: ViewId,
    samples: Vec<Rc<SampleMount>>,
}

impl ViewMount {
    fn new(view: ViewId) -> Self {
        let tokenizer: Rc<dyn Tokenizer> = Rc::new(SyntaxLexer);
        let samples = content::page(view)
            .code_samples()
            .into_iter()
            .map(|sample| Rc::new(SampleMount::new(sample.clone(), tokenizer.clone())))
            .collect();
        Self { view, samples }
    }

    pub fn samples(&self) -> &[Rc<SampleMount>] {
        &self.samples
    }
}

thread_local! {
    static CURRENT_MOUNT: RefCell<Option<Rc<ViewMount>>> = const { RefCell::new(None) };
}

/// The mount for `view`, creating it (and dropping any other view's mount)
/// on first access.
///
/// Leaving a view unmounts its samples, so a later revisit starts from a
/// fresh baseline and re-tokenizes.
pub fn mount_for(view: ViewId) -> Rc<ViewMount> {
    CURRENT_MOUNT.with(|slot| {
        let mut slot = slot.borrow_mut();
        match slot.as_ref() {
            Some(mount) if mount.view == view => mount.clone(),
            _ => {
                let mount = Rc::new(ViewMount::new(view));
                *slot = Some(mount.clone());
                mount
            }
        }
    })
}

/// Refresh every sample mounted for the current resolution.
///
/// Called by the event loop after each commit. Returns true if any sample
/// produced new lines (i.e. a highlighted repaint is pending).
pub fn refresh_mounted(resolution: &ShellResolution) -> bool {
    let ShellResolution::Docs(Resolution::View(view)) = resolution else {
        CURRENT_MOUNT.with(|slot| slot.borrow_mut().take());
        return false;
    };

    let mount = mount_for(*view);
    let mut updated = false;
    for sample in mount.samples() {
        updated |= sample.refresh();
    }
    updated
}

/// Invalidate every mounted sample so the next refresh restyles it.
pub fn invalidate_mounted() {
    CURRENT_MOUNT.with(|slot| {
        if let Some(mount) = slot.borrow().as_ref() {
            for sample in mount.samples() {
                sample.invalidate();
            }
        }
    });
}

/// Drop all mounts (for tests).
pub fn reset_mounts() {
    CURRENT_MOUNT.with(|slot| slot.borrow_mut().take());
}

// =============================================================================
// Frame Derived
// =============================================================================

/// Create the derived that composes the visible frame.
pub fn create_frame_derived(resolution: Derived<ShellResolution>) -> Derived<ComposedFrame> {
    let width = terminal_width_signal();
    let height = terminal_height_signal();
    let path = history::current_path_signal();
    let cursor = selection::selected_signal();
    let offset = scroll::offset_signal();
    let theme = theme::theme_signal();

    derived(move || {
        let input = ShellInput {
            width: width.get(),
            height: height.get(),
            path: path.get(),
            resolution: resolution.get(),
            cursor: cursor.get(),
            scroll: offset.get(),
            theme: theme.get(),
        };

        // Reading each lines signal here makes the derived recompute when a
        // refresher finishes, which is what turns the plain paint into the
        // highlighted one.
        match &input.resolution {
            ShellResolution::Docs(Resolution::View(view)) => {
                let mount = mount_for(*view);
                let lines: Vec<Option<Vec<crate::types::Line>>> = mount
                    .samples()
                    .iter()
                    .map(|sample| sample.lines.get())
                    .collect();
                compose_frame(&input, &|i| lines.get(i).cloned().flatten())
            }
            _ => compose_frame(&input, &|_| None),
        }
    })
}

// =============================================================================
// Tests
// =============================================================================
