//! Reactive pipeline.
//!
//! Connects the routing and state signals to the terminal output.
//!
//! # Pipeline Architecture
//!
//! ```text
//! path signal -> resolution derived -> frame derived -> render effect
//!                      |                                     |
//!               redirect effect                  post-commit highlight refresh
//! ```
//!
//! ## Data Flow
//!
//! 1. **resolution derived** - Maps the path through the route table
//! 2. **redirect effect** - Rewrites the location on redirect arms
//! 3. **frame derived** - Pure composition of the visible frame
//! 4. **render effect** - Diff-renders and reports the scroll range
//! 5. **tick** - Input events, then the highlight refresh pass
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: resolution and frame are pure computations
//! - **Side Effects in Effects**: history rewrites and terminal I/O only
//!   happen inside effects
//! - **Post-Commit Refresh**: tokenization runs after a frame is on screen,
//!   never inside the render pass that painted it

pub mod frame;
pub mod mount;
pub mod resolution;
pub mod terminal;

// Re-exports
pub use frame::{create_frame_derived, invalidate_mounted, refresh_mounted, SampleMount, ViewMount};
pub use mount::{mount, run, tick, unmount, MountHandle};
pub use resolution::{create_redirect_effect, create_resolution_derived};
pub use terminal::{
    detect_terminal_size, set_terminal_size, terminal_height, terminal_width, DEFAULT_SIZE,
};
