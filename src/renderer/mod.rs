//! Terminal renderer.
//!
//! The pipeline produces a [`Frame`] of styled lines; the [`DiffRenderer`]
//! compares it against the previous frame and rewrites only the rows that
//! changed, wrapped in a synchronized update and flushed in one syscall.

mod buffer;
mod diff;
mod output;

pub use buffer::{truncate_line, Frame};
pub use diff::DiffRenderer;
pub use output::OutputBuffer;
