//! Reactive application state modules.
//!
//! Each module owns a piece of thread-local signal state with plain-function
//! accessors, following the same shape everywhere:
//! - `history` - current path plus back/forward stacks (the navigation collaborator)
//! - `selection` - panel cursor over the flattened navigation manifest
//! - `scroll` - vertical offset of the content area

pub mod history;
pub mod scroll;
pub mod selection;
