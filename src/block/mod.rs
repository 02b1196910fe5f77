//! Block-level state machine.
//!
//! The state machine is line-oriented and handles:
//! - Unordered lists (`-` markers)
//! - Ordered lists (`*` markers)
//! - Paragraphs with `<br/>` between consecutive text lines
//!
//! At most one wrapper per line is opened; lists are always checked before
//! paragraphs, unordered before ordered.

mod event;
mod machine;
mod state;

use smallvec::SmallVec;

pub use event::{BlockEvent, LineRole, ListKind};
pub use machine::{step, LineOutput};
pub use state::BlockState;

/// Wrapper events produced by one line. Never more than three.
pub type Events = SmallVec<[BlockEvent; 4]>;
