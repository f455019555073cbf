//! Session layer on top of the resolution engine.
//!
//! [`Session`] is what a host application holds: the current board, score,
//! seed and the `Idle`/`Resolving` state machine. [`select`] implements the
//! two-click swap protocol.

pub mod select;
pub mod session;

pub use select::{apply_select, Selection};
pub use session::{ResolutionState, Session, SessionSnapshot};
