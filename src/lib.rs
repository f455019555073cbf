//! Build & Match (workspace facade crate).
//!
//! Re-exports the engine crates under `build_match::{core,engine,types}` and
//! adds the host-side pieces: JSON observations and the step journal
//! ([`observe`]) and the demo runner's argument parsing ([`cli`]).

pub use build_match_core as core;
pub use build_match_engine as engine;
pub use build_match_types as types;

pub mod cli;
pub mod observe;
