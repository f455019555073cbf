//! Board resolution engine - pure, deterministic, and testable
//!
//! This crate contains the match-3 rules: match detection, removal, gravity,
//! refill, swap validation and cascade iteration. It has **zero dependencies**
//! on rendering, animation timing or input handling, making it:
//!
//! - **Deterministic**: Same seed produces identical boards and cascades
//! - **Value-semantic**: Every transform returns a new [`Board`]; inputs are never mutated
//! - **Pace-agnostic**: A cascade is a sequence of discrete steps the caller consumes at its own speed
//!
//! # Module Structure
//!
//! - [`rng`]: 32-bit xorshift generator for tile kinds
//! - [`board`]: the tile grid, ids and coordinates
//! - [`matcher`]: run detection in both axes
//! - [`gravity`]: stable per-column compaction
//! - [`refill`]: fresh tiles for empty cells
//! - [`generate`]: initial boards without pre-existing matches
//! - [`swap`]: trial swaps that are kept only when they match
//! - [`cascade`]: the detect/remove/settle/refill state machine
//! - [`hint`]: accepted swaps still available on a board
//! - [`snapshot`]: plain-data board copies with a stable hash
//!
//! # Example
//!
//! ```
//! use build_match_core::{create_initial_board, find_all_matches, find_valid_swap,
//!     resolve_cascade, swap_if_valid, XorShiftRng};
//! use build_match_types::GameConfig;
//!
//! let config = GameConfig::default();
//! let mut rng = XorShiftRng::new(1);
//! let board = create_initial_board(&config, &mut rng).unwrap();
//! assert!(find_all_matches(&board, config.min_match).is_empty());
//!
//! if let Some((a, b)) = find_valid_swap(&board, config.min_match) {
//!     let outcome = swap_if_valid(&board, a, b, config.min_match).unwrap();
//!     assert!(outcome.swapped);
//!
//!     let mut score = 0;
//!     for step in resolve_cascade(&outcome.board, &mut rng, &config) {
//!         score += step.unwrap().score_delta;
//!     }
//!     assert!(score >= 30);
//! }
//! ```

pub mod board;
pub mod cascade;
pub mod error;
pub mod generate;
pub mod gravity;
pub mod hint;
pub mod matcher;
pub mod refill;
pub mod rng;
pub mod snapshot;
pub mod swap;

pub use build_match_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use cascade::{
    resolve_cascade, run_cascade, Cascade, CascadePhase, CascadeState, CascadeStep,
    CascadeSummary,
};
pub use error::EngineError;
pub use generate::create_initial_board;
pub use gravity::apply_gravity;
pub use hint::{find_valid_swap, is_dead, valid_swaps};
pub use matcher::{find_all_matches, has_matches, matched_cells};
pub use refill::refill_hidden_rows;
pub use rng::XorShiftRng;
pub use snapshot::BoardSnapshot;
pub use swap::{swap_if_valid, SwapOutcome};
