//! Initial board generation with anti-match correction
//!
//! The grid is filled at random, then every remaining match is broken by
//! replacing the middle cell of each group with a kind that forms no run
//! through that cell. Such a replacement can never create a new match, so the
//! matched set shrinks on every pass.

use crate::board::Board;
use crate::error::EngineError;
use crate::matcher::{find_all_matches, run_length_through};
use crate::rng::XorShiftRng;
use crate::types::{Axis, Coord, GameConfig, TileKind};

/// Correction passes before generation gives up
const MAX_GENERATION_PASSES: u32 = 64;

/// Create a fully populated board with no pre-existing matches
pub fn create_initial_board(
    config: &GameConfig,
    rng: &mut XorShiftRng,
) -> Result<Board, EngineError> {
    config.validate()?;

    let mut board = Board::new(config.total_rows(), config.cols);
    for coord in board.coords().collect::<Vec<_>>() {
        board.place_new(coord, rng.pick_kind(&config.kinds));
    }

    for _ in 0..MAX_GENERATION_PASSES {
        let groups = find_all_matches(&board, config.min_match);
        if groups.is_empty() {
            return Ok(board);
        }
        for group in &groups {
            let mid = group.cells[group.cells.len() / 2];
            let kind = pick_safe_kind(&board, mid, config, rng);
            board.place_new(mid, kind);
        }
    }

    if find_all_matches(&board, config.min_match).is_empty() {
        Ok(board)
    } else {
        Err(EngineError::NonConvergence {
            cycles: MAX_GENERATION_PASSES,
        })
    }
}

/// Draw a kind for `at`, cycling forward from the RNG's pick until one forms no run
///
/// Falls back to the RNG's pick when every kind would complete a run (only
/// possible with very few kinds).
fn pick_safe_kind(
    board: &Board,
    at: Coord,
    config: &GameConfig,
    rng: &mut XorShiftRng,
) -> TileKind {
    let kinds = &config.kinds;
    let start = rng.next_index(kinds.len());
    (0..kinds.len())
        .map(|offset| kinds[(start + offset) % kinds.len()])
        .find(|&kind| !completes_run(board, at, kind, config.min_match))
        .unwrap_or(kinds[start])
}

fn completes_run(board: &Board, at: Coord, kind: TileKind, min_match: usize) -> bool {
    [Axis::Horizontal, Axis::Vertical]
        .into_iter()
        .any(|axis| run_length_through(board, at, kind, axis) >= min_match)
}
