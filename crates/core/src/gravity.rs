//! Gravity - stable per-column compaction
//!
//! Uses the same two-pointer scan as a line clear, turned on its side: each
//! column is read bottom to top and every tile is written to the lowest free
//! slot, so the tiles keep their relative order and the holes end up on top.

use crate::board::Board;
use crate::types::{Coord, TileState};

/// Let every tile fall as far as it can within its column
///
/// Tiles that moved are tagged `Falling`; tiles that stayed keep their state.
pub fn apply_gravity(board: &Board) -> Board {
    let mut next = board.clone();

    for col in 0..next.cols() {
        let mut write_row = next.rows();

        for read_row in (0..next.rows()).rev() {
            let from = Coord::new(read_row, col);
            let Some(tile) = next.take(from) else {
                continue;
            };
            write_row -= 1;
            let to = Coord::new(write_row, col);
            let tile = if write_row != read_row {
                tile.with_state(TileState::Falling)
            } else {
                tile
            };
            next.set(to, Some(tile));
        }
    }

    next
}
