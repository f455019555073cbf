//! Refill - fills holes with fresh tiles
//!
//! After gravity the holes sit at the top of each column, inside the hidden
//! spawn rows, so new tiles appear out of sight and fall in on the next
//! cascade. The fill itself does not depend on where the holes are.

use crate::board::Board;
use crate::rng::XorShiftRng;
use crate::types::TileKind;

/// Fill every empty cell (row-major) with a new idle tile drawn from `kinds`
///
/// Occupied cells are left untouched. New ids continue from the board's id
/// counter.
pub fn refill_hidden_rows(board: &Board, rng: &mut XorShiftRng, kinds: &[TileKind]) -> Board {
    let mut next = board.clone();
    let holes: Vec<_> = next
        .coords()
        .filter(|&coord| next.tile(coord).is_none())
        .collect();
    for coord in holes {
        next.place_new(coord, rng.pick_kind(kinds));
    }
    next
}
