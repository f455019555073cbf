//! Swap validation
//!
//! A swap is kept only if it creates at least one match. Adjacency is the
//! caller's rule (see the session layer); any two in-bounds cells are accepted
//! here.

use crate::board::Board;
use crate::error::EngineError;
use crate::matcher::has_matches;
use crate::types::Coord;

/// Result of a trial swap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    /// The swapped board if accepted, otherwise an unchanged copy of the input
    pub board: Board,
    pub swapped: bool,
}

/// Swap two cells and keep the result only if it contains a match
pub fn swap_if_valid(
    board: &Board,
    a: Coord,
    b: Coord,
    min_match: usize,
) -> Result<SwapOutcome, EngineError> {
    board.check(a)?;
    board.check(b)?;

    let mut next = board.clone();
    next.swap_cells(a, b);

    if has_matches(&next, min_match) {
        Ok(SwapOutcome {
            board: next,
            swapped: true,
        })
    } else {
        Ok(SwapOutcome {
            board: board.clone(),
            swapped: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_creating_match_is_kept() {
        let board = Board::from_symbols(&["BBW", "WSB"]).unwrap();
        let outcome = swap_if_valid(&board, Coord::new(0, 2), Coord::new(1, 2), 3).unwrap();
        assert!(outcome.swapped);
        assert_eq!(outcome.board.to_symbols(), vec!["BBB", "WSW"]);
    }

    #[test]
    fn test_swap_without_match_is_rejected_unchanged() {
        let board = Board::from_symbols(&["BBW", "GSC"]).unwrap();
        let outcome = swap_if_valid(&board, Coord::new(0, 1), Coord::new(0, 2), 3).unwrap();
        assert!(!outcome.swapped);
        assert_eq!(outcome.board, board);
    }

    #[test]
    fn test_swap_out_of_bounds_is_an_error() {
        let board = Board::from_symbols(&["BBW"]).unwrap();
        let err = swap_if_valid(&board, Coord::new(0, 2), Coord::new(0, 3), 3).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvalidCoordinate {
                coord: Coord::new(0, 3),
                rows: 1,
                cols: 3
            }
        );
    }

    #[test]
    fn test_swap_does_not_require_adjacency() {
        let board = Board::from_symbols(&["BBGWB"]).unwrap();
        let far = swap_if_valid(&board, Coord::new(0, 2), Coord::new(0, 4), 3).unwrap();
        assert!(far.swapped);
        assert_eq!(far.board.to_symbols(), vec!["BBBWG"]);
    }
}
