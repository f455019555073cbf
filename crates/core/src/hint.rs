//! Move hints - adjacent swaps that would be accepted

use crate::board::Board;
use crate::swap::swap_if_valid;
use crate::types::Coord;

/// Every accepted adjacent swap, each unordered pair once, row-major
///
/// Only the right and down neighbours of each cell are tried, so a pair is
/// never listed twice.
pub fn valid_swaps(board: &Board, min_match: usize) -> Vec<(Coord, Coord)> {
    board
        .coords()
        .flat_map(|a| {
            board
                .neighbors(a)
                .into_iter()
                .filter(move |b| (b.row, b.col) > (a.row, a.col))
                .map(move |b| (a, b))
        })
        .filter(|&(a, b)| {
            matches!(swap_if_valid(board, a, b, min_match), Ok(outcome) if outcome.swapped)
        })
        .collect()
}

/// First accepted adjacent swap, if the board has any move left
pub fn find_valid_swap(board: &Board, min_match: usize) -> Option<(Coord, Coord)> {
    valid_swaps(board, min_match).into_iter().next()
}

/// True when no adjacent swap would create a match
pub fn is_dead(board: &Board, min_match: usize) -> bool {
    find_valid_swap(board, min_match).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_single_move() {
        let board = Board::from_symbols(&["BBW", "GSB"]).unwrap();
        assert_eq!(
            valid_swaps(&board, 3),
            vec![(Coord::new(0, 2), Coord::new(1, 2))]
        );
        assert_eq!(
            find_valid_swap(&board, 3),
            Some((Coord::new(0, 2), Coord::new(1, 2)))
        );
    }

    #[test]
    fn test_dead_board() {
        let board = Board::from_symbols(&["BW", "SG"]).unwrap();
        assert!(valid_swaps(&board, 3).is_empty());
        assert!(is_dead(&board, 3));
    }

    #[test]
    fn test_pairs_are_adjacent_and_ordered() {
        let board = Board::from_symbols(&["BWBB", "WBWW", "GSBG"]).unwrap();
        let swaps = valid_swaps(&board, 3);
        assert!(!swaps.is_empty());
        for (a, b) in swaps {
            assert!(a.is_adjacent(b));
            assert!(a < b);
        }
    }
}
