//! Match finder - run-length scanning in both axes
//!
//! Rows are scanned first, left to right. Every run of at least `min_match`
//! equal kinds becomes a horizontal group and its cells are marked visited.
//! Columns are scanned next, top to bottom; a vertical run only keeps the cells
//! no horizontal group claimed, so an L/T intersection cell appears in exactly
//! one group. Empty cells break runs.

use crate::board::Board;
use crate::types::{Axis, Coord, MatchGroup, TileKind};

/// Find all match groups on the board
pub fn find_all_matches(board: &Board, min_match: usize) -> Vec<MatchGroup> {
    let rows = board.rows();
    let cols = board.cols();
    let mut visited = vec![false; rows * cols];
    let mut groups = Vec::new();

    for r in 0..rows {
        scan_line(board, cols, |i| Coord::new(r, i), |run| {
            if run.len() >= min_match {
                for cell in &run.cells {
                    visited[cell.row * cols + cell.col] = true;
                }
                groups.push(MatchGroup {
                    kind: run.kind,
                    axis: Axis::Horizontal,
                    cells: run.cells,
                });
            }
        });
    }

    for c in 0..cols {
        scan_line(board, rows, |i| Coord::new(i, c), |run| {
            if run.len() < min_match {
                return;
            }
            let cells: Vec<Coord> = run
                .cells
                .iter()
                .copied()
                .filter(|cell| !visited[cell.row * cols + cell.col])
                .collect();
            if cells.is_empty() {
                return;
            }
            for cell in &run.cells {
                visited[cell.row * cols + cell.col] = true;
            }
            groups.push(MatchGroup {
                kind: run.kind,
                axis: Axis::Vertical,
                cells,
            });
        });
    }

    groups
}

/// True if any run of at least `min_match` exists
pub fn has_matches(board: &Board, min_match: usize) -> bool {
    !find_all_matches(board, min_match).is_empty()
}

/// Distinct cells covered by the groups, in group order
pub fn matched_cells(groups: &[MatchGroup]) -> Vec<Coord> {
    let mut cells: Vec<Coord> = Vec::with_capacity(groups.iter().map(MatchGroup::len).sum());
    for cell in groups.iter().flat_map(|group| group.cells.iter()) {
        if !cells.contains(cell) {
            cells.push(*cell);
        }
    }
    cells
}

/// Number of equal-kind tiles in a line through `at`, counting `at` as `kind`
///
/// Used to check whether putting `kind` at `at` would complete a run.
pub(crate) fn run_length_through(
    board: &Board,
    at: Coord,
    kind: TileKind,
    axis: Axis,
) -> usize {
    let step = |coord: Coord, forward: bool| -> Option<Coord> {
        match (axis, forward) {
            (Axis::Horizontal, true) => Some(Coord::new(coord.row, coord.col + 1)),
            (Axis::Horizontal, false) => coord.col.checked_sub(1).map(|c| Coord::new(coord.row, c)),
            (Axis::Vertical, true) => Some(Coord::new(coord.row + 1, coord.col)),
            (Axis::Vertical, false) => coord.row.checked_sub(1).map(|r| Coord::new(r, coord.col)),
        }
    };

    let mut len = 1;
    for forward in [false, true] {
        let mut cursor = step(at, forward);
        while let Some(coord) = cursor {
            if board.kind_at(coord) != Some(kind) {
                break;
            }
            len += 1;
            cursor = step(coord, forward);
        }
    }
    len
}

struct Run {
    kind: TileKind,
    cells: Vec<Coord>,
}

impl Run {
    fn len(&self) -> usize {
        self.cells.len()
    }
}

/// Walk one line of `len` cells and hand every maximal same-kind run to `emit`
fn scan_line(
    board: &Board,
    len: usize,
    at: impl Fn(usize) -> Coord,
    mut emit: impl FnMut(Run),
) {
    let mut start = 0;
    while start < len {
        let Some(kind) = board.kind_at(at(start)) else {
            start += 1;
            continue;
        };
        let mut end = start + 1;
        while end < len && board.kind_at(at(end)) == Some(kind) {
            end += 1;
        }
        emit(Run {
            kind,
            cells: (start..end).map(&at).collect(),
        });
        start = end;
    }
}
