//! Board module - manages the tile grid
//!
//! The board is a `rows x cols` grid where each cell is empty or holds a tile.
//! Uses a flat vector in row-major order for cache locality.
//! Coordinates: (row, col) where row 0 is the top row and col 0 the left column.
//!
//! Engine operations never mutate a board they are given: they clone it,
//! transform the clone and hand it back. The mutators here are for building
//! boards (generation, fixtures) and for those transforms.

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::EngineError;
use crate::types::{Cell, Coord, Tile, TileKind, TileState};

/// The game board - flat row-major cell storage plus the id counter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
    /// Id handed to the next created tile; only ever grows
    next_id: u32,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            next_id: 1,
        }
    }

    /// Calculate flat index from a coordinate
    #[inline(always)]
    fn index(&self, coord: Coord) -> Option<usize> {
        if coord.row >= self.rows || coord.col >= self.cols {
            return None;
        }
        Some(coord.row * self.cols + coord.col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check if a coordinate lies inside the grid
    pub fn contains(&self, coord: Coord) -> bool {
        self.index(coord).is_some()
    }

    /// Like [`Board::contains`], but as an error for `?` propagation
    pub fn check(&self, coord: Coord) -> Result<(), EngineError> {
        if self.contains(coord) {
            Ok(())
        } else {
            Err(EngineError::InvalidCoordinate {
                coord,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Get cell at a coordinate
    /// Returns None if out of bounds
    pub fn get(&self, coord: Coord) -> Option<Cell> {
        self.index(coord).map(|idx| self.cells[idx])
    }

    /// Tile at a coordinate, if in bounds and occupied
    pub fn tile(&self, coord: Coord) -> Option<&Tile> {
        self.index(coord).and_then(|idx| self.cells[idx].as_ref())
    }

    pub fn kind_at(&self, coord: Coord) -> Option<TileKind> {
        self.tile(coord).map(|tile| tile.kind)
    }

    /// Set cell at a coordinate
    /// Returns false if out of bounds
    pub fn set(&mut self, coord: Coord, cell: Cell) -> bool {
        match self.index(coord) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Empty a cell and return what it held
    pub fn take(&mut self, coord: Coord) -> Cell {
        self.index(coord).and_then(|idx| self.cells[idx].take())
    }

    /// Put a freshly created idle tile at a coordinate
    /// Returns the new tile's id, or None if out of bounds
    pub fn place_new(&mut self, coord: Coord, kind: TileKind) -> Option<u32> {
        let idx = self.index(coord)?;
        let id = self.alloc_id();
        self.cells[idx] = Some(Tile::new(id, kind));
        Some(id)
    }

    /// Exchange two cells
    /// Returns false (and changes nothing) if either is out of bounds
    pub fn swap_cells(&mut self, a: Coord, b: Coord) -> bool {
        match (self.index(a), self.index(b)) {
            (Some(ia), Some(ib)) => {
                self.cells.swap(ia, ib);
                true
            }
            _ => false,
        }
    }

    /// Id the next created tile will receive
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    fn alloc_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Check that every cell holds a tile
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Largest tile id currently on the board (0 if empty)
    pub fn max_id(&self) -> u32 {
        self.cells.iter().flatten().map(|tile| tile.id).max().unwrap_or(0)
    }

    /// Check that no two tiles share an id
    pub fn has_unique_ids(&self) -> bool {
        let mut ids: Vec<u32> = self.cells.iter().flatten().map(|tile| tile.id).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        ids.len() == total
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let cols = self.cols;
        (0..self.rows * cols).map(move |i| Coord::new(i / cols, i % cols))
    }

    /// Occupied cells in row-major order
    pub fn tiles(&self) -> impl Iterator<Item = (Coord, &Tile)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(i, cell)| {
            cell.as_ref()
                .map(|tile| (Coord::new(i / self.cols, i % self.cols), tile))
        })
    }

    /// In-bounds 4-directional neighbours (up, left, right, down)
    pub fn neighbors(&self, coord: Coord) -> ArrayVec<Coord, 4> {
        let mut out = ArrayVec::new();
        if !self.contains(coord) {
            return out;
        }
        if coord.row > 0 {
            out.push(Coord::new(coord.row - 1, coord.col));
        }
        if coord.col > 0 {
            out.push(Coord::new(coord.row, coord.col - 1));
        }
        if coord.col + 1 < self.cols {
            out.push(Coord::new(coord.row, coord.col + 1));
        }
        if coord.row + 1 < self.rows {
            out.push(Coord::new(coord.row + 1, coord.col));
        }
        out
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Copy of the board with every tile back in the idle state
    pub fn settled(&self) -> Board {
        let mut next = self.clone();
        for tile in next.cells.iter_mut().flatten() {
            tile.state = TileState::Idle;
        }
        next
    }

    /// Build a board from rows of kind symbols (`.` is an empty cell)
    ///
    /// Ids are assigned row-major starting at 1. Returns None for ragged rows
    /// or unknown symbols.
    ///
    /// ```
    /// use build_match_core::Board;
    ///
    /// let board = Board::from_symbols(&["BBW", "G.S"]).unwrap();
    /// assert_eq!(board.rows(), 2);
    /// assert_eq!(board.empty_count(), 1);
    /// assert_eq!(board.to_symbols(), vec!["BBW", "G.S"]);
    /// ```
    pub fn from_symbols(rows: &[&str]) -> Option<Self> {
        let cols = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut board = Board::new(rows.len(), cols);
        for (r, line) in rows.iter().enumerate() {
            if line.chars().count() != cols {
                return None;
            }
            for (c, ch) in line.chars().enumerate() {
                if ch == '.' {
                    continue;
                }
                let kind = TileKind::from_symbol(ch)?;
                board.place_new(Coord::new(r, c), kind);
            }
        }
        Some(board)
    }

    /// Rows of kind symbols (`.` for empty)
    pub fn to_symbols(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(|tile| tile.kind.symbol()).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.to_symbols().iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}
