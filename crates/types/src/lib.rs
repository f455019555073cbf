//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (resolution engine, session layer, observers, renderers).
//!
//! # Board Dimensions
//!
//! The default playfield is the classic Build & Match layout:
//!
//! - **Visible rows**: 6 (the bottom of the grid, what the player sees)
//! - **Hidden rows**: 6 (a spawn region above the visible area)
//! - **Columns**: 6
//!
//! Row 0 is the topmost row. The engine treats hidden and visible rows
//! uniformly; visibility only matters to renderers.
//!
//! # Rules Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_MATCH` | 3 | Shortest run that counts as a match |
//! | `SCORE_PER_TILE` | 10 | Points per removed tile |
//! | `MAX_CASCADE_CYCLES` | 256 | Safety ceiling for one cascade |
//!
//! # Examples
//!
//! ```
//! use build_match_types::{Coord, TileKind, MIN_MATCH};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(TileKind::from_str("Brick"), Some(TileKind::Brick));
//! assert_eq!(TileKind::from_symbol('W'), Some(TileKind::Wood));
//!
//! // Adjacency is 4-directional
//! assert!(Coord::new(2, 3).is_adjacent(Coord::new(2, 4)));
//! assert!(!Coord::new(2, 3).is_adjacent(Coord::new(3, 4)));
//!
//! assert_eq!(MIN_MATCH, 3);
//! ```

mod config;

pub use config::{ConfigError, GameConfig, MAX_GRID_CELLS};

/// Visible rows in the default layout
pub const DEFAULT_VISIBLE_ROWS: usize = 6;

/// Hidden spawn rows above the visible area in the default layout
pub const DEFAULT_HIDDEN_ROWS: usize = 6;

/// Columns in the default layout
pub const DEFAULT_COLS: usize = 6;

/// Minimum run length that counts as a match
pub const MIN_MATCH: usize = 3;

/// Points awarded per removed tile
pub const SCORE_PER_TILE: u32 = 10;

/// Removal cycles allowed in one cascade before it is treated as non-converging
pub const MAX_CASCADE_CYCLES: u32 = 256;

/// Building materials a tile can be made of
///
/// Each kind has a lowercase name, a single-letter symbol for text boards and
/// a numeric code (`1..=6`, with `0` reserved for an empty cell in snapshots):
///
/// | Kind | Symbol | Code |
/// |------|--------|------|
/// | Brick | `B` | 1 |
/// | Wood | `W` | 2 |
/// | Steel | `S` | 3 |
/// | Glass | `G` | 4 |
/// | Cement | `C` | 5 |
/// | Stone | `T` | 6 |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TileKind {
    Brick,
    Wood,
    Steel,
    Glass,
    Cement,
    Stone,
}

impl TileKind {
    /// Every kind, in code order
    pub const ALL: [TileKind; 6] = [
        TileKind::Brick,
        TileKind::Wood,
        TileKind::Steel,
        TileKind::Glass,
        TileKind::Cement,
        TileKind::Stone,
    ];

    /// Parse tile kind from its name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use build_match_types::TileKind;
    ///
    /// assert_eq!(TileKind::from_str("glass"), Some(TileKind::Glass));
    /// assert_eq!(TileKind::from_str("CEMENT"), Some(TileKind::Cement));
    /// assert_eq!(TileKind::from_str("gold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "brick" => Some(TileKind::Brick),
            "wood" => Some(TileKind::Wood),
            "steel" => Some(TileKind::Steel),
            "glass" => Some(TileKind::Glass),
            "cement" => Some(TileKind::Cement),
            "stone" => Some(TileKind::Stone),
            _ => None,
        }
    }

    /// Convert to lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            TileKind::Brick => "brick",
            TileKind::Wood => "wood",
            TileKind::Steel => "steel",
            TileKind::Glass => "glass",
            TileKind::Cement => "cement",
            TileKind::Stone => "stone",
        }
    }

    /// Single-letter symbol used by text boards
    pub fn symbol(&self) -> char {
        match self {
            TileKind::Brick => 'B',
            TileKind::Wood => 'W',
            TileKind::Steel => 'S',
            TileKind::Glass => 'G',
            TileKind::Cement => 'C',
            TileKind::Stone => 'T',
        }
    }

    /// Parse a symbol (case-insensitive)
    pub fn from_symbol(c: char) -> Option<Self> {
        TileKind::ALL
            .into_iter()
            .find(|kind| kind.symbol() == c.to_ascii_uppercase())
    }

    /// Snapshot code (`1..=6`)
    pub fn code(&self) -> u8 {
        match self {
            TileKind::Brick => 1,
            TileKind::Wood => 2,
            TileKind::Steel => 3,
            TileKind::Glass => 4,
            TileKind::Cement => 5,
            TileKind::Stone => 6,
        }
    }
}

/// Presentation hint attached to a tile
///
/// Set by the engine, consumed only by renderers:
/// - **Idle**: resting in place
/// - **Falling**: moved down by gravity in the last settle step
/// - **Popping**: removed by a match (only seen on popped tiles of a cascade step)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TileState {
    #[default]
    Idle,
    Falling,
    Popping,
}

impl TileState {
    pub fn as_str(&self) -> &'static str {
        match self {
            TileState::Idle => "idle",
            TileState::Falling => "falling",
            TileState::Popping => "popping",
        }
    }
}

/// A single tile on the board
///
/// `id` is unique per board and never reused; renderers use it to keep
/// animations attached to the same tile while it moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tile {
    pub id: u32,
    pub kind: TileKind,
    pub state: TileState,
}

impl Tile {
    /// Create an idle tile
    pub fn new(id: u32, kind: TileKind) -> Self {
        Self {
            id,
            kind,
            state: TileState::Idle,
        }
    }

    /// Copy of this tile with a different presentation state
    pub fn with_state(self, state: TileState) -> Self {
        Self { state, ..self }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell (only transient, between removal and refill)
/// - `Some(Tile)`: Cell holding a tile
pub type Cell = Option<Tile>;

/// Grid position, row 0 is the top row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance between two cells
    pub fn distance(self, other: Coord) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// True when the cells share an edge
    pub fn is_adjacent(self, other: Coord) -> bool {
        self.distance(other) == 1
    }
}

/// Axis along which a run was found
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::Horizontal => "horizontal",
            Axis::Vertical => "vertical",
        }
    }
}

/// A run of same-kind tiles found by the match finder
///
/// Cells are contiguous along `axis`. A vertical group only lists the cells
/// that were not already claimed by a horizontal group, so groups never share
/// a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGroup {
    pub kind: TileKind,
    pub axis: Axis,
    pub cells: Vec<Coord>,
}

impl MatchGroup {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_defaults() {
        assert_eq!(DEFAULT_VISIBLE_ROWS, 6);
        assert_eq!(DEFAULT_HIDDEN_ROWS, 6);
        assert_eq!(DEFAULT_COLS, 6);
        assert_eq!(MIN_MATCH, 3);
        assert_eq!(SCORE_PER_TILE, 10);
    }

    #[test]
    fn test_tile_kind_names_roundtrip() {
        for kind in TileKind::ALL {
            assert_eq!(TileKind::from_str(kind.as_str()), Some(kind));
            assert_eq!(TileKind::from_symbol(kind.symbol()), Some(kind));
        }
        assert_eq!(TileKind::from_symbol('b'), Some(TileKind::Brick));
        assert_eq!(TileKind::from_symbol('.'), None);
    }

    #[test]
    fn test_tile_kind_codes_are_distinct_and_nonzero() {
        let mut codes: Vec<u8> = TileKind::ALL.iter().map(|k| k.code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), TileKind::ALL.len());
        assert!(codes.iter().all(|&c| c != 0));
    }

    #[test]
    fn test_coord_adjacency() {
        let c = Coord::new(1, 1);
        assert!(c.is_adjacent(Coord::new(0, 1)));
        assert!(c.is_adjacent(Coord::new(1, 2)));
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(2, 2)));
        assert_eq!(c.distance(Coord::new(3, 0)), 3);
    }

    #[test]
    fn test_tile_with_state_keeps_identity() {
        let tile = Tile::new(7, TileKind::Steel);
        let falling = tile.with_state(TileState::Falling);
        assert_eq!(falling.id, 7);
        assert_eq!(falling.kind, TileKind::Steel);
        assert_eq!(falling.state, TileState::Falling);
        assert_eq!(tile.state, TileState::Idle);
    }
}
