//! Game configuration.
//!
//! These are config-time parameters, fixed for the lifetime of a session.

use std::fmt;

use crate::{
    TileKind, DEFAULT_COLS, DEFAULT_HIDDEN_ROWS, DEFAULT_VISIBLE_ROWS, MAX_CASCADE_CYCLES,
    MIN_MATCH, SCORE_PER_TILE,
};

/// Upper bound on rows * cols
pub const MAX_GRID_CELLS: usize = 1 << 16;

/// Grid and rules configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Rows the player sees (bottom of the grid)
    pub visible_rows: usize,
    /// Spawn rows above the visible area
    pub hidden_rows: usize,
    pub cols: usize,
    /// Kinds in play; tiles are drawn uniformly from this list
    pub kinds: Vec<TileKind>,
    pub min_match: usize,
    pub score_per_tile: u32,
    /// Safety ceiling on removal cycles per cascade
    pub max_cascade_cycles: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            visible_rows: DEFAULT_VISIBLE_ROWS,
            hidden_rows: DEFAULT_HIDDEN_ROWS,
            cols: DEFAULT_COLS,
            kinds: TileKind::ALL.to_vec(),
            min_match: MIN_MATCH,
            score_per_tile: SCORE_PER_TILE,
            max_cascade_cycles: MAX_CASCADE_CYCLES,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    ///
    /// Unset or unparsable variables keep their default value.
    pub fn from_env() -> Self {
        fn parsed<T: std::str::FromStr>(name: &str) -> Option<T> {
            std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
        }

        let defaults = Self::default();

        let kinds = std::env::var("BUILD_MATCH_KINDS")
            .ok()
            .and_then(|s| parse_kinds(&s))
            .unwrap_or(defaults.kinds);

        Self {
            visible_rows: parsed("BUILD_MATCH_ROWS").unwrap_or(defaults.visible_rows),
            hidden_rows: parsed("BUILD_MATCH_HIDDEN_ROWS").unwrap_or(defaults.hidden_rows),
            cols: parsed("BUILD_MATCH_COLS").unwrap_or(defaults.cols),
            kinds,
            min_match: parsed("BUILD_MATCH_MIN_MATCH").unwrap_or(defaults.min_match),
            score_per_tile: parsed("BUILD_MATCH_SCORE_PER_TILE")
                .unwrap_or(defaults.score_per_tile),
            max_cascade_cycles: parsed("BUILD_MATCH_MAX_CYCLES")
                .unwrap_or(defaults.max_cascade_cycles),
        }
    }

    /// A grid with no hidden rows, handy for small fixed boards
    pub fn with_grid(rows: usize, cols: usize) -> Self {
        Self {
            visible_rows: rows,
            hidden_rows: 0,
            cols,
            ..Self::default()
        }
    }

    /// Replace the kinds in play
    pub fn with_kinds(mut self, kinds: &[TileKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    /// Hidden plus visible rows (saturating; `validate` rejects overflow)
    pub fn total_rows(&self) -> usize {
        self.hidden_rows.saturating_add(self.visible_rows)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_rows() == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let cells = self
            .hidden_rows
            .checked_add(self.visible_rows)
            .and_then(|rows| rows.checked_mul(self.cols));
        if !matches!(cells, Some(n) if n <= MAX_GRID_CELLS) {
            return Err(ConfigError::GridTooLarge);
        }
        if self.kinds.len() < 2 {
            return Err(ConfigError::TooFewKinds(self.kinds.len()));
        }
        for (i, kind) in self.kinds.iter().enumerate() {
            if self.kinds[..i].contains(kind) {
                return Err(ConfigError::DuplicateKind(*kind));
            }
        }
        if self.min_match < 2 {
            return Err(ConfigError::MinMatchTooSmall(self.min_match));
        }
        if self.max_cascade_cycles == 0 {
            return Err(ConfigError::ZeroCycleCeiling);
        }
        Ok(())
    }
}

/// Parse a comma-separated kind list; `None` if any name is unknown or the list is empty
fn parse_kinds(s: &str) -> Option<Vec<TileKind>> {
    let kinds = s
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(TileKind::from_str)
        .collect::<Option<Vec<_>>>()?;
    if kinds.is_empty() {
        None
    } else {
        Some(kinds)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    EmptyGrid,
    GridTooLarge,
    TooFewKinds(usize),
    DuplicateKind(TileKind),
    MinMatchTooSmall(usize),
    ZeroCycleCeiling,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            ConfigError::GridTooLarge => {
                write!(f, "grid must have at most {} cells", MAX_GRID_CELLS)
            }
            ConfigError::TooFewKinds(n) => write!(f, "need at least 2 tile kinds, got {}", n),
            ConfigError::DuplicateKind(kind) => {
                write!(f, "tile kind {} listed more than once", kind.as_str())
            }
            ConfigError::MinMatchTooSmall(n) => {
                write!(f, "minimum match length must be at least 2, got {}", n)
            }
            ConfigError::ZeroCycleCeiling => write!(f, "cascade cycle ceiling must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}
