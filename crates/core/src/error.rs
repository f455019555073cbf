use std::fmt;

use crate::types::{ConfigError, Coord};

/// Errors surfaced by engine operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// A coordinate lies outside the grid.
    InvalidCoordinate {
        coord: Coord,
        rows: usize,
        cols: usize,
    },
    /// A swap was requested between cells that do not share an edge.
    NotAdjacent { a: Coord, b: Coord },
    /// A swap or resolve was requested while a cascade is still resolving.
    ConcurrentResolution,
    /// The cascade (or initial generation) did not settle within its ceiling.
    NonConvergence { cycles: u32 },
    Config(ConfigError),
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::InvalidCoordinate { .. } => "invalid_coordinate",
            EngineError::NotAdjacent { .. } => "not_adjacent",
            EngineError::ConcurrentResolution => "concurrent_resolution",
            EngineError::NonConvergence { .. } => "non_convergence",
            EngineError::Config(_) => "invalid_config",
        }
    }

    /// True for internal failures (as opposed to rejected caller requests)
    pub fn is_fatal(self) -> bool {
        matches!(self, EngineError::NonConvergence { .. })
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::InvalidCoordinate { coord, rows, cols } => write!(
                f,
                "cell ({}, {}) is outside the {}x{} grid",
                coord.row, coord.col, rows, cols
            ),
            EngineError::NotAdjacent { a, b } => write!(
                f,
                "cells ({}, {}) and ({}, {}) are not adjacent",
                a.row, a.col, b.row, b.col
            ),
            EngineError::ConcurrentResolution => write!(f, "a cascade is already resolving"),
            EngineError::NonConvergence { cycles } => {
                write!(f, "board did not settle after {} cycles", cycles)
            }
            EngineError::Config(e) => write!(f, "invalid config: {}", e),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Config(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for EngineError {
    fn from(e: ConfigError) -> Self {
        EngineError::Config(e)
    }
}
