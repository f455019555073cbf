use build_match_core::EngineError;
use build_match_types::Coord;

use crate::session::Session;

/// What a click did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing was selected; the cell is now selected
    Selected(Coord),
    /// A non-adjacent cell (or the same one) was clicked; it replaces the selection
    Reselected(Coord),
    /// The adjacent swap matched and a cascade is now resolving
    Swapped { from: Coord, to: Coord },
    /// The adjacent swap did not match; the board is unchanged
    Rejected { from: Coord, to: Coord },
}

impl Selection {
    pub fn code(self) -> &'static str {
        match self {
            Selection::Selected(_) => "selected",
            Selection::Reselected(_) => "reselected",
            Selection::Swapped { .. } => "swapped",
            Selection::Rejected { .. } => "rejected",
        }
    }
}

/// Two-click swap protocol
///
/// The first click selects a cell. A second click on an adjacent cell clears
/// the selection and attempts the swap; any other cell becomes the new
/// selection.
pub fn apply_select(session: &mut Session, coord: Coord) -> Result<Selection, EngineError> {
    session.ensure_playable()?;
    session.board().check(coord)?;

    let Some(from) = session.selected else {
        session.selected = Some(coord);
        return Ok(Selection::Selected(coord));
    };

    if !from.is_adjacent(coord) {
        session.selected = Some(coord);
        return Ok(Selection::Reselected(coord));
    }

    session.selected = None;
    if session.try_swap(from, coord)? {
        Ok(Selection::Swapped { from, to: coord })
    } else {
        Ok(Selection::Rejected { from, to: coord })
    }
}

impl Session {
    /// Click a cell; see [`apply_select`]
    pub fn select(&mut self, coord: Coord) -> Result<Selection, EngineError> {
        apply_select(self, coord)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}
