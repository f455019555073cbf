//! Cascade resolution - the detect/remove/settle/refill loop
//!
//! A cascade is a finite sequence of discrete steps. Each removal cycle emits
//! three boards (`Removed`, `Settled`, `Refilled`) and the sequence ends with
//! a single `Stable` board once no match is left. The engine never waits
//! between steps; the caller decides how to pace them.
//!
//! [`CascadeState`] is the owned, resumable state machine. [`Cascade`] wraps it
//! as an iterator borrowing the RNG and config, and [`run_cascade`] drains it.

use std::iter::FusedIterator;

use crate::board::Board;
use crate::error::EngineError;
use crate::gravity::apply_gravity;
use crate::matcher::{find_all_matches, matched_cells};
use crate::refill::refill_hidden_rows;
use crate::rng::XorShiftRng;
use crate::types::{Coord, GameConfig, MatchGroup, Tile, TileState};

/// Which transform produced a step's board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadePhase {
    /// Matched cells were emptied
    Removed,
    /// Gravity compacted the columns
    Settled,
    /// Holes were filled with new tiles
    Refilled,
    /// No match left; final board of the cascade
    Stable,
}

impl CascadePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            CascadePhase::Removed => "removed",
            CascadePhase::Settled => "settled",
            CascadePhase::Refilled => "refilled",
            CascadePhase::Stable => "stable",
        }
    }
}

/// One emitted cascade state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeStep {
    pub phase: CascadePhase,
    pub board: Board,
    /// Points earned by this step (only `Removed` steps score)
    pub score_delta: u32,
    /// 1-based removal cycle; 0 for a stable board that never matched
    pub cycle: u32,
    /// Groups found at the start of the cycle (only on `Removed` steps)
    pub groups: Vec<MatchGroup>,
    /// Cells emptied by this step (only on `Removed` steps)
    pub removed: Vec<Coord>,
    /// Tiles that left the board, tagged `Popping` (only on `Removed` steps)
    pub popped: Vec<Tile>,
}

impl CascadeStep {
    fn transition(phase: CascadePhase, board: Board, cycle: u32) -> Self {
        Self {
            phase,
            board,
            score_delta: 0,
            cycle,
            groups: Vec::new(),
            removed: Vec::new(),
            popped: Vec::new(),
        }
    }

    pub fn is_final(&self) -> bool {
        self.phase == CascadePhase::Stable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    Detect,
    Settle,
    Refill,
    Done,
}

/// Owned cascade state machine
///
/// Holds the board between steps; feed it the RNG and config on every
/// [`advance`](CascadeState::advance).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeState {
    board: Board,
    cycle: u32,
    pending: Pending,
}

impl CascadeState {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            cycle: 0,
            pending: Pending::Detect,
        }
    }

    /// Board after the most recent step
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Completed removal cycles
    pub fn cycle(&self) -> u32 {
        self.cycle
    }

    pub fn is_done(&self) -> bool {
        self.pending == Pending::Done
    }

    /// Produce the next step, or None once the cascade is over
    ///
    /// Exceeding `config.max_cascade_cycles` yields a single
    /// `NonConvergence` error and ends the sequence.
    pub fn advance(
        &mut self,
        rng: &mut XorShiftRng,
        config: &GameConfig,
    ) -> Option<Result<CascadeStep, EngineError>> {
        match self.pending {
            Pending::Done => None,
            Pending::Detect => Some(self.detect(config)),
            Pending::Settle => {
                self.board = apply_gravity(&self.board);
                self.pending = Pending::Refill;
                Some(Ok(CascadeStep::transition(
                    CascadePhase::Settled,
                    self.board.clone(),
                    self.cycle,
                )))
            }
            Pending::Refill => {
                self.board = refill_hidden_rows(&self.board, rng, &config.kinds);
                self.pending = Pending::Detect;
                Some(Ok(CascadeStep::transition(
                    CascadePhase::Refilled,
                    self.board.clone(),
                    self.cycle,
                )))
            }
        }
    }

    fn detect(&mut self, config: &GameConfig) -> Result<CascadeStep, EngineError> {
        let groups = find_all_matches(&self.board, config.min_match);
        if groups.is_empty() {
            self.pending = Pending::Done;
            self.board = self.board.settled();
            return Ok(CascadeStep::transition(
                CascadePhase::Stable,
                self.board.clone(),
                self.cycle,
            ));
        }

        if self.cycle >= config.max_cascade_cycles {
            self.pending = Pending::Done;
            return Err(EngineError::NonConvergence { cycles: self.cycle });
        }
        self.cycle += 1;

        let removed = matched_cells(&groups);
        let mut popped = Vec::with_capacity(removed.len());
        for &coord in &removed {
            if let Some(tile) = self.board.take(coord) {
                popped.push(tile.with_state(TileState::Popping));
            }
        }
        let score_delta = (removed.len() as u32).saturating_mul(config.score_per_tile);
        self.pending = Pending::Settle;

        Ok(CascadeStep {
            phase: CascadePhase::Removed,
            board: self.board.clone(),
            score_delta,
            cycle: self.cycle,
            groups,
            removed,
            popped,
        })
    }
}

/// Lazy cascade sequence over a borrowed RNG
pub struct Cascade<'a> {
    state: CascadeState,
    rng: &'a mut XorShiftRng,
    config: &'a GameConfig,
}

impl<'a> Cascade<'a> {
    /// Steps are computed on demand; dropping the iterator abandons the cascade
    pub fn new(board: Board, rng: &'a mut XorShiftRng, config: &'a GameConfig) -> Self {
        Self {
            state: CascadeState::new(board),
            rng,
            config,
        }
    }

    pub fn state(&self) -> &CascadeState {
        &self.state
    }
}

impl Iterator for Cascade<'_> {
    type Item = Result<CascadeStep, EngineError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.state.advance(self.rng, self.config)
    }
}

impl FusedIterator for Cascade<'_> {}

/// Start resolving a board
pub fn resolve_cascade<'a>(
    board: &Board,
    rng: &'a mut XorShiftRng,
    config: &'a GameConfig,
) -> Cascade<'a> {
    Cascade::new(board.clone(), rng, config)
}

/// Totals of a fully drained cascade
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CascadeSummary {
    /// The stable board
    pub board: Board,
    pub score_delta: u32,
    pub cycles: u32,
    /// Tiles removed across all cycles
    pub removed: usize,
    /// Steps emitted, including the final stable one
    pub steps: usize,
}

/// Resolve a board to stability in one call
pub fn run_cascade(
    board: &Board,
    rng: &mut XorShiftRng,
    config: &GameConfig,
) -> Result<CascadeSummary, EngineError> {
    let mut summary = CascadeSummary {
        board: board.clone(),
        score_delta: 0,
        cycles: 0,
        removed: 0,
        steps: 0,
    };
    for step in resolve_cascade(board, rng, config) {
        let step = step?;
        summary.score_delta = summary.score_delta.saturating_add(step.score_delta);
        summary.removed += step.removed.len();
        summary.cycles = step.cycle;
        summary.steps += 1;
        summary.board = step.board;
    }
    Ok(summary)
}
