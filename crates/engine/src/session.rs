//! Session module - one player's game
//!
//! Ties the engine together for a host application: it owns the current
//! board, the RNG, the score and the resolution state machine. A host feeds
//! it swaps (or clicks, see [`crate::select`]) and pulls cascade steps one at
//! a time with [`Session::step`], pacing them however it likes.

use build_match_core::{
    create_initial_board, swap_if_valid, Board, BoardSnapshot, CascadeState, CascadeStep,
    EngineError, XorShiftRng,
};
use build_match_types::{Coord, GameConfig};

/// Whether a cascade is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResolutionState {
    Idle,
    Resolving,
    /// A cascade hit a fatal error; only `restart` is accepted
    Failed,
}

impl ResolutionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResolutionState::Idle => "idle",
            ResolutionState::Resolving => "resolving",
            ResolutionState::Failed => "failed",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Idle,
    Resolving(CascadeState),
    Failed(EngineError),
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    config: GameConfig,
    seed: u32,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: XorShiftRng,
    board: Board,
    score: u32,
    /// Accepted swaps this episode.
    moves: u32,
    pub(crate) selected: Option<Coord>,
    resolution: Resolution,
}

impl Session {
    /// Create a new session with the given RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, EngineError> {
        config.validate()?;
        let mut rng = XorShiftRng::new(seed);
        let board = create_initial_board(&config, &mut rng)?;

        Ok(Self {
            config,
            seed,
            episode_id: 0,
            rng,
            board,
            score: 0,
            moves: 0,
            selected: None,
            resolution: Resolution::Idle,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn selected(&self) -> Option<Coord> {
        self.selected
    }

    pub fn resolution_state(&self) -> ResolutionState {
        match self.resolution {
            Resolution::Idle => ResolutionState::Idle,
            Resolution::Resolving(_) => ResolutionState::Resolving,
            Resolution::Failed(_) => ResolutionState::Failed,
        }
    }

    pub fn is_resolving(&self) -> bool {
        self.resolution_state() == ResolutionState::Resolving
    }

    pub fn is_failed(&self) -> bool {
        self.resolution_state() == ResolutionState::Failed
    }

    /// Err if the session cannot take a move right now
    ///
    /// A failed session keeps returning the error that failed it.
    pub fn ensure_playable(&self) -> Result<(), EngineError> {
        match self.resolution {
            Resolution::Idle => Ok(()),
            Resolution::Resolving(_) => Err(EngineError::ConcurrentResolution),
            Resolution::Failed(e) => Err(e),
        }
    }

    /// Swap two adjacent cells if the swap creates a match
    ///
    /// Returns whether the swap was kept. A kept swap starts a cascade; drive
    /// it with [`Session::step`] or [`Session::resolve_all`].
    pub fn try_swap(&mut self, a: Coord, b: Coord) -> Result<bool, EngineError> {
        self.ensure_playable()?;
        self.board.check(a)?;
        self.board.check(b)?;
        if !a.is_adjacent(b) {
            return Err(EngineError::NotAdjacent { a, b });
        }

        let outcome = swap_if_valid(&self.board, a, b, self.config.min_match)?;
        if !outcome.swapped {
            return Ok(false);
        }

        self.board = outcome.board;
        self.moves += 1;
        self.resolution = Resolution::Resolving(CascadeState::new(self.board.clone()));
        Ok(true)
    }

    /// Advance the in-flight cascade by one step
    ///
    /// Applies the step's board and score and returns the step. Returns
    /// `Ok(None)` when nothing is resolving. The session is idle again after
    /// the `Stable` step. An error leaves it `Failed` until [`Session::restart`],
    /// since the board it stopped on may still hold matches.
    pub fn step(&mut self) -> Result<Option<CascadeStep>, EngineError> {
        let Resolution::Resolving(state) = &mut self.resolution else {
            return Ok(None);
        };

        match state.advance(&mut self.rng, &self.config) {
            Some(Ok(step)) => {
                self.board = step.board.clone();
                self.score = self.score.saturating_add(step.score_delta);
                if step.is_final() {
                    self.resolution = Resolution::Idle;
                }
                Ok(Some(step))
            }
            Some(Err(e)) => {
                self.resolution = Resolution::Failed(e);
                Err(e)
            }
            None => {
                self.resolution = Resolution::Idle;
                Ok(None)
            }
        }
    }

    /// Run the in-flight cascade to the end, returning the score it earned
    pub fn resolve_all(&mut self) -> Result<u32, EngineError> {
        let mut earned = 0u32;
        while let Some(step) = self.step()? {
            earned = earned.saturating_add(step.score_delta);
        }
        Ok(earned)
    }

    /// Start a new episode on the next seed
    ///
    /// Abandons any in-flight cascade and clears a failure.
    pub fn restart(&mut self) -> Result<(), EngineError> {
        let seed = self.seed.wrapping_add(1);
        let mut rng = XorShiftRng::new(seed);
        let board = create_initial_board(&self.config, &mut rng)?;

        self.seed = seed;
        self.rng = rng;
        self.board = board;
        self.episode_id += 1;
        self.score = 0;
        self.moves = 0;
        self.selected = None;
        self.resolution = Resolution::Idle;
        Ok(())
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            board: BoardSnapshot::capture(&self.board),
            score: self.score,
            seed: self.seed,
            episode_id: self.episode_id,
            moves: self.moves,
            resolving: self.is_resolving(),
            failed: self.is_failed(),
            selected: self.selected,
        }
    }
}

/// Plain-data copy of a session for observers
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SessionSnapshot {
    pub board: BoardSnapshot,
    pub score: u32,
    pub seed: u32,
    pub episode_id: u32,
    pub moves: u32,
    pub resolving: bool,
    pub failed: bool,
    pub selected: Option<Coord>,
}

impl SessionSnapshot {
    pub fn playable(&self) -> bool {
        !self.resolving && !self.failed
    }
}
