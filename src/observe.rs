//! JSON observations of sessions and cascade steps, and the step journal.
//!
//! Observations are what a renderer or replay tool consumes: boards as rows
//! of kind symbols (`.` for empty), the board hash, and per-step removal data.
//! The journal appends one observation per line (JSON lines).

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::{BoardSnapshot, CascadeStep};
use crate::engine::Session;
use crate::types::{Coord, MatchGroup};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Observation {
    Session(SessionObservation),
    Step(StepObservation),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionObservation {
    pub episode_id: u32,
    pub seed: u32,
    pub score: u32,
    pub moves: u32,
    pub state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected: Option<[usize; 2]>,
    pub board: Vec<String>,
    pub board_hash: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupObservation {
    pub kind: String,
    pub axis: String,
    pub cells: Vec<[usize; 2]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepObservation {
    pub episode_id: u32,
    pub seed: u32,
    pub cycle: u32,
    pub phase: String,
    pub score_delta: u32,
    /// Session score after this step
    pub score: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<GroupObservation>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub removed: Vec<[usize; 2]>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub popped_ids: Vec<u32>,
    pub board: Vec<String>,
    pub board_hash: u64,
}

fn cell(coord: Coord) -> [usize; 2] {
    [coord.row, coord.col]
}

fn group(group: &MatchGroup) -> GroupObservation {
    GroupObservation {
        kind: group.kind.as_str().to_string(),
        axis: group.axis.as_str().to_string(),
        cells: group.cells.iter().copied().map(cell).collect(),
    }
}

pub fn observe_session(session: &Session) -> Observation {
    let snap = session.snapshot();
    Observation::Session(SessionObservation {
        episode_id: snap.episode_id,
        seed: snap.seed,
        score: snap.score,
        moves: snap.moves,
        state: session.resolution_state().as_str().to_string(),
        selected: snap.selected.map(cell),
        board: session.board().to_symbols(),
        board_hash: snap.board.board_hash,
    })
}

/// Observation of a step that `session` has already applied
pub fn observe_step(session: &Session, step: &CascadeStep) -> Observation {
    Observation::Step(StepObservation {
        episode_id: session.episode_id(),
        seed: session.seed(),
        cycle: step.cycle,
        phase: step.phase.as_str().to_string(),
        score_delta: step.score_delta,
        score: session.score(),
        groups: step.groups.iter().map(group).collect(),
        removed: step.removed.iter().copied().map(cell).collect(),
        popped_ids: step.popped.iter().map(|tile| tile.id).collect(),
        board: step.board.to_symbols(),
        board_hash: BoardSnapshot::capture(&step.board).board_hash,
    })
}

pub fn to_json_line(obs: &Observation) -> Result<String> {
    serde_json::to_string(obs).map_err(|e| anyhow!("observe: serialize failed: {}", e))
}

/// Append-only JSON-lines file of observations
pub struct Journal {
    writer: BufWriter<File>,
    lines: u64,
}

impl Journal {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| anyhow!("journal: open {} failed: {}", path.display(), e))?;
        Ok(Self {
            writer: BufWriter::new(file),
            lines: 0,
        })
    }

    pub fn record(&mut self, obs: &Observation) -> Result<()> {
        let line = to_json_line(obs)?;
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")?;
        self.writer.flush()?;
        self.lines += 1;
        Ok(())
    }

    /// Lines written through this handle
    pub fn lines(&self) -> u64 {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::find_valid_swap;
    use crate::types::GameConfig;

    #[test]
    fn test_session_observation_fields() {
        let session = Session::new(GameConfig::default(), 3).unwrap();
        let Observation::Session(obs) = observe_session(&session) else {
            panic!("expected session observation");
        };
        assert_eq!(obs.seed, 3);
        assert_eq!(obs.state, "idle");
        assert_eq!(obs.board.len(), 12);
        assert!(obs.board.iter().all(|row| row.len() == 6));
        assert_eq!(obs.selected, None);
    }

    #[test]
    fn test_json_line_is_tagged() {
        let session = Session::new(GameConfig::default(), 3).unwrap();
        let line = to_json_line(&observe_session(&session)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["type"], "session");
        assert!(v.get("selected").is_none());
        assert!(!line.contains('\n'));
    }

    #[test]
    fn test_removed_step_observation() {
        let mut session = Session::new(GameConfig::default(), 3).unwrap();
        let (a, b) = find_valid_swap(session.board(), 3).unwrap();
        session.try_swap(a, b).unwrap();
        let step = session.step().unwrap().unwrap();

        let Observation::Step(obs) = observe_step(&session, &step) else {
            panic!("expected step observation");
        };
        assert_eq!(obs.phase, "removed");
        assert_eq!(obs.cycle, 1);
        assert_eq!(obs.score, obs.score_delta);
        assert_eq!(obs.removed.len(), obs.popped_ids.len());
        assert!(!obs.groups.is_empty());
        for [r, c] in &obs.removed {
            assert_eq!(obs.board[*r].as_bytes()[*c], b'.');
        }
    }
}
