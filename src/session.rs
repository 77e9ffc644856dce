//! Host-side session that ties a grid, the selected algorithm and an in-flight replay together.
//!
//! The engine itself has no notion of a running replay. [Visualizer] supplies the cooperative
//! lock a front end needs: once a replay starts, edits and new runs are refused with
//! [Error::ReplayInProgress] until the completion event has been released.
use log::{debug, info};

use crate::error::{Error, Result};
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::replay::{MarkBoard, Replay, ReplayAction, ReplayEvent, ReplayPlayer, ReplayScheduler};
use crate::solver::{Algorithm, SearchOutcome};

#[derive(Clone, Debug)]
pub struct Visualizer {
    grid: PathingGrid,
    pub algorithm: Algorithm,
    pub scheduler: ReplayScheduler,
    player: Option<ReplayPlayer>,
    marks: MarkBoard,
    last_outcome: Option<SearchOutcome>,
}

impl Default for Visualizer {
    fn default() -> Self {
        Visualizer::new(PathingGrid::default())
    }
}

impl Visualizer {
    pub fn new(grid: PathingGrid) -> Visualizer {
        let marks = MarkBoard::new(&grid);
        Visualizer {
            grid,
            algorithm: Algorithm::default(),
            scheduler: ReplayScheduler::default(),
            player: None,
            marks,
            last_outcome: None,
        }
    }

    pub fn grid(&self) -> &PathingGrid {
        &self.grid
    }

    pub fn marks(&self) -> &MarkBoard {
        &self.marks
    }

    pub fn last_outcome(&self) -> Option<&SearchOutcome> {
        self.last_outcome.as_ref()
    }

    pub fn is_replaying(&self) -> bool {
        self.player.is_some()
    }

    fn ensure_idle(&self) -> Result<()> {
        if self.is_replaying() {
            Err(Error::ReplayInProgress)
        } else {
            Ok(())
        }
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        self.algorithm = algorithm;
    }

    /// Clears the previous run, searches with the selected algorithm and starts its replay.
    pub fn visualize(&mut self) -> Result<&Replay> {
        self.ensure_idle()?;
        self.clear_path()?;
        let (start, end) = (self.grid.start(), self.grid.end());
        let outcome = self.algorithm.run(&self.grid, start, end)?;
        let replay = self.scheduler.schedule_outcome(&outcome, start, end);
        info!(
            "Replaying {} over {} ms ({} events)",
            self.algorithm,
            replay.duration_ms(),
            replay.len()
        );
        self.last_outcome = Some(outcome);
        let player = self.player.insert(ReplayPlayer::new(replay));
        Ok(player.replay())
    }

    /// Releases and applies the events due at `elapsed_ms` since [visualize](Self::visualize).
    /// The lock lifts once the completion event is among them.
    pub fn advance(&mut self, elapsed_ms: u64) -> Vec<ReplayEvent> {
        let Some(player) = self.player.as_mut() else {
            return Vec::new();
        };
        let due = player.advance(elapsed_ms).to_vec();
        for event in &due {
            self.marks.apply(event);
        }
        if due.iter().any(|e| e.action == ReplayAction::Complete) {
            debug!("Replay complete at {} ms", elapsed_ms);
            self.player = None;
        }
        due
    }

    /// Plays the remaining events at once.
    pub fn finish(&mut self) -> Vec<ReplayEvent> {
        self.advance(u64::MAX)
    }

    pub fn set_wall(&mut self, pos: Position, blocked: bool) -> Result<bool> {
        self.ensure_idle()?;
        let changed = self.grid.set_wall(pos, blocked)?;
        if changed && blocked {
            self.grid.update();
        }
        Ok(changed)
    }

    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool> {
        self.ensure_idle()?;
        let blocked = self.grid.toggle_wall(pos)?;
        self.grid.update();
        Ok(blocked)
    }

    /// Drops the marks and outcome of the last run. Walls stay.
    pub fn clear_path(&mut self) -> Result<()> {
        self.ensure_idle()?;
        self.marks.clear();
        self.last_outcome = None;
        Ok(())
    }

    /// Removes all walls as well as the last run.
    pub fn clear_board(&mut self) -> Result<()> {
        self.clear_path()?;
        self.grid.clear_walls();
        Ok(())
    }
}
