//! Converts search traces into a timeline of visual state changes.
//!
//! Offsets are logical milliseconds from the start of the replay. Nothing here reads a clock:
//! the host decides how elapsed time maps onto its own timers and feeds it to a
//! [ReplayPlayer], which hands back the events that have become due.
use itertools::Itertools;
use log::debug;

use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::solver::SearchOutcome;
use crate::{EXPLORE_INTERVAL_MS, PATH_INTERVAL_MS};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReplayAction {
    /// Show the cell as examined by the search.
    Explore(Position),
    /// Show the cell as part of the path. Replaces an earlier explored marking.
    MarkPath(Position),
    /// Last event of every replay. The grid may be edited again afterwards.
    Complete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayEvent {
    pub offset_ms: u64,
    pub action: ReplayAction,
}

/// Builds [Replay] timelines. Visited cell `i` is shown at `explore_interval * i`; after all
/// `n` visited cells, path cell `j` is shown at `explore_interval * n + path_interval * j`.
/// Start and end cells get no events of their own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplayScheduler {
    explore_interval: u64,
    path_interval: u64,
}

impl Default for ReplayScheduler {
    fn default() -> Self {
        ReplayScheduler::new(EXPLORE_INTERVAL_MS, PATH_INTERVAL_MS)
    }
}

impl ReplayScheduler {
    /// Intervals below 1 ms are raised to 1. Offsets saturate at `u64::MAX`, so they never
    /// decrease.
    pub fn new(explore_interval: u64, path_interval: u64) -> ReplayScheduler {
        ReplayScheduler {
            explore_interval: explore_interval.max(1),
            path_interval: path_interval.max(1),
        }
    }

    pub fn explore_interval(&self) -> u64 {
        self.explore_interval
    }
    pub fn path_interval(&self) -> u64 {
        self.path_interval
    }

    pub fn schedule(
        &self,
        visited: &[Position],
        path: &[Position],
        start: Position,
        end: Position,
    ) -> Replay {
        let is_endpoint = |p: &Position| *p == start || *p == end;
        let path_start = self.explore_interval.saturating_mul(visited.len() as u64);

        let explored = visited
            .iter()
            .enumerate()
            .filter(|&(_, p)| !is_endpoint(p))
            .map(|(i, &p)| ReplayEvent {
                offset_ms: self.explore_interval.saturating_mul(i as u64),
                action: ReplayAction::Explore(p),
            });
        let marked = path
            .iter()
            .enumerate()
            .filter(|&(_, p)| !is_endpoint(p))
            .map(|(j, &p)| ReplayEvent {
                offset_ms: path_start
                    .saturating_add(self.path_interval.saturating_mul(j as u64)),
                action: ReplayAction::MarkPath(p),
            });
        let complete = ReplayEvent {
            offset_ms: path_start
                .saturating_add(self.path_interval.saturating_mul(path.len() as u64)),
            action: ReplayAction::Complete,
        };
        let events = explored
            .chain(marked)
            .chain(std::iter::once(complete))
            .collect_vec();
        debug!(
            "Scheduled {} replay events over {} ms",
            events.len(),
            complete.offset_ms
        );
        Replay { events }
    }

    pub fn schedule_outcome(
        &self,
        outcome: &SearchOutcome,
        start: Position,
        end: Position,
    ) -> Replay {
        self.schedule(&outcome.visited, &outcome.path, start, end)
    }
}

/// An immutable, offset-ordered list of events ending in [ReplayAction::Complete].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replay {
    events: Vec<ReplayEvent>,
}

impl Replay {
    pub fn events(&self) -> &[ReplayEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// A replay always holds at least its completion event.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Offset of the completion event.
    pub fn duration_ms(&self) -> u64 {
        self.events.last().map_or(0, |e| e.offset_ms)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ReplayEvent> {
        self.events.iter()
    }
}

impl<'a> IntoIterator for &'a Replay {
    type Item = &'a ReplayEvent;
    type IntoIter = std::slice::Iter<'a, ReplayEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

/// Releases the events of a [Replay] as logical time advances, each exactly once.
#[derive(Clone, Debug)]
pub struct ReplayPlayer {
    replay: Replay,
    next: usize,
}

impl ReplayPlayer {
    pub fn new(replay: Replay) -> ReplayPlayer {
        ReplayPlayer { replay, next: 0 }
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    /// Returns the events with `offset_ms <= elapsed_ms` not returned before. Elapsed time
    /// going backwards releases nothing.
    pub fn advance(&mut self, elapsed_ms: u64) -> &[ReplayEvent] {
        let from = self.next;
        let due = self.replay.events[from..]
            .iter()
            .take_while(|e| e.offset_ms <= elapsed_ms)
            .count();
        self.next += due;
        &self.replay.events[from..self.next]
    }

    pub fn is_finished(&self) -> bool {
        self.next == self.replay.events.len()
    }

    pub fn remaining(&self) -> usize {
        self.replay.events.len() - self.next
    }
}

/// What a renderer shows on a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum CellMark {
    #[default]
    Unmarked,
    Explored,
    Path,
}

/// Per-cell marks obtained by applying replay events in order. Start and end are never marked.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkBoard {
    cols: usize,
    start: Position,
    end: Position,
    marks: Vec<CellMark>,
}

impl MarkBoard {
    pub fn new(grid: &PathingGrid) -> MarkBoard {
        MarkBoard {
            cols: grid.cols(),
            start: grid.start(),
            end: grid.end(),
            marks: vec![CellMark::Unmarked; grid.len()],
        }
    }

    pub fn apply(&mut self, event: &ReplayEvent) {
        let (pos, mark) = match event.action {
            ReplayAction::Explore(pos) => (pos, CellMark::Explored),
            ReplayAction::MarkPath(pos) => (pos, CellMark::Path),
            ReplayAction::Complete => return,
        };
        if pos == self.start || pos == self.end {
            return;
        }
        if let Some(slot) = self.index(pos).and_then(|ix| self.marks.get_mut(ix)) {
            *slot = mark;
        }
    }

    /// Cells outside the board read as [CellMark::Unmarked].
    pub fn mark(&self, pos: Position) -> CellMark {
        self.index(pos)
            .and_then(|ix| self.marks.get(ix))
            .copied()
            .unwrap_or_default()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.col < self.cols)
            .then(|| pos.row * self.cols + pos.col)
            .filter(|&ix| ix < self.marks.len())
    }

    pub fn count(&self, mark: CellMark) -> usize {
        self.marks.iter().filter(|&&m| m == mark).count()
    }

    pub fn clear(&mut self) {
        self.marks.fill(CellMark::Unmarked);
    }

    /// Draws `grid` with `o` for explored and `*` for path cells on top of the layout glyphs.
    pub fn render(&self, grid: &PathingGrid) -> String {
        (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| {
                        let pos = Position::new(row, col);
                        match self.mark(pos) {
                            _ if pos == grid.start() => 'S',
                            _ if pos == grid.end() => 'E',
                            _ if grid.is_wall(pos) => '#',
                            CellMark::Explored => 'o',
                            CellMark::Path => '*',
                            CellMark::Unmarked => '.',
                        }
                    })
                    .join("")
            })
            .join("\n")
    }
}
