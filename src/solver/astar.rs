use fxhash::FxBuildHasher;
use indexmap::IndexSet;
use log::debug;

use crate::neighbors::CARDINAL_ORDER;
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::search_state::SearchState;
use crate::solver::GridSolver;
use crate::HEURISTIC_FACTOR;

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// A* with a Manhattan distance heuristic.
///
/// The open set is an insertion-ordered set of cell indices, stably sorted by `f_score`
/// before each pop: ties go to whichever entry sits earlier in the set. A cell is inserted at
/// most once while it is open; an improved score is picked up by its existing entry.
#[derive(Clone, Debug)]
pub struct AstarSolver {
    pub heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> Self {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: HEURISTIC_FACTOR,
        }
    }

    /// Manhattan distance times the heuristic factor. Admissible for factors up to 1.
    /// Estimates too large for an `i32` saturate at `i32::MAX`.
    pub fn heuristic(&self, p1: &Position, p2: &Position) -> i32 {
        (p1.manhattan_distance(p2) as f32 * self.heuristic_factor) as i32
    }
}

impl GridSolver for AstarSolver {
    fn name(&self) -> &'static str {
        "astar"
    }

    fn search(
        &self,
        grid: &PathingGrid,
        state: &mut SearchState,
        start: Position,
        end: Position,
    ) -> Vec<Position> {
        let mut visited = Vec::new();
        state.reset_scores();
        let start_ix = grid.index(start);
        let cell = state.at_mut(start_ix);
        cell.g_score = 0;
        cell.f_score = self.heuristic(&start, &end);
        let mut open: FxIndexSet<usize> = FxIndexSet::default();
        open.insert(start_ix);

        while !open.is_empty() {
            open.sort_by(|a, b| state.at(*a).f_score.cmp(&state.at(*b).f_score));
            let Some(ix) = open.shift_remove_index(0) else {
                break;
            };
            let pos = grid.position(ix);
            if grid.is_wall(pos) || state.at(ix).visited {
                continue;
            }
            state.at_mut(ix).visited = true;
            visited.push(pos);
            if pos == end {
                return visited;
            }
            let tentative_g_score = state.at(ix).g_score.saturating_add(1);
            for n in grid.neighbors(pos, &CARDINAL_ORDER) {
                if grid.is_wall(n) {
                    continue;
                }
                let n_ix = grid.index(n);
                let cell = state.at_mut(n_ix);
                if tentative_g_score < cell.g_score {
                    cell.previous = Some(ix);
                    cell.g_score = tentative_g_score;
                    cell.f_score = tentative_g_score.saturating_add(self.heuristic(&n, &end));
                    // No-op if the cell is already open, its entry keeps its place.
                    open.insert(n_ix);
                }
            }
        }
        debug!("astar: open set exhausted after {} cells", visited.len());
        visited
    }
}
