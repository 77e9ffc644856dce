use std::collections::VecDeque;

use log::debug;

use crate::neighbors::CARDINAL_ORDER;
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::search_state::SearchState;
use crate::solver::GridSolver;

/// Breadth-first search. Every move costs one, so the first time the end is dequeued its
/// predecessor chain is a shortest path.
#[derive(Clone, Debug, Default)]
pub struct BreadthFirstSolver;

impl GridSolver for BreadthFirstSolver {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(
        &self,
        grid: &PathingGrid,
        state: &mut SearchState,
        start: Position,
        end: Position,
    ) -> Vec<Position> {
        let mut visited = Vec::new();
        let mut queue = VecDeque::new();
        // Cells are marked when enqueued so none is queued twice.
        let start_ix = grid.index(start);
        state.at_mut(start_ix).visited = true;
        queue.push_back(start_ix);

        while let Some(ix) = queue.pop_front() {
            let pos = grid.position(ix);
            visited.push(pos);
            if pos == end {
                return visited;
            }
            for n in grid.neighbors(pos, &CARDINAL_ORDER) {
                let n_ix = grid.index(n);
                let cell = state.at_mut(n_ix);
                if cell.visited || grid.is_wall(n) {
                    continue;
                }
                cell.visited = true;
                cell.previous = Some(ix);
                queue.push_back(n_ix);
            }
        }
        debug!("bfs: queue exhausted after {} cells", visited.len());
        visited
    }
}
