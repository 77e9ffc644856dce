use log::debug;

use crate::neighbors::DEPTH_FIRST_ORDER;
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::search_state::SearchState;
use crate::solver::GridSolver;

/// Depth-first search. Finds a path, not necessarily a short one.
///
/// Neighbours are pushed down, right, up, left, so the stack pops them in the reverse order.
#[derive(Clone, Debug, Default)]
pub struct DepthFirstSolver;

impl GridSolver for DepthFirstSolver {
    fn name(&self) -> &'static str {
        "dfs"
    }

    fn search(
        &self,
        grid: &PathingGrid,
        state: &mut SearchState,
        start: Position,
        end: Position,
    ) -> Vec<Position> {
        let mut visited = Vec::new();
        let mut stack = vec![grid.index(start)];

        while let Some(ix) = stack.pop() {
            let pos = grid.position(ix);
            // A cell can sit on the stack several times; only its first pop counts.
            if state.at(ix).visited || grid.is_wall(pos) {
                continue;
            }
            state.at_mut(ix).visited = true;
            visited.push(pos);
            if pos == end {
                return visited;
            }
            for n in grid.neighbors(pos, &DEPTH_FIRST_ORDER) {
                let n_ix = grid.index(n);
                let cell = state.at_mut(n_ix);
                if cell.visited || grid.is_wall(n) {
                    continue;
                }
                cell.previous = Some(ix);
                stack.push(n_ix);
            }
        }
        debug!("dfs: stack exhausted after {} cells", visited.len());
        visited
    }
}
