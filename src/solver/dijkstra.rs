use std::collections::VecDeque;

use log::debug;

use crate::neighbors::CARDINAL_ORDER;
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::search_state::{SearchState, UNREACHABLE};
use crate::solver::GridSolver;

/// Uniform-cost search with unit edge weights.
///
/// The working set starts as every cell in row-major order and is stably re-sorted by
/// distance before each pop, so equal distances are taken in working-set order.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "dijkstra"
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
        state.at_mut(grid.index(start)).distance = 0;
        let mut unvisited: VecDeque<usize> = (0..grid.len()).collect();

        loop {
            unvisited
                .make_contiguous()
                .sort_by_key(|&ix| state.at(ix).distance);
            let Some(ix) = unvisited.pop_front() else {
                break;
            };
            let pos = grid.position(ix);
            if grid.is_wall(pos) {
                continue;
            }
            let distance = state.at(ix).distance;
            if distance == UNREACHABLE {
                debug!(
                    "dijkstra: {} cells left unreachable after {} visits",
                    unvisited.len() + 1,
                    visited.len()
                );
                return visited;
            }
            state.at_mut(ix).visited = true;
            visited.push(pos);
            if pos == end {
                return visited;
            }
            for n in grid.neighbors(pos, &CARDINAL_ORDER) {
                let cell = state.at_mut(grid.index(n));
                if cell.visited {
                    continue;
                }
                // Overwrites without comparing. With unit weights the new distance is never
                // worse, but the predecessor moves to the latest neighbour. Weighted edges
                // would need a strict-improvement check here.
                cell.distance = distance + 1;
                cell.previous = Some(ix);
            }
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_are_never_visited() {
        let grid: PathingGrid = "
            S#.
            .#.
            ..E
        "
        .parse()
        .unwrap();
        let outcome = DijkstraSolver.run(&grid, grid.start(), grid.end()).unwrap();
        assert!(outcome.visited.iter().all(|&p| !grid.is_wall(p)));
        assert_eq!(outcome.path_cost(), Some(4));
    }

    #[test]
    fn later_relaxation_takes_over_predecessor() {
        // (1,1) is relaxed from (0,1) and then again from (1,0) at the same distance.
        let grid = PathingGrid::new(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap();
        let mut state = SearchState::new(&grid);
        DijkstraSolver
            .run_with_state(&grid, &mut state, grid.start(), grid.end())
            .unwrap();
        assert_eq!(state.cell(Position::new(1, 1)).distance, 2);
        assert_eq!(state.previous(Position::new(1, 1)), Some(Position::new(1, 0)));
    }

    #[test]
    fn stops_at_first_unreachable_cell() {
        let grid: PathingGrid = "
            S.#.
            ..#E
        "
        .parse()
        .unwrap();
        let outcome = DijkstraSolver.run(&grid, grid.start(), grid.end()).unwrap();
        assert_eq!(outcome.visited.len(), 4);
        assert!(!outcome.path_found);
        assert_eq!(outcome.path, vec![grid.end()]);
    }
}
