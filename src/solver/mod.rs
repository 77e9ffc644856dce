use crate::error::{Error, Result};
use crate::pathing_grid::PathingGrid;
use crate::position::Position;
use crate::search_state::SearchState;
use core::fmt;
use core::str::FromStr;
use log::info;

pub mod astar;
pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use astar::AstarSolver;
use bfs::BreadthFirstSolver;
use dfs::DepthFirstSolver;
use dijkstra::DijkstraSolver;

/// The two records a finished run produces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Cells in the order the strategy marked them visited.
    pub visited: Vec<Position>,
    /// Cells from start to end as reconstructed from predecessors. When no path exists this is
    /// just the end cell.
    pub path: Vec<Position>,
    /// Whether [path](Self::path) actually starts at the start cell.
    pub path_found: bool,
}

impl SearchOutcome {
    pub fn new(start: Position, visited: Vec<Position>, path: Vec<Position>) -> SearchOutcome {
        let path_found = path.first() == Some(&start);
        SearchOutcome {
            visited,
            path,
            path_found,
        }
    }

    /// Number of moves along the path, or [None] if the end was not reached.
    pub fn path_cost(&self) -> Option<usize> {
        self.path_found.then(|| self.path.len() - 1)
    }
}

pub trait GridSolver {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the traversal on an already validated grid, writing into `state`, and returns the
    /// cells in the order they were visited.
    fn search(
        &self,
        grid: &PathingGrid,
        state: &mut SearchState,
        start: Position,
        end: Position,
    ) -> Vec<Position>;

    /// Validates the endpoints and searches using a caller-owned state table. Breadth-first
    /// and depth-first do not reset visited flags, so a reused table has to be
    /// [cleared](SearchState::clear) first.
    fn run_with_state(
        &self,
        grid: &PathingGrid,
        state: &mut SearchState,
        start: Position,
        end: Position,
    ) -> Result<Vec<Position>> {
        grid.validate_endpoints(start, end)?;
        debug_assert_eq!(state.len(), grid.len());
        Ok(self.search(grid, state, start, end))
    }

    /// Searches from `start` to `end` on a fresh state table and reconstructs the path.
    fn run(&self, grid: &PathingGrid, start: Position, end: Position) -> Result<SearchOutcome> {
        let mut state = SearchState::new(grid);
        let visited = self.run_with_state(grid, &mut state, start, end)?;
        let path = state.reconstruct_path(end);
        let outcome = SearchOutcome::new(start, visited, path);
        if outcome.path_found {
            info!(
                "{}: reached {} from {} in {} steps after visiting {} cells",
                self.name(),
                end,
                start,
                outcome.path.len() - 1,
                outcome.visited.len()
            );
        } else {
            info!(
                "{}: {} is not reachable from {}, visited {} cells",
                self.name(),
                end,
                start,
                outcome.visited.len()
            );
        }
        Ok(outcome)
    }
}

/// The selectable strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
    BreadthFirst,
    DepthFirst,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Dijkstra,
        Algorithm::AStar,
        Algorithm::BreadthFirst,
        Algorithm::DepthFirst,
    ];

    /// Whether the strategy guarantees a path with the fewest moves.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::DepthFirst)
    }

    pub fn run(self, grid: &PathingGrid, start: Position, end: Position) -> Result<SearchOutcome> {
        match self {
            Algorithm::Dijkstra => DijkstraSolver.run(grid, start, end),
            Algorithm::AStar => AstarSolver::new().run(grid, start, end),
            Algorithm::BreadthFirst => BreadthFirstSolver.run(grid, start, end),
            Algorithm::DepthFirst => DepthFirstSolver.run(grid, start, end),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
            Algorithm::BreadthFirst => "bfs",
            Algorithm::DepthFirst => "dfs",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" => Ok(Algorithm::AStar),
            "bfs" => Ok(Algorithm::BreadthFirst),
            "dfs" => Ok(Algorithm::DepthFirst),
            _ => Err(Error::UnknownAlgorithm(s.to_owned())),
        }
    }
}
