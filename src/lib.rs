//! # grid_pathviz
//!
//! Search engine behind a step-by-step pathfinding visualizer. Four interchangeable
//! strategies explore a 4-connected grid where every move costs one:
//! [breadth-first](solver::bfs::BreadthFirstSolver),
//! [depth-first](solver::dfs::DepthFirstSolver),
//! [Dijkstra](solver::dijkstra::DijkstraSolver) and [A*](solver::astar::AstarSolver) with a
//! Manhattan heuristic. Each run yields the cells in the order they were visited and the path
//! reconstructed from predecessor links.
//!
//! The [ReplayScheduler](replay::ReplayScheduler) turns both traces into a deterministic
//! timeline of "explored" and "path" events that any renderer can consume; the engine never
//! draws anything itself. [Visualizer](session::Visualizer) adds the cooperative locking a
//! front end needs while a replay is playing.
//!
//! ```
//! use grid_pathviz::{Algorithm, PathingGrid, ReplayScheduler};
//!
//! let grid: PathingGrid = "S.#\n..#\n..E".parse().unwrap();
//! let outcome = grid.search(Algorithm::AStar).unwrap();
//! assert!(outcome.path_found);
//! let replay = ReplayScheduler::default().schedule_outcome(&outcome, grid.start(), grid.end());
//! assert_eq!(replay.events().last().unwrap().offset_ms, replay.duration_ms());
//! ```
pub mod error;
pub mod neighbors;
pub mod pathing_grid;
pub mod position;
pub mod replay;
pub mod search_state;
pub mod session;
pub mod solver;

pub use error::{Endpoint, Error, Result};
pub use pathing_grid::PathingGrid;
pub use position::{Direction, Position};
pub use replay::{CellMark, MarkBoard, Replay, ReplayAction, ReplayEvent, ReplayPlayer, ReplayScheduler};
pub use search_state::{CellState, SearchState, UNREACHABLE};
pub use session::Visualizer;
pub use solver::{Algorithm, GridSolver, SearchOutcome};

/// Rows of the default board.
pub const DEFAULT_ROWS: usize = 20;
/// Columns of the default board.
pub const DEFAULT_COLS: usize = 50;
pub const DEFAULT_START: Position = Position::new(10, 5);
pub const DEFAULT_END: Position = Position::new(10, 45);

/// Multiplier on the A* heuristic. Values above 1 expand fewer cells but may miss the
/// shortest path.
pub const HEURISTIC_FACTOR: f32 = 1.0;

/// Delay between two explored cells in a replay.
pub const EXPLORE_INTERVAL_MS: u64 = 10;
/// Delay between two path cells in a replay.
pub const PATH_INTERVAL_MS: u64 = 50;
