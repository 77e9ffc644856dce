//! Error types for grid construction, searches and replays.

use core::fmt;
use thiserror::Error;

use crate::position::Position;

/// Result type for grid and search operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Which of the two designated cells an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

/// Errors that can occur while building grids, running searches or driving a replay.
///
/// An unreachable end cell is not an error; see [SearchOutcome::path_found](crate::solver::SearchOutcome::path_found).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A grid needs at least one row and one column
    #[error("grid must have at least one row and one column")]
    Empty,

    /// Rows of differing lengths
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A position outside the grid
    #[error("{position} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        position: Position,
        rows: usize,
        cols: usize,
    },

    /// Start or end cell is a wall
    #[error("{0} cell {1} is a wall")]
    WallEndpoint(Endpoint, Position),

    /// Unknown character in a text layout
    #[error("unexpected character {glyph:?} at line {line}, column {column}")]
    InvalidGlyph {
        glyph: char,
        line: usize,
        column: usize,
    },

    /// Text layout without a start or end cell
    #[error("layout has no {0} cell")]
    MissingEndpoint(Endpoint),

    /// Text layout with more than one start or end cell
    #[error("layout has more than one {0} cell")]
    DuplicateEndpoint(Endpoint),

    /// Algorithm name that does not match any strategy
    #[error("unknown algorithm {0:?}, expected one of dijkstra, astar, bfs, dfs")]
    UnknownAlgorithm(String),

    /// The grid is locked until the running replay completes
    #[error("a replay is already in progress")]
    ReplayInProgress,
}
