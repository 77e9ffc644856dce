//! Orthogonal neighbour enumeration. The order in which neighbours are produced is part of
//! each strategy's observable behaviour, so every strategy names the order it uses.
use smallvec::SmallVec;

use crate::position::{Direction, Position};

/// Neighbour lists never exceed four entries, so they stay on the stack.
pub type Neighborhood = SmallVec<[Position; 4]>;

/// Up, down, left, right. Used by breadth-first, Dijkstra and A*.
pub const CARDINAL_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

/// Down, right, up, left. Used by depth-first search.
pub const DEPTH_FIRST_ORDER: [Direction; 4] = [
    Direction::Down,
    Direction::Right,
    Direction::Up,
    Direction::Left,
];

/// Yields the in-bounds orthogonal neighbours of `pos` on a `rows` x `cols` grid in the
/// given order. Walls and visited cells are not filtered here.
pub fn neighbors(pos: Position, rows: usize, cols: usize, order: &[Direction]) -> Neighborhood {
    order
        .iter()
        .filter_map(|&dir| pos.step(dir, rows, cols))
        .collect()
}
