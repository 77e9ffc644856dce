use core::fmt;
use grid_util::point::Point;

/// A cell address on the grid. Rows grow downwards, columns grow to the right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Position {
        Position { row, col }
    }

    /// Converts to a [Point] with `x` as the column and `y` as the row.
    pub fn to_point(self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }

    /// Manhattan distance `|drow| + |dcol|`, the exact step count between two cells on an
    /// open 4-connected grid.
    pub fn manhattan_distance(&self, other: &Position) -> i32 {
        self.to_point().manhattan_distance(&other.to_point())
    }

    /// The neighbouring position in `direction`, or [None] when it would leave a
    /// `rows` x `cols` grid.
    pub fn step(self, direction: Direction, rows: usize, cols: usize) -> Option<Position> {
        let Position { row, col } = self;
        match direction {
            Direction::Up if row > 0 => Some(Position::new(row - 1, col)),
            Direction::Down if row + 1 < rows => Some(Position::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Position::new(row, col - 1)),
            Direction::Right if col + 1 < cols => Some(Position::new(row, col + 1)),
            _ => None,
        }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Position::new(row, col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The four orthogonal moves. Diagonal moves are not part of this grid model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stays_inside_bounds() {
        let corner = Position::new(0, 0);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(corner.step(Direction::Down, 3, 3), Some(Position::new(1, 0)));
        assert_eq!(corner.step(Direction::Right, 3, 3), Some(Position::new(0, 1)));
        let far = Position::new(2, 2);
        assert_eq!(far.step(Direction::Down, 3, 3), None);
        assert_eq!(far.step(Direction::Right, 3, 3), None);
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let a = Position::new(1, 7);
        let b = Position::new(4, 2);
        assert_eq!(a.manhattan_distance(&b), 8);
        assert_eq!(b.manhattan_distance(&a), 8);
        assert_eq!(a.manhattan_distance(&a), 0);
    }
}
