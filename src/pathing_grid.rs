use crate::error::{Endpoint, Error, Result};
use crate::neighbors::{neighbors, Neighborhood, CARDINAL_ORDER};
use crate::position::{Direction, Position};
use crate::solver::{Algorithm, SearchOutcome};
use crate::{DEFAULT_COLS, DEFAULT_END, DEFAULT_ROWS, DEFAULT_START};
use core::fmt;
use core::str::FromStr;
use grid_util::grid::{BoolGrid, Grid};
use itertools::Itertools;
use log::{debug, info, warn};
use petgraph::unionfind::UnionFind;

/// [PathingGrid] is the topology searched by every strategy: its dimensions, the wall flags
/// stored in a [BoolGrid] (occupied is [true]) and the designated start and end cells. It
/// carries no run state; see [SearchState](crate::search_state::SearchState) for that.
///
/// Connected components are maintained in a [UnionFind] so reachability can be queried
/// without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    walls: BoolGrid,
    rows: usize,
    cols: usize,
    start: Position,
    end: Position,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::open(DEFAULT_ROWS, DEFAULT_COLS, DEFAULT_START, DEFAULT_END)
    }
}

impl PathingGrid {
    /// Creates a wall-free grid. Fails if a dimension is zero or either endpoint lies outside.
    pub fn new(rows: usize, cols: usize, start: Position, end: Position) -> Result<PathingGrid> {
        if rows == 0 || cols == 0 {
            return Err(Error::Empty);
        }
        for pos in [start, end] {
            if pos.row >= rows || pos.col >= cols {
                return Err(Error::OutOfBounds {
                    position: pos,
                    rows,
                    cols,
                });
            }
        }
        Ok(PathingGrid::open(rows, cols, start, end))
    }

    /// Creates a grid from rows of wall flags. Rows must all have the same length and the
    /// endpoints must be open cells.
    pub fn from_walls(walls: &[Vec<bool>], start: Position, end: Position) -> Result<PathingGrid> {
        let cols = walls.first().map_or(0, |row| row.len());
        if let Some((row, found)) = walls
            .iter()
            .map(|r| r.len())
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(Error::Ragged {
                row,
                expected: cols,
                found,
            });
        }
        let mut grid = PathingGrid::new(walls.len(), cols, start, end)?;
        for (row, flags) in walls.iter().enumerate() {
            for (col, &blocked) in flags.iter().enumerate() {
                grid.walls.set(col, row, blocked);
            }
        }
        grid.validate_endpoints(start, end)?;
        grid.generate_components();
        Ok(grid)
    }

    fn open(rows: usize, cols: usize, start: Position, end: Position) -> PathingGrid {
        let mut grid = PathingGrid {
            walls: BoolGrid::new(cols, rows, false),
            rows,
            cols,
            start,
            end,
            components: UnionFind::new(rows * cols),
            components_dirty: false,
        };
        grid.generate_components();
        grid
    }

    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn cols(&self) -> usize {
        self.cols
    }
    /// Number of cells.
    pub fn len(&self) -> usize {
        self.rows * self.cols
    }
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
    pub fn start(&self) -> Position {
        self.start
    }
    pub fn end(&self) -> Position {
        self.end
    }

    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    pub fn check_bounds(&self, pos: Position) -> Result<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds {
                position: pos,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    /// Row-major cell index.
    pub fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    pub fn position(&self, ix: usize) -> Position {
        Position::new(ix / self.cols, ix % self.cols)
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.len()).map(move |ix| self.position(ix))
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.in_bounds(pos) && self.walls.get(pos.col, pos.row)
    }

    pub fn wall_count(&self) -> usize {
        self.positions().filter(|&p| self.is_wall(p)).count()
    }

    /// In-bounds orthogonal neighbours of `pos` in the given order.
    pub fn neighbors(&self, pos: Position, order: &[Direction]) -> Neighborhood {
        neighbors(pos, self.rows, self.cols, order)
    }

    /// Checks that both endpoints are inside the grid and are not walls.
    pub fn validate_endpoints(&self, start: Position, end: Position) -> Result<()> {
        self.check_bounds(start)?;
        self.check_bounds(end)?;
        if self.is_wall(start) {
            return Err(Error::WallEndpoint(Endpoint::Start, start));
        }
        if self.is_wall(end) {
            return Err(Error::WallEndpoint(Endpoint::End, end));
        }
        Ok(())
    }

    /// Updates a wall flag and returns whether the grid changed. Requests targeting the start
    /// or end cell are ignored. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, pos: Position, blocked: bool) -> Result<bool> {
        self.check_bounds(pos)?;
        if pos == self.start || pos == self.end {
            debug!("Ignoring wall edit on endpoint {}", pos);
            return Ok(false);
        }
        if self.is_wall(pos) == blocked {
            return Ok(false);
        }
        if blocked {
            self.components_dirty = true;
        }
        self.walls.set(pos.col, pos.row, blocked);
        if !blocked {
            let ix = self.index(pos);
            for n in self.neighbors(pos, &CARDINAL_ORDER) {
                if !self.is_wall(n) {
                    let n_ix = self.index(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
        Ok(true)
    }

    /// Flips the wall flag of `pos` and returns the resulting flag. Endpoints stay open.
    pub fn toggle_wall(&mut self, pos: Position) -> Result<bool> {
        let blocked = !self.is_wall(pos);
        self.set_wall(pos, blocked)?;
        Ok(self.is_wall(pos))
    }

    /// Removes every wall. Start and end keep their positions.
    pub fn clear_walls(&mut self) {
        info!("Clearing {} walls", self.wall_count());
        self.walls = BoolGrid::new(self.cols, self.rows, false);
        self.generate_components();
    }

    /// Retrieves the component id a given [Position] belongs to.
    pub fn get_component(&self, pos: Position) -> usize {
        self.components.find(self.index(pos))
    }

    /// Checks if start and goal are open cells on the same component. Components must be up to
    /// date, see [update](Self::update).
    pub fn reachable(&self, start: Position, goal: Position) -> bool {
        if self.components_dirty {
            warn!("Reachability queried on dirty components");
        }
        self.in_bounds(start)
            && self.in_bounds(goal)
            && !self.is_wall(start)
            && !self.is_wall(goal)
            && self.components.equiv(self.index(start), self.index(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up open orthogonal neighbours.
    pub fn generate_components(&mut self) {
        debug!("Generating components for {}x{} grid", self.rows, self.cols);
        self.components = UnionFind::new(self.len());
        self.components_dirty = false;
        for ix in 0..self.len() {
            let pos = self.position(ix);
            if self.is_wall(pos) {
                continue;
            }
            // Down and right suffice, the other two are covered from the neighbour's side.
            for n in self.neighbors(pos, &[Direction::Down, Direction::Right]) {
                if !self.is_wall(n) {
                    let n_ix = self.index(n);
                    self.components.union(ix, n_ix);
                }
            }
        }
    }

    /// Runs `algorithm` between this grid's own start and end cells.
    pub fn search(&self, algorithm: Algorithm) -> Result<SearchOutcome> {
        algorithm.run(self, self.start, self.end)
    }

    fn glyph(&self, pos: Position) -> char {
        if pos == self.start {
            'S'
        } else if pos == self.end {
            'E'
        } else if self.is_wall(pos) {
            '#'
        } else {
            '.'
        }
    }
}

impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.rows {
            let line = (0..self.cols)
                .map(|col| self.glyph(Position::new(row, col)))
                .join("");
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Parses the layout written by [Display](fmt::Display): `S` start, `E` (or `G`) end, `#` wall
/// and `.` open. Leading and trailing whitespace on each line and blank lines are ignored.
impl FromStr for PathingGrid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut walls: Vec<Vec<bool>> = Vec::new();
        let mut start = None;
        let mut end = None;
        for (line_no, line) in s
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, l)| !l.is_empty())
        {
            let row = walls.len();
            let mut flags = Vec::with_capacity(line.len());
            for (col, glyph) in line.chars().enumerate() {
                let pos = Position::new(row, col);
                match glyph {
                    '.' => flags.push(false),
                    '#' => flags.push(true),
                    'S' => {
                        if start.replace(pos).is_some() {
                            return Err(Error::DuplicateEndpoint(Endpoint::Start));
                        }
                        flags.push(false);
                    }
                    'E' | 'G' => {
                        if end.replace(pos).is_some() {
                            return Err(Error::DuplicateEndpoint(Endpoint::End));
                        }
                        flags.push(false);
                    }
                    _ => {
                        return Err(Error::InvalidGlyph {
                            glyph,
                            line: line_no + 1,
                            column: col + 1,
                        })
                    }
                }
            }
            walls.push(flags);
        }
        if walls.is_empty() {
            return Err(Error::Empty);
        }
        let start = start.ok_or(Error::MissingEndpoint(Endpoint::Start))?;
        let end = end.ok_or(Error::MissingEndpoint(Endpoint::End))?;
        PathingGrid::from_walls(&walls, start, end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Tests whether cells are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        // S#.
        // .#E
        let grid: PathingGrid = "S#.\n.#E".parse().unwrap();
        let p1 = Position::new(0, 0);
        let p2 = Position::new(1, 1);
        let p3 = Position::new(1, 0);
        let p4 = Position::new(0, 2);
        assert!(!grid.reachable(p1, p2));
        assert!(grid.reachable(p1, p3));
        assert!(!grid.reachable(p1, p4));
        assert_ne!(grid.get_component(p1), grid.get_component(p4));
    }

    /// Asserts that the two corners are connected on a 4-grid.
    #[test]
    fn reachable_around_center_wall() {
        let mut grid = PathingGrid::new(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap();
        grid.set_wall(Position::new(1, 1), true).unwrap();
        grid.update();
        assert!(grid.reachable(grid.start(), grid.end()));
    }

    #[test]
    fn diagonal_contact_is_not_connected() {
        let grid: PathingGrid = "
            S#
            #E
        "
        .parse()
        .unwrap();
        assert!(!grid.reachable(grid.start(), grid.end()));
    }

    #[test]
    fn removing_a_wall_joins_components() {
        let mut grid: PathingGrid = "S#E".parse().unwrap();
        assert!(!grid.reachable(grid.start(), grid.end()));
        assert!(!grid.toggle_wall(Position::new(0, 1)).unwrap());
        assert!(!grid.components_dirty);
        assert!(grid.reachable(grid.start(), grid.end()));
    }

    #[test]
    fn endpoints_cannot_become_walls() {
        let mut grid = PathingGrid::default();
        let start = grid.start();
        assert!(!grid.set_wall(start, true).unwrap());
        assert!(!grid.toggle_wall(grid.end()).unwrap());
        assert_eq!(grid.wall_count(), 0);
    }

    #[test]
    fn default_board_dimensions() {
        let grid = PathingGrid::default();
        assert_eq!((grid.rows(), grid.cols()), (20, 50));
        assert_eq!(grid.start(), Position::new(10, 5));
        assert_eq!(grid.end(), Position::new(10, 45));
    }

    #[test]
    fn display_round_trips_layout() {
        let layout = "S.#\n.#.\n..E\n";
        let grid: PathingGrid = layout.parse().unwrap();
        assert_eq!(grid.to_string(), layout);
        assert_eq!(grid.wall_count(), 2);
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert_eq!(
            "SE\n.".parse::<PathingGrid>().unwrap_err(),
            Error::Ragged {
                row: 1,
                expected: 2,
                found: 1
            }
        );
        assert_eq!(
            "S..".parse::<PathingGrid>().unwrap_err(),
            Error::MissingEndpoint(Endpoint::End)
        );
        assert_eq!(
            "SSE".parse::<PathingGrid>().unwrap_err(),
            Error::DuplicateEndpoint(Endpoint::Start)
        );
        assert!(matches!(
            "S?E".parse::<PathingGrid>().unwrap_err(),
            Error::InvalidGlyph { glyph: '?', line: 1, column: 2 }
        ));
        assert_eq!("".parse::<PathingGrid>().unwrap_err(), Error::Empty);
    }

    #[test]
    fn glyph_errors_count_blank_lines() {
        assert_eq!(
            "\nS?E".parse::<PathingGrid>().unwrap_err(),
            Error::InvalidGlyph {
                glyph: '?',
                line: 2,
                column: 2
            }
        );
        assert_eq!(
            "S.\n\n  .x\nE.".parse::<PathingGrid>().unwrap_err(),
            Error::InvalidGlyph {
                glyph: 'x',
                line: 3,
                column: 2
            }
        );
    }

    #[test]
    fn wall_endpoints_are_rejected() {
        let walls = vec![vec![true, false], vec![false, false]];
        let err = PathingGrid::from_walls(&walls, Position::new(0, 0), Position::new(1, 1));
        assert_eq!(
            err.unwrap_err(),
            Error::WallEndpoint(Endpoint::Start, Position::new(0, 0))
        );
        let err = PathingGrid::new(2, 2, Position::new(0, 0), Position::new(2, 0));
        assert!(matches!(err, Err(Error::OutOfBounds { .. })));
    }
}
