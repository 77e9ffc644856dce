//! Run-scoped search state, kept apart from the grid topology so that a run never mutates the
//! grid and "clear path" amounts to resetting (or dropping) one table.
use crate::pathing_grid::PathingGrid;
use crate::position::Position;

/// Cost sentinel for cells that have not been assigned a distance or score yet.
pub const UNREACHABLE: i32 = i32::MAX;

/// Per-cell record written by the strategies during a single run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CellState {
    pub visited: bool,
    /// Running distance used by Dijkstra.
    pub distance: i32,
    /// Cost from the start used by A*.
    pub g_score: i32,
    /// `g_score` plus heuristic used by A*.
    pub f_score: i32,
    /// Index of the cell this one was reached from.
    pub previous: Option<usize>,
}

impl Default for CellState {
    fn default() -> Self {
        CellState {
            visited: false,
            distance: UNREACHABLE,
            g_score: UNREACHABLE,
            f_score: UNREACHABLE,
            previous: None,
        }
    }
}

/// Arena of [CellState] records indexed by row-major cell index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    rows: usize,
    cols: usize,
    cells: Vec<CellState>,
}

impl SearchState {
    pub fn new(grid: &PathingGrid) -> SearchState {
        SearchState {
            rows: grid.rows(),
            cols: grid.cols(),
            cells: vec![CellState::default(); grid.len()],
        }
    }

    /// Resets every run-scoped field. Walls, start and end live on the grid and are untouched.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::default());
    }

    /// Resets distances and scores for the whole table, leaving visited flags and
    /// predecessors alone. Dijkstra and A* call this on entry.
    pub fn reset_scores(&mut self) {
        for cell in self.cells.iter_mut() {
            cell.distance = UNREACHABLE;
            cell.g_score = UNREACHABLE;
            cell.f_score = UNREACHABLE;
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.rows && pos.col < self.cols);
        pos.row * self.cols + pos.col
    }

    fn position(&self, ix: usize) -> Position {
        Position::new(ix / self.cols, ix % self.cols)
    }

    pub fn cell(&self, pos: Position) -> &CellState {
        &self.cells[self.index(pos)]
    }

    pub(crate) fn at(&self, ix: usize) -> &CellState {
        &self.cells[ix]
    }

    pub(crate) fn at_mut(&mut self, ix: usize) -> &mut CellState {
        &mut self.cells[ix]
    }

    pub fn is_visited(&self, pos: Position) -> bool {
        self.cell(pos).visited
    }

    /// Number of cells marked visited.
    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|c| c.visited).count()
    }

    /// The cell `pos` was reached from, if any.
    pub fn previous(&self, pos: Position) -> Option<Position> {
        self.cell(pos).previous.map(|ix| self.position(ix))
    }

    /// Walks predecessor links back from `end` and returns the cells in start-to-end order.
    /// An `end` without a predecessor yields `[end]`, whether or not it was reached; compare
    /// the first element with the start cell to tell the two apart.
    pub fn reconstruct_path(&self, end: Position) -> Vec<Position> {
        let end_ix = self.index(end);
        // Predecessors form a tree, so no walk is longer than the table.
        let mut path: Vec<Position> =
            std::iter::successors(Some(end_ix), |&ix| self.cells[ix].previous)
                .take(self.cells.len())
                .map(|ix| self.position(ix))
                .collect();
        path.reverse();
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_3x3() -> PathingGrid {
        PathingGrid::new(3, 3, Position::new(0, 0), Position::new(2, 2)).unwrap()
    }

    #[test]
    fn clear_is_idempotent() {
        let grid = grid_3x3();
        let mut state = SearchState::new(&grid);
        let c = state.at_mut(4);
        c.visited = true;
        c.distance = 2;
        c.previous = Some(1);
        state.clear();
        let once = state.clone();
        state.clear();
        assert_eq!(state, once);
        assert_eq!(state, SearchState::new(&grid));
    }

    #[test]
    fn reset_scores_keeps_visits() {
        let grid = grid_3x3();
        let mut state = SearchState::new(&grid);
        state.at_mut(0).visited = true;
        state.at_mut(0).g_score = 0;
        state.reset_scores();
        assert!(state.at(0).visited);
        assert_eq!(state.at(0).g_score, UNREACHABLE);
    }

    #[test]
    fn reconstruct_walks_predecessors() {
        let grid = grid_3x3();
        let mut state = SearchState::new(&grid);
        // 0 -> 1 -> 2 -> 5 -> 8
        state.at_mut(1).previous = Some(0);
        state.at_mut(2).previous = Some(1);
        state.at_mut(5).previous = Some(2);
        state.at_mut(8).previous = Some(5);
        let path = state.reconstruct_path(Position::new(2, 2));
        assert_eq!(
            path,
            vec![
                Position::new(0, 0),
                Position::new(0, 1),
                Position::new(0, 2),
                Position::new(1, 2),
                Position::new(2, 2)
            ]
        );
        assert_eq!(state.previous(Position::new(1, 2)), Some(Position::new(0, 2)));
    }

    #[test]
    fn unreached_end_yields_single_cell() {
        let grid = grid_3x3();
        let state = SearchState::new(&grid);
        assert_eq!(state.reconstruct_path(grid.end()), vec![grid.end()]);
    }
}
