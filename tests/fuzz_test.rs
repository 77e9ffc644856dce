/// Fuzzes the search engine by checking for many random grids that every strategy finds a path
/// exactly when the goal shares a connected component with the start, that the optimal
/// strategies agree on the path length, and that the resulting replays are well ordered.
use grid_pathviz::{
    Algorithm, PathingGrid, Position, ReplayAction, ReplayScheduler, SearchOutcome,
};
use itertools::Itertools;
use rand::prelude::*;

fn random_grid(rows: usize, cols: usize, rng: &mut StdRng, density: f64) -> PathingGrid {
    let start = Position::new(0, 0);
    let end = Position::new(rows - 1, cols - 1);
    let mut pathing_grid = PathingGrid::new(rows, cols, start, end).unwrap();
    for row in 0..rows {
        for col in 0..cols {
            pathing_grid
                .set_wall(Position::new(row, col), rng.gen_bool(density))
                .unwrap();
        }
    }
    pathing_grid.update();
    pathing_grid
}

fn random_position(rows: usize, cols: usize, rng: &mut StdRng) -> Position {
    Position::new(rng.gen_range(0..rows), rng.gen_range(0..cols))
}

fn visualize_grid(grid: &PathingGrid) {
    println!("{grid}");
}

fn assert_valid_path(grid: &PathingGrid, outcome: &SearchOutcome) {
    assert_eq!(outcome.path.first(), Some(&grid.start()));
    assert_eq!(outcome.path.last(), Some(&grid.end()));
    assert!(outcome.path.iter().all(|&p| !grid.is_wall(p)));
    assert!(outcome
        .path
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.manhattan_distance(b) == 1));
    assert!(outcome.path.iter().all(|p| outcome.visited.contains(p)));
}

fn assert_replay_ordering(grid: &PathingGrid, outcome: &SearchOutcome) {
    let replay = ReplayScheduler::default().schedule_outcome(outcome, grid.start(), grid.end());
    let offsets = replay.iter().map(|e| e.offset_ms).collect_vec();
    assert!(offsets.iter().tuple_windows().all(|(a, b)| a < b));
    let first_path = replay
        .iter()
        .find(|e| !matches!(e.action, ReplayAction::Explore(_)))
        .map(|e| e.offset_ms)
        .unwrap();
    assert!(replay
        .iter()
        .filter(|e| matches!(e.action, ReplayAction::Explore(_)))
        .all(|e| e.offset_ms < first_path));
    assert_eq!(replay.iter().last().map(|e| e.action), Some(ReplayAction::Complete));
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_GRIDS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_GRIDS {
        let grid = random_grid(N, N, &mut rng, 0.35);
        let reachable = grid.reachable(grid.start(), grid.end());
        let mut optimal_costs = Vec::new();
        for algorithm in Algorithm::ALL {
            let outcome = grid.search(algorithm).unwrap();
            // Show the grid if a path is not found
            if outcome.path_found != reachable {
                visualize_grid(&grid);
            }
            assert_eq!(outcome.path_found, reachable, "{algorithm}");
            assert_eq!(outcome.visited[0], grid.start());
            assert!(outcome.visited.iter().all_unique());
            assert!(outcome.visited.iter().all(|&p| !grid.is_wall(p)));
            if reachable {
                assert_valid_path(&grid, &outcome);
                assert_eq!(outcome.visited.last(), Some(&grid.end()));
                if algorithm.is_optimal() {
                    optimal_costs.push(outcome.path_cost());
                }
            } else {
                assert_eq!(outcome.path, vec![grid.end()]);
            }
            assert_replay_ordering(&grid, &outcome);
        }
        assert!(optimal_costs.iter().all_equal());
    }
}

#[test]
fn fuzz_open_grid_distance() {
    const N_GRIDS: usize = 500;
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..N_GRIDS {
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let start = random_position(rows, cols, &mut rng);
        let end = random_position(rows, cols, &mut rng);
        let grid = PathingGrid::new(rows, cols, start, end).unwrap();
        let manhattan = start.manhattan_distance(&end) as usize;
        for algorithm in [Algorithm::BreadthFirst, Algorithm::Dijkstra, Algorithm::AStar] {
            let outcome = grid.search(algorithm).unwrap();
            assert_eq!(outcome.path_cost(), Some(manhattan), "{algorithm}");
        }
        let dfs = grid.search(Algorithm::DepthFirst).unwrap();
        assert!(dfs.path_cost().unwrap() >= manhattan);
    }
}
