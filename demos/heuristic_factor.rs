use grid_pathviz::solver::{astar::AstarSolver, GridSolver};
use grid_pathviz::{PathingGrid, Position};

// The heuristic_factor can be set to scale the heuristic, causing cells that are closer to the goal (ignoring obstacles)
// to be evaluated quicker than in normal operation. This is called Weighted A* and it can speed up the algorithm in certain scenarios.

fn main() {
    const N: usize = 30;
    let mut pathing_grid =
        PathingGrid::new(N, N, Position::new(1, 1), Position::new(N - 3, N - 3)).unwrap();
    for row in 8..16 {
        for col in 8..16 {
            pathing_grid.set_wall(Position::new(row, col), true).unwrap();
        }
    }
    pathing_grid.update();
    println!("{}", pathing_grid);
    for heuristic_factor in [1.0, 1.3, 2.0] {
        let solver = AstarSolver { heuristic_factor };
        let outcome = solver
            .run(&pathing_grid, pathing_grid.start(), pathing_grid.end())
            .unwrap();
        println!(
            "factor {heuristic_factor}: visited {} cells, path of {} moves",
            outcome.visited.len(),
            outcome.path_cost().unwrap()
        );
    }
}
