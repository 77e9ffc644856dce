use grid_pathviz::{Algorithm, PathingGrid};

// In this example every strategy is run on a 5x7 grid with shape
// S..#...
// .#.#.#.
// .#...#.
// .####..
// ......E
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Cells have a 4-neighborhood and every move costs one.

fn main() {
    let pathing_grid: PathingGrid = "
        S..#...
        .#.#.#.
        .#...#.
        .####..
        ......E
    "
    .parse()
    .unwrap();
    println!("{}", pathing_grid);
    for algorithm in Algorithm::ALL {
        let outcome = pathing_grid.search(algorithm).unwrap();
        println!(
            "{}: visited {} cells, path of {} moves",
            algorithm,
            outcome.visited.len(),
            outcome.path_cost().unwrap()
        );
        for p in &outcome.path {
            print!("{} ", p);
        }
        println!();
    }
}
