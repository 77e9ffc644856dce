use grid_pathviz::{Algorithm, Position, ReplayAction, Visualizer};

// Plays back a breadth-first search on the default 20x50 board with a wall between start and
// end, printing the board every 200 ms of logical time.

fn main() {
    let mut session = Visualizer::default();
    for row in 4..17 {
        session.set_wall(Position::new(row, 25), true).unwrap();
    }
    session.set_algorithm(Algorithm::BreadthFirst);
    let duration = session.visualize().unwrap().duration_ms();
    let mut elapsed = 0;
    while session.is_replaying() {
        elapsed += 200;
        let events = session.advance(elapsed);
        let painted = events
            .iter()
            .filter(|e| e.action != ReplayAction::Complete)
            .count();
        println!("t = {elapsed} ms of {duration} ms, {painted} cells painted");
        println!("{}\n", session.marks().render(session.grid()));
    }
}
