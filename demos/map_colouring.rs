use arcsolve::{
    problems::map_colouring,
    solver::{engine::Solver, stats::render_stats_table},
};

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving the map colouring problem...");

    let graph = map_colouring::build().expect("fixed instance builds");
    let (solution, stats) = Solver::default().solve(&graph);

    match solution {
        Some(assignment) => {
            println!("Solution found!");
            print!("{}", map_colouring::render(&assignment, &graph));
        }
        None => println!("No solution found."),
    }
    println!("{}", render_stats_table(&stats));
}
