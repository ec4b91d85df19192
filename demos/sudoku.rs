use arcsolve::{
    problems::sudoku,
    solver::{engine::Solver, stats::render_stats_table},
};

const PUZZLE: &str = "\
530070000
600195000
098000060
800060003
400803001
700020006
060000280
000419005
000080079
";

pub fn main() {
    tracing_subscriber::fmt::init();
    println!("Solving a hardcoded Sudoku puzzle...");

    let grid = sudoku::parse_grid(PUZZLE).expect("hardcoded puzzle parses");
    let graph = sudoku::build(&grid).expect("hardcoded puzzle builds");
    let (solution, stats) = Solver::default().solve(&graph);

    match solution {
        Some(assignment) => {
            print!("{}", sudoku::render(&assignment));
            println!("Run: {}", stats.nodes_visited);
            println!("Failures: {}", stats.dead_ends);
        }
        None => println!("No solution found."),
    }
    println!("{}", render_stats_table(&stats));
}
