use std::{
    io::{self, Write},
    path::PathBuf,
};

use arcsolve::{
    error::Result,
    problems::sudoku,
    solver::{engine::Solver, stats::render_stats_table},
};
use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Solve a 9x9 Sudoku grid with AC-3 and backtracking search.
#[derive(Parser, Debug)]
#[command(name = "arcsolve", version, about)]
struct Args {
    /// Path to the puzzle file: 9 lines of 9 digits, 0 for an unknown cell.
    /// Prompted for when omitted.
    puzzle: Option<PathBuf>,

    /// Print the propagation counter table after solving.
    #[arg(long)]
    stats: bool,

    /// Emit the search statistics as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let path = match args.puzzle {
        Some(path) => path,
        None => prompt_for_path()?,
    };

    let source = std::fs::read_to_string(&path)?;
    let grid = sudoku::parse_grid(&source)?;
    let graph = sudoku::build(&grid)?;

    let (solution, stats) = Solver::default().solve(&graph);
    match solution {
        Some(assignment) => {
            print!("{}", sudoku::render(&assignment));
            println!("Run: {}", stats.nodes_visited);
            println!("Failures: {}", stats.dead_ends);
        }
        None => println!("No solution found."),
    }

    if args.stats {
        println!("{}", render_stats_table(&stats));
    }
    if args.json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}

fn prompt_for_path() -> Result<PathBuf> {
    print!("Enter filename: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}
