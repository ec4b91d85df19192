//! Sudoku as a constraint graph: one variable per cell, all-different groups
//! over rows, columns, and boxes.

use std::fmt::Write;

use crate::{
    error::{FormatError, Result},
    solver::{assignment::Assignment, domain::Domain, graph::ConstraintGraph},
};

pub const GRID_SIZE: usize = 9;
const BOX_SIZE: usize = 3;

/// A parsed 9x9 grid; `0` marks an unknown cell.
pub type Grid = [[u8; GRID_SIZE]; GRID_SIZE];

/// A digit placed in one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellValue(pub u8);

/// Parses a textual grid: exactly 9 lines of exactly 9 characters, each one
/// of `0`..`9`, where `0` denotes an unknown cell.
pub fn parse_grid(source: &str) -> Result<Grid, FormatError> {
    let lines: Vec<&str> = source.lines().filter(|line| !line.trim().is_empty()).collect();
    if lines.len() != GRID_SIZE {
        return Err(FormatError::WrongLineCount(lines.len()));
    }

    let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
    for (row, line) in lines.iter().enumerate() {
        let cells: Vec<char> = line.trim().chars().collect();
        if cells.len() != GRID_SIZE {
            return Err(FormatError::WrongLineLength {
                line: row + 1,
                len: cells.len(),
            });
        }
        for (col, cell) in cells.iter().enumerate() {
            let digit = cell.to_digit(10).ok_or(FormatError::UnrecognizedCell {
                line: row + 1,
                found: *cell,
            })?;
            grid[row][col] = digit as u8;
        }
    }
    Ok(grid)
}

/// Builds the constraint graph for a grid.
///
/// Cells are registered row-major and named `"row-col"`; an unknown cell gets
/// the full `1..=9` domain, a pre-filled cell a singleton. All-different
/// groups cover each row, each column, and each of the nine 3x3 boxes.
pub fn build(grid: &Grid) -> Result<ConstraintGraph<CellValue>> {
    let mut graph = ConstraintGraph::new();

    let mut variables = [[0u32; GRID_SIZE]; GRID_SIZE];
    for (row, cells) in grid.iter().enumerate() {
        for (col, &cell) in cells.iter().enumerate() {
            let values: Vec<CellValue> = if cell == 0 {
                (1..=9u8).map(CellValue).collect()
            } else {
                vec![CellValue(cell)]
            };
            variables[row][col] = graph.add_variable(cell_name(row, col), values)?;
        }
    }

    for row in 0..GRID_SIZE {
        graph.add_all_different(&variables[row])?;
    }
    for col in 0..GRID_SIZE {
        let column: Vec<_> = (0..GRID_SIZE).map(|row| variables[row][col]).collect();
        graph.add_all_different(&column)?;
    }
    for box_row in 0..BOX_SIZE {
        for box_col in 0..BOX_SIZE {
            let mut cells = Vec::with_capacity(GRID_SIZE);
            for row in box_row * BOX_SIZE..(box_row + 1) * BOX_SIZE {
                for col in box_col * BOX_SIZE..(box_col + 1) * BOX_SIZE {
                    cells.push(variables[row][col]);
                }
            }
            graph.add_all_different(&cells)?;
        }
    }

    Ok(graph)
}

/// Renders a complete assignment as a grid with box separators.
///
/// The caller must hand in a complete assignment; an undecided cell renders
/// as `?`.
pub fn render(assignment: &Assignment<CellValue>) -> String {
    debug_assert!(assignment.is_complete());

    let mut out = String::new();
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            // `build` registers cells row-major, so ids are positional.
            let id = (row * GRID_SIZE + col) as u32;
            match assignment.domain(id).and_then(Domain::singleton_value) {
                Some(CellValue(digit)) => {
                    let _ = write!(out, "{digit} ");
                }
                None => out.push_str("? "),
            }
            if col == 2 || col == 5 {
                out.push_str("| ");
            }
        }
        out.pop();
        out.push('\n');
        if row == 2 || row == 5 {
            out.push_str("------+-------+------\n");
        }
    }
    out
}

fn cell_name(row: usize, col: usize) -> String {
    format!("{row}-{col}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::solver::engine::Solver;

    const EASY_PUZZLE: &str = "\
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

    fn solved_grid(assignment: &Assignment<CellValue>) -> Grid {
        let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let id = (row * GRID_SIZE + col) as u32;
                grid[row][col] = assignment
                    .domain(id)
                    .and_then(Domain::singleton_value)
                    .map(|CellValue(d)| d)
                    .unwrap_or(0);
            }
        }
        grid
    }

    fn assert_is_permutation(digits: impl Iterator<Item = u8>) {
        let mut seen: Vec<u8> = digits.collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=9).collect::<Vec<u8>>());
    }

    #[test]
    fn parse_accepts_a_well_formed_grid() {
        let grid = parse_grid(EASY_PUZZLE).unwrap();
        assert_eq!(grid[0][0], 5);
        assert_eq!(grid[0][2], 0);
        assert_eq!(grid[8][8], 9);
    }

    #[test]
    fn parse_rejects_wrong_line_count() {
        assert_eq!(
            parse_grid("530070000\n600195000\n"),
            Err(FormatError::WrongLineCount(2))
        );
    }

    #[test]
    fn parse_rejects_wrong_line_length() {
        let mut source = EASY_PUZZLE.to_string();
        source = source.replace("098000060", "0980000601");
        assert_eq!(
            parse_grid(&source),
            Err(FormatError::WrongLineLength { line: 3, len: 10 })
        );
    }

    #[test]
    fn parse_rejects_unrecognized_characters() {
        let source = EASY_PUZZLE.replace("530070000", "53x070000");
        assert_eq!(
            parse_grid(&source),
            Err(FormatError::UnrecognizedCell {
                line: 1,
                found: 'x'
            })
        );
    }

    #[test]
    fn build_registers_81_cells_with_expected_domains() {
        let grid = parse_grid(EASY_PUZZLE).unwrap();
        let graph = build(&grid).unwrap();
        assert_eq!(graph.len(), 81);

        let initial = graph.initial_assignment();
        // Pre-filled cell 0-0 holds 5; unknown cell 0-2 holds 1..=9.
        let filled = graph.variable_id("0-0").unwrap();
        assert_eq!(
            initial.domain(filled).unwrap().singleton_value(),
            Some(CellValue(5))
        );
        let open = graph.variable_id("0-2").unwrap();
        assert_eq!(initial.domain(open).unwrap().len(), 9);
    }

    #[test]
    fn solves_an_easy_puzzle_into_valid_rows_columns_and_boxes() {
        let grid = parse_grid(EASY_PUZZLE).unwrap();
        let graph = build(&grid).unwrap();

        let (solution, stats) = Solver::default().solve(&graph);
        let solution = solution.expect("the puzzle is solvable");
        assert!(solution.is_complete());

        let solved = solved_grid(&solution);
        for row in 0..GRID_SIZE {
            assert_is_permutation((0..GRID_SIZE).map(|col| solved[row][col]));
        }
        for col in 0..GRID_SIZE {
            assert_is_permutation((0..GRID_SIZE).map(|row| solved[row][col]));
        }
        for box_row in 0..BOX_SIZE {
            for box_col in 0..BOX_SIZE {
                assert_is_permutation((0..GRID_SIZE).map(|k| {
                    solved[box_row * BOX_SIZE + k / BOX_SIZE][box_col * BOX_SIZE + k % BOX_SIZE]
                }));
            }
        }

        // Pre-filled cells kept their values.
        assert_eq!(solved[0][0], 5);
        assert_eq!(solved[8][8], 9);

        assert!(stats.nodes_visited >= 1);
        assert!(stats.nodes_visited >= stats.dead_ends);
    }

    #[test]
    fn conflicting_givens_are_unsatisfiable() {
        // Two 5s in the first row.
        let source = EASY_PUZZLE.replace("530070000", "530070005");
        let grid = parse_grid(&source).unwrap();
        let graph = build(&grid).unwrap();

        let (solution, _) = Solver::default().solve(&graph);
        assert!(solution.is_none());
    }

    #[test]
    fn render_draws_the_separators() {
        let grid = parse_grid(EASY_PUZZLE).unwrap();
        let graph = build(&grid).unwrap();
        let (solution, _) = Solver::default().solve(&graph);
        let rendered = render(&solution.unwrap());

        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 11);
        assert_eq!(lines[3], "------+-------+------");
        assert_eq!(lines[7], "------+-------+------");
        assert!(lines[0].starts_with("5 3 "));
        assert_eq!(lines[0].matches('|').count(), 2);
    }
}
