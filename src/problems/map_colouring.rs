//! The textbook Australia map-colouring instance: seven regions, three
//! colours, inequality constraints along every border.

use std::fmt;
use std::fmt::Write as _;

use crate::{
    error::Result,
    solver::{
        assignment::Assignment,
        graph::ConstraintGraph,
        relation::NotEqual,
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Colour {
    Red,
    Green,
    Blue,
}

impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Colour::Red => "red",
            Colour::Green => "green",
            Colour::Blue => "blue",
        };
        f.write_str(name)
    }
}

const REGIONS: [&str; 7] = ["WA", "NT", "Q", "NSW", "V", "SA", "T"];
const BORDERS: [(&str, &str); 9] = [
    ("SA", "WA"),
    ("SA", "NT"),
    ("SA", "Q"),
    ("SA", "NSW"),
    ("SA", "V"),
    ("NT", "WA"),
    ("NT", "Q"),
    ("NSW", "Q"),
    ("NSW", "V"),
];

/// Builds the fixed Australia instance: every region gets the full palette,
/// every border an inequality in both directions. Tasmania borders nothing.
pub fn build() -> Result<ConstraintGraph<Colour>> {
    let mut graph = ConstraintGraph::new();
    for region in REGIONS {
        graph.add_variable(region, [Colour::Red, Colour::Green, Colour::Blue])?;
    }
    for (a, b) in BORDERS {
        // Registration guarantees both lookups succeed.
        let a = graph.variable_id(a).expect("region registered above");
        let b = graph.variable_id(b).expect("region registered above");
        graph.add_constraint(a, b, NotEqual)?;
        graph.add_constraint(b, a, NotEqual)?;
    }
    Ok(graph)
}

/// Renders a complete assignment as one `region: colour` line per region, in
/// registration order. Undecided regions render as `?`.
pub fn render(assignment: &Assignment<Colour>, graph: &ConstraintGraph<Colour>) -> String {
    let mut out = String::new();
    for variable in graph.variables() {
        let name = graph.variable_name(variable).unwrap_or("?");
        match assignment.domain(variable).and_then(|d| d.singleton_value()) {
            Some(colour) => {
                let _ = writeln!(out, "{name}: {colour}");
            }
            None => {
                let _ = writeln!(out, "{name}: ?");
            }
        }
    }
    out
}
