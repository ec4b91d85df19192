use prettytable::{Cell, Row, Table};
use serde::Serialize;

/// Counters accumulated over one `solve` call.
///
/// Diagnostics only; nothing in the solver reads them back to steer the
/// search. All counters increase monotonically.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Search-tree branches entered, including the root.
    pub nodes_visited: u64,
    /// Branches abandoned after every candidate value of the selected
    /// variable was exhausted without a solution.
    pub dead_ends: u64,
    /// Arcs popped from the propagation worklist and revised.
    pub revise_calls: u64,
    /// Revisions that actually removed at least one value.
    pub prunings: u64,
}

/// Renders the counters as a bordered table for terminal output.
pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Counter"), Cell::new("Value")]));
    for (name, value) in [
        ("Nodes visited", stats.nodes_visited),
        ("Dead ends", stats.dead_ends),
        ("Revise calls", stats.revise_calls),
        ("Prunings", stats.prunings),
    ] {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.to_string()),
        ]));
    }
    table.to_string()
}
