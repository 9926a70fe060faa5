//! Plain-text rendering of solver results.

use std::{fmt::Display, hash::Hash};

use mdpsolve_core::Solution;

/// Render `state`, `V(s)` and `policy(s)` as fixed-width columns, one state per line.
///
/// Labels are left-aligned and values right-aligned; every column keeps its padding.
pub fn render_table<S, A>(solution: &Solution<S, A>) -> String
where
    S: Clone + Eq + Hash + Display,
    A: Display,
{
    let mut table = format!("{:20} {:15} {:20}\n", "state", "V(s)", "policy(s)");
    for (state, value, action) in solution.iter() {
        table.push_str(&format!(
            "{:20} {:>15} {:20}\n",
            state.to_string(),
            value,
            action.to_string()
        ));
    }
    table
}
