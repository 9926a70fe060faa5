use std::fmt;

use serde::Serialize;

/// Which convergence loop produced a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Bellman optimality sweeps of value iteration.
    ValueIteration,
    /// Fixed-policy sweeps inside one policy iteration round.
    PolicyEvaluation,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::ValueIteration => write!(f, "value iteration"),
            Phase::PolicyEvaluation => write!(f, "policy evaluation"),
        }
    }
}

/// Progress notifications passed to the hook of `*_with` solver calls.
///
/// Value slices are indexed by `StateKey`, i.e. in `Mdp::states` order.
#[derive(Debug, Clone, Copy)]
pub enum SolveEvent<'a> {
    /// One synchronous update of every state finished.
    Sweep { phase: Phase, sweep: usize, delta: f64 },
    /// Policy evaluation of a round converged to `values`.
    Evaluated {
        round: usize,
        sweeps: usize,
        values: &'a [f64],
    },
    /// Greedy improvement of a round changed the action of `changed` states.
    Improved { round: usize, changed: usize },
}

/// Aggregate counters for one solver call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SolveMetrics {
    /// Sweeps across all convergence loops.
    pub sweeps: usize,
    /// Completed policy iteration rounds; always 0 for value iteration.
    pub policy_rounds: usize,
    /// Largest value change of the last sweep.
    pub final_delta: f64,
}

impl SolveMetrics {
    pub(crate) fn record_sweep(&mut self, delta: f64) {
        self.sweeps += 1;
        self.final_delta = delta;
    }
}
