mod solver;

pub use solver::bellman::q_value;
pub use solver::config::{SolverConfig, SolverConfigError, TieBreak};
pub use solver::convergence::converged;
pub use solver::error::SolveError;
pub use solver::ids::StateKey;
pub use solver::metrics::{Phase, SolveEvent, SolveMetrics};
pub use solver::model::{Mdp, Outcome};
pub use solver::policy_iteration::{policy_iteration, policy_iteration_with};
pub use solver::solution::{Solution, SolutionSnapshot, StateSnapshot};
pub use solver::value_iteration::{value_iteration, value_iteration_with};
