use std::fmt;

use crate::solver::{ids::StateKey, metrics::Phase};

/// Error type for solver input checks and non-convergence.
#[derive(Debug, Clone, PartialEq)]
pub enum SolveError {
    /// `Mdp::states` returned nothing.
    EmptyStateSpace,
    /// `Mdp::states` returned a state twice; `state` is its first position.
    DuplicateState { state: StateKey },
    /// `Mdp::actions` returned nothing for a state.
    NoActions { state: StateKey },
    /// An outcome points at a state missing from `Mdp::states`.
    UnknownNextState {
        state: StateKey,
        action_index: usize,
        outcome_index: usize,
    },
    /// `Mdp::default_action` returned an action not offered by `Mdp::actions`.
    InvalidDefaultAction { state: StateKey },
    /// The discount factor is NaN or infinite.
    InvalidDiscount { discount: f64 },
    /// The solver config failed validation.
    InvalidConfig { reason: String },
    /// A convergence loop used up `max_sweeps` sweeps.
    NotConverged {
        phase: Phase,
        sweeps: usize,
        delta: f64,
    },
    /// Policy iteration used up `max_policy_rounds` rounds.
    PolicyNotStable { rounds: usize },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyStateSpace => write!(f, "the MDP has no states"),
            SolveError::DuplicateState { state } => {
                write!(f, "state {} is listed more than once", state.index())
            }
            SolveError::NoActions { state } => {
                write!(f, "state {} has no available actions", state.index())
            }
            SolveError::UnknownNextState {
                state,
                action_index,
                outcome_index,
            } => write!(
                f,
                "outcome {} of action {} in state {} leads to an unknown state",
                outcome_index,
                action_index,
                state.index()
            ),
            SolveError::InvalidDefaultAction { state } => write!(
                f,
                "default action of state {} is not one of its actions",
                state.index()
            ),
            SolveError::InvalidDiscount { discount } => {
                write!(f, "discount must be finite, got {discount}")
            }
            SolveError::InvalidConfig { reason } => write!(f, "{reason}"),
            SolveError::NotConverged {
                phase,
                sweeps,
                delta,
            } => write!(
                f,
                "{phase} did not converge within {sweeps} sweeps (last delta {delta})"
            ),
            SolveError::PolicyNotStable { rounds } => {
                write!(f, "policy did not stabilise within {rounds} rounds")
            }
        }
    }
}

impl std::error::Error for SolveError {}
