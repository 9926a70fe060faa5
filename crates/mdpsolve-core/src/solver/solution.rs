use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::solver::{
    bellman::q_value, ids::StateKey, interner::StateInterner, metrics::SolveMetrics,
    model::{Mdp, Outcome},
};

/// Values and policy returned by a solver, kept in `Mdp::states` order.
#[derive(Debug, Clone)]
pub struct Solution<S, A>
where
    S: Clone + Eq + Hash,
{
    states: StateInterner<S>,
    values: Vec<f64>,
    policy: Vec<A>,
    metrics: SolveMetrics,
}

impl<S, A> Solution<S, A>
where
    S: Clone + Eq + Hash,
{
    pub(crate) fn new(
        states: StateInterner<S>,
        values: Vec<f64>,
        policy: Vec<A>,
        metrics: SolveMetrics,
    ) -> Self {
        Solution {
            states,
            values,
            policy,
            metrics,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// States in enumeration order.
    pub fn states(&self) -> &[S] {
        self.states.as_slice()
    }

    /// Values indexed by `StateKey`.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Chosen actions indexed by `StateKey`.
    pub fn policy(&self) -> &[A] {
        &self.policy
    }

    pub fn metrics(&self) -> SolveMetrics {
        self.metrics
    }

    pub fn key_of(&self, state: &S) -> Option<StateKey> {
        self.states.key_of(state)
    }

    pub fn value(&self, state: &S) -> Option<f64> {
        self.key_of(state).map(|key| self.values[key.index()])
    }

    pub fn action(&self, state: &S) -> Option<&A> {
        self.key_of(state).map(|key| &self.policy[key.index()])
    }

    /// Iterate `(state, value, action)` rows in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (&S, f64, &A)> {
        self.states
            .as_slice()
            .iter()
            .zip(&self.values)
            .zip(&self.policy)
            .map(|((state, value), action)| (state, *value, action))
    }

    pub fn value_map(&self) -> HashMap<S, f64> {
        self.iter()
            .map(|(state, value, _)| (state.clone(), value))
            .collect()
    }

    pub fn policy_map(&self) -> HashMap<S, A>
    where
        A: Clone,
    {
        self.iter()
            .map(|(state, _, action)| (state.clone(), action.clone()))
            .collect()
    }

    /// Q-value of `action` in `state` against this solution's values.
    /// Returns `None` if any outcome leads outside the solved states.
    pub fn q_value<M>(&self, mdp: &M, state: &S, action: &A) -> Option<f64>
    where
        M: Mdp<State = S, Action = A>,
    {
        let resolved = mdp
            .step(state, action)
            .into_iter()
            .map(|outcome| {
                self.key_of(&outcome.next)
                    .map(|key| Outcome::new(key, outcome.probability, outcome.reward))
            })
            .collect::<Option<Vec<_>>>()?;

        Some(q_value(&resolved, mdp.discount(), |key| {
            self.values[key.index()]
        }))
    }

    /// Build a serializable copy of this solution.
    pub fn snapshot(&self) -> SolutionSnapshot<S, A>
    where
        A: Clone,
    {
        SolutionSnapshot {
            schema_version: 1,
            metrics: self.metrics,
            states: self
                .iter()
                .enumerate()
                .map(|(idx, (state, value, action))| StateSnapshot {
                    state_key: idx,
                    state: state.clone(),
                    value,
                    action: action.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SolutionSnapshot<S, A> {
    pub schema_version: u32,
    pub metrics: SolveMetrics,
    pub states: Vec<StateSnapshot<S, A>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct StateSnapshot<S, A> {
    pub state_key: usize,
    pub state: S,
    pub value: f64,
    pub action: A,
}

impl<S: Serialize, A: Serialize> SolutionSnapshot<S, A> {
    /// Render the snapshot as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
