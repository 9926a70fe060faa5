use std::collections::HashMap;

use mdpsolve_core::{Mdp, Outcome, StateKey};

use crate::{MdpError, MdpSpec};

/// Floating point tolerance used when validating probability sums.
pub(crate) const PROB_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone)]
/// Runtime form of an MDP with resolved state references and precomputed CDFs.
pub struct TableMdp {
    discount: f64,
    states: Vec<StateRec>,
    state_ids: Vec<String>,
    state_id_to_key: HashMap<String, StateKey>,
}

#[derive(Debug, Clone)]
struct StateRec {
    default_action: Option<usize>,
    actions: Vec<ActionRec>,
}

#[derive(Debug, Clone)]
struct ActionRec {
    id: String,
    /// Never empty: validation rejects actions without outcomes.
    outcomes: Vec<OutcomeRec>,
    cdf: Vec<f64>,
}

#[derive(Debug, Clone)]
struct OutcomeRec {
    next: StateKey,
    prob: f64,
    reward: f64,
}

impl TableMdp {
    /// Compile and validate a spec into a fast runtime representation.
    pub(crate) fn from_spec(spec: &MdpSpec) -> Result<Self, MdpError> {
        spec.validate_with_tolerance(PROB_TOLERANCE)?;

        let mut state_id_to_key = HashMap::with_capacity(spec.states.len());
        let mut state_ids = Vec::with_capacity(spec.states.len());

        for (idx, state) in spec.states.iter().enumerate() {
            state_id_to_key.insert(state.id.clone(), StateKey::from(idx));
            state_ids.push(state.id.clone());
        }

        let mut states = Vec::with_capacity(spec.states.len());
        for state in &spec.states {
            let mut actions = Vec::with_capacity(state.actions.len());

            for action in &state.actions {
                let mut outcomes = Vec::with_capacity(action.outcomes.len());
                let mut cdf = Vec::with_capacity(action.outcomes.len());
                let mut cumulative = 0.0_f64;

                for outcome in &action.outcomes {
                    cumulative += outcome.prob;
                    cdf.push(cumulative);
                    let next = state_id_to_key.get(&outcome.next).copied().ok_or_else(|| {
                        MdpError::UnknownNextState {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            next: outcome.next.clone(),
                        }
                    })?;

                    outcomes.push(OutcomeRec {
                        next,
                        prob: outcome.prob,
                        reward: outcome.reward,
                    });
                }

                actions.push(ActionRec {
                    id: action.id.clone(),
                    outcomes,
                    cdf,
                });
            }

            let default_action = state
                .default_action
                .as_ref()
                .and_then(|default| actions.iter().position(|a| &a.id == default));

            states.push(StateRec {
                default_action,
                actions,
            });
        }

        Ok(Self {
            discount: spec.discount,
            states,
            state_ids,
            state_id_to_key,
        })
    }

    /// Return a copy of this model with another discount factor.
    pub fn with_discount(&self, discount: f64) -> Result<Self, MdpError> {
        if !discount.is_finite() || discount < 0.0 {
            return Err(MdpError::InvalidDiscount { value: discount });
        }
        Ok(Self {
            discount,
            ..self.clone()
        })
    }

    /// Return the number of compiled states.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Return the number of actions available from a state.
    pub fn num_actions(&self, key: StateKey) -> Option<usize> {
        self.states
            .get(key.index())
            .map(|state| state.actions.len())
    }

    /// Convert a state key back to its original string id.
    pub fn state_id(&self, key: StateKey) -> Option<&str> {
        self.state_ids.get(key.index()).map(String::as_str)
    }

    /// Convert a string id into a compiled state key.
    pub fn state_key(&self, id: &str) -> Option<StateKey> {
        self.state_id_to_key.get(id).copied()
    }

    /// Return the id of the `action_index`-th action of a state.
    pub fn action_id(&self, key: StateKey, action_index: usize) -> Option<&str> {
        self.states
            .get(key.index())?
            .actions
            .get(action_index)
            .map(|action| action.id.as_str())
    }

    /// Return the position of an action id within a state's actions.
    pub fn action_index(&self, key: StateKey, action_id: &str) -> Option<usize> {
        self.states
            .get(key.index())?
            .actions
            .iter()
            .position(|action| action.id == action_id)
    }

    fn action_rec(&self, state: &str, action: &str) -> Option<&ActionRec> {
        let key = self.state_key(state)?;
        let index = self.action_index(key, action)?;
        self.states[key.index()].actions.get(index)
    }

    /// Sample one transition for `(state_key, action_index)` using a uniform sample in `[0, 1)`.
    pub(crate) fn sample_transition(
        &self,
        state_key: StateKey,
        action_index: usize,
        sample: f64,
    ) -> Option<(StateKey, f64)> {
        let action = self
            .states
            .get(state_key.index())?
            .actions
            .get(action_index)?;

        let mut chosen_idx = action.cdf.partition_point(|p| *p < sample);
        if chosen_idx >= action.outcomes.len() {
            chosen_idx = action.outcomes.len() - 1;
        }

        let outcome = &action.outcomes[chosen_idx];
        Some((outcome.next, outcome.reward))
    }
}

impl Mdp for TableMdp {
    type State = String;
    type Action = String;

    fn discount(&self) -> f64 {
        self.discount
    }

    fn states(&self) -> Vec<String> {
        self.state_ids.clone()
    }

    /// Unknown states have no actions.
    fn actions(&self, state: &String) -> Vec<String> {
        self.state_key(state)
            .map(|key| {
                self.states[key.index()]
                    .actions
                    .iter()
                    .map(|action| action.id.clone())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Unknown `(state, action)` pairs have no outcomes.
    fn step(&self, state: &String, action: &String) -> Vec<Outcome<String>> {
        self.action_rec(state, action)
            .map(|action| {
                action
                    .outcomes
                    .iter()
                    .map(|outcome| {
                        Outcome::new(
                            self.state_ids[outcome.next.index()].clone(),
                            outcome.prob,
                            outcome.reward,
                        )
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    fn default_action(&self, state: &String) -> Option<String> {
        let key = self.state_key(state)?;
        let rec = &self.states[key.index()];
        rec.default_action
            .and_then(|index| rec.actions.get(index))
            .map(|action| action.id.clone())
    }
}
