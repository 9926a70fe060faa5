use crate::solver::{
    bellman::{q_value, select_greedy},
    config::TieBreak,
    error::SolveError,
    ids::StateKey,
    interner::StateInterner,
    metrics::SolveMetrics,
    model::{Mdp, Outcome},
    solution::Solution,
};

/// Solver-side copy of an `Mdp` with successor states resolved to dense keys.
/// Built once per solve so sweeps index vectors instead of hashing states.
#[derive(Debug, Clone)]
pub(crate) struct DenseMdp<S, A>
where
    S: Clone + Eq + std::hash::Hash,
{
    discount: f64,
    states: StateInterner<S>,
    actions: Vec<Vec<DenseAction<A>>>,
    default_actions: Vec<usize>,
}

#[derive(Debug, Clone)]
struct DenseAction<A> {
    action: A,
    outcomes: Vec<Outcome<StateKey>>,
}

impl<S, A> DenseMdp<S, A>
where
    S: Clone + Eq + std::hash::Hash,
    A: Clone + Eq + Ord,
{
    /// Enumerate `mdp` and check the structural parts of its contract.
    pub(crate) fn compile<M>(mdp: &M) -> Result<Self, SolveError>
    where
        M: Mdp<State = S, Action = A>,
    {
        let discount = mdp.discount();
        if !discount.is_finite() {
            return Err(SolveError::InvalidDiscount { discount });
        }

        let listed = mdp.states();
        if listed.is_empty() {
            return Err(SolveError::EmptyStateSpace);
        }

        let mut states = StateInterner::with_capacity(listed.len());
        for state in &listed {
            states
                .intern(state.clone())
                .map_err(|first| SolveError::DuplicateState { state: first })?;
        }

        let mut actions = Vec::with_capacity(listed.len());
        let mut default_actions = Vec::with_capacity(listed.len());

        for (idx, state) in listed.iter().enumerate() {
            let key = StateKey::from(idx);
            let available = mdp.actions(state);
            if available.is_empty() {
                return Err(SolveError::NoActions { state: key });
            }

            let mut dense_actions = Vec::with_capacity(available.len());
            for (action_index, action) in available.into_iter().enumerate() {
                let mut outcomes = Vec::new();
                for (outcome_index, outcome) in mdp.step(state, &action).into_iter().enumerate() {
                    let next = states.key_of(&outcome.next).ok_or(
                        SolveError::UnknownNextState {
                            state: key,
                            action_index,
                            outcome_index,
                        },
                    )?;
                    outcomes.push(Outcome::new(next, outcome.probability, outcome.reward));
                }
                dense_actions.push(DenseAction { action, outcomes });
            }

            let default_action = match mdp.default_action(state) {
                Some(default) => dense_actions
                    .iter()
                    .position(|candidate| candidate.action == default)
                    .ok_or(SolveError::InvalidDefaultAction { state: key })?,
                None => 0,
            };

            actions.push(dense_actions);
            default_actions.push(default_action);
        }

        Ok(Self {
            discount,
            states,
            actions,
            default_actions,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }

    /// Starting policy of policy iteration, as action positions per state.
    pub(crate) fn initial_policy(&self) -> Vec<usize> {
        self.default_actions.clone()
    }

    /// Q-value of the `action`-th action of `state` under `values`.
    pub(crate) fn q(&self, state: usize, action: usize, values: &[f64]) -> f64 {
        match self.actions[state].get(action) {
            Some(entry) => q_value(&entry.outcomes, self.discount, |next| values[next.index()]),
            None => f64::NAN,
        }
    }

    /// Greedy action position and its Q-value for `state` under `values`.
    pub(crate) fn greedy(&self, state: usize, values: &[f64], tie_break: TieBreak) -> (usize, f64) {
        let candidates = self.actions[state].iter().enumerate().map(|(idx, entry)| {
            (self.q(state, idx, values), &entry.action)
        });
        select_greedy(candidates, tie_break).unwrap_or((0, f64::NAN))
    }

    /// Resolve action positions and hand the result to the caller.
    pub(crate) fn into_solution(
        self,
        values: Vec<f64>,
        policy: &[usize],
        metrics: SolveMetrics,
    ) -> Solution<S, A> {
        let actions = self
            .actions
            .into_iter()
            .zip(policy)
            .map(|(mut available, &chosen)| available.swap_remove(chosen).action)
            .collect();
        Solution::new(self.states, values, actions, metrics)
    }
}
