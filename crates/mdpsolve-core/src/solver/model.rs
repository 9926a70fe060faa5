use std::hash::Hash;

/// One possible result of taking an action: the state it lands in, how
/// likely that is, and the reward collected on the way.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome<S> {
    pub next: S,
    pub probability: f64,
    pub reward: f64,
}

impl<S> Outcome<S> {
    pub fn new(next: S, probability: f64, reward: f64) -> Self {
        Outcome {
            next,
            probability,
            reward,
        }
    }
}

/// Finite, discounted Markov decision process consumed by both solvers.
///
/// Implementations are expected to be immutable for the duration of a solve:
/// - `states` returns every state once, in an order that is stable across calls;
/// - `actions` is non-empty for every state;
/// - `step` returns outcomes whose probabilities sum to 1 and whose `next`
///   states all appear in `states`.
///
/// The solvers report an empty state space, duplicate states, states without
/// actions and unknown successor states as errors. Probability sums are not
/// checked here; data-driven models validate them when they are built.
pub trait Mdp {
    type State: Clone + Eq + Hash;
    /// Actions are ordered so exact Q-value ties can be broken by action key.
    type Action: Clone + Eq + Ord;

    /// Weight applied to the value of the next state.
    /// Values at or above 1.0 may keep the solvers from converging.
    fn discount(&self) -> f64;

    /// Enumerate every state.
    fn states(&self) -> Vec<Self::State>;

    /// Enumerate the actions available in `state`.
    fn actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Return the outcome distribution of taking `action` in `state`.
    fn step(&self, state: &Self::State, action: &Self::Action) -> Vec<Outcome<Self::State>>;

    /// Action policy iteration starts from in `state`.
    /// `None` falls back to the first entry of `actions(state)`.
    fn default_action(&self, _state: &Self::State) -> Option<Self::Action> {
        None
    }
}
