use mdpsolve_core::{Mdp, Solution};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::{StateKey, TableMdp};

#[derive(Debug, Clone)]
/// Seeded simulator over a compiled MDP.
pub struct MdpSimulator {
    mdp: TableMdp,
    rng: ChaCha8Rng,
}

impl MdpSimulator {
    /// Create a simulator with deterministic RNG seed.
    pub fn new(mdp: TableMdp, seed: u64) -> Self {
        Self {
            mdp,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Borrow the underlying compiled MDP.
    pub fn mdp(&self) -> &TableMdp {
        &self.mdp
    }

    /// Return how many actions are available for a state.
    pub fn num_actions(&self, state_key: StateKey) -> usize {
        self.mdp.num_actions(state_key).unwrap_or(0)
    }

    /// Sample one `(next_state, reward)` transition.
    /// Invalid state/action inputs stay in place with zero reward.
    pub fn step(&mut self, state_key: StateKey, action_index: usize) -> (StateKey, f64) {
        let sample = (self.rng.next_u64() as f64) / ((u64::MAX as f64) + 1.0);
        self.mdp
            .sample_transition(state_key, action_index, sample)
            .unwrap_or((state_key, 0.0))
    }

    /// Discounted return of one `steps`-long episode following `policy` from `start`.
    /// The episode ends early in a state the policy does not cover.
    pub fn episode_return(
        &mut self,
        start: StateKey,
        policy: &Solution<String, String>,
        steps: usize,
    ) -> f64 {
        let actions = self.resolve_policy(policy);
        self.run_episode(start, &actions, steps)
    }

    /// Monte Carlo estimate of the value of `start` under `policy`.
    pub fn estimate_value(
        &mut self,
        start: StateKey,
        policy: &Solution<String, String>,
        episodes: usize,
        steps: usize,
    ) -> f64 {
        if episodes == 0 {
            return 0.0;
        }

        let actions = self.resolve_policy(policy);
        let total: f64 = (0..episodes)
            .map(|_| self.run_episode(start, &actions, steps))
            .sum();
        total / episodes as f64
    }

    /// Map the policy onto action positions, indexed by state key.
    fn resolve_policy(&self, policy: &Solution<String, String>) -> Vec<Option<usize>> {
        (0..self.mdp.state_count())
            .map(|idx| {
                let key = StateKey::from(idx);
                let state = self.mdp.state_id(key)?;
                let action = policy.action(&state.to_string())?;
                self.mdp.action_index(key, action)
            })
            .collect()
    }

    fn run_episode(&mut self, start: StateKey, actions: &[Option<usize>], steps: usize) -> f64 {
        let discount = self.mdp.discount();
        let mut state = start;
        let mut total_return = 0.0;
        let mut weight = 1.0;

        for _ in 0..steps {
            let Some(action) = actions.get(state.index()).copied().flatten() else {
                break;
            };
            let (next, reward) = self.step(state, action);
            total_return += weight * reward;
            weight *= discount;
            state = next;
        }

        total_return
    }
}
