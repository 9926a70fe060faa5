use std::collections::HashMap;
use std::hash::Hash;

use crate::solver::ids::StateKey;

/// Stable key interner for arbitrary states.
#[derive(Debug, Clone)]
pub(crate) struct StateInterner<S>
where
    S: Clone + Eq + Hash,
{
    states: Vec<S>,
    state_to_key: HashMap<S, StateKey>,
}

impl<S> StateInterner<S>
where
    S: Clone + Eq + Hash,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            states: Vec::with_capacity(capacity),
            state_to_key: HashMap::with_capacity(capacity),
        }
    }

    /// Insert a state and return its dense key.
    /// Returns `Err` with the existing key when the state was already interned.
    pub(crate) fn intern(&mut self, state: S) -> Result<StateKey, StateKey> {
        if let Some(key) = self.state_to_key.get(&state) {
            return Err(*key);
        }

        let key = StateKey::from(self.states.len());
        self.states.push(state.clone());
        self.state_to_key.insert(state, key);
        Ok(key)
    }

    pub(crate) fn key_of(&self, state: &S) -> Option<StateKey> {
        self.state_to_key.get(state).copied()
    }

    pub(crate) fn as_slice(&self) -> &[S] {
        &self.states
    }

    pub(crate) fn len(&self) -> usize {
        self.states.len()
    }
}
