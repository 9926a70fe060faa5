use serde::Serialize;

/// Dense position of a state in the order `Mdp::states` produced it.
/// Errors and hook events refer to states through this key so they do not
/// need the caller's state type to be printable.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct StateKey(usize);

impl StateKey {
    /// Return the position of the state in the enumeration order.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl From<usize> for StateKey {
    fn from(value: usize) -> Self {
        StateKey(value)
    }
}
