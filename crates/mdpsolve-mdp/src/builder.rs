use crate::{ActionSpec, MdpError, MdpSpec, OutcomeSpec, StateSpec, TableMdp};

#[derive(Debug, Clone, Default)]
/// Struct to build MDPs
pub struct MdpBuilder {
    discount: f64,
    states: Vec<StateSpec>,
}

impl MdpBuilder {
    /// Create a new MdpBuilder with the given discount factor
    pub fn new(discount: f64) -> Self {
        Self {
            discount,
            states: Vec::new(),
        }
    }

    /// Add a new state
    /// States are enumerated by the solvers in the order they are added
    pub fn add_state(&mut self, id: impl Into<String>) -> &mut Self {
        self.states.push(StateSpec {
            id: id.into(),
            default_action: None,
            actions: Vec::new(),
        });
        self
    }

    /// Add an action to a state
    pub fn add_action(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl Into<String>,
    ) -> Result<&mut Self, MdpError> {
        let state = self.state_mut(state_id.as_ref())?;
        state.actions.push(ActionSpec {
            id: action_id.into(),
            outcomes: Vec::new(),
        });

        Ok(self)
    }

    /// Choose the action policy iteration starts from in a state
    pub fn set_default_action(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl Into<String>,
    ) -> Result<&mut Self, MdpError> {
        let state = self.state_mut(state_id.as_ref())?;
        state.default_action = Some(action_id.into());

        Ok(self)
    }

    /// Add an outcome to an action
    /// Action can be stochastic so we need to push it to the outcome list
    pub fn add_outcome(
        &mut self,
        state_id: impl AsRef<str>,
        action_id: impl AsRef<str>,
        next: impl Into<String>,
        prob: f64,
        reward: f64,
    ) -> Result<&mut Self, MdpError> {
        let state_id = state_id.as_ref();
        let action_id = action_id.as_ref();

        let state = self.state_mut(state_id)?;
        let action = state
            .actions
            .iter_mut()
            .find(|a| a.id == action_id)
            .ok_or_else(|| MdpError::BuilderUnknownAction {
                state: state_id.to_string(),
                action: action_id.to_string(),
            })?;

        action.outcomes.push(OutcomeSpec {
            next: next.into(),
            prob,
            reward,
        });

        Ok(self)
    }

    fn state_mut(&mut self, state_id: &str) -> Result<&mut StateSpec, MdpError> {
        self.states
            .iter_mut()
            .find(|s| s.id == state_id)
            .ok_or_else(|| MdpError::BuilderUnknownState {
                state: state_id.to_string(),
            })
    }

    pub fn build_spec(self) -> Result<MdpSpec, MdpError> {
        let spec = MdpSpec {
            version: Some(1),
            discount: self.discount,
            states: self.states,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn compile(self) -> Result<TableMdp, MdpError> {
        let spec = self.build_spec()?;
        spec.compile()
    }
}
