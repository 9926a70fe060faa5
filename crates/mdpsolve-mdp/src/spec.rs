use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{MdpError, TableMdp, compiled::PROB_TOLERANCE};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// Serializable MDP schema used for YAML IO and validation.
pub struct MdpSpec {
    /// Schema version for future compatibility checks.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    /// Weight of next-state values in every backup.
    pub discount: f64,
    /// All state declarations, in the order solvers enumerate them.
    pub states: Vec<StateSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A single state declaration in the MDP schema.
pub struct StateSpec {
    /// Unique state id.
    pub id: String,
    /// Action policy iteration starts from (defaults to the first action).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_action: Option<String>,
    /// Available actions from this state.
    #[serde(default)]
    pub actions: Vec<ActionSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// A named action and its stochastic outcomes.
pub struct ActionSpec {
    pub id: String,
    pub outcomes: Vec<OutcomeSpec>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
/// One probabilistic transition for an action.
pub struct OutcomeSpec {
    pub next: String,
    pub prob: f64,
    pub reward: f64,
}

impl MdpSpec {
    /// Validate schema invariants using the crate default tolerance.
    pub fn validate(&self) -> Result<(), MdpError> {
        self.validate_with_tolerance(PROB_TOLERANCE)
    }

    /// Validate ids, transitions, and probability constraints.
    pub fn validate_with_tolerance(&self, tolerance: f64) -> Result<(), MdpError> {
        // Discount at or above 1 is allowed; the solvers cap their sweeps.
        if !self.discount.is_finite() || self.discount < 0.0 {
            return Err(MdpError::InvalidDiscount {
                value: self.discount,
            });
        }

        if self.states.is_empty() {
            return Err(MdpError::NoStates);
        }

        // State ids must be present and unique.
        let mut ids = HashSet::with_capacity(self.states.len());
        for state in &self.states {
            if state.id.trim().is_empty() {
                return Err(MdpError::BlankStateId);
            }
            if !ids.insert(state.id.as_str()) {
                return Err(MdpError::DuplicateStateId {
                    id: state.id.clone(),
                });
            }
        }

        for state in &self.states {
            if state.actions.is_empty() {
                return Err(MdpError::NoActions {
                    state: state.id.clone(),
                });
            }

            let mut action_ids = HashSet::with_capacity(state.actions.len());
            for action in &state.actions {
                if !action_ids.insert(action.id.as_str()) {
                    return Err(MdpError::DuplicateActionId {
                        state: state.id.clone(),
                        action: action.id.clone(),
                    });
                }

                if action.outcomes.is_empty() {
                    return Err(MdpError::EmptyOutcomes {
                        state: state.id.clone(),
                        action: action.id.clone(),
                    });
                }

                let mut sum = 0.0_f64;
                for (i, outcome) in action.outcomes.iter().enumerate() {
                    if !outcome.prob.is_finite() || outcome.prob < 0.0 {
                        return Err(MdpError::InvalidProbability {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            outcome_index: i,
                            value: outcome.prob,
                        });
                    }

                    if !outcome.reward.is_finite() {
                        return Err(MdpError::InvalidReward {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            outcome_index: i,
                            value: outcome.reward,
                        });
                    }

                    if !ids.contains(outcome.next.as_str()) {
                        return Err(MdpError::UnknownNextState {
                            state: state.id.clone(),
                            action: action.id.clone(),
                            next: outcome.next.clone(),
                        });
                    }

                    sum += outcome.prob;
                }

                // Outcome probabilities for an action must sum to 1 within tolerance.
                if (sum - 1.0).abs() > tolerance {
                    return Err(MdpError::ProbabilitySum {
                        state: state.id.clone(),
                        action: action.id.clone(),
                        sum,
                        tolerance,
                    });
                }
            }

            if let Some(default) = state
                .default_action
                .as_deref()
                .filter(|default| !action_ids.contains(default))
            {
                return Err(MdpError::UnknownDefaultAction {
                    state: state.id.clone(),
                    action: default.to_string(),
                });
            }
        }

        Ok(())
    }

    /// Compile this spec into the runtime representation.
    pub fn compile(&self) -> Result<TableMdp, MdpError> {
        TableMdp::from_spec(self)
    }
}
