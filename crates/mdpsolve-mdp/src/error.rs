use thiserror::Error;

#[derive(Debug, Error)]
/// Error type for MDP loading, validation, compilation, and builder operations.
pub enum MdpError {
    #[error("failed to read or write file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("discount must be finite and >= 0, got {value}")]
    InvalidDiscount { value: f64 },

    #[error("the MDP declares no states")]
    NoStates,

    #[error("state ids must not be blank")]
    BlankStateId,

    #[error("duplicate state id '{id}'")]
    DuplicateStateId { id: String },

    #[error("state '{state}' must declare at least one action")]
    NoActions { state: String },

    #[error("duplicate action id '{action}' in state '{state}'")]
    DuplicateActionId { state: String, action: String },

    #[error("default action '{action}' is not declared on state '{state}'")]
    UnknownDefaultAction { state: String, action: String },

    #[error("outcome in state '{state}', action '{action}' references unknown next state '{next}'")]
    UnknownNextState {
        state: String,
        action: String,
        next: String,
    },

    #[error(
        "invalid probability in state '{state}', action '{action}', outcome {outcome_index}: {value}"
    )]
    InvalidProbability {
        state: String,
        action: String,
        outcome_index: usize,
        value: f64,
    },

    #[error(
        "invalid reward in state '{state}', action '{action}', outcome {outcome_index}: {value}"
    )]
    InvalidReward {
        state: String,
        action: String,
        outcome_index: usize,
        value: f64,
    },

    #[error(
        "probability sum for state '{state}', action '{action}' must be within {tolerance} of 1.0, got {sum}"
    )]
    ProbabilitySum {
        state: String,
        action: String,
        sum: f64,
        tolerance: f64,
    },

    #[error("state '{state}' action '{action}' must contain at least one outcome")]
    EmptyOutcomes { state: String, action: String },

    #[error("builder referenced unknown state '{state}'")]
    BuilderUnknownState { state: String },

    #[error("builder referenced unknown action '{action}' in state '{state}'")]
    BuilderUnknownAction { state: String, action: String },
}
