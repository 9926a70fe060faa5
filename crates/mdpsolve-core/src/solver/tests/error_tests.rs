use crate::{SolveError, SolverConfig, StateKey, policy_iteration, value_iteration, value_iteration_with};

use super::fixtures::ScriptedMdp;

#[test]
fn empty_state_space_is_rejected() {
    let mdp = ScriptedMdp::new(Vec::new(), vec!["go"]);
    assert_eq!(
        value_iteration(&mdp).expect_err("no states"),
        SolveError::EmptyStateSpace
    );
}

#[test]
fn duplicate_state_reports_first_position() {
    let mdp = ScriptedMdp::new(vec![4, 7, 4], vec!["go"]);
    assert_eq!(
        policy_iteration(&mdp).expect_err("duplicate"),
        SolveError::DuplicateState {
            state: StateKey::from(0)
        }
    );
}

#[test]
fn state_without_actions_is_rejected() {
    let mdp = ScriptedMdp::new(vec![0, 1], Vec::new());
    assert_eq!(
        value_iteration(&mdp).expect_err("no actions"),
        SolveError::NoActions {
            state: StateKey::from(0)
        }
    );
}

#[test]
fn successor_outside_state_space_is_rejected() {
    let mut mdp = ScriptedMdp::new(vec![0, 1], vec!["go"]);
    mdp.next = Some(9);

    let err = policy_iteration(&mdp).expect_err("unknown successor");

    assert_eq!(
        err,
        SolveError::UnknownNextState {
            state: StateKey::from(0),
            action_index: 0,
            outcome_index: 0,
        }
    );
    assert_eq!(
        err.to_string(),
        "outcome 0 of action 0 in state 0 leads to an unknown state"
    );
}

#[test]
fn default_action_must_be_available() {
    let mut mdp = ScriptedMdp::new(vec![0], vec!["go"]);
    mdp.default_action = Some("fly");

    assert_eq!(
        policy_iteration(&mdp).expect_err("bad default"),
        SolveError::InvalidDefaultAction {
            state: StateKey::from(0)
        }
    );
}

#[test]
fn non_finite_discount_is_rejected() {
    let mut mdp = ScriptedMdp::new(vec![0], vec!["go"]);
    mdp.discount = f64::NAN;

    assert!(matches!(
        value_iteration(&mdp).expect_err("nan discount"),
        SolveError::InvalidDiscount { discount } if discount.is_nan()
    ));
}

#[test]
fn invalid_config_is_rejected_before_solving() {
    let mdp = ScriptedMdp::new(vec![0], vec!["go"]);
    let config = SolverConfig {
        tolerance: 0.0,
        ..SolverConfig::default()
    };

    let err = value_iteration_with(&mdp, &config, |_| {}).expect_err("zero tolerance");

    assert!(matches!(err, SolveError::InvalidConfig { .. }));
    assert!(err.to_string().contains("tolerance"));
}
