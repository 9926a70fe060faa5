use crate::{
    Phase, SolveError, SolveEvent, SolverConfig, TieBreak, policy_iteration,
    policy_iteration_with, value_iteration,
};

use super::fixtures::{Drive, Hill, HillRobot, REFERENCE_VALUES, ScriptedMdp, assert_close};

#[test]
fn hill_robot_matches_reference_solution() {
    let solution = policy_iteration(&HillRobot::new(0.8)).expect("policy iteration should stabilise");

    for (value, expected) in solution.values().iter().zip(REFERENCE_VALUES) {
        assert_close(*value, expected, 1e-6);
    }
    assert_eq!(solution.action(&Hill::Bottom), Some(&Drive::Drive));
    assert_eq!(solution.action(&Hill::Rolling), Some(&Drive::NotDrive));
    assert_eq!(solution.action(&Hill::Top), Some(&Drive::NotDrive));
    assert!(solution.metrics().policy_rounds >= 2);
}

#[test]
fn agrees_with_value_iteration_on_hill_robot() {
    let mdp = HillRobot::new(0.8);
    let by_policy = policy_iteration(&mdp).expect("policy iteration");
    let by_value = value_iteration(&mdp).expect("value iteration");

    for (a, b) in by_policy.values().iter().zip(by_value.values()) {
        assert_close(*a, *b, 1e-6);
    }
    assert_eq!(by_policy.policy(), by_value.policy());
}

#[test]
fn steeper_climb_while_rolling_makes_driving_worthwhile() {
    let mdp = HillRobot {
        rolling_drive: [0.1, 0.1, 0.8],
        ..HillRobot::new(0.8)
    };
    let solution = policy_iteration(&mdp).expect("policy iteration");

    assert_close(solution.values()[0], 9.564356435186083, 1e-6);
    assert_close(solution.values()[1], 10.257425742116776, 1e-6);
    assert_close(solution.values()[2], 11.049504950037567, 1e-6);
    assert_eq!(
        solution.policy(),
        &[Drive::Drive, Drive::Drive, Drive::NotDrive]
    );
}

#[test]
fn rewarding_the_roll_down_makes_driving_at_the_top_worthwhile() {
    let mdp = HillRobot {
        top_idle_rewards: [3.0, 1.0],
        ..HillRobot::new(0.8)
    };
    let solution = policy_iteration(&mdp).expect("policy iteration");

    assert_close(solution.values()[0], 7.755511021593313, 1e-6);
    assert_close(solution.values()[1], 7.204408817184494, 1e-6);
    assert_close(solution.values()[2], 8.486973947445017, 1e-6);
    assert_eq!(
        solution.policy(),
        &[Drive::Drive, Drive::NotDrive, Drive::Drive]
    );
}

#[test]
fn higher_discount_keeps_policy_and_scales_values() {
    let base = policy_iteration(&HillRobot::new(0.8)).expect("0.8");
    let patient = policy_iteration(&HillRobot::new(0.99)).expect("0.99");

    assert_eq!(base.policy(), patient.policy());
    assert_close(patient.values()[0], 182.88333774754966, 1e-6);
    assert_close(patient.values()[1], 182.05450436997478, 1e-6);
    assert_close(patient.values()[2], 183.94197979733906, 1e-6);
    for (low, high) in base.values().iter().zip(patient.values()) {
        assert!(*high > 15.0 * *low);
    }
}

#[test]
fn evaluated_values_never_decrease_between_rounds() {
    let mdp = HillRobot::new(0.8);
    let mut rounds: Vec<Vec<f64>> = Vec::new();
    let mut changes = Vec::new();

    let solution = policy_iteration_with(&mdp, &SolverConfig::default(), |event| match event {
        SolveEvent::Evaluated { values, .. } => rounds.push(values.to_vec()),
        SolveEvent::Improved { changed, .. } => changes.push(*changed),
        SolveEvent::Sweep { phase, .. } => assert_eq!(*phase, Phase::PolicyEvaluation),
    })
    .expect("policy iteration");

    assert_eq!(rounds.len(), solution.metrics().policy_rounds);
    assert_eq!(changes.last(), Some(&0));
    assert!(changes[0] > 0, "the all-idle start is not optimal");
    for pair in rounds.windows(2) {
        for (before, after) in pair[0].iter().zip(&pair[1]) {
            assert!(after + 1e-8 >= *before, "{after} dropped below {before}");
        }
    }
}

#[test]
fn round_cap_reports_unstable_policy() {
    let config = SolverConfig {
        max_policy_rounds: Some(1),
        ..SolverConfig::default()
    };
    let err = policy_iteration_with(&HillRobot::new(0.8), &config, |_| {})
        .expect_err("one round cannot reach the optimum from the idle start");

    assert_eq!(err, SolveError::PolicyNotStable { rounds: 1 });
}

#[test]
fn undiscounted_evaluation_hits_the_sweep_cap() {
    let config = SolverConfig {
        max_sweeps: Some(200),
        ..SolverConfig::default()
    };
    let err = policy_iteration_with(&HillRobot::new(1.0), &config, |_| {})
        .expect_err("discount 1 must not converge");

    assert!(matches!(
        err,
        SolveError::NotConverged {
            phase: Phase::PolicyEvaluation,
            sweeps: 200,
            ..
        }
    ));
}

#[test]
fn ties_use_the_configured_rule() {
    let mdp = ScriptedMdp::new(vec![0, 1], vec!["wait", "go"]);

    let lowest = policy_iteration(&mdp).expect("lowest");
    assert_eq!(lowest.policy(), &["go", "go"]);

    let config = SolverConfig {
        tie_break: TieBreak::HighestAction,
        ..SolverConfig::default()
    };
    let highest = policy_iteration_with(&mdp, &config, |_| {}).expect("highest");
    assert_eq!(highest.policy(), &["wait", "wait"]);
    assert_eq!(highest.metrics().policy_rounds, 1);
}

#[test]
fn default_action_seeds_the_first_round() {
    let mut mdp = ScriptedMdp::new(vec![0], vec!["wait", "go"]);
    mdp.default_action = Some("go");
    let mut first_round_changes = None;

    let solution = policy_iteration_with(&mdp, &SolverConfig::default(), |event| {
        if let SolveEvent::Improved { round: 1, changed } = event {
            first_round_changes = Some(*changed);
        }
    })
    .expect("policy iteration");

    assert_eq!(first_round_changes, Some(0));
    assert_eq!(solution.policy(), &["go"]);
}
