use crate::{
    Outcome, TieBreak,
    solver::{
        bellman::{q_value, select_greedy},
        convergence::{converged, max_abs_delta},
    },
};

#[test]
fn q_value_weights_reward_and_discounted_successor_value() {
    let outcomes = vec![Outcome::new(0usize, 0.4, 0.0), Outcome::new(1usize, 0.6, 2.0)];
    let values = [1.0, 2.0];

    let q = q_value(&outcomes, 0.8, |next| values[*next]);

    // 0.4 * (0 + 0.8 * 1) + 0.6 * (2 + 0.8 * 2)
    assert!((q - 2.48).abs() < 1e-12);
}

#[test]
fn greedy_selection_prefers_higher_q() {
    let actions = ["a", "b", "c"];
    let candidates = [(1.0, &actions[0]), (3.0, &actions[1]), (2.0, &actions[2])];

    let best = select_greedy(candidates, TieBreak::LowestAction);

    assert_eq!(best, Some((1, 3.0)));
}

#[test]
fn exact_ties_follow_action_order_not_enumeration_order() {
    let actions = ["right", "left"];
    let candidates = [(1.5, &actions[0]), (1.5, &actions[1])];

    assert_eq!(
        select_greedy(candidates, TieBreak::LowestAction),
        Some((1, 1.5))
    );
    assert_eq!(
        select_greedy(candidates, TieBreak::HighestAction),
        Some((0, 1.5))
    );
}

#[test]
fn nan_q_values_never_win() {
    let actions = [1, 2];

    let leading_nan = [(f64::NAN, &actions[0]), (0.5, &actions[1])];
    assert_eq!(
        select_greedy(leading_nan, TieBreak::LowestAction),
        Some((1, 0.5))
    );

    let trailing_nan = [(0.5, &actions[0]), (f64::NAN, &actions[1])];
    assert_eq!(
        select_greedy(trailing_nan, TieBreak::LowestAction),
        Some((0, 0.5))
    );
}

#[test]
fn empty_candidates_select_nothing() {
    let candidates: [(f64, &u8); 0] = [];
    assert_eq!(select_greedy(candidates, TieBreak::LowestAction), None);
}

#[test]
fn convergence_threshold_is_strict() {
    assert!(converged(0.5e-10, 1e-10));
    assert!(!converged(1e-10, 1e-10));
    assert!(!converged(f64::NAN, 1e-10));
}

#[test]
fn max_delta_is_poisoned_by_nan() {
    assert_eq!(max_abs_delta(&[1.0, 2.0], &[1.5, 1.0]), 1.0);
    assert!(max_abs_delta(&[f64::INFINITY, 0.0], &[f64::INFINITY, 0.0]).is_nan());
    assert!(max_abs_delta(&[0.0, f64::NAN, 0.0], &[3.0, 0.0, 0.0]).is_nan());
}
