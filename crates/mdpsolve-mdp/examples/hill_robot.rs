use std::path::PathBuf;

use mdpsolve_core::{SolverConfig, policy_iteration, policy_iteration_with, value_iteration};
use mdpsolve_mdp::{MdpSpec, OutcomeSpec, load_yaml, report::render_table};

fn outcomes_mut<'a>(spec: &'a mut MdpSpec, state: &str, action: &str) -> &'a mut Vec<OutcomeSpec> {
    let state = spec
        .states
        .iter_mut()
        .find(|s| s.id == state)
        .expect("state exists in hill model");
    &mut state
        .actions
        .iter_mut()
        .find(|a| a.id == action)
        .expect("action exists in hill model")
        .outcomes
}

fn main() {
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("crates/mdpsolve-mdp/examples/hill.mdp.yaml"));

    let spec = load_yaml(&path).expect("failed to load MDP YAML");
    let mdp = spec.compile().expect("failed to compile MDP");

    println!("Value iteration, discount {}", spec.discount);
    let solution = value_iteration(&mdp).expect("value iteration failed");
    print!("{}", render_table(&solution));

    println!("\nPolicy iteration, discount {}", spec.discount);
    let solution = policy_iteration(&mdp).expect("policy iteration failed");
    print!("{}", render_table(&solution));

    println!("\nPolicy iteration, discount 0.99");
    let patient = mdp.with_discount(0.99).expect("valid discount");
    let solution = policy_iteration(&patient).expect("policy iteration failed");
    print!("{}", render_table(&solution));

    println!("\nPolicy iteration, discount 1.0 with a sweep cap");
    let undiscounted = mdp.with_discount(1.0).expect("valid discount");
    let capped = SolverConfig {
        max_sweeps: Some(10_000),
        ..SolverConfig::default()
    };
    match policy_iteration_with(&undiscounted, &capped, |_| {}) {
        Ok(solution) => print!("{}", render_table(&solution)),
        Err(err) => println!("{err}"),
    }

    println!("\nPolicy iteration, driving while rolling climbs with probability 0.8");
    let mut steeper = spec.clone();
    for (outcome, prob) in outcomes_mut(&mut steeper, "rolling", "drive")
        .iter_mut()
        .zip([0.1, 0.1, 0.8])
    {
        outcome.prob = prob;
    }
    let solution = policy_iteration(&steeper.compile().expect("valid variant"))
        .expect("policy iteration failed");
    print!("{}", render_table(&solution));

    println!("\nPolicy iteration, idling at the top pays 3 for rolling and 1 for staying");
    let mut rewarded = spec.clone();
    for (outcome, reward) in outcomes_mut(&mut rewarded, "top", "not drive")
        .iter_mut()
        .zip([3.0, 1.0])
    {
        outcome.reward = reward;
    }
    let solution = policy_iteration(&rewarded.compile().expect("valid variant"))
        .expect("policy iteration failed");
    print!("{}", render_table(&solution));
}
