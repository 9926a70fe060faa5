use tracing::{debug, warn};

use crate::solver::{
    config::SolverConfig,
    convergence::sweep_until_converged,
    dense::DenseMdp,
    error::SolveError,
    metrics::{Phase, SolveEvent, SolveMetrics},
    model::Mdp,
    solution::Solution,
};

/// Solve `mdp` by policy iteration without iteration caps.
///
/// Converges for any discount below 1; a non-convergent model never returns.
/// Use `policy_iteration_with` to bound the work.
pub fn policy_iteration<M: Mdp>(mdp: &M) -> Result<Solution<M::State, M::Action>, SolveError> {
    policy_iteration_with(mdp, &SolverConfig::unbounded(), |_| {})
}

/// Solve `mdp` by policy iteration, reporting sweeps and rounds to `on_event`.
///
/// Starts from `Mdp::default_action` (or the first action) in every state
/// and alternates two steps until no state changes its action:
/// - evaluation: sweep `V[s] = Q(s, policy[s], V)` to convergence, warm
///   started from the previous round's values;
/// - improvement: `policy[s] = argmax_a Q(s, a, V)`.
pub fn policy_iteration_with<M, H>(
    mdp: &M,
    config: &SolverConfig,
    mut on_event: H,
) -> Result<Solution<M::State, M::Action>, SolveError>
where
    M: Mdp,
    H: FnMut(&SolveEvent<'_>),
{
    config
        .validate()
        .map_err(|err| SolveError::InvalidConfig {
            reason: err.to_string(),
        })?;
    let model = DenseMdp::compile(mdp)?;
    let tie_break = config.tie_break;

    let mut metrics = SolveMetrics::default();
    let mut policy = model.initial_policy();
    let mut values = vec![0.0; model.len()];
    let mut round = 0;

    loop {
        if config.max_policy_rounds.is_some_and(|cap| round >= cap) {
            warn!(rounds = round, "round limit reached before the policy stabilised");
            return Err(SolveError::PolicyNotStable { rounds: round });
        }
        round += 1;

        let sweeps = sweep_until_converged(
            &mut values,
            config,
            Phase::PolicyEvaluation,
            &mut metrics,
            |state, current| model.q(state, policy[state], current),
            &mut on_event,
        )?;
        on_event(&SolveEvent::Evaluated {
            round,
            sweeps,
            values: &values,
        });

        let improved: Vec<usize> = (0..model.len())
            .map(|state| model.greedy(state, &values, tie_break).0)
            .collect();
        let changed = improved
            .iter()
            .zip(&policy)
            .filter(|(new, old)| new != old)
            .count();

        metrics.policy_rounds = round;
        debug!(round, sweeps, changed, "policy improvement");
        on_event(&SolveEvent::Improved { round, changed });

        policy = improved;
        if changed == 0 {
            break;
        }
    }

    debug!(
        states = model.len(),
        rounds = metrics.policy_rounds,
        sweeps = metrics.sweeps,
        "policy iteration converged"
    );

    Ok(model.into_solution(values, &policy, metrics))
}
