use tracing::debug;

use crate::solver::{
    config::SolverConfig,
    convergence::sweep_until_converged,
    dense::DenseMdp,
    error::SolveError,
    metrics::{Phase, SolveEvent, SolveMetrics},
    model::Mdp,
    solution::Solution,
};

/// Solve `mdp` by value iteration without iteration caps.
///
/// Converges for any discount below 1; a non-convergent model never returns.
/// Use `value_iteration_with` to bound the work.
pub fn value_iteration<M: Mdp>(mdp: &M) -> Result<Solution<M::State, M::Action>, SolveError> {
    value_iteration_with(mdp, &SolverConfig::unbounded(), |_| {})
}

/// Solve `mdp` by value iteration, invoking `on_event` after every sweep.
///
/// Values start at zero and are replaced by `max_a Q(s, a, V)` each sweep
/// until the largest change drops below `config.tolerance`. The policy is
/// then read off greedily from the converged values.
pub fn value_iteration_with<M, H>(
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
    let mut values = vec![0.0; model.len()];

    sweep_until_converged(
        &mut values,
        config,
        Phase::ValueIteration,
        &mut metrics,
        |state, current| model.greedy(state, current, tie_break).1,
        &mut on_event,
    )?;

    let policy: Vec<usize> = (0..model.len())
        .map(|state| model.greedy(state, &values, tie_break).0)
        .collect();

    debug!(
        states = model.len(),
        sweeps = metrics.sweeps,
        delta = metrics.final_delta,
        "value iteration converged"
    );

    Ok(model.into_solution(values, &policy, metrics))
}
