use tracing::{trace, warn};

use crate::solver::{
    config::SolverConfig,
    error::SolveError,
    metrics::{Phase, SolveEvent, SolveMetrics},
};

/// Convergence predicate shared by every fixed-point loop.
pub fn converged(delta: f64, tolerance: f64) -> bool {
    delta < tolerance
}

/// Largest absolute per-state change between two sweeps.
/// A NaN change poisons the result so it can never count as converged.
pub(crate) fn max_abs_delta(old: &[f64], new: &[f64]) -> f64 {
    old.iter()
        .zip(new)
        .map(|(o, n)| (o - n).abs())
        .fold(0.0, |acc, d| if d > acc || d.is_nan() { d } else { acc })
}

/// Run synchronous sweeps `V'[s] = backup(s, V)` until `converged`.
///
/// Every sweep reads only the previous `values`. On convergence `values` is
/// left at the last sweep that was not yet converged, and the number of
/// sweeps is returned.
pub(crate) fn sweep_until_converged<F, H>(
    values: &mut Vec<f64>,
    config: &SolverConfig,
    phase: Phase,
    metrics: &mut SolveMetrics,
    mut backup: F,
    on_event: &mut H,
) -> Result<usize, SolveError>
where
    F: FnMut(usize, &[f64]) -> f64,
    H: FnMut(&SolveEvent<'_>),
{
    let mut sweeps = 0;

    loop {
        let current = values.as_slice();
        let next: Vec<f64> = (0..current.len())
            .map(|state| backup(state, current))
            .collect();
        let delta = max_abs_delta(current, &next);

        sweeps += 1;
        metrics.record_sweep(delta);
        trace!(%phase, sweep = sweeps, delta, "sweep");
        on_event(&SolveEvent::Sweep {
            phase,
            sweep: sweeps,
            delta,
        });

        if converged(delta, config.tolerance) {
            return Ok(sweeps);
        }
        *values = next;

        if config.max_sweeps.is_some_and(|cap| sweeps >= cap) {
            warn!(%phase, sweeps, delta, "sweep limit reached before convergence");
            return Err(SolveError::NotConverged {
                phase,
                sweeps,
                delta,
            });
        }
    }
}
