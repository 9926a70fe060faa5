use crate::solver::{config::TieBreak, model::Outcome};

/// Expected discounted return of one action:
/// `sum(p * (reward + discount * V(next)))` over its outcomes.
pub fn q_value<S>(outcomes: &[Outcome<S>], discount: f64, mut value_of: impl FnMut(&S) -> f64) -> f64 {
    outcomes
        .iter()
        .map(|outcome| outcome.probability * (outcome.reward + discount * value_of(&outcome.next)))
        .sum()
}

/// Pick the position and Q-value of the best `(q, action)` candidate.
///
/// Higher Q wins; exact ties go to the action `tie_break` prefers, and
/// equal keys keep the earlier candidate. NaN never displaces a number.
pub(crate) fn select_greedy<'a, A, I>(candidates: I, tie_break: TieBreak) -> Option<(usize, f64)>
where
    A: Ord + 'a,
    I: IntoIterator<Item = (f64, &'a A)>,
{
    let mut best: Option<(usize, f64, &A)> = None;

    for (idx, (q, action)) in candidates.into_iter().enumerate() {
        best = match best {
            Some((best_idx, best_q, best_action))
                if (q.is_nan() && !best_q.is_nan())
                    || best_q > q
                    || (best_q == q && !tie_break.prefers(action, best_action)) =>
            {
                Some((best_idx, best_q, best_action))
            }
            _ => Some((idx, q, action)),
        };
    }

    best.map(|(idx, q, _)| (idx, q))
}
