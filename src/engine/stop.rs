//! Stop-predicate combinators.
//!
//! The engine itself imposes no generation ceiling: it terminates only
//! when the caller's predicate returns `true`, so a predicate that never
//! fires runs forever. Callers needing a hard bound wrap their predicate
//! with [`within_generations`].
//!
//! Predicates receive the best candidate of the generation just built,
//! its fitness, and the number of completed generations (1 on the first
//! check).

use super::types::Candidate;

/// Wraps `inner` with a generation ceiling: fires when `limit`
/// generations have completed or when `inner` fires, whichever is first.
pub fn within_generations<C, F>(
    limit: usize,
    mut inner: F,
) -> impl FnMut(&C, C::Fitness, usize) -> bool
where
    C: Candidate,
    F: FnMut(&C, C::Fitness, usize) -> bool,
{
    move |best, fitness, generation| generation >= limit || inner(best, fitness, generation)
}

/// Fires after `limit` completed generations, unconditionally.
pub fn max_generations<C: Candidate>(limit: usize) -> impl FnMut(&C, C::Fitness, usize) -> bool {
    move |_, _, generation| generation >= limit
}

/// Fires when the best fitness reaches `target` or better.
///
/// Under the minimization convention, `fitness_at_most(0)` is the
/// perfect-match predicate.
pub fn fitness_at_most<C: Candidate>(
    target: C::Fitness,
) -> impl FnMut(&C, C::Fitness, usize) -> bool {
    move |_, fitness, _| fitness <= target
}
