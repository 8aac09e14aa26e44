//! Per-generation progress reporting.
//!
//! Once per generation the engine reports the generation index and the
//! best candidate of the new population. The reference behavior prints
//! this as text ([`StdoutReporter`]); any other sink — a logger, a
//! channel, an in-memory recorder — can be substituted without changing
//! engine semantics.

use super::types::Candidate;

/// Receives the per-generation progress record.
pub trait Observer<C: Candidate> {
    /// Called once per generation with the index of the generation just
    /// built and the best candidate of its population.
    ///
    /// The best fitness is available as `best.fitness()`; the rendering
    /// as `best.to_string()`.
    fn on_generation(&mut self, generation: usize, best: &C);
}

/// Discards all progress records. Used by [`Engine::run`](super::Engine::run).
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopObserver;

impl<C: Candidate> Observer<C> for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _best: &C) {}
}

/// Prints one line per generation to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutReporter;

impl<C: Candidate> Observer<C> for StdoutReporter {
    fn on_generation(&mut self, generation: usize, best: &C) {
        println!(
            "generation {generation}: best {best} fitness {:?}",
            best.fitness()
        );
    }
}
