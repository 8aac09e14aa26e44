//! Read-only selection policies.
//!
//! Selection chooses which candidates survive unmodified into the next
//! generation's seed set. All policies here assume **minimization**
//! (lower fitness = better), operate read-only over the input population,
//! and return cloned survivors.
//!
//! Any `FnMut(&[C]) -> Vec<C>` works as an engine selector; these are the
//! bundled policies.

use super::types::Candidate;
use std::cmp::Ordering;

/// Elite selection: keep the best tenth of the population.
///
/// Sorts candidates by fitness ascending and keeps the best `⌊N/10⌋`.
/// For `N < 10` this yields zero survivors, which is legal and simply
/// forces the next generation to be built entirely from crossover.
///
/// The one-tenth formula is the reference policy, not a hard requirement;
/// use [`best_fraction`] or [`best_n`] to tune it.
pub fn elite<C: Candidate>(population: &[C]) -> Vec<C> {
    best_fraction(population, 0.1)
}

/// Keeps the best `⌊N * ratio⌋` candidates.
pub fn best_fraction<C: Candidate>(population: &[C], ratio: f64) -> Vec<C> {
    let count = (population.len() as f64 * ratio) as usize;
    best_n(population, count)
}

/// Keeps the `count` candidates with the lowest fitness, best first.
///
/// Requesting more survivors than the population holds returns the whole
/// population sorted.
pub fn best_n<C: Candidate>(population: &[C], count: usize) -> Vec<C> {
    let mut ranked: Vec<&C> = population.iter().collect();
    ranked.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(Ordering::Equal)
    });
    ranked.into_iter().take(count).cloned().collect()
}
