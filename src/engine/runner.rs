//! The generational loop.
//!
//! [`Engine`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement →
//! report, repeated until the stop predicate fires.

use super::config::EngineConfig;
use super::observer::{NoopObserver, Observer};
use super::types::{Candidate, Fitness};
use crate::error::{EvolveError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Result of a completed evolution run.
#[derive(Debug, Clone)]
pub struct EngineResult<C: Candidate> {
    /// The best candidate of the final population.
    pub best: C,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: C::Fitness,

    /// Number of completed generations when the stop predicate fired.
    pub generations: usize,

    /// The final population, size identical to the initial one.
    pub population: Vec<C>,

    /// Best fitness at each observation point: the initial population
    /// first, then one entry per generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// The engine owns the loop; all domain-specific behavior is injected:
///
/// - `initializer` produces the starting population, whose length fixes
///   the population size *N* for the entire run.
/// - `selector` chooses which candidates survive unmodified into the next
///   generation's seed set (read-only over the current population).
/// - `stop` is evaluated once per generation on the best candidate of the
///   population just built; when it returns `true` the run terminates.
///
/// Each generation, offspring are produced by crossing two parents drawn
/// independently and uniformly **with replacement** from the current
/// population (drawing the same candidate twice is legal), and each fresh
/// child is mutated with probability
/// [`mutation_probability`](EngineConfig::mutation_probability).
///
/// # Termination
///
/// There is no engine-imposed generation ceiling. The engine terminates
/// only when the stop predicate first returns `true`; a predicate that
/// never fires runs forever. See [`stop::within_generations`](super::stop::within_generations)
/// for a ceiling wrapper.
///
/// # Usage
///
/// ```ignore
/// let engine = Engine::new(
///     EngineConfig::default().with_seed(42),
///     domain.initializer(100),
///     selection::elite,
///     stop::fitness_at_most(0),
/// );
/// let result = engine.run()?;
/// println!("best: {} after {} generations", result.best, result.generations);
/// ```
pub struct Engine<Init, Sel, Stop> {
    config: EngineConfig,
    initializer: Init,
    selector: Sel,
    stop: Stop,
}

impl<Init, Sel, Stop> Engine<Init, Sel, Stop> {
    /// Creates an engine from a configuration and the three injected
    /// behaviors.
    pub fn new(config: EngineConfig, initializer: Init, selector: Sel, stop: Stop) -> Self {
        Self {
            config,
            initializer,
            selector,
            stop,
        }
    }

    /// Runs the evolution without progress reporting.
    ///
    /// Consumes the engine: a terminated run cannot be resumed.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::InvalidConfiguration`] for an out-of-range mutation
    ///   probability, an empty initial population, or a selector returning
    ///   more survivors than the population size.
    /// - Any error raised by a candidate's crossover or mutate propagates
    ///   unchanged.
    pub fn run<C>(self) -> Result<EngineResult<C>>
    where
        C: Candidate,
        Init: FnMut(&mut StdRng) -> Vec<C>,
        Sel: FnMut(&[C]) -> Vec<C>,
        Stop: FnMut(&C, C::Fitness, usize) -> bool,
    {
        self.run_with_observer(&mut NoopObserver)
    }

    /// Runs the evolution, delivering the per-generation progress record
    /// to `observer`.
    pub fn run_with_observer<C>(
        mut self,
        observer: &mut impl Observer<C>,
    ) -> Result<EngineResult<C>>
    where
        C: Candidate,
        Init: FnMut(&mut StdRng) -> Vec<C>,
        Sel: FnMut(&[C]) -> Vec<C>,
        Stop: FnMut(&C, C::Fitness, usize) -> bool,
    {
        self.config.validate()?;

        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let mut population = (self.initializer)(&mut rng);
        if population.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "initializer produced an empty population".into(),
            ));
        }
        let size = population.len();

        // Sorted ascending so the seed population's best is deterministic.
        sort_by_fitness(&mut population);

        let mut fitness_history = vec![population[0].fitness().to_f64()];
        let mut generation = 0usize;

        loop {
            let survivors = (self.selector)(&population);
            if survivors.len() > size {
                return Err(EvolveError::InvalidConfiguration(format!(
                    "selector returned {} survivors for a population of {}",
                    survivors.len(),
                    size
                )));
            }

            let mut next = survivors;
            while next.len() < size {
                // Parents are drawn from the current population, never
                // from the one under construction.
                let a = rng.random_range(0..size);
                let b = rng.random_range(0..size);
                let mut child = population[a].crossover(&population[b], &mut rng)?;
                if rng.random_range(0.0..1.0) <= self.config.mutation_probability {
                    child.mutate(&mut rng)?;
                }
                next.push(child);
            }
            population = next;

            let best_idx = best_index(&population);
            observer.on_generation(generation, &population[best_idx]);
            fitness_history.push(population[best_idx].fitness().to_f64());

            generation += 1;

            let best_fitness = population[best_idx].fitness();
            if (self.stop)(&population[best_idx], best_fitness, generation) {
                let best = population[best_idx].clone();
                return Ok(EngineResult {
                    best,
                    best_fitness,
                    generations: generation,
                    population,
                    fitness_history,
                });
            }
        }
    }
}

/// Sorts ascending by fitness (best first under minimization).
fn sort_by_fitness<C: Candidate>(population: &mut [C]) {
    population.sort_by(|a, b| {
        a.fitness()
            .partial_cmp(&b.fitness())
            .unwrap_or(Ordering::Equal)
    });
}

/// Index of the candidate with the lowest fitness.
fn best_index<C: Candidate>(population: &[C]) -> usize {
    let mut best = 0;
    for i in 1..population.len() {
        if population[i]
            .fitness()
            .partial_cmp(&population[best].fitness())
            == Some(Ordering::Less)
        {
            best = i;
        }
    }
    best
}

// ============================================================================
// Tests
// ============================================================================
