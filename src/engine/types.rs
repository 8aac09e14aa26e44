//! Core trait definitions for the engine.
//!
//! [`Candidate`] is the capability set any solution representation must
//! implement; the engine holds only this abstraction and never a concrete
//! type, so alternative representations can be substituted without engine
//! changes.

use crate::error::Result;
use rand::Rng;
use std::fmt;

/// Marker trait for fitness values.
///
/// Fitness must support comparison and be cheaply copyable.
/// Lower fitness is considered better (minimization).
///
/// Built-in implementations exist for `f64`, `f32`, and the unsigned
/// integer types used by count-style scores such as Hamming distance.
/// For maximization problems, negate the fitness or use a wrapper type.
pub trait Fitness: PartialOrd + Copy + fmt::Debug + 'static {
    /// Converts the fitness to `f64` for reporting and history tracking.
    fn to_f64(self) -> f64;
}

impl Fitness for f64 {
    fn to_f64(self) -> f64 {
        self
    }
}

impl Fitness for f32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u32 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for u64 {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

impl Fitness for usize {
    fn to_f64(self) -> f64 {
        self as f64
    }
}

/// A candidate solution in the population.
///
/// Candidates carry their own fitness value and their own operators.
/// The contract every implementation must satisfy:
///
/// - Construction computes and stores fitness immediately; it is never
///   left unset.
/// - [`fitness`](Candidate::fitness) always equals
///   [`evaluate`](Candidate::evaluate) recomputed on the current state —
///   fitness is overwritten after every mutation, never stale.
/// - [`crossover`](Candidate::crossover) is pure over both parents: it
///   produces a new, independently owned candidate and modifies neither
///   input.
///
/// The `Display` implementation is the human-readable rendering used for
/// progress reporting; it has no effect on fitness or selection.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<u8>,
///     fitness: f64,
/// }
///
/// impl Candidate for MySolution {
///     type Fitness = f64;
///     fn fitness(&self) -> f64 { self.fitness }
///     fn evaluate(&self) -> f64 { score(&self.genes) }
///     fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
///         perturb(&mut self.genes, rng);
///         self.fitness = self.evaluate();
///         Ok(())
///     }
///     fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self> {
///         Ok(Self::new(splice(&self.genes, &other.genes, rng)))
///     }
/// }
/// ```
pub trait Candidate: Clone + fmt::Display {
    /// The fitness type. Must implement [`Fitness`].
    type Fitness: Fitness;

    /// Returns the stored fitness of this candidate.
    fn fitness(&self) -> Self::Fitness;

    /// Recomputes the fitness from the current state.
    ///
    /// Pure and deterministic for a fixed state; no side effects beyond
    /// computing the score.
    fn evaluate(&self) -> Self::Fitness;

    /// Performs an in-place random perturbation of the state, then
    /// recomputes and overwrites the stored fitness.
    fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()>;

    /// Produces a new candidate combining traits of both parents, with
    /// its own freshly computed fitness. Must not mutate either parent.
    ///
    /// Crossing `self` with itself is legal and degenerates to a
    /// clone-like crossover. Candidates built against incompatible domain
    /// configurations fail with
    /// [`EvolveError::TypeMismatch`](crate::error::EvolveError::TypeMismatch).
    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self>;
}
