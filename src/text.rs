//! Reference string-evolution domain.
//!
//! Evolves a fixed-length character sequence toward a target string.
//! Fitness is the Hamming distance to the target (0 = perfect match),
//! mutation replaces one randomly chosen position with a randomly chosen
//! alphabet symbol, and crossover is a single-point splice.
//!
//! This module is a demonstration of the [`Candidate`] plug-in contract;
//! the engine has no knowledge of it and any other representation can
//! take its place.

use crate::engine::Candidate;
use crate::error::{EvolveError, Result};
use rand::rngs::StdRng;
use rand::Rng;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
struct DomainInner {
    target: Vec<char>,
    alphabet: Vec<char>,
}

/// The scoring configuration candidates are built against: an immutable
/// target sequence and the alphabet mutation draws from.
///
/// Owned configuration rather than a module-wide constant, so multiple
/// runs with different targets can coexist. Cloning is cheap; all clones
/// share the same underlying data, and candidates remember which domain
/// they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextDomain {
    inner: Arc<DomainInner>,
}

impl TextDomain {
    /// Creates a domain from a target string and an alphabet.
    ///
    /// # Errors
    ///
    /// [`EvolveError::InvalidConfiguration`] if either string is empty.
    pub fn new(target: &str, alphabet: &str) -> Result<Self> {
        if target.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "target must not be empty".into(),
            ));
        }
        if alphabet.is_empty() {
            return Err(EvolveError::InvalidConfiguration(
                "alphabet must not be empty".into(),
            ));
        }
        Ok(Self {
            inner: Arc::new(DomainInner {
                target: target.chars().collect(),
                alphabet: alphabet.chars().collect(),
            }),
        })
    }

    /// The target string.
    pub fn target(&self) -> String {
        self.inner.target.iter().collect()
    }

    /// Length of the target (and of every candidate in this domain).
    pub fn length(&self) -> usize {
        self.inner.target.len()
    }

    /// Builds a candidate from the given text.
    ///
    /// Useful for seeding a population deterministically.
    ///
    /// # Errors
    ///
    /// [`EvolveError::Representation`] if the text length differs from the
    /// target length.
    pub fn candidate(&self, text: &str) -> Result<TextCandidate> {
        let chars: Vec<char> = text.chars().collect();
        if chars.len() != self.length() {
            return Err(EvolveError::Representation(format!(
                "candidate length {} does not match target length {}",
                chars.len(),
                self.length()
            )));
        }
        Ok(TextCandidate::from_chars(self.clone(), chars))
    }

    /// Builds a candidate with every position drawn uniformly from the
    /// alphabet.
    pub fn random_candidate<R: Rng>(&self, rng: &mut R) -> TextCandidate {
        let chars: Vec<char> = (0..self.length()).map(|_| self.random_symbol(rng)).collect();
        TextCandidate::from_chars(self.clone(), chars)
    }

    /// Returns an engine-compatible initializer producing `size` random
    /// candidates.
    pub fn initializer(&self, size: usize) -> impl FnMut(&mut StdRng) -> Vec<TextCandidate> {
        let domain = self.clone();
        move |rng| (0..size).map(|_| domain.random_candidate(rng)).collect()
    }

    fn random_symbol<R: Rng>(&self, rng: &mut R) -> char {
        self.inner.alphabet[rng.random_range(0..self.inner.alphabet.len())]
    }
}

/// One candidate string, scored against its domain's target.
///
/// The stored fitness is the Hamming distance to the target, recomputed
/// at construction and after every mutation.
#[derive(Debug, Clone)]
pub struct TextCandidate {
    domain: TextDomain,
    chars: Vec<char>,
    fitness: usize,
}

impl TextCandidate {
    fn from_chars(domain: TextDomain, chars: Vec<char>) -> Self {
        let mut candidate = Self {
            domain,
            chars,
            fitness: 0,
        };
        candidate.fitness = candidate.evaluate();
        candidate
    }

    /// The current text.
    pub fn text(&self) -> String {
        self.chars.iter().collect()
    }

    /// Single-point splice at a fixed cut index: the prefix `[0, cut)`
    /// comes from `self`, the suffix from `other`.
    ///
    /// This is the deterministic core of [`Candidate::crossover`], which
    /// picks the cut uniformly at random.
    ///
    /// # Errors
    ///
    /// - [`EvolveError::TypeMismatch`] if the parents belong to different
    ///   domains.
    /// - [`EvolveError::Representation`] if `cut` exceeds the text length.
    pub fn crossover_at(&self, other: &Self, cut: usize) -> Result<Self> {
        self.ensure_compatible(other)?;
        if cut > self.chars.len() {
            return Err(EvolveError::Representation(format!(
                "cut index {} out of range for length {}",
                cut,
                self.chars.len()
            )));
        }
        let mut chars = Vec::with_capacity(self.chars.len());
        chars.extend_from_slice(&self.chars[..cut]);
        chars.extend_from_slice(&other.chars[cut..]);
        Ok(Self::from_chars(self.domain.clone(), chars))
    }

    fn ensure_compatible(&self, other: &Self) -> Result<()> {
        if self.domain != other.domain {
            return Err(EvolveError::TypeMismatch(format!(
                "cannot cross candidates from different text domains \
                 (target {:?} vs {:?})",
                self.domain.target(),
                other.domain.target()
            )));
        }
        Ok(())
    }
}

impl fmt::Display for TextCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}

impl Candidate for TextCandidate {
    type Fitness = usize;

    fn fitness(&self) -> usize {
        self.fitness
    }

    /// Hamming distance to the target.
    fn evaluate(&self) -> usize {
        self.chars
            .iter()
            .zip(self.domain.inner.target.iter())
            .filter(|(a, b)| a != b)
            .count()
    }

    fn mutate<R: Rng>(&mut self, rng: &mut R) -> Result<()> {
        let index = rng.random_range(0..self.chars.len());
        self.chars[index] = self.domain.random_symbol(rng);
        self.fitness = self.evaluate();
        Ok(())
    }

    fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Result<Self> {
        let cut = rng.random_range(0..self.chars.len());
        self.crossover_at(other, cut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{selection, stop, Engine, EngineConfig};
    use rand::SeedableRng;

    fn binary_domain() -> TextDomain {
        TextDomain::new("AB", "AB").unwrap()
    }

    #[test]
    fn test_fitness_is_hamming_distance() {
        let domain = binary_domain();
        assert_eq!(domain.candidate("AB").unwrap().fitness(), 0);
        assert_eq!(domain.candidate("AA").unwrap().fitness(), 1);
        assert_eq!(domain.candidate("BB").unwrap().fitness(), 2);
        assert_eq!(domain.candidate("BA").unwrap().fitness(), 2);
    }

    #[test]
    fn test_fitness_set_at_construction() {
        let domain = binary_domain();
        let candidate = domain.candidate("BA").unwrap();
        assert_eq!(candidate.fitness(), candidate.evaluate());
    }

    #[test]
    fn test_crossover_splice_can_hit_target() {
        // "AA" x "BB" cut at 1 splices into the target "AB".
        let domain = binary_domain();
        let a = domain.candidate("AA").unwrap();
        let b = domain.candidate("BB").unwrap();

        let child = a.crossover_at(&b, 1).unwrap();
        assert_eq!(child.text(), "AB");
        assert_eq!(child.fitness(), 0);
    }

    #[test]
    fn test_crossover_purity() {
        let domain = binary_domain();
        let a = domain.candidate("AA").unwrap();
        let b = domain.candidate("BB").unwrap();

        let _ = a.crossover_at(&b, 1).unwrap();
        assert_eq!(a.text(), "AA");
        assert_eq!(a.fitness(), 1);
        assert_eq!(b.text(), "BB");
        assert_eq!(b.fitness(), 2);
    }

    #[test]
    fn test_crossover_cut_zero_copies_other() {
        let domain = binary_domain();
        let a = domain.candidate("AA").unwrap();
        let b = domain.candidate("BB").unwrap();
        assert_eq!(a.crossover_at(&b, 0).unwrap().text(), "BB");
    }

    #[test]
    fn test_crossover_with_self_is_clone_like() {
        let domain = binary_domain();
        let a = domain.candidate("BA").unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let child = a.crossover(&a, &mut rng).unwrap();
        assert_eq!(child.text(), "BA");
        assert_eq!(child.fitness(), 2);
    }

    #[test]
    fn test_crossover_cut_out_of_range() {
        let domain = binary_domain();
        let a = domain.candidate("AA").unwrap();
        let b = domain.candidate("BB").unwrap();
        let err = a.crossover_at(&b, 3).unwrap_err();
        assert!(matches!(err, EvolveError::Representation(_)));
    }

    #[test]
    fn test_cross_domain_crossover_is_type_mismatch() {
        let first = TextDomain::new("AB", "AB").unwrap();
        let second = TextDomain::new("BA", "AB").unwrap();
        let a = first.candidate("AA").unwrap();
        let b = second.candidate("AA").unwrap();

        let err = a.crossover_at(&b, 1).unwrap_err();
        assert!(matches!(err, EvolveError::TypeMismatch(_)));
    }

    #[test]
    fn test_equal_domains_are_compatible_across_clones() {
        let domain = binary_domain();
        let other = TextDomain::new("AB", "AB").unwrap();
        let a = domain.candidate("AA").unwrap();
        let b = other.candidate("BB").unwrap();
        // Structurally identical domains interoperate.
        assert!(a.crossover_at(&b, 1).is_ok());
    }

    #[test]
    fn test_mutation_recomputes_fitness() {
        let domain = binary_domain();
        let mut candidate = domain.candidate("BB").unwrap();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            candidate.mutate(&mut rng).unwrap();
            assert_eq!(candidate.fitness(), candidate.evaluate());
            assert_eq!(candidate.text().len(), 2);
        }
    }

    #[test]
    fn test_wrong_length_candidate_rejected() {
        let domain = binary_domain();
        let err = domain.candidate("AAA").unwrap_err();
        assert!(matches!(err, EvolveError::Representation(_)));
    }

    #[test]
    fn test_empty_target_or_alphabet_rejected() {
        assert!(matches!(
            TextDomain::new("", "AB").unwrap_err(),
            EvolveError::InvalidConfiguration(_)
        ));
        assert!(matches!(
            TextDomain::new("AB", "").unwrap_err(),
            EvolveError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn test_random_candidate_draws_from_alphabet() {
        let domain = TextDomain::new("xyz", "ab").unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let candidate = domain.random_candidate(&mut rng);
        assert_eq!(candidate.text().len(), 3);
        assert!(candidate.text().chars().all(|c| c == 'a' || c == 'b'));
    }

    // ---- Full runs over the binary domain ----

    #[test]
    fn test_evolves_to_target() {
        // Small target over a binary alphabet with generous mutation:
        // the perfect match is reached long before the ceiling.
        let domain = binary_domain();
        let engine = Engine::new(
            EngineConfig::default()
                .with_seed(42)
                .with_mutation_probability(0.5),
            domain.initializer(20),
            selection::elite,
            stop::within_generations(5_000, stop::fitness_at_most(0)),
        );
        let result = engine.run().unwrap();

        assert_eq!(result.best_fitness, 0);
        assert_eq!(result.best.to_string(), "AB");
        assert_eq!(result.population.len(), 20);
    }

    #[test]
    fn test_final_population_fitness_is_consistent() {
        let domain = binary_domain();
        let engine = Engine::new(
            EngineConfig::default()
                .with_seed(11)
                .with_mutation_probability(0.5),
            domain.initializer(15),
            selection::elite,
            stop::max_generations(30),
        );
        let result = engine.run().unwrap();

        for candidate in &result.population {
            assert_eq!(candidate.fitness(), candidate.evaluate());
        }
    }

    #[test]
    fn test_seeded_runs_render_identically() {
        let run = |seed| {
            let domain = binary_domain();
            Engine::new(
                EngineConfig::default()
                    .with_seed(seed)
                    .with_mutation_probability(0.5),
                domain.initializer(20),
                selection::elite,
                stop::within_generations(5_000, stop::fitness_at_most(0)),
            )
            .run()
            .unwrap()
        };
        let first = run(7);
        let second = run(7);
        assert_eq!(first.generations, second.generations);
        assert_eq!(first.best.to_string(), second.best.to_string());
    }

    #[test]
    fn test_single_character_domain() {
        // N = 1 candidate over a length-1 target still terminates.
        let domain = TextDomain::new("A", "AB").unwrap();
        let engine = Engine::new(
            EngineConfig::default()
                .with_seed(5)
                .with_mutation_probability(1.0),
            domain.initializer(1),
            selection::elite,
            stop::within_generations(10_000, stop::fitness_at_most(0)),
        );
        let result = engine.run().unwrap();
        assert_eq!(result.best_fitness, 0);
        assert_eq!(result.best.to_string(), "A");
    }
}
