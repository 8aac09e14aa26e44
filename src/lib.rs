//! Generic evolutionary-optimization engine.
//!
//! A fixed-size population of candidate solutions is evolved by selection,
//! crossover, and mutation until a caller-supplied stop predicate fires.
//! The engine is fully domain-agnostic: what a candidate looks like, how it
//! mutates and recombines, how fitness is scored, and when to stop are all
//! injected by the caller.
//!
//! - **[`engine`]**: The evolutionary loop ([`engine::Engine`]) plus the
//!   [`engine::Candidate`] capability trait, elite selection policies,
//!   stop-predicate combinators, and a pluggable progress observer.
//! - **[`text`]**: Reference string-evolution domain — evolves a character
//!   sequence toward a target string by Hamming distance. A demonstration
//!   of the plug-in contract, swappable for any other representation.
//! - **[`error`]**: Error taxonomy shared by the engine and candidate
//!   implementations.
//!
//! # Conventions
//!
//! Fitness is minimized: lower values are better, and 0 typically means a
//! perfect solution. Selection policies and the bundled stop combinators
//! all assume this convention.
//!
//! # Example
//!
//! ```
//! use evoloop::engine::{selection, stop, Engine, EngineConfig};
//! use evoloop::text::TextDomain;
//!
//! let domain = TextDomain::new("hi", "abcdefghijklmnopqrstuvwxyz")?;
//! let engine = Engine::new(
//!     EngineConfig::default().with_seed(7).with_mutation_probability(0.4),
//!     domain.initializer(50),
//!     selection::elite,
//!     stop::within_generations(50_000, stop::fitness_at_most(0)),
//! );
//! let result = engine.run()?;
//! assert_eq!(result.best_fitness, 0);
//! # Ok::<(), evoloop::error::EvolveError>(())
//! ```

pub mod engine;
pub mod error;
pub mod text;
