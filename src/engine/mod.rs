//! Evolutionary engine.
//!
//! A generic, domain-agnostic generational loop built on trait-based
//! abstractions. Users define their problem by implementing [`Candidate`],
//! which specifies how a solution evaluates, mutates, and recombines; the
//! engine consumes an initializer, a selection strategy, and a stop
//! predicate, all supplied by the caller, and drives repeated generations
//! until the stop predicate fires.
//!
//! # Core Traits
//!
//! - [`Candidate`]: A solution representation carrying its own fitness
//! - [`Fitness`]: Comparable fitness values (lower is better)
//! - [`Observer`]: Per-generation progress sink
//!
//! # Key Types
//!
//! - [`EngineConfig`]: Engine parameters (mutation probability, seed)
//! - [`Engine`]: Executes the evolutionary loop
//! - [`EngineResult`]: Final population, best candidate, and statistics
//!
//! # Submodules
//!
//! - [`selection`]: Read-only elite selection policies
//! - [`stop`]: Stop-predicate combinators (generation ceilings, fitness
//!   targets)
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod observer;
mod runner;
pub mod selection;
pub mod stop;
mod types;

pub use config::EngineConfig;
pub use observer::{NoopObserver, Observer, StdoutReporter};
pub use runner::{Engine, EngineResult};
pub use types::{Candidate, Fitness};
