//! Error taxonomy shared by the engine and candidate implementations.
//!
//! All errors are fatal to the current [`Engine::run`](crate::engine::Engine::run)
//! invocation: nothing is retried, and no partial result is salvaged.

use thiserror::Error;

/// Errors surfaced by the engine or by candidate representations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvolveError {
    /// The run cannot start or continue with the given setup: an empty
    /// initial population, a selector returning more survivors than the
    /// population size, or a mutation probability outside `[0, 1]`.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Crossover was attempted between candidates with incompatible
    /// representations (e.g. built against different domain configurations).
    /// Candidate implementations are responsible for this check.
    #[error("type mismatch: {0}")]
    TypeMismatch(String),

    /// A candidate's evaluate/mutate/crossover failed, typically due to
    /// malformed internal state. Propagated unchanged through the engine
    /// loop — the engine has no domain knowledge to recover meaningfully.
    #[error("representation error: {0}")]
    Representation(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EvolveError>;
