//! Error types for the GA engine.
//!
//! [`GaError`] is returned by every fallible [`GaSolver`](super::GaSolver)
//! operation. [`ProblemError`] is what problem adapters return; it is
//! carried through the engine unchanged as [`GaError::ProblemDefinition`].

use thiserror::Error;

/// Failure raised by a [`GaProblem`](super::GaProblem) operation.
///
/// The engine never repairs or retries; the error aborts the operation in
/// progress and reaches the caller as-is.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProblemError {
    /// A chromosome is outside the problem's valid space.
    #[error("invalid chromosome: {0}")]
    InvalidChromosome(String),

    /// The problem context (target, coordinates, alphabet) is malformed.
    #[error("invalid problem context: {0}")]
    InvalidContext(String),
}

/// Errors surfaced by the GA engine.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Rates out of range, population too small, or too few survivors.
    ///
    /// Raised at construction or by `reset_population`, never mid-generation.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A generation or query was requested before `reset_population` succeeded.
    #[error("population is not initialized; call reset_population first")]
    UninitializedPopulation,

    /// A problem operation failed.
    #[error("problem definition error: {0}")]
    ProblemDefinition(#[from] ProblemError),
}

/// Result alias used throughout the engine.
pub type Result<T, E = GaError> = std::result::Result<T, E>;
