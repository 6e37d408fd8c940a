//! Genetic Algorithm engine.
//!
//! A generic, domain-agnostic GA built on one trait. Users define their
//! problem by implementing [`GaProblem`], which specifies how to generate,
//! evaluate, crossover, and mutate chromosomes. The engine never inspects
//! genes.
//!
//! # Key Types
//!
//! - [`Individual`]: A chromosome paired with its fitness (higher is better)
//! - [`GaProblem`]: Problem definition: generation, evaluation, operators
//! - [`GaConfig`]: Selection rate, mutation rate, seed
//! - [`GaSolver`]: Owns the population and runs the generational loop
//! - [`GenerationObserver`]: Receives a [`GenerationReport`] per generation
//! - [`GaError`] / [`ProblemError`]: Failure kinds
//!
//! # Generation
//!
//! Each generation sorts the population best-first, keeps the top
//! `floor(selection_rate × N)` individuals unchanged, refills with children
//! of two distinct random parents, and mutates each child with probability
//! `mutation_rate`.
//!
//! # Submodules
//!
//! - [`operators`]: Reusable splice, prefix-order, OX, point and swap operators
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod error;
mod observer;
pub mod operators;
mod solver;
mod types;

pub use config::GaConfig;
pub use error::{GaError, ProblemError, Result};
pub use observer::{GenerationObserver, GenerationReport, LogProgress};
pub use solver::{EvolutionSummary, GaSolver, Termination};
pub use types::{GaProblem, Individual};
