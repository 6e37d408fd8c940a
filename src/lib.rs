//! Domain-agnostic genetic algorithm engine.
//!
//! Evolves a population of candidate solutions toward higher fitness. The
//! engine is written against the [`ga::GaProblem`] trait: a problem says how
//! to draw a random chromosome, score it, combine two of them, and perturb
//! one. Everything else (population lifecycle, truncation selection with
//! elitism, reproduction, mutation, termination) lives in [`ga::GaSolver`].
//!
//! - [`ga`]: The engine, its configuration, errors, progress reporting and
//!   reusable operators.
//! - [`problems`]: Reference problem definitions (Mastermind code-breaking,
//!   travelling salesman routes).
//!
//! # Example
//!
//! ```
//! use u_evolve::ga::{GaConfig, GaSolver, Termination};
//! use u_evolve::problems::Mastermind;
//!
//! let problem = Mastermind::with_secret(vec![0, 3, 5, 1], 6).unwrap();
//! let threshold = problem.max_score();
//!
//! let mut solver = GaSolver::new(problem, GaConfig::default().with_seed(42)).unwrap();
//! solver.reset_population(50).unwrap();
//! let summary = solver.evolve_until(500, Some(threshold)).unwrap();
//!
//! let best = solver.get_best_individual().unwrap();
//! assert_eq!(summary.termination, Termination::ThresholdReached);
//! assert!(solver.problem().is_correct(best.chromosome()));
//! ```
//!
//! # Architecture
//!
//! The crate contains no problem-specific concepts in the engine. Runs are
//! single-threaded and reproducible from [`ga::GaConfig::seed`]; the solver
//! owns its random generator instead of sharing process-wide state.

pub mod ga;
pub mod problems;
